//! About Page

use leptos::*;
use ytviz::dataset::DatasetKey;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-8 space-y-6 max-w-3xl">
            <div>
                <h1 class="text-3xl font-bold">"About"</h1>
                <p class="text-gray-400 mt-1">"YTube Data Visualizer"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 space-y-4 text-gray-300">
                <p>
                    "The dashboard shows text analytics computed over a corpus of YouTube video \
                     transcripts. The analysis runs elsewhere; this page only fetches the \
                     finished results and draws them."
                </p>
                <p>"Pick a dataset from the sidebar on the home page:"</p>
                <ul class="list-disc list-inside">
                    {DatasetKey::WIRED
                        .into_iter()
                        .map(|key| view! { <li>{key.label()}</li> })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
