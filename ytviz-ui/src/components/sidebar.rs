//! Sidebar Component
//!
//! One button per dataset with a view. Always visible on wide screens,
//! slides in on narrow ones.

use leptos::*;
use ytviz::dataset::DatasetKey;

use crate::state::DashboardState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <aside class=move || {
            let base = "fixed inset-y-0 left-0 z-40 w-64 transform transition-transform \
                        duration-300 ease-in-out md:relative md:translate-x-0";
            if state.sidebar_open.get() {
                format!("{} translate-x-0", base)
            } else {
                format!("{} -translate-x-full", base)
            }
        }>
            <div class="h-full bg-gray-800/60 p-4">
                <div class="flex justify-end md:hidden">
                    <button
                        on:click=move |_| state.toggle_sidebar()
                        class="px-3 py-2 rounded-lg border border-gray-600 hover:bg-gray-700"
                        aria-label="Close menu"
                    >
                        "✕"
                    </button>
                </div>
                <nav class="space-y-2 mt-4">
                    {DatasetKey::WIRED
                        .into_iter()
                        .map(|dataset| view! { <DatasetButton dataset=dataset /> })
                        .collect_view()}
                </nav>
            </div>
        </aside>
    }
}

#[component]
fn DatasetButton(dataset: DatasetKey) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let is_active =
        create_memo(move |_| state.fetch.with(|fetch| fetch.selected == Some(dataset)));

    view! {
        <button
            on:click=move |_| state.select(dataset)
            class=move || {
                let base = "w-full flex items-center px-4 py-2 rounded-lg text-left transition-colors";
                if is_active.get() {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:bg-gray-700", base)
                }
            }
        >
            <span class="mr-2">{dataset_icon(dataset)}</span>
            {dataset.label()}
        </button>
    }
}

/// Get icon for a dataset
fn dataset_icon(key: DatasetKey) -> &'static str {
    match key {
        DatasetKey::WordFrequency => "📊",
        DatasetKey::SentimentDistribution => "🥧",
        DatasetKey::NamedEntities => "👥",
        DatasetKey::AverageSentiment => "🙂",
        DatasetKey::TopicModeling => "#",
        _ => "•",
    }
}
