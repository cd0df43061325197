//! Card Component
//!
//! Titled container every view is drawn in.

use leptos::*;

#[component]
pub fn Card(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700">
            <div class="p-6 pb-2">
                <h2 class="text-xl font-semibold">{title}</h2>
                <p class="text-sm text-gray-400 mt-1">{description}</p>
            </div>
            <div class="p-6 pt-2">
                {children()}
            </div>
        </div>
    }
}
