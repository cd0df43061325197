//! Loading Component

use leptos::*;

/// Spinner filling the content area
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-full min-h-[50vh]">
            <div class="loading-spinner w-32 h-32" />
        </div>
    }
}
