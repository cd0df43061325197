//! Dashboard Page
//!
//! Dataset sidebar next to the content area.

use leptos::*;

use crate::components::{Content, Sidebar};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="flex flex-1">
            <Sidebar />
            <main class="flex-1 p-6 overflow-auto">
                <Content />
            </main>
        </div>
    }
}
