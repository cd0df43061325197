//! Navigation Component
//!
//! Header bar with brand, page links and the sidebar toggle.

use leptos::*;
use leptos_router::*;

use crate::state::DashboardState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <header class="sticky top-0 z-50 w-full bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center h-14">
                    <div class="mr-4 hidden md:flex items-center">
                        // Logo and brand
                        <A href="/" class="mr-6 flex items-center space-x-2">
                            <span class="text-2xl">"📊"</span>
                            <span class="font-bold text-white">"YTube Data Visualizer"</span>
                        </A>

                        // Navigation links
                        <div class="flex items-center space-x-1 text-sm">
                            <NavLink href="/" label="Home" />
                            <NavLink href="/about" label="About" />
                            <NavLink href="/api-docs" label="API Documentation" />
                        </div>
                    </div>

                    // Sidebar toggle, narrow screens only
                    <button
                        on:click=move |_| state.toggle_sidebar()
                        class="mr-2 md:hidden px-3 py-2 rounded-lg border border-gray-600 hover:bg-gray-700"
                        aria-label="Toggle menu"
                    >
                        "☰"
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
