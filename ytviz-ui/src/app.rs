//! App Root Component
//!
//! Main application component with routing and the dashboard state.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{About, ApiDocs, Dashboard};
use crate::state::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <div class="flex flex-1 flex-col">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/about" view=About />
                        <Route path="/api-docs" view=ApiDocs />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </div>

                <Footer />
            </div>
        </Router>
    }
}

const FOOTER_LINKS: [&str; 3] = ["Twitter", "GitHub", "LinkedIn"];

/// Footer component showing when data last arrived
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <footer class="border-t border-gray-700 py-6 px-6 md:px-8">
            <div class="container mx-auto flex flex-col items-center justify-between gap-4 md:flex-row text-sm">
                <p class="text-gray-400">"© Data Visualization Dashboard. All rights reserved."</p>

                <div class="flex items-center space-x-4">
                    {FOOTER_LINKS
                        .into_iter()
                        .map(|label| view! {
                            <a href="#" class="text-gray-400 hover:text-white">{label}</a>
                        })
                        .collect_view()}
                </div>

                <div class="text-gray-400">
                    {move || {
                        state.last_updated.get()
                            .map(|dt| format!("Last updated: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not loaded".to_string())
                    }}
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_links() {
        assert_eq!(FOOTER_LINKS, ["Twitter", "GitHub", "LinkedIn"]);
    }
}
