//! Dashboard State
//!
//! Reactive wrapper around [`FetchState`]. Every write goes through
//! `FetchState::begin` and `FetchState::commit`, so a response that arrives
//! after a newer selection is dropped here just as it is natively.

use leptos::*;
use ytviz::dataset::{DatasetKey, EndpointRegistry};
use ytviz::state::FetchState;

use crate::api;

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Selection, loading flag and payload
    pub fetch: RwSignal<FetchState>,
    /// Endpoint addresses for the configured service
    pub registry: RwSignal<EndpointRegistry>,
    /// Sidebar visibility on narrow screens
    pub sidebar_open: RwSignal<bool>,
    /// Time the last request settled
    pub last_updated: RwSignal<Option<chrono::DateTime<chrono::Local>>>,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    let state = DashboardState {
        fetch: create_rw_signal(FetchState::default()),
        registry: create_rw_signal(api::current_registry()),
        sidebar_open: create_rw_signal(false),
        last_updated: create_rw_signal(None),
    };

    provide_context(state);
}

impl DashboardState {
    /// Select `key` and fetch it in the background
    pub fn select(&self, key: DatasetKey) {
        let Some(ticket) = self.fetch.try_update(|state| state.begin(key)) else {
            return;
        };
        let registry = self.registry.get_untracked();
        let fetch = self.fetch;
        let last_updated = self.last_updated;

        spawn_local(async move {
            let result = api::fetch_dataset(&registry, key).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Error fetching {}: {}", key, e).into());
            }

            // Leave superseded responses without notifying anyone
            if !fetch.with_untracked(|state| state.is_current(&ticket)) {
                web_sys::console::debug_1(&format!("Discarded stale response for {}", key).into());
                return;
            }

            fetch.update(|state| {
                state.commit(&ticket, result);
            });
            last_updated.set(Some(chrono::Local::now()));
        });
    }

    /// Switch to another service; the current dataset is dropped
    pub fn set_api_base(&self, url: &str) {
        api::set_api_base(url);
        self.registry.set(api::current_registry());
        self.fetch.update(FetchState::clear);
    }

    /// Go back to the default service
    pub fn reset_api_base(&self) {
        api::reset_api_base();
        self.registry.set(api::current_registry());
        self.fetch.update(FetchState::clear);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}
