//! State Management
//!
//! Dashboard state shared through Leptos context.

pub mod dashboard;

pub use dashboard::{provide_dashboard_state, DashboardState};
