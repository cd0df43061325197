//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod about;
pub mod api_docs;

pub use dashboard::Dashboard;
pub use about::About;
pub use api_docs::ApiDocs;
