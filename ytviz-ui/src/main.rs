//! YTube Data Visualizer
//!
//! Browser dashboard for precomputed YouTube transcript analytics, built
//! with Leptos (WASM).
//!
//! # Features
//!
//! - Word frequency bar chart and sentiment pie chart on canvas
//! - Named entity and average sentiment tables
//! - Topic list
//! - Collapsible dataset sidebar
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. Endpoint addresses,
//! payload decoding, fetch state transitions and the choice of view all
//! come from the `ytviz` core crate; this crate only draws.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
