//! API Client
//!
//! HTTP access to the analytics service.

pub mod client;

pub use client::*;
