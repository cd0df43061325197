//! # YTViz
//!
//! Dashboard for precomputed YouTube transcript analytics. An external
//! service publishes word frequencies, sentiment, named entities and topics
//! as JSON; this crate fetches one dataset per selection and turns it into
//! a chart or table.
//!
//! ## Modules
//!
//! - [`dataset`]: Dataset keys, endpoint registry, typed payloads
//! - [`state`]: Fetch state and its transitions
//! - [`render`]: Render selector and view models
//! - [`dispatcher`]: Background fetching with stale-response protection
//! - [`client`]: HTTP client for the analytics service
//! - [`shell`]: Interactive terminal dashboard
//!
//! Only `dataset`, `state`, `render` and `error` are built without the
//! `native` feature; the browser front end reuses them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ytviz::client::{AnalyticsClient, ClientConfig};
//! use ytviz::dataset::DatasetKey;
//! use ytviz::dispatcher::Dispatcher;
//! use ytviz::render::{render, View};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalyticsClient::new(ClientConfig::default())?;
//!     let dispatcher = Dispatcher::new(Arc::new(client));
//!
//!     dispatcher.select(DatasetKey::WordFrequency).await?;
//!
//!     if let View::WordFrequency(chart) = render(&dispatcher.snapshot()) {
//!         for bar in chart.bars {
//!             println!("{}: {}", bar.label, bar.value);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod dataset;
pub mod error;
pub mod render;
pub mod state;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod dispatcher;
#[cfg(feature = "native")]
pub mod shell;

// Re-export top-level types for convenience
pub use dataset::{DatasetKey, EndpointRegistry, Payload, DEFAULT_API_BASE};
pub use error::{DecodeError, FetchError, FetchResult};
pub use render::{render, View};
pub use state::{Commit, FetchState, Ticket};

#[cfg(feature = "native")]
pub use client::{AnalyticsClient, ClientConfig};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
#[cfg(feature = "native")]
pub use dispatcher::{DatasetSource, Dispatcher};
