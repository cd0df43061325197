//! Datasets
//!
//! The closed set of analytics datasets the service publishes, where each
//! one lives, and the typed shape of each response.
//!
//! ## Architecture
//!
//! - **DatasetKey**: identifier for one analytics result
//! - **EndpointRegistry**: dataset key → absolute URL, built once
//! - **Payload**: decoded and validated response, tagged by dataset

mod key;
mod payload;
mod registry;

pub use key::DatasetKey;
pub use payload::{
    AverageSentiment, EntityCount, NamedEntity, Payload, SentimentDistribution, SentimentShare,
    WordCount,
};
pub(crate) use payload::TOPIC_SEPARATOR;
pub use registry::{EndpointRegistry, DEFAULT_API_BASE};
