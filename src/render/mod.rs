//! Render Selector
//!
//! Pure mapping from a [`FetchState`] snapshot to the one view that should
//! be on screen.

pub mod views;

#[cfg(feature = "native")]
pub mod text;

pub use views::{Bar, BarChart, PieChart, Slice, Table, Topic, TopicList, PALETTE};

use serde::Serialize;

use crate::dataset::Payload;
use crate::state::FetchState;

/// Placeholder shown before any dataset has loaded
pub const EMPTY_MESSAGE: &str = "Select an API endpoint to visualize data";

/// What the main content area shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum View {
    /// Request in flight
    Loading,
    /// Nothing selected yet, or the last request failed
    Empty,
    /// Dataset without a view
    Blank,
    WordFrequency(BarChart),
    SentimentDistribution(PieChart),
    NamedEntities(Table),
    AverageSentiment(Table),
    TopicModeling(TopicList),
}

/// Pick the view for the current state
pub fn render(state: &FetchState) -> View {
    if state.loading {
        return View::Loading;
    }

    let Some(payload) = &state.payload else {
        return View::Empty;
    };

    if state.selected != Some(payload.key()) {
        return View::Blank;
    }

    match payload {
        Payload::WordFrequency(words) => View::WordFrequency(views::word_frequency(words)),
        Payload::SentimentDistribution(dist) => {
            View::SentimentDistribution(views::sentiment_distribution(dist))
        }
        Payload::NamedEntities(entities) => View::NamedEntities(views::named_entities(entities)),
        Payload::AverageSentiment(scores) => {
            View::AverageSentiment(views::average_sentiment(scores))
        }
        Payload::TopicModeling(topics) => View::TopicModeling(views::topic_modeling(topics)),
        Payload::Unrendered { .. } => View::Blank,
    }
}

impl View {
    /// Title of the card holding this view, if it has one
    pub fn title(&self) -> Option<&'static str> {
        match self {
            View::WordFrequency(chart) => Some(chart.title),
            View::SentimentDistribution(chart) => Some(chart.title),
            View::NamedEntities(table) | View::AverageSentiment(table) => Some(table.title),
            View::TopicModeling(list) => Some(list.title),
            View::Loading | View::Empty | View::Blank => None,
        }
    }
}
