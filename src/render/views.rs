//! Presentational views
//!
//! Stateless mapping of each payload shape to a chart or table model. The
//! models are plain data so the terminal and the browser can draw them
//! the same way.

use serde::Serialize;

use crate::dataset::{
    AverageSentiment, EntityCount, SentimentDistribution, WordCount, TOPIC_SEPARATOR,
};

/// Slice colors, cycled by entry index
pub const PALETTE: [&str; 3] = ["#0088FE", "#00C49F", "#FFBB28"];

/// Bar chart: category axis = label, value axis = value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub description: &'static str,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Pie chart with one slice per entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: &'static str,
    pub description: &'static str,
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

impl PieChart {
    /// Sum of all slice values
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Table of preformatted cells. `headers` is empty for key/value tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: &'static str,
    pub description: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Numbered list of topics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicList {
    pub title: &'static str,
    pub description: &'static str,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub heading: String,
    pub text: String,
}

/// One bar per pair, in input order
pub fn word_frequency(words: &[WordCount]) -> BarChart {
    BarChart {
        title: "Word Frequency",
        description: "Top 20 most frequent words",
        bars: words
            .iter()
            .map(|w| Bar {
                label: w.word.clone(),
                value: w.count,
            })
            .collect(),
    }
}

/// One slice per entry, colored by position
pub fn sentiment_distribution(dist: &SentimentDistribution) -> PieChart {
    PieChart {
        title: "Sentiment Distribution",
        description: "Distribution of positive, negative, and neutral sentiments",
        slices: dist
            .0
            .iter()
            .enumerate()
            .map(|(idx, share)| Slice {
                label: share.label.clone(),
                value: share.value,
                color: PALETTE[idx % PALETTE.len()],
            })
            .collect(),
    }
}

/// Entity | Label | Count
pub fn named_entities(entities: &[EntityCount]) -> Table {
    Table {
        title: "Named Entities",
        description: "Top named entities, their labels, and counts",
        headers: vec!["Entity", "Label", "Count"],
        rows: entities
            .iter()
            .map(|e| {
                vec![
                    e.entity.text.clone(),
                    e.entity.label.clone(),
                    format_count(e.count),
                ]
            })
            .collect(),
    }
}

/// Four fixed rows, two decimals each
pub fn average_sentiment(scores: &AverageSentiment) -> Table {
    let row = |name: &str, value: f64| vec![name.to_string(), format_score(value)];

    Table {
        title: "Average Sentiment",
        description: "Overall sentiment scores",
        headers: Vec::new(),
        rows: vec![
            row("Negative", scores.neg),
            row("Neutral", scores.neu),
            row("Positive", scores.pos),
            row("Compound", scores.compound),
        ],
    }
}

/// Heading from position, text after the first `": "`
pub fn topic_modeling(topics: &[String]) -> TopicList {
    TopicList {
        title: "Topic Modeling",
        description: "Top topics and their key words",
        topics: topics
            .iter()
            .enumerate()
            .map(|(idx, topic)| Topic {
                heading: format!("Topic {}", idx + 1),
                text: topic
                    .split_once(TOPIC_SEPARATOR)
                    .map(|(_, words)| words.to_string())
                    .unwrap_or_default(),
            })
            .collect(),
    }
}

/// Integral counts print without a fractional part
pub(crate) fn format_count(value: f64) -> String {
    value.to_string()
}

/// Fixed two decimals; negative zero prints as `0.00`
pub(crate) fn format_score(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}", value)
}
