//! Dataset keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FetchError;

/// Identifier selecting which analytics result to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatasetKey {
    WordFrequency,
    WordCloud,
    SentimentDistribution,
    NamedEntities,
    AverageSentiment,
    TopicModeling,
    TimeSeries,
    RawData,
    SummaryStatistics,
}

impl DatasetKey {
    /// Every registered dataset, in registry order
    pub const ALL: [DatasetKey; 9] = [
        DatasetKey::WordFrequency,
        DatasetKey::WordCloud,
        DatasetKey::SentimentDistribution,
        DatasetKey::NamedEntities,
        DatasetKey::AverageSentiment,
        DatasetKey::TopicModeling,
        DatasetKey::TimeSeries,
        DatasetKey::RawData,
        DatasetKey::SummaryStatistics,
    ];

    /// Datasets reachable from the sidebar, in sidebar order
    pub const WIRED: [DatasetKey; 5] = [
        DatasetKey::WordFrequency,
        DatasetKey::SentimentDistribution,
        DatasetKey::NamedEntities,
        DatasetKey::AverageSentiment,
        DatasetKey::TopicModeling,
    ];

    /// Wire name used by the dashboard (camelCase)
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKey::WordFrequency => "wordFrequency",
            DatasetKey::WordCloud => "wordCloud",
            DatasetKey::SentimentDistribution => "sentimentDistribution",
            DatasetKey::NamedEntities => "namedEntities",
            DatasetKey::AverageSentiment => "averageSentiment",
            DatasetKey::TopicModeling => "topicModeling",
            DatasetKey::TimeSeries => "timeSeries",
            DatasetKey::RawData => "rawData",
            DatasetKey::SummaryStatistics => "summaryStatistics",
        }
    }

    /// Path of the endpoint serving this dataset.
    ///
    /// `WordCloud` shares the word frequency endpoint.
    pub fn path(&self) -> &'static str {
        match self {
            DatasetKey::WordFrequency | DatasetKey::WordCloud => "/api/word-frequency",
            DatasetKey::SentimentDistribution => "/api/sentiment-distribution",
            DatasetKey::NamedEntities => "/api/named-entities",
            DatasetKey::AverageSentiment => "/api/average-sentiment",
            DatasetKey::TopicModeling => "/api/topic-modeling",
            DatasetKey::TimeSeries => "/api/time-series",
            DatasetKey::RawData => "/api/raw-data",
            DatasetKey::SummaryStatistics => "/api/summary-statistics",
        }
    }

    /// Human-readable label for menus
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKey::WordFrequency => "Word Frequency",
            DatasetKey::WordCloud => "Word Cloud",
            DatasetKey::SentimentDistribution => "Sentiment Distribution",
            DatasetKey::NamedEntities => "Named Entities",
            DatasetKey::AverageSentiment => "Average Sentiment",
            DatasetKey::TopicModeling => "Topic Modeling",
            DatasetKey::TimeSeries => "Time Series",
            DatasetKey::RawData => "Raw Data",
            DatasetKey::SummaryStatistics => "Summary Statistics",
        }
    }

    /// Whether a user-facing action selects this dataset
    pub fn is_wired(&self) -> bool {
        Self::WIRED.contains(self)
    }

    /// Position in [`DatasetKey::ALL`]
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKey {
    type Err = FetchError;

    /// Accepts the camelCase wire name or the kebab-case endpoint name
    /// (`word-frequency`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s || key.kebab_name() == s)
            .ok_or_else(|| FetchError::UnknownDataset(s.to_string()))
    }
}

impl DatasetKey {
    fn kebab_name(&self) -> &'static str {
        match self {
            DatasetKey::WordCloud => "word-cloud",
            other => other.path().trim_start_matches("/api/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_matches_index() {
        for (i, key) in DatasetKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_parse_wire_and_kebab_names() {
        assert_eq!(
            "wordFrequency".parse::<DatasetKey>().unwrap(),
            DatasetKey::WordFrequency
        );
        assert_eq!(
            "sentiment-distribution".parse::<DatasetKey>().unwrap(),
            DatasetKey::SentimentDistribution
        );
        assert_eq!(
            "word-cloud".parse::<DatasetKey>().unwrap(),
            DatasetKey::WordCloud
        );
        assert!(matches!(
            "wordcount".parse::<DatasetKey>(),
            Err(FetchError::UnknownDataset(name)) if name == "wordcount"
        ));
    }

    #[test]
    fn test_wired_subset() {
        assert!(DatasetKey::TopicModeling.is_wired());
        assert!(!DatasetKey::WordCloud.is_wired());
        assert!(!DatasetKey::SummaryStatistics.is_wired());
        assert_eq!(DatasetKey::ALL.iter().filter(|k| k.is_wired()).count(), 5);
    }

    #[test]
    fn test_word_cloud_aliases_word_frequency() {
        assert_eq!(DatasetKey::WordCloud.path(), DatasetKey::WordFrequency.path());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&DatasetKey::NamedEntities).unwrap();
        assert_eq!(json, "\"namedEntities\"");
    }
}
