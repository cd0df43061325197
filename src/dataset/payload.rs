//! Typed response payloads
//!
//! Each wired dataset has exactly one payload shape. Responses are decoded
//! and validated here, at the boundary, so the views never see a body whose
//! shape does not match its dataset.

use serde::de::{DeserializeOwned, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::DatasetKey;
use crate::error::DecodeError;

/// Separator between the topic label and its key words
pub(crate) const TOPIC_SEPARATOR: &str = ": ";

/// One `[word, count]` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: f64,
}

/// One `label → proportion` entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentShare {
    pub label: String,
    pub value: f64,
}

/// Sentiment proportions in response order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SentimentDistribution(pub Vec<SentimentShare>);

/// `[text, label]` of a recognized entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub text: String,
    pub label: String,
}

/// `[[text, label], count]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCount {
    pub entity: NamedEntity,
    pub count: f64,
}

/// Mean VADER-style sentiment scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageSentiment {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// A decoded response, tagged by the dataset it belongs to
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    WordFrequency(Vec<WordCount>),
    SentimentDistribution(SentimentDistribution),
    NamedEntities(Vec<EntityCount>),
    AverageSentiment(AverageSentiment),
    TopicModeling(Vec<String>),
    /// Body of a dataset no view is wired to; kept as plain JSON
    Unrendered {
        key: DatasetKey,
        body: serde_json::Value,
    },
}

impl Payload {
    /// Decode and validate a response body for `key`.
    ///
    /// A body that is not JSON at all is [`DecodeError::Malformed`]; JSON
    /// that does not fit the dataset's shape is [`DecodeError::Shape`].
    pub fn decode(key: DatasetKey, body: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice::<IgnoredAny>(body).map_err(DecodeError::Malformed)?;

        let payload = match key {
            DatasetKey::WordFrequency => Payload::WordFrequency(typed(key, body)?),
            DatasetKey::SentimentDistribution => {
                Payload::SentimentDistribution(typed(key, body)?)
            }
            DatasetKey::NamedEntities => Payload::NamedEntities(typed(key, body)?),
            DatasetKey::AverageSentiment => Payload::AverageSentiment(typed(key, body)?),
            DatasetKey::TopicModeling => {
                let topics: Vec<String> = typed(key, body)?;
                if let Some(topic) = topics.iter().find(|t| !t.contains(TOPIC_SEPARATOR)) {
                    return Err(DecodeError::Shape {
                        key,
                        reason: format!("topic {:?} has no {:?} separator", topic, TOPIC_SEPARATOR),
                    });
                }
                Payload::TopicModeling(topics)
            }
            DatasetKey::WordCloud
            | DatasetKey::TimeSeries
            | DatasetKey::RawData
            | DatasetKey::SummaryStatistics => Payload::Unrendered {
                key,
                body: serde_json::from_slice(body).map_err(DecodeError::Malformed)?,
            },
        };

        Ok(payload)
    }

    /// Dataset this payload was decoded for
    pub fn key(&self) -> DatasetKey {
        match self {
            Payload::WordFrequency(_) => DatasetKey::WordFrequency,
            Payload::SentimentDistribution(_) => DatasetKey::SentimentDistribution,
            Payload::NamedEntities(_) => DatasetKey::NamedEntities,
            Payload::AverageSentiment(_) => DatasetKey::AverageSentiment,
            Payload::TopicModeling(_) => DatasetKey::TopicModeling,
            Payload::Unrendered { key, .. } => *key,
        }
    }
}

fn typed<T: DeserializeOwned>(key: DatasetKey, body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(|e| DecodeError::Shape {
        key,
        reason: e.to_string(),
    })
}

// A JSON object decoded straight into a Vec keeps the service's key order,
// which a map type would not.
impl<'de> Deserialize<'de> for SentimentDistribution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SharesVisitor;

        impl<'de> Visitor<'de> for SharesVisitor {
            type Value = SentimentDistribution;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of sentiment label to proportion")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut shares = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, value)) = map.next_entry::<String, f64>()? {
                    shares.push(SentimentShare { label, value });
                }
                Ok(SentimentDistribution(shares))
            }
        }

        deserializer.deserialize_map(SharesVisitor)
    }
}
