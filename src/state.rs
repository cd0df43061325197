//! Fetch State
//!
//! The single record describing the dashboard's current request. It is
//! changed only through [`FetchState::begin`] and [`FetchState::commit`];
//! everything else reads snapshots.
//!
//! Each `begin` hands out a [`Ticket`] stamped with a generation number.
//! A result is committed only if its ticket belongs to the most recent
//! selection, so a slow response for a superseded selection can never
//! overwrite a newer one.

use crate::dataset::{DatasetKey, Payload};
use crate::error::FetchError;

/// Loading flag, selected dataset and its payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    /// A request for `selected` is in flight
    pub loading: bool,
    /// Dataset chosen by the user, if any
    pub selected: Option<DatasetKey>,
    /// Payload of the settled request
    pub payload: Option<Payload>,
    /// Why the last settled request produced no payload
    pub last_error: Option<String>,
    generation: u64,
}

/// Proof of which selection a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    key: DatasetKey,
    generation: u64,
}

impl Ticket {
    /// Ticket no state ever considers current; `begin` replaces it
    pub(crate) fn unissued(key: DatasetKey) -> Self {
        Self { key, generation: 0 }
    }

    /// Dataset the request was issued for
    pub fn key(&self) -> DatasetKey {
        self.key
    }

    /// Selection counter at the time of the request
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of [`FetchState::commit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The result is now the displayed state
    Applied,
    /// A newer selection exists; the result was dropped
    Stale,
}

impl FetchState {
    /// Start a request for `key`, superseding any request in flight
    pub fn begin(&mut self, key: DatasetKey) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.selected = Some(key);
        self.payload = None;
        self.last_error = None;

        Ticket {
            key,
            generation: self.generation,
        }
    }

    /// Settle the request identified by `ticket`.
    ///
    /// Results of superseded requests are discarded without touching the
    /// state. Failures leave no payload behind.
    pub fn commit(&mut self, ticket: &Ticket, result: Result<Payload, FetchError>) -> Commit {
        if !self.is_current(ticket) {
            return Commit::Stale;
        }

        self.loading = false;
        match result {
            Ok(payload) => {
                self.payload = Some(payload);
                self.last_error = None;
            }
            Err(e) => {
                self.payload = None;
                self.last_error = Some(e.to_string());
            }
        }

        Commit::Applied
    }

    /// Whether `ticket` belongs to the latest selection
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation && self.selected == Some(ticket.key)
    }

    /// Forget the selection. Requests in flight become stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.selected = None;
        self.payload = None;
        self.last_error = None;
    }

    /// Number of selections made so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A selection exists and its request has finished
    pub fn is_settled(&self) -> bool {
        self.selected.is_some() && !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::WordCount;

    fn words() -> Payload {
        Payload::WordFrequency(vec![WordCount {
            word: "the".into(),
            count: 120.0,
        }])
    }

    #[test]
    fn test_initial_state() {
        let state = FetchState::default();
        assert!(!state.loading);
        assert!(state.selected.is_none());
        assert!(state.payload.is_none());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_begin_then_commit() {
        let mut state = FetchState::default();
        let ticket = state.begin(DatasetKey::WordFrequency);
        assert!(state.loading);
        assert_eq!(state.selected, Some(DatasetKey::WordFrequency));
        assert_eq!(ticket.key(), DatasetKey::WordFrequency);

        assert_eq!(state.commit(&ticket, Ok(words())), Commit::Applied);
        assert!(!state.loading);
        assert!(state.is_settled());
        assert_eq!(state.payload, Some(words()));
    }

    #[test]
    fn test_failure_leaves_no_payload() {
        let mut state = FetchState::default();
        let ticket = state.begin(DatasetKey::NamedEntities);
        let err = FetchError::Transport {
            url: "http://127.0.0.1:5328/api/named-entities".into(),
            message: "connection refused".into(),
        };

        assert_eq!(state.commit(&ticket, Err(err)), Commit::Applied);
        assert!(!state.loading);
        assert!(state.payload.is_none());
        assert!(state.last_error.as_deref().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_superseded_result_is_discarded() {
        let mut state = FetchState::default();
        let first = state.begin(DatasetKey::WordFrequency);
        let second = state.begin(DatasetKey::TopicModeling);

        // First response arrives late
        assert_eq!(state.commit(&first, Ok(words())), Commit::Stale);
        assert!(state.loading);
        assert!(state.payload.is_none());
        assert_eq!(state.selected, Some(DatasetKey::TopicModeling));

        let topics = Payload::TopicModeling(vec!["Topic 1: fish".into()]);
        assert_eq!(state.commit(&second, Ok(topics.clone())), Commit::Applied);
        assert_eq!(state.payload, Some(topics));
    }

    #[test]
    fn test_reselecting_same_key_supersedes() {
        let mut state = FetchState::default();
        let first = state.begin(DatasetKey::WordFrequency);
        let second = state.begin(DatasetKey::WordFrequency);

        assert!(!state.is_current(&first));
        assert!(state.is_current(&second));
        assert_eq!(state.commit(&first, Ok(words())), Commit::Stale);
        assert!(state.loading);
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let mut state = FetchState::default();
        let ticket = state.begin(DatasetKey::WordFrequency);
        state.commit(&ticket, Ok(words()));

        state.begin(DatasetKey::AverageSentiment);
        assert!(state.payload.is_none());
        assert!(state.last_error.is_none());
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_clear_invalidates_in_flight() {
        let mut state = FetchState::default();
        let ticket = state.begin(DatasetKey::WordFrequency);

        state.clear();
        assert!(!state.loading);
        assert!(state.selected.is_none());
        assert_eq!(state.commit(&ticket, Ok(words())), Commit::Stale);
        assert!(state.payload.is_none());
    }

    #[test]
    fn test_unissued_ticket_is_never_current() {
        let mut state = FetchState::default();
        let unissued = Ticket::unissued(DatasetKey::WordFrequency);
        assert!(!state.is_current(&unissued));

        state.begin(DatasetKey::WordFrequency);
        assert!(!state.is_current(&unissued));
        assert_eq!(state.commit(&unissued, Ok(words())), Commit::Stale);
        assert!(state.loading);
    }
}
