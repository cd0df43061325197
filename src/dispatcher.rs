//! Fetch Dispatcher
//!
//! Runs one task per dataset selection and publishes the resulting
//! [`FetchState`] through a `watch` channel. Readers only ever see
//! snapshots; the dispatcher is the single writer.
//!
//! Superseded requests are not cancelled. Their results are dropped by
//! [`FetchState::commit`] when they arrive.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::dataset::{DatasetKey, Payload};
use crate::error::FetchResult;
use crate::state::{Commit, FetchState, Ticket};

/// Anything that can produce a dataset payload
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch, decode and validate one dataset
    async fn fetch(&self, key: DatasetKey) -> FetchResult<Payload>;
}

/// Owner of the dashboard's fetch state
pub struct Dispatcher {
    source: Arc<dyn DatasetSource>,
    state: Arc<watch::Sender<FetchState>>,
}

impl Dispatcher {
    /// Create a dispatcher with an empty state
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        let (state, _) = watch::channel(FetchState::default());

        Self {
            source,
            state: Arc::new(state),
        }
    }

    /// Select `key`: mark it loading and fetch it in the background.
    ///
    /// The returned handle resolves once the result has been committed or
    /// discarded as stale.
    pub fn select(&self, key: DatasetKey) -> JoinHandle<Commit> {
        let mut ticket = Ticket::unissued(key);
        self.state.send_modify(|state| ticket = state.begin(key));

        tracing::debug!(
            dataset = %key,
            generation = ticket.generation(),
            "Dispatching dataset request"
        );

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let result = source.fetch(key).await;
            if let Err(e) = &result {
                tracing::warn!(dataset = %key, error = %e, "Dataset fetch failed");
            }

            let mut outcome = Commit::Stale;
            state.send_if_modified(|state| {
                outcome = state.commit(&ticket, result);
                outcome == Commit::Applied
            });

            if outcome == Commit::Stale {
                tracing::debug!(
                    dataset = %key,
                    generation = ticket.generation(),
                    "Discarded superseded response"
                );
            }

            outcome
        })
    }

    /// Select a dataset by its wire or endpoint name
    pub fn select_named(&self, name: &str) -> FetchResult<JoinHandle<Commit>> {
        let key: DatasetKey = name.parse()?;
        Ok(self.select(key))
    }

    /// Fetch the current selection again, if there is one
    pub fn reload(&self) -> Option<JoinHandle<Commit>> {
        let selected = self.state.borrow().selected;
        selected.map(|key| self.select(key))
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::WordCount;
    use crate::error::FetchError;
    use crate::render::{render, View};
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    type Reply = oneshot::Receiver<FetchResult<Payload>>;

    /// Source whose responses are released by the test
    #[derive(Default)]
    struct ManualSource {
        pending: Mutex<HashMap<DatasetKey, VecDeque<Reply>>>,
    }

    impl ManualSource {
        fn expect(&self, key: DatasetKey) -> oneshot::Sender<FetchResult<Payload>> {
            let (tx, rx) = oneshot::channel();
            self.pending
                .lock()
                .unwrap()
                .entry(key)
                .or_default()
                .push_back(rx);
            tx
        }
    }

    #[async_trait]
    impl DatasetSource for ManualSource {
        async fn fetch(&self, key: DatasetKey) -> FetchResult<Payload> {
            let reply = self
                .pending
                .lock()
                .unwrap()
                .get_mut(&key)
                .and_then(|queue| queue.pop_front());
            match reply {
                Some(rx) => rx.await.unwrap_or_else(|_| {
                    Err(FetchError::Transport {
                        url: key.path().to_string(),
                        message: "reply dropped".to_string(),
                    })
                }),
                None => Err(FetchError::UnknownDataset(key.to_string())),
            }
        }
    }

    fn words(word: &str) -> Payload {
        Payload::WordFrequency(vec![WordCount {
            word: word.to_string(),
            count: 1.0,
        }])
    }

    #[tokio::test]
    async fn test_select_commits_payload() {
        let source = Arc::new(ManualSource::default());
        let reply = source.expect(DatasetKey::WordFrequency);
        let dispatcher = Dispatcher::new(source);

        let handle = dispatcher.select(DatasetKey::WordFrequency);
        assert!(dispatcher.snapshot().loading);
        assert_eq!(render(&dispatcher.snapshot()), View::Loading);

        reply.send(Ok(words("the"))).unwrap();
        assert_eq!(handle.await.unwrap(), Commit::Applied);

        let state = dispatcher.snapshot();
        assert!(!state.loading);
        assert_eq!(state.payload, Some(words("the")));
        assert!(matches!(render(&state), View::WordFrequency(_)));
    }

    #[tokio::test]
    async fn test_latest_selection_wins() {
        let source = Arc::new(ManualSource::default());
        let slow = source.expect(DatasetKey::WordFrequency);
        let fast = source.expect(DatasetKey::TopicModeling);
        let dispatcher = Dispatcher::new(source);

        let first = dispatcher.select(DatasetKey::WordFrequency);
        let second = dispatcher.select(DatasetKey::TopicModeling);

        let topics = Payload::TopicModeling(vec!["Topic 1: fish, ocean, tide".into()]);
        fast.send(Ok(topics.clone())).unwrap();
        assert_eq!(second.await.unwrap(), Commit::Applied);

        // The superseded response lands afterwards and must be ignored
        slow.send(Ok(words("late"))).unwrap();
        assert_eq!(first.await.unwrap(), Commit::Stale);

        let state = dispatcher.snapshot();
        assert_eq!(state.selected, Some(DatasetKey::TopicModeling));
        assert_eq!(state.payload, Some(topics));
    }

    #[tokio::test]
    async fn test_stale_result_does_not_end_loading() {
        let source = Arc::new(ManualSource::default());
        let older = source.expect(DatasetKey::WordFrequency);
        let newer = source.expect(DatasetKey::WordFrequency);
        let dispatcher = Dispatcher::new(source);

        let first = dispatcher.select(DatasetKey::WordFrequency);
        let second = dispatcher.select(DatasetKey::WordFrequency);

        older.send(Ok(words("old"))).unwrap();
        assert_eq!(first.await.unwrap(), Commit::Stale);
        assert!(dispatcher.snapshot().loading);

        newer.send(Ok(words("new"))).unwrap();
        assert_eq!(second.await.unwrap(), Commit::Applied);
        assert_eq!(dispatcher.snapshot().payload, Some(words("new")));
    }

    #[tokio::test]
    async fn test_failure_shows_empty_state() {
        let source = Arc::new(ManualSource::default());
        let reply = source.expect(DatasetKey::NamedEntities);
        let dispatcher = Dispatcher::new(source);

        let handle = dispatcher.select(DatasetKey::NamedEntities);
        reply
            .send(Err(FetchError::Transport {
                url: "http://127.0.0.1:5328/api/named-entities".into(),
                message: "connection refused".into(),
            }))
            .unwrap();
        assert_eq!(handle.await.unwrap(), Commit::Applied);

        let state = dispatcher.snapshot();
        assert!(!state.loading);
        assert!(state.last_error.is_some());
        assert_eq!(render(&state), View::Empty);
    }

    #[tokio::test]
    async fn test_subscribers_see_transitions() {
        let source = Arc::new(ManualSource::default());
        let reply = source.expect(DatasetKey::AverageSentiment);
        let dispatcher = Dispatcher::new(source);
        let mut rx = dispatcher.subscribe();

        let handle = dispatcher.select(DatasetKey::AverageSentiment);
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().loading);

        reply.send(Err(FetchError::Timeout { url: "x".into() })).unwrap();
        handle.await.unwrap();
        rx.changed().await.unwrap();
        assert!(!rx.borrow_and_update().loading);
    }

    #[tokio::test]
    async fn test_select_named_and_reload() {
        let source = Arc::new(ManualSource::default());
        let first = source.expect(DatasetKey::SentimentDistribution);
        let second = source.expect(DatasetKey::SentimentDistribution);
        let dispatcher = Dispatcher::new(source);

        assert!(dispatcher.reload().is_none());
        assert!(dispatcher.select_named("sentimentCount").is_err());

        let handle = dispatcher.select_named("sentiment-distribution").unwrap();
        first.send(Err(FetchError::Timeout { url: "x".into() })).unwrap();
        handle.await.unwrap();

        let handle = dispatcher.reload().unwrap();
        assert_eq!(dispatcher.snapshot().generation(), 2);
        second.send(Err(FetchError::Timeout { url: "x".into() })).unwrap();
        assert_eq!(handle.await.unwrap(), Commit::Applied);
    }
}
