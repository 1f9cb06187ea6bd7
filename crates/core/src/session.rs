//! Chat session controller
//!
//! Owns the transcript and the loading flag. The network round-trip goes
//! through [`ChatTransport`] so the controller runs the same way in the
//! browser and in native tests.

use crate::error::{CoreError, CoreResult};
use crate::message::{ChatMessage, ChatRequest};
use crate::store::{SharedStore, Subscription};
use async_trait::async_trait;
use serde_json::Value;

/// Sends a chat request to the agent and returns its raw JSON reply
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send(&self, request: ChatRequest) -> CoreResult<Value>;
}

/// Observable state of a session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
    pub last_error: Option<CoreError>,
}

/// What happened to a `send_message` call
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Blank input, nothing sent
    Ignored,
    /// A request is already in flight
    Busy,
    /// The reply was appended
    Sent,
    /// The request failed; the transcript keeps only the user message
    Failed(CoreError),
}

pub struct ChatSession<T> {
    transport: T,
    state: SharedStore<ChatState>,
}

/// Clears the loading flag when the request future completes or is dropped
struct LoadingGuard<'a> {
    state: &'a SharedStore<ChatState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.update(|state| state.is_loading = false);
    }
}

impl<T: ChatTransport> ChatSession<T> {
    pub fn new(transport: T) -> Self {
        Self::with_store(transport, SharedStore::default())
    }

    /// Create a session that publishes into an existing store
    pub fn with_store(transport: T, state: SharedStore<ChatState>) -> Self {
        Self { transport, state }
    }

    pub fn store(&self) -> SharedStore<ChatState> {
        self.state.clone()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.with(|state| state.messages.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|state| state.is_loading)
    }

    /// Error of the most recent failed send, cleared by the next send
    pub fn last_error(&self) -> Option<CoreError> {
        self.state.with(|state| state.last_error.clone())
    }

    pub fn subscribe(&self, listener: impl Fn(&ChatState) + 'static) -> Subscription {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.state.unsubscribe(subscription);
    }

    /// Drop the whole transcript
    pub fn clear(&self) {
        self.state.update(|state| {
            state.messages.clear();
            state.last_error = None;
        });
        tracing::debug!("Cleared chat transcript");
    }

    /// Send one user message and append the agent's reply.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Ignored;
        }
        if self.is_loading() {
            tracing::warn!("Ignoring send while a request is in flight");
            return SendOutcome::Busy;
        }

        let request = self
            .state
            .with(|state| ChatRequest::new(text, &state.messages));

        self.state.update(|state| {
            state.messages.push(ChatMessage::user(text));
            state.is_loading = true;
            state.last_error = None;
        });
        let _loading = LoadingGuard { state: &self.state };

        tracing::debug!(history = request.history.len(), "Sending chat message");

        match self.transport.send(request).await {
            Ok(data) => {
                self.state
                    .update(|state| state.messages.push(ChatMessage::model(data)));
                tracing::info!("Received agent reply");
                SendOutcome::Sent
            }
            Err(e) => {
                tracing::error!(error = %e, "Chat request failed");
                self.state
                    .update(|state| state.last_error = Some(e.clone()));
                SendOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_blank_input_sends_nothing() {
        let mut transport = MockChatTransport::new();
        transport.expect_send().never();
        let session = ChatSession::new(transport);

        assert_eq!(session.send_message("").await, SendOutcome::Ignored);
        assert_eq!(session.send_message("   \n\t").await, SendOutcome::Ignored);
        assert!(session.messages().is_empty());
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_hello_round_trip() {
        let store = SharedStore::<ChatState>::default();
        let observed = store.clone();

        let mut transport = MockChatTransport::new();
        transport
            .expect_send()
            .times(1)
            .withf(|request| request.message == "hello" && request.history.is_empty())
            .returning_st(move |_| {
                // The user message is visible while the request is in flight.
                observed.with(|state| {
                    assert_eq!(state.messages.len(), 1);
                    assert!(state.is_loading);
                });
                Ok(json!({"components": [{"type": "markdown", "content": "hi"}]}))
            });

        let session = ChatSession::with_store(transport, store);
        assert_eq!(session.send_message("hello").await, SendOutcome::Sent);

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content.as_deref(), Some("hello"));
        assert_eq!(messages[1].role, Role::Model);
        assert_eq!(messages[1].response().components.len(), 1);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_history_covers_prior_messages() {
        let mut transport = MockChatTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(json!({"components": []})));
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|request| {
                request.history.len() == 2
                    && request.history[0].parts[0].text == "first"
                    && request.history[1].role == Role::Model
                    && request.history[1].parts[0].text == r#"{"components":[]}"#
            })
            .returning(|_| Ok(json!({"components": []})));

        let session = ChatSession::new(transport);
        session.send_message("first").await;
        assert_eq!(session.send_message("second").await, SendOutcome::Sent);
        assert_eq!(session.messages().len(), 4);
    }

    #[tokio::test]
    async fn test_failure_keeps_user_message_only() {
        let mut transport = MockChatTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(CoreError::transport("connection refused")));

        let session = ChatSession::new(transport);
        let outcome = session.send_message("hello").await;

        assert!(matches!(outcome, SendOutcome::Failed(CoreError::Transport { .. })));
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_loading());
        assert!(session.last_error().is_some());
    }

    struct YieldingTransport {
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl ChatTransport for YieldingTransport {
        async fn send(&self, _request: ChatRequest) -> CoreResult<Value> {
            self.calls.set(self.calls.get() + 1);
            tokio::task::yield_now().await;
            Ok(json!({"components": []}))
        }
    }

    #[tokio::test]
    async fn test_send_while_loading_is_busy() {
        let session = ChatSession::new(YieldingTransport {
            calls: Cell::new(0),
        });

        let (first, second) =
            futures::join!(session.send_message("one"), session.send_message("two"));

        assert_eq!(first, SendOutcome::Sent);
        assert_eq!(second, SendOutcome::Busy);
        assert_eq!(session.transport.calls.get(), 1);
        assert_eq!(session.messages().len(), 2);
    }

    #[tokio::test]
    async fn test_subscribers_and_clear() {
        let mut transport = MockChatTransport::new();
        transport
            .expect_send()
            .returning(|_| Ok(json!({"components": []})));
        let session = ChatSession::new(transport);

        let notifications = Rc::new(Cell::new(0));
        let counter = Rc::clone(&notifications);
        let subscription = session.subscribe(move |_| counter.set(counter.get() + 1));

        session.send_message("hello").await;
        assert!(notifications.get() >= 3);

        session.unsubscribe(subscription);
        session.clear();
        assert!(session.messages().is_empty());
    }
}
