//! HR FAQ mode switching
//!
//! The widget moves between an HR mode and the general assistant. Every
//! transition snapshots the outgoing mode's conversation to storage, mirrors
//! the new mode into the shared agent state, pushes that record to the agent
//! and restores whatever the destination mode left behind.

use crate::agent_state::{AgentState, ConversationEntry};
use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult};
use crate::faq::{ERROR_ANSWER, PENDING_ANSWER, determine_category};
use crate::storage::KeyValueStore;
use crate::store::SharedStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Hr,
    General,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::General => "general",
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::Hr => Self::General,
            Self::General => Self::Hr,
        }
    }

    pub const fn from_hr_flag(hr_mode: bool) -> Self {
        if hr_mode { Self::Hr } else { Self::General }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen shown by the widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Greeting,
    Conversation,
}

/// Local state of the FAQ widget
#[derive(Debug, Clone, PartialEq)]
pub struct FaqState {
    pub mode: Mode,
    pub previous_mode: Mode,
    pub view: View,
    pub last_answer: Option<String>,
    pub follow_up_questions: Vec<String>,
    pub conversation_history: Vec<ConversationEntry>,
}

impl FaqState {
    fn from_agent_state(state: &AgentState) -> Self {
        let mode = Mode::from_hr_flag(state.hr_mode);
        Self {
            mode,
            previous_mode: Mode::General,
            view: if state.hr_mode {
                View::Conversation
            } else {
                View::Greeting
            },
            last_answer: None,
            follow_up_questions: state.follow_up_suggestions.clone(),
            conversation_history: state.conversation_history.clone(),
        }
    }
}

/// Conversation context kept per mode
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_history: Option<Vec<ConversationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_state: Option<AgentState>,
}

impl ModeContext {
    /// Leniently read snapshot data field by field; unreadable fields count
    /// as absent without discarding the rest.
    pub fn from_value(data: &Value) -> Self {
        Self {
            conversation_history: context_field(data, "conversationHistory"),
            follow_up_questions: context_field(data, "followUpQuestions")
                .or_else(|| context_field(data, "followUpSuggestions")),
            last_answer: context_field(data, "lastAnswer"),
            agent_state: context_field(data, "agentState"),
        }
    }
}

fn context_field<T: DeserializeOwned>(data: &Value, key: &str) -> Option<T> {
    let value = data.get(key).filter(|value| !value.is_null())?;
    serde_json::from_value(value.clone())
        .map_err(|e| tracing::warn!(error = %e, field = key, "Ignoring unreadable context field"))
        .ok()
}

/// Stored form of a preserved context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextSnapshot {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub preserved: bool,
}

impl ContextSnapshot {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            timestamp: Some(Utc::now()),
            preserved: true,
        }
    }

    /// Usable data, if the snapshot was actually preserved
    fn into_data(self) -> Option<Value> {
        (self.preserved && !self.data.is_null()).then_some(self.data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RestoreStatus {
    Success,
    Error,
}

/// Result of an explicit context restore
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestoreReport {
    pub status: RestoreStatus,
    pub context: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    Switched(Mode),
    /// Another transition is still running
    Busy,
    Failed(CoreError),
}

/// How a clicked question reached the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskOutcome {
    /// Handed to the host chat surface
    Delegated,
    /// Recorded in shared state as a pending question
    Recorded,
    Failed,
}

/// Pushes the shared record to the agent
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait AgentStateSink {
    async fn push(&self, state: AgentState) -> CoreResult<()>;
}

/// Chat surface that can take a question on the widget's behalf
pub trait ChatHost {
    /// Returns `false` when the host cannot take the question right now.
    fn submit(&self, question: &str) -> bool;
}

type ModeListener = Rc<dyn Fn(Mode)>;

struct TransitionGuard<'a>(&'a Cell<bool>);

impl Drop for TransitionGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct ModeSwitcher<S> {
    config: AppConfig,
    storage: Rc<dyn KeyValueStore>,
    shared: SharedStore<AgentState>,
    sink: S,
    state: SharedStore<FaqState>,
    in_progress: Cell<bool>,
    host: RefCell<Option<Rc<dyn ChatHost>>>,
    on_mode_change: RefCell<Option<ModeListener>>,
}

impl<S: AgentStateSink> ModeSwitcher<S> {
    pub fn new(
        config: AppConfig,
        storage: Rc<dyn KeyValueStore>,
        shared: SharedStore<AgentState>,
        sink: S,
    ) -> Self {
        let state = shared.with(FaqState::from_agent_state);
        Self {
            config,
            storage,
            shared,
            sink,
            state: SharedStore::new(state),
            in_progress: Cell::new(false),
            host: RefCell::new(None),
            on_mode_change: RefCell::new(None),
        }
    }

    pub fn set_host(&self, host: Option<Rc<dyn ChatHost>>) {
        *self.host.borrow_mut() = host;
    }

    pub fn on_mode_change(&self, listener: impl Fn(Mode) + 'static) {
        *self.on_mode_change.borrow_mut() = Some(Rc::new(listener));
    }

    /// Widget state for rendering and subscriptions
    pub fn state(&self) -> SharedStore<FaqState> {
        self.state.clone()
    }

    pub fn shared(&self) -> SharedStore<AgentState> {
        self.shared.clone()
    }

    pub fn mode(&self) -> Mode {
        self.state.with(|state| state.mode)
    }

    pub fn is_transitioning(&self) -> bool {
        self.in_progress.get()
    }

    /// Follow-ups to display under the latest answer
    pub fn visible_follow_ups(&self) -> Vec<String> {
        self.state.with(|state| {
            state
                .follow_up_questions
                .iter()
                .take(self.config.max_follow_ups)
                .cloned()
                .collect()
        })
    }

    pub async fn toggle(&self) -> TransitionOutcome {
        let target = self.mode().other();
        self.switch_to(target).await
    }

    /// Move the widget to `target`, preserving the outgoing context.
    pub async fn switch_to(&self, target: Mode) -> TransitionOutcome {
        if self.in_progress.get() {
            tracing::debug!(%target, "Mode transition already in progress");
            return TransitionOutcome::Busy;
        }
        self.in_progress.set(true);
        let guard = TransitionGuard(&self.in_progress);

        let from = self.mode();
        tracing::debug!(%from, %target, "Switching mode");

        if let Err(e) = self.preserve_context(from, self.current_context()) {
            tracing::error!(error = %e, mode = %from, "Failed to preserve context");
            return TransitionOutcome::Failed(e);
        }

        let mut record = self.shared.get();
        record.hr_mode = target == Mode::Hr;
        if let Err(e) = self.sink.push(record).await {
            tracing::error!(error = %e, %target, "Failed to push agent state");
            return TransitionOutcome::Failed(e);
        }
        self.shared
            .update(|shared| shared.hr_mode = target == Mode::Hr);

        self.restore_on_entry(target);
        self.state.update(|state| {
            state.previous_mode = from;
            state.mode = target;
        });

        drop(guard);
        tracing::info!(%target, "Switched mode with context preservation");

        let listener = self.on_mode_change.borrow().clone();
        if let Some(listener) = listener {
            listener(target);
        }
        TransitionOutcome::Switched(target)
    }

    /// Store `data` as the preserved context of `mode`
    pub fn preserve_context(&self, mode: Mode, data: Value) -> CoreResult<()> {
        let raw = serde_json::to_string(&ContextSnapshot::new(data))?;
        self.storage.set(&self.config.context_key(mode.as_str()), &raw)?;
        tracing::debug!(%mode, "Context preserved");
        Ok(())
    }

    /// Load the preserved context of `mode` into the widget.
    ///
    /// History and follow-ups are applied; the current view is left alone.
    pub fn restore_context(&self, mode: Mode) -> RestoreReport {
        match self.read_snapshot(mode) {
            Ok(Some(data)) => {
                let context = ModeContext::from_value(&data);
                self.state.update(|state| {
                    if let Some(history) = context.conversation_history {
                        state.conversation_history = history;
                    }
                    if let Some(follow_ups) = context.follow_up_questions {
                        state.follow_up_questions = follow_ups;
                    }
                });
                tracing::info!(%mode, "Context restored");
                RestoreReport {
                    status: RestoreStatus::Success,
                    context: data,
                }
            }
            Ok(None) => {
                tracing::debug!(%mode, "No preserved context");
                RestoreReport {
                    status: RestoreStatus::Success,
                    context: json!({}),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, %mode, "Failed to restore context");
                RestoreReport {
                    status: RestoreStatus::Error,
                    context: json!({}),
                }
            }
        }
    }

    /// Route a clicked question to the host chat, or record it locally when
    /// no host takes it.
    pub async fn ask(&self, question: &str) -> AskOutcome {
        let question = question.trim();
        if !self.enter_hr().await {
            return AskOutcome::Failed;
        }

        let host = self.host.borrow().clone();
        if let Some(host) = host {
            if host.submit(question) {
                tracing::debug!(question, "Question handed to chat host");
                return AskOutcome::Delegated;
            }
            tracing::warn!("Chat host declined the question, recording it instead");
        }

        if self.submit_question(question).await {
            AskOutcome::Recorded
        } else {
            AskOutcome::Failed
        }
    }

    /// Record `question` as pending in shared and local history.
    pub async fn submit_question(&self, question: &str) -> bool {
        if !self.enter_hr().await {
            return false;
        }

        let category = determine_category(question);
        let entry = ConversationEntry {
            question: question.to_string(),
            answer: PENDING_ANSWER.to_string(),
            category: Some(category.to_string()),
            timestamp: Utc::now(),
        };

        self.shared.update(|shared| {
            shared.current_category = Some(category.to_string());
            shared.conversation_history.push(entry.clone());
        });
        self.state.update(|state| {
            state.view = View::Conversation;
            state.conversation_history.push(entry);
        });

        match self.sink.push(self.shared.get()).await {
            Ok(()) => {
                tracing::info!(question, category, "Question submitted to agent");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, question, "Failed to submit question");
                self.answer_pending(question, ERROR_ANSWER, None);
                false
            }
        }
    }

    /// Fill in the answer of a pending question and store its follow-ups.
    pub fn update_answer(&self, question: &str, answer: &str, follow_ups: &[String]) {
        let follow_ups: Vec<String> = follow_ups
            .iter()
            .take(self.config.max_follow_ups)
            .cloned()
            .collect();
        self.answer_pending(question, answer, Some(follow_ups));
    }

    pub fn back_to_greeting(&self) {
        self.state.update(|state| state.view = View::Greeting);
    }

    /// Make sure the widget is in HR mode before a question is taken.
    async fn enter_hr(&self) -> bool {
        if self.mode() == Mode::Hr {
            return true;
        }
        match self.switch_to(Mode::Hr).await {
            TransitionOutcome::Switched(_) => true,
            outcome => {
                tracing::warn!(?outcome, "Could not enter HR mode, dropping question");
                false
            }
        }
    }

    fn answer_pending(&self, question: &str, answer: &str, follow_ups: Option<Vec<String>>) {
        let fill = |history: &mut Vec<ConversationEntry>| {
            for entry in history
                .iter_mut()
                .filter(|entry| entry.question == question && entry.answer == PENDING_ANSWER)
            {
                entry.answer = answer.to_string();
            }
        };

        let shared_follow_ups = follow_ups.clone();
        self.shared.update(|shared| {
            fill(&mut shared.conversation_history);
            if let Some(follow_ups) = shared_follow_ups {
                shared.follow_up_suggestions = follow_ups;
            }
        });
        self.state.update(|state| {
            fill(&mut state.conversation_history);
            if let Some(follow_ups) = follow_ups {
                state.follow_up_questions = follow_ups;
                state.last_answer = Some(answer.to_string());
            }
        });
    }

    fn current_context(&self) -> Value {
        let context = self.state.with(|state| ModeContext {
            conversation_history: Some(state.conversation_history.clone()),
            follow_up_questions: Some(state.follow_up_questions.clone()),
            last_answer: state.last_answer.clone(),
            agent_state: Some(self.shared.get()),
        });
        serde_json::to_value(context).unwrap_or(Value::Null)
    }

    fn read_snapshot(&self, mode: Mode) -> CoreResult<Option<Value>> {
        let Some(raw) = self.storage.get(&self.config.context_key(mode.as_str()))? else {
            return Ok(None);
        };
        let snapshot: ContextSnapshot = serde_json::from_str(&raw)?;
        Ok(snapshot.into_data())
    }

    fn restore_on_entry(&self, target: Mode) {
        let context = match self.read_snapshot(target) {
            Ok(data) => data.map(|data| ModeContext::from_value(&data)),
            Err(e) => {
                tracing::error!(error = %e, mode = %target, "Ignoring malformed context snapshot");
                None
            }
        };
        let shared_has_history = self.shared.with(|shared| !shared.conversation_history.is_empty());

        self.state.update(|state| match (target, context) {
            (Mode::Hr, Some(context)) => {
                if let Some(history) = context.conversation_history {
                    state.view = if history.is_empty() {
                        View::Greeting
                    } else {
                        View::Conversation
                    };
                    state.conversation_history = history;
                }
                if let Some(follow_ups) = context.follow_up_questions {
                    state.follow_up_questions = follow_ups;
                }
            }
            (Mode::Hr, None) => {
                state.view = if shared_has_history {
                    View::Conversation
                } else {
                    View::Greeting
                };
            }
            (Mode::General, Some(context)) => {
                if let Some(history) = context.conversation_history {
                    state.conversation_history = history;
                    state.view = View::Greeting;
                }
            }
            (Mode::General, None) => state.view = View::Greeting,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn entry(question: &str, answer: &str) -> ConversationEntry {
        ConversationEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            category: None,
            timestamp: Utc::now(),
        }
    }

    fn accepting_sink() -> MockAgentStateSink {
        let mut sink = MockAgentStateSink::new();
        sink.expect_push().returning(|_| Ok(()));
        sink
    }

    fn build<S: AgentStateSink>(
        sink: S,
        initial: AgentState,
    ) -> (Rc<MemoryStore>, ModeSwitcher<S>) {
        let storage = Rc::new(MemoryStore::new());
        let switcher = ModeSwitcher::new(
            AppConfig::default(),
            storage.clone(),
            SharedStore::new(initial),
            sink,
        );
        (storage, switcher)
    }

    #[tokio::test]
    async fn test_switch_snapshots_outgoing_mode() {
        let (storage, switcher) = build(accepting_sink(), AgentState::default());
        switcher.state().update(|state| {
            state.conversation_history.push(entry("Q", "A"));
        });

        assert_eq!(
            switcher.switch_to(Mode::Hr).await,
            TransitionOutcome::Switched(Mode::Hr)
        );

        let raw = storage.get("hr-faq-context-general").unwrap().unwrap();
        let snapshot: ContextSnapshot = serde_json::from_str(&raw).unwrap();
        assert!(snapshot.preserved);
        assert!(snapshot.timestamp.is_some());
        assert_eq!(snapshot.data["conversationHistory"][0]["question"], "Q");
        assert!(switcher.shared().get().hr_mode);
        assert_eq!(switcher.mode(), Mode::Hr);
        assert_eq!(switcher.state().get().previous_mode, Mode::General);
    }

    #[tokio::test]
    async fn test_push_carries_new_mode_and_keeps_other_fields() {
        let mut sink = MockAgentStateSink::new();
        sink.expect_push()
            .times(1)
            .withf(|state| state.hr_mode && state.proverbs == vec!["keep".to_string()])
            .returning(|_| Ok(()));

        let initial = AgentState {
            proverbs: vec!["keep".to_string()],
            ..AgentState::default()
        };
        let (_, switcher) = build(sink, initial);
        switcher.toggle().await;
    }

    struct YieldingSink {
        pushes: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl AgentStateSink for YieldingSink {
        async fn push(&self, _state: AgentState) -> CoreResult<()> {
            self.pushes.set(self.pushes.get() + 1);
            tokio::task::yield_now().await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_double_toggle_runs_one_transition() {
        let (_, switcher) = build(
            YieldingSink {
                pushes: Cell::new(0),
            },
            AgentState::default(),
        );

        let changes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&changes);
        switcher.on_mode_change(move |_| counter.set(counter.get() + 1));

        let (first, second) = futures::join!(switcher.toggle(), switcher.toggle());

        assert_eq!(first, TransitionOutcome::Switched(Mode::Hr));
        assert_eq!(second, TransitionOutcome::Busy);
        assert_eq!(switcher.sink.pushes.get(), 1);
        assert_eq!(changes.get(), 1);
        assert_eq!(switcher.mode(), Mode::Hr);
        assert!(!switcher.is_transitioning());
    }

    #[tokio::test]
    async fn test_failed_push_clears_transition_flag() {
        let mut sink = MockAgentStateSink::new();
        sink.expect_push()
            .times(2)
            .returning(|_| Err(CoreError::transport("offline")));
        let (_, switcher) = build(sink, AgentState::default());

        assert!(matches!(
            switcher.toggle().await,
            TransitionOutcome::Failed(_)
        ));
        assert!(!switcher.is_transitioning());
        assert_eq!(switcher.mode(), Mode::General);
        assert!(!switcher.shared().get().hr_mode);
        assert_eq!(switcher.state().get().view, View::Greeting);

        // The next request is not blocked.
        assert!(matches!(
            switcher.toggle().await,
            TransitionOutcome::Failed(_)
        ));
    }

    #[tokio::test]
    async fn test_entering_hr_restores_snapshot() {
        let (_, switcher) = build(accepting_sink(), AgentState::default());
        switcher
            .preserve_context(
                Mode::Hr,
                json!({
                    "conversationHistory": [{
                        "question": "我的年假還剩多少天？",
                        "answer": "10 天",
                        "timestamp": "2024-05-01T08:00:00Z"
                    }],
                    "followUpQuestions": ["如何請假？"]
                }),
            )
            .unwrap();

        switcher.switch_to(Mode::Hr).await;
        let state = switcher.state().get();
        assert_eq!(state.view, View::Conversation);
        assert_eq!(state.conversation_history[0].answer, "10 天");
        assert_eq!(state.follow_up_questions, vec!["如何請假？"]);
    }

    #[tokio::test]
    async fn test_entering_hr_with_empty_history_shows_greeting() {
        let (_, switcher) = build(accepting_sink(), AgentState::default());
        switcher
            .preserve_context(Mode::Hr, json!({"conversationHistory": []}))
            .unwrap();
        switcher.state().update(|state| state.view = View::Conversation);

        switcher.switch_to(Mode::Hr).await;
        assert_eq!(switcher.state().get().view, View::Greeting);
    }

    #[tokio::test]
    async fn test_entering_hr_without_snapshot_follows_shared_history() {
        let initial = AgentState {
            conversation_history: vec![entry("Q", "A")],
            ..AgentState::default()
        };
        let (_, switcher) = build(accepting_sink(), initial);
        switcher.switch_to(Mode::Hr).await;
        assert_eq!(switcher.state().get().view, View::Conversation);

        let (_, switcher) = switcher_fresh();
        switcher.switch_to(Mode::Hr).await;
        assert_eq!(switcher.state().get().view, View::Greeting);
    }

    fn switcher_fresh() -> (Rc<MemoryStore>, ModeSwitcher<MockAgentStateSink>) {
        build(accepting_sink(), AgentState::default())
    }

    #[tokio::test]
    async fn test_entering_general_always_shows_greeting() {
        let initial = AgentState {
            hr_mode: true,
            ..AgentState::default()
        };
        let (_, switcher) = build(accepting_sink(), initial);
        assert_eq!(switcher.state().get().view, View::Conversation);

        switcher
            .preserve_context(
                Mode::General,
                json!({"conversationHistory": [{
                    "question": "hi",
                    "answer": "hello",
                    "timestamp": "2024-05-01T08:00:00Z"
                }]}),
            )
            .unwrap();

        switcher.switch_to(Mode::General).await;
        let state = switcher.state().get();
        assert_eq!(state.view, View::Greeting);
        assert_eq!(state.conversation_history[0].question, "hi");
        assert!(!switcher.shared().get().hr_mode);
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_treated_as_absent() {
        let initial = AgentState {
            conversation_history: vec![entry("Q", "A")],
            ..AgentState::default()
        };
        let (storage, switcher) = build(accepting_sink(), initial);
        storage.set("hr-faq-context-hr", "{broken").unwrap();

        assert_eq!(
            switcher.switch_to(Mode::Hr).await,
            TransitionOutcome::Switched(Mode::Hr)
        );
        assert_eq!(switcher.state().get().view, View::Conversation);
        assert_eq!(switcher.restore_context(Mode::Hr).status, RestoreStatus::Error);
    }

    #[tokio::test]
    async fn test_unpreserved_snapshot_is_treated_as_absent() {
        let (storage, switcher) = switcher_fresh();
        storage
            .set(
                "hr-faq-context-hr",
                r#"{"data": {"conversationHistory": []}, "preserved": false}"#,
            )
            .unwrap();
        let report = switcher.restore_context(Mode::Hr);
        assert_eq!(report.status, RestoreStatus::Success);
        assert_eq!(report.context, json!({}));

        storage
            .set("hr-faq-context-hr", r#"{"data": null, "preserved": true}"#)
            .unwrap();
        assert_eq!(switcher.restore_context(Mode::Hr).context, json!({}));
    }

    #[test]
    fn test_restore_context_reads_legacy_follow_up_key() {
        let (_, switcher) = switcher_fresh();
        let data = json!({"followUpSuggestions": ["a", "b", "c"]});
        switcher.preserve_context(Mode::General, data.clone()).unwrap();

        let report = switcher.restore_context(Mode::General);
        assert_eq!(report.status, RestoreStatus::Success);
        assert_eq!(report.context, data);
        assert_eq!(switcher.state().get().follow_up_questions.len(), 3);
        assert_eq!(switcher.visible_follow_ups(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_submit_question_records_pending_entry() {
        let (_, switcher) = switcher_fresh();
        assert!(switcher.submit_question("我的年假還剩多少天？").await);

        assert_eq!(switcher.mode(), Mode::Hr);
        let shared = switcher.shared().get();
        assert!(shared.hr_mode);
        assert_eq!(shared.current_category.as_deref(), Some("benefits"));
        assert_eq!(shared.conversation_history[0].answer, PENDING_ANSWER);

        let state = switcher.state().get();
        assert_eq!(state.view, View::Conversation);
        assert_eq!(state.conversation_history.len(), 1);
    }

    #[tokio::test]
    async fn test_question_during_transition_is_dropped() {
        let (_, switcher) = build(
            YieldingSink {
                pushes: Cell::new(0),
            },
            AgentState::default(),
        );

        let (switched, submitted) =
            futures::join!(switcher.toggle(), switcher.submit_question("加班費是如何計算的？"));

        assert_eq!(switched, TransitionOutcome::Switched(Mode::Hr));
        assert!(!submitted);
        assert_eq!(switcher.sink.pushes.get(), 1);
        assert!(switcher.shared().get().conversation_history.is_empty());
        assert!(switcher.state().get().conversation_history.is_empty());
    }

    #[tokio::test]
    async fn test_question_after_failed_switch_is_dropped() {
        let mut sink = MockAgentStateSink::new();
        sink.expect_push()
            .returning(|_| Err(CoreError::transport("offline")));
        let (_, switcher) = build(sink, AgentState::default());
        let host = Rc::new(Host {
            accept: true,
            seen: RefCell::new(Vec::new()),
        });
        switcher.set_host(Some(host.clone()));

        assert_eq!(switcher.ask("如何申請內部轉職？").await, AskOutcome::Failed);
        assert!(host.seen.borrow().is_empty());

        assert!(!switcher.submit_question("如何申請內部轉職？").await);
        let shared = switcher.shared().get();
        assert!(!shared.hr_mode);
        assert!(shared.current_category.is_none());
        assert!(shared.conversation_history.is_empty());
        assert_eq!(switcher.mode(), Mode::General);
        assert_eq!(switcher.state().get().view, View::Greeting);
    }

    #[test]
    fn test_context_fields_are_read_independently() {
        let context = ModeContext::from_value(&json!({
            "conversationHistory": [{"question": "Q", "answer": "A"}],
            "followUpQuestions": ["new"],
            "followUpSuggestions": ["old"],
            "lastAnswer": 42
        }));

        let history = context.conversation_history.unwrap();
        assert_eq!(history[0].question, "Q");
        assert_eq!(context.follow_up_questions, Some(vec!["new".to_string()]));
        assert_eq!(context.last_answer, None);
    }

    #[tokio::test]
    async fn test_update_answer_fills_pending_entry() {
        let (_, switcher) = switcher_fresh();
        switcher.submit_question("加班費是如何計算的？").await;

        let follow_ups = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        switcher.update_answer("加班費是如何計算的？", "1.34 倍", &follow_ups);

        let shared = switcher.shared().get();
        assert_eq!(shared.conversation_history[0].answer, "1.34 倍");
        assert_eq!(shared.follow_up_suggestions, vec!["a", "b"]);

        let state = switcher.state().get();
        assert_eq!(state.conversation_history[0].answer, "1.34 倍");
        assert_eq!(state.last_answer.as_deref(), Some("1.34 倍"));
        assert_eq!(state.follow_up_questions, vec!["a", "b"]);
    }

    struct Host {
        accept: bool,
        seen: RefCell<Vec<String>>,
    }

    impl ChatHost for Host {
        fn submit(&self, question: &str) -> bool {
            self.seen.borrow_mut().push(question.to_string());
            self.accept
        }
    }

    #[tokio::test]
    async fn test_ask_prefers_host() {
        let (_, switcher) = switcher_fresh();
        let host = Rc::new(Host {
            accept: true,
            seen: RefCell::new(Vec::new()),
        });
        switcher.set_host(Some(host.clone()));

        assert_eq!(switcher.ask("  公司有哪些培訓課程？ ").await, AskOutcome::Delegated);
        assert_eq!(*host.seen.borrow(), vec!["公司有哪些培訓課程？"]);
        assert_eq!(switcher.mode(), Mode::Hr);
        assert!(switcher.shared().get().conversation_history.is_empty());
    }

    #[tokio::test]
    async fn test_ask_falls_back_when_host_declines() {
        let (_, switcher) = switcher_fresh();
        switcher.set_host(Some(Rc::new(Host {
            accept: false,
            seen: RefCell::new(Vec::new()),
        })));

        assert_eq!(switcher.ask("如何申請內部轉職？").await, AskOutcome::Recorded);
        assert_eq!(
            switcher.shared().get().current_category.as_deref(),
            Some("career")
        );
    }

    #[tokio::test]
    async fn test_back_to_greeting() {
        let (_, switcher) = switcher_fresh();
        switcher.submit_question("Q").await;
        switcher.back_to_greeting();
        assert_eq!(switcher.state().get().view, View::Greeting);
        assert_eq!(switcher.state().get().conversation_history.len(), 1);
    }
}
