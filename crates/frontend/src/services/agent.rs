//! Agent endpoint wiring

use agui_core::mode::AgentStateSink;
use agui_core::{AgentState, AppConfig, ChatHost, ChatSession, CoreResult};
use agui_http::client::DEFAULT_CHAT_PATH;
use agui_http::{AgentClient, ClientError};
use async_trait::async_trait;
use std::rc::Rc;

/// Split a configured endpoint into base URL and path.
///
/// Relative endpoints are resolved against `origin`.
pub fn split_endpoint(api_url: &str, origin: &str) -> (String, String) {
    let Some(scheme_end) = api_url.find("://") else {
        return (origin.to_string(), api_url.to_string());
    };
    let host_start = scheme_end + 3;
    match api_url[host_start..].find('/') {
        Some(slash) => {
            let (base, path) = api_url.split_at(host_start + slash);
            (base.to_string(), path.to_string())
        }
        None => (api_url.to_string(), DEFAULT_CHAT_PATH.to_string()),
    }
}

/// Client for the configured chat endpoint
pub fn build_client(config: &AppConfig) -> Result<AgentClient, ClientError> {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    let (base_url, chat_path) = split_endpoint(&config.api_url, &origin);
    tracing::debug!(%base_url, %chat_path, "Resolved chat endpoint");

    AgentClient::builder()
        .base_url(base_url)
        .chat_path(chat_path)
        .timeout(config.request_timeout())
        .build()
}

/// Agent state sink for the standalone app.
///
/// There is no co-agent runtime in the browser, so pushes are only traced.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStateSink;

#[async_trait(?Send)]
impl AgentStateSink for LocalStateSink {
    async fn push(&self, state: AgentState) -> CoreResult<()> {
        tracing::debug!(
            hr_mode = state.hr_mode,
            category = ?state.current_category,
            history = state.conversation_history.len(),
            "Agent state pushed"
        );
        Ok(())
    }
}

/// Hands FAQ questions to the chat session
pub struct SessionHost {
    session: Rc<ChatSession<AgentClient>>,
}

impl SessionHost {
    pub fn new(session: Rc<ChatSession<AgentClient>>) -> Self {
        Self { session }
    }
}

impl ChatHost for SessionHost {
    fn submit(&self, question: &str) -> bool {
        if self.session.is_loading() {
            return false;
        }
        let session = Rc::clone(&self.session);
        let question = question.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = session.send_message(&question).await;
            tracing::debug!(?outcome, "FAQ question sent through chat");
        });
        true
    }
}
