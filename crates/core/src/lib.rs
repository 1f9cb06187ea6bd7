//! AG-UI core types and front-end logic

pub mod agent_state;
pub mod config;
pub mod error;
pub mod extract;
pub mod faq;
pub mod markdown;
pub mod message;
pub mod mode;
pub mod render;
pub mod session;
pub mod storage;
pub mod store;
pub mod theme;
pub mod types;

pub use agent_state::{AgentState, ConversationEntry};
pub use config::AppConfig;
pub use error::{CoreError, CoreResult};
pub use extract::extract_text;
pub use message::{ChatMessage, ChatRequest, HistoryEntry, Role};
pub use mode::{AgentStateSink, ChatHost, Mode, ModeSwitcher, TransitionOutcome};
pub use render::{ComponentView, Rendered, RenderedComponent, render_components};
pub use session::{ChatSession, ChatState, ChatTransport, SendOutcome};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::SharedStore;
pub use theme::{AccentColor, ThemeConfig, ThemeStore};
pub use types::{AguiComponent, AguiResponse, ComponentType, InfoVariant};
