mod agui_renderer;
mod blocks;
mod chat_input;
mod greeting;
pub mod icons;
mod message;
mod message_list;
mod skeleton_loader;

pub use agui_renderer::AguiRenderer;
pub use blocks::{DataListBlock, InfoCardBlock, MarkdownBlock, StepProcessBlock, TableBlock};
pub use chat_input::ChatInput;
pub use greeting::{DEFAULT_QUESTIONS, Greeting};
pub use message::{MessageBubble, SuggestionChips};
pub use message_list::MessageList;
pub use skeleton_loader::SkeletonLoader;
