//! Yew components that render AG-UI chat transcripts and structured output

pub mod components;
pub mod styles;

pub use components::{
    AguiRenderer, ChatInput, DEFAULT_QUESTIONS, Greeting, MessageBubble, MessageList,
    SkeletonLoader,
};
