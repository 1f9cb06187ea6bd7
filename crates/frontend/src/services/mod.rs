pub mod agent;
pub mod storage;

pub use agent::{LocalStateSink, SessionHost, build_client};
pub use storage::{local_store, theme_store};
