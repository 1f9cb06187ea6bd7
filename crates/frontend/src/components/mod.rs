mod chat_panel;
mod hr_faq;
mod settings_modal;
mod structured_output_preview;

pub use chat_panel::ChatPanel;
pub use hr_faq::HrFaq;
pub use settings_modal::SettingsModal;
pub use structured_output_preview::StructuredOutputPreview;
