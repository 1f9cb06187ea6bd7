//! Theme management module

mod context;
mod provider;

pub use context::{ThemeAction, ThemeContext};
pub use provider::ThemeProvider;

use agui_core::AccentColor;
use yew::prelude::*;

/// Hook to access theme context
#[hook]
pub fn use_theme() -> UseReducerHandle<ThemeContext> {
    use_context::<UseReducerHandle<ThemeContext>>()
        .expect("Theme context not found. Make sure to wrap your app with ThemeProvider")
}

#[hook]
pub fn use_accent() -> AccentColor {
    use_theme().config.accent_color
}
