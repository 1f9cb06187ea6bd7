//! Theme context definition

use crate::services::theme_store;
use agui_core::theme::Theme;
use agui_core::{AccentColor, ThemeConfig};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ThemeContext {
    pub config: ThemeConfig,
}

pub enum ThemeAction {
    Set(ThemeConfig),
    ToggleDark,
    SetAccent(AccentColor),
}

impl Reducible for ThemeContext {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let config = match action {
            ThemeAction::Set(config) => config,
            ThemeAction::ToggleDark => self.config.toggled(),
            ThemeAction::SetAccent(color) => self.config.with_accent(color),
        };

        if let Err(e) = theme_store().save(&config) {
            tracing::error!(error = %e, "Failed to save theme settings");
        }
        update_document_theme(config.theme());

        Rc::new(Self { config })
    }
}

/// Mirror the theme onto the `dark` class of the document root
pub fn update_document_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let class_list = root.class_list();
    let result = if theme.is_dark() {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    if let Err(e) = result {
        tracing::warn!(error = ?e, "Failed to update document theme class");
    }
}
