//! Theme provider component

use super::context::{ThemeAction, ThemeContext, update_document_theme};
use crate::services::theme_store;
use agui_core::ThemeConfig;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(|| {
        let config = theme_store().load();
        update_document_theme(config.theme());
        ThemeContext { config }
    });

    // Follow the system preference until the user picks a theme
    {
        let theme = theme.clone();
        use_effect_with((), move |()| {
            if !theme_store().has_saved_theme() && prefers_dark() {
                tracing::debug!("Applying system dark mode preference");
                theme.dispatch(ThemeAction::Set(ThemeConfig {
                    is_dark_mode: true,
                    ..theme.config
                }));
            }
            || ()
        });
    }

    html! {
        <ContextProvider<UseReducerHandle<ThemeContext>> context={theme}>
            { props.children.clone() }
        </ContextProvider<UseReducerHandle<ThemeContext>>>
    }
}
