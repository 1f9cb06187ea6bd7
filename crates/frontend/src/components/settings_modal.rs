use crate::app::use_services;
use crate::theme::{ThemeAction, use_theme};
use agui_chat_ui::components::icons::{
    CheckIcon, MoonIcon, RefreshIcon, SettingsIcon, SunIcon, TrashIcon, XIcon,
};
use agui_chat_ui::styles::{MUTED_TEXT, PRIMARY_TEXT, accent, combine_styles};
use agui_core::AccentColor;
use agui_core::theme::sample_palette;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SettingsModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn shuffled_palette(size: usize) -> Vec<AccentColor> {
    sample_palette(&mut rand::thread_rng(), size)
}

#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    let services = use_services();
    let theme = use_theme();
    let palette_size = services.config.palette_size;
    let palette = use_state(Vec::<AccentColor>::new);

    // Reshuffle every time the modal opens
    {
        let palette = palette.clone();
        use_effect_with(props.is_open, move |is_open| {
            if *is_open {
                palette.set(shuffled_palette(palette_size));
            }
            || ()
        });
    }

    if !props.is_open {
        return html! {};
    }

    let config = theme.config;
    let color = config.accent_color;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let toggle_dark = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.dispatch(ThemeAction::ToggleDark))
    };
    let refresh = {
        let palette = palette.clone();
        Callback::from(move |_: MouseEvent| palette.set(shuffled_palette(palette_size)))
    };
    let clear_chat = {
        let session = services.session.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            session.clear();
            on_close.emit(());
        })
    };

    let switch_track = if config.is_dark_mode {
        accent(color, "bg", 600)
    } else {
        "bg-slate-200".to_string()
    };
    let knob_offset = if config.is_dark_mode {
        "translate-x-7"
    } else {
        "translate-x-1"
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black/60 backdrop-blur-sm transition-opacity" onclick={close.clone()} />

            <div class="relative w-full max-w-md bg-white dark:bg-app-card rounded-2xl shadow-xl border border-slate-200 dark:border-app-border overflow-hidden animate-fadeIn">
                <div class="px-6 py-4 border-b border-slate-100 dark:border-app-border flex justify-between items-center bg-slate-50/50 dark:bg-zinc-800/50">
                    <h3 class={combine_styles(&["font-bold text-lg flex items-center gap-2", PRIMARY_TEXT])}>
                        <SettingsIcon class={classes!("w-5", "h-5", "text-slate-500")} />
                        {"外觀設定"}
                    </h3>
                    <button
                        type="button"
                        onclick={close.clone()}
                        class="p-1 rounded-full hover:bg-slate-100 dark:hover:bg-zinc-700 text-slate-500 dark:text-slate-400 transition-colors"
                        aria-label="Close settings"
                    >
                        <XIcon class={classes!("w-5", "h-5")} />
                    </button>
                </div>

                <div class="p-6 space-y-8">
                    <div class="flex items-center justify-between">
                        <div>
                            <div class={combine_styles(&["font-medium mb-1", PRIMARY_TEXT])}>{"深色模式"}</div>
                            <div class={combine_styles(&["text-sm", MUTED_TEXT])}>{"切換應用程式的明暗主題"}</div>
                        </div>
                        <button
                            type="button"
                            onclick={toggle_dark}
                            class={combine_styles(&["relative inline-flex h-8 w-14 items-center rounded-full transition-colors focus:outline-none", &switch_track])}
                            aria-label="Toggle dark mode"
                        >
                            <span class={combine_styles(&["relative inline-block h-6 w-6 transform rounded-full bg-white shadow transition-transform", knob_offset])}>
                                if config.is_dark_mode {
                                    <MoonIcon class={classes!("w-3.5", "h-3.5", "absolute", "top-1.5", "left-1.5", accent(color, "text", 600))} />
                                } else {
                                    <SunIcon class={classes!("w-3.5", "h-3.5", "absolute", "top-1.5", "left-1.5", "text-amber-500")} />
                                }
                            </span>
                        </button>
                    </div>

                    <div>
                        <div class="flex items-center justify-between mb-3">
                            <div class={combine_styles(&["font-medium", PRIMARY_TEXT])}>{"主題顏色"}</div>
                            <button
                                type="button"
                                onclick={refresh}
                                class="text-xs flex items-center gap-1 text-slate-500 hover:text-slate-800 dark:text-slate-400 dark:hover:text-slate-200 transition-colors"
                            >
                                <RefreshIcon class={classes!("w-3", "h-3")} />
                                {"隨機更換"}
                            </button>
                        </div>
                        <div class="grid grid-cols-6 gap-3">
                            {for palette.iter().map(|&option| {
                                let selected = option == color;
                                let onclick = {
                                    let theme = theme.clone();
                                    Callback::from(move |_: MouseEvent| theme.dispatch(ThemeAction::SetAccent(option)))
                                };
                                let ring = if selected { accent(option, "ring", 600) } else { String::new() };
                                html! {
                                    <button
                                        key={option.name()}
                                        type="button"
                                        {onclick}
                                        class={combine_styles(&[
                                            "w-10 h-10 rounded-full flex items-center justify-center transition-all hover:scale-110 shadow-sm ring-offset-2 dark:ring-offset-zinc-900",
                                            &accent(option, "bg", 500),
                                            &format!("hover:{}", accent(option, "bg", 400)),
                                            if selected { "ring-2" } else { "" },
                                            &ring,
                                        ])}
                                        aria-label={format!("Select {option} theme")}
                                    >
                                        if selected {
                                            <CheckIcon class={classes!("w-5", "h-5", "text-white")} />
                                        }
                                    </button>
                                }
                            })}
                        </div>
                    </div>
                </div>

                <div class="bg-slate-50 dark:bg-zinc-800/50 px-6 py-4 flex justify-between items-center">
                    <button
                        type="button"
                        onclick={clear_chat}
                        class="flex items-center gap-1.5 text-sm text-slate-500 hover:text-red-600 dark:text-slate-400 dark:hover:text-red-400 transition-colors"
                    >
                        <TrashIcon class={classes!("w-4", "h-4")} />
                        {"清除對話"}
                    </button>
                    <button
                        type="button"
                        onclick={close}
                        class={combine_styles(&[
                            "px-4 py-2 text-white rounded-lg font-medium transition-colors shadow-sm",
                            &accent(color, "bg", 600),
                            &format!("hover:{}", accent(color, "bg", 700)),
                        ])}
                    >
                        {"完成"}
                    </button>
                </div>
            </div>
        </div>
    }
}
