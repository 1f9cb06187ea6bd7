use crate::components::icons::{MessageSquareIcon, SparklesIcon};
use crate::styles::{MUTED_TEXT, PRIMARY_TEXT, accent, combine_styles};
use agui_core::AccentColor;
use yew::prelude::*;

/// Questions offered on an empty chat
pub const DEFAULT_QUESTIONS: [&str; 3] = [
    "如何使用 Google ADK 進行開發？",
    "請解釋 AG-UI 的運作原理。",
    "什麼是結構化輸出 (Structured Output)？",
];

#[derive(Properties, Clone, PartialEq)]
pub struct GreetingProps {
    /// Fills the input with the chosen question
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub accent: AccentColor,
}

#[function_component(Greeting)]
pub fn greeting(props: &GreetingProps) -> Html {
    let color = props.accent;

    html! {
        <div class="flex-1 flex flex-col items-center justify-center px-4 py-12 animate-fadeIn">
            <div class={combine_styles(&[
                "w-16 h-16 rounded-2xl flex items-center justify-center text-white shadow-lg mb-6",
                &accent(color, "bg", 600),
            ])}>
                <SparklesIcon class={classes!("w-8", "h-8")} />
            </div>
            <h2 class={combine_styles(&["text-2xl font-bold mb-2", PRIMARY_TEXT])}>{"歡迎使用智能問答"}</h2>
            <p class={combine_styles(&["text-sm mb-8", MUTED_TEXT])}>{"選擇一個問題開始，或直接輸入您的問題。"}</p>
            <div class="grid gap-3 w-full max-w-xl">
                {for DEFAULT_QUESTIONS.iter().map(|question| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit((*question).to_string()))
                    };
                    html! {
                        <button
                            key={*question}
                            type="button"
                            class={combine_styles(&[
                                "flex items-center gap-3 text-left px-5 py-4 rounded-xl border bg-white dark:bg-app-card border-slate-200 dark:border-app-border shadow-sm transition-all hover:shadow-md",
                                &format!("hover:{}", accent(color, "border", 300)),
                            ])}
                            {onclick}
                        >
                            <MessageSquareIcon class={classes!("w-4", "h-4", "shrink-0", "text-slate-400")} />
                            <span class="text-sm text-slate-700 dark:text-slate-200">{*question}</span>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
