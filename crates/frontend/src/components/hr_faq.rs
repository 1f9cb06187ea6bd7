//! HR FAQ widget with general/HR mode switching

use crate::app::use_services;
use crate::hooks::use_store;
use crate::theme::use_accent;
use agui_chat_ui::components::icons::ArrowLeftIcon;
use agui_chat_ui::styles::{MUTED_TEXT, PRIMARY_BORDER, PRIMARY_TEXT, accent, combine_styles};
use agui_core::faq::greeting_questions;
use agui_core::mode::View;
use agui_core::{Mode, TransitionOutcome};
use std::rc::Rc;
use yew::prelude::*;

#[function_component(HrFaq)]
pub fn hr_faq() -> Html {
    let services = use_services();
    let color = use_accent();
    let state = use_store(&services.switcher.state());
    let transitioning = use_state(|| false);

    let toggle_mode = {
        let switcher = Rc::clone(&services.switcher);
        let transitioning = transitioning.clone();
        Callback::from(move |_: MouseEvent| {
            let switcher = Rc::clone(&switcher);
            let transitioning = transitioning.clone();
            transitioning.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match switcher.toggle().await {
                    TransitionOutcome::Failed(e) => {
                        tracing::error!(error = %e, "Mode switch failed");
                    }
                    outcome => tracing::debug!(?outcome, "Mode toggle finished"),
                }
                transitioning.set(switcher.is_transitioning());
            });
        })
    };

    let ask = {
        let switcher = Rc::clone(&services.switcher);
        Callback::from(move |question: String| {
            let switcher = Rc::clone(&switcher);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = switcher.ask(&question).await;
                tracing::debug!(?outcome, %question, "FAQ question asked");
            });
        })
    };

    let back = {
        let switcher = Rc::clone(&services.switcher);
        Callback::from(move |_: MouseEvent| switcher.back_to_greeting())
    };

    let is_hr = state.mode == Mode::Hr;
    let follow_ups = services.switcher.visible_follow_ups();
    let toggle_label = if *transitioning {
        "切換中..."
    } else if is_hr {
        "切換到一般模式"
    } else {
        "切換到HR模式"
    };

    let question_button = |question: String, large: bool| {
        let onclick = {
            let ask = ask.clone();
            let question = question.clone();
            Callback::from(move |_: MouseEvent| ask.emit(question.clone()))
        };
        let size = if large { "px-6 py-4 text-base" } else { "px-4 py-3 text-sm" };
        html! {
            <button
                key={question.clone()}
                type="button"
                class={combine_styles(&[
                    "w-full text-left rounded-xl border bg-white dark:bg-app-card shadow-sm transition-all hover:shadow-md",
                    PRIMARY_BORDER,
                    PRIMARY_TEXT,
                    &format!("hover:{}", accent(color, "border", 400)),
                    size,
                ])}
                {onclick}
            >
                <span class="flex items-center justify-between gap-2">
                    <span class="flex-1 break-words">{question}</span>
                    <span class="text-slate-400">{"→"}</span>
                </span>
            </button>
        }
    };

    html! {
        <div
            class={combine_styles(&["p-6 rounded-2xl shadow-sm border-2 bg-white/60 dark:bg-app-card/60", &accent(color, "border", 300)])}
            lang="zh-TW"
        >
            <div class="flex justify-between items-center mb-4">
                <div class="flex items-center gap-2">
                    <div class={classes!("w-3", "h-3", "rounded-full", if is_hr { "bg-green-400" } else { "bg-slate-400" })} />
                    <span class={combine_styles(&["text-sm", MUTED_TEXT])}>
                        {if is_hr { "HR模式" } else { "一般模式" }}
                    </span>
                </div>
                <button
                    type="button"
                    onclick={toggle_mode}
                    disabled={*transitioning}
                    class={combine_styles(&[
                        "px-4 py-2 rounded-lg text-sm font-medium transition-all duration-200 border disabled:opacity-50 disabled:cursor-not-allowed",
                        PRIMARY_BORDER,
                        PRIMARY_TEXT,
                    ])}
                >
                    {toggle_label}
                </button>
            </div>

            <h2 class={combine_styles(&["text-3xl font-bold mb-2 text-center", PRIMARY_TEXT])}>{"人力資源常見問題"}</h2>
            <p class={combine_styles(&["text-center italic mb-6", MUTED_TEXT])}>{"選擇常見問題或直接輸入您的問題"}</p>
            <hr class={combine_styles(&["my-6", PRIMARY_BORDER])} />

            if state.view == View::Greeting {
                <div class="flex flex-col gap-4">
                    <h3 class={combine_styles(&["text-xl font-semibold text-center", PRIMARY_TEXT])}>{"常見問題"}</h3>
                    <div class="space-y-3">
                        {for greeting_questions().into_iter().map(|question| question_button(question.to_string(), true))}
                    </div>
                    <p class={combine_styles(&["text-xs text-center mt-2", MUTED_TEXT])}>{"點擊問題按鈕將自動送出至聊天"}</p>
                </div>
            } else {
                <div class="flex flex-col gap-4">
                    <button
                        type="button"
                        onclick={back}
                        class={combine_styles(&["self-start flex items-center gap-1 text-sm underline", MUTED_TEXT])}
                    >
                        <ArrowLeftIcon class={classes!("w-4", "h-4")} />
                        {"返回常見問題"}
                    </button>

                    if let Some(latest) = state.conversation_history.last() {
                        <div class="rounded-lg p-4 bg-slate-50 dark:bg-zinc-800/50">
                            <p class={combine_styles(&["font-medium mb-2", PRIMARY_TEXT])}>{"最近的問題："}</p>
                            <p class="text-sm text-slate-700 dark:text-slate-200">{&latest.question}</p>
                            <p class={combine_styles(&["text-xs mt-2 whitespace-pre-wrap", MUTED_TEXT])}>{&latest.answer}</p>
                        </div>
                    }

                    if !follow_ups.is_empty() {
                        <div class={combine_styles(&["flex flex-col gap-2 p-4 rounded-xl border", PRIMARY_BORDER])}>
                            <p class={combine_styles(&["text-sm font-medium", PRIMARY_TEXT])}>{"相關問題建議："}</p>
                            {for follow_ups.into_iter().map(|question| question_button(question, false))}
                        </div>
                    }

                    <p class={combine_styles(&["text-center italic text-sm", MUTED_TEXT])}>{"請在右側聊天框中繼續對話"}</p>
                </div>
            }
        </div>
    }
}
