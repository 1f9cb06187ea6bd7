use crate::app::use_services;
use crate::hooks::use_store;
use crate::theme::use_accent;
use agui_chat_ui::components::icons::{DatabaseIcon, TrashIcon};
use agui_chat_ui::styles::{CARD_BG, HEADER_BG, MUTED_TEXT, PRIMARY_BORDER, PRIMARY_TEXT, accent, combine_styles};
use agui_core::AccentColor;
use agui_core::agent_state::{clear_output_patch, preview_rows};
use serde_json::Value;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum PreviewFormat {
    Formatted,
    Json,
}

/// Live view of the structured data the agent has produced
#[function_component(StructuredOutputPreview)]
pub fn structured_output_preview() -> Html {
    let services = use_services();
    let color = use_accent();
    let shared = services.switcher.shared();
    let state = use_store(&shared);
    let format = use_state(|| PreviewFormat::Formatted);

    let select = |target: PreviewFormat| {
        let format = format.clone();
        Callback::from(move |_: MouseEvent| format.set(target))
    };

    let clear = {
        let shared = shared.clone();
        Callback::from(move |_: MouseEvent| {
            match shared.with(|state| state.merged(&clear_output_patch())) {
                Ok(next) => shared.set(next),
                Err(e) => tracing::error!(error = %e, "Failed to clear structured output"),
            }
        })
    };

    let tab = |target: PreviewFormat, label: &'static str| {
        let active = *format == target;
        let classes = if active {
            combine_styles(&["text-white", &accent(color, "bg", 600)])
        } else {
            "text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-zinc-700".to_string()
        };
        html! {
            <button
                type="button"
                class={combine_styles(&["px-2.5 py-1 rounded-md text-xs font-medium transition-colors", &classes])}
                onclick={select(target)}
            >
                {label}
            </button>
        }
    };

    let sections: Vec<(&str, &Value)> = state
        .structured_data
        .iter()
        .filter(|value| !value.is_null())
        .map(|value| ("Structured Data", value))
        .chain(state.distinct_last_output().map(|value| ("Last Output", value)))
        .collect();

    html! {
        <div class={combine_styles(&["rounded-xl border shadow-sm overflow-hidden", CARD_BG, PRIMARY_BORDER])}>
            <div class={combine_styles(&["px-4 py-3 border-b flex items-center justify-between gap-2", HEADER_BG, PRIMARY_BORDER])}>
                <h3 class={combine_styles(&["font-semibold text-sm flex items-center gap-2", PRIMARY_TEXT])}>
                    <DatabaseIcon class={classes!("w-4", "h-4", "text-slate-400")} />
                    {"Structured Output"}
                </h3>
                <div class="flex items-center gap-1">
                    {tab(PreviewFormat::Formatted, "Formatted")}
                    {tab(PreviewFormat::Json, "JSON")}
                    if state.has_output() {
                        <button
                            type="button"
                            class="ml-2 flex items-center gap-1 text-xs text-slate-500 hover:text-red-600 dark:text-slate-400 dark:hover:text-red-400 transition-colors"
                            onclick={clear}
                        >
                            <TrashIcon class={classes!("w-3.5", "h-3.5")} />
                            {"Clear All Data"}
                        </button>
                    }
                </div>
            </div>

            <div class="p-4 flex flex-col gap-4">
                if sections.is_empty() {
                    <p class={combine_styles(&["text-sm italic text-center py-6", MUTED_TEXT])}>{"No structured data yet"}</p>
                } else {
                    {for sections.iter().map(|(title, value)| render_section(title, value, *format, color))}
                }
            </div>
        </div>
    }
}

fn render_section(title: &str, value: &Value, format: PreviewFormat, color: AccentColor) -> Html {
    let body = match format {
        PreviewFormat::Json => {
            let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            html! {
                <pre class="text-xs font-mono whitespace-pre-wrap break-words p-3 rounded-lg bg-slate-50 dark:bg-zinc-900 text-slate-700 dark:text-slate-300 overflow-x-auto">
                    {json}
                </pre>
            }
        }
        PreviewFormat::Formatted => html! {
            <dl class="divide-y divide-slate-100 dark:divide-app-border">
                {for preview_rows(value).into_iter().enumerate().map(|(i, (label, text))| html! {
                    <div key={i} class="py-2 flex flex-col gap-1">
                        if let Some(label) = label {
                            <dt class={combine_styles(&["text-xs font-semibold uppercase tracking-wide", &accent(color, "text", 600)])}>{label}</dt>
                        }
                        <dd class="text-sm text-slate-700 dark:text-slate-200 whitespace-pre-wrap break-words">{text}</dd>
                    </div>
                })}
            </dl>
        },
    };

    html! {
        <section key={title.to_string()} class="flex flex-col gap-2">
            <h4 class={combine_styles(&["text-xs font-bold", MUTED_TEXT])}>{title.to_string()}</h4>
            {body}
        </section>
    }
}
