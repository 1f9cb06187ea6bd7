use crate::components::AguiRenderer;
use crate::components::icons::{SparklesIcon, UserIcon};
use crate::styles::{
    BUBBLE_BASE, MODEL_BUBBLE_COLORS, MUTED_TEXT, USER_BUBBLE_COLORS, accent, combine_styles,
};
use agui_core::{AccentColor, ChatMessage};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageBubbleProps {
    pub message: ChatMessage,
    /// Fills the input with the clicked suggestion
    #[prop_or_default]
    pub on_suggestion: Callback<String>,
    #[prop_or_default]
    pub accent: AccentColor,
    #[prop_or_default]
    pub class: Classes,
}

/// Side, alignment and colours of a bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BubbleLayout {
    row: &'static str,
    align: &'static str,
    colors: &'static str,
}

const fn bubble_layout(is_user: bool) -> BubbleLayout {
    if is_user {
        BubbleLayout {
            row: "flex-row-reverse",
            align: "items-end",
            colors: USER_BUBBLE_COLORS,
        }
    } else {
        BubbleLayout {
            row: "flex-row",
            align: "items-start",
            colors: MODEL_BUBBLE_COLORS,
        }
    }
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let MessageBubbleProps {
        message,
        on_suggestion,
        accent: color,
        class,
    } = props;

    let is_user = message.is_user();
    let response = use_memo(message.clone(), ChatMessage::response);

    let avatar = if is_user {
        html! {
            <div class="w-9 h-9 rounded-full bg-slate-200 dark:bg-zinc-700 flex items-center justify-center shrink-0 text-slate-600 dark:text-slate-300">
                <UserIcon class={classes!("w-5", "h-5")} />
            </div>
        }
    } else {
        html! {
            <div class={combine_styles(&[
                "w-9 h-9 rounded-full flex items-center justify-center shrink-0 text-white shadow-md",
                &accent(*color, "bg", 600),
            ])}>
                <SparklesIcon class={classes!("w-5", "h-5")} />
            </div>
        }
    };

    let BubbleLayout { row, align, colors } = bubble_layout(is_user);

    html! {
        <div class={classes!("flex", "w-full", "gap-3", "animate-fadeIn", row, class.clone())}>
            {avatar}
            <div class={classes!("flex", "flex-col", "gap-2", "max-w-[85%]", "min-w-0", align)}>
                <div class={combine_styles(&[BUBBLE_BASE, colors])}>
                    if is_user {
                        <p class="whitespace-pre-wrap leading-relaxed">
                            {message.content.clone().unwrap_or_default()}
                        </p>
                    } else {
                        <AguiRenderer components={response.components.clone()} accent={*color} />
                    }
                </div>

                if !is_user && !response.suggestions.is_empty() {
                    <SuggestionChips
                        suggestions={response.suggestions.clone()}
                        on_select={on_suggestion.clone()}
                        accent={*color}
                    />
                }

                <span class={combine_styles(&["text-[11px] px-1", MUTED_TEXT])}>
                    {message.display_time()}
                </span>
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SuggestionChipsProps {
    pub suggestions: Vec<String>,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub accent: AccentColor,
}

#[function_component(SuggestionChips)]
pub fn suggestion_chips(props: &SuggestionChipsProps) -> Html {
    let chip = combine_styles(&[
        "text-xs px-3 py-1.5 rounded-full border bg-white dark:bg-app-card text-slate-600 dark:text-slate-300 border-slate-200 dark:border-app-border transition-colors",
        &format!("hover:{}", accent(props.accent, "border", 300)),
        &format!("hover:{}", accent(props.accent, "text", 600)),
    ]);

    html! {
        <div class="flex flex-col gap-1.5 mt-1">
            <span class={combine_styles(&["text-xs font-medium", MUTED_TEXT])}>{"建議提問"}</span>
            <div class="flex flex-wrap gap-2">
                {for props.suggestions.iter().enumerate().map(|(i, suggestion)| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let suggestion = suggestion.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(suggestion.clone()))
                    };
                    html! {
                        <button key={i} type="button" class={chip.clone()} {onclick}>
                            {suggestion}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_and_model_bubbles_sit_on_opposite_sides() {
        let user = bubble_layout(true);
        let model = bubble_layout(false);

        assert_eq!(user.row, "flex-row-reverse");
        assert_eq!(user.colors, USER_BUBBLE_COLORS);
        assert_eq!(model.align, "items-start");
        assert_eq!(model.colors, MODEL_BUBBLE_COLORS);
    }

    #[test]
    fn test_model_reply_exposes_suggestions() {
        let reply = ChatMessage::model(serde_json::json!({
            "components": [{"type": "text", "content": "hi"}],
            "suggestions": ["年假怎麼算？"]
        }));
        let response = reply.response();
        assert_eq!(response.components.len(), 1);
        assert_eq!(response.suggestions, vec!["年假怎麼算？"]);
    }
}
