use crate::components::icons::SendIcon;
use crate::styles::{CARD_BG, PRIMARY_BORDER, PRIMARY_TEXT, TRANSITION_ALL, accent, combine_styles};
use agui_core::AccentColor;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Controlled text input; the owner keeps the value so suggestions can fill it
#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    pub value: AttrValue,
    pub on_input: Callback<String>,
    pub on_send: Callback<String>,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or(AttrValue::Static("請輸入您的問題..."))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub accent: AccentColor,
}

/// Whether the current input may be sent
fn ready_to_send(value: &str, is_loading: bool) -> bool {
    !is_loading && !value.trim().is_empty()
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let ChatInputProps {
        value,
        on_input,
        on_send,
        is_loading,
        placeholder,
        accent: color,
    } = props;

    let is_loading = *is_loading;
    let can_send = ready_to_send(value, is_loading);

    let handle_input = {
        let on_input = on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            on_input.emit(input.value());
        })
    };

    let send = {
        let on_send = on_send.clone();
        let value = value.clone();
        Callback::from(move |()| {
            if ready_to_send(&value, is_loading) {
                on_send.emit(value.to_string());
            }
        })
    };

    let handle_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit(());
            }
        })
    };

    let handle_click = Callback::from(move |_: MouseEvent| send.emit(()));

    let button = combine_styles(&[
        "absolute right-2 top-1/2 -translate-y-1/2 w-10 h-10 rounded-xl flex items-center justify-center text-white shadow-md",
        &accent(*color, "bg", 600),
        &format!("hover:{}", accent(*color, "bg", 700)),
        "disabled:bg-slate-300 dark:disabled:bg-zinc-700 disabled:shadow-none disabled:cursor-not-allowed",
        TRANSITION_ALL,
    ]);

    html! {
        <div class={combine_styles(&["border-t px-4 py-4", CARD_BG, PRIMARY_BORDER])}>
            <div class="max-w-4xl mx-auto relative">
                <input
                    type="text"
                    class={combine_styles(&[
                        "w-full pl-5 pr-14 py-4 rounded-2xl border outline-none shadow-sm bg-slate-50 dark:bg-zinc-900 placeholder:text-slate-400 disabled:opacity-60",
                        PRIMARY_BORDER,
                        PRIMARY_TEXT,
                        &format!("focus:{}", accent(*color, "border", 400)),
                        &format!("focus:ring-2 focus:{}/20", accent(*color, "ring", 500)),
                        TRANSITION_ALL,
                    ])}
                    placeholder={placeholder.clone()}
                    value={value.clone()}
                    oninput={handle_input}
                    onkeydown={handle_keydown}
                    disabled={is_loading}
                />
                <button
                    type="button"
                    class={button}
                    onclick={handle_click}
                    disabled={!can_send}
                    title="Send message"
                    aria-label="Send message"
                >
                    <SendIcon class={classes!("w-5", "h-5")} />
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_to_send() {
        assert!(ready_to_send("你好", false));
        assert!(!ready_to_send("你好", true));
        assert!(!ready_to_send("   \n", false));
        assert!(!ready_to_send("", false));
    }
}
