use crate::components::{MessageBubble, SkeletonLoader};
use agui_core::{AccentColor, ChatMessage};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<ChatMessage>,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub on_suggestion: Callback<String>,
    #[prop_or_default]
    pub accent: AccentColor,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let MessageListProps {
        messages,
        is_loading,
        on_suggestion,
        accent,
        class,
    } = props;

    let container_ref = use_node_ref();

    // Keep the newest message and the loader in view
    use_effect_with((messages.len(), *is_loading), {
        let container_ref = container_ref.clone();
        move |_| {
            if let Some(element) = container_ref.cast::<Element>() {
                element.set_scroll_top(element.scroll_height());
            }
        }
    });

    html! {
        <div ref={container_ref} class={classes!("flex-1", "overflow-y-auto", "px-4", "py-6", class.clone())}>
            <div class="max-w-4xl mx-auto flex flex-col gap-8">
                {for messages.iter().map(|message| html! {
                    <MessageBubble
                        key={message.id.clone()}
                        message={message.clone()}
                        on_suggestion={on_suggestion.clone()}
                        accent={*accent}
                    />
                })}
                if *is_loading {
                    <SkeletonLoader accent={*accent} />
                }
            </div>
        </div>
    }
}
