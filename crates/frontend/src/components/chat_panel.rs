use crate::app::use_services;
use crate::hooks::use_store;
use crate::theme::use_accent;
use agui_chat_ui::{ChatInput, Greeting, MessageList};
use std::rc::Rc;
use yew::prelude::*;

/// Transcript, greeting and input bound to the shared chat session
#[function_component(ChatPanel)]
pub fn chat_panel() -> Html {
    let services = use_services();
    let color = use_accent();
    let chat = use_store(&services.session.store());
    let input = use_state(String::new);

    let on_input = {
        let input = input.clone();
        Callback::from(move |value: String| input.set(value))
    };

    // Suggestions and greeting questions fill the input without sending
    let on_fill = {
        let input = input.clone();
        Callback::from(move |question: String| input.set(question))
    };

    let on_send = {
        let input = input.clone();
        let session = Rc::clone(&services.session);
        Callback::from(move |text: String| {
            input.set(String::new());
            let session = Rc::clone(&session);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = session.send_message(&text).await;
                tracing::debug!(?outcome, "Chat message handled");
            });
        })
    };

    let show_greeting = chat.messages.is_empty() && !chat.is_loading;

    html! {
        <div class="flex-1 min-h-0 flex flex-col">
            if show_greeting {
                <Greeting on_select={on_fill.clone()} accent={color} />
            } else {
                <MessageList
                    messages={chat.messages.clone()}
                    is_loading={chat.is_loading}
                    on_suggestion={on_fill}
                    accent={color}
                />
            }
            <ChatInput
                value={AttrValue::from((*input).clone())}
                {on_input}
                {on_send}
                is_loading={chat.is_loading}
                accent={color}
            />
        </div>
    }
}
