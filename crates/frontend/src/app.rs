use crate::components::{ChatPanel, HrFaq, SettingsModal, StructuredOutputPreview};
use crate::services::{LocalStateSink, SessionHost, build_client, local_store};
use crate::theme::{ThemeProvider, use_accent};
use agui_chat_ui::components::icons::{BriefcaseIcon, SettingsIcon, SparklesIcon};
use agui_chat_ui::styles::{APP_BG, CARD_BG, PRIMARY_BORDER, PRIMARY_TEXT, accent, combine_styles};
use agui_core::agent_state::AgentState;
use agui_core::{AppConfig, ChatMessage, ChatSession, ModeSwitcher, SharedStore, extract_text};
use agui_http::AgentClient;
use serde_json::json;
use std::rc::Rc;
use yew::prelude::*;

/// Long-lived controllers shared by every page
#[derive(Clone)]
pub struct AppServices {
    pub config: Rc<AppConfig>,
    pub session: Rc<ChatSession<AgentClient>>,
    pub switcher: Rc<ModeSwitcher<LocalStateSink>>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && Rc::ptr_eq(&self.switcher, &other.switcher)
    }
}

impl AppServices {
    fn new(config: Rc<AppConfig>) -> Result<Self, String> {
        let client = build_client(&config).map_err(|e| e.to_string())?;
        let session = Rc::new(ChatSession::new(client));

        let switcher = Rc::new(ModeSwitcher::new(
            (*config).clone(),
            local_store(),
            SharedStore::new(AgentState::default()),
            LocalStateSink,
        ));
        switcher.set_host(Some(Rc::new(SessionHost::new(Rc::clone(&session)))));
        switcher.on_mode_change(|mode| tracing::info!(%mode, "FAQ mode changed"));

        Ok(Self {
            config,
            session,
            switcher,
        })
    }
}

/// Hook to access the shared controllers
#[hook]
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
        .expect("Services not found. Make sure to render inside App")
}

/// Feed each agent reply back into the FAQ widget and the preview
fn mirror_replies(services: AppServices) -> impl FnOnce() {
    let switcher = Rc::clone(&services.switcher);
    let store = services.session.store();
    let seen = std::cell::Cell::new(store.with(|state| state.messages.len()));

    let subscription = store.subscribe(move |state| {
        let count = state.messages.len();
        if count <= seen.replace(count) {
            return;
        }
        let Some(reply) = state.messages.last().filter(|m| !m.is_user()) else {
            return;
        };
        let question = state
            .messages
            .iter()
            .rev()
            .find(|m| m.is_user())
            .and_then(|m| m.content.clone())
            .unwrap_or_default();
        record_reply(&switcher, &question, reply);
    });

    let store = services.session.store();
    move || store.unsubscribe(subscription)
}

fn record_reply(switcher: &ModeSwitcher<LocalStateSink>, question: &str, reply: &ChatMessage) {
    let response = reply.response();
    let answer = response
        .components
        .iter()
        .map(extract_text)
        .find(|text| !text.trim().is_empty())
        .unwrap_or_default();
    switcher.update_answer(question, &answer, &response.suggestions);

    let data = reply.data.clone().unwrap_or_default();
    let structured = data
        .get("structuredData")
        .or_else(|| data.get("structured_data"))
        .cloned();
    let patch = match structured {
        Some(structured) => json!({ "structuredData": structured, "lastOutput": data }),
        None => json!({ "lastOutput": data }),
    };

    let shared = switcher.shared();
    match shared.with(|state| state.merged(&patch)) {
        Ok(next) => shared.set(next),
        Err(e) => tracing::warn!(error = %e, "Failed to mirror reply into agent state"),
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AppProps {
    pub config: Rc<AppConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let services = use_memo(props.config.clone(), |config| {
        AppServices::new(Rc::clone(config))
    });

    let body = match &*services {
        Ok(services) => html! {
            <ContextProvider<AppServices> context={services.clone()}>
                <AppContent />
            </ContextProvider<AppServices>>
        },
        Err(message) => {
            tracing::error!(error = %message, "Failed to create chat client");
            html! {
                <div class="p-8 text-red-600 dark:text-red-400">
                    {format!("Failed to start the assistant: {message}")}
                </div>
            }
        }
    };

    html! {
        <ThemeProvider>
            {body}
        </ThemeProvider>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    Assistant,
    HrFaq,
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let services = use_services();
    let color = use_accent();
    let page = use_state(|| Page::Assistant);
    let show_settings = use_state(|| false);

    {
        let services = services.clone();
        use_effect_with((), move |()| mirror_replies(services));
    }

    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: MouseEvent| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |()| show_settings.set(false))
    };

    let nav_button = |target: Page, label: &'static str, icon: Html| {
        let active = *page == target;
        let onclick = {
            let page = page.clone();
            Callback::from(move |_: MouseEvent| page.set(target))
        };
        let state = if active {
            combine_styles(&["text-white shadow-sm", &accent(color, "bg", 600)])
        } else {
            "text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-zinc-800".to_string()
        };
        html! {
            <button
                type="button"
                class={combine_styles(&["flex items-center gap-2 px-3 py-1.5 rounded-lg text-sm font-medium transition-colors", &state])}
                {onclick}
            >
                {icon}
                {label}
            </button>
        }
    };

    html! {
        <div class={combine_styles(&["h-screen flex flex-col", APP_BG, PRIMARY_TEXT])}>
            <header class={combine_styles(&["shrink-0 border-b px-6 py-3 flex items-center justify-between", CARD_BG, PRIMARY_BORDER])}>
                <div class="flex items-center gap-3">
                    <div class={combine_styles(&["w-9 h-9 rounded-xl flex items-center justify-center text-white shadow-md", &accent(color, "bg", 600)])}>
                        <SparklesIcon class={classes!("w-5", "h-5")} />
                    </div>
                    <h1 class="font-bold text-lg">{"AG-UI 問答助手"}</h1>
                </div>
                <nav class="flex items-center gap-2">
                    {nav_button(Page::Assistant, "問答助手", html! { <SparklesIcon class={classes!("w-4", "h-4")} /> })}
                    {nav_button(Page::HrFaq, "HR FAQ", html! { <BriefcaseIcon class={classes!("w-4", "h-4")} /> })}
                    <button
                        type="button"
                        class="ml-2 p-2 rounded-full text-slate-500 dark:text-slate-400 hover:bg-slate-100 dark:hover:bg-zinc-800 transition-colors"
                        onclick={open_settings}
                        title="外觀設定"
                        aria-label="Open settings"
                    >
                        <SettingsIcon class={classes!("w-5", "h-5")} />
                    </button>
                </nav>
            </header>

            <main class="flex-1 min-h-0 flex">
                if *page == Page::HrFaq {
                    <aside class={combine_styles(&["w-full max-w-xl shrink-0 overflow-y-auto border-r p-6 flex flex-col gap-6", PRIMARY_BORDER])}>
                        <HrFaq />
                        <StructuredOutputPreview />
                    </aside>
                }
                <section class="flex-1 min-w-0 flex flex-col">
                    <ChatPanel />
                </section>
            </main>

            <SettingsModal is_open={*show_settings} on_close={close_settings} />
        </div>
    }
}
