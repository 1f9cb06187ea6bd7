//! Inline SVG icons (lucide outlines)

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct IconProps {
    #[prop_or_else(|| classes!("w-5", "h-5"))]
    pub class: Classes,
}

fn outline(class: &Classes, paths: Html) -> Html {
    html! {
        <svg
            class={class.clone()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
        >
            {paths}
        </svg>
    }
}

#[function_component(InfoIcon)]
pub fn info_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="M12 16v-4" />
                <path d="M12 8h.01" />
            </>
        },
    )
}

#[function_component(AlertTriangleIcon)]
pub fn alert_triangle_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" />
                <path d="M12 9v4" />
                <path d="M12 17h.01" />
            </>
        },
    )
}

#[function_component(CheckCircleIcon)]
pub fn check_circle_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="m9 12 2 2 4-4" />
            </>
        },
    )
}

#[function_component(BanIcon)]
pub fn ban_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="m4.9 4.9 14.2 14.2" />
            </>
        },
    )
}

#[function_component(ListChecksIcon)]
pub fn list_checks_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="m3 17 2 2 4-4" />
                <path d="m3 7 2 2 4-4" />
                <path d="M13 6h8" />
                <path d="M13 12h8" />
                <path d="M13 18h8" />
            </>
        },
    )
}

#[function_component(LayoutListIcon)]
pub fn layout_list_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <rect width="7" height="7" x="3" y="3" rx="1" />
                <rect width="7" height="7" x="3" y="14" rx="1" />
                <path d="M14 4h7" />
                <path d="M14 9h7" />
                <path d="M14 15h7" />
                <path d="M14 20h7" />
            </>
        },
    )
}

#[function_component(SparklesIcon)]
pub fn sparkles_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z" />
                <path d="M5 3v4" />
                <path d="M3 5h4" />
            </>
        },
    )
}

#[function_component(UserIcon)]
pub fn user_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
                <circle cx="12" cy="7" r="4" />
            </>
        },
    )
}

#[function_component(SendIcon)]
pub fn send_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M22 2 11 13" />
                <path d="M22 2 15 22 11 13 2 9 22 2z" />
            </>
        },
    )
}

#[function_component(MessageSquareIcon)]
pub fn message_square_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! { <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" /> },
    )
}

#[function_component(SettingsIcon)]
pub fn settings_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" />
                <circle cx="12" cy="12" r="3" />
            </>
        },
    )
}

#[function_component(XIcon)]
pub fn x_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
    )
}

#[function_component(MoonIcon)]
pub fn moon_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! { <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" /> },
    )
}

#[function_component(SunIcon)]
pub fn sun_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2" />
                <path d="M12 20v2" />
                <path d="m4.93 4.93 1.41 1.41" />
                <path d="m17.66 17.66 1.41 1.41" />
                <path d="M2 12h2" />
                <path d="M20 12h2" />
                <path d="m6.34 17.66-1.41 1.41" />
                <path d="m19.07 4.93-1.41 1.41" />
            </>
        },
    )
}

#[function_component(RefreshIcon)]
pub fn refresh_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" />
                <path d="M21 3v5h-5" />
                <path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" />
                <path d="M8 16H3v5" />
            </>
        },
    )
}

#[function_component(CheckIcon)]
pub fn check_icon(props: &IconProps) -> Html {
    outline(&props.class, html! { <path d="M20 6 9 17l-5-5" /> })
}

#[function_component(TrashIcon)]
pub fn trash_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M3 6h18" />
                <path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" />
                <path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" />
            </>
        },
    )
}

#[function_component(BriefcaseIcon)]
pub fn briefcase_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" />
                <rect width="20" height="14" x="2" y="6" rx="2" />
            </>
        },
    )
}

#[function_component(ArrowLeftIcon)]
pub fn arrow_left_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <path d="m12 19-7-7 7-7" />
                <path d="M19 12H5" />
            </>
        },
    )
}

#[function_component(DatabaseIcon)]
pub fn database_icon(props: &IconProps) -> Html {
    outline(
        &props.class,
        html! {
            <>
                <ellipse cx="12" cy="5" rx="9" ry="3" />
                <path d="M3 5v14a9 3 0 0 0 18 0V5" />
                <path d="M3 12a9 3 0 0 0 18 0" />
            </>
        },
    )
}
