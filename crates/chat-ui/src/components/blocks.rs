//! One Yew component per AG-UI view

use crate::components::icons::{
    AlertTriangleIcon, BanIcon, CheckCircleIcon, InfoIcon, LayoutListIcon, ListChecksIcon,
};
use crate::styles::{
    HEADER_BG, PRIMARY_BORDER, SOFT_BORDER, accent as accent_class, combine_styles, prose,
    variant_style,
};
use agui_core::AccentColor;
use agui_core::render::{DataListView, InfoCardView, MarkdownView, StepProcessView, TableView};
use agui_core::types::InfoVariant;
use yew::prelude::*;

/// Markup produced by the markdown renderer, which escapes all source text
fn trusted_html(html: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(html.to_string()))
}

#[derive(Properties, Clone, PartialEq)]
pub struct MarkdownBlockProps {
    pub view: MarkdownView,
    #[prop_or_default]
    pub accent: AccentColor,
}

#[function_component(MarkdownBlock)]
pub fn markdown_block(props: &MarkdownBlockProps) -> Html {
    html! {
        <div class={prose(props.accent)}>
            {trusted_html(&props.view.html)}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct InfoCardBlockProps {
    pub view: InfoCardView,
}

fn variant_icon(variant: InfoVariant, class: Classes) -> Html {
    match variant {
        InfoVariant::Info => html! { <InfoIcon {class} /> },
        InfoVariant::Warning => html! { <AlertTriangleIcon {class} /> },
        InfoVariant::Success => html! { <CheckCircleIcon {class} /> },
        InfoVariant::Danger => html! { <BanIcon {class} /> },
    }
}

#[function_component(InfoCardBlock)]
pub fn info_card_block(props: &InfoCardBlockProps) -> Html {
    let view = &props.view;
    let style = variant_style(view.variant);

    html! {
        <div class={combine_styles(&[
            "relative overflow-hidden rounded-r-xl rounded-l-md border-y border-r border-l-[4px] p-4 my-4 shadow-sm transition-transform hover:scale-[1.01] duration-300",
            style.container,
            style.border,
        ])}>
            <div class="flex items-start gap-4">
                <div class={combine_styles(&[
                    "shrink-0 w-10 h-10 rounded-full flex items-center justify-center shadow-sm ring-2 ring-white dark:ring-transparent",
                    style.icon_bg,
                ])}>
                    {variant_icon(view.variant, classes!("w-5", "h-5"))}
                </div>
                <div class="flex-1 min-w-0">
                    if !view.title.is_empty() {
                        <h4 class={combine_styles(&["font-bold text-base mb-1", style.title])}>{&view.title}</h4>
                    }
                    <div class={combine_styles(&["text-sm leading-relaxed opacity-90", style.text])}>
                        {trusted_html(&view.description_html)}
                    </div>
                </div>
            </div>
            <div class="absolute -right-4 -bottom-4 opacity-5 pointer-events-none">
                {variant_icon(view.variant, classes!("w-24", "h-24"))}
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct DataListBlockProps {
    pub view: DataListView,
    #[prop_or_default]
    pub accent: AccentColor,
}

#[function_component(DataListBlock)]
pub fn data_list_block(props: &DataListBlockProps) -> Html {
    let DataListBlockProps { view, accent } = props;
    let label_hover = combine_styles(&[
        &format!("group-hover:{}", accent_class(*accent, "text", 600)),
        &format!("dark:group-hover:{}", accent_class(*accent, "text", 400)),
    ]);

    html! {
        <div class={combine_styles(&["my-4 rounded-xl border bg-white dark:bg-app-card shadow-sm overflow-hidden", PRIMARY_BORDER])}>
            if !view.title.is_empty() {
                <div class={combine_styles(&["px-5 py-3 border-b flex items-center gap-2", HEADER_BG, PRIMARY_BORDER])}>
                    <ListChecksIcon class={classes!("w-4", "h-4", "text-slate-500", "dark:text-slate-400")} />
                    <h4 class="font-semibold text-sm text-slate-700 dark:text-slate-200">{&view.title}</h4>
                </div>
            }
            <div class="divide-y divide-slate-100 dark:divide-app-border">
                {for view.entries.iter().enumerate().map(|(idx, entry)| {
                    let value_align = if entry.label.is_empty() { "text-left" } else { "text-left sm:text-right" };
                    html! {
                        <div key={idx} class="group flex flex-col sm:flex-row sm:justify-between sm:items-center px-5 py-3 hover:bg-slate-50 dark:hover:bg-zinc-800/50 transition-colors gap-1 sm:gap-4">
                            if !entry.label.is_empty() {
                                <span class={combine_styles(&["text-sm font-medium text-slate-500 dark:text-slate-400 shrink-0 transition-colors", &label_hover])}>
                                    {&entry.label}
                                </span>
                            }
                            <span class={combine_styles(&["text-sm text-slate-900 dark:text-slate-100 font-medium break-words", value_align])}>
                                {&entry.value}
                            </span>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct StepProcessBlockProps {
    pub view: StepProcessView,
    #[prop_or_default]
    pub accent: AccentColor,
}

#[function_component(StepProcessBlock)]
pub fn step_process_block(props: &StepProcessBlockProps) -> Html {
    let StepProcessBlockProps { view, accent } = props;
    let a = |prefix: &str, shade: u16| accent_class(*accent, prefix, shade);

    let badge = combine_styles(&[
        &a("bg", 100),
        &format!("dark:{}/40", a("bg", 900)),
        &a("text", 700),
        &format!("dark:{}", a("text", 300)),
        "py-1 px-2 rounded text-xs uppercase tracking-wider",
    ]);
    let connector = combine_styles(&[
        "absolute left-[19px] top-10 bottom-0 w-0.5 bg-gradient-to-b to-slate-200 dark:to-zinc-700 transition-colors",
        &a("from", 200),
        &format!("dark:{}", a("from", 800)),
    ]);
    let bullet = combine_styles(&[
        "relative z-10 w-10 h-10 shrink-0 rounded-full bg-white dark:bg-app-card border-2 flex items-center justify-center font-bold text-sm shadow-sm group-hover:scale-110 transition-all duration-300",
        &a("border", 100),
        &a("text", 600),
        &format!("dark:{}", a("text", 400)),
    ]);

    html! {
        <div class="my-6 relative pl-2">
            if !view.title.is_empty() {
                <h4 class="font-bold text-slate-800 dark:text-slate-200 mb-6 pl-2 flex items-center gap-2">
                    <span class={badge}>{"Process"}</span>
                    {&view.title}
                </h4>
            }
            <div class="space-y-0">
                {for view.steps.iter().map(|step| html! {
                    <div key={step.number} class="flex gap-4 relative group">
                        if !step.is_last {
                            <div class={connector.clone()} />
                        }
                        <div class={bullet.clone()}>{step.number}</div>
                        <div class="pb-8 flex-1 min-w-0 pt-1">
                            <div class={combine_styles(&["bg-white dark:bg-app-card border rounded-lg p-4 shadow-sm hover:shadow-md transition-all duration-300 relative", SOFT_BORDER])}>
                                if !step.title.is_empty() {
                                    <h5 class="font-bold text-slate-900 dark:text-slate-100 text-sm mb-1">{&step.title}</h5>
                                }
                                <div class="text-slate-600 dark:text-slate-400 text-sm leading-relaxed">
                                    {trusted_html(&step.description_html)}
                                </div>
                            </div>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct TableBlockProps {
    pub view: TableView,
}

#[function_component(TableBlock)]
pub fn table_block(props: &TableBlockProps) -> Html {
    let view = &props.view;

    html! {
        <div class={combine_styles(&["my-5 overflow-hidden rounded-xl border shadow-sm bg-white dark:bg-app-card", PRIMARY_BORDER])}>
            if !view.title.is_empty() {
                <div class={combine_styles(&["backdrop-blur-sm px-5 py-3 border-b font-bold text-sm text-slate-700 dark:text-slate-200 flex items-center gap-2", HEADER_BG, PRIMARY_BORDER])}>
                    <LayoutListIcon class={classes!("w-4", "h-4", "text-slate-400")} />
                    {&view.title}
                </div>
            }
            <div class="overflow-x-auto">
                <table class="w-full text-sm text-left border-collapse">
                    <thead>
                        <tr class={combine_styles(&["bg-slate-50 dark:bg-zinc-800/30 border-b", PRIMARY_BORDER])}>
                            {for view.headers.iter().enumerate().map(|(i, header)| html! {
                                <th key={i} class="px-5 py-3 font-semibold text-slate-600 dark:text-slate-300 whitespace-nowrap first:pl-6 last:pr-6">
                                    {header}
                                </th>
                            })}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100 dark:divide-app-border">
                        {for view.rows.iter().enumerate().map(|(r, row)| html! {
                            <tr key={r} class="hover:bg-slate-50 dark:hover:bg-zinc-800/30 transition-colors even:bg-slate-50/30 dark:even:bg-zinc-800/10">
                                {for row.iter().enumerate().map(|(c, cell)| html! {
                                    <td key={c} class="px-5 py-3 text-slate-700 dark:text-slate-300 first:pl-6 last:pr-6 first:font-medium first:text-slate-900 dark:first:text-slate-100">
                                        {cell}
                                    </td>
                                })}
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
