use crate::components::blocks::{DataListBlock, InfoCardBlock, MarkdownBlock, StepProcessBlock, TableBlock};
use crate::styles::ERROR_BOX;
use agui_core::AccentColor;
use agui_core::render::{ComponentView, Rendered, RenderedComponent, render_components};
use serde_json::Value;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AguiRendererProps {
    /// Raw component payloads in display order
    pub components: Vec<Value>,
    #[prop_or_default]
    pub accent: AccentColor,
}

/// Renders the `components` array of an agent response
#[function_component(AguiRenderer)]
pub fn agui_renderer(props: &AguiRendererProps) -> Html {
    let AguiRendererProps { components, accent } = props;

    let rendered = use_memo(components.clone(), |components| {
        render_components(components)
    });

    html! {
        <div class="flex flex-col gap-2 w-full">
            {for rendered.iter().map(|item| render_item(item, *accent))}
        </div>
    }
}

/// Staggered fade-in, 100ms per position
fn entrance_style(index: usize) -> String {
    format!("animation-delay: {}ms", index * 100)
}

fn render_item(item: &RenderedComponent, accent: AccentColor) -> Html {
    let style = entrance_style(item.index);

    let body = match &item.rendered {
        Rendered::View(view) => render_view(view, accent),
        Rendered::Error(_) => html! {
            <div class={ERROR_BOX}>{"Component Rendering Error"}</div>
        },
    };

    html! {
        <div key={item.index} class="w-full animate-fadeIn" style={style}>
            {body}
        </div>
    }
}

fn render_view(view: &ComponentView, accent: AccentColor) -> Html {
    match view {
        ComponentView::Markdown(view) => html! { <MarkdownBlock view={view.clone()} {accent} /> },
        ComponentView::InfoCard(view) => html! { <InfoCardBlock view={view.clone()} /> },
        ComponentView::DataList(view) => html! { <DataListBlock view={view.clone()} {accent} /> },
        ComponentView::StepProcess(view) => {
            html! { <StepProcessBlock view={view.clone()} {accent} /> }
        }
        ComponentView::Table(view) => html! { <TableBlock view={view.clone()} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_is_staggered_by_position() {
        assert_eq!(entrance_style(0), "animation-delay: 0ms");
        assert_eq!(entrance_style(3), "animation-delay: 300ms");
    }
}
