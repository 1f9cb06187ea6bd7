use crate::components::icons::SparklesIcon;
use crate::styles::{FLEX_CENTER_GAP_2, MODEL_BUBBLE_COLORS, SKELETON_BAR, SKELETON_DOT, accent, combine_styles};
use agui_core::AccentColor;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SkeletonLoaderProps {
    #[prop_or_default]
    pub accent: AccentColor,
    #[prop_or_default]
    pub class: Classes,
}

/// Placeholder model bubble shown while a reply is pending
#[function_component(SkeletonLoader)]
pub fn skeleton_loader(props: &SkeletonLoaderProps) -> Html {
    let SkeletonLoaderProps { accent: color, class } = props;

    let bar = |width: &str| combine_styles(&["h-3 animate-pulse", SKELETON_BAR, width]);
    let dot = combine_styles(&["w-1.5 h-1.5 rounded-full animate-pulse-dot", SKELETON_DOT]);

    html! {
        <div class={classes!("flex", "w-full", "gap-3", "flex-row", class.clone())}>
            <div class={combine_styles(&[
                "w-9 h-9 rounded-full flex items-center justify-center shrink-0 text-white shadow-md opacity-70",
                &accent(*color, "bg", 600),
            ])}>
                <SparklesIcon class={classes!("w-5", "h-5", "animate-pulse")} />
            </div>
            <div class={combine_styles(&["rounded-2xl px-6 py-5 border shadow-sm w-full max-w-md", MODEL_BUBBLE_COLORS])}>
                <div class="flex flex-col gap-3">
                    <div class={bar("w-3/4")}></div>
                    <div class={bar("w-full")}></div>
                    <div class={bar("w-5/6")}></div>
                </div>
                <div class={combine_styles(&[FLEX_CENTER_GAP_2, "mt-4"])}>
                    <span class={dot.clone()} style="animation-delay: -0.32s;"></span>
                    <span class={dot.clone()} style="animation-delay: -0.16s;"></span>
                    <span class={dot}></span>
                </div>
            </div>
        </div>
    }
}
