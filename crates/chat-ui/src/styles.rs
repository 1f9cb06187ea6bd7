//! Centralized style constants for consistent theming across the chat UI components

use agui_core::AccentColor;
use agui_core::types::InfoVariant;

// Background colors with dark mode support
pub const APP_BG: &str = "bg-slate-50 dark:bg-app-bg";
pub const CARD_BG: &str = "bg-white dark:bg-app-card";
pub const HEADER_BG: &str = "bg-slate-50/80 dark:bg-zinc-800/50";

// Text colors with dark mode support
pub const PRIMARY_TEXT: &str = "text-slate-900 dark:text-slate-100";
pub const SECONDARY_TEXT: &str = "text-slate-700 dark:text-slate-300";
pub const MUTED_TEXT: &str = "text-slate-500 dark:text-slate-400";

// Border colors with dark mode support
pub const PRIMARY_BORDER: &str = "border-slate-200 dark:border-app-border";
pub const SOFT_BORDER: &str = "border-slate-100 dark:border-app-border";

pub const ERROR_BOX: &str = "p-2 border border-red-200 dark:border-red-900 bg-red-50 dark:bg-red-900/20 text-red-600 dark:text-red-400 rounded text-xs";

// Message bubbles
pub const BUBBLE_BASE: &str = "rounded-2xl px-6 py-4 shadow-sm border";
pub const USER_BUBBLE_COLORS: &str = "bg-white dark:bg-app-card border-slate-200 dark:border-app-border text-slate-800 dark:text-slate-100 rounded-tr-sm";
pub const MODEL_BUBBLE_COLORS: &str =
    "bg-white dark:bg-app-card border-slate-200 dark:border-app-border rounded-tl-sm";

// Skeleton bars
pub const SKELETON_BAR: &str = "bg-slate-100 dark:bg-zinc-700/50 rounded-md";
pub const SKELETON_DOT: &str = "bg-slate-200 dark:bg-zinc-700";

// Common layout patterns
pub const FLEX_COL: &str = "flex flex-col";
pub const FLEX_CENTER: &str = "flex items-center";
pub const FLEX_CENTER_GAP_2: &str = "flex items-center gap-2";
pub const FLEX_BETWEEN: &str = "flex justify-between items-center";

// Transitions
pub const TRANSITION_COLORS: &str = "transition-colors duration-200";
pub const TRANSITION_ALL: &str = "transition-all duration-200";

// Utility function to combine multiple style constants
pub fn combine_styles(styles: &[&str]) -> String {
    styles.join(" ")
}

/// Class set of one info card variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantStyle {
    pub container: &'static str,
    pub icon_bg: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

pub const fn variant_style(variant: InfoVariant) -> VariantStyle {
    match variant {
        InfoVariant::Info => VariantStyle {
            container: "bg-sky-50 dark:bg-sky-900/20 border-sky-100 dark:border-sky-800",
            icon_bg: "bg-sky-100 dark:bg-sky-800 text-sky-600 dark:text-sky-300",
            title: "text-sky-900 dark:text-sky-100",
            text: "text-sky-800 dark:text-sky-200",
            border: "border-l-sky-500",
        },
        InfoVariant::Warning => VariantStyle {
            container: "bg-amber-50 dark:bg-amber-900/20 border-amber-100 dark:border-amber-800",
            icon_bg: "bg-amber-100 dark:bg-amber-800 text-amber-600 dark:text-amber-300",
            title: "text-amber-900 dark:text-amber-100",
            text: "text-amber-800 dark:text-amber-200",
            border: "border-l-amber-500",
        },
        InfoVariant::Success => VariantStyle {
            container: "bg-emerald-50 dark:bg-emerald-900/20 border-emerald-100 dark:border-emerald-800",
            icon_bg: "bg-emerald-100 dark:bg-emerald-800 text-emerald-600 dark:text-emerald-300",
            title: "text-emerald-900 dark:text-emerald-100",
            text: "text-emerald-800 dark:text-emerald-200",
            border: "border-l-emerald-500",
        },
        InfoVariant::Danger => VariantStyle {
            container: "bg-rose-50 dark:bg-rose-900/20 border-rose-100 dark:border-rose-800",
            icon_bg: "bg-rose-100 dark:bg-rose-800 text-rose-600 dark:text-rose-300",
            title: "text-rose-900 dark:text-rose-100",
            text: "text-rose-800 dark:text-rose-200",
            border: "border-l-rose-500",
        },
    }
}

/// Accent-coloured classes, e.g. `accent(color, "bg", 600)` gives `bg-indigo-600`
pub fn accent(color: AccentColor, prefix: &str, shade: u16) -> String {
    format!("{prefix}-{}-{shade}", color.name())
}

/// Prose classes for rendered markdown
pub fn prose(color: AccentColor) -> String {
    let c = color.name();
    format!(
        "prose prose-slate dark:prose-invert max-w-none text-slate-700 dark:text-slate-300 leading-relaxed \
         prose-headings:font-bold prose-p:my-3 prose-strong:font-semibold prose-ul:list-disc prose-ul:pl-5 \
         prose-code:text-{c}-600 dark:prose-code:text-{c}-400 prose-code:bg-{c}-50 \
         dark:prose-code:bg-{c}-900/30 prose-code:px-1 prose-code:py-0.5 prose-code:rounded-md \
         prose-code:font-mono prose-code:text-sm"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_styles() {
        assert_eq!(combine_styles(&[CARD_BG, "p-4"]), format!("{CARD_BG} p-4"));
        assert_eq!(combine_styles(&[]), "");
    }

    #[test]
    fn test_accent_class() {
        assert_eq!(accent(AccentColor::Indigo, "bg", 600), "bg-indigo-600");
        assert_eq!(accent(AccentColor::Rose, "text", 400), "text-rose-400");
    }

    #[test]
    fn test_prose_uses_accent_for_code() {
        let classes = prose(AccentColor::Teal);
        assert!(classes.contains("prose-code:text-teal-600"));
        assert!(!classes.contains("indigo"));
    }

    #[test]
    fn test_each_variant_has_its_own_palette() {
        assert!(variant_style(InfoVariant::Info).border.contains("sky"));
        assert!(variant_style(InfoVariant::Warning).border.contains("amber"));
        assert!(variant_style(InfoVariant::Success).border.contains("emerald"));
        assert!(variant_style(InfoVariant::Danger).border.contains("rose"));
    }
}
