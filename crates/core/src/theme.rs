//! Appearance settings: dark mode and accent colour

use crate::error::CoreResult;
use crate::storage::{KeyValueStore, load_json, save_json};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Storage key of the light/dark choice
pub const THEME_KEY: &str = "theme";
/// Storage key of the accent colour
pub const ACCENT_KEY: &str = "accent-color";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

macro_rules! accent_colors {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Named accent palette colour
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        #[serde(rename_all = "lowercase")]
        pub enum AccentColor {
            #[default]
            $($variant),+
        }

        impl AccentColor {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

accent_colors! {
    Indigo => "indigo",
    Blue => "blue",
    Sky => "sky",
    Cyan => "cyan",
    Teal => "teal",
    Emerald => "emerald",
    Green => "green",
    Lime => "lime",
    Yellow => "yellow",
    Amber => "amber",
    Orange => "orange",
    Red => "red",
    Rose => "rose",
    Pink => "pink",
    Fuchsia => "fuchsia",
    Purple => "purple",
    Violet => "violet",
    Slate => "slate",
    Zinc => "zinc",
    Neutral => "neutral",
    Stone => "stone",
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current appearance settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub is_dark_mode: bool,
    pub accent_color: AccentColor,
}

impl ThemeConfig {
    pub const fn theme(&self) -> Theme {
        Theme::from_dark(self.is_dark_mode)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            is_dark_mode: !self.is_dark_mode,
            ..self
        }
    }

    #[must_use]
    pub const fn with_accent(self, accent_color: AccentColor) -> Self {
        Self {
            accent_color,
            ..self
        }
    }
}

/// Persists [`ThemeConfig`] under the `theme` and `accent-color` keys
#[derive(Clone)]
pub struct ThemeStore {
    storage: Rc<dyn KeyValueStore>,
}

impl ThemeStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Whether a light/dark choice was ever saved
    pub fn has_saved_theme(&self) -> bool {
        matches!(self.storage.get(THEME_KEY), Ok(Some(_)))
    }

    /// Read the saved settings; unreadable values fall back to defaults
    pub fn load(&self) -> ThemeConfig {
        let theme: Theme = load_json(self.storage.as_ref(), THEME_KEY).unwrap_or_default();
        let accent_color = load_json::<String>(self.storage.as_ref(), ACCENT_KEY)
            .and_then(|name| {
                let color = AccentColor::from_name(&name);
                if color.is_none() {
                    tracing::warn!(name, "Unknown accent colour in storage");
                }
                color
            })
            .unwrap_or_default();

        ThemeConfig {
            is_dark_mode: theme.is_dark(),
            accent_color,
        }
    }

    pub fn save(&self, config: &ThemeConfig) -> CoreResult<()> {
        save_json(self.storage.as_ref(), THEME_KEY, &config.theme())?;
        save_json(self.storage.as_ref(), ACCENT_KEY, &config.accent_color.name())?;
        tracing::debug!(
            dark = config.is_dark_mode,
            accent = %config.accent_color,
            "Saved theme settings"
        );
        Ok(())
    }
}

/// Random selection of distinct palette colours for the picker
pub fn sample_palette<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<AccentColor> {
    AccentColor::ALL
        .choose_multiple(rng, count.min(AccentColor::ALL.len()))
        .copied()
        .collect()
}
