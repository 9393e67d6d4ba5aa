//! Theme palettes for the signup section.

use serde::{Deserialize, Serialize};

/// Visual theme for the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark container with light text.
    #[default]
    Dark,
    /// Light container with dark text.
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    // Case-sensitive: the palette lookup never matched "Light" or "DARK",
    // those fall through to the default like any other unknown name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Parse a theme name, silently falling back to the default for
    /// unrecognized values.
    pub fn parse(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    /// Fixed colors for this theme.
    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }
}

impl From<&str> for Theme {
    fn from(s: &str) -> Self {
        Theme::parse(s)
    }
}

/// Fixed colors for one theme: container, input chrome, button chrome, link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub container_bg: &'static str,
    pub container_fg: &'static str,
    pub input_bg: &'static str,
    pub input_border: &'static str,
    pub input_fg: &'static str,
    pub button_bg: &'static str,
    pub button_fg: &'static str,
    pub link: &'static str,
}

pub const DARK_PALETTE: Palette = Palette {
    container_bg: "#111827",
    container_fg: "#ffffff",
    input_bg: "#1f2937",
    input_border: "#374151",
    input_fg: "#ffffff",
    button_bg: "#4f46e5",
    button_fg: "#ffffff",
    link: "#818cf8",
};

pub const LIGHT_PALETTE: Palette = Palette {
    container_bg: "#ffffff",
    container_fg: "#111827",
    input_bg: "#ffffff",
    input_border: "#d1d5db",
    input_fg: "#111827",
    button_bg: "#4f46e5",
    button_fg: "#ffffff",
    link: "#4f46e5",
};
