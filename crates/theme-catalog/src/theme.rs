//! Theme definitions and the built-in theme catalog
//!
//! The catalog is a closed set: every [`ThemeName`] maps to exactly one
//! [`Theme`], and [`get_theme`] is an exhaustive `match`, so adding a variant
//! without its theme does not compile.
//!
//! # Usage
//!
//! ```rust
//! use theme_catalog::{get_theme, Color, ThemeName};
//!
//! let theme = get_theme(ThemeName::Red);
//! assert_eq!(theme.background, Color::WHITE);
//! assert_eq!(theme.nav.to_hex(), "#EC2829");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::color::Color;

/// Catalog lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A string did not name any catalog entry
    #[error("Unknown theme: {0}")]
    UnknownCatalogKey(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

// =============================================================================
// Theme Definition
// =============================================================================

/// A complete, immutable set of theme colors
///
/// Every theme shares this schema; there are no optional slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Navigation bar background
    pub nav: Color,
    /// Navigation bar text
    pub nav_text: Color,
    /// Button background
    pub button: Color,
    /// Secondary button background
    pub button_alt: Color,
    /// Button label
    pub button_text: Color,
    /// Selected button background
    pub button_selected: Color,
    /// Secondary selected button background
    pub button_selected_alt: Color,
    /// Selected button label
    pub button_selected_text: Color,
    /// Body text
    pub text_primary: Color,
    /// Accent text
    pub text_secondary: Color,
}

impl Theme {
    /// Check if the background is dark enough to need light foregrounds
    pub fn is_dark(&self) -> bool {
        self.background.luminance() < 0.5
    }
}

// =============================================================================
// Theme Names
// =============================================================================

/// Catalog key for a built-in theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Deep blue with light text
    DarkBlue,
    /// Black with yellow selection accents
    Black,
    /// White with red navigation
    #[default]
    Red,
    /// White with orange navigation
    Orange,
    /// White with blue/cyan navigation
    Cyan,
}

impl ThemeName {
    /// Every catalog key, in declaration order
    pub const ALL: [ThemeName; 5] = [
        ThemeName::DarkBlue,
        ThemeName::Black,
        ThemeName::Red,
        ThemeName::Orange,
        ThemeName::Cyan,
    ];

    /// Resolve this key to its theme
    pub fn theme(self) -> Theme {
        get_theme(self)
    }

    /// Find the catalog key whose theme equals `theme`
    ///
    /// Returns `None` for themes that are not catalog entries.
    pub fn of(theme: &Theme) -> Option<ThemeName> {
        Self::ALL.into_iter().find(|name| get_theme(*name) == *theme)
    }

    /// Stable lowercase identifier, also used as the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::DarkBlue => "dark_blue",
            ThemeName::Black => "black",
            ThemeName::Red => "red",
            ThemeName::Orange => "orange",
            ThemeName::Cyan => "cyan",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::DarkBlue => write!(f, "Dark Blue"),
            ThemeName::Black => write!(f, "Black"),
            ThemeName::Red => write!(f, "Red"),
            ThemeName::Orange => write!(f, "Orange"),
            ThemeName::Cyan => write!(f, "Cyan"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "darkblue" => Ok(ThemeName::DarkBlue),
            "black" => Ok(ThemeName::Black),
            "red" => Ok(ThemeName::Red),
            "orange" => Ok(ThemeName::Orange),
            "cyan" => Ok(ThemeName::Cyan),
            _ => Err(CatalogError::UnknownCatalogKey(s.to_string())),
        }
    }
}

// =============================================================================
// Built-in Themes
// =============================================================================

const DARK_BLUE: Theme = Theme {
    background: Color::rgb(6, 69, 128),
    nav: Color::rgb(35, 81, 148),
    nav_text: Color::WHITE,
    button: Color::rgb(64, 126, 207),
    button_alt: Color::rgb(44, 96, 176),
    button_text: Color::WHITE,
    button_selected: Color::rgb(109, 184, 249),
    button_selected_alt: Color::rgb(38, 92, 246),
    button_selected_text: Color::WHITE,
    text_primary: Color::WHITE,
    text_secondary: Color::WHITE,
};

const BLACK: Theme = Theme {
    background: Color::BLACK,
    nav: Color::DARK_GRAY,
    nav_text: Color::WHITE,
    button: Color::rgb(192, 192, 192),
    button_alt: Color::rgb(97, 96, 96),
    button_text: Color::WHITE,
    button_selected: Color::rgb(255, 228, 23),
    button_selected_alt: Color::rgb(255, 207, 25),
    button_selected_text: Color::BLACK,
    text_primary: Color::WHITE,
    text_secondary: Color::WHITE,
};

const RED: Theme = Theme {
    background: Color::WHITE,
    nav: Color::rgb(236, 40, 41),
    nav_text: Color::WHITE,
    button: Color::rgb(255, 127, 127),
    button_alt: Color::rgb(249, 86, 86),
    button_text: Color::WHITE,
    button_selected: Color::rgb(255, 208, 208),
    button_selected_alt: Color::rgb(255, 171, 171),
    button_selected_text: Color::WHITE,
    text_primary: Color::BLACK,
    text_secondary: Color::rgb(236, 40, 41),
};

const ORANGE: Theme = Theme {
    background: Color::WHITE,
    nav: Color::rgb(255, 134, 23),
    nav_text: Color::WHITE,
    button: Color::rgb(255, 220, 131),
    button_alt: Color::rgb(255, 180, 0),
    button_text: Color::WHITE,
    button_selected: Color::rgb(255, 228, 23),
    button_selected_alt: Color::rgb(255, 207, 25),
    button_selected_text: Color::BLACK,
    text_primary: Color::BLACK,
    text_secondary: Color::rgb(255, 159, 23),
};

const CYAN: Theme = Theme {
    background: Color::WHITE,
    nav: Color::rgb(44, 119, 234),
    nav_text: Color::BLACK,
    button: Color::rgb(24, 199, 233),
    button_alt: Color::rgb(85, 112, 245),
    button_text: Color::WHITE,
    button_selected: Color::rgb(147, 226, 245),
    button_selected_alt: Color::rgb(31, 249, 246),
    button_selected_text: Color::BLACK,
    text_primary: Color::BLACK,
    text_secondary: Color::rgb(44, 119, 234),
};

// =============================================================================
// Catalog
// =============================================================================

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::DarkBlue => DARK_BLUE,
        ThemeName::Black => BLACK,
        ThemeName::Red => RED,
        ThemeName::Orange => ORANGE,
        ThemeName::Cyan => CYAN,
    }
}

/// All available themes
pub fn all_themes() -> HashMap<ThemeName, Theme> {
    ThemeName::ALL
        .into_iter()
        .map(|name| (name, get_theme(name)))
        .collect()
}
