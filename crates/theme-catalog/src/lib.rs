//! Built-in theme catalog for the theme manager
//!
//! This crate holds the read-only data side of theming: the [`Color`] type,
//! the fixed [`Theme`] schema, and the closed [`ThemeName`] enumeration with
//! its total [`get_theme`] lookup.
//!
//! Five themes are built in:
//! - [`ThemeName::DarkBlue`] - Deep blue background with light text
//! - [`ThemeName::Black`] - Black background with yellow selection accents
//! - [`ThemeName::Red`] - White background with red navigation (default)
//! - [`ThemeName::Orange`] - White background with orange navigation
//! - [`ThemeName::Cyan`] - White background with blue navigation
//!
//! # Example
//!
//! ```rust
//! use theme_catalog::{all_themes, get_theme, ThemeName};
//!
//! let theme = get_theme(ThemeName::Black);
//! assert!(theme.is_dark());
//! assert_eq!(all_themes().len(), ThemeName::ALL.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod theme;

pub use color::{Color, ColorParseError};
pub use theme::{all_themes, get_theme, CatalogError, Theme, ThemeName};
