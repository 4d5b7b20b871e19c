//! Theme state management for the theme manager
//!
//! This crate provides the runtime side of theming: a [`ThemeRegistry`] that
//! holds the current theme and broadcasts changes to subscribers it tracks
//! through non-owning [`WeakHandle`]s.
//!
//! # Modules
//!
//! - [`handle`] - Weak, non-owning subscriber references
//! - [`subscriber`] - The [`Themed`] subscriber capability
//! - [`registry`] - Current theme, subscription and broadcast
//! - [`config`] - Registry construction options
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use theme_catalog::{Theme, ThemeName};
//! use theme_state::ThemeRegistry;
//!
//! let registry = Arc::new(ThemeRegistry::new());
//!
//! let banner = Arc::new(|theme: &Theme| {
//!     let _ = theme.nav;
//! });
//! registry.subscribe(&banner);
//!
//! registry.switch_to(ThemeName::DarkBlue);
//! assert_eq!(registry.current_name(), Some(ThemeName::DarkBlue));
//!
//! // Dropping the subscriber is all it takes to stop notifications
//! drop(banner);
//! registry.switch_to(ThemeName::Red);
//! assert_eq!(registry.subscriber_count(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handle;
pub mod registry;
pub mod subscriber;

pub use config::RegistryConfig;
pub use handle::WeakHandle;
pub use registry::{RegistryError, Result, ThemeRegistry};
pub use subscriber::Themed;
