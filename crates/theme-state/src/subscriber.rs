//! The subscriber capability
//!
//! Anything that wants live theme updates implements [`Themed`] and subscribes
//! itself (held in an `Arc`) with the registry.

use theme_catalog::Theme;

/// A consumer that can apply a new theme
///
/// `apply_theme` may be called zero or more times for the lifetime of the
/// subscriber, always from the thread that changed the theme.
#[cfg_attr(test, mockall::automock)]
pub trait Themed: Send + Sync {
    /// Apply `theme` to this consumer
    fn apply_theme(&self, theme: &Theme);
}

impl<F> Themed for F
where
    F: Fn(&Theme) + Send + Sync,
{
    fn apply_theme(&self, theme: &Theme) {
        self(theme);
    }
}
