//! Registry configuration
//!
//! Configuration only shapes how a [`crate::ThemeRegistry`] is constructed;
//! the selected theme itself is never written back anywhere.

use serde::{Deserialize, Deserializer, Serialize};
use theme_catalog::ThemeName;

use crate::registry::Result;

/// Configuration for a [`crate::ThemeRegistry`]
///
/// # Example
///
/// ```rust
/// use theme_catalog::ThemeName;
/// use theme_state::RegistryConfig;
///
/// let config = RegistryConfig::new()
///     .default_theme(ThemeName::Cyan)
///     .compact_threshold(64);
/// assert_eq!(config.default_theme, ThemeName::Cyan);
/// assert_eq!(config.compact_threshold, Some(64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Theme a new registry starts with
    #[serde(default)]
    pub default_theme: ThemeName,

    /// Prune dead subscribers on `subscribe` once this many records are stored
    ///
    /// `None` leaves pruning to broadcasts and explicit `prune` calls. Zero is
    /// treated as one however the value is supplied.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_threshold"
    )]
    pub compact_threshold: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeName::default(),
            compact_threshold: None,
        }
    }
}

impl RegistryConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting theme
    pub fn default_theme(mut self, name: ThemeName) -> Self {
        self.default_theme = name;
        self
    }

    /// Enable subscribe-time compaction at `threshold` stored records
    ///
    /// A threshold of zero is treated as one.
    pub fn compact_threshold(mut self, threshold: usize) -> Self {
        self.compact_threshold = normalize_threshold(Some(threshold));
        self
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Clamp a compaction threshold to at least one record
pub(crate) fn normalize_threshold(threshold: Option<usize>) -> Option<usize> {
    threshold.map(|threshold| threshold.max(1))
}

fn deserialize_threshold<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize_threshold(Option::<usize>::deserialize(deserializer)?))
}
