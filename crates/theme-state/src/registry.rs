//! Theme registry with weak subscriber tracking
//!
//! # Design
//!
//! [`ThemeRegistry`] holds the current [`Theme`] and an ordered list of
//! [`WeakHandle`]s to subscribers. It never owns a subscriber: a subscriber
//! lives exactly as long as its owner keeps the `Arc` alive.
//!
//! Every call to [`ThemeRegistry::set_current`] broadcasts, even when the new
//! theme equals the old one:
//!
//! 1. Dead handles are pruned and the surviving list is stored back.
//! 2. Each surviving subscriber receives `apply_theme` in subscription order.
//! 3. A panicking subscriber is logged and skipped; delivery continues.
//!
//! # Concurrency
//!
//! One mutex guards the current theme and the subscriber list. Broadcasts are
//! serialized by a reentrant lock, and callbacks run with the state mutex
//! released, so a subscriber may call back into the registry (including
//! `set_current`) from `apply_theme`. A nested broadcast completes before the
//! outer one resumes.
//!
//! # Failure Modes
//!
//! - **Duplicate subscription**: subscribing the same `Arc` twice stores two
//!   records and delivers every broadcast twice. Nothing guards against this.
//! - **Lingering dead handles**: without broadcasts, dead records are only
//!   reclaimed by [`ThemeRegistry::prune`] or by subscribe-time compaction
//!   (see [`RegistryConfig::compact_threshold`]).

use parking_lot::{Mutex, ReentrantMutex};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use theme_catalog::{get_theme, CatalogError, Theme, ThemeName};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, trace, warn};

use crate::config::{normalize_threshold, RegistryConfig};
use crate::handle::WeakHandle;
use crate::subscriber::Themed;

/// Registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Catalog lookup failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be parsed
    #[error("Invalid registry configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// State guarded by the registry mutex
struct RegistryState {
    current: Theme,
    /// Subscription order is delivery order.
    subscribers: Vec<WeakHandle<dyn Themed>>,
    /// Stored length at which the next subscribe-time compaction runs.
    next_compaction: Option<usize>,
}

impl RegistryState {
    /// Drop dead handles, returning how many were removed
    fn prune(&mut self) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(WeakHandle::is_alive);
        before - self.subscribers.len()
    }
}

/// Holder of the current theme and broadcaster of theme changes
///
/// Construct one at startup and share it as `Arc<ThemeRegistry>`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use parking_lot::Mutex;
/// use theme_catalog::{get_theme, Theme, ThemeName};
/// use theme_state::{ThemeRegistry, Themed};
///
/// struct Label {
///     color: Mutex<Option<Theme>>,
/// }
///
/// impl Themed for Label {
///     fn apply_theme(&self, theme: &Theme) {
///         *self.color.lock() = Some(*theme);
///     }
/// }
///
/// let registry = ThemeRegistry::new();
/// let label = Arc::new(Label { color: Mutex::new(None) });
/// registry.subscribe(&label);
///
/// registry.switch_to(ThemeName::Cyan);
/// assert_eq!(*label.color.lock(), Some(get_theme(ThemeName::Cyan)));
/// ```
pub struct ThemeRegistry {
    state: Mutex<RegistryState>,
    /// Held for the whole of a broadcast.
    broadcast_lock: ReentrantMutex<()>,
    changes: watch::Sender<Theme>,
    broadcasts: AtomicU64,
    compact_threshold: Option<usize>,
}

impl ThemeRegistry {
    /// Create a registry starting on the default theme
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry starting on `name`
    pub fn with_theme(name: ThemeName) -> Self {
        Self::with_config(RegistryConfig::new().default_theme(name))
    }

    /// Create a registry from a configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        let initial = get_theme(config.default_theme);
        let compact_threshold = normalize_threshold(config.compact_threshold);
        let (changes, _) = watch::channel(initial);

        debug!(
            theme.initial = %config.default_theme,
            compact_threshold = ?compact_threshold,
            "Theme registry created"
        );

        Self {
            state: Mutex::new(RegistryState {
                current: initial,
                subscribers: Vec::new(),
                next_compaction: compact_threshold,
            }),
            broadcast_lock: ReentrantMutex::new(()),
            changes,
            broadcasts: AtomicU64::new(0),
            compact_threshold,
        }
    }

    /// Get the current theme
    pub fn current(&self) -> Theme {
        self.state.lock().current
    }

    /// Get the catalog key of the current theme, if it is a catalog entry
    pub fn current_name(&self) -> Option<ThemeName> {
        ThemeName::of(&self.current())
    }

    /// Subscribe to theme changes
    ///
    /// Only a weak handle is stored. Subscribing the same subscriber twice
    /// results in two notifications per broadcast.
    pub fn subscribe<S>(&self, subscriber: &Arc<S>)
    where
        S: Themed + 'static,
    {
        let target: Arc<dyn Themed> = Arc::clone(subscriber) as Arc<dyn Themed>;
        self.subscribe_handle(WeakHandle::new(&target));
    }

    /// Subscribe using an existing handle
    ///
    /// With a compaction threshold configured, dead records are pruned when
    /// the stored list reaches the next compaction point. That point is then
    /// re-armed at twice the surviving length (never below the threshold), so
    /// compaction cost stays amortized as live subscribers accumulate.
    pub fn subscribe_handle(&self, handle: WeakHandle<dyn Themed>) {
        let mut state = self.state.lock();

        if let (Some(threshold), Some(limit)) = (self.compact_threshold, state.next_compaction) {
            if state.subscribers.len() >= limit {
                let removed = state.prune();
                let remaining = state.subscribers.len();
                state.next_compaction = Some(threshold.max(remaining.saturating_mul(2)));
                trace!(
                    removed,
                    remaining,
                    next_compaction = ?state.next_compaction,
                    "Compacted theme subscribers"
                );
            }
        }

        state.subscribers.push(handle);
        debug!(
            subscribers = state.subscribers.len(),
            "Theme subscriber registered"
        );
    }

    /// Replace the current theme and notify every live subscriber
    ///
    /// Broadcasts unconditionally, even if `theme` equals the current theme.
    /// Returns once every live subscriber has been called.
    pub fn set_current(&self, theme: Theme) {
        let _broadcast = self.broadcast_lock.lock();

        let (previous, live) = {
            let mut state = self.state.lock();
            let previous = std::mem::replace(&mut state.current, theme);

            let removed = state.prune();
            if removed > 0 {
                trace!(
                    removed,
                    remaining = state.subscribers.len(),
                    "Pruned dead theme subscribers"
                );
            }

            let live: Vec<Arc<dyn Themed>> =
                state.subscribers.iter().filter_map(WeakHandle::get).collect();
            (previous, live)
        };

        self.broadcasts.fetch_add(1, Ordering::Relaxed);
        info!(
            theme.from = ?ThemeName::of(&previous),
            theme.to = ?ThemeName::of(&theme),
            subscribers = live.len(),
            "Theme changed"
        );

        self.changes.send_replace(theme);

        for (index, subscriber) in live.into_iter().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| subscriber.apply_theme(&theme)));
            if let Err(payload) = result {
                warn!(
                    subscriber.index = index,
                    panic = panic_message(payload.as_ref()),
                    "Theme subscriber panicked"
                );
            }
        }
    }

    /// Switch to a catalog theme
    pub fn switch_to(&self, name: ThemeName) {
        self.set_current(get_theme(name));
    }

    /// Switch to a catalog theme given by its string key
    pub fn switch_to_named(&self, name: &str) -> Result<()> {
        let name: ThemeName = name.parse()?;
        self.switch_to(name);
        Ok(())
    }

    /// Remove dead subscriber records now, returning how many were removed
    pub fn prune(&self) -> usize {
        let removed = self.state.lock().prune();
        if removed > 0 {
            trace!(removed, "Pruned dead theme subscribers");
        }
        removed
    }

    /// Receive every broadcast theme through a watch channel
    ///
    /// The receiver starts out holding the current theme.
    pub fn watch(&self) -> watch::Receiver<Theme> {
        self.changes.subscribe()
    }

    /// Number of stored subscriber records, including dead ones not yet pruned
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }

    /// Number of stored subscriber records whose target is alive
    pub fn live_subscriber_count(&self) -> usize {
        self.state
            .lock()
            .subscribers
            .iter()
            .filter(|handle| handle.is_alive())
            .count()
    }

    /// Number of broadcasts performed so far
    pub fn broadcast_count(&self) -> u64 {
        self.broadcasts.load(Ordering::Relaxed)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ThemeRegistry")
            .field("current", &ThemeName::of(&state.current))
            .field("subscriber_count", &state.subscribers.len())
            .field("broadcasts", &self.broadcast_count())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}
