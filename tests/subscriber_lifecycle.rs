//! Subscriber Lifecycle Tests
//!
//! Screens subscribe while loading and are released by their owner; the
//! registry must never keep them alive or call them afterwards.

use mockall::mock;
use parking_lot::Mutex;
use std::sync::Arc;
use theme_catalog::{get_theme, Color, Theme, ThemeName};
use theme_state::{ThemeRegistry, Themed, WeakHandle};

mock! {
    Screen {}

    impl Themed for Screen {
        fn apply_theme(&self, theme: &Theme);
    }
}

/// A screen that styles a label and a button from the current theme
struct SettingsScreen {
    registry: Arc<ThemeRegistry>,
    label_color: Mutex<Color>,
    button_tint: Mutex<Color>,
}

impl SettingsScreen {
    /// Build the screen, subscribe it, and apply the current theme
    fn load(registry: &Arc<ThemeRegistry>) -> Arc<Self> {
        let current = registry.current();
        let screen = Arc::new(Self {
            registry: Arc::clone(registry),
            label_color: Mutex::new(current.nav),
            button_tint: Mutex::new(current.nav),
        });
        registry.subscribe(&screen);
        screen
    }

    fn tap_switch(&self, name: ThemeName) {
        self.registry.switch_to(name);
    }
}

impl Themed for SettingsScreen {
    fn apply_theme(&self, _theme: &Theme) {
        // Reads back through the registry rather than using the argument.
        let current = self.registry.current();
        *self.label_color.lock() = current.nav;
        *self.button_tint.lock() = current.button;
    }
}

/// A second screen that only tracks the navigation background
struct DetailScreen {
    background: Mutex<Color>,
}

impl Themed for DetailScreen {
    fn apply_theme(&self, theme: &Theme) {
        *self.background.lock() = theme.nav;
    }
}

/// A screen whose redraw always fails
struct BrokenScreen;

impl Themed for BrokenScreen {
    fn apply_theme(&self, _theme: &Theme) {
        panic!("screen failed to redraw");
    }
}

#[test]
fn test_screen_switches_its_own_theme() {
    let registry = Arc::new(ThemeRegistry::new());
    let screen = SettingsScreen::load(&registry);
    assert_eq!(*screen.label_color.lock(), get_theme(ThemeName::Red).nav);

    screen.tap_switch(ThemeName::Cyan);

    let cyan = get_theme(ThemeName::Cyan);
    assert_eq!(*screen.label_color.lock(), cyan.nav);
    assert_eq!(*screen.button_tint.lock(), cyan.button);
}

#[test]
fn test_all_screens_follow_a_switch() {
    let registry = Arc::new(ThemeRegistry::new());
    let settings = SettingsScreen::load(&registry);
    let detail = Arc::new(DetailScreen {
        background: Mutex::new(registry.current().nav),
    });
    registry.subscribe(&detail);

    settings.tap_switch(ThemeName::Orange);

    assert_eq!(*detail.background.lock(), get_theme(ThemeName::Orange).nav);
    assert_eq!(*settings.label_color.lock(), get_theme(ThemeName::Orange).nav);
}

#[test]
fn test_closed_screen_is_released() {
    let registry = Arc::new(ThemeRegistry::new());
    let detail = Arc::new(DetailScreen {
        background: Mutex::new(Color::WHITE),
    });
    registry.subscribe(&detail);
    let handle = WeakHandle::new(&detail);

    drop(detail);

    assert!(!handle.is_alive());
    assert_eq!(registry.live_subscriber_count(), 0);
    registry.switch_to(ThemeName::Black);
    assert_eq!(registry.subscriber_count(), 0);
}

#[test]
fn test_screen_holding_registry_does_not_leak() {
    let registry = Arc::new(ThemeRegistry::new());
    let screen = SettingsScreen::load(&registry);
    assert_eq!(Arc::strong_count(&registry), 2);

    drop(screen);

    assert_eq!(Arc::strong_count(&registry), 1);
    registry.switch_to(ThemeName::Black);
    assert_eq!(registry.subscriber_count(), 0);
}

#[test]
fn test_mock_screen_notified_per_switch() {
    let registry = ThemeRegistry::new();
    let mut screen = MockScreen::new();
    screen
        .expect_apply_theme()
        .withf(|theme| *theme == get_theme(ThemeName::Black))
        .times(2)
        .return_const(());

    let screen = Arc::new(screen);
    registry.subscribe(&screen);

    registry.switch_to(ThemeName::Black);
    registry.switch_to(ThemeName::Black);
}

#[test]
fn test_mock_screen_survives_faulty_neighbour() {
    let registry = ThemeRegistry::new();

    let faulty = Arc::new(BrokenScreen);

    let mut healthy = MockScreen::new();
    healthy
        .expect_apply_theme()
        .withf(|theme| *theme == get_theme(ThemeName::DarkBlue))
        .times(1)
        .return_const(());
    let healthy = Arc::new(healthy);

    registry.subscribe(&faulty);
    registry.subscribe(&healthy);

    registry.switch_to(ThemeName::DarkBlue);
    assert_eq!(registry.current_name(), Some(ThemeName::DarkBlue));
}
