//! The platform settings store boundary.

use crate::error::StoreError;
use std::sync::Arc;

/// Key for the doze master switch (system store, bool).
pub const DOZE_ENABLED: &str = "doze_enabled";

/// Key for the pick-up gesture toggle (system store, bool).
pub const GESTURE_PICK_UP: &str = "gesture_pick_up";

/// Key for the hand-wave gesture toggle (system store, bool).
pub const GESTURE_HAND_WAVE: &str = "gesture_hand_wave";

/// Key for the pocket gesture toggle (system store, bool).
pub const GESTURE_POCKET: &str = "gesture_pocket";

/// Key for the ambient light color mode (system store, int).
///
/// See [`ColorMode`](crate::ColorMode) for the raw values.
pub const PULSE_AMBIENT_LIGHT_COLOR_MODE: &str = "pulse_ambient_light_color_mode";

/// Key for the custom ambient light color (system store, ARGB int).
pub const PULSE_AMBIENT_LIGHT_COLOR: &str = "pulse_ambient_light_color";

/// Key for the ambient music ticker toggle (system store, bool).
pub const AMBIENT_MUSIC_TICKER: &str = "ambient_music_ticker";

/// Key for the first-run help flag (private prefs store, bool).
pub const FIRST_HELP_SHOWN: &str = "first_help_shown";

/// Default custom ambient light color (the platform's edge-light blue).
pub const DEFAULT_AMBIENT_COLOR: i32 = 0x3980FF;

/// Injected key-value settings storage.
///
/// Two instances back the controller: the platform's system settings
/// provider and the screen's private preferences (first-run help flag).
/// Implementations report [`StoreError`] and leave fallback policy to the
/// caller.
pub trait SettingsStore: Send + Sync {
    /// Read a boolean value.
    fn get_bool(&self, key: &str) -> Result<bool, StoreError>;

    /// Write a boolean value.
    fn set_bool(&self, key: &str, value: bool) -> Result<(), StoreError>;

    /// Read an integer value.
    fn get_int(&self, key: &str) -> Result<i32, StoreError>;

    /// Write an integer value.
    fn set_int(&self, key: &str, value: i32) -> Result<(), StoreError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn get_bool(&self, key: &str) -> Result<bool, StoreError> {
        (**self).get_bool(key)
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), StoreError> {
        (**self).set_bool(key, value)
    }

    fn get_int(&self, key: &str) -> Result<i32, StoreError> {
        (**self).get_int(key)
    }

    fn set_int(&self, key: &str, value: i32) -> Result<(), StoreError> {
        (**self).set_int(key, value)
    }
}
