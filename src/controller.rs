//! Doze settings controller implementation.

use crate::color::ColorMode;
use crate::controls::Gesture;
use crate::service::ServiceCheck;
use crate::state::DozeState;
use crate::store::{self, SettingsStore};

use log::{debug, info, warn};

// =============================================================================
// Doze Controller Trait
// =============================================================================

/// Trait for doze settings controller implementations.
///
/// This is the seam between the settings screen and the platform: UI
/// adapters hold a controller and render the [`DozeState`] it returns after
/// every operation.
pub trait DozeController: Send + Sync {
    /// Read the persisted values and derive the screen state.
    ///
    /// Performs no writes and does not touch the service check.
    fn load_initial_state(&self) -> DozeState;

    /// Flip the doze master switch.
    ///
    /// Turning the switch off forces the persisted ambient music ticker to
    /// `false` before the dependent controls are disabled; turning it on
    /// re-evaluates the color picker through the color-mode rule.
    fn set_feature_enabled(&self, enabled: bool) -> DozeState;

    /// Change the ambient light color mode.
    fn set_color_mode(&self, mode: ColorMode) -> DozeState;

    /// Toggle one wake gesture.
    fn set_gesture(&self, gesture: Gesture, on: bool) -> DozeState;

    /// Pick a custom ambient light color (ARGB).
    fn set_ambient_color(&self, argb: i32) -> DozeState;

    /// Toggle the ambient music ticker.
    fn set_music_ticker(&self, on: bool) -> DozeState;

    /// Whether the first-run help dialog should be shown.
    fn should_show_help(&self) -> bool;

    /// Record that the help dialog was dismissed.
    fn mark_help_shown(&self);
}

// =============================================================================
// SettingsDozeController
// =============================================================================

/// The doze settings controller.
///
/// Persists values through an injected [`SettingsStore`] pair (the system
/// settings provider and the screen's private preferences) and keeps the
/// dependent controls consistent with the master switch. Store failures are
/// absorbed here: reads fall back to the documented defaults, writes are
/// logged and dropped — the screen never blocks on persistence.
///
/// # Example
///
/// ```
/// use doze_core::{DozeController, LoggingServiceCheck, MemoryStore, SettingsDozeController};
///
/// let controller = SettingsDozeController::new(
///     MemoryStore::new(),
///     MemoryStore::new(),
///     LoggingServiceCheck,
/// );
/// let state = controller.set_feature_enabled(true);
/// assert!(state.doze_enabled);
/// ```
pub struct SettingsDozeController<S, P, C> {
    system: S,
    prefs: P,
    service: C,
    proximity_supported: bool,
}

impl<S, P, C> SettingsDozeController<S, P, C>
where
    S: SettingsStore,
    P: SettingsStore,
    C: ServiceCheck,
{
    /// Create a controller over the system store, the screen's private
    /// preferences and the service-check collaborator.
    pub fn new(system: S, prefs: P, service: C) -> Self {
        Self {
            system,
            prefs,
            service,
            proximity_supported: true,
        }
    }

    /// Declare whether the device has the proximity sensor the pulse check
    /// needs. Unsupported devices hide the proximity category entirely.
    pub fn with_proximity(mut self, supported: bool) -> Self {
        self.proximity_supported = supported;
        self
    }

    fn read_bool(&self, key: &str, default: bool) -> bool {
        match self.system.get_bool(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("read of '{}' failed ({}), using {}", key, e, default);
                default
            }
        }
    }

    fn write_bool(&self, key: &str, value: bool) {
        if let Err(e) = self.system.set_bool(key, value) {
            warn!("write of '{}' dropped: {}", key, e);
        }
    }

    fn write_int(&self, key: &str, value: i32) {
        if let Err(e) = self.system.set_int(key, value) {
            warn!("write of '{}' dropped: {}", key, e);
        }
    }

    fn read_color_mode(&self) -> ColorMode {
        match self.system.get_int(store::PULSE_AMBIENT_LIGHT_COLOR_MODE) {
            Ok(raw) => ColorMode::from_raw(raw).unwrap_or_else(|| {
                warn!("unknown color mode {}, using Automatic", raw);
                ColorMode::Automatic
            }),
            Err(e) => {
                warn!("color mode read failed ({}), using Automatic", e);
                ColorMode::Automatic
            }
        }
    }

    fn read_ambient_color(&self) -> i32 {
        match self.system.get_int(store::PULSE_AMBIENT_LIGHT_COLOR) {
            Ok(argb) => argb,
            Err(e) => {
                warn!(
                    "ambient color read failed ({}), using {:#08x}",
                    e,
                    store::DEFAULT_AMBIENT_COLOR
                );
                store::DEFAULT_AMBIENT_COLOR
            }
        }
    }

    fn snapshot(&self) -> DozeState {
        DozeState {
            doze_enabled: self.read_bool(store::DOZE_ENABLED, false),
            color_mode: self.read_color_mode(),
            ambient_color: self.read_ambient_color(),
            music_ticker: self.read_bool(store::AMBIENT_MUSIC_TICKER, false),
            pick_up: self.read_bool(store::GESTURE_PICK_UP, false),
            hand_wave: self.read_bool(store::GESTURE_HAND_WAVE, false),
            pocket: self.read_bool(store::GESTURE_POCKET, false),
            proximity_visible: self.proximity_supported,
        }
    }
}

impl<S, P, C> DozeController for SettingsDozeController<S, P, C>
where
    S: SettingsStore,
    P: SettingsStore,
    C: ServiceCheck,
{
    fn load_initial_state(&self) -> DozeState {
        let state = self.snapshot();
        debug!(
            "initial state: doze={}, color_mode={:?}, ticker={}",
            state.doze_enabled, state.color_mode, state.music_ticker
        );
        state
    }

    fn set_feature_enabled(&self, enabled: bool) -> DozeState {
        info!("doze {}", if enabled { "enabled" } else { "disabled" });
        self.write_bool(store::DOZE_ENABLED, enabled);
        if !enabled {
            // Cascading reset: the ticker must not stay armed while doze is off.
            self.write_bool(store::AMBIENT_MUSIC_TICKER, false);
        }

        let mut state = self.snapshot();
        state.doze_enabled = enabled;
        if !enabled {
            state.music_ticker = false;
        }

        self.service.recheck();
        state
    }

    fn set_color_mode(&self, mode: ColorMode) -> DozeState {
        debug!("color mode -> {:?}", mode);
        self.write_int(store::PULSE_AMBIENT_LIGHT_COLOR_MODE, mode.as_raw());

        let mut state = self.snapshot();
        state.color_mode = mode;

        self.service.recheck();
        state
    }

    fn set_gesture(&self, gesture: Gesture, on: bool) -> DozeState {
        debug!("gesture {:?} -> {}", gesture, on);
        self.write_bool(gesture.key(), on);

        let mut state = self.snapshot();
        match gesture {
            Gesture::PickUp => state.pick_up = on,
            Gesture::HandWave => state.hand_wave = on,
            Gesture::Pocket => state.pocket = on,
        }

        self.service.recheck();
        state
    }

    fn set_ambient_color(&self, argb: i32) -> DozeState {
        debug!("ambient color -> {:#08x}", argb);
        self.write_int(store::PULSE_AMBIENT_LIGHT_COLOR, argb);

        let mut state = self.snapshot();
        state.ambient_color = argb;

        self.service.recheck();
        state
    }

    fn set_music_ticker(&self, on: bool) -> DozeState {
        debug!("music ticker -> {}", on);
        self.write_bool(store::AMBIENT_MUSIC_TICKER, on);

        let mut state = self.snapshot();
        state.music_ticker = on;

        self.service.recheck();
        state
    }

    fn should_show_help(&self) -> bool {
        match self.prefs.get_bool(store::FIRST_HELP_SHOWN) {
            Ok(shown) => !shown,
            // Absent flag means the screen was never opened before.
            Err(_) => true,
        }
    }

    fn mark_help_shown(&self) {
        if let Err(e) = self.prefs.set_bool(store::FIRST_HELP_SHOWN, true) {
            warn!("write of '{}' dropped: {}", store::FIRST_HELP_SHOWN, e);
        }
    }
}
