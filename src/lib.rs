//! Doze (ambient display) settings control.
//!
//! This crate keeps a doze settings screen consistent: it wires the master
//! switch, the wake-gesture toggles, the ambient light color controls and
//! the ambient music ticker to a persisted settings store, and derives
//! which controls are interactable at any moment.
//!
//! The controller itself is pure policy. Persistence is an injected
//! [`SettingsStore`] (the platform's settings provider plus the screen's
//! private preferences), and the background service is reached through a
//! [`ServiceCheck`] collaborator that is poked after every mutation. UI
//! toolkits render the [`DozeState`] each operation returns.
//!
//! # Example
//!
//! ```
//! use doze_core::{
//!     ColorMode, Control, DozeController, LoggingServiceCheck, MemoryStore,
//!     SettingsDozeController,
//! };
//!
//! let controller = SettingsDozeController::new(
//!     MemoryStore::new(),
//!     MemoryStore::new(),
//!     LoggingServiceCheck,
//! );
//!
//! // Turn doze on and hand the color picker to the user.
//! controller.set_feature_enabled(true);
//! let state = controller.set_color_mode(ColorMode::Custom);
//! assert!(state.enabled(Control::AmbientColor));
//!
//! // Turning doze off disables everything and disarms the ticker.
//! let state = controller.set_feature_enabled(false);
//! assert!(!state.enabled(Control::AmbientMusicTicker));
//! assert!(!state.music_ticker);
//! ```
//!
//! # Testing
//!
//! [`MemoryStore`] and [`CountingServiceCheck`] stand in for the platform
//! boundaries, including injected read/write faults:
//!
//! ```
//! use doze_core::{DozeController, LoggingServiceCheck, MemoryStore, SettingsDozeController};
//!
//! let store = MemoryStore::new();
//! store.fail_writes(true);
//! let controller = SettingsDozeController::new(store, MemoryStore::new(), LoggingServiceCheck);
//!
//! // Persistence is best effort; the screen state still reflects the intent.
//! assert!(controller.set_feature_enabled(true).doze_enabled);
//! ```

#![warn(missing_docs)]

mod color;
mod controller;
mod controls;
mod error;
mod mock;
mod service;
mod state;
pub mod store;

// Re-export public API
pub use color::ColorMode;
pub use controller::{DozeController, SettingsDozeController};
pub use controls::{Control, Gesture};
pub use error::StoreError;
pub use mock::{CountingServiceCheck, MemoryStore};
pub use service::{LoggingServiceCheck, ServiceCheck};
pub use state::DozeState;
pub use store::SettingsStore;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    type TestController =
        SettingsDozeController<Arc<MemoryStore>, Arc<MemoryStore>, Arc<CountingServiceCheck>>;

    struct Harness {
        system: Arc<MemoryStore>,
        prefs: Arc<MemoryStore>,
        service: Arc<CountingServiceCheck>,
        controller: TestController,
    }

    fn harness() -> Harness {
        let system = Arc::new(MemoryStore::new());
        let prefs = Arc::new(MemoryStore::new());
        let service = Arc::new(CountingServiceCheck::new());
        let controller = SettingsDozeController::new(
            Arc::clone(&system),
            Arc::clone(&prefs),
            Arc::clone(&service),
        );
        Harness {
            system,
            prefs,
            service,
            controller,
        }
    }

    #[test]
    fn test_everything_disabled_while_doze_off() {
        let h = harness();

        let state = h.controller.set_feature_enabled(false);
        for control in Control::ALL {
            assert!(!state.enabled(control), "{:?} should be disabled", control);
        }
    }

    #[test]
    fn test_color_picker_follows_color_mode() {
        let h = harness();
        h.controller.set_feature_enabled(true);

        let state = h.controller.set_color_mode(ColorMode::Custom);
        assert!(state.enabled(Control::AmbientColor));

        let state = h.controller.set_color_mode(ColorMode::Automatic);
        assert!(!state.enabled(Control::AmbientColor));
        // The mode picker itself stays usable either way.
        assert!(state.enabled(Control::AmbientColorMode));
    }

    #[test]
    fn test_disabling_doze_disarms_the_ticker() {
        let h = harness();
        h.controller.set_feature_enabled(true);
        h.controller.set_music_ticker(true);

        let state = h.controller.set_feature_enabled(false);
        assert!(!state.music_ticker);
        assert!(!state.enabled(Control::AmbientMusicTicker));
        // The reset is persisted, not just a UI disable.
        assert!(!h.system.get_bool(store::AMBIENT_MUSIC_TICKER).unwrap());
    }

    #[test]
    fn test_disable_scenario_with_custom_color() {
        let h = harness();
        h.controller.set_feature_enabled(true);
        h.controller.set_color_mode(ColorMode::Custom);
        h.controller.set_music_ticker(true);

        let state = h.controller.set_feature_enabled(false);
        assert!(!state.enabled(Control::AmbientColor));
        assert!(!state.enabled(Control::AmbientMusicTicker));
        assert!(!state.music_ticker);
        assert!(!h.system.get_bool(store::AMBIENT_MUSIC_TICKER).unwrap());
    }

    #[test]
    fn test_mode_switch_only_moves_the_color_picker() {
        let h = harness();
        h.controller.set_feature_enabled(true);
        let before = h.controller.set_color_mode(ColorMode::Automatic);

        let after = h.controller.set_color_mode(ColorMode::Custom);
        assert!(!before.enabled(Control::AmbientColor));
        assert!(after.enabled(Control::AmbientColor));

        // Nothing else moved.
        let mut rewound = after.clone();
        rewound.color_mode = ColorMode::Automatic;
        assert_eq!(rewound, before);
        for control in Control::ALL {
            if control != Control::AmbientColor {
                assert_eq!(before.enabled(control), after.enabled(control));
            }
        }
    }

    #[test]
    fn test_reenabling_reapplies_the_color_rule() {
        let h = harness();
        h.controller.set_feature_enabled(true);
        h.controller.set_color_mode(ColorMode::Custom);
        h.controller.set_feature_enabled(false);

        let state = h.controller.set_feature_enabled(true);
        assert!(state.enabled(Control::AmbientColor));
    }

    #[test]
    fn test_load_initial_state_reads_without_side_effects() {
        let h = harness();
        h.system.seed_bool(store::DOZE_ENABLED, true);
        h.system.seed_int(store::PULSE_AMBIENT_LIGHT_COLOR_MODE, 2);
        h.system.seed_bool(store::AMBIENT_MUSIC_TICKER, true);
        h.system.seed_bool(store::GESTURE_PICK_UP, true);

        let state = h.controller.load_initial_state();
        assert!(state.doze_enabled);
        assert_eq!(state.color_mode, ColorMode::Custom);
        assert!(state.music_ticker);
        assert!(state.pick_up);
        assert!(state.enabled(Control::AmbientColor));

        // No service recheck on a plain load.
        assert_eq!(h.service.count(), 0);
    }

    #[test]
    fn test_empty_store_falls_back_to_defaults() {
        let h = harness();

        let state = h.controller.load_initial_state();
        assert_eq!(state, DozeState::default());
        assert_eq!(state.color_mode, ColorMode::Automatic);
        assert_eq!(state.ambient_color, store::DEFAULT_AMBIENT_COLOR);
    }

    #[test]
    fn test_corrupt_color_mode_falls_back_to_automatic() {
        let h = harness();
        h.system.seed_int(store::PULSE_AMBIENT_LIGHT_COLOR_MODE, 7);

        let state = h.controller.load_initial_state();
        assert_eq!(state.color_mode, ColorMode::Automatic);
    }

    #[test]
    fn test_write_faults_are_non_fatal() {
        let h = harness();
        h.system.fail_writes(true);

        let state = h.controller.set_feature_enabled(true);
        assert!(state.doze_enabled);
        assert!(state.enabled(Control::PickUp));
        // Nothing reached the store.
        assert!(h.system.get_bool(store::DOZE_ENABLED).is_err());

        // The service is still nudged so it can reconcile on its own.
        assert_eq!(h.service.count(), 1);
    }

    #[test]
    fn test_service_rechecked_after_every_mutation() {
        let h = harness();

        h.controller.set_feature_enabled(true);
        h.controller.set_gesture(Gesture::PickUp, true);
        h.controller.set_gesture(Gesture::HandWave, true);
        h.controller.set_gesture(Gesture::Pocket, false);
        h.controller.set_color_mode(ColorMode::Custom);
        h.controller.set_ambient_color(0x00FF00);
        h.controller.set_music_ticker(true);
        assert_eq!(h.service.count(), 7);
    }

    #[test]
    fn test_gesture_toggles_persist() {
        let h = harness();
        h.controller.set_feature_enabled(true);

        let state = h.controller.set_gesture(Gesture::HandWave, true);
        assert!(state.hand_wave);
        assert!(h.system.get_bool(store::GESTURE_HAND_WAVE).unwrap());
        assert_eq!(Gesture::HandWave.control(), Control::HandWave);
    }

    #[test]
    fn test_first_run_help_is_shown_once() {
        let h = harness();

        assert!(h.controller.should_show_help());
        h.controller.mark_help_shown();
        assert!(!h.controller.should_show_help());
        assert!(h.prefs.get_bool(store::FIRST_HELP_SHOWN).unwrap());
    }

    #[test]
    fn test_missing_proximity_sensor_hides_the_category() {
        let system = Arc::new(MemoryStore::new());
        let controller = SettingsDozeController::new(
            Arc::clone(&system),
            MemoryStore::new(),
            CountingServiceCheck::new(),
        )
        .with_proximity(false);

        let state = controller.load_initial_state();
        assert!(!state.proximity_visible);

        // Visibility is capability-driven, not switch-driven.
        let state = controller.set_feature_enabled(true);
        assert!(!state.proximity_visible);
    }

    #[test]
    fn test_color_mode_raw_round_trip() {
        assert_eq!(ColorMode::from_raw(1), Some(ColorMode::Automatic));
        assert_eq!(ColorMode::from_raw(2), Some(ColorMode::Custom));
        assert_eq!(ColorMode::from_raw(0), None);
        assert_eq!(ColorMode::Automatic.as_raw(), 1);
        assert_eq!(ColorMode::Custom.as_raw(), 2);
    }
}
