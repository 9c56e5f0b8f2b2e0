//! Dependent controls and the enable-derivation rule.

use crate::color::ColorMode;
use crate::store;

/// A control on the doze settings screen whose enabled state follows the
/// master switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Pick-up gesture toggle.
    PickUp,
    /// Hand-wave gesture toggle.
    HandWave,
    /// Pocket gesture toggle.
    Pocket,
    /// Ambient light color mode picker.
    AmbientColorMode,
    /// Ambient light color picker.
    AmbientColor,
    /// Ambient music ticker toggle.
    AmbientMusicTicker,
    /// Proximity sensor category header.
    ProximityCategory,
    /// Ambient light category header.
    AmbientLightCategory,
    /// Double tap category header.
    DoubleTapCategory,
    /// Tilt sensor category header.
    TiltCategory,
}

impl Control {
    /// Every control on the screen.
    pub const ALL: [Control; 10] = [
        Control::PickUp,
        Control::HandWave,
        Control::Pocket,
        Control::AmbientColorMode,
        Control::AmbientColor,
        Control::AmbientMusicTicker,
        Control::ProximityCategory,
        Control::AmbientLightCategory,
        Control::DoubleTapCategory,
        Control::TiltCategory,
    ];

    /// Whether this control is interactable given the master switch and the
    /// current color mode.
    ///
    /// Every control follows the master switch; the color picker additionally
    /// requires [`ColorMode::Custom`].
    pub fn enabled_in(self, doze_enabled: bool, color_mode: ColorMode) -> bool {
        match self {
            Control::AmbientColor => doze_enabled && color_mode == ColorMode::Custom,
            _ => doze_enabled,
        }
    }
}

/// A sensor-triggered wake gesture, each independently toggleable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Wake when the device is picked up.
    PickUp,
    /// Wake on a hand wave over the proximity sensor.
    HandWave,
    /// Wake when the device leaves a pocket.
    Pocket,
}

impl Gesture {
    /// The settings store key holding this gesture's toggle.
    pub fn key(self) -> &'static str {
        match self {
            Gesture::PickUp => store::GESTURE_PICK_UP,
            Gesture::HandWave => store::GESTURE_HAND_WAVE,
            Gesture::Pocket => store::GESTURE_POCKET,
        }
    }

    /// The screen control bound to this gesture.
    pub fn control(self) -> Control {
        match self {
            Gesture::PickUp => Control::PickUp,
            Gesture::HandWave => Control::HandWave,
            Gesture::Pocket => Control::Pocket,
        }
    }
}
