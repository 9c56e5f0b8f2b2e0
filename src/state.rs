//! Settings screen state snapshot.

use crate::color::ColorMode;
use crate::controls::Control;

/// A snapshot of the doze settings screen state.
///
/// Captures the persisted values at a point in time; enabled states are
/// derived through [`DozeState::enabled`] so they can never drift from the
/// master switch. Use
/// [`DozeController::load_initial_state`](crate::DozeController::load_initial_state)
/// to obtain a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DozeState {
    /// The master switch value.
    pub doze_enabled: bool,
    /// The ambient light color mode.
    pub color_mode: ColorMode,
    /// The custom ambient light color (ARGB).
    pub ambient_color: i32,
    /// The persisted ambient music ticker value.
    pub music_ticker: bool,
    /// The pick-up gesture toggle value.
    pub pick_up: bool,
    /// The hand-wave gesture toggle value.
    pub hand_wave: bool,
    /// The pocket gesture toggle value.
    pub pocket: bool,
    /// Whether the proximity sensor category is shown at all.
    pub proximity_visible: bool,
}

impl DozeState {
    /// Enabled state of a control under the derivation rule.
    pub fn enabled(&self, control: Control) -> bool {
        control.enabled_in(self.doze_enabled, self.color_mode)
    }
}

impl Default for DozeState {
    fn default() -> Self {
        Self {
            doze_enabled: false,
            color_mode: ColorMode::Automatic,
            ambient_color: crate::store::DEFAULT_AMBIENT_COLOR,
            music_ticker: false,
            pick_up: false,
            hand_wave: false,
            pocket: false,
            proximity_visible: true,
        }
    }
}
