//! Example: Toggle doze on/off and watch the dependent controls follow.
//!
//! Run with: `cargo run --example toggle_doze`

use doze_core::{
    ColorMode, Control, DozeController, LoggingServiceCheck, MemoryStore, SettingsDozeController,
};

fn main() {
    // Initialize logging (optional)
    env_logger::init();

    // A real host injects the platform settings provider here.
    let controller = SettingsDozeController::new(
        MemoryStore::new(),
        MemoryStore::new(),
        LoggingServiceCheck,
    );

    let state = controller.load_initial_state();
    println!(
        "Initial state: doze={}, color_mode={:?}",
        state.doze_enabled, state.color_mode
    );

    // Turn doze on, pick a custom color, arm the ticker.
    controller.set_feature_enabled(true);
    controller.set_color_mode(ColorMode::Custom);
    let state = controller.set_music_ticker(true);
    println!(
        "Doze on: color picker enabled={}, ticker={}",
        state.enabled(Control::AmbientColor),
        state.music_ticker
    );

    // Turning doze back off cascades: everything disables, ticker disarms.
    let state = controller.set_feature_enabled(false);
    println!(
        "Doze off: color picker enabled={}, ticker={}",
        state.enabled(Control::AmbientColor),
        state.music_ticker
    );
}
