use doze_core::{
    ColorMode, Control, DozeController, DozeState, Gesture, LoggingServiceCheck, MemoryStore,
    SettingsDozeController,
};
use iced::widget::{button, column, container, row, text, toggler};
use iced::{Element, Task, Theme};

pub fn main() -> iced::Result {
    iced::application(
        DozeSettingsApp::default,
        DozeSettingsApp::update,
        DozeSettingsApp::view,
    )
    .title("Doze - Ambient Display Settings")
    .theme(DozeSettingsApp::theme)
    .run()
}

const COLOR_PRESETS: [(&str, i32); 4] = [
    ("Blue", 0x3980FF),
    ("Green", 0x21D07C),
    ("Red", 0xFF4444),
    ("Purple", 0x9C27B0),
];

struct DozeSettingsApp {
    controller: SettingsDozeController<MemoryStore, MemoryStore, LoggingServiceCheck>,
    state: DozeState,
    show_help: bool,
}

#[derive(Debug, Clone)]
enum Message {
    ToggleDoze(bool),
    ToggleGesture(Gesture, bool),
    SetColorMode(ColorMode),
    PickColor(i32),
    ToggleTicker(bool),
    DismissHelp,
}

impl Default for DozeSettingsApp {
    fn default() -> Self {
        // A real host injects the platform settings provider here.
        let controller = SettingsDozeController::new(
            MemoryStore::new(),
            MemoryStore::new(),
            LoggingServiceCheck,
        );
        let state = controller.load_initial_state();
        let show_help = controller.should_show_help();

        Self {
            controller,
            state,
            show_help,
        }
    }
}

impl DozeSettingsApp {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleDoze(on) => {
                self.state = self.controller.set_feature_enabled(on);
            }

            Message::ToggleGesture(gesture, on) => {
                self.state = self.controller.set_gesture(gesture, on);
            }

            Message::SetColorMode(mode) => {
                self.state = self.controller.set_color_mode(mode);
            }

            Message::PickColor(argb) => {
                self.state = self.controller.set_ambient_color(argb);
            }

            Message::ToggleTicker(on) => {
                self.state = self.controller.set_music_ticker(on);
            }

            Message::DismissHelp => {
                self.controller.mark_help_shown();
                self.show_help = false;
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let title = text("Ambient Display").size(24);

        let help_section = if self.show_help {
            column![
                text("Doze briefly wakes the screen for notifications and gestures.").size(14),
                button("Got it").on_press(Message::DismissHelp),
            ]
            .spacing(5)
        } else {
            column![]
        };

        // Master switch
        let master_section = column![
            text(if self.state.doze_enabled { "On" } else { "Off" }).size(16),
            toggler(self.state.doze_enabled)
                .label("Doze")
                .on_toggle(Message::ToggleDoze),
        ]
        .spacing(5);

        // Tilt sensor gestures
        let tilt_section = column![
            text("Tilt sensor").size(16),
            gesture_toggler("Pick-up", Gesture::PickUp, self.state.pick_up, &self.state),
        ]
        .spacing(5);

        // Proximity sensor gestures (hidden when the device has no sensor)
        let proximity_section = if self.state.proximity_visible {
            column![
                text("Proximity sensor").size(16),
                gesture_toggler(
                    "Hand wave",
                    Gesture::HandWave,
                    self.state.hand_wave,
                    &self.state,
                ),
                gesture_toggler("Pocket", Gesture::Pocket, self.state.pocket, &self.state),
            ]
            .spacing(5)
        } else {
            column![]
        };

        // Ambient light color
        let mode_enabled = self.state.enabled(Control::AmbientColorMode);
        let mode_buttons = row![
            mode_button(
                "Automatic",
                ColorMode::Automatic,
                self.state.color_mode,
                mode_enabled,
            ),
            mode_button(
                "Custom",
                ColorMode::Custom,
                self.state.color_mode,
                mode_enabled,
            ),
        ]
        .spacing(10);

        let color_enabled = self.state.enabled(Control::AmbientColor);
        let mut swatches = row![].spacing(10);
        for (label, argb) in COLOR_PRESETS {
            swatches = swatches.push(color_button(label, argb, color_enabled));
        }

        let ambient_light_section = column![
            text("Ambient light").size(16),
            mode_buttons,
            text(format!("Color: #{:06X}", self.state.ambient_color & 0xFFFFFF)).size(14),
            swatches,
        ]
        .spacing(5);

        // Music ticker
        let ticker = toggler(self.state.music_ticker).label("Pulse on new tracks");
        let ticker = if self.state.enabled(Control::AmbientMusicTicker) {
            ticker.on_toggle(Message::ToggleTicker)
        } else {
            ticker
        };
        let ticker_section = column![text("Music").size(16), ticker].spacing(5);

        let content = column![
            title,
            help_section,
            master_section,
            tilt_section,
            proximity_section,
            ambient_light_section,
            ticker_section,
        ]
        .spacing(15)
        .padding(20);

        container(content).into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn gesture_toggler<'a>(
    label: &'a str,
    gesture: Gesture,
    value: bool,
    state: &DozeState,
) -> Element<'a, Message> {
    let widget = toggler(value).label(label);
    if state.enabled(gesture.control()) {
        widget
            .on_toggle(move |on| Message::ToggleGesture(gesture, on))
            .into()
    } else {
        widget.into()
    }
}

fn mode_button(
    label: &str,
    mode: ColorMode,
    current: ColorMode,
    enabled: bool,
) -> Element<'_, Message> {
    let btn = button(text(label));
    if enabled && mode != current {
        btn.on_press(Message::SetColorMode(mode)).into()
    } else {
        // Selected or disabled - don't allow clicking
        btn.into()
    }
}

fn color_button(label: &str, argb: i32, enabled: bool) -> Element<'_, Message> {
    let btn = button(text(label));
    if enabled {
        btn.on_press(Message::PickColor(argb)).into()
    } else {
        btn.into()
    }
}
