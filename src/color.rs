//! Ambient light color mode.

/// How the ambient light (edge lighting) color is chosen while dozing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Follow the notification's own color.
    #[default]
    Automatic,
    /// Use the user-picked custom color.
    Custom,
}

impl ColorMode {
    /// Parse a raw stored value.
    ///
    /// Returns `None` for values the platform does not define; callers fall
    /// back to [`ColorMode::Automatic`], the documented default.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Self::Automatic),
            2 => Some(Self::Custom),
            _ => None,
        }
    }

    /// The raw value persisted to the settings store.
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Automatic => 1,
            Self::Custom => 2,
        }
    }
}
