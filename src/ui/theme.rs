use ratatui::style::Color;
use ratatui::widgets::BorderType;

use crate::config::PreferenceStore;
use crate::prefs::PrefId;

pub const ACCENT: Color = Color::Rgb(0x5b, 0x9b, 0xd5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SWITCH_ON: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const SWITCH_OFF: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Corner radius used when the override preference is off.
pub const DEFAULT_CORNER_RADIUS: f32 = 16.0;

/// Theme values read from the preference store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub corner_radius: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl Theme {
    pub fn from_store(store: &dyn PreferenceStore) -> Self {
        let overridden = store
            .get(PrefId::ThemeCornerRadiusOverride)
            .as_bool()
            .unwrap_or(false);
        let corner_radius = if overridden {
            store
                .get(PrefId::ThemeCornerRadius)
                .as_float()
                .unwrap_or(DEFAULT_CORNER_RADIUS)
        } else {
            DEFAULT_CORNER_RADIUS
        };
        Self { corner_radius }
    }

    /// Terminal cells can't draw a radius; anything above zero is rounded.
    pub fn border_type(&self) -> BorderType {
        if self.corner_radius > 0.0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }
}
