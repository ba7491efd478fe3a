/// The start button shown while no game is running.
use crate::geometry::{Color, Rect};
use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub color: Color,
    pub text_color: Color,
}

impl Button {
    /// A button centred on the screen.
    pub fn new(settings: &Settings) -> Self {
        Button {
            rect: Rect::centered_at(
                settings.screen_width / 2,
                settings.screen_height / 2,
                settings.button_width,
                settings.button_height,
            ),
            label: settings.button_label.clone(),
            color: settings.button_color,
            text_color: settings.button_text_color,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }
}
