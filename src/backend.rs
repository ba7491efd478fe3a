/// The seam between the simulation and whatever draws it and reads input.
///
/// Coordinates passed across this trait are playfield pixels. A backend is
/// free to scale them (the terminal backend maps them onto character cells).
use crate::button::Button;
use crate::error::GameResult;
use crate::geometry::{Color, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Left,
    Right,
    Space,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or the terminal equivalent.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Primary button press at a playfield position.
    MouseDown { x: i32, y: i32 },
}

/// Where a line of HUD text is anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft { x: i32, y: i32 },
    TopCenter { y: i32 },
    TopRight { right: i32, y: i32 },
}

pub trait Backend {
    /// Everything queued since the last call, oldest first.
    fn poll_events(&mut self) -> GameResult<Vec<InputEvent>>;
    fn set_cursor_visible(&mut self, visible: bool) -> GameResult<()>;
    fn clear(&mut self, color: Color) -> GameResult<()>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> GameResult<()>;
    fn draw_ship(&mut self, rect: Rect) -> GameResult<()>;
    fn draw_text(&mut self, text: &str, anchor: TextAnchor, color: Color) -> GameResult<()>;
    fn draw_button(&mut self, button: &Button) -> GameResult<()>;
    /// Make the frame drawn since the last `clear` visible.
    fn present(&mut self) -> GameResult<()>;
}
