/// Terminal backend. All terminal I/O lives here.
///
/// The simulation works in playfield pixels; this module maps them onto the
/// character grid, translates crossterm events into [`InputEvent`]s and paces
/// frames. No game logic is performed here.
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use log::{debug, warn};

use alien_invasion::backend::{Backend, InputEvent, Key, TextAnchor};
use alien_invasion::button::Button;
use alien_invasion::error::{GameError, GameResult};
use alien_invasion::geometry::{Color, Rect};
use alien_invasion::settings::Settings;

/// A movement key counts as released once no press or repeat has arrived for
/// this long. Long enough to bridge the usual initial key-repeat delay.
/// Terminals that do report releases end the hold sooner.
const HOLD_WINDOW: Duration = Duration::from_millis(550);

const SHIP_COLOR: Color = Color(40, 40, 160);

const BUILTIN_SHIP: &str = " /^\\ \n<###>";

// ── Ship sprite ───────────────────────────────────────────────────────────────

/// Text-art ship, one string per terminal row.
#[derive(Clone, Debug, PartialEq)]
pub struct ShipSprite {
    lines: Vec<String>,
}

impl ShipSprite {
    pub fn builtin() -> Self {
        ShipSprite::from_art(BUILTIN_SHIP)
    }

    fn from_art(art: &str) -> Self {
        ShipSprite {
            lines: art.lines().map(str::to_string).collect(),
        }
    }

    /// Load the art from `path`, or the built-in art when no path is given.
    /// A missing or empty file is fatal.
    pub fn load(path: Option<&Path>) -> GameResult<Self> {
        let Some(path) = path else {
            return Ok(ShipSprite::builtin());
        };
        let art = std::fs::read_to_string(path).map_err(|source| GameError::Asset {
            path: path.to_path_buf(),
            source,
        })?;
        if art.trim().is_empty() {
            return Err(GameError::Asset {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, "sprite is empty"),
            });
        }
        Ok(ShipSprite::from_art(&art))
    }
}

// ── Held keys ─────────────────────────────────────────────────────────────────

/// Movement keys currently held and when each was last pressed or repeated.
#[derive(Debug, Default)]
struct HeldKeys {
    last_seen: HashMap<Key, Instant>,
}

impl HeldKeys {
    fn touch(&mut self, key: Key, now: Instant) {
        if matches!(key, Key::Left | Key::Right) {
            self.last_seen.insert(key, now);
        }
    }

    fn release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    /// Synthesise releases for keys that went quiet.
    fn expire(&mut self, now: Instant, events: &mut Vec<InputEvent>) {
        let mut expired: Vec<Key> = self
            .last_seen
            .iter()
            .filter(|(_, &last)| now.duration_since(last) > HOLD_WINDOW)
            .map(|(&key, _)| key)
            .collect();
        expired.sort_by_key(|key| *key as u8);
        for key in expired {
            self.last_seen.remove(&key);
            events.push(InputEvent::KeyUp(key));
        }
    }
}

// ── Backend ───────────────────────────────────────────────────────────────────

pub struct TerminalBackend<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    screen_width: i32,
    screen_height: i32,
    sprite: ShipSprite,
    background: Color,
    frame_duration: Duration,
    frame_start: Instant,
    /// Whether the enhancement flags were pushed and must be popped on exit.
    keyboard_enhanced: bool,
    held: HeldKeys,
}

impl<W: Write> TerminalBackend<W> {
    /// Take over the terminal: raw mode, alternate screen, mouse capture.
    pub fn new(mut out: W, settings: &Settings, sprite: ShipSprite, fps: u32) -> GameResult<Self> {
        terminal::enable_raw_mode()?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(EnableMouseCapture)?;

        // Ask for key-release events where the terminal can send them. The
        // hold window runs either way.
        let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
            && out
                .execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))
                .is_ok();
        if !keyboard_enhanced {
            warn!("terminal does not report key releases; using a {HOLD_WINDOW:?} hold window");
        }

        let (cols, rows) = terminal::size()?;
        debug!("terminal is {cols}x{rows} cells");

        Ok(TerminalBackend {
            out,
            cols,
            rows,
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
            sprite,
            background: settings.screen_color,
            frame_duration: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
            keyboard_enhanced,
            held: HeldKeys::default(),
        })
    }

    /// Give the terminal back. Errors are ignored so every step is attempted.
    pub fn restore(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(style::ResetColor);
        let _ = self.out.execute(DisableMouseCapture);
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    // ── Coordinate mapping ────────────────────────────────────────────────────

    fn to_col(&self, x: i32) -> i32 {
        scale(x, self.screen_width, self.cols)
    }

    fn to_row(&self, y: i32) -> i32 {
        scale(y, self.screen_height, self.rows)
    }

    /// Playfield pixel at the centre of a terminal cell.
    fn cell_to_pixel(&self, col: u16, row: u16) -> (i32, i32) {
        (
            cell_centre(col, self.cols, self.screen_width),
            cell_centre(row, self.rows, self.screen_height),
        )
    }

    /// Cell span covered by a rect, at least one cell each way, clipped to
    /// the terminal. `None` when entirely off screen.
    fn cell_span(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = self.to_col(rect.x);
        let r0 = self.to_row(rect.y);
        let c1 = self.to_col(rect.right()).max(c0 + 1);
        let r1 = self.to_row(rect.bottom()).max(r0 + 1);

        let c0 = c0.max(0);
        let r0 = r0.max(0);
        let c1 = c1.min(i32::from(self.cols));
        let r1 = r1.min(i32::from(self.rows));
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0 as u16, r0 as u16, c1 as u16, r1 as u16))
    }

    fn print_at(&mut self, col: i32, row: i32, text: &str, fg: Color) -> GameResult<()> {
        if row < 0 || row >= i32::from(self.rows) {
            return Ok(());
        }
        // Clip on the left and right edges, one char per cell.
        let skip = (-col).max(0) as usize;
        let col = col.max(0);
        let room = (i32::from(self.cols) - col).max(0) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
        self.out.queue(style::SetForegroundColor(rgb(fg)))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }

    // ── Input translation ─────────────────────────────────────────────────────

    fn translate(&mut self, ev: Event, now: Instant, events: &mut Vec<InputEvent>) {
        match ev {
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL) => events.push(InputEvent::Quit),
            Event::Key(KeyEvent { code, kind, .. }) => {
                let Some(key) = map_key(code) else {
                    return;
                };
                match kind {
                    KeyEventKind::Press => {
                        self.held.touch(key, now);
                        events.push(InputEvent::KeyDown(key));
                    }
                    KeyEventKind::Repeat => self.held.touch(key, now),
                    KeyEventKind::Release => {
                        self.held.release(key);
                        events.push(InputEvent::KeyUp(key));
                    }
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let (x, y) = self.cell_to_pixel(column, row);
                events.push(InputEvent::MouseDown { x, y });
            }
            Event::Resize(cols, rows) => {
                debug!("terminal resized to {cols}x{rows}");
                self.cols = cols;
                self.rows = rows;
            }
            _ => {}
        }
    }
}

impl<W: Write> Backend for TerminalBackend<W> {
    fn poll_events(&mut self) -> GameResult<Vec<InputEvent>> {
        let now = Instant::now();
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.translate(ev, now, &mut events);
        }
        self.held.expire(now, &mut events);
        Ok(events)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> GameResult<()> {
        if visible {
            self.out.execute(cursor::Show)?;
        } else {
            self.out.execute(cursor::Hide)?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Color) -> GameResult<()> {
        self.background = color;
        self.out.queue(style::SetBackgroundColor(rgb(color)))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> GameResult<()> {
        let Some((c0, r0, c1, r1)) = self.cell_span(rect) else {
            return Ok(());
        };
        let blank = " ".repeat(usize::from(c1 - c0));
        self.out.queue(style::SetBackgroundColor(rgb(color)))?;
        for row in r0..r1 {
            self.out.queue(cursor::MoveTo(c0, row))?;
            self.out.queue(Print(&blank))?;
        }
        self.out.queue(style::SetBackgroundColor(rgb(self.background)))?;
        Ok(())
    }

    fn draw_ship(&mut self, rect: Rect) -> GameResult<()> {
        let col = self.to_col(rect.x);
        let row = self.to_row(rect.y);
        let lines = self.sprite.lines.clone();
        for (i, line) in lines.iter().enumerate() {
            self.print_at(col, row + i as i32, line, SHIP_COLOR)?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, color: Color) -> GameResult<()> {
        let len = text.chars().count() as i32;
        let (col, row) = match anchor {
            TextAnchor::TopLeft { x, y } => (self.to_col(x), self.to_row(y)),
            TextAnchor::TopCenter { y } => (i32::from(self.cols) / 2 - len / 2, self.to_row(y)),
            TextAnchor::TopRight { right, y } => (self.to_col(right) - len, self.to_row(y)),
        };
        self.print_at(col, row, text, color)
    }

    fn draw_button(&mut self, button: &Button) -> GameResult<()> {
        self.fill_rect(button.rect, button.color)?;
        let (cx, cy) = button.rect.center();
        let len = button.label.chars().count() as i32;
        let col = self.to_col(cx) - len / 2;
        let row = self.to_row(cy);
        self.out.queue(style::SetBackgroundColor(rgb(button.color)))?;
        self.print_at(col, row, &button.label, button.text_color)?;
        self.out.queue(style::SetBackgroundColor(rgb(self.background)))?;
        Ok(())
    }

    /// Flush the frame and sleep out the rest of its time slot.
    fn present(&mut self) -> GameResult<()> {
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()?;

        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_duration {
            std::thread::sleep(self.frame_duration - elapsed);
        }
        self.frame_start = Instant::now();
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        _ => None,
    }
}

fn rgb(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.0,
        g: color.1,
        b: color.2,
    }
}

/// Map a pixel coordinate in `0..extent` onto `0..cells`.
fn scale(px: i32, extent: i32, cells: u16) -> i32 {
    if extent <= 0 {
        return 0;
    }
    let scaled = i64::from(px) * i64::from(cells) / i64::from(extent);
    scaled as i32
}

fn cell_centre(cell: u16, cells: u16, extent: i32) -> i32 {
    if cells == 0 {
        return 0;
    }
    let doubled = (2 * i64::from(cell) + 1) * i64::from(extent);
    (doubled / (2 * i64::from(cells))) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_edges() {
        assert_eq!(scale(0, 1200, 120), 0);
        assert_eq!(scale(1199, 1200, 120), 119);
        assert_eq!(scale(1200, 1200, 120), 120);
        assert_eq!(scale(600, 1200, 80), 40);
    }

    #[test]
    fn cell_centre_round_trips_through_scale() {
        for col in 0..80u16 {
            let px = cell_centre(col, 80, 1200);
            assert_eq!(scale(px, 1200, 80), i32::from(col));
        }
    }

    #[test]
    fn keys_outside_the_control_set_are_ignored() {
        assert_eq!(map_key(KeyCode::Char(' ')), Some(Key::Space));
        assert_eq!(map_key(KeyCode::Esc), Some(Key::Escape));
        assert_eq!(map_key(KeyCode::Char('a')), None);
        assert_eq!(map_key(KeyCode::Up), None);
    }

    #[test]
    fn quiet_key_is_released_after_hold_window() {
        let t0 = Instant::now();
        let mut held = HeldKeys::default();
        held.touch(Key::Left, t0);
        held.touch(Key::Space, t0);

        let mut events = Vec::new();
        held.expire(t0 + HOLD_WINDOW, &mut events);
        assert!(events.is_empty());

        held.expire(t0 + HOLD_WINDOW + Duration::from_millis(1), &mut events);
        assert_eq!(events, vec![InputEvent::KeyUp(Key::Left)]);

        events.clear();
        held.expire(t0 + HOLD_WINDOW * 3, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn repeats_keep_a_key_held_and_release_ends_it() {
        let t0 = Instant::now();
        let mut held = HeldKeys::default();
        held.touch(Key::Right, t0);
        held.touch(Key::Right, t0 + Duration::from_millis(400));

        let mut events = Vec::new();
        held.expire(t0 + Duration::from_millis(800), &mut events);
        assert!(events.is_empty());

        held.release(Key::Right);
        held.expire(t0 + Duration::from_secs(5), &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn builtin_sprite_has_two_rows() {
        assert_eq!(ShipSprite::builtin().lines.len(), 2);
    }

    #[test]
    fn missing_sprite_file_is_an_asset_error() {
        let err = ShipSprite::load(Some(Path::new("/nonexistent/ship.txt"))).unwrap_err();
        assert!(matches!(err, GameError::Asset { .. }));
    }

    #[test]
    fn no_sprite_path_uses_builtin() {
        assert_eq!(ShipSprite::load(None).unwrap(), ShipSprite::builtin());
    }
}
