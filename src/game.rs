/// The game loop: input dispatch, per-frame update order and draw order.
///
/// `Game` owns every piece of state. Each call to [`Game::frame`] runs one
/// tick of fixed displacement; frame pacing is left to the backend.
use std::time::Instant;

use log::info;

use crate::backend::{Backend, InputEvent, Key, TextAnchor};
use crate::button::Button;
use crate::collision;
use crate::entities::{Alien, Bullet, Entity, Ship, Sprite};
use crate::error::GameResult;
use crate::fleet;
use crate::geometry::Rect;
use crate::scoreboard::Scoreboard;
use crate::settings::Settings;
use crate::stats::GameStats;

// ── HUD layout ───────────────────────────────────────────────────────────────

const HUD_MARGIN: i32 = 20;
const HUD_LINE_HEIGHT: i32 = 40;
const SHIPS_MARGIN: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No game running; the play button is shown.
    Menu,
    Playing,
    /// Frozen after losing a ship. Nothing is read, updated or drawn until
    /// `until` has passed.
    PausedAfterHit { until: Instant },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Game {
    pub settings: Settings,
    pub stats: GameStats,
    pub scoreboard: Scoreboard,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub play_button: Button,
    phase: Phase,
}

impl Game {
    /// A game sitting at the menu with a fleet already on screen.
    pub fn new(settings: Settings) -> Self {
        let ship = Ship::new(&settings);
        let mut aliens = Vec::new();
        fleet::create_fleet(&settings, &mut aliens);
        let stats = GameStats::new(settings.ship_limit);
        let scoreboard = Scoreboard::new(&stats);
        let play_button = Button::new(&settings);

        Game {
            settings,
            stats,
            scoreboard,
            ship,
            bullets: Vec::new(),
            aliens,
            play_button,
            phase: Phase::Menu,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run frames until a quit trigger arrives.
    pub fn run<B: Backend>(&mut self, backend: &mut B) -> GameResult<()> {
        loop {
            let now = Instant::now();
            if let Phase::PausedAfterHit { until } = self.phase {
                if until > now {
                    std::thread::sleep(until - now);
                    continue;
                }
            }
            if self.frame(backend, now)? == Flow::Quit {
                info!("quit requested");
                return Ok(());
            }
        }
    }

    /// One pass of the loop: input, update, draw, present.
    pub fn frame<B: Backend>(&mut self, backend: &mut B, now: Instant) -> GameResult<Flow> {
        if let Phase::PausedAfterHit { until } = self.phase {
            if now < until {
                return Ok(Flow::Continue);
            }
            // Finish the frame the hit interrupted: show the reset board.
            self.phase = Phase::Playing;
            self.update_screen(backend)?;
            return Ok(Flow::Continue);
        }

        for event in backend.poll_events()? {
            if self.handle_event(backend, event)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }

        if self.phase == Phase::Playing {
            self.ship.update(&self.settings);
            self.update_bullets();
            self.update_aliens(backend, now)?;
        }

        if !matches!(self.phase, Phase::PausedAfterHit { .. }) {
            self.update_screen(backend)?;
        }
        Ok(Flow::Continue)
    }

    // ── Input ────────────────────────────────────────────────────────────────

    fn handle_event<B: Backend>(&mut self, backend: &mut B, event: InputEvent) -> GameResult<Flow> {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => return Ok(Flow::Quit),
            InputEvent::KeyDown(Key::Right) => self.ship.moving_right = true,
            InputEvent::KeyDown(Key::Left) => self.ship.moving_left = true,
            InputEvent::KeyDown(Key::Space) => {
                if self.stats.game_active {
                    self.fire_bullet();
                }
            }
            InputEvent::KeyUp(Key::Right) => self.ship.moving_right = false,
            InputEvent::KeyUp(Key::Left) => self.ship.moving_left = false,
            InputEvent::KeyUp(_) => {}
            InputEvent::MouseDown { x, y } => self.check_play_button(backend, x, y)?,
        }
        Ok(Flow::Continue)
    }

    fn check_play_button<B: Backend>(&mut self, backend: &mut B, x: i32, y: i32) -> GameResult<()> {
        if self.play_button.contains(x, y) && !self.stats.game_active {
            self.start_game(backend)?;
        }
        Ok(())
    }

    /// Menu -> Playing.
    pub fn start_game<B: Backend>(&mut self, backend: &mut B) -> GameResult<()> {
        self.settings.initialize_dynamic_settings();
        backend.set_cursor_visible(false)?;

        self.stats.reset_stats();
        self.stats.game_active = true;
        self.phase = Phase::Playing;

        self.aliens.clear();
        self.bullets.clear();
        self.advance_level();

        self.scoreboard.prep_all(&self.stats);
        info!("new game started");
        Ok(())
    }

    /// Add a bullet unless the cap is reached.
    pub fn fire_bullet(&mut self) {
        if self.bullets.len() < self.settings.bullets_allowed {
            self.bullets.push(Bullet::new(&self.settings, &self.ship));
        }
        debug_assert!(self.bullets.len() <= self.settings.bullets_allowed);
    }

    // ── Update ───────────────────────────────────────────────────────────────

    fn update_bullets(&mut self) {
        for bullet in self.bullets.iter_mut() {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|bullet| !bullet.is_off_screen());

        self.check_bullet_alien_collisions();
    }

    fn check_bullet_alien_collisions(&mut self) {
        let destroyed =
            collision::check_bullet_alien_collisions(&mut self.bullets, &mut self.aliens);
        if destroyed == 0 {
            return;
        }

        // Level-up first: the clearing shot scores at the new level's value.
        if self.aliens.is_empty() {
            self.advance_level();
        }

        let points = self.settings.points_per_alien();

        self.stats.score = self
            .stats
            .score
            .saturating_add(points.saturating_mul(destroyed as u32));
        self.scoreboard.prep_score(&self.stats);
        self.scoreboard.check_high_score(&mut self.stats);
    }

    /// Fresh fleet, faster game, next level.
    fn advance_level(&mut self) {
        self.bullets.clear();
        fleet::create_fleet(&self.settings, &mut self.aliens);
        self.settings.increase_speed();
        self.stats.level += 1;
        self.scoreboard.prep_level(&self.stats);
        info!(
            "level {}: ship {:.2} bullet {:.2} alien {:.2} px/frame, {} points per alien",
            self.stats.level,
            self.settings.ship_speed,
            self.settings.bullet_speed,
            self.settings.alien_speed,
            self.settings.points_per_alien()
        );
    }

    fn update_aliens<B: Backend>(&mut self, backend: &mut B, now: Instant) -> GameResult<()> {
        fleet::update_fleet(&mut self.aliens, &mut self.settings);

        if collision::ship_collides(&self.ship, &self.aliens) {
            self.ship_hit(backend, now)?;
        }

        if self.stats.game_active && collision::aliens_reached_bottom(&self.aliens, &self.settings)
        {
            self.ship_hit(backend, now)?;
        }
        Ok(())
    }

    /// Lose a ship, or end the game when none are left.
    fn ship_hit<B: Backend>(&mut self, backend: &mut B, now: Instant) -> GameResult<()> {
        if self.stats.ships_left > 0 {
            self.stats.ships_left -= 1;
            self.scoreboard.prep_ships(&self.stats);

            self.aliens.clear();
            self.bullets.clear();

            fleet::create_fleet(&self.settings, &mut self.aliens);
            self.ship.reset_position(&self.settings);

            self.phase = Phase::PausedAfterHit {
                until: now + self.settings.pause_after_hit,
            };
            info!("ship hit, {} left", self.stats.ships_left);
        } else {
            self.stats.game_active = false;
            self.phase = Phase::Menu;
            backend.set_cursor_visible(true)?;
            info!(
                "game over: score {} (high score {})",
                self.stats.score, self.stats.high_score
            );
        }
        Ok(())
    }

    // ── Draw ─────────────────────────────────────────────────────────────────

    fn update_screen<B: Backend>(&self, backend: &mut B) -> GameResult<()> {
        backend.clear(self.settings.screen_color)?;

        self.draw_entity(backend, &self.ship)?;
        for bullet in &self.bullets {
            self.draw_entity(backend, bullet)?;
        }
        for alien in &self.aliens {
            self.draw_entity(backend, alien)?;
        }

        self.show_score(backend)?;

        if !self.stats.game_active {
            backend.draw_button(&self.play_button)?;
        }

        backend.present()
    }

    fn draw_entity<B: Backend, E: Entity>(&self, backend: &mut B, entity: &E) -> GameResult<()> {
        let rect = entity.rect();
        match entity.sprite() {
            Sprite::Ship => backend.draw_ship(rect),
            Sprite::Bullet => backend.fill_rect(rect, self.settings.bullet_color),
            Sprite::Alien => backend.fill_rect(rect, self.settings.alien_color),
        }
    }

    fn show_score<B: Backend>(&self, backend: &mut B) -> GameResult<()> {
        let color = self.settings.text_color;
        let right = self.settings.screen_width - HUD_MARGIN;
        let sb = &self.scoreboard;

        backend.draw_text(&sb.score_text, TextAnchor::TopRight { right, y: HUD_MARGIN }, color)?;
        backend.draw_text(&sb.high_score_text, TextAnchor::TopCenter { y: HUD_MARGIN }, color)?;
        backend.draw_text(
            &sb.level_text,
            TextAnchor::TopRight {
                right,
                y: HUD_MARGIN + HUD_LINE_HEIGHT,
            },
            color,
        )?;

        let (width, height) = (self.settings.ship_width, self.settings.ship_height);
        for i in 0..sb.ships as i32 {
            let rect = Rect::new(SHIPS_MARGIN + i * width, SHIPS_MARGIN, width, height);
            backend.draw_ship(rect)?;
        }
        Ok(())
    }
}
