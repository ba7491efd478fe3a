/// Game settings: layout fixed for the process lifetime plus the dynamic
/// difficulty state that is reset for every new game and scaled per level.
///
/// One `Settings` value is owned by the [`Game`](crate::game::Game) and lent
/// to every entity and helper that needs a constant, so tests can build
/// entities against synthetic settings.
use std::time::Duration;

use crate::config::Config;
use crate::geometry::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetDirection {
    Left,
    Right,
}

impl FleetDirection {
    pub fn sign(self) -> f64 {
        match self {
            FleetDirection::Left => -1.0,
            FleetDirection::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            FleetDirection::Left => FleetDirection::Right,
            FleetDirection::Right => FleetDirection::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    // ── Screen ───────────────────────────────────────────────────────────────
    pub screen_width: i32,
    pub screen_height: i32,
    pub screen_color: Color,
    pub text_color: Color,

    // ── Ship ─────────────────────────────────────────────────────────────────
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_limit: u32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Color,
    pub bullets_allowed: usize,

    // ── Aliens ───────────────────────────────────────────────────────────────
    pub alien_width: i32,
    pub alien_height: i32,
    pub alien_color: Color,
    pub fleet_drop_speed: i32,

    // ── Play button ──────────────────────────────────────────────────────────
    pub button_width: i32,
    pub button_height: i32,
    pub button_color: Color,
    pub button_text_color: Color,
    pub button_label: String,

    // ── Difficulty scaling ───────────────────────────────────────────────────
    pub speedup_scale: f64,
    pub score_scale: f64,
    pub pause_after_hit: Duration,

    // Configured level-one values the dynamic state is derived from.
    level_one_ship_speed: f64,
    level_one_bullet_speed: f64,
    level_one_alien_speed: f64,
    level_one_alien_points: f64,

    // ── Dynamic state ────────────────────────────────────────────────────────
    pub ship_speed: f64,
    pub bullet_speed: f64,
    pub alien_speed: f64,
    pub alien_points: f64,
    pub fleet_direction: FleetDirection,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        let mut settings = Settings {
            screen_width: config.screen.width,
            screen_height: config.screen.height,
            screen_color: config.screen.color,
            text_color: config.screen.text_color,
            ship_width: config.ship.width,
            ship_height: config.ship.height,
            ship_limit: config.ship.limit,
            bullet_width: config.bullet.width,
            bullet_height: config.bullet.height,
            bullet_color: config.bullet.color,
            bullets_allowed: config.bullet.allowed,
            alien_width: config.alien.width,
            alien_height: config.alien.height,
            alien_color: config.alien.color,
            fleet_drop_speed: config.alien.drop_speed,
            button_width: config.button.width,
            button_height: config.button.height,
            button_color: config.button.color,
            button_text_color: config.button.text_color,
            button_label: config.button.label.clone(),
            speedup_scale: config.scaling.speedup_scale,
            score_scale: config.scaling.score_scale,
            pause_after_hit: Duration::from_millis(config.runtime.pause_after_hit_ms),
            level_one_ship_speed: config.ship.speed,
            level_one_bullet_speed: config.bullet.speed,
            level_one_alien_speed: config.alien.speed,
            level_one_alien_points: config.alien.points,
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            alien_points: 0.0,
            fleet_direction: FleetDirection::Right,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    /// Reset speeds, point value and fleet direction for a new game.
    ///
    /// Values are stored one scale step below the configured level-one
    /// values: starting a game runs a level-up, which brings them back.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = self.level_one_ship_speed / self.speedup_scale;
        self.bullet_speed = self.level_one_bullet_speed / self.speedup_scale;
        self.alien_speed = self.level_one_alien_speed / self.speedup_scale;
        self.alien_points = self.level_one_alien_points / self.score_scale;
        self.fleet_direction = FleetDirection::Right;
    }

    /// Scale all three speeds and the alien point value for the next level.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points * self.score_scale).round();
    }

    /// Score awarded for one alien at the current level.
    pub fn points_per_alien(&self) -> u32 {
        self.alien_points.round() as u32
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from_config(&Config::default())
    }
}
