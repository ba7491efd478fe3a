//! Runtime configuration loaded from a TOML file.
//!
//! Every key is optional: [`Config`] and each of its sections carry
//! `#[serde(default)]`, so a file can override just the values you care
//! about and the rest fall back to the compiled defaults below.
//!
//! ```toml
//! [alien]
//! speed = 2.0
//!
//! [runtime]
//! fps = 30
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::geometry::Color;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_CONFIG_PATH: &str = "alien_invasion.toml";

const SCREEN_WIDTH: i32 = 1200;
const SCREEN_HEIGHT: i32 = 800;
const SCREEN_COLOR: Color = Color(230, 230, 230);

const SHIP_WIDTH: i32 = 60;
const SHIP_HEIGHT: i32 = 48;
const SHIP_SPEED: f64 = 5.0;
/// Spare ships. One is in play on top of these, so the player gets three lives.
const SHIP_LIMIT: u32 = 2;

const BULLET_WIDTH: i32 = 6;
const BULLET_HEIGHT: i32 = 20;
const BULLET_COLOR: Color = Color(230, 60, 60);
const BULLET_SPEED: f64 = 5.0;
const BULLETS_ALLOWED: usize = 10;

const ALIEN_WIDTH: i32 = 60;
const ALIEN_HEIGHT: i32 = 58;
const ALIEN_COLOR: Color = Color(60, 140, 60);
const ALIEN_SPEED: f64 = 1.0;
const FLEET_DROP_SPEED: i32 = 10;
const ALIEN_POINTS: f64 = 50.0;

const SPEEDUP_SCALE: f64 = 1.5;
const SCORE_SCALE: f64 = 1.5;

const BUTTON_WIDTH: i32 = 200;
const BUTTON_HEIGHT: i32 = 50;
const BUTTON_COLOR: Color = Color(0, 255, 0);
const BUTTON_TEXT_COLOR: Color = Color(255, 255, 255);
const SCORE_TEXT_COLOR: Color = Color(25, 25, 25);

const FPS: u32 = 60;
const PAUSE_AFTER_HIT_MS: u64 = 500;
const LOG_FILE: &str = "alien_invasion.log";

// ── Sections ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen: ScreenConfig,
    pub ship: ShipConfig,
    pub bullet: BulletConfig,
    pub alien: AlienConfig,
    pub scaling: ScalingConfig,
    pub button: ButtonConfig,
    pub runtime: RuntimeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
    pub color: Color,
    pub text_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub width: i32,
    pub height: i32,
    /// Level-one speed in pixels per frame.
    pub speed: f64,
    pub limit: u32,
    /// Text-art sprite file. `None` uses the built-in art.
    pub sprite: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub width: i32,
    pub height: i32,
    pub color: Color,
    pub speed: f64,
    pub allowed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlienConfig {
    pub width: i32,
    pub height: i32,
    pub color: Color,
    pub speed: f64,
    pub drop_speed: i32,
    /// Level-one points per alien.
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingConfig {
    pub speedup_scale: f64,
    pub score_scale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub width: i32,
    pub height: i32,
    pub color: Color,
    pub text_color: Color,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub fps: u32,
    pub pause_after_hit_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            color: SCREEN_COLOR,
            text_color: SCORE_TEXT_COLOR,
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            speed: SHIP_SPEED,
            limit: SHIP_LIMIT,
            sprite: None,
        }
    }
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
            color: BULLET_COLOR,
            speed: BULLET_SPEED,
            allowed: BULLETS_ALLOWED,
        }
    }
}

impl Default for AlienConfig {
    fn default() -> Self {
        Self {
            width: ALIEN_WIDTH,
            height: ALIEN_HEIGHT,
            color: ALIEN_COLOR,
            speed: ALIEN_SPEED,
            drop_speed: FLEET_DROP_SPEED,
            points: ALIEN_POINTS,
        }
    }
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            speedup_scale: SPEEDUP_SCALE,
            score_scale: SCORE_SCALE,
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
            color: BUTTON_COLOR,
            text_color: BUTTON_TEXT_COLOR,
            label: "Play".to_string(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            pause_after_hit_ms: PAUSE_AFTER_HIT_MS,
            log_file: Some(PathBuf::from(LOG_FILE)),
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

impl Config {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str, origin: &Path) -> GameResult<Self> {
        let config: Config = toml::from_str(text).map_err(|e| GameError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the file at `path`.
    pub fn load(path: &Path) -> GameResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text, path)
    }

    /// Like [`Config::load`], but a missing file means "use the defaults".
    /// A file that exists and does not parse is still an error.
    ///
    /// Config is read before logging is set up, so the caller logs the
    /// returned source once it can.
    pub fn load_or_default(path: &Path) -> GameResult<(Self, ConfigSource)> {
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults(path.to_path_buf())));
        }
        let config = Self::load(path)?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    /// Reject values the simulation cannot run with.
    ///
    /// A screen too small to hold any alien is allowed; it just yields an
    /// empty fleet.
    pub fn validate(&self) -> GameResult<()> {
        positive_int("screen.width", self.screen.width)?;
        positive_int("screen.height", self.screen.height)?;
        positive_int("ship.width", self.ship.width)?;
        positive_int("ship.height", self.ship.height)?;
        positive_int("bullet.width", self.bullet.width)?;
        positive_int("bullet.height", self.bullet.height)?;
        positive_int("alien.width", self.alien.width)?;
        positive_int("alien.height", self.alien.height)?;
        positive_int("button.width", self.button.width)?;
        positive_int("button.height", self.button.height)?;
        positive_float("ship.speed", self.ship.speed)?;
        positive_float("bullet.speed", self.bullet.speed)?;
        positive_float("alien.speed", self.alien.speed)?;
        positive_float("alien.points", self.alien.points)?;
        positive_float("scaling.speedup_scale", self.scaling.speedup_scale)?;
        positive_float("scaling.score_scale", self.scaling.score_scale)?;
        if self.alien.drop_speed < 0 {
            return Err(invalid("alien.drop_speed", "must not be negative"));
        }
        if self.runtime.fps == 0 {
            return Err(invalid("runtime.fps", "must be at least 1"));
        }
        Ok(())
    }
}

/// Where a [`Config`] came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// Nothing at this path; compiled defaults are in use.
    Defaults(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "loaded config from {}", path.display()),
            ConfigSource::Defaults(path) => {
                write!(f, "no config at {}; using compiled defaults", path.display())
            }
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> GameError {
    GameError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

fn positive_int(field: &'static str, value: i32) -> GameResult<()> {
    if value <= 0 {
        return Err(invalid(field, &format!("must be positive, got {value}")));
    }
    Ok(())
}

fn positive_float(field: &'static str, value: f64) -> GameResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(invalid(field, &format!("must be positive, got {value}")));
    }
    Ok(())
}
