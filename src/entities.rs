/// Ship, bullets and aliens.
///
/// Each entity owns its position and advances itself one frame at a time
/// from the current [`Settings`]. Positions that move by fractional speeds
/// are stored as floats; [`Entity::rect`] truncates them to the integer
/// rectangle used for collisions and drawing.
use crate::geometry::Rect;
use crate::settings::Settings;

/// What the renderer should draw for an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Ship,
    Bullet,
    Alien,
}

/// Common capability of everything that moves on the playfield.
pub trait Entity {
    fn rect(&self) -> Rect;
    fn sprite(&self) -> Sprite;
    /// Advance one frame.
    fn update(&mut self, settings: &Settings);
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    /// Left edge, fractional so sub-pixel speeds accumulate.
    pub x: f64,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship resting in the bottom-right corner of the screen.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: 0,
            width: settings.ship_width,
            height: settings.ship_height,
            moving_left: false,
            moving_right: false,
        };
        ship.reset_position(settings);
        ship
    }

    /// Move back to the bottom-right corner. Movement flags are untouched.
    pub fn reset_position(&mut self, settings: &Settings) {
        self.x = f64::from(settings.screen_width - self.width);
        self.y = settings.screen_height - self.height;
    }
}

impl Entity for Ship {
    fn rect(&self) -> Rect {
        Rect::new(self.x as i32, self.y, self.width, self.height)
    }

    fn sprite(&self) -> Sprite {
        Sprite::Ship
    }

    /// Left is checked first: with both flags set the ship goes left unless
    /// that step would leave the screen, in which case right gets a chance.
    fn update(&mut self, settings: &Settings) {
        let speed = settings.ship_speed;
        let max_x = f64::from(settings.screen_width - self.width);
        if self.moving_left && self.x - speed >= 0.0 {
            self.x -= speed;
        } else if self.moving_right && self.x + speed <= max_x {
            self.x += speed;
        }
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: i32,
    /// Top edge; decreases every frame.
    pub y: f64,
    pub width: i32,
    pub height: i32,
}

impl Bullet {
    /// A bullet whose top-centre sits on the ship's top-centre.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let ship_rect = ship.rect();
        Bullet {
            x: ship_rect.center_x() - settings.bullet_width / 2,
            y: f64::from(ship_rect.y),
            width: settings.bullet_width,
            height: settings.bullet_height,
        }
    }

    /// True once the bottom edge has left the top of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.rect().bottom() <= 0
    }
}

impl Entity for Bullet {
    fn rect(&self) -> Rect {
        Rect::new(self.x, self.y.floor() as i32, self.width, self.height)
    }

    fn sprite(&self) -> Sprite {
        Sprite::Bullet
    }

    fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    pub x: f64,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Alien {
    pub fn new(settings: &Settings, x: i32, y: i32) -> Self {
        Alien {
            x: f64::from(x),
            y,
            width: settings.alien_width,
            height: settings.alien_height,
        }
    }

    /// True when the alien touches the left or right screen edge.
    pub fn check_edges(&self, screen_width: i32) -> bool {
        let rect = self.rect();
        rect.x <= 0 || rect.x >= screen_width - self.width
    }
}

impl Entity for Alien {
    fn rect(&self) -> Rect {
        Rect::new(self.x as i32, self.y, self.width, self.height)
    }

    fn sprite(&self) -> Sprite {
        Sprite::Alien
    }

    /// Horizontal only; the fleet drops as a whole.
    fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction.sign();
    }
}
