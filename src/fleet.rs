/// Building and steering the alien fleet.
///
/// The fleet is a row-major grid. Aliens sit one alien-width apart with one
/// alien-width of margin on the left; rows sit two alien-heights apart
/// starting one alien-height from the top.
use log::{debug, warn};

use crate::entities::{Alien, Entity};
use crate::settings::Settings;

/// How many aliens fit across and down for the current settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetLayout {
    pub cols: usize,
    pub rows: usize,
}

impl FleetLayout {
    pub fn for_settings(settings: &Settings) -> Self {
        let alien_width = settings.alien_width;
        let alien_height = settings.alien_height;

        let available_x = settings.screen_width - 2 * alien_width;
        let available_y =
            settings.screen_height - (3 * alien_height - settings.ship_height);

        FleetLayout {
            cols: fit(available_x, 2 * alien_width),
            rows: fit(available_y, 2 * alien_height),
        }
    }

    pub fn len(&self) -> usize {
        self.cols * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-left corner of the alien in column `col`, row `row`.
    pub fn position(settings: &Settings, col: usize, row: usize) -> (i32, i32) {
        let alien_width = settings.alien_width;
        let alien_height = settings.alien_height;
        (
            alien_width + 2 * alien_width * col as i32,
            alien_height + 2 * alien_height * row as i32,
        )
    }
}

/// Whole cells of size `step` in `space`, zero when nothing fits.
fn fit(space: i32, step: i32) -> usize {
    if space <= 0 || step <= 0 {
        0
    } else {
        (space / step) as usize
    }
}

/// Append a full grid of aliens. The caller clears the collection first.
pub fn create_fleet(settings: &Settings, aliens: &mut Vec<Alien>) -> FleetLayout {
    let layout = FleetLayout::for_settings(settings);
    if layout.is_empty() {
        warn!(
            "screen {}x{} too small for any {}x{} alien; fleet is empty",
            settings.screen_width,
            settings.screen_height,
            settings.alien_width,
            settings.alien_height
        );
        return layout;
    }

    aliens.reserve(layout.len());
    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let (x, y) = FleetLayout::position(settings, col, row);
            aliens.push(Alien::new(settings, x, y));
        }
    }
    debug!("created fleet: {} cols x {} rows", layout.cols, layout.rows);
    layout
}

/// True if any alien touches the left or right edge.
pub fn check_fleet_edges(aliens: &[Alien], screen_width: i32) -> bool {
    aliens.iter().any(|alien| alien.check_edges(screen_width))
}

/// Drop the whole fleet and reverse its horizontal direction.
pub fn change_fleet_direction(aliens: &mut [Alien], settings: &mut Settings) {
    for alien in aliens.iter_mut() {
        alien.y += settings.fleet_drop_speed;
    }
    settings.fleet_direction = settings.fleet_direction.reversed();
}

/// One frame of fleet motion: reverse at most once if an edge is touched,
/// then move every alien sideways.
pub fn update_fleet(aliens: &mut [Alien], settings: &mut Settings) {
    if check_fleet_edges(aliens, settings.screen_width) {
        change_fleet_direction(aliens, settings);
    }
    for alien in aliens.iter_mut() {
        alien.update(settings);
    }
}
