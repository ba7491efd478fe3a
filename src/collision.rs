/// Collision tests between bullets, aliens and the ship.
///
/// Nothing here touches score or level; the caller decides what a hit means.
use crate::entities::{Alien, Bullet, Entity, Ship};
use crate::settings::Settings;

/// Remove every overlapping bullet/alien pair and return how many aliens died.
///
/// Each bullet takes out at most one alien and each alien dies at most once;
/// both collections are compacted after the sweep.
pub fn check_bullet_alien_collisions(bullets: &mut Vec<Bullet>, aliens: &mut Vec<Alien>) -> usize {
    let mut alien_hit = vec![false; aliens.len()];
    let mut bullet_spent = vec![false; bullets.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        let bullet_rect = bullet.rect();
        let target = aliens
            .iter()
            .enumerate()
            .find(|(ai, alien)| !alien_hit[*ai] && bullet_rect.overlaps(&alien.rect()));
        if let Some((ai, _)) = target {
            alien_hit[ai] = true;
            bullet_spent[bi] = true;
        }
    }

    let destroyed = alien_hit.iter().filter(|&&hit| hit).count();
    if destroyed == 0 {
        return 0;
    }

    let mut spent = bullet_spent.into_iter();
    bullets.retain(|_| !spent.next().unwrap_or(false));
    let mut hit = alien_hit.into_iter();
    aliens.retain(|_| !hit.next().unwrap_or(false));

    destroyed
}

/// True if any alien overlaps the ship.
pub fn ship_collides(ship: &Ship, aliens: &[Alien]) -> bool {
    let ship_rect = ship.rect();
    aliens.iter().any(|alien| alien.rect().overlaps(&ship_rect))
}

/// True if any alien's bottom edge has reached the ship's row.
pub fn aliens_reached_bottom(aliens: &[Alien], settings: &Settings) -> bool {
    let limit = settings.screen_height - settings.ship_height;
    aliens.iter().any(|alien| alien.rect().bottom() >= limit)
}
