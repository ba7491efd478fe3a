use alien_invasion::config::Config;
use alien_invasion::entities::*;
use alien_invasion::settings::{FleetDirection, Settings};

/// Level-one settings (the opening level-up already applied).
fn make_settings() -> Settings {
    let mut s = Settings::from_config(&Config::default());
    s.increase_speed();
    s
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[test]
fn ship_starts_bottom_right() {
    let s = make_settings();
    let ship = Ship::new(&s);
    let r = ship.rect();
    assert_eq!(r.right(), s.screen_width);
    assert_eq!(r.bottom(), s.screen_height);
    assert!(!ship.moving_left && !ship.moving_right);
}

#[test]
fn ship_idle_does_not_move() {
    let s = make_settings();
    let mut ship = Ship::new(&s);
    let x = ship.x;
    ship.update(&s);
    assert_eq!(ship.x, x);
}

#[test]
fn ship_moves_left_by_speed() {
    let s = make_settings();
    let mut ship = Ship::new(&s);
    ship.x = 100.0;
    ship.moving_left = true;
    ship.update(&s);
    assert!((ship.x - 95.0).abs() < 1e-9);
}

#[test]
fn ship_accumulates_sub_pixel_speed() {
    let mut s = make_settings();
    s.ship_speed = 0.4;
    let mut ship = Ship::new(&s);
    ship.x = 100.0;
    ship.moving_left = true;
    ship.update(&s);
    ship.update(&s);
    assert_eq!(ship.rect().x, 99); // 99.2 truncated
    ship.update(&s);
    assert_eq!(ship.rect().x, 98); // 98.8
}

#[test]
fn ship_stops_at_left_edge() {
    let s = make_settings();
    let mut ship = Ship::new(&s);
    ship.x = 3.0;
    ship.moving_left = true;
    ship.update(&s);
    assert_eq!(ship.x, 3.0);
}

#[test]
fn ship_cannot_move_right_from_bottom_right() {
    let s = make_settings();
    let mut ship = Ship::new(&s);
    let x = ship.x;
    ship.moving_right = true;
    ship.update(&s);
    assert_eq!(ship.x, x);
}

#[test]
fn both_flags_favour_left() {
    let s = make_settings();
    let mut ship = Ship::new(&s);
    ship.x = 100.0;
    ship.moving_left = true;
    ship.moving_right = true;
    ship.update(&s);
    assert!((ship.x - 95.0).abs() < 1e-9);
}

#[test]
fn both_flags_at_left_edge_go_right() {
    let s = make_settings();
    let mut ship = Ship::new(&s);
    ship.x = 0.0;
    ship.moving_left = true;
    ship.moving_right = true;
    ship.update(&s);
    assert!((ship.x - 5.0).abs() < 1e-9);
}

#[test]
fn reset_position_returns_to_corner() {
    let s = make_settings();
    let mut ship = Ship::new(&s);
    ship.x = 10.0;
    ship.reset_position(&s);
    assert_eq!(ship.rect().right(), s.screen_width);
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn bullet_spawns_at_ship_top_centre() {
    let s = make_settings();
    let mut ship = Ship::new(&s);
    ship.x = 300.0;
    let b = Bullet::new(&s, &ship);
    let r = b.rect();
    assert_eq!(r.center_x(), ship.rect().center_x());
    assert_eq!(r.y, ship.rect().y);
    assert_eq!((r.width, r.height), (s.bullet_width, s.bullet_height));
}

#[test]
fn bullet_moves_up_keeping_x() {
    let s = make_settings();
    let ship = Ship::new(&s);
    let mut b = Bullet::new(&s, &ship);
    let (x, y) = (b.x, b.y);
    b.update(&s);
    assert_eq!(b.x, x);
    assert!((b.y - (y - s.bullet_speed)).abs() < 1e-9);
}

#[test]
fn bullet_off_screen_once_bottom_reaches_zero() {
    let s = make_settings();
    let ship = Ship::new(&s);
    let mut b = Bullet::new(&s, &ship);
    b.y = -(s.bullet_height as f64) + 1.0;
    assert!(!b.is_off_screen());
    b.y = -(s.bullet_height as f64);
    assert!(b.is_off_screen());
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[test]
fn alien_moves_with_fleet_direction() {
    let mut s = make_settings();
    let mut alien = Alien::new(&s, 100, 50);
    alien.update(&s);
    assert!((alien.x - 101.0).abs() < 1e-9);
    s.fleet_direction = FleetDirection::Left;
    alien.update(&s);
    alien.update(&s);
    assert!((alien.x - 99.0).abs() < 1e-9);
    assert_eq!(alien.y, 50);
}

#[test]
fn alien_edge_detection() {
    let s = make_settings();
    let w = s.screen_width;
    assert!(Alien::new(&s, 0, 50).check_edges(w));
    assert!(Alien::new(&s, w - s.alien_width, 50).check_edges(w));
    assert!(!Alien::new(&s, 1, 50).check_edges(w));
    assert!(!Alien::new(&s, w - s.alien_width - 1, 50).check_edges(w));
}

#[test]
fn sprites_identify_entity_kind() {
    let s = make_settings();
    let ship = Ship::new(&s);
    assert_eq!(ship.sprite(), Sprite::Ship);
    assert_eq!(Bullet::new(&s, &ship).sprite(), Sprite::Bullet);
    assert_eq!(Alien::new(&s, 0, 0).sprite(), Sprite::Alien);
}
