use alien_invasion::config::Config;
use alien_invasion::entities::{Alien, Entity};
use alien_invasion::fleet::*;
use alien_invasion::settings::{FleetDirection, Settings};

fn make_settings(width: i32, height: i32, alien: (i32, i32), ship_height: i32) -> Settings {
    let mut config = Config::default();
    config.screen.width = width;
    config.screen.height = height;
    config.alien.width = alien.0;
    config.alien.height = alien.1;
    config.ship.height = ship_height;
    let mut s = Settings::from_config(&config);
    s.increase_speed();
    s
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[test]
fn layout_for_small_aliens_on_default_screen() {
    let s = make_settings(1200, 800, (40, 24), 48);
    let layout = FleetLayout::for_settings(&s);
    assert_eq!(layout.cols, 14); // (1200 - 80) / 80
    assert_eq!(layout.rows, 16); // (800 - (72 - 48)) / 48
    let mut aliens = Vec::new();
    create_fleet(&s, &mut aliens);
    assert_eq!(aliens.len(), 224);
}

#[test]
fn layout_for_default_settings() {
    let s = make_settings(1200, 800, (60, 58), 48);
    let layout = FleetLayout::for_settings(&s);
    assert_eq!(layout, FleetLayout { cols: 9, rows: 5 });
}

#[test]
fn grid_positions_are_row_major_with_one_alien_gaps() {
    let s = make_settings(1200, 800, (40, 24), 48);
    let mut aliens = Vec::new();
    create_fleet(&s, &mut aliens);

    let first = aliens[0].rect();
    assert_eq!((first.x, first.y), (40, 24));
    let second = aliens[1].rect();
    assert_eq!((second.x, second.y), (120, 24));
    let next_row = aliens[14].rect();
    assert_eq!((next_row.x, next_row.y), (40, 72));
    let last = aliens[223].rect();
    assert_eq!((last.x, last.y), (40 + 80 * 13, 24 + 48 * 15));
}

#[test]
fn screen_too_small_gives_empty_fleet() {
    let s = make_settings(50, 50, (60, 58), 48);
    let layout = FleetLayout::for_settings(&s);
    assert!(layout.is_empty());
    let mut aliens = Vec::new();
    create_fleet(&s, &mut aliens);
    assert!(aliens.is_empty());
}

#[test]
fn screen_exactly_too_narrow_for_one_column() {
    // 2 * 60 margin + 119 < one 120-wide slot
    let s = make_settings(239, 800, (60, 58), 48);
    assert_eq!(FleetLayout::for_settings(&s).cols, 0);
    let s = make_settings(240, 800, (60, 58), 48);
    assert_eq!(FleetLayout::for_settings(&s).cols, 1);
}

#[test]
fn create_fleet_appends_without_clearing() {
    let s = make_settings(1200, 800, (60, 58), 48);
    let mut aliens = vec![Alien::new(&s, 500, 500)];
    create_fleet(&s, &mut aliens);
    assert_eq!(aliens.len(), 1 + 45);
}

#[test]
fn repopulated_fleet_matches_initial_layout() {
    let s = make_settings(1200, 800, (60, 58), 48);
    let mut first = Vec::new();
    create_fleet(&s, &mut first);
    let mut second = Vec::new();
    create_fleet(&s, &mut second);
    let a: Vec<_> = first.iter().map(|a| a.rect()).collect();
    let b: Vec<_> = second.iter().map(|a| a.rect()).collect();
    assert_eq!(a, b);
}

// ── Edges and direction ───────────────────────────────────────────────────────

#[test]
fn fresh_fleet_does_not_touch_edges() {
    let s = make_settings(1200, 800, (60, 58), 48);
    let mut aliens = Vec::new();
    create_fleet(&s, &mut aliens);
    assert!(!check_fleet_edges(&aliens, s.screen_width));
}

#[test]
fn any_alien_at_edge_is_detected() {
    let s = make_settings(1200, 800, (60, 58), 48);
    let aliens = vec![Alien::new(&s, 300, 60), Alien::new(&s, 1140, 60)];
    assert!(check_fleet_edges(&aliens, s.screen_width));
}

#[test]
fn change_direction_drops_and_flips() {
    let mut s = make_settings(1200, 800, (60, 58), 48);
    let mut aliens = vec![Alien::new(&s, 0, 60), Alien::new(&s, 300, 180)];
    change_fleet_direction(&mut aliens, &mut s);
    assert_eq!(s.fleet_direction, FleetDirection::Left);
    assert_eq!(aliens[0].y, 70);
    assert_eq!(aliens[1].y, 190);
    change_fleet_direction(&mut aliens, &mut s);
    assert_eq!(s.fleet_direction, FleetDirection::Right);
}

#[test]
fn update_fleet_flips_once_even_with_many_aliens_at_edge() {
    let mut s = make_settings(1200, 800, (60, 58), 48);
    let mut aliens = vec![
        Alien::new(&s, 1140, 60),
        Alien::new(&s, 1140, 180),
        Alien::new(&s, 1140, 300),
    ];
    update_fleet(&mut aliens, &mut s);
    assert_eq!(s.fleet_direction, FleetDirection::Left);
    // dropped once, then moved left by one step
    assert_eq!(aliens[0].y, 70);
    assert!((aliens[0].x - 1139.0).abs() < 1e-9);
}

#[test]
fn update_fleet_without_edge_only_moves_sideways() {
    let mut s = make_settings(1200, 800, (60, 58), 48);
    let mut aliens = Vec::new();
    create_fleet(&s, &mut aliens);
    let before: Vec<_> = aliens.iter().map(|a| (a.x, a.y)).collect();
    update_fleet(&mut aliens, &mut s);
    for (alien, (x, y)) in aliens.iter().zip(before) {
        assert_eq!(alien.y, y);
        assert!((alien.x - (x + 1.0)).abs() < 1e-9);
    }
    assert_eq!(s.fleet_direction, FleetDirection::Right);
}
