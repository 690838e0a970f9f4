use std::io::Write;

use prize_cannon::GameConfig;

#[test]
fn default_geometry_matches_classic_layout() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.arena.width, 800.0);
    assert_eq!(cfg.arena.height, 600.0);
    // Derived positions: cannon sits on the floor line, centered.
    let cannon = cfg.cannon_position();
    assert_eq!(cannon.x, 0.0);
    assert_eq!(cannon.y, -260.0);
    assert_eq!(cfg.miss_line_y(), -260.0);
    assert_eq!(cfg.loss_zone_top_y(), -200.0);
}

#[test]
fn default_tuning_values() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.cannon.fire_interval, 0.2);
    assert_eq!(cfg.cannon.projectile.lifetime, 3.0);
    assert_eq!(cfg.target.hit_chance, 0.5);
    assert_eq!(cfg.explosion.particle_count, 8);
    assert_eq!(cfg.scoring.hit_points, 10);
    assert_eq!(cfg.scoring.triplet_bonus, 100);
    assert_eq!(cfg.loss.max_bodies, 5);
    assert!(cfg.seed.is_none());
    assert!(cfg.validate().is_empty());
}

#[test]
fn missing_file_falls_back_with_note() {
    let (cfg, note) = GameConfig::load_or_default("/nonexistent/game.ron");
    assert_eq!(cfg, GameConfig::default());
    assert!(note.is_some());
}

#[test]
fn partial_ron_overrides_only_named_fields() {
    let sample = r#"(
        target: (hit_chance: 1.0, respawn_delay: 0.0),
        seed: Some(7),
    )"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sample.as_bytes()).unwrap();

    let (cfg, note) = GameConfig::load_or_default(file.path());
    assert!(note.is_none());
    assert_eq!(cfg.target.hit_chance, 1.0);
    assert_eq!(cfg.target.respawn_delay, 0.0);
    assert_eq!(cfg.seed, Some(7));
    // Untouched sections keep their defaults.
    assert_eq!(cfg.arena.width, 800.0);
    assert_eq!(cfg.cannon.fire_interval, 0.2);
}

#[test]
fn shipped_config_parses_and_matches_defaults() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron").expect("parse shipped config");
    assert!(cfg.validate().is_empty());
    assert_eq!(cfg.scoring, GameConfig::default().scoring);
    assert_eq!(cfg.loss.max_bodies, GameConfig::default().loss.max_bodies);
}
