use bevy::prelude::*;

use prize_cannon::core::rng::SessionRng;
use prize_cannon::gameplay::spawner::{schedule_respawn, tick_respawn, RespawnTimer};
use prize_cannon::gameplay::target::{Target, TargetOutcome, TargetResolved};
use prize_cannon::{GameConfig, Prize, SimBody};

fn spawner_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(cfg);
    app.insert_resource(SessionRng::from_seed_opt(Some(21)));
    app.init_resource::<RespawnTimer>();
    app.add_event::<TargetResolved>();
    app.add_systems(Update, (schedule_respawn, tick_respawn).chain());
    app
}

fn target_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world
        .query_filtered::<Entity, With<Target>>()
        .iter(world)
        .count()
}

fn resolve(app: &mut App, outcome: TargetOutcome) {
    app.world_mut().send_event(TargetResolved { outcome });
}

#[test]
fn resolution_schedules_exactly_one_respawn() {
    // Zero delay so the armed timer elapses on the same frame.
    let mut cfg = GameConfig::default();
    cfg.target.respawn_delay = 0.0;
    let mut app = spawner_app(cfg);

    resolve(&mut app, TargetOutcome::Miss);
    app.update();
    assert_eq!(target_count(&mut app), 1);

    // No further resolutions, no further spawns.
    app.update();
    app.update();
    assert_eq!(target_count(&mut app), 1);
}

#[test]
fn respawn_waits_for_the_configured_delay() {
    let mut cfg = GameConfig::default();
    cfg.target.respawn_delay = 3600.0;
    let mut app = spawner_app(cfg);

    resolve(&mut app, TargetOutcome::Explode);
    app.update();
    app.update();
    assert_eq!(target_count(&mut app), 0, "delay has not elapsed");
    assert!(app.world().resource::<RespawnTimer>().0.is_some());
}

#[test]
fn respawn_is_skipped_while_a_target_is_alive() {
    let mut cfg = GameConfig::default();
    cfg.target.respawn_delay = 0.0;
    let mut app = spawner_app(cfg);

    app.world_mut().spawn((
        Target {
            prize: Prize::catalog()[2],
            alive: true,
        },
        SimBody,
        Transform::default(),
    ));

    // A stray resolution event must not produce a second simultaneous target.
    resolve(&mut app, TargetOutcome::Miss);
    app.update();
    assert_eq!(target_count(&mut app), 1);
    assert!(app.world().resource::<RespawnTimer>().0.is_none());
}

#[test]
fn oversized_spawn_margin_collapses_the_band() {
    // A margin at (or past) the half-width only warns at load; spawning
    // must still work, pinned near the center.
    for margin in [400.0, 500.0] {
        let mut cfg = GameConfig::default();
        cfg.target.spawn_margin = margin;
        cfg.target.respawn_delay = 0.0;
        let top = cfg.arena.half_height() + cfg.target.spawn_height;
        let mut app = spawner_app(cfg);

        resolve(&mut app, TargetOutcome::Miss);
        app.update();

        let world = app.world_mut();
        let tf = world
            .query_filtered::<&Transform, With<Target>>()
            .single(world)
            .expect("one target despite the degenerate margin");
        assert!(tf.translation.x.abs() <= 1.0);
        assert_eq!(tf.translation.y, top);
    }
}

#[test]
fn spawned_target_lands_inside_the_spawn_band() {
    let cfg = GameConfig::default();
    let band = cfg.arena.half_width() - cfg.target.spawn_margin;
    let top = cfg.arena.half_height() + cfg.target.spawn_height;
    let mut cfg = cfg;
    cfg.target.respawn_delay = 0.0;
    let mut app = spawner_app(cfg);

    for _ in 0..8 {
        resolve(&mut app, TargetOutcome::Miss);
        app.update();

        let world = app.world_mut();
        let (entity, tf) = world
            .query_filtered::<(Entity, &Transform), With<Target>>()
            .single(world)
            .expect("one fresh target");
        assert!(tf.translation.x.abs() < band);
        assert_eq!(tf.translation.y, top);
        world.entity_mut(entity).despawn();
    }
}
