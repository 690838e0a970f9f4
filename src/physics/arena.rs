use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::SimBody;
use crate::core::config::GameConfig;

const WALL_COLOR: Color = Color::srgb(0.31, 0.27, 0.90);

/// Marker for the static arena bodies (floor + side walls).
#[derive(Component)]
pub struct ArenaWall;

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

/// Floor and side walls bounding the playfield. The floor sits just below
/// the visible area so its top edge lines up with the arena bottom; it is a
/// labeled body and therefore part of the loss detector's census.
fn spawn_arena(mut commands: Commands, cfg: Res<GameConfig>) {
    let hw = cfg.arena.half_width();
    let hh = cfg.arena.half_height();
    let half_t = cfg.arena.wall_thickness / 2.0;

    let floor_size = Vec2::new(cfg.arena.width + cfg.arena.wall_thickness, cfg.arena.wall_thickness);
    let wall_size = Vec2::new(cfg.arena.wall_thickness, cfg.arena.height + cfg.arena.wall_thickness);

    commands.spawn((
        ArenaWall,
        SimBody,
        RigidBody::Fixed,
        Collider::cuboid(floor_size.x / 2.0, half_t),
        Sprite {
            color: WALL_COLOR,
            custom_size: Some(floor_size),
            ..default()
        },
        Transform::from_xyz(0.0, -hh - half_t, 0.0),
    ));

    for side in [-1.0_f32, 1.0] {
        commands.spawn((
            ArenaWall,
            SimBody,
            RigidBody::Fixed,
            Collider::cuboid(half_t, wall_size.y / 2.0),
            Sprite {
                color: WALL_COLOR,
                custom_size: Some(wall_size),
                ..default()
            },
            Transform::from_xyz(side * (hw + half_t), 0.0, 0.0),
        ));
    }
}
