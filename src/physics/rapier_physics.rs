use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier for the arena

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
            .add_systems(Startup, configure_gravity);
        if app.world().resource::<GameConfig>().rapier_debug {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

fn configure_gravity(mut rapier_cfg: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    if let Ok(mut rc) = rapier_cfg.single_mut() {
        rc.gravity = Vect::new(0.0, cfg.gravity.y);
    }
}

/// Stops the physics step entirely; the buried pile freezes in place.
pub fn pause_physics(mut rapier_cfg: Query<&mut RapierConfiguration>) {
    if let Ok(mut rc) = rapier_cfg.single_mut() {
        rc.physics_pipeline_active = false;
    }
}

pub fn resume_physics(mut rapier_cfg: Query<&mut RapierConfiguration>) {
    if let Ok(mut rc) = rapier_cfg.single_mut() {
        rc.physics_pipeline_active = true;
    }
}
