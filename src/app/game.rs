// This file is part of Prize Cannon.
// Copyright (C) 2025 the Prize Cannon contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::{ConfigLoadNote, GameConfig};
use crate::core::rng::SessionRng;
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::gameplay::cannon::{apply_cannon_commands, CannonPlugin};
use crate::gameplay::lifetime::expire_lifetimes;
use crate::gameplay::loss::{check_cannon_pileup, LossDetectorPlugin};
use crate::gameplay::scoring::{apply_hits, ScoringPlugin};
use crate::gameplay::spawner::{schedule_respawn, tick_respawn, SpawnControllerPlugin};
use crate::gameplay::target::{check_ground_miss, resolve_target_collisions, TargetPlugin};
use crate::interaction::input::keyboard_input;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::reset::SessionPlugin;
use crate::physics::arena::ArenaPlugin;
use crate::physics::rapier_physics::{pause_physics, resume_physics, PhysicsSetupPlugin};
use crate::rendering::camera::CameraPlugin;
use crate::rendering::hud::HudPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .configure_sets(
                Update,
                (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
            )
            .add_plugins((
                CameraPlugin,
                PhysicsSetupPlugin,
                ArenaPlugin,
                CannonPlugin,
                TargetPlugin,
                SpawnControllerPlugin,
                ScoringPlugin,
                LossDetectorPlugin,
                SessionPlugin,
                HudPlugin,
                AutoClosePlugin,
            ))
            .add_systems(Startup, (seed_session_rng, log_config_notes))
            // Session end halts the simulation itself, not just the rules;
            // the reset path re-arms it.
            .add_systems(OnEnter(AppState::GameOver), pause_physics)
            .add_systems(OnEnter(AppState::Playing), resume_physics)
            .add_systems(
                Update,
                keyboard_input
                    .in_set(PrePhysicsSet)
                    .before(apply_cannon_commands),
            )
            .add_systems(
                Update,
                // Post-physics resolution must run in this exact order:
                // contacts settle before the ground-miss sweep, despawns
                // apply before the pile-up census.
                (
                    resolve_target_collisions,
                    check_ground_miss,
                    expire_lifetimes,
                    schedule_respawn,
                    tick_respawn,
                    apply_hits,
                    check_cannon_pileup,
                )
                    .chain()
                    .in_set(PostPhysicsAdjustSet)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

fn seed_session_rng(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(SessionRng::from_seed_opt(cfg.seed));
}

fn log_config_notes(cfg: Res<GameConfig>, note: Option<Res<ConfigLoadNote>>) {
    if let Some(note) = note {
        if let Some(msg) = &note.0 {
            warn!("{msg}");
        }
    }
    for warning in cfg.validate() {
        warn!("config: {warning}");
    }
}
