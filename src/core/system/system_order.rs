//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (input, aim, fire; body additions before the Rapier step)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (outcome resolution, expiries, respawn, scoring, loss)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // commands applied before the physics simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // discrete game-rule transitions after physics
