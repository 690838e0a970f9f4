use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Prize Cannon".into(),
            auto_close: 0.0,
        }
    }
}

/// Playfield geometry, centered on the origin (y-up).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
}
impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            wall_thickness: 20.0,
        }
    }
}
impl ArenaConfig {
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -500.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProjectileConfig {
    pub radius: f32,
    pub restitution: f32,
    /// Impulse magnitude applied along the aim direction at the muzzle.
    pub impulse: f32,
    /// Seconds before the projectile self-destructs, collisions or not.
    pub lifetime: f32,
}
impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            restitution: 0.8,
            impulse: 70_000.0,
            lifetime: 3.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CannonConfig {
    pub width: f32,
    pub height: f32,
    /// Height of the cannon body center above the arena floor line.
    pub floor_offset: f32,
    /// Rotation rate (rad/s) while a rotate key is held.
    pub rotate_speed: f32,
    /// Aim arc half-angle; the angle is clamped to [-max_angle, max_angle].
    pub max_angle: f32,
    /// Muzzle distance from the body center along the aim direction.
    pub barrel_length: f32,
    /// Seconds between shots while firing.
    pub fire_interval: f32,
    pub projectile: ProjectileConfig,
}
impl Default for CannonConfig {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 60.0,
            floor_offset: 40.0,
            rotate_speed: 1.5,
            max_angle: std::f32::consts::FRAC_PI_3,
            barrel_length: 40.0,
            fire_interval: 0.2,
            projectile: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TargetConfig {
    pub radius: f32,
    pub friction: f32,
    pub restitution: f32,
    pub linear_damping: f32,
    /// Horizontal margin kept free on both sides of the spawn band.
    pub spawn_margin: f32,
    /// Spawn height above the top edge of the arena.
    pub spawn_height: f32,
    /// A still-falling target below (floor + miss_offset) counts as missed.
    pub miss_offset: f32,
    /// Delay between a resolution and the next spawn.
    pub respawn_delay: f32,
    /// Probability that a collision resolves as Hit rather than Explode.
    pub hit_chance: f32,
}
impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            friction: 0.001,
            restitution: 0.5,
            linear_damping: 0.05,
            spawn_margin: 50.0,
            spawn_height: 30.0,
            miss_offset: 40.0,
            respawn_delay: 1.0,
            hit_chance: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExplosionConfig {
    pub particle_count: usize,
    pub particle_radius: f32,
    pub particle_speed: f32,
    pub particle_lifetime: f32,
    pub particle_damping: f32,
}
impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            particle_count: 8,
            particle_radius: 5.0,
            particle_speed: 300.0,
            particle_lifetime: 1.0,
            particle_damping: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub hit_points: u64,
    pub triplet_bonus: u64,
}
impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            hit_points: 10,
            triplet_bonus: 100,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LossConfig {
    /// Height of the near-floor census zone above the arena floor line.
    pub zone_height: f32,
    /// Horizontal distance from the cannon within which a body counts.
    pub radius: f32,
    /// Strictly more than this many bodies in the zone ends the session.
    pub max_bodies: usize,
    /// Seconds between censuses.
    pub check_interval: f32,
}
impl Default for LossConfig {
    fn default() -> Self {
        Self {
            zone_height: 100.0,
            radius: 50.0,
            max_bodies: 5,
            check_interval: 1.0 / 60.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub arena: ArenaConfig,
    pub gravity: GravityConfig,
    pub cannon: CannonConfig,
    pub target: TargetConfig,
    pub explosion: ExplosionConfig,
    pub scoring: ScoringConfig,
    pub loss: LossConfig,
    /// Fixed RNG seed for reproducible sessions; None = entropy.
    pub seed: Option<u64>,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            arena: Default::default(),
            gravity: Default::default(),
            cannon: Default::default(),
            target: Default::default(),
            explosion: Default::default(),
            scoring: Default::default(),
            loss: Default::default(),
            seed: None,
            rapier_debug: false,
        }
    }
}

/// Outcome of the config load attempt, kept around so the warning can be
/// logged once the log subscriber exists.
#[derive(Resource, Debug, Clone)]
pub struct ConfigLoadNote(pub Option<String>);

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// World position of the cannon body center.
    pub fn cannon_position(&self) -> Vec2 {
        Vec2::new(0.0, -self.arena.half_height() + self.cannon.floor_offset)
    }

    /// A still-falling target below this line is a Miss.
    pub fn miss_line_y(&self) -> f32 {
        -self.arena.half_height() + self.target.miss_offset
    }

    /// Bodies below this line are candidates for the pile-up census.
    pub fn loss_zone_top_y(&self) -> f32 {
        -self.arena.half_height() + self.loss.zone_height
    }

    /// Validate the configuration returning a list of human-readable warning
    /// strings. These represent suspicious / potentially unintended values but
    /// are not hard errors. Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            w.push("arena dimensions must be > 0".into());
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; targets may float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); Y-up world? typical configs use negative for downward",
                self.gravity.y
            ));
        }
        if self.cannon.fire_interval <= 0.0 {
            w.push("cannon.fire_interval must be > 0 (fires every frame otherwise)".into());
        }
        if self.cannon.barrel_length <= 0.0 {
            w.push("cannon.barrel_length must be > 0; projectiles spawn inside the body".into());
        }
        if self.cannon.max_angle <= 0.0 || self.cannon.max_angle > std::f32::consts::FRAC_PI_2 {
            w.push(format!(
                "cannon.max_angle {} outside (0, pi/2] typical arc",
                self.cannon.max_angle
            ));
        }
        if self.cannon.projectile.lifetime <= 0.0 {
            w.push("cannon.projectile.lifetime must be > 0".into());
        }
        if self.cannon.projectile.impulse <= 0.0 {
            w.push("cannon.projectile.impulse must be > 0".into());
        }
        if self.target.radius <= 0.0 {
            w.push("target.radius must be > 0".into());
        }
        if !(0.0..=1.0).contains(&self.target.hit_chance) {
            w.push(format!(
                "target.hit_chance {} outside 0..1",
                self.target.hit_chance
            ));
        }
        if self.target.respawn_delay < 0.0 {
            w.push("target.respawn_delay negative".into());
        }
        if self.target.spawn_margin * 2.0 >= self.arena.width {
            w.push(format!(
                "target.spawn_margin {} leaves no spawn band in arena width {}",
                self.target.spawn_margin, self.arena.width
            ));
        }
        if !(0.0..=1.5).contains(&self.target.restitution) {
            w.push(format!(
                "target.restitution {} outside recommended 0..1.5",
                self.target.restitution
            ));
        }
        if self.explosion.particle_count == 0 {
            w.push("explosion.particle_count is 0; explosions are invisible".into());
        }
        if self.explosion.particle_lifetime <= 0.0 {
            w.push("explosion.particle_lifetime must be > 0".into());
        }
        if self.loss.max_bodies == 0 {
            w.push("loss.max_bodies is 0; the session ends almost immediately".into());
        }
        if self.loss.check_interval <= 0.0 {
            w.push("loss.check_interval must be > 0".into());
        }
        if self.loss.radius <= 0.0 {
            w.push("loss.radius must be > 0".into());
        }
        w
    }
}
