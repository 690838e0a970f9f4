use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Session-wide random source behind every draw (prize selection, spawn
/// position, hit-vs-explode). Seed it from config for reproducible runs.
#[derive(Resource, Deref, DerefMut)]
pub struct SessionRng(pub Pcg32);

impl SessionRng {
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self(Pcg32::seed_from_u64(s)),
            None => Self(Pcg32::from_entropy()),
        }
    }
}
