use bevy::prelude::*;
use smallvec::SmallVec;

use crate::core::components::Prize;
use crate::core::config::{GameConfig, ScoringConfig};
use crate::gameplay::target::{TargetOutcome, TargetResolved};

/// Capacity of the recent-prize history.
pub const PRIZE_QUEUE_LEN: usize = 3;

/// Bounded history of the most recently collected prizes; the oldest entry
/// is evicted once the queue is full.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrizeQueue {
    slots: SmallVec<[Prize; PRIZE_QUEUE_LEN]>,
}

impl PrizeQueue {
    pub fn push(&mut self, prize: Prize) {
        if self.slots.len() == PRIZE_QUEUE_LEN {
            self.slots.remove(0);
        }
        self.slots.push(prize);
    }

    /// True when the queue is full and every entry shares one symbol.
    pub fn is_triplet(&self) -> bool {
        self.slots.len() == PRIZE_QUEUE_LEN
            && self.slots.iter().all(|p| p.symbol == self.slots[0].symbol)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[Prize] {
        &self.slots
    }
}

/// Session-scoped score store; the single mutable owner of scoring state.
/// `game_over` is terminal until an explicit reset.
#[derive(Resource, Debug, Default)]
pub struct SessionState {
    pub score: u64,
    pub prizes: PrizeQueue,
    pub game_over: bool,
}

impl SessionState {
    /// Applies one collected prize: bounded append, base reward, then the
    /// triplet bonus which empties the queue entirely. Re-evaluated on every
    /// append, so a match formed through eviction still pays out.
    pub fn record_hit(&mut self, prize: Prize, rules: &ScoringConfig) {
        self.prizes.push(prize);
        self.score += rules.hit_points;
        if self.prizes.is_triplet() {
            self.score += rules.triplet_bonus;
            self.prizes.clear();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionState>();
    }
}

pub fn apply_hits(
    mut session: ResMut<SessionState>,
    cfg: Res<GameConfig>,
    mut ev: EventReader<TargetResolved>,
) {
    for resolved in ev.read() {
        if let TargetOutcome::Hit(prize) = resolved.outcome {
            if session.game_over {
                continue;
            }
            session.record_hit(prize, &cfg.scoring);
            info!(
                score = session.score,
                queued = session.prizes.len(),
                "prize collected"
            );
        }
    }
}
