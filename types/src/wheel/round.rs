use serde::{Deserialize, Serialize};

use super::{BetBook, PerRing, Ring};

/// Position of a round in the bonus cascade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadePhase {
    #[default]
    Idle,
    /// Target chosen, waiting for the wheel to stop.
    Spinning(Ring),
    /// Payout committed. `next` is the ring the cascade moves to, or `None` when the round is
    /// over and only the return to idle is pending.
    Settled { ring: Ring, next: Option<Ring> },
}

impl CascadePhase {
    pub fn spinning_ring(self) -> Option<Ring> {
        match self {
            CascadePhase::Spinning(ring) => Some(ring),
            _ => None,
        }
    }

    pub fn current_ring(self) -> Option<Ring> {
        match self {
            CascadePhase::Idle => None,
            CascadePhase::Spinning(ring) | CascadePhase::Settled { ring, .. } => Some(ring),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CascadePhase::Idle => "idle",
            CascadePhase::Spinning(Ring::Outer) => "spinning_outer",
            CascadePhase::Spinning(Ring::Middle) => "spinning_middle",
            CascadePhase::Spinning(Ring::Inner) => "spinning_inner",
            CascadePhase::Settled { ring: Ring::Outer, .. } => "settled_outer",
            CascadePhase::Settled { ring: Ring::Middle, .. } => "settled_middle",
            CascadePhase::Settled { ring: Ring::Inner, .. } => "settled_inner",
        }
    }
}

/// Settled outcome of one ring within a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub ring: Ring,
    pub label: String,
    pub winnings: u64,
}

/// Notification emitted to the presentation layer as a round progresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RoundEvent {
    SpinStarted {
        ring: Ring,
        target_index: usize,
        rotation: i64,
    },
    WedgeResolved {
        ring: Ring,
        index: usize,
        label: String,
        winnings: u64,
    },
    CascadeTo {
        ring: Ring,
    },
    RoundFinished {
        results: Vec<RoundResult>,
    },
    Reset,
}

/// Presentation state of one ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingView {
    /// Accumulated rotation in degrees.
    pub rotation: i64,
    pub is_spinning: bool,
    pub winning_index: Option<usize>,
}

/// Everything a renderer needs, captured at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    pub balance: u64,
    pub bets: BetBook,
    pub total_staked: u64,
    pub phase: &'static str,
    pub active_bonus_bet: u64,
    pub rings: PerRing<RingView>,
    pub spin_results: Vec<RoundResult>,
}

impl TableSnapshot {
    pub fn is_spinning(&self) -> bool {
        Ring::ALL.iter().any(|ring| self.rings.get(*ring).is_spinning)
    }
}
