//! Payout rules per ring.
//!
//! Outer ring (settled against the bet book):
//! - `1`, `2`, `5`, `10` pay only the matching wager at `n + 1`
//! - `Logo1` pays 26x, `Logo2` pays 51x
//! - `BONUS` pays every numeric wager at its own `n + 1` and carries the BONUS wager into the
//!   cascade instead of paying it
//!
//! Middle and inner rings (settled against the carried bonus stake):
//! - a numeric wedge pays `stake * (n + 1)` and ends the round
//! - the middle `BONUS` pays nothing and moves the stake to the inner ring

use superwheel_types::wheel::{BetBook, BetLabel, Ring, BONUS_LABEL};
use tracing::warn;

/// Result of settling one landed wedge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    pub winnings: u64,
    /// Stake moved into the bonus cascade (outer BONUS only).
    pub carried_bonus: u64,
    /// Ring the cascade continues to, if any.
    pub continue_to: Option<Ring>,
}

/// Multiplier printed on a numeric wedge.
///
/// Labels are a closed, fixed set, but a label that does not parse pays multiplier 0 rather
/// than halting the round.
pub fn label_multiplier(label: &str) -> u64 {
    match label.parse::<u64>() {
        Ok(multiplier) => multiplier,
        Err(_) => {
            warn!(label, "unparseable wedge label, paying multiplier 0");
            0
        }
    }
}

/// Winnings for a stake at `multiplier` (the stake itself is returned too).
fn pays(stake: u64, multiplier: u64) -> u64 {
    stake.saturating_mul(multiplier.saturating_add(1))
}

/// Settle an outer wedge against the bets staked on the spin.
pub fn settle_outer(label: &str, bets: &BetBook) -> Settlement {
    match BetLabel::from_wedge(label) {
        Some(BetLabel::Bonus) => {
            let winnings = BetLabel::NUMERIC
                .into_iter()
                .map(|numeric| pays(bets.get(numeric), numeric.multiplier().unwrap_or(0)))
                .fold(0u64, u64::saturating_add);
            let carried_bonus = bets.get(BetLabel::Bonus);
            Settlement {
                winnings,
                carried_bonus,
                continue_to: if carried_bonus > 0 { Ring::Outer.next() } else { None },
            }
        }
        Some(category) => Settlement {
            winnings: pays(bets.get(category), category.multiplier().unwrap_or(0)),
            ..Settlement::default()
        },
        None => {
            warn!(label, "outer wedge pays no bet category");
            Settlement::default()
        }
    }
}

/// Settle a middle or inner wedge against the carried bonus stake.
pub fn settle_bonus_stage(ring: Ring, label: &str, active_bonus_bet: u64) -> Settlement {
    if label == BONUS_LABEL {
        if let Some(next) = ring.next() {
            return Settlement {
                continue_to: Some(next),
                ..Settlement::default()
            };
        }
    }
    Settlement {
        winnings: pays(active_bonus_bet, label_multiplier(label)),
        ..Settlement::default()
    }
}
