//! Return-to-player analytics.
//!
//! Every ring lands uniformly, so the exact expected return of a bet is the payout averaged
//! over the wedges of the outer ring, with a BONUS landing worth the expected value of the rest
//! of the cascade. Computed by running the payout rules themselves over a unit stake.

use superwheel_types::wheel::{BetBook, BetLabel, Ring};

use crate::payout::{settle_bonus_stage, settle_outer};

/// Expected amount returned by a unit stake carried onto `ring`.
fn stage_value(ring: Ring) -> f64 {
    let total: f64 = ring
        .sequence()
        .iter()
        .map(|label| {
            let settlement = settle_bonus_stage(ring, label, 1);
            let continuation = settlement.continue_to.map(stage_value).unwrap_or(0.0);
            settlement.winnings as f64 + continuation
        })
        .sum();
    total / ring.len() as f64
}

/// Expected amount returned (stake included) per unit staked on `label`.
pub fn expected_return(label: BetLabel) -> f64 {
    let stakes: BetBook = [(label, 1)].into_iter().collect();
    let total: f64 = Ring::Outer
        .sequence()
        .iter()
        .map(|wedge| {
            let settlement = settle_outer(wedge, &stakes);
            let carried = match settlement.continue_to {
                Some(next) => settlement.carried_bonus as f64 * stage_value(next),
                None => 0.0,
            };
            settlement.winnings as f64 + carried
        })
        .sum();
    total / Ring::Outer.len() as f64
}

/// Fraction of each unit staked on `label` the house keeps on average.
pub fn house_edge(label: BetLabel) -> f64 {
    1.0 - expected_return(label)
}

/// Expected return for every bet label, in table order.
pub fn return_table() -> Vec<(BetLabel, f64)> {
    BetLabel::ALL
        .into_iter()
        .map(|label| (label, expected_return(label)))
        .collect()
}
