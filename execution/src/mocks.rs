use std::collections::VecDeque;

use rand::{rngs::StdRng, SeedableRng};
use superwheel_types::wheel::{Ring, MIN_FULL_TURNS};

use crate::{
    config::TableConfig,
    geometry::{RandomSpins, SpinDraw, SpinSource},
    table::WheelTable,
};

/// Index of the first wedge on `ring` carrying `label`.
pub fn index_of(ring: Ring, label: &str) -> Option<usize> {
    ring.sequence().iter().position(|wedge| *wedge == label)
}

/// Spin source that replays a fixed script of draws.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSpins {
    draws: VecDeque<(Ring, SpinDraw)>,
}

impl ScriptedSpins {
    pub fn new(draws: impl IntoIterator<Item = (Ring, SpinDraw)>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Script draws that land each ring, in order, on the first wedge with the given label.
    pub fn landing_on(landings: &[(Ring, &str)]) -> Self {
        Self::new(landings.iter().map(|(ring, label)| {
            let target_index = index_of(*ring, label)
                .unwrap_or_else(|| panic!("no {label:?} wedge on the {ring} ring"));
            (
                *ring,
                SpinDraw {
                    target_index,
                    full_turns: MIN_FULL_TURNS,
                },
            )
        }))
    }
}

impl SpinSource for ScriptedSpins {
    fn draw(&mut self, ring: Ring) -> SpinDraw {
        let (scripted, draw) = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted draw left for the {ring} ring"));
        assert_eq!(scripted, ring, "scripted draw for the wrong ring");
        draw
    }
}

/// Seeded random spin source.
pub fn seeded_spins(seed: u64) -> RandomSpins<StdRng> {
    RandomSpins::new(StdRng::seed_from_u64(seed))
}

/// Table with default configuration that lands on the scripted wedges.
pub fn scripted_table(balance: u64, landings: &[(Ring, &str)]) -> WheelTable<ScriptedSpins> {
    let config = TableConfig {
        starting_balance: balance,
        ..TableConfig::default()
    };
    WheelTable::new(config, ScriptedSpins::landing_on(landings))
        .unwrap_or_else(|err| panic!("default config rejected: {err}"))
}
