//! Common types used throughout superwheel.

pub mod wheel;

pub use wheel::{
    BetBook, BetLabel, CascadePhase, EngineError, Ring, RoundEvent, RoundResult, TableSnapshot,
};
