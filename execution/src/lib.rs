//! Superwheel execution layer.
//!
//! This crate contains the wheel rules and the per-session state machine used by the table
//! service.
//!
//! ## Determinism requirements
//! - Do not read wall-clock time inside the engine; the host passes `now_ms` to
//!   [`WheelTable`].
//! - All randomness flows through a [`SpinSource`]; seed it for reproducible sessions.
//!
//! The primary entrypoint is [`WheelTable`].
//!
//! ## Minimal session (example)
//! ```rust
//! use superwheel_execution::{TableConfig, WheelTable};
//! use superwheel_types::BetLabel;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut table = WheelTable::with_seed(TableConfig::default(), 7)?;
//! table.place_bet(BetLabel::Two, 10)?;
//! table.spin(0)?;
//! // Drive the clock until the round (and any bonus cascade) returns to idle.
//! while let Some(deadline) = table.next_deadline() {
//!     table.tick(deadline);
//! }
//! assert!(table.snapshot().bets.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod cascade;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod ledger;
pub mod logging;
pub mod payout;
pub mod rtp;
pub mod table;
pub mod timer;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use config::{TableConfig, TimingConfig};
pub use engine::{Outcome, ScheduledTimer, WheelEngine};
pub use geometry::{RandomSpins, SpinSource};
pub use table::WheelTable;
