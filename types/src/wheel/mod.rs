//! Wheel domain types.
//!
//! Fixed ring tables, bet categories, round results and error types shared by the engine and
//! the table service.

mod bets;
mod constants;
mod error;
mod ring;
mod round;

pub use bets::*;
pub use constants::*;
pub use error::*;
pub use ring::*;
pub use round::*;

#[cfg(test)]
mod tests;
