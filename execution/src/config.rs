//! Table configuration.

use superwheel_types::wheel::{
    ConfigError, CASCADE_DELAY_MS, SETTLE_DELAY_MS, SPIN_DURATION_MS, STARTING_BALANCE,
};

use crate::cascade::Delay;

/// Presentation delays with durations in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// Time the wheel turns before the landed wedge is resolved.
    pub spin_ms: u64,
    /// Pause after a bonus wedge before the next ring starts.
    pub cascade_ms: u64,
    /// Pause after the final settlement before the round resets.
    pub settle_ms: u64,
}

impl TimingConfig {
    pub fn new(spin_ms: u64, cascade_ms: u64, settle_ms: u64) -> Self {
        Self {
            spin_ms,
            cascade_ms,
            settle_ms,
        }
    }

    /// Validate the configuration (all durations must be > 0).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spin_ms == 0 {
            return Err(ConfigError::ZeroDuration("spin_ms"));
        }
        if self.cascade_ms == 0 {
            return Err(ConfigError::ZeroDuration("cascade_ms"));
        }
        if self.settle_ms == 0 {
            return Err(ConfigError::ZeroDuration("settle_ms"));
        }
        Ok(())
    }

    pub fn duration_for(&self, delay: Delay) -> u64 {
        match delay {
            Delay::Spin => self.spin_ms,
            Delay::Cascade => self.cascade_ms,
            Delay::Settle => self.settle_ms,
        }
    }

    /// Longest possible round: three spins, two cascades and the final settle.
    pub fn max_round_duration_ms(&self) -> u64 {
        self.spin_ms
            .saturating_mul(3)
            .saturating_add(self.cascade_ms.saturating_mul(2))
            .saturating_add(self.settle_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::new(SPIN_DURATION_MS, CASCADE_DELAY_MS, SETTLE_DELAY_MS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableConfig {
    pub starting_balance: u64,
    pub timing: TimingConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            timing: TimingConfig::default(),
        }
    }
}
