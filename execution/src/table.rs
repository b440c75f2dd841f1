//! Timer-driven wheel table.
//!
//! [`WheelTable`] pairs a [`WheelEngine`] with the queue of its pending timers. The host passes
//! its clock in (milliseconds) on every call; timers are due `delay` after the moment they were
//! armed, and a timer armed while handling another is measured from that timer's due time, so
//! a late tick replays the round exactly as if it had been on time.

use rand::{rngs::StdRng, SeedableRng};
use superwheel_types::wheel::{
    BetLabel, CascadePhase, ConfigError, EngineError, RoundEvent, TableSnapshot,
};
use tracing::warn;

use crate::{
    config::{TableConfig, TimingConfig},
    engine::{ScheduledTimer, WheelEngine},
    geometry::{RandomSpins, SpinSource},
    timer::TimerQueue,
};

pub struct WheelTable<S> {
    engine: WheelEngine<S>,
    timers: TimerQueue<ScheduledTimer>,
    timing: TimingConfig,
}

impl WheelTable<RandomSpins<StdRng>> {
    /// Table drawing spins from a [`StdRng`] seeded with `seed`.
    pub fn with_seed(config: TableConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, RandomSpins::new(StdRng::seed_from_u64(seed)))
    }
}

impl<S: SpinSource> WheelTable<S> {
    pub fn new(config: TableConfig, source: S) -> Result<Self, ConfigError> {
        config.timing.validate()?;
        Ok(Self {
            engine: WheelEngine::new(config.starting_balance, source),
            timers: TimerQueue::new(),
            timing: config.timing,
        })
    }

    pub fn phase(&self) -> CascadePhase {
        self.engine.phase()
    }

    pub fn place_bet(&mut self, label: BetLabel, amount: u64) -> Result<(), EngineError> {
        self.engine.place_bet(label, amount).inspect_err(|err| {
            warn!(label = %label, amount, error = %err, "bet rejected");
        })
    }

    pub fn clear_bets(&mut self) -> Result<u64, EngineError> {
        self.engine.clear_bets().inspect_err(|err| {
            warn!(error = %err, "clear rejected");
        })
    }

    /// Start a round at `now_ms`. A rejected spin leaves the timer queue untouched.
    pub fn spin(&mut self, now_ms: u64) -> Result<Vec<RoundEvent>, EngineError> {
        let outcome = self.engine.spin().inspect_err(|err| {
            warn!(error = %err, phase = self.engine.phase().as_str(), "spin rejected");
        })?;
        self.arm(now_ms, &outcome.timers);
        Ok(outcome.events)
    }

    /// Fire every timer due at or before `now_ms`, in due order, including timers armed along
    /// the way. Returns the events emitted.
    pub fn tick(&mut self, now_ms: u64) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        while let Some((due_ms, timer)) = self.timers.pop_due(now_ms) {
            let outcome = self.engine.fire(timer);
            self.arm(due_ms, &outcome.timers);
            events.extend(outcome.events);
        }
        events
    }

    fn arm(&mut self, from_ms: u64, timers: &[ScheduledTimer]) {
        for timer in timers {
            let due_ms = from_ms.saturating_add(self.timing.duration_for(timer.delay));
            self.timers.schedule(due_ms, *timer);
        }
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        self.engine.snapshot()
    }
}
