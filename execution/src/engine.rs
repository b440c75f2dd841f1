//! Session engine.
//!
//! Owns one player's wheel session: the ledger, ring rotations, the cascade phase and the
//! round history. Operations return an [`Outcome`] with the events to publish and the timers
//! to arm. The engine never reads a clock: the controller in [`crate::table`] decides when a
//! timer fires.

use superwheel_types::wheel::{
    BetBook, BetLabel, CascadePhase, EngineError, PerRing, Ring, RingView, RoundEvent,
    RoundResult, TableSnapshot,
};
use tracing::{debug, info};

use crate::{
    cascade::{self, CascadeEvent, Delay, Effect, Timer, TransitionResult},
    geometry::{choose_spin, resolve_index, SpinSource},
    ledger::Ledger,
    logging::{format_round_results, total_winnings},
    payout::{settle_bonus_stage, settle_outer, Settlement},
};

/// Timer requested by the engine, tagged with the round that armed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub delay: Delay,
    pub timer: Timer,
    pub round: u64,
}

/// Events and timers produced by one engine step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub events: Vec<RoundEvent>,
    pub timers: Vec<ScheduledTimer>,
}

pub struct WheelEngine<S> {
    source: S,
    ledger: Ledger,
    rotations: PerRing<i64>,
    winning_index: PerRing<Option<usize>>,
    phase: CascadePhase,
    active_bonus_bet: u64,
    results: Vec<RoundResult>,
    round: u64,
}

impl<S: SpinSource> WheelEngine<S> {
    pub fn new(starting_balance: u64, source: S) -> Self {
        Self {
            source,
            ledger: Ledger::new(starting_balance),
            rotations: PerRing::default(),
            winning_index: PerRing::default(),
            phase: CascadePhase::Idle,
            active_bonus_bet: 0,
            results: Vec::new(),
            round: 0,
        }
    }

    pub fn phase(&self) -> CascadePhase {
        self.phase
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    pub fn bets(&self) -> &BetBook {
        self.ledger.bets()
    }

    pub fn total_staked(&self) -> u64 {
        self.ledger.total_staked()
    }

    pub fn active_bonus_bet(&self) -> u64 {
        self.active_bonus_bet
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn rotation(&self, ring: Ring) -> i64 {
        *self.rotations.get(ring)
    }

    pub fn winning_index(&self, ring: Ring) -> Option<usize> {
        *self.winning_index.get(ring)
    }

    /// Wagers are locked while the outer ring decides them.
    fn betting_open(&self) -> Result<(), EngineError> {
        if self.phase == CascadePhase::Spinning(Ring::Outer) {
            return Err(EngineError::BettingClosed);
        }
        Ok(())
    }

    pub fn place_bet(&mut self, label: BetLabel, amount: u64) -> Result<(), EngineError> {
        self.betting_open()?;
        self.ledger.place_bet(label, amount)?;
        Ok(())
    }

    /// Refund every wager. Returns the refunded amount.
    pub fn clear_bets(&mut self) -> Result<u64, EngineError> {
        self.betting_open()?;
        Ok(self.ledger.clear_bets())
    }

    /// Start a new round on the outer ring.
    ///
    /// A rejected spin changes nothing.
    pub fn spin(&mut self) -> Result<Outcome, EngineError> {
        let event = CascadeEvent::Spin {
            total_staked: self.ledger.total_staked(),
        };
        let transition = cascade::transition(self.phase, event)?;
        self.round = self.round.wrapping_add(1);
        debug!(
            round = self.round,
            total_staked = self.ledger.total_staked(),
            "round started"
        );
        let mut outcome = Outcome::default();
        self.apply(transition, &mut outcome);
        Ok(outcome)
    }

    /// Handle an elapsed timer. Timers armed by an earlier round are ignored.
    pub fn fire(&mut self, scheduled: ScheduledTimer) -> Outcome {
        let mut outcome = Outcome::default();
        if scheduled.round != self.round {
            debug!(
                timer = scheduled.timer.as_str(),
                armed_round = scheduled.round,
                round = self.round,
                "ignoring stale timer"
            );
            return outcome;
        }
        match scheduled.timer {
            Timer::Stop => self.stop(&mut outcome),
            Timer::Cascade => {
                if let Ok(transition) = cascade::transition(self.phase, CascadeEvent::CascadeDue) {
                    if let TransitionResult::TransitionTo {
                        phase: CascadePhase::Spinning(ring),
                        ..
                    } = &transition
                    {
                        outcome.events.push(RoundEvent::CascadeTo { ring: *ring });
                    }
                    self.apply(transition, &mut outcome);
                }
            }
            Timer::Idle => {
                if let Ok(transition) = cascade::transition(self.phase, CascadeEvent::IdleDue) {
                    self.apply(transition, &mut outcome);
                }
            }
        }
        outcome
    }

    /// Resolve the spinning ring from its rotation and commit the payout.
    fn stop(&mut self, outcome: &mut Outcome) {
        let Some(ring) = self.phase.spinning_ring() else {
            return;
        };
        let index = resolve_index(self.rotation(ring), ring.len());
        let label = ring.label(index).unwrap_or_default();
        *self.winning_index.get_mut(ring) = Some(index);

        let settlement = match ring {
            Ring::Outer => {
                // Every wager is consumed by the outer spin, winning or not.
                let stakes = self.ledger.forfeit_bets();
                let settlement = settle_outer(label, &stakes);
                self.active_bonus_bet = settlement.carried_bonus;
                settlement
            }
            Ring::Middle | Ring::Inner => settle_bonus_stage(ring, label, self.active_bonus_bet),
        };
        let Settlement {
            winnings,
            continue_to,
            ..
        } = settlement;
        if winnings > 0 {
            self.ledger.credit(winnings);
        }
        info!(
            round = self.round,
            ring = ?ring,
            index,
            label,
            winnings,
            balance = self.ledger.balance(),
            "wedge resolved"
        );
        self.results.push(RoundResult {
            ring,
            label: label.to_string(),
            winnings,
        });
        outcome.events.push(RoundEvent::WedgeResolved {
            ring,
            index,
            label: label.to_string(),
            winnings,
        });

        if let Ok(transition) =
            cascade::transition(self.phase, CascadeEvent::Stopped { continue_to })
        {
            if let TransitionResult::TransitionTo {
                phase: CascadePhase::Settled { next: None, .. },
                ..
            } = &transition
            {
                info!(
                    round = self.round,
                    results = %format_round_results(&self.results),
                    total_winnings = total_winnings(&self.results),
                    "round finished"
                );
                outcome.events.push(RoundEvent::RoundFinished {
                    results: self.results.clone(),
                });
            }
            self.apply(transition, outcome);
        }
    }

    fn apply(&mut self, transition: TransitionResult, outcome: &mut Outcome) {
        let TransitionResult::TransitionTo { phase, effects } = transition else {
            return;
        };
        self.phase = phase;
        for effect in effects {
            match effect {
                Effect::ResetRound => self.reset_round(outcome),
                Effect::StartSpin(ring) => {
                    let plan = choose_spin(ring, self.rotation(ring), &mut self.source);
                    *self.rotations.get_mut(ring) = plan.final_rotation;
                    debug!(
                        round = self.round,
                        ring = ?ring,
                        target_index = plan.target_index,
                        full_turns = plan.full_turns,
                        rotation = plan.final_rotation,
                        "spin chosen"
                    );
                    outcome.events.push(RoundEvent::SpinStarted {
                        ring,
                        target_index: plan.target_index,
                        rotation: plan.final_rotation,
                    });
                }
                Effect::Schedule { delay, timer } => outcome.timers.push(ScheduledTimer {
                    delay,
                    timer,
                    round: self.round,
                }),
            }
        }
    }

    fn reset_round(&mut self, outcome: &mut Outcome) {
        let had_history = !self.results.is_empty();
        self.results.clear();
        self.winning_index = PerRing::default();
        self.active_bonus_bet = 0;
        if had_history {
            outcome.events.push(RoundEvent::Reset);
        }
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let spinning = self.phase.spinning_ring();
        TableSnapshot {
            balance: self.ledger.balance(),
            bets: *self.ledger.bets(),
            total_staked: self.ledger.total_staked(),
            phase: self.phase.as_str(),
            active_bonus_bet: self.active_bonus_bet,
            rings: self.rotations.map(|ring, rotation| RingView {
                rotation: *rotation,
                is_spinning: spinning == Some(ring),
                winning_index: *self.winning_index.get(ring),
            }),
            spin_results: self.results.clone(),
        }
    }
}
