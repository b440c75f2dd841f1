//! Bonus cascade state machine.
//!
//! A round chains up to three spins:
//!
//! ```text
//! Idle --spin--> Spinning(Outer) --stopped--> Settled { Outer, next }
//!   next = Some(Middle) --cascade--> Spinning(Middle) --stopped--> Settled { Middle, next }
//!   next = Some(Inner)  --cascade--> Spinning(Inner)  --stopped--> Settled { Inner, None }
//!   next = None         --idle-----> Idle
//! ```
//!
//! Transitions are pure: they take the current phase and an event and return the next phase
//! with the effects the caller must apply (reset round state, start a spin, schedule a delayed
//! event). Nothing here reads a clock, so a round can be driven step by step in tests.

use superwheel_types::wheel::{CascadePhase, Ring, SpinRejected};

/// Input to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CascadeEvent {
    /// Player asked for a new round.
    Spin { total_staked: u64 },
    /// The spinning ring stopped and was settled; `continue_to` is the ring the payout asked
    /// to cascade to.
    Stopped { continue_to: Option<Ring> },
    /// Cascade delay elapsed.
    CascadeDue,
    /// Settle delay elapsed.
    IdleDue,
}

/// Presentation delay kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delay {
    Spin,
    Cascade,
    Settle,
}

/// Deferred work, fired once its delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Resolve the spinning ring.
    Stop,
    /// Start the next ring of the cascade.
    Cascade,
    /// Return to idle.
    Idle,
}

impl Timer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timer::Stop => "stop",
            Timer::Cascade => "cascade",
            Timer::Idle => "idle",
        }
    }
}

/// Side effect requested by a transition, applied by the engine in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Clear results, winning indices and the carried bonus stake.
    ResetRound,
    /// Choose a target and turn the ring towards it.
    StartSpin(Ring),
    /// Fire `timer` after `delay`.
    Schedule { delay: Delay, timer: Timer },
}

/// Result of applying an event to a phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionResult {
    /// Event does not apply to the current phase; nothing changes.
    NoTransition,
    TransitionTo {
        phase: CascadePhase,
        effects: Vec<Effect>,
    },
}

/// Check whether a new round may start from `phase`.
///
/// A round may start when idle, or once the previous round has fully settled and is only
/// waiting to reset.
pub fn can_spin(phase: CascadePhase, total_staked: u64) -> Result<(), SpinRejected> {
    match phase {
        CascadePhase::Spinning(ring) => Err(SpinRejected::AlreadySpinning(ring)),
        CascadePhase::Settled {
            next: Some(next), ..
        } => Err(SpinRejected::CascadePending(next)),
        CascadePhase::Idle | CascadePhase::Settled { next: None, .. } => {
            if total_staked == 0 {
                Err(SpinRejected::NoStake)
            } else {
                Ok(())
            }
        }
    }
}

fn start_spin(ring: Ring) -> Vec<Effect> {
    vec![
        Effect::StartSpin(ring),
        Effect::Schedule {
            delay: Delay::Spin,
            timer: Timer::Stop,
        },
    ]
}

/// Apply `event` to `phase`.
///
/// Only a rejected spin request is an error; any other event that does not fit the phase is a
/// [`TransitionResult::NoTransition`].
pub fn transition(
    phase: CascadePhase,
    event: CascadeEvent,
) -> Result<TransitionResult, SpinRejected> {
    let result = match (phase, event) {
        (_, CascadeEvent::Spin { total_staked }) => {
            can_spin(phase, total_staked)?;
            let mut effects = vec![Effect::ResetRound];
            effects.extend(start_spin(Ring::Outer));
            TransitionResult::TransitionTo {
                phase: CascadePhase::Spinning(Ring::Outer),
                effects,
            }
        }
        (CascadePhase::Spinning(ring), CascadeEvent::Stopped { continue_to }) => {
            // Only the ring's own successor is a valid continuation; the inner ring has none.
            let next = continue_to.filter(|next| ring.next() == Some(*next));
            let schedule = match next {
                Some(_) => Effect::Schedule {
                    delay: Delay::Cascade,
                    timer: Timer::Cascade,
                },
                None => Effect::Schedule {
                    delay: Delay::Settle,
                    timer: Timer::Idle,
                },
            };
            TransitionResult::TransitionTo {
                phase: CascadePhase::Settled { ring, next },
                effects: vec![schedule],
            }
        }
        (
            CascadePhase::Settled {
                next: Some(next), ..
            },
            CascadeEvent::CascadeDue,
        ) => TransitionResult::TransitionTo {
            phase: CascadePhase::Spinning(next),
            effects: start_spin(next),
        },
        (CascadePhase::Settled { next: None, .. }, CascadeEvent::IdleDue) => {
            TransitionResult::TransitionTo {
                phase: CascadePhase::Idle,
                effects: vec![Effect::ResetRound],
            }
        }
        _ => TransitionResult::NoTransition,
    };
    Ok(result)
}
