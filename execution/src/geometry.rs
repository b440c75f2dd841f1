//! Rotation geometry.
//!
//! A ring lands on the wedge under the fixed pointer. Choosing a spin picks the target wedge
//! first and derives the rotation that brings it under the pointer; resolving reads the wedge
//! back out of the accumulated rotation. The two must agree for any starting rotation, so the
//! rotation itself is the record of which wedge was selected.

use rand::Rng;
use superwheel_types::wheel::{Ring, FULL_TURN_DEGREES, MAX_FULL_TURNS, MIN_FULL_TURNS};

/// Raw random draw for one spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinDraw {
    pub target_index: usize,
    pub full_turns: u32,
}

/// Source of spin draws.
pub trait SpinSource {
    fn draw(&mut self, ring: Ring) -> SpinDraw;
}

/// Uniform spin draws from any [`Rng`].
#[derive(Clone, Debug)]
pub struct RandomSpins<R> {
    rng: R,
}

impl<R: Rng> RandomSpins<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SpinSource for RandomSpins<R> {
    fn draw(&mut self, ring: Ring) -> SpinDraw {
        SpinDraw {
            target_index: self.rng.gen_range(0..ring.len()),
            full_turns: self.rng.gen_range(MIN_FULL_TURNS..=MAX_FULL_TURNS),
        }
    }
}

/// A chosen spin: where the ring will stop and how far it turns to get there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinPlan {
    pub ring: Ring,
    pub target_index: usize,
    pub full_turns: u32,
    pub rotation_delta: i64,
    pub final_rotation: i64,
}

/// Derive the rotation that lands `target_index` under the pointer.
///
/// `rotation_delta = full_turns * 360 - target_index * wedge_angle - (previous mod 360)`.
/// The last term unwinds whatever the ring was left at, so the final rotation is congruent to
/// `-target_index * wedge_angle` no matter where the previous spin stopped.
pub fn plan_spin(ring: Ring, previous_rotation: i64, draw: SpinDraw) -> SpinPlan {
    let rotation_delta = i64::from(draw.full_turns) * FULL_TURN_DEGREES
        - draw.target_index as i64 * ring.wedge_angle()
        - previous_rotation.rem_euclid(FULL_TURN_DEGREES);
    SpinPlan {
        ring,
        target_index: draw.target_index,
        full_turns: draw.full_turns,
        rotation_delta,
        final_rotation: previous_rotation + rotation_delta,
    }
}

/// Draw a target from `source` and plan the spin to it.
pub fn choose_spin<S: SpinSource + ?Sized>(
    ring: Ring,
    previous_rotation: i64,
    source: &mut S,
) -> SpinPlan {
    plan_spin(ring, previous_rotation, source.draw(ring))
}

/// Index of the wedge under the pointer after turning to `final_rotation`.
///
/// The half-wedge offset centers each index window on the pointer rather than on a wedge
/// boundary. Negative rotations are normalized into `[0, 360)` first.
pub fn resolve_index(final_rotation: i64, total_wedges: usize) -> usize {
    if total_wedges == 0 {
        return 0;
    }
    let full_turn = FULL_TURN_DEGREES as f64;
    let wedge_angle = full_turn / total_wedges as f64;
    let normalized = final_rotation.rem_euclid(FULL_TURN_DEGREES) as f64;
    let corrected = (full_turn - normalized + wedge_angle / 2.0).rem_euclid(full_turn);
    ((corrected / wedge_angle).floor() as usize) % total_wedges
}
