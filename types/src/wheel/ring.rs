use serde::{Deserialize, Serialize};

use super::{FULL_TURN_DEGREES, INNER_SEQUENCE, MIDDLE_SEQUENCE, OUTER_SEQUENCE};

/// One of the three concentric wheels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ring {
    Outer,
    Middle,
    Inner,
}

impl Ring {
    /// All rings, outermost first.
    pub const ALL: [Ring; 3] = [Ring::Outer, Ring::Middle, Ring::Inner];

    /// The fixed wedge labels of this ring, in wheel order.
    pub fn sequence(self) -> &'static [&'static str] {
        match self {
            Ring::Outer => &OUTER_SEQUENCE,
            Ring::Middle => &MIDDLE_SEQUENCE,
            Ring::Inner => &INNER_SEQUENCE,
        }
    }

    pub fn len(self) -> usize {
        self.sequence().len()
    }

    /// Angular width of one wedge in whole degrees (6° outer, 12° middle/inner).
    pub fn wedge_angle(self) -> i64 {
        FULL_TURN_DEGREES / self.len() as i64
    }

    pub fn label(self, index: usize) -> Option<&'static str> {
        self.sequence().get(index).copied()
    }

    /// Derive the wedge at `index`.
    pub fn wedge(self, index: usize) -> Option<Wedge> {
        let label = self.label(index)?;
        let start_angle = index as i64 * self.wedge_angle();
        Some(Wedge {
            index,
            label,
            start_angle,
            end_angle: start_angle + self.wedge_angle(),
        })
    }

    pub fn wedges(self) -> impl Iterator<Item = Wedge> {
        (0..self.len()).filter_map(move |index| self.wedge(index))
    }

    /// Ring the bonus cascade moves to after a BONUS lands here.
    ///
    /// `None` for the inner ring, which has no BONUS wedge.
    pub fn next(self) -> Option<Ring> {
        match self {
            Ring::Outer => Some(Ring::Middle),
            Ring::Middle => Some(Ring::Inner),
            Ring::Inner => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ring::Outer => "Outer",
            Ring::Middle => "Middle",
            Ring::Inner => "Inner",
        }
    }
}

impl std::fmt::Display for Ring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Angular slice of a ring. Derived from the sequence, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wedge {
    pub index: usize,
    pub label: &'static str,
    pub start_angle: i64,
    pub end_angle: i64,
}

/// Per-ring storage indexed by [`Ring`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerRing<T> {
    pub outer: T,
    pub middle: T,
    pub inner: T,
}

impl<T> PerRing<T> {
    pub fn get(&self, ring: Ring) -> &T {
        match ring {
            Ring::Outer => &self.outer,
            Ring::Middle => &self.middle,
            Ring::Inner => &self.inner,
        }
    }

    pub fn get_mut(&mut self, ring: Ring) -> &mut T {
        match ring {
            Ring::Outer => &mut self.outer,
            Ring::Middle => &mut self.middle,
            Ring::Inner => &mut self.inner,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Ring, &T) -> U) -> PerRing<U> {
        PerRing {
            outer: f(Ring::Outer, &self.outer),
            middle: f(Ring::Middle, &self.middle),
            inner: f(Ring::Inner, &self.inner),
        }
    }
}
