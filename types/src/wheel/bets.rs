use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error as ThisError;

use super::{LOGO1_MULTIPLIER, LOGO2_MULTIPLIER};

/// Outcome category a player can wager on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BetLabel {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "10")]
    Ten,
    Logo1,
    Logo2,
    #[serde(rename = "BONUS")]
    Bonus,
}

#[derive(Debug, ThisError, PartialEq, Eq)]
#[error("unknown bet label: {0:?}")]
pub struct ParseLabelError(pub String);

impl BetLabel {
    /// Every category, in bet panel order.
    pub const ALL: [BetLabel; 7] = [
        BetLabel::One,
        BetLabel::Two,
        BetLabel::Five,
        BetLabel::Ten,
        BetLabel::Logo1,
        BetLabel::Logo2,
        BetLabel::Bonus,
    ];

    /// Numeric categories paid together when the outer BONUS lands.
    pub const NUMERIC: [BetLabel; 4] = [BetLabel::One, BetLabel::Two, BetLabel::Five, BetLabel::Ten];

    pub fn as_str(self) -> &'static str {
        match self {
            BetLabel::One => "1",
            BetLabel::Two => "2",
            BetLabel::Five => "5",
            BetLabel::Ten => "10",
            BetLabel::Logo1 => "Logo1",
            BetLabel::Logo2 => "Logo2",
            BetLabel::Bonus => "BONUS",
        }
    }

    /// Payout multiplier on a win, excluding the returned stake.
    ///
    /// `None` for BONUS, whose stake is carried into the cascade instead of paid.
    pub fn multiplier(self) -> Option<u64> {
        match self {
            BetLabel::One => Some(1),
            BetLabel::Two => Some(2),
            BetLabel::Five => Some(5),
            BetLabel::Ten => Some(10),
            BetLabel::Logo1 => Some(LOGO1_MULTIPLIER),
            BetLabel::Logo2 => Some(LOGO2_MULTIPLIER),
            BetLabel::Bonus => None,
        }
    }

    /// Category an outer wedge label pays, if any.
    pub fn from_wedge(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    fn index(self) -> usize {
        match self {
            BetLabel::One => 0,
            BetLabel::Two => 1,
            BetLabel::Five => 2,
            BetLabel::Ten => 3,
            BetLabel::Logo1 => 4,
            BetLabel::Logo2 => 5,
            BetLabel::Bonus => 6,
        }
    }
}

impl FromStr for BetLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BetLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ParseLabelError(s.to_string()))
    }
}

impl std::fmt::Display for BetLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wager per category.
///
/// [`BetBook::zeroed`] is the only way to build an empty book, and every reset goes through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BetBook {
    stakes: [u64; BetLabel::ALL.len()],
}

impl BetBook {
    pub const fn zeroed() -> Self {
        Self {
            stakes: [0; BetLabel::ALL.len()],
        }
    }

    pub fn get(&self, label: BetLabel) -> u64 {
        self.stakes[label.index()]
    }

    pub fn add(&mut self, label: BetLabel, amount: u64) {
        let slot = &mut self.stakes[label.index()];
        *slot = slot.saturating_add(amount);
    }

    pub fn total(&self) -> u64 {
        self.stakes.iter().fold(0u64, |acc, stake| acc.saturating_add(*stake))
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (BetLabel, u64)> + '_ {
        BetLabel::ALL.into_iter().map(move |label| (label, self.get(label)))
    }
}

impl Default for BetBook {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl FromIterator<(BetLabel, u64)> for BetBook {
    fn from_iter<I: IntoIterator<Item = (BetLabel, u64)>>(iter: I) -> Self {
        let mut book = BetBook::zeroed();
        for (label, amount) in iter {
            book.add(label, amount);
        }
        book
    }
}

impl Serialize for BetBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(BetLabel::ALL.len()))?;
        for (label, amount) in self.iter() {
            map.serialize_entry(label.as_str(), &amount)?;
        }
        map.end()
    }
}
