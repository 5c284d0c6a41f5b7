//! Canonical starting hands.
//!
//! There are 169 strategically distinct starting hands:
//! - 13 pairs (AA, KK, ..., 22)
//! - 78 suited hands (AKs, AQs, ..., 32s)
//! - 78 offsuit hands (AKo, AQo, ..., 32o)
//!
//! `HandPattern` is the looser form users type: the same thing, except a
//! non-pair may omit its `s`/`o` qualifier and then stands for both.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::RangeError;
use crate::card::{HandCombo, Rank};

/// Number of canonical starting hands.
pub const NUM_HANDS: usize = 169;

/// Total number of two-card combinations (52 choose 2).
pub const TOTAL_COMBOS: u32 = 1326;

/// Combos per pair hand, C(4,2).
pub const PAIR_COMBOS: u32 = 6;
/// Combos per suited hand, one per suit.
pub const SUITED_COMBOS: u32 = 4;
/// Combos per offsuit hand, 4 x 3 ordered suit choices.
pub const OFFSUIT_COMBOS: u32 = 12;

/// Whether a hand is a pair, suited or offsuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suitedness {
    /// Both cards share a rank: "QQ".
    Pair,
    /// Same suit: "AKs".
    Suited,
    /// Different suits: "AKo".
    Offsuit,
}

impl Suitedness {
    /// Notation suffix (empty for pairs).
    pub fn suffix(self) -> &'static str {
        match self {
            Suitedness::Pair => "",
            Suitedness::Suited => "s",
            Suitedness::Offsuit => "o",
        }
    }

    /// Fixed combo count for this category.
    pub fn num_combos(self) -> u32 {
        match self {
            Suitedness::Pair => PAIR_COMBOS,
            Suitedness::Suited => SUITED_COMBOS,
            Suitedness::Offsuit => OFFSUIT_COMBOS,
        }
    }
}

/// One of the 169 canonical starting hands.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShorthandHand {
    high: Rank,
    low: Rank,
    suitedness: Suitedness,
}

impl ShorthandHand {
    /// Create a hand, ordering the ranks high first.
    ///
    /// Fails when the ranks and suitedness disagree: a pair must have equal
    /// ranks and a suited/offsuit hand distinct ones.
    pub fn new(r1: Rank, r2: Rank, suitedness: Suitedness) -> Result<Self, RangeError> {
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        if (high == low) != (suitedness == Suitedness::Pair) {
            return Err(RangeError::InvalidHandNotation(format!(
                "{}{}{}",
                high,
                low,
                suitedness.suffix()
            )));
        }
        Ok(Self { high, low, suitedness })
    }

    /// The pair of the given rank.
    pub fn pair(rank: Rank) -> Self {
        Self { high: rank, low: rank, suitedness: Suitedness::Pair }
    }

    /// The suited hand of two distinct ranks.
    pub fn suited(r1: Rank, r2: Rank) -> Result<Self, RangeError> {
        Self::new(r1, r2, Suitedness::Suited)
    }

    /// The offsuit hand of two distinct ranks.
    pub fn offsuit(r1: Rank, r2: Rank) -> Result<Self, RangeError> {
        Self::new(r1, r2, Suitedness::Offsuit)
    }

    /// The higher rank. Equal to `low` for pairs.
    #[inline]
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The lower rank.
    #[inline]
    pub fn low(&self) -> Rank {
        self.low
    }

    /// Pair, suited or offsuit.
    #[inline]
    pub fn suitedness(&self) -> Suitedness {
        self.suitedness
    }

    /// True for the 13 pairs.
    pub fn is_pair(&self) -> bool {
        self.suitedness == Suitedness::Pair
    }

    /// Number of combinations for this hand.
    pub fn num_combos(&self) -> u32 {
        self.suitedness.num_combos()
    }

    /// Get the hand index (0-168).
    /// Pairs: 0-12 (22-AA)
    /// Suited: 13-90 (32s-AKs)
    /// Offsuit: 91-168 (32o-AKo)
    pub fn index(&self) -> usize {
        let h = self.high.index() as usize;
        let l = self.low.index() as usize;
        match self.suitedness {
            Suitedness::Pair => h,
            Suitedness::Suited => 13 + encode_triangular(h, l),
            Suitedness::Offsuit => 91 + encode_triangular(h, l),
        }
    }

    /// Get hand from index (0-168).
    pub fn from_index(index: usize) -> Option<Self> {
        let (r1, r2, suitedness) = match index {
            0..=12 => (index, index, Suitedness::Pair),
            13..=90 => {
                let (r1, r2) = decode_triangular(index - 13);
                (r1, r2, Suitedness::Suited)
            }
            91..=168 => {
                let (r1, r2) = decode_triangular(index - 91);
                (r1, r2, Suitedness::Offsuit)
            }
            _ => return None,
        };
        Some(Self {
            high: Rank::ALL[r1],
            low: Rank::ALL[r2],
            suitedness,
        })
    }

    /// Grid coordinates (row, col) with rows and columns in descending rank
    /// order. Pairs lie on the diagonal, suited hands above it and offsuit
    /// hands below it.
    pub fn grid_position(&self) -> (usize, usize) {
        let high = 12 - self.high.index() as usize;
        let low = 12 - self.low.index() as usize;
        match self.suitedness {
            Suitedness::Pair | Suitedness::Suited => (high, low),
            Suitedness::Offsuit => (low, high),
        }
    }

    /// Hand at grid coordinates (row, col).
    pub fn from_grid_position(row: usize, col: usize) -> Result<Self, RangeError> {
        if row >= 13 || col >= 13 {
            return Err(RangeError::OutOfRange(format!("grid position ({}, {})", row, col)));
        }
        let r = Rank::DESCENDING[row];
        let c = Rank::DESCENDING[col];
        Ok(match row.cmp(&col) {
            std::cmp::Ordering::Equal => Self::pair(r),
            std::cmp::Ordering::Less => Self { high: r, low: c, suitedness: Suitedness::Suited },
            std::cmp::Ordering::Greater => Self { high: c, low: r, suitedness: Suitedness::Offsuit },
        })
    }

    /// All 169 hands in canonical order: pairs AA to 22, then suited hands by
    /// high rank then low rank (both descending), then offsuit hands likewise.
    pub fn all() -> impl Iterator<Item = ShorthandHand> {
        let pairs = Rank::DESCENDING.into_iter().map(Self::pair);
        let suited = Self::non_pairs(Suitedness::Suited);
        let offsuit = Self::non_pairs(Suitedness::Offsuit);
        pairs.chain(suited).chain(offsuit)
    }

    fn non_pairs(suitedness: Suitedness) -> impl Iterator<Item = ShorthandHand> {
        Rank::DESCENDING.into_iter().flat_map(move |high| {
            Rank::DESCENDING
                .into_iter()
                .filter(move |&low| low < high)
                .map(move |low| Self { high, low, suitedness })
        })
    }
}

impl fmt::Display for ShorthandHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.high, self.low, self.suitedness.suffix())
    }
}

impl fmt::Debug for ShorthandHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Serialize for ShorthandHand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for ShorthandHand {
    type Err = RangeError;

    /// Parse a fully qualified hand: "AA", "AKs", "72o".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = HandPattern::parse(s, false)?;
        pattern
            .as_hand()
            .ok_or_else(|| RangeError::InvalidHandNotation(s.to_string()))
    }
}

/// A hand as written in notation, where a non-pair may leave its
/// suitedness unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandPattern {
    /// First rank as written.
    pub high: Rank,
    /// Second rank as written.
    pub low: Rank,
    /// `None` means "suited and offsuit alike".
    pub suitedness: Option<Suitedness>,
}

impl HandPattern {
    /// Parse a 2- or 3-character hand token such as "AA", "AK", "AKs".
    ///
    /// With `case_sensitive` set, lowercase rank letters are rejected.
    /// A pair given an `s`/`o` qualifier is rejected.
    pub fn parse(token: &str, case_sensitive: bool) -> Result<Self, RangeError> {
        let invalid = || RangeError::InvalidHandNotation(token.to_string());
        let chars: Vec<char> = token.chars().collect();
        if chars.len() < 2 || chars.len() > 3 {
            return Err(invalid());
        }

        let rank = |c: char| {
            if case_sensitive && c.is_ascii_lowercase() {
                return None;
            }
            Rank::from_char(c)
        };
        let r1 = rank(chars[0]).ok_or_else(invalid)?;
        let r2 = rank(chars[1]).ok_or_else(invalid)?;
        let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };

        let qualifier = match chars.get(2) {
            None => None,
            Some('s') | Some('S') => Some(Suitedness::Suited),
            Some('o') | Some('O') => Some(Suitedness::Offsuit),
            Some(_) => return Err(invalid()),
        };

        let suitedness = if high == low {
            if qualifier.is_some() {
                return Err(invalid());
            }
            Some(Suitedness::Pair)
        } else {
            qualifier
        };

        Ok(Self { high, low, suitedness })
    }

    /// Whether the pattern is a pair.
    pub fn is_pair(&self) -> bool {
        self.suitedness == Some(Suitedness::Pair)
    }

    /// The single hand this pattern names, if its suitedness is known.
    pub fn as_hand(&self) -> Option<ShorthandHand> {
        let suitedness = self.suitedness?;
        Some(ShorthandHand { high: self.high, low: self.low, suitedness })
    }

    /// The same pattern with a different low rank. The caller keeps the low
    /// rank below the high rank for non-pairs.
    pub fn with_low(&self, low: Rank) -> Self {
        Self { low, ..*self }
    }

    /// Canonical hands named by this pattern: one, or the suited and offsuit
    /// hands when the qualifier was omitted.
    pub fn hands(&self) -> Vec<ShorthandHand> {
        match self.suitedness {
            Some(suitedness) => vec![ShorthandHand { high: self.high, low: self.low, suitedness }],
            None => vec![
                ShorthandHand { high: self.high, low: self.low, suitedness: Suitedness::Suited },
                ShorthandHand { high: self.high, low: self.low, suitedness: Suitedness::Offsuit },
            ],
        }
    }
}

impl HandCombo {
    /// The canonical hand this combo belongs to.
    pub fn shorthand(&self) -> ShorthandHand {
        let (high, low) = (self.card1().rank(), self.card2().rank());
        let suitedness = if high == low {
            Suitedness::Pair
        } else if self.is_suited() {
            Suitedness::Suited
        } else {
            Suitedness::Offsuit
        };
        ShorthandHand { high, low, suitedness }
    }
}

/// Encode two ranks (r1 > r2) to triangular index.
fn encode_triangular(r1: usize, r2: usize) -> usize {
    debug_assert!(r1 > r2);
    r1 * (r1 - 1) / 2 + r2
}

/// Decode triangular index to two ranks (r1 > r2).
fn decode_triangular(idx: usize) -> (usize, usize) {
    let mut r1 = 1;
    let mut remaining = idx;
    while remaining >= r1 {
        remaining -= r1;
        r1 += 1;
    }
    (r1, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for idx in 0..NUM_HANDS {
            let hand = ShorthandHand::from_index(idx).unwrap();
            assert_eq!(hand.index(), idx, "roundtrip failed for index {}", idx);
        }
        assert!(ShorthandHand::from_index(NUM_HANDS).is_none());

        assert_eq!(ShorthandHand::from_index(0).unwrap().to_string(), "22");
        assert_eq!(ShorthandHand::from_index(12).unwrap().to_string(), "AA");
        assert_eq!(ShorthandHand::from_index(13).unwrap().to_string(), "32s");
        assert_eq!(ShorthandHand::from_index(168).unwrap().to_string(), "AKo");
    }

    #[test]
    fn test_combo_counts_sum_to_1326() {
        let hands: Vec<_> = ShorthandHand::all().collect();
        assert_eq!(hands.len(), NUM_HANDS);

        let total: u32 = hands.iter().map(|h| h.num_combos()).sum();
        assert_eq!(total, TOTAL_COMBOS);

        let pairs = hands.iter().filter(|h| h.is_pair()).count();
        let suited = hands.iter().filter(|h| h.suitedness() == Suitedness::Suited).count();
        assert_eq!((pairs, suited, NUM_HANDS - pairs - suited), (13, 78, 78));
    }

    #[test]
    fn test_canonical_order() {
        let names: Vec<String> = ShorthandHand::all().map(|h| h.to_string()).collect();
        assert_eq!(names[0], "AA");
        assert_eq!(names[12], "22");
        assert_eq!(names[13], "AKs");
        assert_eq!(names[14], "AQs");
        assert_eq!(names[90], "32s");
        assert_eq!(names[91], "AKo");
        assert_eq!(names[168], "32o");
    }

    #[test]
    fn test_grid_positions() {
        assert_eq!("AA".parse::<ShorthandHand>().unwrap().grid_position(), (0, 0));
        assert_eq!("AKs".parse::<ShorthandHand>().unwrap().grid_position(), (0, 1));
        assert_eq!("AKo".parse::<ShorthandHand>().unwrap().grid_position(), (1, 0));
        assert_eq!("22".parse::<ShorthandHand>().unwrap().grid_position(), (12, 12));

        for hand in ShorthandHand::all() {
            let (row, col) = hand.grid_position();
            assert_eq!(ShorthandHand::from_grid_position(row, col).unwrap(), hand);
        }
        assert!(matches!(
            ShorthandHand::from_grid_position(13, 0),
            Err(RangeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_normalizes_rank_order() {
        let hand: ShorthandHand = "KAs".parse().unwrap();
        assert_eq!(hand.to_string(), "AKs");
        assert_eq!(hand.high(), Rank::Ace);
        assert_eq!(hand.low(), Rank::King);
    }

    #[test]
    fn test_constructor_invariants() {
        assert!(ShorthandHand::new(Rank::Ace, Rank::Ace, Suitedness::Suited).is_err());
        assert!(ShorthandHand::new(Rank::Ace, Rank::King, Suitedness::Pair).is_err());
        assert!(ShorthandHand::suited(Rank::Two, Rank::Seven).is_ok());
    }

    #[test]
    fn test_pattern_parsing() {
        let ak = HandPattern::parse("AK", false).unwrap();
        assert_eq!(ak.suitedness, None);
        assert_eq!(ak.hands().len(), 2);
        assert!(ak.as_hand().is_none());

        assert!(HandPattern::parse("qq", false).unwrap().is_pair());
        assert!(HandPattern::parse("qq", true).is_err());
        assert!(HandPattern::parse("AAs", false).is_err());
        assert!(HandPattern::parse("AKx", false).is_err());
        assert!(HandPattern::parse("A", false).is_err());
        assert!(HandPattern::parse("AKso", false).is_err());
        assert!(HandPattern::parse("1K", false).is_err());
    }

    #[test]
    fn test_unqualified_non_pair_is_not_a_hand() {
        assert!(matches!(
            "AK".parse::<ShorthandHand>(),
            Err(RangeError::InvalidHandNotation(_))
        ));
    }
}
