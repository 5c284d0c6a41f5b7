//! Expansion of shorthand hands into specific card combinations.

use super::error::RangeError;
use super::hand::{HandPattern, ShorthandHand, Suitedness};
use crate::card::{Card, HandCombo, Rank, Suit};

/// Unordered suit pairs (s1 < s2), for pairs.
const PAIR_SUITS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Ordered suit pairs with s1 != s2, for offsuit hands. The first suit goes
/// on the high card.
const OFFSUIT_SUITS: [(usize, usize); 12] = [
    (0, 1), (0, 2), (0, 3),
    (1, 0), (1, 2), (1, 3),
    (2, 0), (2, 1), (2, 3),
    (3, 0), (3, 1), (3, 2),
];

/// Expand a hand token ("AA", "AKs", "AKo", "AK") into its combos.
///
/// A token without a qualifier whose ranks differ yields the suited and the
/// offsuit combos alike (16 in total).
///
/// ```
/// use range_notation::range::expand;
///
/// assert_eq!(expand("AA").unwrap().count(), 6);
/// assert_eq!(expand("AK").unwrap().count(), 16);
/// ```
pub fn expand(token: &str) -> Result<ComboIter, RangeError> {
    let pattern = HandPattern::parse(token.trim(), false)?;
    Ok(ComboIter::for_pattern(pattern))
}

/// Lazy iterator over the combos of a hand pattern.
///
/// Order is fixed by the suit enumeration (c, d, h, s); an unqualified
/// non-pair yields its suited combos before its offsuit ones. Clone the
/// iterator (or call [`ComboIter::restart`]) to walk it again.
#[derive(Debug, Clone)]
pub struct ComboIter {
    high: Rank,
    low: Rank,
    suitedness: Option<Suitedness>,
    position: usize,
}

impl ComboIter {
    /// Combos of a single canonical hand.
    pub fn for_hand(hand: ShorthandHand) -> Self {
        Self {
            high: hand.high(),
            low: hand.low(),
            suitedness: Some(hand.suitedness()),
            position: 0,
        }
    }

    /// Combos of a pattern that may omit its suitedness.
    pub fn for_pattern(pattern: HandPattern) -> Self {
        Self {
            high: pattern.high,
            low: pattern.low,
            suitedness: pattern.suitedness,
            position: 0,
        }
    }

    /// Rewind to the first combo.
    pub fn restart(&mut self) {
        self.position = 0;
    }

    fn total(&self) -> usize {
        match self.suitedness {
            Some(s) => s.num_combos() as usize,
            None => (Suitedness::Suited.num_combos() + Suitedness::Offsuit.num_combos()) as usize,
        }
    }

    fn combo(&self, high_suit: usize, low_suit: usize) -> HandCombo {
        HandCombo::from_ordered(
            Card::new(self.high, Suit::ALL[high_suit]),
            Card::new(self.low, Suit::ALL[low_suit]),
        )
    }

    fn combo_at(&self, i: usize) -> HandCombo {
        match self.suitedness {
            Some(Suitedness::Pair) => {
                let (s1, s2) = PAIR_SUITS[i];
                self.combo(s1, s2)
            }
            Some(Suitedness::Suited) => self.combo(i, i),
            Some(Suitedness::Offsuit) => {
                let (s1, s2) = OFFSUIT_SUITS[i];
                self.combo(s1, s2)
            }
            None if i < 4 => self.combo(i, i),
            None => {
                let (s1, s2) = OFFSUIT_SUITS[i - 4];
                self.combo(s1, s2)
            }
        }
    }
}

impl Iterator for ComboIter {
    type Item = HandCombo;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.total() {
            return None;
        }
        let combo = self.combo_at(self.position);
        self.position += 1;
        Some(combo)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ComboIter {}

impl ShorthandHand {
    /// Iterate the specific combos of this hand.
    pub fn combos(&self) -> ComboIter {
        ComboIter::for_hand(*self)
    }
}
