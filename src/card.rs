//! Card representation for range notation.
//!
//! This module provides the fixed lookup tables and value types that the
//! rest of the engine is built on:
//! - `Rank`: the 13 ranks, ordered 2 (low) to Ace (high)
//! - `Suit`: the 4 suits in their fixed enumeration order (c, d, h, s)
//! - `Card`: a single playing card with rank and suit
//! - `HandCombo`: one specific two-card holding

use std::fmt;
use std::str::FromStr;

use crate::range::error::RangeError;

/// Rank characters for display, indexed by `Rank as usize`.
pub const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display, indexed by `Suit as usize`.
pub const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Rank of a card (0-12: 2-A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 2
    Two = 0,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// T
    Ten,
    /// J
    Jack,
    /// Q
    Queen,
    /// K
    King,
    /// A
    Ace,
}

impl Rank {
    /// All ranks from low to high.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// All ranks from high to low. This is the row/column order of the grid.
    pub const DESCENDING: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Get the rank from its index (0-12: 2-A).
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Get the rank's index (0-12: 2-A).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Parse a rank character. Both `'T'` and `'t'` are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        let index = RANK_CHARS.iter().position(|&r| r == upper)?;
        Some(Self::ALL[index])
    }

    /// Get rank character for display.
    pub fn to_char(self) -> char {
        RANK_CHARS[self as usize]
    }

    /// The next higher rank, or `None` for the Ace.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Inclusive span of ranks between `a` and `b`, in ascending order.
    /// The arguments may be given in either order.
    pub fn span(a: Rank, b: Rank) -> impl Iterator<Item = Rank> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (lo.index()..=hi.index()).map(|i| Self::ALL[i as usize])
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Suit of a card. The declaration order is the enumeration order used for
/// combo generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// c
    Clubs = 0,
    /// d
    Diamonds,
    /// h
    Hearts,
    /// s
    Spades,
}

impl Suit {
    /// All suits in enumeration order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Parse a suit character (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        let lower = c.to_ascii_lowercase();
        let index = SUIT_CHARS.iter().position(|&s| s == lower)?;
        Some(Self::ALL[index])
    }

    /// Get suit character for display.
    pub fn to_char(self) -> char {
        SUIT_CHARS[self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank and suit.
    #[inline]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { id: rank as u8 * 4 + suit as u8 }
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.id / 4) as usize]
    }

    /// Get the card's suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.id % 4) as usize]
    }
}

impl FromStr for Card {
    type Err = RangeError;

    /// Parse a card from string like "As", "Kh", "2c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RangeError::InvalidHandNotation(s.to_string());
        let mut chars = s.chars();
        let rank = chars.next().and_then(Rank::from_char).ok_or_else(invalid)?;
        let suit = chars.next().and_then(Suit::from_char).ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// One specific two-card holding.
///
/// The pair is unordered; it is stored with the higher rank first, and for
/// pairs with the earlier suit first, so equal holdings compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandCombo {
    card1: Card,
    card2: Card,
}

impl HandCombo {
    /// Create a combo from two distinct cards, ordering by rank (higher first).
    pub fn new(card1: Card, card2: Card) -> Result<Self, RangeError> {
        if card1 == card2 {
            return Err(RangeError::InvalidHandNotation(format!("{}{}", card1, card2)));
        }
        let (high, low) = if card1 > card2 { (card1, card2) } else { (card2, card1) };
        // Pairs keep the lower suit first.
        if high.rank() == low.rank() {
            Ok(Self { card1: low, card2: high })
        } else {
            Ok(Self { card1: high, card2: low })
        }
    }

    /// Build from cards already in canonical order.
    pub(crate) fn from_ordered(card1: Card, card2: Card) -> Self {
        debug_assert!(card1 != card2);
        Self { card1, card2 }
    }

    /// First card: the higher rank, or the lower suit of a pair.
    pub fn card1(&self) -> Card {
        self.card1
    }

    /// Second card.
    pub fn card2(&self) -> Card {
        self.card2
    }

    /// Check if the combo is suited.
    pub fn is_suited(&self) -> bool {
        self.card1.suit() == self.card2.suit()
    }

    /// Check if the combo is a pair.
    pub fn is_pair(&self) -> bool {
        self.card1.rank() == self.card2.rank()
    }

    /// Get both cards as an array.
    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }
}

impl FromStr for HandCombo {
    type Err = RangeError;

    /// Parse a combo from string like "AhKs".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(RangeError::InvalidHandNotation(s.to_string()));
        }
        let c1: Card = s[0..2].parse().map_err(|_| RangeError::InvalidHandNotation(s.to_string()))?;
        let c2: Card = s[2..4].parse().map_err(|_| RangeError::InvalidHandNotation(s.to_string()))?;
        Self::new(c1, c2)
    }
}

impl fmt::Display for HandCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.card1, self.card2)
    }
}

impl fmt::Debug for HandCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(ace_spades.rank(), Rank::Ace);
        assert_eq!(ace_spades.suit(), Suit::Spades);
        assert_eq!(ace_spades.to_string(), "As");

        let two_clubs = Card::new(Rank::Two, Suit::Clubs);
        assert_eq!(two_clubs.id(), 0);
        assert_eq!(two_clubs.to_string(), "2c");
    }

    #[test]
    fn test_card_parsing() {
        assert_eq!("As".parse::<Card>().unwrap().to_string(), "As");
        assert_eq!("kH".parse::<Card>().unwrap().to_string(), "Kh");
        assert_eq!("Td".parse::<Card>().unwrap().to_string(), "Td");
        assert!("XX".parse::<Card>().is_err());
        assert!("A".parse::<Card>().is_err());
        assert!("Asd".parse::<Card>().is_err());
    }

    #[test]
    fn test_rank_tables() {
        assert_eq!(Rank::from_char('t'), Some(Rank::Ten));
        assert_eq!(Rank::from_char('1'), None);
        assert_eq!(Rank::Ace.next(), None);
        assert_eq!(Rank::Nine.next(), Some(Rank::Ten));
        assert_eq!(Rank::DESCENDING[0], Rank::Ace);
        assert_eq!(Rank::DESCENDING[12], Rank::Two);

        let span: Vec<Rank> = Rank::span(Rank::Ten, Rank::Seven).collect();
        assert_eq!(span, vec![Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]);
    }

    #[test]
    fn test_hand_combo_ordering() {
        let combo: HandCombo = "KsAh".parse().unwrap();
        assert_eq!(combo.card1().rank(), Rank::Ace);
        assert_eq!(combo.to_string(), "AhKs");
        assert!(!combo.is_suited());
        assert!(!combo.is_pair());

        let pair: HandCombo = "AsAc".parse().unwrap();
        assert_eq!(pair.to_string(), "AcAs");
        assert_eq!(pair, "AcAs".parse().unwrap());
        assert!(pair.is_pair());

        assert!("AsKs".parse::<HandCombo>().unwrap().is_suited());

        let reversed = HandCombo::new(Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ace, Suit::Clubs)).unwrap();
        assert_eq!(reversed, pair);
        assert_eq!(reversed.card1().suit(), Suit::Clubs);
    }

    #[test]
    fn test_hand_combo_rejects_duplicate_card() {
        assert!(matches!(
            "AsAs".parse::<HandCombo>(),
            Err(RangeError::InvalidHandNotation(_))
        ));
        assert!("AsK".parse::<HandCombo>().is_err());
    }
}
