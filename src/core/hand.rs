use super::card::next_card;
use super::{Card, CardBitSet, CardBitSetIter, EquityError, InvalidCardSet};

/// A set of distinct cards.
///
/// Hole cards are a `Hand` with two cards in it. Adding a board to the
/// hole cards gives the 5 to 7 card hand that gets evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand(CardBitSet);

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self(CardBitSet::new())
    }

    /// Create a hand from cards. Duplicates collapse into one card, so
    /// check `count()` when the size matters.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().collect())
    }

    /// Given a card, is it in the current hand?
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::{Card, Hand, Suit, Value};
    ///
    /// let mut hand = Hand::new();
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert!(!hand.contains(&card));
    ///
    /// hand.insert(card);
    /// assert!(hand.contains(&card));
    /// ```
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(*c)
    }

    pub fn insert(&mut self, c: Card) -> bool {
        self.0.insert(c)
    }

    pub fn count(&self) -> usize {
        self.0.count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> CardBitSetIter {
        self.0.into_iter()
    }

    /// Parse a hand from concatenated card tokens like `"ASKS"`.
    ///
    /// Repeating a card is an error, never a silent de-duplication.
    ///
    /// ```
    /// use holdem_equity::core::{EquityError, Hand, InvalidCardSet};
    ///
    /// assert_eq!(2, Hand::new_from_str("ASKS").unwrap().count());
    /// assert!(matches!(
    ///     Hand::new_from_str("ASAS"),
    ///     Err(EquityError::InvalidCardSet(InvalidCardSet::DuplicateCard(_)))
    /// ));
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, EquityError> {
        let mut chars = hand_string.chars();
        let mut bitset = CardBitSet::new();

        while let Some(c) = next_card(&mut chars)? {
            if !bitset.insert(c) {
                return Err(InvalidCardSet::DuplicateCard(c).into());
            }
        }

        Ok(Self(bitset))
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self(CardBitSet::new())
    }
}

impl From<Hand> for CardBitSet {
    fn from(val: Hand) -> Self {
        val.0
    }
}

impl From<CardBitSet> for Hand {
    fn from(val: CardBitSet) -> Self {
        Self(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_insert() {
        let mut hand = Hand::new();
        for i in 1..7 {
            let c = Card::from(i);
            assert!(hand.insert(c));
            assert!(hand.contains(&c));
            assert_eq!(hand.count(), usize::from(i));
        }
        assert!(!hand.insert(Card::from(1)));
    }

    #[test]
    fn test_is_empty() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());

        hand.insert(Card::from(1));
        assert!(!hand.is_empty());
    }

    #[test]
    fn test_new_from_str() {
        let hand = Hand::new_from_str("KSKD").unwrap();
        assert!(hand.contains(&Card::new(Value::King, Suit::Spade)));
        assert!(hand.contains(&Card::new(Value::King, Suit::Diamond)));
        assert_eq!(2, hand.count());
    }

    #[test]
    fn test_new_from_str_errors() {
        assert!(matches!(
            Hand::new_from_str("KSK"),
            Err(EquityError::TooFewChars)
        ));
        assert!(matches!(
            Hand::new_from_str("KSXD"),
            Err(EquityError::UnexpectedValueChar('X'))
        ));
        assert_eq!(
            Err(EquityError::InvalidCardSet(InvalidCardSet::DuplicateCard(
                Card::new(Value::King, Suit::Spade)
            ))),
            Hand::new_from_str("KSKS")
        );
    }

    #[test]
    fn test_with_board() {
        let hole: CardBitSet = Hand::new_from_str("ASKS").unwrap().into();
        let board: CardBitSet = Hand::new_from_str("QSJSTS").unwrap().into();
        let full = Hand::from(hole | board);
        assert_eq!(5, full.count());
        assert_eq!(2, hole.count());
    }

    #[test]
    fn test_new_with_cards_collapses_repeats() {
        let hand = Hand::new_with_cards(vec![Card::from(3), Card::from(3), Card::from(40)]);
        assert_eq!(2, hand.count());
    }
}
