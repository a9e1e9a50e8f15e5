use crate::core::card::Card;
use crate::core::deck::Deck;
use crate::core::CardBitSet;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use rand::Rng;
use rand::seq::SliceRandom;

/// `FlatDeck` is a deck of cards that allows easy
/// indexing into the cards. It does not provide
/// contains methods.
///
/// This is the ordered deck handed to the equity engine. Its order is
/// what makes "remaining deck" filtering and exact enumeration
/// deterministic.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq)]
pub struct FlatDeck {
    /// Card storage.
    cards: Vec<Card>,
}

impl FlatDeck {
    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a card to the deck.
    /// This does not check if the card is already in the deck.
    /// It will just add it to the end of the deck.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use holdem_equity::core::{Card, Deck, FlatDeck, Suit, Value};
    ///
    /// let mut deck: FlatDeck = Deck::new().into();
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// deck.push(card);
    ///
    /// assert_eq!(1, deck.len());
    /// assert_eq!(card, deck[0]);
    /// ```
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// A copy of this deck without the `used` cards. The order of the
    /// cards that are left is kept.
    ///
    /// ```rust
    /// use holdem_equity::core::{CardBitSet, FlatDeck, Hand};
    ///
    /// let deck = FlatDeck::default();
    /// let used: CardBitSet = Hand::new_from_str("ASKSQDQC").unwrap().into();
    /// let remaining = deck.remaining(used);
    ///
    /// assert_eq!(48, remaining.len());
    /// assert_eq!(52, deck.len());
    /// ```
    pub fn remaining(&self, used: CardBitSet) -> FlatDeck {
        self.cards
            .iter()
            .filter(|c| !used.contains(**c))
            .copied()
            .collect::<Vec<Card>>()
            .into()
    }

    /// Draw `n` cards uniformly at random without replacement.
    ///
    /// This is a partial Fisher-Yates shuffle: the returned cards are
    /// moved to the front of the deck, so the deck order changes but
    /// its contents never do. Panics if `n` is bigger than the deck.
    ///
    /// ```rust
    /// use holdem_equity::core::FlatDeck;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut deck = FlatDeck::default();
    /// let drawn = deck.sample(&mut rng, 5).to_vec();
    ///
    /// assert_eq!(5, drawn.len());
    /// assert_eq!(52, deck.len());
    /// ```
    pub fn sample<R: Rng>(&mut self, rng: &mut R, n: usize) -> &[Card] {
        let (drawn, _) = self.cards.partial_shuffle(rng, n);
        drawn
    }

    /// Randomly shuffle the flat deck.
    /// This will ensure the there's no order to the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for FlatDeck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

/// Allow creating a flat deck from a Deck
impl From<Deck> for FlatDeck {
    /// Flatten this deck, consuming it to produce a `FlatDeck` that's
    /// easier to get random access to.
    fn from(value: Deck) -> Self {
        // The set iterates in index order, so the same input
        // cards always result in the same starting flat deck
        Self {
            cards: value.into_iter().collect(),
        }
    }
}

impl Default for FlatDeck {
    /// The standard 52 card deck in rank-major order:
    /// `2D 2H 2C 2S 3D ... AS`.
    ///
    /// ```
    /// use holdem_equity::core::FlatDeck;
    ///
    /// let deck = FlatDeck::default();
    /// assert_eq!(52, deck.len());
    /// assert_eq!("2D", deck[0].to_string());
    /// assert_eq!("AS", deck[51].to_string());
    /// ```
    fn default() -> Self {
        Deck::default().into()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::card::{Suit, Value};

    #[test]
    fn test_deck_from() {
        let fd: FlatDeck = Deck::default().into();
        assert_eq!(52, fd.len());
    }

    #[test]
    fn test_default_is_sorted() {
        let fd = FlatDeck::default();
        let mut sorted = fd.clone();
        sorted.cards.sort();
        assert_eq!(fd, sorted);
        assert_eq!(Card::new(Value::Two, Suit::Heart), fd[1]);
        assert_eq!(Card::new(Value::Three, Suit::Diamond), fd[4]);
    }

    #[test]
    fn test_from_vec() {
        let c = Card {
            value: Value::Nine,
            suit: Suit::Heart,
        };
        let v = vec![c];

        let flat_deck: FlatDeck = v.into();

        assert_eq!(1, flat_deck.len());
        assert_eq!(c, flat_deck[0]);
        assert!(!flat_deck.is_empty());
        assert!(FlatDeck::from(Vec::new()).is_empty());
    }

    #[test]
    fn test_shuffle_rng() {
        let mut fd_one: FlatDeck = Deck::default().into();
        let mut fd_two: FlatDeck = Deck::default().into();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        fd_one.shuffle(&mut rng_one);
        fd_two.shuffle(&mut rng_two);

        assert_eq!(fd_one, fd_two);
        assert_ne!(fd_one, FlatDeck::default());
    }

    #[test]
    fn test_sample_is_seeded_and_distinct() {
        let mut one = FlatDeck::default();
        let mut two = FlatDeck::default();
        let mut rng_one = StdRng::seed_from_u64(99);
        let mut rng_two = StdRng::seed_from_u64(99);

        for _ in 0..100 {
            let a: CardBitSet = one.sample(&mut rng_one, 5).iter().copied().collect();
            let b: CardBitSet = two.sample(&mut rng_two, 5).iter().copied().collect();
            assert_eq!(a, b);
            assert_eq!(5, a.count());
        }
        let all: CardBitSet = one.iter().copied().collect();
        assert_eq!(CardBitSet::default(), all);
    }

    #[test]
    fn test_remaining_keeps_order() {
        let fd = FlatDeck::default();
        let used: CardBitSet = [fd[0], fd[2], fd[51]].into_iter().collect();
        let remaining = fd.remaining(used);

        assert_eq!(49, remaining.len());
        assert_eq!(fd[1], remaining[0]);
        assert_eq!(fd[3], remaining[1]);
        assert_eq!(fd[50], remaining[48]);
        assert!(remaining.iter().all(|c| !used.contains(*c)));
    }

    #[test]
    fn test_index_ranges() {
        let fd = FlatDeck::default();
        assert_eq!(4, fd[..4].len());
        assert_eq!(2, fd[4..6].len());
        assert_eq!(2, fd[50..].len());
        assert_eq!(52, fd[..].len());
    }
}
