use crate::core::card::{Card, Suit, Value};
use crate::core::{CardBitSet, CardBitSetIter};

/// Deck struct that can tell quickly if a card is in the deck
///
/// A deck is a value. Removing cards from one deck never changes
/// another, and nothing in this crate keeps a shared deck around.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    /// Used to figure out quickly
    /// if this card is in the deck.
    cards: CardBitSet,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self {
            cards: CardBitSet::new(),
        }
    }
    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(*c)
    }
    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.count()
    }
    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// Get an iterator from this deck, in rank-major order.
    pub fn iter(&self) -> CardBitSetIter {
        self.cards.into_iter()
    }
}

impl Default for Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use holdem_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        let mut cards = CardBitSet::new();
        for v in &Value::values() {
            for s in &Suit::suits() {
                cards.insert(Card::new(*v, *s));
            }
        }
        Self { cards }
    }
}

impl From<CardBitSet> for Deck {
    fn from(cards: CardBitSet) -> Self {
        Self { cards }
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = CardBitSetIter;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> CardBitSetIter {
        self.cards.into_iter()
    }
}
