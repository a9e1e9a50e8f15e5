//! This is the core module. It exports the non-equity related code:
//! cards, decks, hand evaluation, and showdown comparison.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value, parse_cards};

/// Error types.
mod error;
/// Export the error and the reasons a card set can be invalid.
pub use self::error::{EquityError, InvalidCardSet};

/// Bitset of cards, the membership structure everything else uses.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over every completion of a board.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Flattened deck
mod flat_deck;
/// Export the ordered deck.
pub use self::flat_deck::FlatDeck;

/// 5 to 7 card hand evaluation.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Category, Evaluation, MAX_TIEBREAK, Rankable, evaluate};

/// Sets of player indexes.
mod player_bit_set;
pub use self::player_bit_set::{ActivePlayerBitSetIter, MAX_PLAYERS, PlayerBitSet};

/// Comparing evaluations and finding winners.
mod showdown;
pub use self::showdown::{compare, rank_players};
