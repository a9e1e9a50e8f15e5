//! # holdem_equity
//!
//! Hand evaluation and equity calculation for Texas Hold'em.
//!
//! The `core` module holds the poker building blocks: cards, decks,
//! card sets, and a 5 to 7 card hand evaluator. The `holdem` module
//! uses them to compute how often a hand wins at showdown, either by
//! enumerating every board completion or by Monte Carlo sampling.
//!
//! ```
//! use holdem_equity::core::{FlatDeck, Hand, parse_cards};
//! use holdem_equity::holdem::exact_equity_known_board;
//!
//! let hero = Hand::new_from_str("ASKS").unwrap();
//! let villain = Hand::new_from_str("QDQC").unwrap();
//! let flop = parse_cards("QH 2S 9D").unwrap();
//!
//! let equity = exact_equity_known_board(&hero, &villain, &FlatDeck::default(), &flop).unwrap();
//! assert!(equity < 0.05);
//! ```

/// Cards, decks, hand evaluation and showdown comparison. Nothing in
/// here knows about equity.
pub mod core;
/// Equity calculation for hold'em hands.
pub mod holdem;
