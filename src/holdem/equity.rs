use rand::Rng;
use tracing::{event, trace_span};

use crate::core::{
    Card, CardBitSet, CardIter, EquityError, Evaluation, FlatDeck, Hand, InvalidCardSet,
    MAX_PLAYERS, PlayerBitSet, Rankable, combinations, rank_players,
};

/// Number of community cards in a complete board.
pub const BOARD_SIZE: usize = 5;
/// Number of hole cards each player holds.
pub const HOLE_CARDS: usize = 2;

/// Outcome totals of one equity computation.
///
/// Player 0 is the hero, the opponents follow in the order they were
/// given. On every candidate board the winners share one pot equally,
/// so the equities of all players sum to 1.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EquityResult {
    /// Sum of pot shares per player.
    shares: Vec<f64>,
    /// Boards won outright per player.
    wins: Vec<u64>,
    /// Boards split per player.
    ties: Vec<u64>,
    /// Boards looked at.
    candidates: u64,
}

impl EquityResult {
    fn new(players: usize) -> Self {
        Self {
            shares: vec![0.0; players],
            wins: vec![0; players],
            ties: vec![0; players],
            candidates: 0,
        }
    }

    fn record(&mut self, winners: PlayerBitSet) {
        self.candidates += 1;
        // each player gets the pot divided by the number of people with exactly the
        // same hand value.
        let share = 1.0 / winners.count() as f64;
        let split = winners.count() > 1;
        for idx in winners.ones() {
            self.shares[idx] += share;
            if split {
                self.ties[idx] += 1;
            } else {
                self.wins[idx] += 1;
            }
        }
    }

    fn finish(self) -> Result<Self, EquityError> {
        if self.candidates == 0 {
            return Err(EquityError::NoCandidates);
        }
        Ok(self)
    }

    /// Number of players, hero included.
    pub fn players(&self) -> usize {
        self.shares.len()
    }

    /// The hero's expected share of the pot.
    pub fn hero_equity(&self) -> f64 {
        self.equity(0)
    }

    /// A player's expected share of the pot, in `[0, 1]`.
    pub fn equity(&self, idx: usize) -> f64 {
        self.shares[idx] / self.candidates as f64
    }

    /// Every player's equity, hero first.
    pub fn equities(&self) -> Vec<f64> {
        (0..self.players()).map(|idx| self.equity(idx)).collect()
    }

    pub fn wins(&self, idx: usize) -> u64 {
        self.wins[idx]
    }

    pub fn ties(&self, idx: usize) -> u64 {
        self.ties[idx]
    }

    pub fn losses(&self, idx: usize) -> u64 {
        self.candidates - self.wins[idx] - self.ties[idx]
    }

    /// Candidate boards enumerated, or samples drawn.
    pub fn candidates(&self) -> u64 {
        self.candidates
    }
}

/// The running hero equity after some number of Monte Carlo samples.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergencePoint {
    pub samples: usize,
    pub equity: f64,
}

/// A validated equity problem: hero and opponents, the known board,
/// and what is left of the deck.
///
/// All the checking happens in `new`, so the computations themselves
/// can't fail except for having nothing to look at.
#[derive(Debug, Clone)]
pub struct EquityGame {
    /// Hole cards, hero first.
    players: Vec<CardBitSet>,
    /// The revealed part of the board.
    board: CardBitSet,
    /// The deck without any card in play, in deck order.
    remaining: FlatDeck,
    /// Cards needed to complete the board.
    needed: usize,
}

impl EquityGame {
    /// Validate a hero, opponents, deck, and known board.
    ///
    /// Fails if any hand doesn't hold exactly two cards, the board has
    /// more than five cards, any card shows up twice anywhere (deck
    /// included), there are no opponents or too many players, or the
    /// deck can't complete the board.
    ///
    /// ```
    /// use holdem_equity::core::{FlatDeck, Hand, parse_cards};
    /// use holdem_equity::holdem::EquityGame;
    ///
    /// let hero = Hand::new_from_str("ASKS").unwrap();
    /// let villain = Hand::new_from_str("QDQC").unwrap();
    /// let board = parse_cards("QH 2S 9D").unwrap();
    /// let game = EquityGame::new(&hero, &[villain], &FlatDeck::default(), &board).unwrap();
    ///
    /// assert_eq!(45, game.remaining().len());
    /// assert_eq!(990, game.candidate_count());
    /// ```
    pub fn new(
        hero: &Hand,
        opponents: &[Hand],
        deck: &FlatDeck,
        known_board: &[Card],
    ) -> Result<Self, EquityError> {
        if opponents.is_empty() {
            return Err(InvalidCardSet::NoOpponents.into());
        }
        let num_players = opponents.len() + 1;
        if num_players > MAX_PLAYERS {
            return Err(InvalidCardSet::TooManyPlayers {
                found: num_players,
                max: MAX_PLAYERS,
            }
            .into());
        }
        if known_board.len() > BOARD_SIZE {
            return Err(InvalidCardSet::BoardSize(known_board.len()).into());
        }

        let mut used = CardBitSet::new();
        let mut players = Vec::with_capacity(num_players);
        for hand in std::iter::once(hero).chain(opponents) {
            if hand.count() != HOLE_CARDS {
                return Err(InvalidCardSet::HoleCardCount(hand.count()).into());
            }
            for card in hand.iter() {
                if !used.insert(card) {
                    return Err(InvalidCardSet::DuplicateCard(card).into());
                }
            }
            players.push(CardBitSet::from(*hand));
        }

        let mut board = CardBitSet::new();
        for card in known_board {
            if !used.insert(*card) {
                return Err(InvalidCardSet::DuplicateCard(*card).into());
            }
            board.insert(*card);
        }

        let mut seen = CardBitSet::new();
        for card in deck.iter() {
            if !seen.insert(*card) {
                return Err(InvalidCardSet::DuplicateCard(*card).into());
            }
        }

        let remaining = deck.remaining(used);
        let needed = BOARD_SIZE - known_board.len();
        if remaining.len() < needed {
            return Err(EquityError::InsufficientDeck {
                needed,
                remaining: remaining.len(),
            });
        }

        Ok(Self {
            players,
            board,
            remaining,
            needed,
        })
    }

    /// Number of players, hero included.
    pub fn players(&self) -> usize {
        self.players.len()
    }

    /// Cards still available to complete the board.
    pub fn remaining(&self) -> &FlatDeck {
        &self.remaining
    }

    /// Cards needed to complete the board.
    pub fn needed(&self) -> usize {
        self.needed
    }

    /// How many distinct board completions exist.
    pub fn candidate_count(&self) -> u64 {
        combinations(self.remaining.len(), self.needed)
    }

    /// Evaluate every player against the known board plus `completion`
    /// and return the winners. `scratch` is reused between calls.
    fn showdown(&self, completion: CardBitSet, scratch: &mut Vec<Evaluation>) -> PlayerBitSet {
        let board = self.board | completion;
        scratch.clear();
        scratch.extend(self.players.iter().map(|hole| (*hole | board).evaluate()));
        rank_players(scratch)
    }

    /// Enumerate every completion of the board.
    pub fn exact(&self) -> Result<EquityResult, EquityError> {
        let span = trace_span!("exact_equity", players = self.players(), needed = self.needed);
        let _enter = span.enter();
        event!(
            tracing::Level::DEBUG,
            players = self.players(),
            known_board = self.board.count(),
            remaining = self.remaining.len(),
            candidates = self.candidate_count(),
            "Enumerating board completions"
        );

        let mut result = EquityResult::new(self.players());
        let mut scratch = Vec::with_capacity(self.players());
        for completion in CardIter::new(&self.remaining[..], self.needed) {
            result.record(self.showdown(completion, &mut scratch));
        }

        let result = result.finish()?;
        event!(
            tracing::Level::DEBUG,
            equity = result.hero_equity(),
            candidates = result.candidates(),
            "Exact equity computed"
        );
        Ok(result)
    }

    /// Estimate equity from `iterations` random completions of the
    /// board. Each completion is drawn uniformly without replacement
    /// from the remaining deck.
    pub fn monte_carlo<R: Rng>(
        &self,
        iterations: usize,
        rng: &mut R,
    ) -> Result<EquityResult, EquityError> {
        let span = trace_span!("monte_carlo_equity", players = self.players(), iterations);
        let _enter = span.enter();
        event!(
            tracing::Level::DEBUG,
            players = self.players(),
            known_board = self.board.count(),
            remaining = self.remaining.len(),
            iterations,
            "Sampling board completions"
        );

        let mut result = EquityResult::new(self.players());
        self.sample(iterations, rng, |winners| result.record(winners));

        let result = result.finish()?;
        event!(
            tracing::Level::DEBUG,
            equity = result.hero_equity(),
            samples = result.candidates(),
            "Monte Carlo equity estimated"
        );
        Ok(result)
    }

    /// One Monte Carlo run of `samples` draws that records the running
    /// hero equity after every `step` draws. A `step` of zero is
    /// treated as one.
    pub fn convergence<R: Rng>(
        &self,
        samples: usize,
        step: usize,
        rng: &mut R,
    ) -> Result<Vec<ConvergencePoint>, EquityError> {
        if samples == 0 {
            return Err(EquityError::NoCandidates);
        }
        let step = step.max(1);
        let mut points = Vec::with_capacity(samples / step);
        let mut result = EquityResult::new(self.players());
        self.sample(samples, rng, |winners| {
            result.record(winners);
            let n = result.candidates() as usize;
            if n % step == 0 {
                points.push(ConvergencePoint {
                    samples: n,
                    equity: result.hero_equity(),
                });
            }
        });
        event!(
            tracing::Level::DEBUG,
            samples,
            step,
            points = points.len(),
            "Convergence trace recorded"
        );
        Ok(points)
    }

    fn sample<R, F>(&self, iterations: usize, rng: &mut R, mut on_showdown: F)
    where
        R: Rng,
        F: FnMut(PlayerBitSet),
    {
        let mut deck = self.remaining.clone();
        let mut scratch = Vec::with_capacity(self.players());
        for _ in 0..iterations {
            let completion: CardBitSet = deck.sample(rng, self.needed).iter().copied().collect();
            on_showdown(self.showdown(completion, &mut scratch));
        }
    }
}

/// Exact heads-up equity with nothing on the board.
///
/// With a full deck 48 cards remain once both hands are out, so this
/// enumerates all `C(48, 5) = 1,712,304` boards.
pub fn exact_equity(hero: &Hand, villain: &Hand, deck: &FlatDeck) -> Result<f64, EquityError> {
    exact_equity_known_board(hero, villain, deck, &[])
}

/// Exact heads-up equity given the revealed part of the board.
///
/// ```
/// use holdem_equity::core::{FlatDeck, Hand, parse_cards};
/// use holdem_equity::holdem::exact_equity_known_board;
///
/// let hero = Hand::new_from_str("ASKS").unwrap();
/// let villain = Hand::new_from_str("QDQC").unwrap();
/// let board = parse_cards("QH 2S 9D").unwrap();
///
/// let equity = exact_equity_known_board(&hero, &villain, &FlatDeck::default(), &board).unwrap();
/// assert!((equity - 43.0 / 990.0).abs() < 1e-12);
/// ```
pub fn exact_equity_known_board(
    hero: &Hand,
    villain: &Hand,
    deck: &FlatDeck,
    known_board: &[Card],
) -> Result<f64, EquityError> {
    exact_equity_multi_known_board(hero, std::slice::from_ref(villain), deck, known_board)
}

/// Monte Carlo heads-up equity with nothing on the board.
pub fn monte_carlo_equity<R: Rng>(
    hero: &Hand,
    villain: &Hand,
    deck: &FlatDeck,
    iterations: usize,
    rng: &mut R,
) -> Result<f64, EquityError> {
    monte_carlo_equity_known_board(hero, villain, deck, &[], iterations, rng)
}

/// Monte Carlo heads-up equity given the revealed part of the board.
pub fn monte_carlo_equity_known_board<R: Rng>(
    hero: &Hand,
    villain: &Hand,
    deck: &FlatDeck,
    known_board: &[Card],
    iterations: usize,
    rng: &mut R,
) -> Result<f64, EquityError> {
    monte_carlo_equity_multi_known_board(
        hero,
        std::slice::from_ref(villain),
        deck,
        known_board,
        iterations,
        rng,
    )
}

/// Exact hero equity against several opponents with nothing on the
/// board.
pub fn exact_equity_multi(
    hero: &Hand,
    opponents: &[Hand],
    deck: &FlatDeck,
) -> Result<f64, EquityError> {
    exact_equity_multi_known_board(hero, opponents, deck, &[])
}

/// Exact hero equity against several opponents given the revealed part
/// of the board.
pub fn exact_equity_multi_known_board(
    hero: &Hand,
    opponents: &[Hand],
    deck: &FlatDeck,
    known_board: &[Card],
) -> Result<f64, EquityError> {
    let game = EquityGame::new(hero, opponents, deck, known_board)?;
    Ok(game.exact()?.hero_equity())
}

/// Monte Carlo hero equity against several opponents with nothing on
/// the board.
pub fn monte_carlo_equity_multi<R: Rng>(
    hero: &Hand,
    opponents: &[Hand],
    deck: &FlatDeck,
    iterations: usize,
    rng: &mut R,
) -> Result<f64, EquityError> {
    monte_carlo_equity_multi_known_board(hero, opponents, deck, &[], iterations, rng)
}

/// Monte Carlo hero equity against several opponents given the
/// revealed part of the board.
pub fn monte_carlo_equity_multi_known_board<R: Rng>(
    hero: &Hand,
    opponents: &[Hand],
    deck: &FlatDeck,
    known_board: &[Card],
    iterations: usize,
    rng: &mut R,
) -> Result<f64, EquityError> {
    let game = EquityGame::new(hero, opponents, deck, known_board)?;
    Ok(game.monte_carlo(iterations, rng)?.hero_equity())
}

/// Running hero equity of a single Monte Carlo run, one point every
/// `step` samples.
pub fn monte_carlo_convergence<R: Rng>(
    hero: &Hand,
    opponents: &[Hand],
    deck: &FlatDeck,
    known_board: &[Card],
    samples: usize,
    step: usize,
    rng: &mut R,
) -> Result<Vec<ConvergencePoint>, EquityError> {
    let game = EquityGame::new(hero, opponents, deck, known_board)?;
    game.convergence(samples, step, rng)
}
