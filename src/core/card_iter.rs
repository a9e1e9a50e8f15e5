use crate::core::{Card, CardBitSet, FlatDeck};

/// Given some cards create every group of `num_cards` of them.
///
/// Groups come out in lexicographic order of their positions in
/// `possible_cards`, each exactly once. Asking for zero cards yields a
/// single empty group; asking for more cards than there are yields
/// nothing.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards that can be dealt
    possible_cards: &'a [Card],

    /// Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    /// Set once the last group has been produced.
    done: bool,
}

impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards.
    /// `num_cards` represents how many cards should be in each group.
    ///
    /// ```
    /// use holdem_equity::core::{CardIter, FlatDeck};
    ///
    /// let deck = FlatDeck::default();
    /// assert_eq!(1326, CardIter::new(&deck[..], 2).count());
    /// ```
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter<'_> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            done: num_cards > possible_cards.len(),
        }
    }

    /// Move to the next set of offsets. The right most offset that can
    /// still move does, and every offset after it restarts right
    /// behind it.
    fn advance(&mut self) {
        let n = self.possible_cards.len();
        let k = self.idx.len();
        match (0..k).rev().find(|&i| self.idx[i] < n - k + i) {
            Some(level) => {
                self.idx[level] += 1;
                for j in level + 1..k {
                    self.idx[j] = self.idx[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
    }
}

/// The actual `Iterator` for `Card`'s.
impl Iterator for CardIter<'_> {
    type Item = CardBitSet;

    fn next(&mut self) -> Option<CardBitSet> {
        if self.done {
            return None;
        }
        let result = self.idx.iter().map(|i| self.possible_cards[*i]).collect();
        self.advance();
        Some(result)
    }
}

/// This is useful for trying every possible 5 card hand
impl<'a> IntoIterator for &'a FlatDeck {
    type Item = CardBitSet;
    type IntoIter = CardIter<'a>;

    fn into_iter(self) -> CardIter<'a> {
        CardIter::new(&self[..], 5)
    }
}

/// The number of ways to choose `k` items out of `n`.
///
/// ```
/// use holdem_equity::core::combinations;
///
/// assert_eq!(1_712_304, combinations(48, 5));
/// assert_eq!(1_533_939, combinations(47, 5));
/// assert_eq!(990, combinations(45, 2));
/// assert_eq!(1, combinations(43, 0));
/// assert_eq!(0, combinations(3, 5));
/// ```
pub fn combinations(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    // Every partial product is itself a binomial so the division is
    // exact.
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
