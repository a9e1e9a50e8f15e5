//! Deciding who wins once every hand has been evaluated.

use std::cmp::Ordering;

use super::{Evaluation, MAX_PLAYERS, PlayerBitSet};

/// Compare two evaluations: category first, then tiebreak ranks left
/// to right. `Equal` means the two hands split the pot.
///
/// ```
/// use std::cmp::Ordering;
/// use holdem_equity::core::{compare, Category, Evaluation};
///
/// let flush = Evaluation::new(Category::Flush, &[13, 9, 7, 6, 5]);
/// let straight = Evaluation::new(Category::Straight, &[14]);
/// assert_eq!(Ordering::Greater, compare(&flush, &straight));
/// assert_eq!(Ordering::Equal, compare(&flush, &flush));
/// ```
pub fn compare(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.cmp(b)
}

/// Find every player holding the best evaluation. More than one
/// winner is a split pot.
///
/// Returns an empty set only for an empty slice. Panics with more
/// than `MAX_PLAYERS` evaluations.
///
/// ```
/// use holdem_equity::core::{rank_players, Category, Evaluation};
///
/// let winners = rank_players(&[
///     Evaluation::new(Category::Pair, &[9, 14, 8, 3]),
///     Evaluation::new(Category::Straight, &[7]),
///     Evaluation::new(Category::Straight, &[7]),
/// ]);
/// assert_eq!(vec![1, 2], winners.ones().collect::<Vec<_>>());
/// ```
pub fn rank_players(evaluations: &[Evaluation]) -> PlayerBitSet {
    assert!(
        evaluations.len() <= MAX_PLAYERS,
        "at most {MAX_PLAYERS} players can be ranked, found {}",
        evaluations.len()
    );
    let mut best: Option<&Evaluation> = None;
    let mut found = PlayerBitSet::default();
    for (idx, evaluation) in evaluations.iter().enumerate() {
        match best.map(|b| evaluation.cmp(b)) {
            // If this is a tie then add the index.
            Some(Ordering::Equal) => found.enable(idx),
            // If this is the highest then reset the set to only this
            // index.
            None | Some(Ordering::Greater) => {
                found = PlayerBitSet::default();
                found.enable(idx);
                best = Some(evaluation);
            }
            // Otherwise keep what we've already found.
            Some(Ordering::Less) => {}
        }
    }
    found
}
