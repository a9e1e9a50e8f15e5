use std::cmp::Ordering;
use std::fmt;

use crate::core::card::Card;

use super::{CardBitSet, EquityError, Hand, InvalidCardSet};

/// All the different possible hand categories, weakest first.
///
/// The discriminant is the category's ordinal and takes part in
/// comparisons, so the order of the variants matters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Category {
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    Pair = 1,
    /// Two different pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    Trips = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    Quads = 7,
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 8,
    /// Ten to ace all of the same suit.
    RoyalFlush = 9,
}

impl Category {
    /// The ordinal of this category, `0` for high card up to `9` for a
    /// royal flush.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::Trips => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::Quads => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Most tiebreak ranks any category needs (flush and high card).
pub const MAX_TIEBREAK: usize = 5;

/// The strength of a hand: a category plus the ranks (2 to 14, most
/// significant first) that break ties inside that category.
///
/// Ordering compares the category first and then the tiebreak ranks
/// left to right, treating missing trailing ranks as 0. Two
/// evaluations are equal exactly when they are a split pot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "EvaluationRepr", into = "EvaluationRepr")
)]
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    category: Category,
    /// Zero padded past `len`.
    tiebreak: [u8; MAX_TIEBREAK],
    len: u8,
}

impl Evaluation {
    /// Build an evaluation from a category and tiebreak ranks.
    ///
    /// Panics if more than `MAX_TIEBREAK` ranks are given.
    ///
    /// ```
    /// use holdem_equity::core::{Category, Evaluation};
    ///
    /// let aces = Evaluation::new(Category::Pair, &[14, 13, 9, 4]);
    /// let kings = Evaluation::new(Category::Pair, &[13, 14, 9, 4]);
    /// assert!(aces > kings);
    /// assert_eq!(Evaluation::new(Category::Straight, &[9]), Evaluation::new(Category::Straight, &[9, 0]));
    /// ```
    pub fn new(category: Category, tiebreak: &[u8]) -> Self {
        assert!(
            tiebreak.len() <= MAX_TIEBREAK,
            "tiebreak holds at most {MAX_TIEBREAK} ranks"
        );
        let mut ranks = [0; MAX_TIEBREAK];
        ranks[..tiebreak.len()].copy_from_slice(tiebreak);
        Self {
            category,
            tiebreak: ranks,
            len: tiebreak.len() as u8,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The tiebreak ranks, most significant first.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..usize::from(self.len)]
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evaluation {}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        // The arrays are zero padded so comparing them whole is the
        // same as padding the shorter list.
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreak.cmp(&other.tiebreak))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.tiebreak())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct EvaluationRepr {
    category: Category,
    tiebreak: Vec<u8>,
}

#[cfg(feature = "serde")]
impl From<Evaluation> for EvaluationRepr {
    fn from(e: Evaluation) -> Self {
        Self {
            category: e.category,
            tiebreak: e.tiebreak().to_vec(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<EvaluationRepr> for Evaluation {
    type Error = String;

    fn try_from(repr: EvaluationRepr) -> Result<Self, Self::Error> {
        if repr.tiebreak.len() > MAX_TIEBREAK {
            return Err(format!(
                "tiebreak holds at most {MAX_TIEBREAK} ranks, found {}",
                repr.tiebreak.len()
            ));
        }
        Ok(Evaluation::new(repr.category, &repr.tiebreak))
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u16 = 0b1_0000_0000_1111;
/// Bit of the ace in a value set.
const ACE: u16 = 1 << 12;

/// Given a bitset of values, find the high card of the best straight.
///
/// Returns the value index (0 for a two) of the top card, so the wheel
/// reports the five. None if there is no straight.
fn straight_high(value_set: u16) -> Option<u8> {
    // Five ones in a row leave one bit at the bottom of each run:
    //       0011111110000
    //       0001111111000
    //       0000111111100
    //       0000011111110
    //       0000001111111
    //       -------------
    //       0000001110000
    let v = u32::from(value_set);
    let runs = v & (v >> 1) & (v >> 2) & (v >> 3) & (v >> 4);
    if runs != 0 {
        // Bit b set means b..=b+4 are all present. Take the top run.
        Some((31 - runs.leading_zeros()) as u8 + 4)
    } else if value_set & WHEEL == WHEEL {
        Some(3)
    } else {
        None
    }
}

/// Value index of the most significant bit.
fn highest(value_set: u16) -> u8 {
    (15 - value_set.leading_zeros()) as u8
}

/// Push the `n` highest ranks of a value set, most significant first.
fn push_top(tiebreak: &mut TiebreakBuilder, mut value_set: u16, n: usize) {
    for _ in 0..n {
        if value_set == 0 {
            break;
        }
        let top = highest(value_set);
        tiebreak.push(top);
        value_set &= !(1 << top);
    }
}

/// Collects tiebreak ranks from value indexes.
struct TiebreakBuilder {
    ranks: [u8; MAX_TIEBREAK],
    len: usize,
}

impl TiebreakBuilder {
    fn new() -> Self {
        Self {
            ranks: [0; MAX_TIEBREAK],
            len: 0,
        }
    }

    fn push(&mut self, value_idx: u8) {
        self.ranks[self.len] = value_idx + 2;
        self.len += 1;
    }

    fn finish(self, category: Category) -> Evaluation {
        Evaluation {
            category,
            tiebreak: self.ranks,
            len: self.len as u8,
        }
    }
}

/// Classify cards by category and tiebreak. This is the hot path of
/// every equity computation so it works on count tables and value
/// bitsets only, without allocating.
///
/// Meant for 5 to 7 distinct cards. Fewer cards still produce an
/// evaluation, just not a meaningful one.
fn evaluate_cards<I: Iterator<Item = Card>>(cards: I) -> Evaluation {
    let mut value_to_count: [u8; 13] = [0; 13];
    let mut count_to_value: [u16; 5] = [0; 5];
    let mut suit_value_sets: [u16; 4] = [0; 4];
    let mut value_set: u16 = 0;

    for c in cards {
        let v = c.value as usize;
        value_set |= 1 << v;
        value_to_count[v] += 1;
        suit_value_sets[c.suit as usize] |= 1 << v;
    }

    // Now rotate the value to count map.
    for (value, &count) in value_to_count.iter().enumerate() {
        count_to_value[usize::from(count)] |= 1 << value;
    }

    let mut tiebreak = TiebreakBuilder::new();

    // At most one suit can hold five of seven cards.
    let flush = suit_value_sets.iter().position(|sv| sv.count_ones() >= 5);

    if let Some(flush_idx) = flush {
        if let Some(high) = straight_high(suit_value_sets[flush_idx]) {
            tiebreak.push(high);
            return if 1 << high == ACE {
                tiebreak.finish(Category::RoyalFlush)
            } else {
                tiebreak.finish(Category::StraightFlush)
            };
        }
    }

    let quads = count_to_value[4];
    let trips = count_to_value[3];
    let pairs = count_to_value[2];

    if quads != 0 {
        let quad = highest(quads);
        tiebreak.push(quad);
        push_top(&mut tiebreak, value_set & !(1 << quad), 1);
        return tiebreak.finish(Category::Quads);
    }

    if trips != 0 {
        let set = highest(trips);
        // A second set plays as the pair.
        let pair_candidates = (trips & !(1 << set)) | pairs;
        if pair_candidates != 0 {
            tiebreak.push(set);
            tiebreak.push(highest(pair_candidates));
            return tiebreak.finish(Category::FullHouse);
        }
    }

    if let Some(flush_idx) = flush {
        push_top(&mut tiebreak, suit_value_sets[flush_idx], 5);
        return tiebreak.finish(Category::Flush);
    }

    if let Some(high) = straight_high(value_set) {
        tiebreak.push(high);
        return tiebreak.finish(Category::Straight);
    }

    if trips != 0 {
        let set = highest(trips);
        tiebreak.push(set);
        push_top(&mut tiebreak, value_set & !(1 << set), 2);
        return tiebreak.finish(Category::Trips);
    }

    if pairs.count_ones() >= 2 {
        let high_pair = highest(pairs);
        let low_pair = highest(pairs & !(1 << high_pair));
        tiebreak.push(high_pair);
        tiebreak.push(low_pair);
        // A third pair is just a kicker here.
        push_top(
            &mut tiebreak,
            value_set & !(1 << high_pair) & !(1 << low_pair),
            1,
        );
        return tiebreak.finish(Category::TwoPair);
    }

    if pairs != 0 {
        let pair = highest(pairs);
        tiebreak.push(pair);
        push_top(&mut tiebreak, value_set & !(1 << pair), 3);
        return tiebreak.finish(Category::Pair);
    }

    push_top(&mut tiebreak, value_set, 5);
    tiebreak.finish(Category::HighCard)
}

/// Can this be evaluated as a poker hand? There are implementations
/// for `Hand`, `CardBitSet`, and slices of cards.
pub trait Rankable {
    /// The cards to evaluate.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Find the category and tiebreak of the best 5 card hand.
    /// This works on 5, 6, or 7 cards. It doesn't do any caching and
    /// doesn't check the number of cards; use [`evaluate`] for a
    /// checked version.
    ///
    /// # Examples
    /// ```
    /// use holdem_equity::core::{Category, Hand, Rankable};
    ///
    /// let hand = Hand::new_from_str("2H2D8D8SKD6STH").unwrap();
    /// let evaluation = hand.evaluate();
    /// assert_eq!(Category::TwoPair, evaluation.category());
    /// assert_eq!(&[8, 2, 13], evaluation.tiebreak());
    /// ```
    fn evaluate(&self) -> Evaluation {
        evaluate_cards(self.cards())
    }
}

impl Rankable for Hand {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter()
    }
}

impl Rankable for CardBitSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        (*self).into_iter()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

/// Evaluate 5, 6, or 7 distinct cards.
///
/// ```
/// use holdem_equity::core::{evaluate, parse_cards, Category};
///
/// let cards = parse_cards("5D 4C 3H 2S AD 9C KH").unwrap();
/// let wheel = evaluate(&cards).unwrap();
/// assert_eq!(Category::Straight, wheel.category());
/// assert_eq!(&[5], wheel.tiebreak());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EquityError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(InvalidCardSet::EvaluationSize(cards.len()).into());
    }
    let mut seen = CardBitSet::new();
    for c in cards {
        if !seen.insert(*c) {
            return Err(InvalidCardSet::DuplicateCard(*c).into());
        }
    }
    Ok(seen.evaluate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardIter, FlatDeck, parse_cards};
    use rand::{SeedableRng, rngs::StdRng};

    fn eval(cards: &str) -> Evaluation {
        evaluate(&parse_cards(cards).unwrap()).unwrap()
    }

    /// Plain five card classifier built from sorted rank groups. Used
    /// to cross check the bitmask evaluator.
    fn reference_five(cards: &[Card]) -> Evaluation {
        let mut ranks: Vec<u8> = cards.iter().map(|c| c.value.rank()).collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

        let mut unique = ranks.clone();
        unique.dedup();
        let straight = if unique.len() == 5 && unique[0] - unique[4] == 4 {
            Some(unique[0])
        } else if unique == [14, 5, 4, 3, 2] {
            Some(5)
        } else {
            None
        };

        // (count, rank) with the biggest groups first.
        let mut groups: Vec<(u8, u8)> = unique
            .iter()
            .map(|r| (ranks.iter().filter(|x| *x == r).count() as u8, *r))
            .collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));
        let by_group: Vec<u8> = groups.iter().map(|g| g.1).collect();

        match (straight, is_flush, groups[0].0, groups.get(1).map(|g| g.0)) {
            (Some(14), true, _, _) => Evaluation::new(Category::RoyalFlush, &[14]),
            (Some(high), true, _, _) => Evaluation::new(Category::StraightFlush, &[high]),
            (_, _, 4, _) => Evaluation::new(Category::Quads, &by_group),
            (_, _, 3, Some(2)) => Evaluation::new(Category::FullHouse, &by_group),
            (_, true, _, _) => Evaluation::new(Category::Flush, &ranks),
            (Some(high), _, _, _) => Evaluation::new(Category::Straight, &[high]),
            (_, _, 3, _) => Evaluation::new(Category::Trips, &by_group),
            (_, _, 2, Some(2)) => Evaluation::new(Category::TwoPair, &by_group),
            (_, _, 2, _) => Evaluation::new(Category::Pair, &by_group),
            _ => Evaluation::new(Category::HighCard, &ranks),
        }
    }

    fn reference_best(cards: &[Card]) -> Evaluation {
        CardIter::new(cards, 5)
            .map(|five| reference_five(&five.into_iter().collect::<Vec<Card>>()))
            .max()
            .unwrap()
    }

    #[test]
    fn test_royal_flush() {
        let e = eval("AS KS QS JS TS 3D 4H");
        assert_eq!(Category::RoyalFlush, e.category());
        assert_eq!(&[14], e.tiebreak());
    }

    #[test]
    fn test_straight_flush() {
        let e = eval("9H 8H 7H 6H 5H 2C KD");
        assert_eq!(Category::StraightFlush, e.category());
        assert_eq!(&[9], e.tiebreak());
    }

    #[test]
    fn test_steel_wheel() {
        let e = eval("AC 2C 3C 4C 5C KC QD");
        assert_eq!(Category::StraightFlush, e.category());
        assert_eq!(&[5], e.tiebreak());
    }

    #[test]
    fn test_straight_flush_beats_bigger_plain_straight() {
        // 6 high straight flush with a ten high straight available.
        let e = eval("2D 3D 4D 5D 6D 7S 8C");
        assert_eq!(Category::StraightFlush, e.category());
        assert_eq!(&[6], e.tiebreak());
    }

    #[test]
    fn test_flush_and_straight_not_connected() {
        // Straight 5-9 with a heart flush, but no straight flush.
        let e = eval("5H 6H 7H 8C 9H KH 2D");
        assert_eq!(Category::Flush, e.category());
        assert_eq!(&[13, 9, 7, 6, 5], e.tiebreak());
    }

    #[test]
    fn test_four_of_a_kind() {
        let e = eval("7D 7C 7H 7S 2D 5C 9H");
        assert_eq!(Category::Quads, e.category());
        assert_eq!(&[7, 9], e.tiebreak());
    }

    #[test]
    fn test_quads_kicker_can_come_from_a_pair() {
        let e = eval("7D 7C 7H 7S KD KC 9H");
        assert_eq!(&[7, 13], e.tiebreak());
    }

    #[test]
    fn test_full_house() {
        let e = eval("KH KS KC 2D 2C 9H TD");
        assert_eq!(Category::FullHouse, e.category());
        assert_eq!(&[13, 2], e.tiebreak());
    }

    #[test]
    fn test_full_house_from_two_sets() {
        let e = eval("4H 4S 4C QD QC QH 2D");
        assert_eq!(Category::FullHouse, e.category());
        assert_eq!(&[12, 4], e.tiebreak());
    }

    #[test]
    fn test_full_house_picks_best_pair() {
        let e = eval("4H 4S 4C QD QC 9H 9D");
        assert_eq!(&[4, 12], e.tiebreak());
    }

    #[test]
    fn test_flush() {
        let e = eval("AH JH 8H 4H 2H KS QD");
        assert_eq!(Category::Flush, e.category());
        assert_eq!(&[14, 11, 8, 4, 2], e.tiebreak());
    }

    #[test]
    fn test_flush_uses_top_five_of_suit() {
        let e = eval("AH JH 8H 4H 2H 3H QD");
        assert_eq!(&[14, 11, 8, 4, 3], e.tiebreak());
    }

    #[test]
    fn test_straight_wheel() {
        let e = eval("5D 4C 3H 2S AD 9C KH");
        assert_eq!(Category::Straight, e.category());
        assert_eq!(&[5], e.tiebreak());
    }

    #[test]
    fn test_wheel_below_six_high() {
        let wheel = eval("5D 4C 3H 2S AD 9C KH");
        let six_high = eval("5D 4C 3H 2S 6D 9C KH");
        let trips = eval("AD AC AH 2S 6D 9C KH");
        assert!(six_high > wheel);
        assert!(wheel > trips);
    }

    #[test]
    fn test_straight_takes_highest_run() {
        let e = eval("5D 6C 7H 8S 9D TC JH");
        assert_eq!(Category::Straight, e.category());
        assert_eq!(&[11], e.tiebreak());

        let broadway = eval("AD KC QH JS TD 2C 3H");
        assert_eq!(&[14], broadway.tiebreak());
    }

    #[test]
    fn test_three_of_a_kind() {
        let e = eval("QH QS QC 8D 4S 2C 9H");
        assert_eq!(Category::Trips, e.category());
        assert_eq!(&[12, 9, 8], e.tiebreak());
    }

    #[test]
    fn test_two_pair() {
        let e = eval("JD JC 8S 8H 2C 5D KH");
        assert_eq!(Category::TwoPair, e.category());
        assert_eq!(&[11, 8, 13], e.tiebreak());
    }

    #[test]
    fn test_two_pair_with_three_pairs() {
        // The third pair's rank is the kicker when it beats the single.
        let e = eval("JD JC 8S 8H 6C 6D 2H");
        assert_eq!(&[11, 8, 6], e.tiebreak());
        let e = eval("JD JC 8S 8H 6C 6D AH");
        assert_eq!(&[11, 8, 14], e.tiebreak());
    }

    #[test]
    fn test_one_pair() {
        let e = eval("AD AC 7H 4C 2D 9S TH");
        assert_eq!(Category::Pair, e.category());
        assert_eq!(&[14, 10, 9, 7], e.tiebreak());
    }

    #[test]
    fn test_high_card() {
        let e = eval("AS KD 9C 7H 4D 2S 3C");
        assert_eq!(Category::HighCard, e.category());
        assert_eq!(&[14, 13, 9, 7, 4], e.tiebreak());
    }

    #[test]
    fn test_five_and_six_cards() {
        let five = eval("AS KD 9C 7H 4D");
        assert_eq!(Category::HighCard, five.category());
        assert_eq!(&[14, 13, 9, 7, 4], five.tiebreak());

        let six = eval("AS AD 9C 9H 4D 4C");
        assert_eq!(Category::TwoPair, six.category());
        assert_eq!(&[14, 9, 4], six.tiebreak());
    }

    #[test]
    fn test_flush_beats_no_pair() {
        let flush = eval("2H 4H 6H 8H TH KS QD");
        let high = eval("AS KD QC JH 9D 2S 3C");
        assert!(flush > high);
    }

    #[test]
    fn test_kicker_decides() {
        let a = eval("AD AC KH 4C 2D 9S TH");
        let b = eval("AH AS QH 4C 2D 9S TH");
        assert!(a > b);
        assert_eq!(Ordering::Less, b.cmp(&a));
    }

    #[test]
    fn test_board_plays_is_a_tie() {
        let a = eval("2C 3D AS KS QS JS TS");
        let b = eval("4C 5D AS KS QS JS TS");
        assert_eq!(a, b);
    }

    #[test]
    fn test_padding_in_comparison() {
        let short = Evaluation::new(Category::Pair, &[14]);
        let long = Evaluation::new(Category::Pair, &[14, 0, 0, 0]);
        assert_eq!(short, long);
        assert!(Evaluation::new(Category::Pair, &[14, 2]) > short);
        assert!(Evaluation::new(Category::TwoPair, &[3]) > Evaluation::new(Category::Pair, &[14, 13, 12, 11]));
    }

    #[test]
    fn test_category_ordinals() {
        assert_eq!(0, Category::HighCard.ordinal());
        assert_eq!(4, Category::Straight.ordinal());
        assert_eq!(9, Category::RoyalFlush.ordinal());
        assert!(Category::StraightFlush < Category::RoyalFlush);
        assert_eq!("Full House", Category::FullHouse.to_string());
    }

    #[test]
    fn test_evaluate_rejects_bad_sizes() {
        let four = parse_cards("AS KS QS JS").unwrap();
        assert_eq!(
            Err(EquityError::InvalidCardSet(InvalidCardSet::EvaluationSize(4))),
            evaluate(&four)
        );
        let eight = parse_cards("AS KS QS JS TS 9S 8S 7S").unwrap();
        assert!(evaluate(&eight).is_err());
    }

    #[test]
    fn test_evaluate_rejects_duplicates() {
        let cards = parse_cards("AS KS QS JS AS").unwrap();
        assert!(matches!(
            evaluate(&cards),
            Err(EquityError::InvalidCardSet(InvalidCardSet::DuplicateCard(_)))
        ));
    }

    #[test]
    fn test_hand_and_slice_agree() {
        let cards = parse_cards("QH QS QC 8D 4S 2C 9H").unwrap();
        let hand = Hand::new_with_cards(cards.clone());
        assert_eq!(hand.evaluate(), cards.evaluate());
        assert_eq!(hand.evaluate(), cards[..].evaluate());
    }

    #[test]
    fn test_straight_high() {
        assert_eq!(None, straight_high(0));
        assert_eq!(Some(3), straight_high(WHEEL));
        assert_eq!(Some(4), straight_high(0b1_1111));
        assert_eq!(Some(12), straight_high(0b1_1111_0000_0000));
        assert_eq!(Some(4), straight_high(WHEEL | 0b1_0000));
        assert_eq!(None, straight_high(0b1_0000_0000_0111));
    }

    #[test]
    fn test_matches_reference_on_random_hands() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut deck = FlatDeck::default();
        for _ in 0..20_000 {
            deck.shuffle(&mut rng);
            let cards = &deck[..7];
            assert_eq!(
                reference_best(cards),
                cards.evaluate(),
                "mismatch for {:?}",
                cards
            );
            assert_eq!(
                reference_best(cards).tiebreak(),
                cards.evaluate().tiebreak()
            );
        }
    }

    #[test]
    fn test_matches_reference_on_crafted_hands() {
        for hand in [
            "AS KS QS JS TS 9S 8S",
            "AC 2C 3C 4C 5C 6C 7D",
            "7D 7C 7H 7S KD KC KH",
            "4H 4S 4C QD QC QH 2D",
            "JD JC 8S 8H 6C 6D AH",
            "AD 2C 3H 4S 5D 6C 7H",
            "AD KC QH JS 9D 8C 7H",
        ] {
            let cards = parse_cards(hand).unwrap();
            assert_eq!(reference_best(&cards), cards.evaluate(), "{hand}");
        }
    }

    #[test]
    fn test_all_five_card_hands_category_counts() {
        let deck = FlatDeck::default();
        let mut counts = [0u32; 10];
        for hand in &deck {
            counts[usize::from(hand.evaluate().category().ordinal())] += 1;
        }
        assert_eq!(
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4],
            counts
        );
    }
}
