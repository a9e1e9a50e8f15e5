use std::fmt;

use super::EquityError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    ///
    /// Panics if `v` is not in `0..13`.
    pub fn from_u8(v: u8) -> Value {
        VALUES[usize::from(v)]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// The numeric rank of this value, `2` for a two up to `14` for an ace.
    ///
    /// ```
    /// use holdem_equity::core::Value;
    ///
    /// assert_eq!(2, Value::Two.rank());
    /// assert_eq!(14, Value::Ace.rank());
    /// ```
    pub fn rank(self) -> u8 {
        self as u8 + 2
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' | 'a' => Some(Value::Ace),
            'K' | 'k' => Some(Value::King),
            'Q' | 'q' => Some(Value::Queen),
            'J' | 'j' => Some(Value::Jack),
            'T' | 't' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        "23456789TJQKA".as_bytes()[self as usize] as char
    }
}

/// Enum for the four different suits.
///
/// The order follows the `"DHCS"` boundary notation. While this has
/// support for ordering it's not sensical. The sorting is only there
/// to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Diamonds
    Diamond = 0,
    /// Hearts
    Heart = 1,
    /// Clubs
    Club = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Diamond, Suit::Heart, Suit::Club, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Panics if `s` is not in `0..4`.
    pub fn from_u8(s: u8) -> Suit {
        SUITS[usize::from(s)]
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'D' | 'd' => Some(Suit::Diamond),
            'H' | 'h' => Some(Suit::Heart),
            'C' | 'c' => Some(Suit::Club),
            'S' | 's' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        "DHCS".as_bytes()[self as usize] as char
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards order by value first, so sorting a set of cards yields the
/// rank-major deck order `2D 2H 2C 2S 3D ...`.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Dense index of a card, `value * 4 + suit`. This is the bit used by
/// `CardBitSet`.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        (card.value as u8) * 4 + card.suit as u8
    }
}

/// Panics if the index is not in `0..52`.
impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse a two character token like `"AS"` or `"td"`.
///
/// ```
/// use holdem_equity::core::{Card, Suit, Value};
///
/// let card = Card::try_from("AS").unwrap();
/// assert_eq!(Card::new(Value::Ace, Suit::Spade), card);
/// assert!(Card::try_from("AX").is_err());
/// ```
impl TryFrom<&str> for Card {
    type Error = EquityError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let mut chars = token.chars();
        let card = next_card(&mut chars)?.ok_or(EquityError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(EquityError::UnparsedCharsRemaining);
        }
        Ok(card)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<String> for Card {
    type Error = EquityError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Card::try_from(token.as_str())
    }
}

#[cfg(feature = "serde")]
impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Pull the next card out of a character stream.
///
/// Returns `Ok(None)` when the stream is exhausted before a value
/// character.
pub(crate) fn next_card<I>(chars: &mut I) -> Result<Option<Card>, EquityError>
where
    I: Iterator<Item = char>,
{
    let Some(vc) = chars.next() else {
        return Ok(None);
    };
    let value = Value::from_char(vc).ok_or(EquityError::UnexpectedValueChar(vc))?;
    let sc = chars.next().ok_or(EquityError::TooFewChars)?;
    let suit = Suit::from_char(sc).ok_or(EquityError::UnexpectedSuitChar(sc))?;
    Ok(Some(Card { value, suit }))
}

/// Parse an ordered list of cards, for example a known board.
/// Whitespace and commas between cards are ignored. Order is kept
/// and duplicates are not checked here; the equity entry points
/// reject them.
///
/// ```
/// use holdem_equity::core::parse_cards;
///
/// let board = parse_cards("QH 2S 9D").unwrap();
/// assert_eq!(3, board.len());
/// assert_eq!("QH", board[0].to_string());
/// ```
pub fn parse_cards(cards: &str) -> Result<Vec<Card>, EquityError> {
    let mut chars = cards
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',');
    let mut result = Vec::new();
    while let Some(card) = next_card(&mut chars)? {
        result.push(card);
    }
    Ok(result)
}
