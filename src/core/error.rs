use thiserror::Error;

use super::Card;

/// Why a set of cards handed to the evaluator or the equity engine
/// can't be used.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvalidCardSet {
    #[error("Card {0} is used more than once")]
    DuplicateCard(Card),
    #[error("Hole cards must be exactly 2 cards, found {0}")]
    HoleCardCount(usize),
    #[error("A known board holds at most 5 cards, found {0}")]
    BoardSize(usize),
    #[error("Only 5, 6, or 7 cards can be evaluated, found {0}")]
    EvaluationSize(usize),
    #[error("At least one opponent is needed")]
    NoOpponents,
    #[error("At most {max} players are supported, found {found}")]
    TooManyPlayers { found: usize, max: usize },
}

/// This is the core error type for the library. It uses `thiserror`
/// to provide readable error messages.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EquityError {
    #[error("Unable to parse value from '{0}'")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit from '{0}'")]
    UnexpectedSuitChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Invalid card set: {0}")]
    InvalidCardSet(#[from] InvalidCardSet),
    #[error("Completing the board needs {needed} cards but only {remaining} remain in the deck")]
    InsufficientDeck { needed: usize, remaining: usize },
    #[error("No candidate boards to compute equity over")]
    NoCandidates,
    #[error("No estimates to summarize")]
    NoEstimates,
}
