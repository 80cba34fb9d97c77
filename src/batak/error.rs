//! Error types

use super::{ActionType, Card, Seat};

/// A player supplied a value that the rules reject. Nothing was applied; the player may retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// The player doesn't actually hold the card they attempted to play.
    #[error("{0} does not hold {1}")]
    CardNotHeld(Seat, Card),

    /// The card is held, but is not in the legal set for this trick.
    #[error("{0} may not play {1}")]
    IllegalPlay(Seat, Card),

    /// A bid may never fall below the player's own previous bid, nor exceed the number of tricks.
    #[error("{seat} bid {bid}, must bid from {min} to {max}")]
    InvalidBid {
        seat: Seat,
        bid: u32,
        min: u32,
        max: u32,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("degenerate configuration: {0}")]
    DegenerateConfiguration(String),
    #[error("deck contains duplicate card {0}")]
    DuplicateCard(Card),
    #[error("action contains invalid data")]
    InvalidActionData,
    #[error("expected {seat} to {action}")]
    ExpectActioned { seat: Seat, action: ActionType },
    #[error("game over")]
    GameOver,
    #[error(transparent)]
    Player(#[from] PlayerError),
}
