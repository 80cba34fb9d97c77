//! Actions

use std::fmt::Display;

use super::{Card, Seat, Suit};

/// Types of actions that a player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    /// Bid for the number of tricks to take.
    Bid,
    /// The winning bidder names trump.
    ChooseTrump,
    /// Lead a new trick.
    Lead,
    /// Follow a pending trick.
    Follow,
}
impl Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ActionType::Bid => "bid",
            ActionType::ChooseTrump => "choose trump",
            ActionType::Lead => "lead",
            ActionType::Follow => "follow",
        })
    }
}

/// The payload for actions that a player can take during the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionData {
    /// Declare a target trick count.
    Bid { bid: u32 },

    /// Declare trump.
    Trump { suit: Suit },

    /// Play a card.
    Card { card: Card },
}

/// The action that the game's state machine expects to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectAction {
    /// The player expected to take the action.
    pub seat: Seat,
    /// The type of action.
    pub action: ActionType,
}

impl ExpectAction {
    /// Create a new [`ExpectAction`].
    pub fn new(seat: Seat, action: ActionType) -> Self {
        Self { seat, action }
    }

    /// Bind in a payload to create an [`Action`].
    pub fn with_data(self, data: ActionData) -> Action {
        Action::new(self.seat, self.action, data)
    }
}

/// An action taken by a player during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    /// The player taking the action.
    pub seat: Seat,
    /// The type of action.
    pub action: ActionType,
    /// The action payload.
    pub data: ActionData,
}

impl Action {
    /// Create a new [`Action`].
    pub fn new(seat: Seat, action: ActionType, data: ActionData) -> Self {
        Self { seat, action, data }
    }
}
