use std::ops::Index;
use std::sync::Arc;

use rand::RngCore;

use super::{rules, ActionData, ActionType, Card, Event, PlayerError, PlayerState, Seat, Suit};

mod console;
mod robot;
#[cfg(test)]
mod scripted;
pub use console::Console;
pub use robot::PersonalityKind;
#[cfg(test)]
pub use scripted::Scripted;

/// A trait that implements a player's decisions.
///
/// Every choice must come from the legal set for the current state. The game validates each
/// choice, and rejects it without applying anything if it doesn't.
pub trait Player {
    /// Bids a target number of tricks. The bid must be at least [`PlayerState::bid`], the player's
    /// own previous bid, and at most [`PlayerState::max_bid`].
    fn bid(&self, state: &PlayerState) -> u32;

    /// Names trump after winning the bidding.
    ///
    /// By default, this is the suit with the most cards in hand.
    fn choose_trump(&self, state: &PlayerState) -> Suit {
        rules::longest_suit(state.hand)
    }

    /// Leads a new trick. The card must come from the player's hand.
    fn lead_card(&self, state: &PlayerState, rng: &mut dyn RngCore) -> Card;

    /// Plays a card into an opened trick. The card must come from the player's hand, and must
    /// follow the lead suit when possible.
    fn follow_card(&self, state: &PlayerState, rng: &mut dyn RngCore) -> Card;

    /// A notification of an event that all players can see.
    fn notify(&self, _state: &PlayerState, _event: &Event) {}

    /// Indicates that the player has made an invalid choice.
    ///
    /// The implementation may return true, if a retry is desired. Otherwise, the invalid choice
    /// will be converted into a fatal error.
    fn handle_error(&self, _err: PlayerError) -> bool {
        false
    }
}

/// Asks the player for the payload of the expected action.
pub fn take_action(
    player: &dyn Player,
    state: &PlayerState,
    action: ActionType,
    rng: &mut dyn RngCore,
) -> ActionData {
    match action {
        ActionType::Bid => ActionData::Bid {
            bid: player.bid(state),
        },
        ActionType::ChooseTrump => ActionData::Trump {
            suit: player.choose_trump(state),
        },
        ActionType::Lead => ActionData::Card {
            card: player.lead_card(state, rng),
        },
        ActionType::Follow => ActionData::Card {
            card: player.follow_card(state, rng),
        },
    }
}

/// A collection of players, indexed by table position.
pub struct Players(Vec<Arc<dyn Player>>);

impl Index<Seat> for Players {
    type Output = Arc<dyn Player>;
    fn index(&self, index: Seat) -> &Self::Output {
        &self.0[index.index()]
    }
}

impl FromIterator<Arc<dyn Player>> for Players {
    fn from_iter<T: IntoIterator<Item = Arc<dyn Player>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Players {
    /// Number of players.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns an iterator over players, with their table positions.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &Arc<dyn Player>)> {
        self.0.iter().enumerate().map(|(i, p)| (Seat::from(i), p))
    }
}
