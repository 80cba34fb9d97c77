//! A scripted player, for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use rand::RngCore;

use super::{Card, Player, PlayerError, PlayerState, Suit};

#[derive(Debug, Default, Clone)]
struct Inner {
    bids: VecDeque<u32>,
    trump: Option<Suit>,
    cards: VecDeque<Card>,
    retries: usize,
    errors: Vec<PlayerError>,
}

/// Plays back canned bids and cards, in order.
#[derive(Debug, Default)]
pub struct Scripted(Mutex<Inner>);

impl Player for Scripted {
    fn bid(&self, _: &PlayerState) -> u32 {
        let mut inner = self.0.lock().unwrap();
        inner.bids.pop_front().expect("scripted bid")
    }

    fn choose_trump(&self, _: &PlayerState) -> Suit {
        let inner = self.0.lock().unwrap();
        inner.trump.expect("scripted trump")
    }

    fn lead_card(&self, _: &PlayerState, _: &mut dyn RngCore) -> Card {
        let mut inner = self.0.lock().unwrap();
        inner.cards.pop_front().expect("scripted lead")
    }

    fn follow_card(&self, _: &PlayerState, _: &mut dyn RngCore) -> Card {
        let mut inner = self.0.lock().unwrap();
        inner.cards.pop_front().expect("scripted follow")
    }

    fn handle_error(&self, err: PlayerError) -> bool {
        let mut inner = self.0.lock().unwrap();
        inner.errors.push(err);
        if inner.retries > 0 {
            inner.retries -= 1;
            true
        } else {
            false
        }
    }
}

impl Scripted {
    pub fn into_player(self) -> Arc<dyn Player> {
        Arc::new(self)
    }

    pub fn bids(self, bids: &[u32]) -> Self {
        self.0.lock().unwrap().bids.extend(bids);
        self
    }

    pub fn trump(self, suit: Suit) -> Self {
        self.0.lock().unwrap().trump.replace(suit);
        self
    }

    pub fn cards<I: IntoIterator<Item = Card>>(self, cards: I) -> Self {
        self.0.lock().unwrap().cards.extend(cards);
        self
    }

    /// Allows this many rejected choices to be retried.
    pub fn retries(self, retries: usize) -> Self {
        self.0.lock().unwrap().retries = retries;
        self
    }

    /// Errors reported to this player so far.
    pub fn errors(&self) -> Vec<PlayerError> {
        self.0.lock().unwrap().errors.clone()
    }
}
