//! Tricks played during a game.

use std::convert::TryFrom;

use delegate::delegate;

use super::{Seat, Trick};

/// Tricks played this game.
#[derive(Debug, Clone)]
pub struct Tricks {
    tricks: Vec<Trick>,
    /// Number of cards in a completed trick, one per player.
    trick_size: usize,
    /// Number of tricks in the game.
    total: usize,
}

impl Tricks {
    delegate! {
        to self.tricks {
            pub fn len(&self) -> usize;
            pub fn last(&self) -> Option<&Trick>;
            pub fn last_mut(&mut self) -> Option<&mut Trick>;
        }
    }

    /// Creates an empty set of tricks for `players` players, playing `total` tricks.
    pub fn new(players: usize, total: usize) -> Self {
        Self {
            tricks: Vec::with_capacity(total),
            trick_size: players,
            total,
        }
    }

    /// Creates a new trick.
    pub fn push(&mut self, trick: Trick) {
        assert!(self.len() < self.total);
        self.tricks.push(trick);
    }

    /// The trick in progress, if one has been led and is not yet complete.
    pub fn current(&self) -> Option<&Trick> {
        self.last().filter(|t| t.len() < self.trick_size)
    }

    /// Iterates over completed tricks.
    pub fn completed(&self) -> impl Iterator<Item = &Trick> {
        self.tricks.iter().filter(|t| t.len() == self.trick_size)
    }

    /// Number of completed tricks.
    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }

    /// True once every trick has been played out.
    pub fn is_done(&self) -> bool {
        self.completed_count() == self.total
    }

    /// Counts the number of completed tricks won by the specified player.
    pub fn win_count(&self, seat: Seat) -> u8 {
        let count = self.completed().filter(|t| t.best().0 == seat).count();
        u8::try_from(count).expect("less than 256")
    }

    /// Completed trick counts for every player, in seat order.
    pub fn win_counts(&self) -> Vec<u8> {
        Seat::all_seats(self.trick_size)
            .map(|seat| self.win_count(seat))
            .collect()
    }
}
