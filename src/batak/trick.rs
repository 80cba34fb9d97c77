//! Trick

use std::fmt::Display;

use serde::Serialize;

use crate::batak::{Card, Seat, Suit};

/// A trick played during a game.
#[derive(Debug, Clone, Serialize)]
pub struct Trick {
    /// The trump suit for this trick.
    pub trump: Suit,
    /// The cards that have been played into this trick, in play order.
    pub cards: Vec<(Seat, Card)>,
    /// The index of the best card played.
    pub best: usize,
}

impl Display for Trick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, (seat, card)) in self.cards.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:{card}", seat.index() + 1)?;
        }
        write!(f, "]")
    }
}

impl Trick {
    /// Creates a new trick.
    pub fn new(trump: Suit, leader: Seat, card: Card) -> Self {
        Self {
            trump,
            cards: vec![(leader, card)],
            best: 0,
        }
    }

    /// The number of cards played into this trick.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// The lead card.
    pub fn lead(&self) -> (Seat, Card) {
        self.cards[0]
    }

    /// The suit led.
    pub fn led_suit(&self) -> Suit {
        self.lead().1.suit
    }

    /// The best card played so far.
    pub fn best(&self) -> (Seat, Card) {
        self.cards[self.best]
    }

    /// True if any trump card has been played into this trick.
    pub fn has_trump(&self) -> bool {
        self.cards.iter().any(|(_, c)| c.is_trump(self.trump))
    }

    /// Returns true if `card` would beat the current best card.
    ///
    /// Trump beats everything else, higher trump beats lower trump, and otherwise only a higher
    /// card of the led suit wins. Off-suit discards never win.
    pub fn beats_best(&self, card: Card) -> bool {
        let best = self.best().1;
        match (card.is_trump(self.trump), best.is_trump(self.trump)) {
            (true, false) => true,
            (false, true) => false,
            (true, true) => card.rank > best.rank,
            (false, false) => card.suit == self.led_suit() && card.rank > best.rank,
        }
    }

    /// Plays a card into the trick.
    pub fn play(&mut self, seat: Seat, card: Card) {
        if self.beats_best(card) {
            self.best = self.cards.len();
        }
        self.cards.push((seat, card));
    }
}
