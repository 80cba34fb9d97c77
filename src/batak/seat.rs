//! Table position.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Table position, as a zero-based index in clockwise seat order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat(usize);

impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

impl From<usize> for Seat {
    fn from(index: usize) -> Self {
        Seat(index)
    }
}

impl Seat {
    /// All table positions for a table of `n` players, in clockwise order.
    pub fn all_seats(n: usize) -> impl Iterator<Item = Seat> {
        (0..n).map(Seat)
    }

    /// Zero-based seat index.
    pub fn index(self) -> usize {
        self.0
    }

    /// The next table position, in clockwise order.
    pub fn next(self, n: usize) -> Seat {
        Seat((self.0 + 1) % n)
    }
}
