//! Final scores.

use std::fmt::Display;

use serde::Serialize;

use super::{Contract, Seat};

/// Score given to any player who takes no tricks at all.
pub const ZERO_TRICK_PENALTY: i32 = -10;

/// Computes each player's score from their trick counts.
///
/// A player scores one point per trick. The contract's bidder scores minus their bid if they fall
/// short of it. Anyone who takes no tricks scores [`ZERO_TRICK_PENALTY`] instead, whatever else
/// applied; the penalties replace the score, they never add up.
pub fn score(tricks: &[u8], contract: &Contract) -> Vec<i32> {
    tricks
        .iter()
        .enumerate()
        .map(|(i, &won)| {
            if won == 0 {
                ZERO_TRICK_PENALTY
            } else if Seat::from(i) == contract.bidder && u32::from(won) < contract.bid {
                -i32::try_from(contract.bid).unwrap_or(i32::MAX)
            } else {
                i32::from(won)
            }
        })
        .collect()
}

/// The outcome of a completed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// The winning bid and trump.
    pub contract: Contract,
    /// Tricks won per player, in seat order.
    pub tricks: Vec<u8>,
    /// Final score per player, in seat order.
    pub scores: Vec<i32>,
}

impl GameResult {
    /// Scores the game.
    pub fn new(contract: Contract, tricks: Vec<u8>) -> Self {
        let scores = score(&tricks, &contract);
        Self {
            contract,
            tricks,
            scores,
        }
    }

    /// True if the bidder took at least as many tricks as they bid.
    pub fn contract_made(&self) -> bool {
        u32::from(self.tricks[self.contract.bidder.index()]) >= self.contract.bid
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (score, tricks)) in self.scores.iter().zip(&self.tricks).enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {score} ({tricks} tricks)", Seat::from(i))?;
        }
        Ok(())
    }
}
