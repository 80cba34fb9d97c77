//! Bidding negotiation.
//!
//! Bidding runs in rounds. In each round every remaining contender bids at least their own
//! previous bid, knowing only the other contenders' bids from the previous round. Whoever ties at
//! the round's highest bid stays in contention. A sole leader wins outright; after three tied rounds
//! in a row, a random contender is forced through with one more than their bid.
//!
//! No bid may exceed the number of tricks in the game.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::{PlayerError, Seat};

/// Consecutive tied rounds after which the winner is drawn at random.
pub const MAX_TIED_ROUNDS: u8 = 3;

/// How the last bidding round closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidClose {
    /// The round is still open: more contenders must bid.
    Open,
    /// The round tied; the listed number of contenders bid again.
    Tied(usize),
    /// A sole winner emerged.
    Resolved(BidWinner),
}

/// The winning bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidWinner {
    pub seat: Seat,
    pub bid: u32,
    /// True if the tie-break was drawn at random.
    pub forced: bool,
}

/// The state of the bidding negotiation.
#[derive(Debug, Clone)]
pub struct BidRound {
    /// Current bid per seat, as of the end of the last closed round.
    bids: Vec<u32>,
    /// Players still contending, in seat order.
    contenders: Vec<Seat>,
    /// Bids placed so far in the open round.
    pending: Vec<(Seat, u32)>,
    /// Consecutive tied rounds.
    tie_streak: u8,
    /// The most tricks anyone can take.
    max_bid: u32,
    /// Number of closed rounds.
    rounds: u32,
    winner: Option<BidWinner>,
}

impl BidRound {
    /// Starts bidding with every player contending and all bids at zero. Bids are capped at
    /// `max_bid`, the number of tricks to be played.
    pub fn new(players: usize, max_bid: u32) -> Self {
        Self {
            bids: vec![0; players],
            contenders: Seat::all_seats(players).collect(),
            pending: Vec::with_capacity(players),
            tie_streak: 0,
            max_bid,
            rounds: 0,
            winner: None,
        }
    }

    /// The next contender to bid, or `None` once bidding is resolved.
    pub fn next_bidder(&self) -> Option<Seat> {
        if self.winner.is_some() {
            return None;
        }
        self.contenders.get(self.pending.len()).copied()
    }

    /// The winning bid, once resolved.
    pub fn winner(&self) -> Option<BidWinner> {
        self.winner
    }

    /// The player's bid as of the last closed round. This is the floor for their next bid.
    pub fn bid(&self, seat: Seat) -> u32 {
        self.bids[seat.index()]
    }

    /// The highest bid allowed.
    pub fn max_bid(&self) -> u32 {
        self.max_bid
    }

    /// Current bids of the other contenders.
    pub fn other_bids(&self, seat: Seat) -> Vec<u32> {
        self.contenders
            .iter()
            .filter(|&&s| s != seat)
            .map(|s| self.bid(*s))
            .collect()
    }

    /// Number of closed rounds.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Validates a bid without recording it.
    pub fn check(&self, seat: Seat, bid: u32) -> Result<(), PlayerError> {
        let min = self.bid(seat);
        let max = self.max_bid;
        if bid < min || bid > max {
            Err(PlayerError::InvalidBid { seat, bid, min, max })
        } else {
            Ok(())
        }
    }

    /// Records a bid from the next bidder, closing the round once every contender has bid.
    ///
    /// The caller is responsible for ensuring that `seat` is the [`next_bidder`](Self::next_bidder).
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        seat: Seat,
        bid: u32,
        rng: &mut R,
    ) -> Result<BidClose, PlayerError> {
        debug_assert_eq!(Some(seat), self.next_bidder());
        self.check(seat, bid)?;
        debug!(%seat, bid, round = self.rounds + 1, "bid");
        self.pending.push((seat, bid));
        if self.pending.len() < self.contenders.len() {
            return Ok(BidClose::Open);
        }
        Ok(self.close(rng))
    }

    fn close<R: Rng + ?Sized>(&mut self, rng: &mut R) -> BidClose {
        self.rounds += 1;
        let mut high = 0;
        for (seat, bid) in self.pending.drain(..) {
            self.bids[seat.index()] = bid;
            high = high.max(bid);
        }
        let bids = &self.bids;
        self.contenders.retain(|s| bids[s.index()] == high);

        if self.contenders.len() == 1 {
            self.tie_streak = 0;
            return self.resolve(self.contenders[0], false);
        }

        self.tie_streak += 1;
        if self.tie_streak >= MAX_TIED_ROUNDS {
            let seat = *self.contenders.choose(rng).expect("contenders are non-empty");
            self.bids[seat.index()] += 1;
            self.contenders = vec![seat];
            return self.resolve(seat, true);
        }
        debug!(
            contenders = self.contenders.len(),
            high,
            tie_streak = self.tie_streak,
            "bidding tied"
        );
        BidClose::Tied(self.contenders.len())
    }

    fn resolve(&mut self, seat: Seat, forced: bool) -> BidClose {
        let winner = BidWinner {
            seat,
            bid: self.bid(seat),
            forced,
        };
        self.winner = Some(winner);
        BidClose::Resolved(winner)
    }
}
