//! Game management.
//!
//! A game is dealt once, bid for once, and then played out one trick per card in hand. The winning
//! bidder names trump and leads the first trick; each trick's winner leads the next.
//!
//! ## State management
//!
//! The game begins in an initial state, after cards have been dealt. To advance the state of the
//! game, players are required to take actions. The identity of the next player and the action they
//! are expected to take is always known deterministically, and may be obtained via
//! [`next_action`](`Game::next_action`). Once a player has chosen an action, it is applied using
//! [`apply_action`](`Game::apply_action`). An action that fails validation changes nothing.
//!
//! ## Events
//!
//! Certain actions trigger events, such as the end of a trick. These events are stored in a queue,
//! which may be drained using [`pop_event`](`Game::pop_event`).

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    rules, Action, ActionData, ActionType, BidClose, BidRound, BidWinner, Card, Event,
    ExpectAction, GameConfig, GameError, GameResult, PlayerError, Seat, Suit, Trick, Tricks,
};

/// The contract established by the winning bidder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// The winning bidder.
    pub bidder: Seat,
    /// The number of tricks they must take.
    pub bid: u32,
    /// The trump suit they named.
    pub trump: Suit,
}

/// A single game.
#[derive(Debug)]
pub struct Game {
    hands: Vec<Vec<Card>>,
    bidding: BidRound,
    contract: Option<Contract>,
    tricks: Tricks,
    /// Leads the next trick.
    leader: Seat,
    /// Set once any trump card has been led or played; never cleared within a game.
    trump_played: bool,
    events: VecDeque<Event>,
    result: Option<GameResult>,
}

impl From<GameConfig> for Game {
    fn from(config: GameConfig) -> Self {
        let players = config.players();
        let total = config.hand_size();
        let max_bid = u32::try_from(total).expect("hands fit in a deck");
        Self {
            hands: config.into_hands(),
            bidding: BidRound::new(players, max_bid),
            contract: None,
            tricks: Tricks::new(players, total),
            leader: Seat::from(0),
            trump_played: false,
            events: VecDeque::new(),
            result: None,
        }
    }
}

impl Game {
    /// Number of players.
    pub fn players(&self) -> usize {
        self.hands.len()
    }

    /// The outcome of the game, once it is over.
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Returns the next action that's required to advance the state of the game, or `None` if the
    /// game is over.
    pub fn next_action(&self) -> Option<ExpectAction> {
        if let Some(seat) = self.bidding.next_bidder() {
            return Some(ExpectAction::new(seat, ActionType::Bid));
        }
        if self.contract.is_none() {
            let winner = self.bidding.winner()?;
            return Some(ExpectAction::new(winner.seat, ActionType::ChooseTrump));
        }
        if self.tricks.is_done() {
            return None;
        }
        match self.tricks.current() {
            None => Some(ExpectAction::new(self.leader, ActionType::Lead)),
            Some(trick) => {
                let (last, _) = trick.cards[trick.len() - 1];
                Some(ExpectAction::new(
                    last.next(self.players()),
                    ActionType::Follow,
                ))
            }
        }
    }

    /// Returns a bundle of state visible to the specified player.
    pub fn player_state(&self, seat: Seat) -> PlayerState<'_> {
        PlayerState {
            seat,
            hand: &self.hands[seat.index()],
            contract: self.contract,
            trump_played: self.trump_played,
            trick: self.tricks.current(),
            bid: self.bidding.bid(seat),
            max_bid: self.bidding.max_bid(),
            other_bids: self.bidding.other_bids(seat),
        }
    }

    /// Pops the oldest event from the queue of events.
    pub fn pop_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Applies the specified action. The random source breaks deadlocked bidding.
    pub fn apply_action<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let expect = self.next_action().ok_or(GameError::GameOver)?;
        if expect.seat != action.seat || expect.action != action.action {
            return Err(GameError::ExpectActioned {
                seat: expect.seat,
                action: expect.action,
            });
        }
        match (action.action, action.data) {
            (ActionType::Bid, ActionData::Bid { bid }) => self.apply_bid(action.seat, bid, rng),
            (ActionType::ChooseTrump, ActionData::Trump { suit }) => {
                self.apply_trump(action.seat, suit);
                Ok(())
            }
            (ActionType::Lead | ActionType::Follow, ActionData::Card { card }) => {
                self.apply_card(action.seat, card)
            }
            _ => Err(GameError::InvalidActionData),
        }
    }

    fn apply_bid<R: Rng + ?Sized>(
        &mut self,
        seat: Seat,
        bid: u32,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let close = self.bidding.place(seat, bid, rng)?;
        self.events.push_back(Event::Bid(seat, bid));
        match close {
            BidClose::Open => (),
            BidClose::Tied(contenders) => self.events.push_back(Event::BiddingTied(contenders)),
            BidClose::Resolved(winner) => {
                info!(
                    seat = %winner.seat,
                    bid = winner.bid,
                    forced = winner.forced,
                    rounds = self.bidding.rounds(),
                    "bidding resolved"
                );
                self.events.push_back(Event::BidWon(winner));
            }
        }
        Ok(())
    }

    fn apply_trump(&mut self, seat: Seat, trump: Suit) {
        let BidWinner { bid, .. } = self.bidding.winner().expect("bidding resolved");
        let contract = Contract {
            bidder: seat,
            bid,
            trump,
        };
        info!(bidder = %seat, bid, %trump, "contract");
        self.contract = Some(contract);
        self.leader = seat;
        self.events.push_back(Event::Contract(contract));
    }

    fn apply_card(&mut self, seat: Seat, card: Card) -> Result<(), GameError> {
        let trump = self.contract.expect("contract declared").trump;
        let led = self.tricks.current().map(Trick::led_suit);

        let hand = &self.hands[seat.index()];
        let Some(idx) = hand.iter().position(|c| *c == card) else {
            return Err(PlayerError::CardNotHeld(seat, card).into());
        };
        if !rules::legal_plays(hand, led, trump, self.trump_played).contains(&card) {
            return Err(PlayerError::IllegalPlay(seat, card).into());
        }

        self.hands[seat.index()].remove(idx);
        if card.is_trump(trump) && !self.trump_played {
            debug!(%seat, %card, "trump broken");
            self.trump_played = true;
        }

        if led.is_some() {
            debug!(%seat, %card, "follow");
            let trick = self.tricks.last_mut().expect("trick in progress");
            trick.play(seat, card);
            self.events.push_back(Event::Play(seat, card));
        } else {
            debug!(%seat, %card, "lead");
            self.tricks.push(Trick::new(trump, seat, card));
            self.events.push_back(Event::Lead(seat, card));
        }

        if self.tricks.current().is_none() {
            self.collect_trick();
        }
        Ok(())
    }

    /// Records the winner of the trick that was just completed.
    fn collect_trick(&mut self) {
        let trick = self.tricks.last().expect("trick played").clone();
        let (winner, card) = trick.best();
        info!(
            trick = self.tricks.len(),
            %winner,
            %card,
            trumped = trick.has_trump(),
            "trick won"
        );
        self.leader = winner;
        self.events.push_back(Event::Trick(trick));

        if self.tricks.is_done() {
            let contract = self.contract.expect("contract declared");
            let result = GameResult::new(contract, self.tricks.win_counts());
            info!(scores = ?result.scores, tricks = ?result.tricks, "game over");
            self.events.push_back(Event::Game(result.clone()));
            self.result = Some(result);
        }
    }
}

/// The state visible to a particular seat.
#[derive(Debug)]
pub struct PlayerState<'a> {
    /// The player who has access to this state.
    pub seat: Seat,
    /// The player's hand.
    pub hand: &'a Vec<Card>,
    /// The contract for this game, if one has been declared.
    pub contract: Option<Contract>,
    /// True once trump has been led or played.
    pub trump_played: bool,
    /// The trick in progress, if one has been led.
    pub trick: Option<&'a Trick>,
    /// The player's own bid so far; the floor for their next bid.
    pub bid: u32,
    /// The ceiling for any bid: the number of tricks in the game.
    pub max_bid: u32,
    /// Current bids of the other contenders.
    pub other_bids: Vec<u32>,
}

impl<'a> PlayerState<'a> {
    /// The trump suit, once declared.
    pub fn trump(&self) -> Option<Suit> {
        self.contract.map(|c| c.trump)
    }

    /// The suit led in the trick in progress.
    pub fn led_suit(&self) -> Option<Suit> {
        self.trick.map(Trick::led_suit)
    }

    /// The highest of the other contenders' bids, or zero.
    pub fn high_bid(&self) -> u32 {
        self.other_bids.iter().copied().max().unwrap_or(0)
    }

    /// Cards this player may legally play right now. Empty until trump has been declared.
    pub fn legal_plays(&self) -> Vec<Card> {
        match self.trump() {
            Some(trump) => rules::legal_plays(self.hand, self.led_suit(), trump, self.trump_played),
            None => vec![],
        }
    }

    /// Returns the player's hand, grouped by suit and sorted by rank.
    pub fn sorted_hand(&self) -> Vec<Card> {
        let mut cards = self.hand.clone();
        cards.sort_unstable_by_key(|c| c.display_key());
        cards
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use assert_matches::assert_matches;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| Card::from_str(c).unwrap())
            .collect()
    }

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    fn seat(i: usize) -> Seat {
        Seat::from(i)
    }

    fn game(hands: &[&str]) -> Game {
        let hands = hands.iter().map(|h| cards(h)).collect();
        GameConfig::from_hands(hands).unwrap().into()
    }

    fn apply(game: &mut Game, seat: usize, data: ActionData, rng: &mut ChaCha8Rng) {
        let expect = game.next_action().unwrap();
        assert_eq!(Seat::from(seat), expect.seat);
        game.apply_action(expect.with_data(data), rng).unwrap();
    }

    /// Bids so that `winner` takes the contract outright, then names `trump`.
    fn settle(game: &mut Game, winner: usize, bid: u32, trump: Suit, rng: &mut ChaCha8Rng) {
        for i in 0..game.players() {
            let bid = if i == winner { bid } else { 0 };
            apply(game, i, ActionData::Bid { bid }, rng);
        }
        apply(game, winner, ActionData::Trump { suit: trump }, rng);
    }

    #[test]
    fn test_bidding_then_trump_then_lead() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut game = game(&["2s 3s", "4s 5s", "6s 7s"]);
        assert_eq!(
            Some(ExpectAction::new(seat(0), ActionType::Bid)),
            game.next_action()
        );
        settle(&mut game, 1, 2, Suit::Heart, &mut rng);
        assert_eq!(
            Some(Contract {
                bidder: seat(1),
                bid: 2,
                trump: Suit::Heart
            }),
            game.contract
        );
        assert_eq!(
            Some(ExpectAction::new(seat(1), ActionType::Lead)),
            game.next_action()
        );
    }

    #[test]
    fn test_wrong_seat_or_action_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut game = game(&["2s 3s", "4s 5s"]);
        let action = Action::new(seat(1), ActionType::Bid, ActionData::Bid { bid: 1 });
        assert_matches!(
            game.apply_action(action, &mut rng),
            Err(GameError::ExpectActioned { seat: s, action: ActionType::Bid }) if s == seat(0)
        );
        let action = Action::new(seat(0), ActionType::Bid, ActionData::Trump { suit: Suit::Club });
        assert_matches!(
            game.apply_action(action, &mut rng),
            Err(GameError::InvalidActionData)
        );
    }

    #[test]
    fn test_illegal_play_changes_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut game = game(&["2h 5s", "4s 5h"]);
        settle(&mut game, 0, 1, Suit::Heart, &mut rng);

        // Trump may not be led before it is broken.
        let expect = game.next_action().unwrap();
        let err = game
            .apply_action(expect.with_data(ActionData::Card { card: card("2h") }), &mut rng)
            .unwrap_err();
        assert_matches!(err, GameError::Player(PlayerError::IllegalPlay(s, c)) if s == seat(0) && c == card("2h"));

        let err = game
            .apply_action(expect.with_data(ActionData::Card { card: card("as") }), &mut rng)
            .unwrap_err();
        assert_matches!(err, GameError::Player(PlayerError::CardNotHeld(..)));

        assert_eq!(cards("2h 5s"), game.hands[0]);
        assert_eq!(0, game.tricks.len());
        assert_eq!(Some(expect), game.next_action());
    }

    #[test]
    fn test_must_follow_suit() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut game = game(&["2s 5d", "4s 5h"]);
        settle(&mut game, 0, 1, Suit::Heart, &mut rng);
        apply(&mut game, 0, ActionData::Card { card: card("2s") }, &mut rng);
        let expect = game.next_action().unwrap();
        assert_eq!(ActionType::Follow, expect.action);
        let err = game
            .apply_action(expect.with_data(ActionData::Card { card: card("5h") }), &mut rng)
            .unwrap_err();
        assert_matches!(err, GameError::Player(PlayerError::IllegalPlay(..)));
        apply(&mut game, 1, ActionData::Card { card: card("4s") }, &mut rng);
        assert_eq!(vec![0, 1], game.tricks.win_counts());
    }

    #[test]
    fn test_trump_breaks_and_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        // Player 2 leads spades; player 3 is void and discards a heart (trump), breaking trump.
        let mut game = game(&["7s 2d 3c", "ks 9d 4c", "2h 3h ah"]);
        settle(&mut game, 1, 1, Suit::Heart, &mut rng);
        apply(&mut game, 1, ActionData::Card { card: card("ks") }, &mut rng);
        assert!(!game.trump_played);
        apply(&mut game, 2, ActionData::Card { card: card("2h") }, &mut rng);
        assert!(game.trump_played);
        apply(&mut game, 0, ActionData::Card { card: card("7s") }, &mut rng);

        assert_eq!(vec![0, 0, 1], game.tricks.win_counts());
        // The winner leads next, and may now lead trump.
        let expect = game.next_action().unwrap();
        assert_eq!(ExpectAction::new(seat(2), ActionType::Lead), expect);
        let state = game.player_state(seat(2));
        assert_eq!(cards("3h ah"), state.legal_plays());
    }

    #[test]
    fn test_trump_broken_mid_trick_binds_later_followers() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut game = game(&["7s 2d 3d", "2h 5c 6c", "3h 7c 8c"]);
        settle(&mut game, 0, 1, Suit::Heart, &mut rng);
        apply(&mut game, 0, ActionData::Card { card: card("7s") }, &mut rng);

        // Trump is unbroken, so a void follower may discard anything; a trump breaks it.
        assert_eq!(cards("2h 5c 6c"), game.player_state(seat(1)).legal_plays());
        apply(&mut game, 1, ActionData::Card { card: card("2h") }, &mut rng);
        assert!(game.trump_played);

        // The next void follower must now trump.
        assert_eq!(cards("3h"), game.player_state(seat(2)).legal_plays());
        let expect = game.next_action().unwrap();
        let err = game
            .apply_action(expect.with_data(ActionData::Card { card: card("7c") }), &mut rng)
            .unwrap_err();
        assert_matches!(err, GameError::Player(PlayerError::IllegalPlay(s, c)) if s == seat(2) && c == card("7c"));
        assert_eq!(cards("3h 7c 8c"), game.hands[2]);

        apply(&mut game, 2, ActionData::Card { card: card("3h") }, &mut rng);
        assert_eq!(vec![0, 0, 1], game.tricks.win_counts());
    }

    #[test]
    fn test_full_game_events_and_result() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut game = game(&["as ks", "2s 3s"]);
        settle(&mut game, 0, 2, Suit::Club, &mut rng);
        apply(&mut game, 0, ActionData::Card { card: card("as") }, &mut rng);
        apply(&mut game, 1, ActionData::Card { card: card("2s") }, &mut rng);
        apply(&mut game, 0, ActionData::Card { card: card("ks") }, &mut rng);
        apply(&mut game, 1, ActionData::Card { card: card("3s") }, &mut rng);

        assert_eq!(None, game.next_action());
        let result = game.result().unwrap();
        assert_eq!(vec![2, 0], result.tricks);
        assert_eq!(vec![2, -10], result.scores);
        assert_matches!(
            game.apply_action(
                Action::new(seat(0), ActionType::Lead, ActionData::Card { card: card("as") }),
                &mut rng
            ),
            Err(GameError::GameOver)
        );

        let mut events = vec![];
        while let Some(event) = game.pop_event() {
            events.push(event);
        }
        assert_matches!(events[0], Event::Bid(s, 2) if s == seat(0));
        assert_matches!(events[1], Event::Bid(s, 0) if s == seat(1));
        assert_matches!(events[2], Event::BidWon(BidWinner { bid: 2, .. }));
        assert_matches!(events[3], Event::Contract(Contract { trump: Suit::Club, .. }));
        assert_matches!(events[4], Event::Lead(..));
        assert_matches!(events[5], Event::Play(..));
        assert_matches!(events[6], Event::Trick(_));
        assert_matches!(events.last(), Some(Event::Game(_)));
    }
}
