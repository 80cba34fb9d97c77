//! Initial conditions for a game.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Card, Deck, GameError};

/// The most players a 52-card deck can serve one card each.
pub const MAX_PLAYERS: usize = 52;

/// Configuration & initial conditions for a game: each player's hand, as dealt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    hands: Vec<Vec<Card>>,
}

impl GameConfig {
    /// Deals `deck` round-robin to `players` players.
    ///
    /// The deck must divide evenly between the players, unless `allow_remainder` is set, in which
    /// case the remainder is never dealt.
    pub fn new(players: usize, deck: Deck, allow_remainder: bool) -> Result<Self, GameError> {
        check_players(players)?;
        if deck.len() < players {
            return Err(GameError::DegenerateConfiguration(format!(
                "{} cards cannot serve {players} players",
                deck.len()
            )));
        }
        if !allow_remainder && deck.len() % players != 0 {
            return Err(GameError::DegenerateConfiguration(format!(
                "{} cards do not divide evenly between {players} players",
                deck.len()
            )));
        }
        Self::from_hands(deck.deal_even(players))
    }

    /// Deals a freshly shuffled standard deck.
    pub fn random<R: Rng + ?Sized>(
        players: usize,
        allow_remainder: bool,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let deck: Deck = rng.gen();
        Self::new(players, deck, allow_remainder)
    }

    /// Creates a configuration from hands that have already been dealt.
    pub fn from_hands(hands: Vec<Vec<Card>>) -> Result<Self, GameError> {
        let config = Self { hands };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GameError> {
        check_players(self.hands.len())?;
        let size = self.hand_size();
        if size == 0 {
            return Err(GameError::DegenerateConfiguration("empty hands".into()));
        }
        if self.hands.iter().any(|h| h.len() != size) {
            return Err(GameError::DegenerateConfiguration(
                "hands differ in size".into(),
            ));
        }
        let mut seen: HashSet<Card> = HashSet::with_capacity(size * self.hands.len());
        for &card in self.hands.iter().flatten() {
            if !seen.insert(card) {
                return Err(GameError::DuplicateCard(card));
            }
        }
        Ok(())
    }

    /// Number of players.
    pub fn players(&self) -> usize {
        self.hands.len()
    }

    /// Cards per hand, which is also the number of tricks played.
    pub fn hand_size(&self) -> usize {
        self.hands.first().map_or(0, Vec::len)
    }

    /// Each player's hand, as dealt.
    pub fn into_hands(self) -> Vec<Vec<Card>> {
        self.hands
    }
}

fn check_players(players: usize) -> Result<(), GameError> {
    if players < 2 {
        Err(GameError::DegenerateConfiguration(format!(
            "{players} players; at least 2 are required"
        )))
    } else if players > MAX_PLAYERS {
        Err(GameError::DegenerateConfiguration(format!(
            "{players} players; at most {MAX_PLAYERS} are supported"
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_four_players_thirteen_each() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let config = GameConfig::random(4, false, &mut rng).unwrap();
        assert_eq!(4, config.players());
        assert_eq!(13, config.hand_size());
    }

    #[test]
    fn test_degenerate_player_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for players in [0, 1, 53] {
            assert_matches!(
                GameConfig::random(players, true, &mut rng),
                Err(GameError::DegenerateConfiguration(_))
            );
        }
        assert_matches!(
            GameConfig::random(5, false, &mut rng),
            Err(GameError::DegenerateConfiguration(_))
        );
        let config = GameConfig::random(5, true, &mut rng).unwrap();
        assert_eq!(10, config.hand_size());
    }

    #[test]
    fn test_from_hands_rejects_duplicates() {
        fn card(s: &str) -> Card {
            Card::from_str(s).unwrap()
        }
        assert_matches!(
            GameConfig::from_hands(vec![vec![card("as")], vec![card("as")]]),
            Err(GameError::DuplicateCard(c)) if c == card("as")
        );
        assert_matches!(
            GameConfig::from_hands(vec![vec![card("as")], vec![card("ks"), card("qs")]]),
            Err(GameError::DegenerateConfiguration(_))
        );
        assert_matches!(
            GameConfig::from_hands(vec![vec![], vec![]]),
            Err(GameError::DegenerateConfiguration(_))
        );
    }

    proptest! {
        #[test]
        fn prop_deal_partitions_deck(seed in any::<u64>(), players in 1usize..=52) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let deck: Deck = rand::Rng::gen(&mut rng);
            let hands = deck.deal(players);
            prop_assert_eq!(players, hands.len());

            let mut seen = HashSet::new();
            for card in hands.iter().flatten() {
                prop_assert!(seen.insert(*card), "{} dealt twice", card);
            }
            prop_assert_eq!(52, seen.len());

            let min = hands.iter().map(Vec::len).min().unwrap();
            let max = hands.iter().map(Vec::len).max().unwrap();
            prop_assert!(max - min <= 1);
        }
    }
}
