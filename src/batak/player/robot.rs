//! Robot players
//!
//! Four fixed personalities. They differ in how eagerly they spend high cards and trump, and in
//! how far they raise the bidding per high card held. All of them pick only from the legal set.

use std::sync::Arc;

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::RngCore;

use crate::batak::{rules, Card, Player, PlayerState, Suit};

/// The personalities available for robot seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PersonalityKind {
    Conservative,
    Aggressive,
    Balanced,
    Opportunistic,
}

impl PersonalityKind {
    /// All personalities, in the order seats are assigned by default.
    pub fn all() -> &'static [PersonalityKind; 4] {
        static KINDS: [PersonalityKind; 4] = [
            PersonalityKind::Conservative,
            PersonalityKind::Aggressive,
            PersonalityKind::Balanced,
            PersonalityKind::Opportunistic,
        ];
        &KINDS
    }

    /// The default lineup for `n` seats, cycling through every personality.
    pub fn lineup(n: usize) -> Vec<PersonalityKind> {
        Self::all().iter().copied().cycle().take(n).collect()
    }

    pub fn into_player(self) -> Arc<dyn Player> {
        match self {
            PersonalityKind::Conservative => Arc::new(Conservative),
            PersonalityKind::Aggressive => Arc::new(Aggressive),
            PersonalityKind::Balanced => Arc::new(Balanced),
            PersonalityKind::Opportunistic => Arc::new(Opportunistic),
        }
    }
}

/// Raises the highest competing bid by `step`, never dropping below the player's own bid nor
/// rising above the number of tricks.
fn raise(state: &PlayerState, step: u32) -> u32 {
    let target = state.high_bid().saturating_add(step).min(state.max_bid);
    state.bid.max(target)
}

fn high_cards(state: &PlayerState) -> u32 {
    rules::high_card_count(state.hand) as u32
}

fn trump(state: &PlayerState) -> Suit {
    state.trump().expect("trump declared before play")
}

/// Legal cards other than trump, if there are any.
fn prefer_non_trump(state: &PlayerState, legal: Vec<Card>) -> Vec<Card> {
    let trump = trump(state);
    let non_trump: Vec<_> = legal.iter().copied().filter(|c| !c.is_trump(trump)).collect();
    if non_trump.is_empty() {
        legal
    } else {
        non_trump
    }
}

/// Like [`prefer_non_trump`], but only while trump is unbroken.
fn sparing_trump(state: &PlayerState, legal: Vec<Card>) -> Vec<Card> {
    if state.trump_played {
        legal
    } else {
        prefer_non_trump(state, legal)
    }
}

fn high_only(cards: &[Card]) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.is_high()).collect()
}

fn must(card: Option<Card>) -> Card {
    card.expect("legal set is non-empty")
}

/// Plays low and bids cautiously.
#[derive(Debug, Default)]
pub struct Conservative;

impl Player for Conservative {
    fn bid(&self, state: &PlayerState) -> u32 {
        raise(state, (high_cards(state) / 2).max(1))
    }

    fn lead_card(&self, state: &PlayerState, _: &mut dyn RngCore) -> Card {
        let legal = prefer_non_trump(state, state.legal_plays());
        must(rules::lowest(&legal))
    }

    fn follow_card(&self, state: &PlayerState, _: &mut dyn RngCore) -> Card {
        must(rules::lowest(&state.legal_plays()))
    }
}

/// Plays high, and bids a trick for every high card.
#[derive(Debug, Default)]
pub struct Aggressive;

impl Player for Aggressive {
    fn bid(&self, state: &PlayerState) -> u32 {
        raise(state, high_cards(state))
    }

    fn lead_card(&self, state: &PlayerState, _: &mut dyn RngCore) -> Card {
        must(rules::highest(&state.legal_plays()))
    }

    fn follow_card(&self, state: &PlayerState, _: &mut dyn RngCore) -> Card {
        let legal = state.legal_plays();
        let high = high_only(&legal);
        let pool = if high.is_empty() { legal } else { high };
        // Spend big while trump is unbroken, save them once it is.
        if state.trump_played {
            must(rules::lowest(&pool))
        } else {
            must(rules::highest(&pool))
        }
    }
}

/// Leads at random, and follows high until trump is broken.
#[derive(Debug, Default)]
pub struct Balanced;

impl Player for Balanced {
    fn bid(&self, state: &PlayerState) -> u32 {
        raise(state, (high_cards(state) / 3).max(1))
    }

    fn lead_card(&self, state: &PlayerState, rng: &mut dyn RngCore) -> Card {
        let legal = sparing_trump(state, state.legal_plays());
        must(legal.choose(rng).copied())
    }

    fn follow_card(&self, state: &PlayerState, _: &mut dyn RngCore) -> Card {
        let legal = state.legal_plays();
        if state.trump_played {
            must(rules::lowest(&legal))
        } else {
            must(rules::highest(&legal))
        }
    }
}

/// Cashes in high cards at the first chance.
#[derive(Debug, Default)]
pub struct Opportunistic;

impl Player for Opportunistic {
    fn bid(&self, state: &PlayerState) -> u32 {
        raise(state, (high_cards(state) / 4).max(1))
    }

    fn lead_card(&self, state: &PlayerState, _: &mut dyn RngCore) -> Card {
        let legal = sparing_trump(state, state.legal_plays());
        let high = high_only(&legal);
        must(rules::lowest(&high).or_else(|| rules::lowest(&legal)))
    }

    fn follow_card(&self, state: &PlayerState, _: &mut dyn RngCore) -> Card {
        let legal = state.legal_plays();
        if !state.trump_played {
            if let Some(card) = rules::highest(&high_only(&legal)) {
                return card;
            }
        }
        must(rules::lowest(&legal))
    }
}
