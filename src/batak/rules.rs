//! Play legality and shared hand heuristics.
//!
//! Every player, robot or human, is held to the same legal-play sets. The engine checks each card
//! against them before it leaves a hand.

use itertools::Itertools;

use super::{Card, Suit};

/// Cards that may lead a new trick.
///
/// Until trump has been played, trump may only be led from a hand holding nothing else.
pub fn legal_leads(hand: &[Card], trump: Suit, trump_played: bool) -> Vec<Card> {
    if !trump_played {
        let non_trump = cards_where(hand, |c| !c.is_trump(trump));
        if !non_trump.is_empty() {
            return non_trump;
        }
    }
    hand.to_vec()
}

/// Cards that may follow a trick led in `led`.
///
/// Following suit is mandatory. A player void in the led suit must play trump once trump has been
/// broken, if they hold any; otherwise any card may be discarded.
pub fn legal_follows(hand: &[Card], led: Suit, trump: Suit, trump_played: bool) -> Vec<Card> {
    let following = cards_where(hand, |c| c.suit == led);
    if !following.is_empty() {
        return following;
    }
    if trump_played {
        let trumps = cards_where(hand, |c| c.is_trump(trump));
        if !trumps.is_empty() {
            return trumps;
        }
    }
    hand.to_vec()
}

/// Cards that may be played next: a lead when `led` is `None`, otherwise a follow.
pub fn legal_plays(hand: &[Card], led: Option<Suit>, trump: Suit, trump_played: bool) -> Vec<Card> {
    match led {
        None => legal_leads(hand, trump, trump_played),
        Some(led) => legal_follows(hand, led, trump, trump_played),
    }
}

/// Number of jacks, queens, kings and aces in the hand.
pub fn high_card_count(hand: &[Card]) -> usize {
    hand.iter().filter(|c| c.is_high()).count()
}

/// The suit with the most cards in the hand. Ties go to the first such suit in enumeration order.
pub fn longest_suit(hand: &[Card]) -> Suit {
    let counts = hand.iter().counts_by(|c| c.suit);
    let mut best = Suit::all_suits()[0];
    let mut best_count = 0;
    for &suit in Suit::all_suits() {
        let count = counts.get(&suit).copied().unwrap_or_default();
        if count > best_count {
            best = suit;
            best_count = count;
        }
    }
    best
}

/// Lowest-ranked card among `cards`. Equal ranks go to the earlier suit.
pub fn lowest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().min_by_key(|c| (c.rank, c.suit))
}

/// Highest-ranked card among `cards`. Equal ranks go to the earlier suit.
pub fn highest(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .copied()
        .max_by_key(|c| (c.rank, std::cmp::Reverse(c.suit)))
}

fn cards_where<F: Fn(&Card) -> bool>(hand: &[Card], pred: F) -> Vec<Card> {
    hand.iter().copied().filter(pred).collect()
}
