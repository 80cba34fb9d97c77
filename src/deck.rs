//! A deck of cards.

use std::iter::FromIterator;

use rand::distributions::{Distribution, Standard};
use rand::seq::SliceRandom;

/// A deck of cards.
#[derive(Debug, Clone)]
pub struct Deck<C> {
    cards: Vec<C>,
}

impl<C> Distribution<Deck<C>> for Standard
where
    Deck<C>: Default,
{
    fn sample<R: rand::prelude::Rng + ?Sized>(&self, rng: &mut R) -> Deck<C> {
        let mut deck = Deck::default();
        deck.cards.shuffle(rng);
        deck
    }
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let cards = iter.into_iter().collect();
        Self { cards }
    }
}

impl<C> Deck<C> {
    /// The number of cards remaining in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Deals the whole deck round-robin into `n` hands: the card at index `i` goes to hand
    /// `i % n`, and each hand keeps the deck's relative order.
    ///
    /// Hand sizes differ by at most one card.
    pub fn deal(self, n: usize) -> Vec<Vec<C>> {
        assert!(n > 0, "cannot deal to zero hands");
        let mut hands: Vec<Vec<C>> = (0..n)
            .map(|_| Vec::with_capacity(self.cards.len() / n + 1))
            .collect();
        for (i, card) in self.cards.into_iter().enumerate() {
            hands[i % n].push(card);
        }
        hands
    }

    /// Deals round-robin into `n` hands of equal size. Remainder cards at the end of the deck
    /// are never dealt.
    pub fn deal_even(mut self, n: usize) -> Vec<Vec<C>> {
        assert!(n > 0, "cannot deal to zero hands");
        let dealt = self.cards.len() / n * n;
        self.cards.truncate(dealt);
        self.deal(n)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deal_round_robin() {
        let deck: Deck<u8> = (0..10).collect();
        let hands = deck.deal(3);
        assert_eq!(
            vec![vec![0, 3, 6, 9], vec![1, 4, 7], vec![2, 5, 8]],
            hands
        );
    }

    #[test]
    fn test_deal_even() {
        let deck: Deck<u8> = (0..10).collect();
        let hands = deck.deal_even(3);
        assert_eq!(vec![vec![0, 3, 6], vec![1, 4, 7], vec![2, 5, 8]], hands);
    }
}
