//! The standard 52-card French deck.

use std::convert::{TryFrom, TryInto};
use std::fmt::Display;
use std::str::FromStr;

use ansi_term::ANSIString;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::deck;

/// Card suit.
///
/// The declaration order is the fixed enumeration order: it breaks ties when choosing a trump suit,
/// and groups suits when sorting a hand for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}
impl Suit {
    /// Returns all suits, in enumeration order.
    pub fn all_suits() -> &'static [Suit; 4] {
        static SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];
        &SUITS
    }

    /// Returns a string representation of the suit, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::Red;
        match self {
            Suit::Club | Suit::Spade => self.to_string().into(),
            Suit::Diamond | Suit::Heart => Red.paint(self.to_string()),
        }
    }
}
impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = match self {
            Suit::Spade => "♠",
            Suit::Heart => "♡",
            Suit::Diamond => "♢",
            Suit::Club => "♣",
        };
        f.write_str(sym)
    }
}
impl TryFrom<char> for Suit {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'S' | 's' | '♠' => Suit::Spade,
            'H' | 'h' | '♡' | '♥' => Suit::Heart,
            'D' | 'd' | '♢' | '♦' => Suit::Diamond,
            'C' | 'c' | '♣' => Suit::Club,
            _ => return Err(()),
        })
    }
}
impl FromStr for Suit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => match s.to_ascii_lowercase().as_str() {
                "spade" | "spades" => Ok(Suit::Spade),
                "heart" | "hearts" => Ok(Suit::Heart),
                "diamond" | "diamonds" => Ok(Suit::Diamond),
                "club" | "clubs" => Ok(Suit::Club),
                _ => Err(()),
            },
        }
    }
}

/// Card rank, ordered by face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}
impl Rank {
    /// Returns all ranks, from lowest to highest.
    pub fn all_ranks() -> &'static [Rank; 13] {
        static RANKS: [Rank; 13] = [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ];
        &RANKS
    }

    /// Face cards and aces count as "high" cards.
    pub fn is_high(self) -> bool {
        self >= Rank::Jack
    }
}
impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };
        f.write_str(sym)
    }
}
impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | 't' => Rank::Ten,
            'J' | 'j' => Rank::Jack,
            'Q' | 'q' => Rank::Queen,
            'K' | 'k' => Rank::King,
            'A' | 'a' => Rank::Ace,
            _ => return Err(()),
        })
    }
}

/// A playing card. Two cards are equal iff rank and suit both match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card rank.
    pub rank: Rank,
    /// Card suit.
    pub suit: Suit,
}
impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
impl FromStr for Card {
    type Err = ();

    /// Parses cards such as `"qh"`, `"TS"`, `"10d"` or `"A♠"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (rank, suit) = match s.strip_prefix("10") {
            Some(rest) => (Rank::Ten, rest),
            None => {
                let mut chars = s.chars();
                let rank = chars.next().ok_or(())?.try_into()?;
                (rank, chars.as_str())
            }
        };
        let mut chars = suit.chars();
        let suit = chars.next().ok_or(())?.try_into()?;
        if chars.next().is_some() {
            return Err(());
        }
        Ok(Card { rank, suit })
    }
}
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::from_str(&s).map_err(|()| serde::de::Error::custom("not a card"))
    }
}
impl Card {
    /// Creates a new [`Card`].
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns a string representation of the card, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::Red;
        match self.suit {
            Suit::Club | Suit::Spade => self.to_string().into(),
            Suit::Diamond | Suit::Heart => Red.paint(self.to_string()),
        }
    }

    /// True if the card is a jack, queen, king or ace.
    pub fn is_high(self) -> bool {
        self.rank.is_high()
    }

    /// True if the card belongs to the trump suit.
    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump
    }

    /// Sort key for displaying a hand: grouped by suit, then ascending rank.
    pub fn display_key(self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

/// A standard deck.
pub type Deck = deck::Deck<Card>;
impl Default for Deck {
    fn default() -> Self {
        iproduct!(Suit::all_suits(), Rank::all_ranks())
            .map(|(&suit, &rank)| Card::new(rank, suit))
            .collect()
    }
}
