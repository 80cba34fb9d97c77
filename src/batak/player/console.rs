//! Simple console interactive player.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::{fmt::Display, str::FromStr, sync::Arc};

use ansi_term::{ANSIString, ANSIStrings};
use itertools::Itertools;
use rand::RngCore;

use super::robot::Conservative;
use crate::batak::{Card, Event, Player, PlayerError, PlayerState, Suit, Trick};

/// A human seat. Once stdin is closed, the seat is played out by a [`Conservative`] robot.
pub struct Console {
    color: bool,
    closed: AtomicBool,
}
impl Default for Console {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Prompts until a line parses. Returns `None` once the input is exhausted or unreadable.
fn prompt<T: FromStr, S: Display, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: S,
) -> Option<T> {
    loop {
        let mut buffer = String::new();
        write!(output, "{prompt}").ok()?;
        output.flush().ok()?;
        match input.read_line(&mut buffer) {
            Ok(0) | Err(_) => return None,
            Ok(_) => (),
        }
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            if let Ok(obj) = T::from_str(trimmed) {
                return Some(obj);
            }
            writeln!(output, "Invalid input, try again").ok()?;
        }
    }
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            closed: AtomicBool::new(false),
        }
    }

    fn closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }

    /// Asks on the terminal, or returns `None` if stdin has been closed.
    fn ask<T: FromStr, S: Display>(&self, state: &PlayerState, question: S) -> Option<T> {
        if self.closed() {
            return None;
        }
        let choice = prompt(&mut std::io::stdin().lock(), &mut std::io::stdout(), question);
        if choice.is_none() {
            self.closed.store(true, Ordering::Relaxed);
            println!();
            println!("Input closed, {} plays on as a robot", state.seat);
        }
        choice
    }

    pub fn into_player(self) -> Arc<dyn Player> {
        Arc::new(self)
    }

    fn format(&self, s: &ANSIStrings) -> String {
        if self.color {
            s.to_string()
        } else {
            ansi_term::unstyle(s)
        }
    }

    fn format_card(&self, card: Card) -> String {
        self.format(&ANSIStrings(&[card.to_ansi_string()]))
    }

    fn format_suit(&self, suit: Suit) -> String {
        self.format(&ANSIStrings(&[suit.to_ansi_string()]))
    }

    fn format_cards(&self, cards: &[Card]) -> String {
        let mut parts: Vec<ANSIString> = vec![];
        for (ii, card) in cards.iter().enumerate() {
            if ii > 0 {
                parts.push(", ".into());
            }
            parts.push(card.to_ansi_string());
        }
        self.format(&ANSIStrings(&parts))
    }

    fn format_trick(&self, trick: &Trick) -> String {
        let mut parts: Vec<ANSIString> = vec!["[".into()];
        for (i, (seat, card)) in trick.cards.iter().enumerate() {
            if i != 0 {
                parts.push(", ".into());
            }
            parts.push(format!("{seat}: ").into());
            parts.push(card.to_ansi_string());
        }
        parts.push("]".into());
        self.format(&ANSIStrings(&parts))
    }

    fn show_hand(&self, state: &PlayerState) {
        if self.closed() {
            return;
        }
        println!("{} hand: {}", state.seat, self.format_cards(&state.sorted_hand()));
        if let Some(trump) = state.trump() {
            let broken = if state.trump_played { " (broken)" } else { "" };
            println!("Trump: {}{broken}", self.format_suit(trump));
        }
    }
}

impl Player for Console {
    fn bid(&self, state: &PlayerState) -> u32 {
        self.show_hand(state);
        if !state.other_bids.is_empty() && !self.closed() {
            println!("Other bids: {}", state.other_bids.iter().join(", "));
        }
        let question = format!("Bid ({} to {})? ", state.bid, state.max_bid);
        self.ask(state, question)
            .unwrap_or_else(|| Conservative.bid(state))
    }

    fn choose_trump(&self, state: &PlayerState) -> Suit {
        self.show_hand(state);
        let choices = Suit::all_suits()
            .iter()
            .map(|s| self.format_suit(*s))
            .join(" ");
        self.ask(state, format!("Trump ({choices})? "))
            .unwrap_or_else(|| Conservative.choose_trump(state))
    }

    fn lead_card(&self, state: &PlayerState, rng: &mut dyn RngCore) -> Card {
        self.show_hand(state);
        self.ask(state, "Lead? ")
            .unwrap_or_else(|| Conservative.lead_card(state, rng))
    }

    fn follow_card(&self, state: &PlayerState, rng: &mut dyn RngCore) -> Card {
        if let (Some(trick), false) = (state.trick, self.closed()) {
            println!("Trick: {}", self.format_trick(trick));
        }
        self.show_hand(state);
        self.ask(state, "Follow? ")
            .unwrap_or_else(|| Conservative.follow_card(state, rng))
    }

    fn notify(&self, _: &PlayerState, event: &Event) {
        match event {
            Event::Bid(seat, bid) => println!("{seat} bids {bid}"),
            Event::BiddingTied(contenders) => {
                println!("Bidding tied, {contenders} players bid again")
            }
            Event::BidWon(winner) => {
                let forced = if winner.forced { " (tie broken at random)" } else { "" };
                println!("{} wins the bidding with {}{forced}", winner.seat, winner.bid);
            }
            Event::Contract(contract) => {
                println!(
                    "{} bid {}, trump is {}",
                    contract.bidder,
                    contract.bid,
                    self.format_suit(contract.trump)
                );
            }
            Event::Lead(seat, card) => println!("{seat} leads {}", self.format_card(*card)),
            Event::Play(seat, card) => println!("{seat} plays {}", self.format_card(*card)),
            Event::Trick(trick) => {
                println!("Trick: {} -> {}", self.format_trick(trick), trick.best().0);
            }
            Event::Game(result) => {
                println!("Results:");
                println!("{result}");
            }
        }
    }

    fn handle_error(&self, err: PlayerError) -> bool {
        println!("Error: {err}");
        true
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_prompt_reprompts_until_valid() {
        let mut input = Cursor::new("\nzz\nqh\n");
        let mut output = Vec::new();
        let card: Option<Card> = prompt(&mut input, &mut output, "Lead? ");
        assert_eq!(Some(Card::from_str("qh").unwrap()), card);
        let output = String::from_utf8(output).unwrap();
        assert_eq!(3, output.matches("Lead? ").count());
        assert_eq!(1, output.matches("Invalid input").count());
    }

    #[test]
    fn test_prompt_end_of_input() {
        let mut input = Cursor::new("x\n");
        let mut output = Vec::new();
        let bid: Option<u32> = prompt(&mut input, &mut output, "Bid? ");
        assert_eq!(None, bid);
    }
}
