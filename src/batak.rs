//! The game of batak.
//!
//! Players bid for the right to name trump, and then play out every trick under suit-following and
//! trump-breaking rules. Robot seats follow one of four fixed personalities; a seat may also be
//! played from the console.

mod action;
mod bidding;
mod config;
mod error;
mod game;
mod player;
mod results;
mod rules;
mod scoring;
mod seat;
mod trick;
mod tricks;

use std::fs::OpenOptions;

use anyhow::{bail, Context};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use self::action::{Action, ActionData, ActionType, ExpectAction};
use self::bidding::{BidClose, BidRound, BidWinner};
use self::config::GameConfig;
use self::error::{GameError, PlayerError};
use self::game::{Contract, Game, PlayerState};
pub use self::player::PersonalityKind;
use self::player::{take_action, Console, Player, Players};
use self::results::{LineSink, ResultSink};
use self::scoring::GameResult;
use self::seat::Seat;
use self::trick::Trick;
use self::tricks::Tricks;
use crate::args::Args;
use crate::french::{Card, Deck, Suit};

/// An event that occurs during the game.
#[derive(Debug, Clone)]
pub enum Event {
    /// A player placed a bid.
    Bid(Seat, u32),
    /// A bidding round tied; this many players bid again.
    BiddingTied(usize),
    /// Bidding is over.
    BidWon(BidWinner),
    /// The winning bidder named trump.
    Contract(Contract),
    /// A player led a trick.
    Lead(Seat, Card),
    /// A player followed.
    Play(Seat, Card),
    /// The trick is over.
    Trick(Trick),
    /// The game is over.
    Game(GameResult),
}

/// Plays a game to completion.
///
/// Events are passed to every player as they occur. A rejected choice is retried if the player
/// asks to; otherwise it ends the game with an error.
pub fn run_game<R: RngCore>(
    players: &Players,
    config: GameConfig,
    rng: &mut R,
) -> Result<GameResult, GameError> {
    if players.len() != config.players() {
        return Err(GameError::DegenerateConfiguration(format!(
            "{} players seated for {} hands",
            players.len(),
            config.players()
        )));
    }
    let mut game = Game::from(config);
    loop {
        while let Some(event) = game.pop_event() {
            for (seat, player) in players.iter() {
                player.notify(&game.player_state(seat), &event);
            }
        }
        let Some(expect) = game.next_action() else {
            break;
        };
        let player = &players[expect.seat];
        let data = take_action(
            player.as_ref(),
            &game.player_state(expect.seat),
            expect.action,
            &mut *rng,
        );
        match game.apply_action(expect.with_data(data), rng) {
            Err(GameError::Player(err)) if player.handle_error(err.clone()) => continue,
            Err(err) => return Err(err),
            Ok(()) => (),
        }
    }
    Ok(game.result().cloned().expect("game is over"))
}

/// Seats the players requested on the command line.
fn seat_players(args: &Args) -> anyhow::Result<Players> {
    let lineup = if args.lineup.is_empty() {
        PersonalityKind::lineup(args.players)
    } else if args.lineup.len() == args.players {
        args.lineup.clone()
    } else {
        bail!(
            "lineup names {} personalities for {} players",
            args.lineup.len(),
            args.players
        );
    };
    if let Some(human) = args.human {
        if human == 0 || human > args.players {
            bail!("human seat {human} is not between 1 and {}", args.players);
        }
    }
    Ok(lineup
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            if args.human == Some(i + 1) {
                Console::new(!args.no_color).into_player()
            } else {
                kind.into_player()
            }
        })
        .collect())
}

/// Runs games from the command line.
pub fn cli_main(args: &Args) -> anyhow::Result<()> {
    let players = seat_players(args)?;
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut sink = match &args.results {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            Some(LineSink::new(file))
        }
        None => None,
    };

    for n in 1..=args.games {
        let config = GameConfig::random(args.players, args.allow_remainder, &mut rng)?;
        info!(game = n, players = config.players(), tricks = config.hand_size(), "dealt");
        let result = run_game(&players, config, &mut rng)?;
        info!(game = n, made = result.contract_made(), "game over");
        if args.human.is_none() {
            println!("Game {n}:\n{result}\n");
        }
        if let Some(sink) = sink.as_mut() {
            sink.record(&result.scores).context("recording results")?;
        }
        if args.json {
            serde_json::to_writer(std::io::stderr(), &result)?;
            eprintln!();
        }
    }
    Ok(())
}
