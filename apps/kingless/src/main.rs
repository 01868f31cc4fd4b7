//! Interactive terminal game: human vs human, or human vs bot.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use kingless::ai::{registry, CardPolicy};
use kingless::cli::{render, HumanPlayer};
use kingless::domain::rules::PLAYERS;
use kingless::domain::{higher_score_winner, opponent, GameOutcome, Phase, TrickRecord};
use kingless::engine::{DealOutcome, GameConfig, GameEngine};
use kingless::event_log::EventLog;
use kingless::{telemetry, AppError};

#[derive(Parser)]
#[command(name = "kingless")]
#[command(about = "Two-player trick-taking card game on a kingless 48-card deck")]
struct Args {
    /// Opponent for player 2: another human or a bot difficulty
    #[arg(long, default_value = "expert")]
    opponent: Opponent,

    /// Game length: long plays until a termination condition, short plays
    /// a single 8-round hand (human-vs-human only)
    #[arg(long, default_value = "long")]
    length: GameLength,

    /// Deck shuffle seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Path of the append-only CSV game log
    #[arg(long, default_value = "game_log.csv")]
    log: PathBuf,

    /// Disable the CSV game log
    #[arg(long)]
    no_log: bool,

    /// Game number recorded in the log
    #[arg(long, default_value = "1")]
    game: u32,

    /// Print the rules and exit
    #[arg(long)]
    rules: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Human,
    Easy,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GameLength {
    Short,
    Long,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    if args.rules {
        print_rules();
        return Ok(());
    }

    if args.length == GameLength::Short && args.opponent != Opponent::Human {
        return Err(AppError::config(
            "short games are human-vs-human only; drop --length short or use --opponent human",
        ));
    }

    // In human-vs-human games hands start hidden and can be toggled; a bot
    // cannot read the screen, so against one the human hand is just shown.
    let versus_human = args.opponent == Opponent::Human;
    let seat1: Box<dyn CardPolicy> = match args.opponent {
        Opponent::Human => Box::new(HumanPlayer::stdin("Player 2", true, true)),
        Opponent::Easy => registry::create_policy("easy", args.seed)?,
        Opponent::Expert => registry::create_policy("expert", args.seed)?,
    };
    let seat0: Box<dyn CardPolicy> =
        Box::new(HumanPlayer::stdin("Player 1", versus_human, versus_human));
    let policies: [Box<dyn CardPolicy>; PLAYERS] = [seat0, seat1];

    let mut log = if args.no_log {
        None
    } else {
        Some(EventLog::open(&args.log)?)
    };

    let mut engine = GameEngine::new(GameConfig {
        game_no: args.game,
        short_game: args.length == GameLength::Short,
        seed: args.seed,
    })?;

    println!("Welcome to Kingless!");
    print_rules();

    loop {
        match engine.state().phase {
            Phase::Playing { round_no } => {
                println!("\n--- Round {round_no} ---");
                println!(
                    "Player {} is leading this round.",
                    engine.state().leader + 1
                );
                let record = engine.play_trick(&policies)?;
                narrate_trick(&record);
                if let Some(log) = log.as_mut() {
                    log.log_trick(&record)?;
                }
            }
            Phase::HandComplete => match engine.deal_next_hand()? {
                DealOutcome::Dealt => println!("\n--- Dealing New Cards ---"),
                DealOutcome::Finished(_) => {
                    println!("\nNot enough cards to deal. Game over.");
                }
            },
            Phase::Terminated(outcome) => {
                let scores = engine.state().scores;
                print_final(&outcome, scores);
                if let Some(log) = log.as_mut() {
                    log.log_game_end(args.game, engine.state().hand_no, &outcome, scores)?;
                }
                break;
            }
        }
    }

    Ok(())
}

fn narrate_trick(record: &TrickRecord) {
    println!("Player 1 plays:");
    println!("{}", render::render_card(record.cards[0]));
    println!("Player 2 plays:");
    println!("{}", render::render_card(record.cards[1]));
    println!("Lead suit: {:?}", record.lead_suit);
    if record.violation {
        println!(
            "Player {} broke the rules by not following suit!",
            opponent(record.leader) + 1
        );
    }
    println!("Player {} wins this round!", record.winner + 1);
    println!("Revealed card:");
    println!("{}", render::render_card(record.revealed));
    println!(
        "Score: Player 1 {} - Player 2 {}",
        record.scores[0], record.scores[1]
    );
}

fn print_final(outcome: &GameOutcome, scores: [u8; PLAYERS]) {
    match outcome {
        GameOutcome::ShootTheMoon { winner } => {
            println!(
                "\nPlayer {} has shot the moon and wins with 17 points!",
                winner + 1
            );
        }
        GameOutcome::GuaranteedWin { winner } => {
            println!(
                "\nPlayer {} is guaranteed to win. Ending game early.",
                winner + 1
            );
        }
        GameOutcome::ShortGame { .. } => println!("\n--- Short game completed ---"),
        GameOutcome::DeckExhausted { .. } => {}
    }

    println!("\n--- Final Scores ---");
    println!("Player 1: {}", scores[0]);
    println!("Player 2: {}", scores[1]);
    match higher_score_winner(&scores) {
        Some(seat) => println!("Player {} wins the game!", seat + 1),
        None => println!("The game is a tie!"),
    }
}

fn print_rules() {
    println!("\n--- Rules of Kingless ---");
    println!(
        "
    1. The game uses a standard deck of playing cards with kings removed (48 cards).
    2. Each player starts with 8 cards in their hand.
    3. Player 1 always leads the first round.
    4. The player who leads sets the suit for the round (the lead suit).
    5. The other player must follow the lead suit if possible.
    6. If the player cannot follow the lead suit, they may play any card.
    7. The highest card in the lead suit wins the round.
    8. The player who wins the round earns a point and leads the next round.
    9. After every 8 rounds, if enough cards are left in the deck, each
       player is dealt 8 new cards.
   10. The game ends when:
       - One player scores 16-0 and shoots the moon, winning with 17 points.
       - One player scores 9+ points while the other has at least 1 point.
       - The deck runs out of cards to deal.
   11. The player with the most points at the end of the game wins.
"
    );
}
