//! Interactive console front-end.
//!
//! Prompts for a board setup mode, the players, and then runs the
//! press-Enter-to-roll loop until someone wins. All engine events show
//! up as `[NOTIFY]` lines via the console observer.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use snakes_ladders::{
    Board, ConsoleNotifier, CustomSetup, Dice, Difficulty, Game, GameError, GamePhase, GameRng,
    Player, RandomSetup, SetupStrategy, StandardSetup,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Seed for dice rolls and random board setup (OS entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::debug!(seed = rng.seed(), "session seed");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    if run(&mut input, rng).is_none() {
        println!("\nGoodbye.");
    }
}

/// Drives one full interactive session. Returns `None` on EOF.
fn run(input: &mut impl BufRead, mut rng: GameRng) -> Option<()> {
    println!("=== SNAKE AND LADDER ===");
    println!("Choose mode:");
    println!("1. Standard");
    println!("2. Random (Easy/Medium/Hard)");
    println!("3. Custom");

    let mode = loop {
        let mode = prompt_number(input, "> ")?;
        if (1..=3).contains(&mode) {
            break mode;
        }
        println!("Pick 1, 2 or 3.");
    };

    let (mut board, strategy): (Board, Box<dyn SetupStrategy>) = match mode {
        1 => (Board::new(10), Box::new(StandardSetup)),
        2 => {
            let side = prompt_number(input, "Board size (e.g., 10): ")?;
            let difficulty = loop {
                let level = prompt_number(input, "Difficulty (1=Easy, 2=Med, 3=Hard): ")?;
                match Difficulty::from_level(level) {
                    Some(difficulty) => break difficulty,
                    None => println!("Pick 1, 2 or 3."),
                }
            };
            (
                Board::new(side),
                Box::new(RandomSetup::with_difficulty(difficulty)),
            )
        }
        _ => {
            let side = prompt_number(input, "Board size: ")?;
            let snakes = prompt_number(input, "Number of snakes: ")?;
            let ladders = prompt_number(input, "Number of ladders: ")?;

            let mut setup = CustomSetup::new();
            for i in 1..=snakes {
                let (start, end) = prompt_pair(input, &format!("Snake {} (start end): ", i))?;
                setup.add_snake(start, end);
            }
            for i in 1..=ladders {
                let (start, end) = prompt_pair(input, &format!("Ladder {} (start end): ", i))?;
                setup.add_ladder(start, end);
            }
            (Board::new(side), Box::new(setup))
        }
    };

    strategy.setup(&mut board, &mut rng);

    let mut game = Game::new(board, Dice::new(6, rng));
    game.add_observer(Box::new(ConsoleNotifier));

    let count = prompt_number(input, "Number of players: ")?;
    for i in 1..=count {
        let name = prompt_line(input, &format!("Player {} name: ", i))?;
        game.add_player(Player::new(name));
    }

    match game.start() {
        Ok(()) => {}
        Err(GameError::NotEnoughPlayers { required, .. }) => {
            println!("Need at least {} players!", required);
            return Some(());
        }
    }
    print!("{}", game.board());

    while game.phase() == GamePhase::InProgress {
        let name = game
            .current_player()
            .map(|p| p.name().to_string())
            .unwrap_or_default();
        prompt_line(input, &format!("\n{}'s turn. Press Enter...", name))?;
        game.take_turn();
    }

    Some(())
}

/// Print a prompt and read one line. Returns `None` on EOF.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Prompt until the user enters a number. Returns `None` on EOF.
fn prompt_number(input: &mut impl BufRead, prompt: &str) -> Option<u32> {
    loop {
        let line = prompt_line(input, prompt)?;
        match line.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

/// Prompt until the user enters two whitespace-separated numbers.
/// Returns `None` on EOF.
fn prompt_pair(input: &mut impl BufRead, prompt: &str) -> Option<(u32, u32)> {
    loop {
        let line = prompt_line(input, prompt)?;
        let mut parts = line.split_whitespace();
        let pair = match (parts.next(), parts.next(), parts.next()) {
            (Some(a), Some(b), None) => a.parse().ok().zip(b.parse().ok()),
            _ => None,
        };
        match pair {
            Some(pair) => return Some(pair),
            None => println!("Please enter two numbers, e.g. \"10 3\"."),
        }
    }
}
