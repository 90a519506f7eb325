use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    greeting, init_logging, random_board, render_pair, AiPlayer, CliPlayer, Combatant, Match,
    MatchState, Side, BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show the computer's ships instead of hiding them")]
        reveal: bool,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, reveal } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            println!("{}", greeting());

            let human_board = random_board(&mut rng, BOARD_SIZE, false);
            let computer_board = random_board(&mut rng, BOARD_SIZE, !reveal);
            let mut game = Match::new(
                Combatant::new(human_board, Box::new(CliPlayer::new())),
                Combatant::new(computer_board, Box::new(AiPlayer::new())),
            );

            while let MatchState::AwaitingTurn(side) = game.state() {
                println!();
                println!(
                    "{}",
                    render_pair(
                        "Your board:",
                        game.combatant(Side::First).board(),
                        "Computer's board:",
                        game.combatant(Side::Second).board(),
                    )
                );
                match side {
                    Side::First => println!("Your turn!"),
                    Side::Second => println!("Computer's turn!"),
                }
                game.step(&mut rng);
            }

            match game.winner() {
                Some(Side::First) => println!("\nYou won!"),
                Some(Side::Second) => println!("\nComputer won!"),
                None => unreachable!("match loop only exits when finished"),
            }
        }
        Commands::Auto { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);

            let first_board = random_board(&mut rng, BOARD_SIZE, false);
            let second_board = random_board(&mut rng, BOARD_SIZE, false);
            let mut game = Match::new(
                Combatant::new(first_board, Box::new(AiPlayer::silent())),
                Combatant::new(second_board, Box::new(AiPlayer::silent())),
            );
            let winner = game.run(&mut rng);

            println!(
                "{}",
                render_pair(
                    "First fleet:",
                    game.combatant(Side::First).board(),
                    "Second fleet:",
                    game.combatant(Side::Second).board(),
                )
            );
            println!("Winner: {:?} side", winner);
        }
    }
    Ok(())
}
