mod commands;
mod config;
mod terminal;

use clap::{Parser, Subcommand};
use config::CliConfig;
use fairdice_core::DiceError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const EXAMPLE_DICE: &str = "2,2,4,4,9,9 1,1,6,6,8,8 3,3,5,5,7,7";

#[derive(Parser)]
#[command(name = "fairdice")]
#[command(about = "Non-transitive dice with provably fair throws")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against the computer
    Play {
        /// Dice as comma-separated faces, e.g. 2,2,4,4,9,9
        #[arg(required = true)]
        dice: Vec<String>,
        /// Ask again instead of quitting when a contribution is not an integer
        #[arg(long)]
        reprompt: bool,
        /// Minimum number of dice
        #[arg(long)]
        min_dice: Option<usize>,
    },
    /// Show the win probability table for a set of dice
    Table {
        /// Dice as comma-separated faces
        #[arg(required = true)]
        dice: Vec<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check a revealed value and key against a disclosed HMAC
    Verify {
        /// Key as hex
        #[arg(short, long)]
        key: String,
        /// Revealed value
        #[arg(long)]
        value: u64,
        /// HMAC as hex
        #[arg(short, long)]
        digest: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let mut config = CliConfig {
        verbose: cli.verbose,
        ..CliConfig::default()
    };

    // Logs go to stderr; stdout carries the game transcript
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Play {
            dice,
            reprompt,
            min_dice,
        } => config
            .apply_play_options(reprompt, min_dice)
            .and_then(|_| commands::play(&dice, &config)),
        Commands::Table { dice, json } => commands::show_table(&dice, json),
        Commands::Verify { key, value, digest } => commands::verify(&key, value, &digest),
    };

    if let Err(e) = result {
        match e.downcast_ref::<DiceError>() {
            Some(DiceError::NotEnoughDice { need, found }) => {
                eprintln!("Error: at least {} dice are required, got {}", need, found);
                eprintln!("Usage: fairdice play <DIE> <DIE> <DIE> [<DIE>...]");
                eprintln!("Example: fairdice play {}", EXAMPLE_DICE);
            }
            Some(err) if err.is_configuration() => {
                eprintln!("Error: {}", err);
                eprintln!("Example: fairdice play {}", EXAMPLE_DICE);
            }
            _ => {
                eprintln!("Error: {:#}", e);
            }
        }
        std::process::exit(1);
    }
}
