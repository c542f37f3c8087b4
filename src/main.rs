#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use wordguess::{
    cli::{render_leaderboard, render_stats, CliApp},
    config::DEFAULT_STORE_PATH,
    init_logging, ClientConfig, HintCascade, JsonFileStore, Leaderboard, PlayerProfile, WordGame,
    WordSource,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Where the player's profile and local leaderboard are kept.
    #[arg(long, global = true, env = "WORDGAME_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively in the terminal.
    Play {
        /// Start at this level instead of the saved one.
        #[arg(long)]
        level: Option<u32>,
        #[arg(
            long,
            env = "WORDGAME_SEED",
            help = "Fix RNG seed for reproducible games (e.g., --seed 12345)"
        )]
        seed: Option<u64>,
        /// Set the player name before playing.
        #[arg(long)]
        name: Option<String>,
    },
    /// Show the saved leaderboard.
    Leaderboard {
        #[arg(long)]
        clear: bool,
    },
    /// Show the player's statistics.
    Stats,
    /// Change the player name.
    Name { name: String },
}

#[cfg(feature = "std")]
fn open_profile(config: &ClientConfig) -> anyhow::Result<PlayerProfile<JsonFileStore>> {
    Ok(PlayerProfile::new(JsonFileStore::open(&config.store_path)?))
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut config = ClientConfig {
        store_path: cli.store,
        ..ClientConfig::default()
    };

    match cli.command {
        Commands::Play { level, seed, name } => {
            config.seed = seed;
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut profile = open_profile(&config)?;
            if let Some(name) = name {
                let name = profile.set_name(&name).map_err(|e| anyhow::anyhow!(e))?;
                println!("Welcome, {}!", name);
            } else if profile.is_first_launch() {
                println!("Playing as Player. Pick a name with `wordguess name <NAME>`.");
            }
            if let Some(level) = level {
                let level = wordguess::core::validate_level(level).map_err(|e| anyhow::anyhow!(e))?;
                profile.set_current_level(level)?;
            }

            let mut rng = config.rng();
            let words_rng = SmallRng::from_rng(&mut rng);
            let words = WordSource::new(words_rng).with_timeout(config.request_timeout);
            let hints = HintCascade::default().with_timeout(config.request_timeout);
            let game = WordGame::new(Box::new(words), hints, rng);
            let leaderboard = Leaderboard::local().with_entries(profile.saved_leaderboard());

            let mut app = CliApp::new(game, leaderboard, profile);
            app.run().await?;
        }
        Commands::Leaderboard { clear } => {
            let mut profile = open_profile(&config)?;
            if clear {
                profile.save_leaderboard(&[])?;
                println!("Leaderboard cleared.");
            }
            print!("{}", render_leaderboard(&profile.saved_leaderboard()));
        }
        Commands::Stats => {
            let profile = open_profile(&config)?;
            print!("{}", render_stats(&profile.display_name(), &profile.stats()));
        }
        Commands::Name { name } => {
            let mut profile = open_profile(&config)?;
            match profile.set_name(&name) {
                Ok(name) => println!("Player name set to {}.", name),
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
