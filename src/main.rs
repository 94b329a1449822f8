//! Hangman - CLI
//!
//! Terminal hangman with TUI and line modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    interactive::{App, run_tui},
    logging,
    wordlists::{
        DEFAULT_ENDPOINT, DEFAULT_WORDS_PATH, SourceMode, WordResolver, WordSourceConfig,
    },
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: remote (try the word service, fall back to the file) or local
    #[arg(short, long, global = true, value_enum, default_value_t = SourceMode::RemoteFirst)]
    source: SourceMode,

    /// Local word file, one word per line
    #[arg(short = 'w', long = "words", global = true, default_value = DEFAULT_WORDS_PATH)]
    words_path: PathBuf,

    /// Remote word service URL
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Seconds to wait for the word service
    #[arg(long, global = true, default_value_t = 5)]
    timeout: u64,

    /// Append log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode on stdin/stdout
    Simple,
}

impl Cli {
    fn word_source_config(&self) -> WordSourceConfig {
        WordSourceConfig {
            mode: self.source,
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout),
            words_path: self.words_path.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    logging::init(cli.log_file.as_deref(), command == Commands::Play)?;

    let resolver = WordResolver::new(cli.word_source_config());
    let mut rng = StdRng::from_os_rng();

    match command {
        Commands::Play => run_tui(App::new(resolver, rng)),
        Commands::Simple => {
            let stdin = io::stdin();
            let stats = run_simple(&resolver, &mut rng, &mut stdin.lock(), &mut io::stdout())?;
            log::info!(
                "played {} rounds, won {}",
                stats.rounds_played,
                stats.rounds_won
            );
            Ok(())
        }
    }
}
