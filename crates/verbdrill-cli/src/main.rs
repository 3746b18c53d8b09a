//! verbdrill CLI: German verb conjugation quiz in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "verbdrill", version, about = "German verb conjugation quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the catalog comes from and where progress is kept.
#[derive(Args, Clone, Debug, Default)]
pub struct StorageArgs {
    /// Catalog URL or path (overrides config)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Directory for the stored catalog and language (overrides config)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive quiz
    Play {
        #[command(flatten)]
        storage: StorageArgs,

        /// Seed for reproducible rounds
        #[arg(long)]
        seed: Option<u64>,

        /// Disable text-to-speech
        #[arg(long)]
        no_speech: bool,

        /// Keep progress in memory only
        #[arg(long)]
        ephemeral: bool,
    },

    /// Print the conjugation table of a verb
    Show {
        /// German infinitive, e.g. "gehen"
        verb: String,

        #[command(flatten)]
        storage: StorageArgs,
    },

    /// List interface languages
    Languages {
        #[command(flatten)]
        storage: StorageArgs,
    },

    /// Check a catalog for common problems
    Validate {
        /// Catalog URL or path
        #[arg(long)]
        catalog: String,
    },

    /// Forget the stored catalog and language
    Reset {
        #[command(flatten)]
        storage: StorageArgs,
    },

    /// Create a starter config
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("verbdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            storage,
            seed,
            no_speech,
            ephemeral,
        } => commands::play::execute(storage, seed, no_speech, ephemeral).await,
        Commands::Show { verb, storage } => commands::show::execute(verb, storage).await,
        Commands::Languages { storage } => commands::languages::execute(storage),
        Commands::Validate { catalog } => commands::validate::execute(catalog).await,
        Commands::Reset { storage } => commands::reset::execute(storage),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
