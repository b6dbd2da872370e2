//! CLI frontend for the Chamberwatch deduction engine.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use cw_session::SessionConfig;

#[derive(Parser)]
#[command(
    name = "cw",
    about = "Chamberwatch: track a chamber of lethal and harmless rounds",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Chamber load and dealer options shared by every subcommand.
#[derive(Args)]
struct Load {
    /// Number of lethal rounds
    #[arg(short, long, default_value = "2")]
    lethal: u32,

    /// Number of harmless rounds
    #[arg(short = 'b', long, default_value = "3")]
    harmless: u32,

    /// Let a seeded dealer decide the true kinds
    #[arg(long)]
    dealer: bool,

    /// RNG seed for the dealer
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

impl Load {
    fn config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_counts(self.lethal, self.harmless)
            .with_dealer(self.dealer)
            .with_seed(self.seed)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, one command per line
    Play {
        #[command(flatten)]
        load: Load,
    },

    /// Apply a command script and print the probability report
    Odds {
        #[command(flatten)]
        load: Load,

        /// Commands separated by ';' (e.g. "peek lethal; fire lethal")
        #[arg(long)]
        script: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a command script and export the journal
    Export {
        #[command(flatten)]
        load: Load,

        /// Commands separated by ';'
        #[arg(long)]
        script: Option<String>,

        /// Output format: markdown, text, json
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play { load } => commands::play::run(load.config()),
        Commands::Odds { load, script, json } => {
            commands::odds::run(load.config(), script.as_deref(), json)
        }
        Commands::Export {
            load,
            script,
            format,
            output,
        } => commands::export::run(
            load.config(),
            script.as_deref(),
            &format,
            output.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
