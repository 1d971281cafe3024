//! profile-cards: keep a few Instagram profiles as cards and open them

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use profile_cards::config::Config;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "profile-cards")]
#[command(about = "Local profile cards with Instagram deep links", long_about = None)]
#[command(version)]
struct Cli {
    /// Store database path (defaults to the platform data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all profile cards
    List {
        /// Show the id of each card (use with open)
        #[arg(long)]
        with_id: bool,
    },

    /// Add a profile card
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Instagram profile URL, e.g. https://instagram.com/someone
        #[arg(long)]
        url: String,

        /// Optional avatar image file
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Open a card in the Instagram app, falling back to the website
    Open {
        /// Card id or username
        key: String,

        /// Print the links without launching anything
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Print the app and web links for a username
    Links {
        username: String,
    },

    /// Print the username a profile URL resolves to
    Normalize {
        url: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::List { with_id } => {
            let config = Config::resolve(cli.db)?;
            let output = commands::list::execute(&config, with_id)?;
            println!("{}", output);
        }

        Commands::Add { name, url, image } => {
            let config = Config::resolve(cli.db)?;
            let options = commands::add::AddOptions { name, url, image };
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;
            runtime.block_on(commands::add::execute(&config, options))?;
        }

        Commands::Open { key, dry_run } => {
            let config = Config::resolve(cli.db)?;
            commands::open::execute(&config, &key, dry_run)?;
        }

        Commands::Links { username } => {
            commands::links::execute(&username);
        }

        Commands::Normalize { url } => {
            commands::normalize::execute(&url)?;
        }
    }

    Ok(())
}
