//! Character Catalog CLI
//!
//! Thin wrapper around catalog-core for command-line usage. Shares the
//! profile database with the desktop app, and like the app refuses to browse
//! the catalog until a profile exists.
//!
//! ## Usage
//!
//! ```bash
//! # Save or replace the profile
//! catalog profile set "Rick" "Scientist"
//!
//! # Show the saved profile
//! catalog profile show
//!
//! # Sign out
//! catalog profile clear
//!
//! # List a page of characters
//! catalog list --page 3
//!
//! # Show one character with its first 10 episodes
//! catalog show 1 --episodes 10
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use catalog_core::config::default_data_dir;
use catalog_core::details::{display_fields, INITIAL_REVEAL};
use catalog_core::gate::{decide, GateDecision, Screen};
use catalog_core::listing::{correct_page, parse_page, PageNav};
use catalog_core::profile::{can_submit, MAX_JOB_TITLE_LEN, MAX_USERNAME_LEN};
use catalog_core::{CatalogClient, CatalogConfig, FetchPolicy, ProfileStore, Storage};
use clap::{Parser, Subcommand};

/// Character Catalog - browse the Rick and Morty character dataset
#[derive(Parser)]
#[command(name = "catalog")]
#[command(version = "0.1.0")]
#[command(about = "Character Catalog - browse the Rick and Morty character dataset")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory holding the profile database
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// GraphQL endpoint override
    #[arg(long, global = true, hide = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// List one page of characters
    List {
        /// Page number (1-based; invalid values mean page 1)
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        page: String,
    },

    /// Show one character in detail
    Show {
        /// Character id
        id: String,

        /// Number of episodes to print
        #[arg(short, long, default_value_t = INITIAL_REVEAL)]
        episodes: usize,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the saved profile
    Show,
    /// Save the profile (replaces any existing one)
    Set {
        /// Username (max 15 characters)
        username: String,
        /// Job title (max 50 characters)
        job_title: String,
    },
    /// Remove the saved profile
    Clear,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Fail unless a profile exists, mirroring the desktop gate.
fn require_profile(store: &ProfileStore) -> Result<()> {
    let snapshot = store.snapshot();
    match decide(snapshot.ready, snapshot.profile.is_some(), Screen::Catalog) {
        GateDecision::Render => Ok(()),
        _ => bail!("No profile saved. Run `catalog profile set <username> <job-title>` first."),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut config = CatalogConfig::default()
        .with_data_dir(cli.data_dir.unwrap_or_else(|| default_data_dir(None)));
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }

    let storage = Storage::new(config.database_path())?;
    let store = ProfileStore::open(Arc::new(storage));

    match cli.command {
        Commands::Profile { action } => match action {
            ProfileAction::Show => match store.profile() {
                Some(profile) => {
                    println!("Profile:");
                    println!("  Username: {}", profile.username);
                    println!("  Job title: {}", profile.job_title);
                }
                None => println!("No profile saved."),
            },

            ProfileAction::Set { username, job_title } => {
                let username_len = username.trim().chars().count();
                let job_title_len = job_title.trim().chars().count();
                if username_len > MAX_USERNAME_LEN {
                    bail!("Username is limited to {} characters", MAX_USERNAME_LEN);
                }
                if job_title_len > MAX_JOB_TITLE_LEN {
                    bail!("Job title is limited to {} characters", MAX_JOB_TITLE_LEN);
                }
                if !can_submit(&username, &job_title) {
                    bail!("Username and job title must both be non-empty");
                }

                if store.save(&username, &job_title) {
                    println!("Profile saved.");
                } else {
                    println!("Profile unchanged.");
                }
            }

            ProfileAction::Clear => {
                if store.reset() {
                    println!("Profile cleared.");
                } else {
                    println!("No profile saved.");
                }
            }
        },

        Commands::List { page } => {
            require_profile(&store)?;
            let page = parse_page(Some(&page));
            tracing::debug!(page, "Listing characters");

            let client = CatalogClient::http(&config)?;
            let mut result = client.characters(page).await?;
            if let Some(last) = correct_page(page, result.total_pages()) {
                println!("Page {} is out of range, showing page {}.", page, last);
                result = client.characters(last).await?;
            }

            if result.items.is_empty() {
                println!("No characters on this page.");
            }
            for character in &result.items {
                println!(
                    "  {:>4}  {}  ({}, {})",
                    character.id, character.name, character.status, character.species
                );
            }
            println!();
            println!("{}", PageNav::new(result.page, Some(&result.info), false).label());
        }

        Commands::Show { id, episodes } => {
            require_profile(&store)?;

            let client = CatalogClient::http(&config)?;
            let character = client.character(&id, FetchPolicy::NetworkOnly).await?;

            println!("{}", character.name);
            for field in display_fields(&character) {
                println!("  {}: {}", field.label, field.value);
            }

            if !character.episodes.is_empty() {
                println!();
                println!("Episodes ({}):", character.episodes.len());
                for episode in character.episodes.iter().take(episodes) {
                    println!("  {} - {} ({})", episode.code, episode.name, episode.air_date);
                }
                let hidden = character.episodes.len().saturating_sub(episodes);
                if hidden > 0 {
                    println!("  ... and {} more", hidden);
                }
            }
        }
    }

    Ok(())
}
