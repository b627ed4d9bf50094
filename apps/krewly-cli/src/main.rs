//! # krewly-cli
//!
//! Command-line interface for the Krewly marketplace core.
//!
//! Stands in for the web client's pages:
//! - `krewly apply` — submit a vendor application (the become-vendor wizard)
//! - `krewly status` — the applicant's own view of their application
//! - `krewly admin list/view/approve/reject/counts/seed/reset` — the review queue
//! - `krewly identity set/show/clear` — the mock signed-in user

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Krewly CLI — submit and review vendor applications.
#[derive(Parser)]
#[command(name = "krewly", version, about)]
struct Cli {
    /// Data directory (defaults to the platform data dir, e.g. ~/.local/share/krewly).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a vendor application as the signed-in user.
    Apply {
        /// Business name (e.g., "Glam by Tolu").
        business_name: String,
        /// Service category; repeat for up to three (e.g., "Makeup Artist").
        #[arg(long = "category")]
        categories: Vec<String>,
        /// State the business operates from.
        #[arg(long)]
        state: String,
        /// City/LGA within the state.
        #[arg(long)]
        city: String,
        /// Whether the vendor travels for events.
        #[arg(long)]
        travel: bool,
        /// Contact phone number (e.g., 08012345678 or +2348012345678).
        #[arg(long)]
        phone: String,
        /// Portfolio image file; repeat for two to five images.
        #[arg(long = "image")]
        images: Vec<PathBuf>,
        /// Instagram handle (required).
        #[arg(long)]
        instagram: String,
        /// TikTok handle.
        #[arg(long)]
        tiktok: Option<String>,
        /// Twitter handle.
        #[arg(long)]
        twitter: Option<String>,
    },
    /// Show the signed-in user's application.
    Status {
        /// Dev shortcut: approve your own pending application.
        #[arg(long)]
        simulate_approval: bool,
    },
    /// Review and manage the application queue.
    Admin {
        #[command(subcommand)]
        command: commands::admin::AdminCommands,
    },
    /// Manage the mock signed-in identity.
    Identity {
        #[command(subcommand)]
        command: commands::identity::IdentityCommands,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is for command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("krewly=info".parse()?)
                .add_directive("krewly_vendor=info".parse()?)
                .add_directive("krewly_identity=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::for_data_dir(cli.data_dir);
    tracing::debug!(data_dir = %config.data_dir.display(), "resolved data directory");

    match &cli.command {
        Commands::Apply {
            business_name,
            categories,
            state,
            city,
            travel,
            phone,
            images,
            instagram,
            tiktok,
            twitter,
        } => commands::apply::execute(
            &config,
            business_name,
            categories,
            state,
            city,
            *travel,
            phone,
            images,
            instagram,
            tiktok.as_deref(),
            twitter.as_deref(),
        ),
        Commands::Status { simulate_approval } => {
            commands::apply::status(&config, *simulate_approval)
        }
        Commands::Admin { command } => commands::admin::execute(command, &config),
        Commands::Identity { command } => commands::identity::execute(command, &config),
    }
}
