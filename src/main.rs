// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pet-rescue command line client
//!
//! Logs in against the pet-rescue API, keeps the session and the remembered
//! accounts in a local JSON file, and exposes a few read-only queries.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pet_rescue_client::{models::StoredAccount, ApiClient, ClientConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_STORE_PATH: &str = "pet-rescue-store.json";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding the session and remembered accounts
    #[arg(short, long, env = "PET_RESCUE_STORE_PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and remember the account on this device
    Login {
        #[arg(required = true)]
        email: String,
        /// Password (read from PET_RESCUE_PASSWORD if not given)
        #[arg(short, long, env = "PET_RESCUE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Exchange the refresh token for a new access token
    Refresh,
    /// Manage remembered accounts
    Accounts {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Print the absolute URL for a backend image path
    ImageUrl {
        #[arg(required = true)]
        path: String,
    },
}

#[derive(Subcommand)]
enum AccountCommands {
    /// List remembered accounts (current one marked with *)
    List,
    /// Mark a remembered account as current
    Switch {
        #[arg(required = true)]
        id: String,
    },
    /// Forget a remembered account
    Remove {
        #[arg(required = true)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    config.store_path = Some(
        cli.store
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
    );
    tracing::debug!(api = %config.api_base_url, "Using pet-rescue API");

    let client = ApiClient::from_config(&config)?;

    match cli.command {
        Commands::Login { email, password } => {
            let login = client.login(&email, &password).await?;
            client.session().set_superuser(login.is_superuser)?;

            let account = StoredAccount::from_login(&login, None);
            client.accounts().add_stored_account(account)?;
            client
                .accounts()
                .switch_to_account(&login.user_id.to_string())?;

            println!("✓ Logged in as {} ({})", login.username, login.email);
        }
        Commands::Logout => {
            client.logout()?;
            println!("✓ Logged out");
        }
        Commands::Whoami => {
            if !client.is_authenticated()? {
                println!("Not logged in");
                return Ok(());
            }
            let me = client.get_profile().await?;
            println!("{} <{}> (id {})", me.username, me.email, me.id);
            if me.is_superuser {
                println!("  admin");
            }
            if let Some(image) = me.profile_image.as_deref() {
                println!("  image: {}", client.get_image_url(Some(image)));
            }
        }
        Commands::Refresh => {
            client.refresh_session().await?;
            println!("✓ Session refreshed");
        }
        Commands::Accounts { command } => run_accounts(&client, command)?,
        Commands::ImageUrl { path } => {
            println!("{}", client.get_image_url(Some(&path)));
        }
    }

    Ok(())
}

fn run_accounts(client: &ApiClient, command: AccountCommands) -> anyhow::Result<()> {
    let accounts = client.accounts();

    match command {
        AccountCommands::List => {
            let current = accounts.get_current_account_id()?;
            let stored = accounts.get_stored_accounts()?;
            if stored.is_empty() {
                println!("No remembered accounts");
            }
            for account in stored {
                let marker = if current.as_deref() == Some(account.id.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} {:>6}  {:<20} {:<30} {}",
                    marker, account.id, account.username, account.email, account.last_used
                );
            }
        }
        AccountCommands::Switch { id } => {
            if !accounts.switch_to_account(&id)? {
                anyhow::bail!("No remembered account with id {}", id);
            }
            println!("✓ Switched to account {} (log in again to use its session)", id);
        }
        AccountCommands::Remove { id } => {
            accounts.remove_account(&id)?;
            println!("✓ Removed account {}", id);
        }
    }

    Ok(())
}

/// Initialize human-readable logging to stderr.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pet_rescue_client=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
