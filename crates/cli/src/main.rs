//! Ledgerdesk CLI - back-office console for account administrators.
//!
//! # Usage
//!
//! ```bash
//! # Log in and persist the admin session
//! ldesk login -i ops1
//!
//! # Show the stored session
//! ldesk whoami
//!
//! # Enter the interactive user-management console
//! ldesk console
//!
//! # Drop the stored session
//! ldesk logout
//! ```
//!
//! # Commands
//!
//! - `login` - Authenticate against the backend and store the session
//! - `logout` - Remove the stored session
//! - `whoami` - Print the stored session
//! - `console` - Interactive user search / detail editor

#![cfg_attr(not(test), forbid(unsafe_code))]
// Interactive front end; the prompt and tables go to stdout by design.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ldesk")]
#[command(author, version, about = "Ledgerdesk back-office console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authenticate and store the admin session
    Login {
        /// Admin login id (prompted for when omitted)
        #[arg(short, long)]
        id: Option<String>,
    },
    /// Remove the stored admin session
    Logout,
    /// Print the stored admin session
    Whoami,
    /// Enter the interactive user-management console
    Console,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { id } => commands::auth::login(id).await?,
        Commands::Logout => commands::auth::logout()?,
        Commands::Whoami => commands::auth::whoami()?,
        Commands::Console => commands::console::run().await?,
    }
    Ok(())
}
