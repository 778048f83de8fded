//! Employee management CLI - database migrations and administrator tools.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! emp-cli migrate
//!
//! # Create an administrator (password from EMP_ADMIN_PASSWORD or --password)
//! emp-cli admin create -n "Taro Yamada" -e taro@example.com
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use secrecy::SecretString;

mod commands;

#[derive(Parser)]
#[command(name = "emp-cli")]
#[command(author, version, about = "Employee management CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage administrators
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new administrator
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Mail address used to log in
        #[arg(short, long)]
        email: String,

        /// Login password
        #[arg(long, env = "EMP_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                name,
                email,
                password,
            } => {
                commands::admin::create(&name, &email, &SecretString::from(password)).await?;
            }
        },
    }
    Ok(())
}
