//! Staffbook CLI
//!
//! Command-line interface for Staffbook - employee contact directory.

mod commands;
mod config;
mod display;
mod terminal;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use commands::contacts::ContactArgs;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "staffbook")]
#[command(version, about = "Employee contact directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Contact server URL
    #[arg(
        long,
        global = true,
        env = "STAFFBOOK_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    /// Upper bound for each server request, in seconds
    #[arg(
        long,
        global = true,
        env = "STAFFBOOK_TIMEOUT_SECS",
        default_value_t = 10
    )]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// List all contacts
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show contact details
    Show {
        /// Employee ID
        id: String,

        /// Print JSON instead of a card
        #[arg(long)]
        json: bool,
    },

    /// Create a contact
    Create(ContactArgs),

    /// Edit a contact; only the given fields change
    Edit {
        /// Employee ID
        id: String,

        #[command(flatten)]
        fields: ContactArgs,
    },

    /// Delete a contact
    Delete {
        /// Employee ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Open a contact's external profile
    Open {
        /// Employee ID
        id: String,

        /// Which link to open
        #[arg(value_enum)]
        link: LinkKind,

        /// Print the link instead of launching it
        #[arg(long)]
        print: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// External profile kinds.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LinkKind {
    Whatsapp,
    Instagram,
    Linkedin,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("staffbook=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = CliConfig::new(&cli.api_url, cli.timeout_secs);

    match cli.command {
        Commands::List { json } => commands::contacts::list(&config, json).await?,
        Commands::Show { id, json } => commands::contacts::show(&config, &id, json).await?,
        Commands::Create(fields) => commands::contacts::create(&config, &fields).await?,
        Commands::Edit { id, fields } => commands::contacts::edit(&config, &id, &fields).await?,
        Commands::Delete { id, yes } => commands::contacts::delete(&config, &id, yes).await?,
        Commands::Open { id, link, print } => {
            commands::contacts::open_link(&config, &id, link, print).await?
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "staffbook", &mut io::stdout());
        }
    }

    Ok(())
}
