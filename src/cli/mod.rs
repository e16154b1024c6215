//! CLI commands module

pub mod dictionary;
pub mod dictionary_item;
pub mod logging;
pub mod template;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

use crate::api::FastlyClient;
use crate::config::manifest::Manifest;
use crate::config::OutputFormat;

/// edgecfg - Fastly configuration CLI
#[derive(Parser, Debug)]
#[command(name = "edgecfg")]
#[command(version)]
#[command(about = "Manage Fastly edge dictionaries and logging endpoints", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for describe and list
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Fastly API token (overrides FASTLY_API_TOKEN and the config file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Fastly API endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manipulate Fastly edge dictionaries
    Dictionary(dictionary::DictionaryArgs),

    /// Manipulate Fastly edge dictionary items
    DictionaryItem(dictionary_item::DictionaryItemArgs),

    /// Manipulate Fastly service version logging endpoints
    Logging(logging::LoggingArgs),
}

/// Everything a command needs, built once per invocation
pub struct Context<'a> {
    pub client: FastlyClient,
    pub manifest: Manifest,
    pub verbose: bool,
    pub format: OutputFormat,
    pub out: &'a mut dyn Write,
}

pub async fn execute(ctx: &mut Context<'_>, command: Commands) -> Result<()> {
    match command {
        Commands::Dictionary(args) => dictionary::execute(ctx, args).await,
        Commands::DictionaryItem(args) => dictionary_item::execute(ctx, args).await,
        Commands::Logging(args) => logging::execute(ctx, args).await,
    }
}
