//! edgecfg - manage Fastly edge dictionaries and logging endpoints
//!
//! Update commands fetch the current resource, overlay the flags the user
//! supplied and write the whole object back.

mod api;
mod cli;
mod config;
mod error;
mod merge;
mod output;

#[cfg(test)]
mod test_util;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::FastlyClient;
use crate::cli::{Cli, Context};
use crate::config::manifest::Manifest;
use crate::config::{Config, Overrides};

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(Overrides {
        token: cli.token,
        endpoint: cli.endpoint,
        format: cli.output,
    })?;

    let client = FastlyClient::from_config(&config)?;
    let manifest = Manifest::read_local();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.verbose {
        out.write_all(config.describe().as_bytes())?;
    }

    let mut ctx = Context {
        client,
        manifest,
        verbose: cli.verbose,
        format: config.output_format,
        out: &mut out,
    };

    cli::execute(&mut ctx, cli.command).await
}
