use clap::Parser;
use httpmock::{MockServer, Then};
use serde_json::Value;

use crate::api::FastlyClient;
use crate::cli::{self, Cli, Context};
use crate::config::manifest::Manifest;

/// Respond with `body` as JSON.
pub(crate) fn json_response(then: Then, status: u16, body: Value) -> Then {
    then.status(status)
        .header("content-type", "application/json")
        .json_body(body)
}

/// Parse a whitespace-separated command line.
pub(crate) fn parse(line: &str) -> Result<Cli, clap::Error> {
    parse_args(&line.split_whitespace().collect::<Vec<_>>())
}

/// Parse arguments that may themselves contain whitespace.
pub(crate) fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("edgecfg").chain(args.iter().copied()))
}

/// Run a command line against `server` without a local fastly.toml and
/// return the result together with everything written to stdout.
pub(crate) async fn run(server: &MockServer, line: &str) -> (anyhow::Result<()>, String) {
    run_args(server, &line.split_whitespace().collect::<Vec<_>>()).await
}

pub(crate) async fn run_args(server: &MockServer, args: &[&str]) -> (anyhow::Result<()>, String) {
    let cli = parse_args(args)
        .unwrap_or_else(|e| panic!("invalid test command line {args:?}: {e}"));

    let client = FastlyClient::new(&server.base_url(), Some("token".to_string()))
        .expect("mock server URL is a valid endpoint");

    let mut out = Vec::new();
    let result = {
        let mut ctx = Context {
            client,
            manifest: Manifest::default(),
            verbose: cli.verbose,
            format: cli.output.unwrap_or_default(),
            out: &mut out,
        };
        cli::execute(&mut ctx, cli.command).await
    };

    (result, String::from_utf8(out).expect("stdout is UTF-8"))
}
