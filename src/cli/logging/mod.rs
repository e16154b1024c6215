//! Logging endpoint commands

pub mod bigquery;
pub mod cloudfiles;
pub mod loggly;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::models::{LogFormat, LogFormatOptions};
use crate::cli::Context;
use crate::merge::overlay;

#[derive(Args, Debug)]
pub struct LoggingArgs {
    #[command(subcommand)]
    pub command: LoggingCommand,
}

#[derive(Subcommand, Debug)]
pub enum LoggingCommand {
    /// Manipulate Fastly service version BigQuery logging endpoints
    #[command(name = "bigquery")]
    BigQuery(bigquery::BigQueryArgs),

    /// Manipulate Fastly service version Cloudfiles logging endpoints
    Cloudfiles(cloudfiles::CloudfilesArgs),

    /// Manipulate Fastly service version Loggly logging endpoints
    Loggly(loggly::LogglyArgs),
}

/// Log line formatting flags accepted by every logging endpoint
#[derive(Args, Debug, Clone, Default)]
pub struct FormatFlags {
    /// Apache style log formatting
    #[arg(long, allow_hyphen_values = true)]
    pub format: Option<String>,

    /// The version of the custom logging format used for the configured endpoint. Can be either 2 (default) or 1
    #[arg(long)]
    pub format_version: Option<u32>,

    /// Where in the generated VCL the logging call should be placed, overriding any format_version default. Can be none or waf_debug
    #[arg(long)]
    pub placement: Option<String>,

    /// The name of an existing condition in the configured endpoint, or leave blank to always execute
    #[arg(long)]
    pub response_condition: Option<String>,
}

impl FormatFlags {
    /// Options for a create request; unset flags are omitted
    pub fn into_options(self) -> LogFormatOptions {
        LogFormatOptions {
            format: self.format,
            format_version: self.format_version,
            placement: self.placement,
            response_condition: self.response_condition,
        }
    }

    /// Overlay the supplied flags onto an update payload
    pub fn apply(self, log_format: &mut LogFormat) {
        overlay(&mut log_format.format, self.format);
        overlay(
            &mut log_format.format_version,
            self.format_version.map(Some),
        );
        overlay(&mut log_format.placement, self.placement.map(Some));
        overlay(
            &mut log_format.response_condition,
            self.response_condition.map(Some),
        );
    }
}

pub async fn execute(ctx: &mut Context<'_>, args: LoggingArgs) -> Result<()> {
    match args.command {
        LoggingCommand::BigQuery(args) => bigquery::execute(ctx, args).await,
        LoggingCommand::Cloudfiles(args) => cloudfiles::execute(ctx, args).await,
        LoggingCommand::Loggly(args) => loggly::execute(ctx, args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use crate::test_util::parse;

    fn snapshot() -> LogFormat {
        LogFormat {
            format: "%h %l %u %t".into(),
            format_version: Some(2),
            placement: None,
            response_condition: Some("is_error".into()),
        }
    }

    #[test]
    fn unset_flags_leave_format_alone() {
        let mut log_format = snapshot();
        FormatFlags::default().apply(&mut log_format);
        assert_eq!(log_format, snapshot());
    }

    #[test]
    fn supplied_flags_replace_only_their_fields() {
        let mut log_format = snapshot();
        FormatFlags {
            format_version: Some(1),
            placement: Some("waf_debug".into()),
            ..Default::default()
        }
        .apply(&mut log_format);

        assert_eq!(log_format.format, "%h %l %u %t");
        assert_eq!(log_format.format_version, Some(1));
        assert_eq!(log_format.placement.as_deref(), Some("waf_debug"));
        assert_eq!(log_format.response_condition.as_deref(), Some("is_error"));
    }

    #[test]
    fn create_options_carry_supplied_flags() {
        let options = FormatFlags {
            format: Some("%h".into()),
            ..Default::default()
        }
        .into_options();

        assert_eq!(options.format.as_deref(), Some("%h"));
        assert!(options.format_version.is_none());
    }

    #[test]
    fn format_may_start_with_a_dash() {
        let line = "logging loggly update -s 123 --version 1 -n logs --format -%h";
        let cli = parse(line).expect("parse");

        match cli.command {
            Commands::Logging(LoggingArgs {
                command: LoggingCommand::Loggly(args),
            }) => match args.command {
                loggly::LogglyCommand::Update { changes, .. } => {
                    assert_eq!(changes.format.format.as_deref(), Some("-%h"))
                }
                other => panic!("unexpected command {other:?}"),
            },
            other => panic!("unexpected command {other:?}"),
        }
    }
}
