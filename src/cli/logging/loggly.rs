//! Loggly logging endpoint commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::FormatFlags;
use crate::api::models::loggly::{CreateLoggly, Loggly, UpdateLoggly};
use crate::cli::template::{self, NamedTarget, VersionFlags};
use crate::cli::Context;
use crate::merge::{overlay, Overrides};

#[derive(Args, Debug)]
pub struct LogglyArgs {
    #[command(subcommand)]
    pub command: LogglyCommand,
}

#[derive(Subcommand, Debug)]
pub enum LogglyCommand {
    /// Create a Loggly logging endpoint on a Fastly service version
    #[command(visible_alias = "add")]
    Create {
        #[command(flatten)]
        target: NamedTarget,

        /// The token to use for authentication (https://www.loggly.com/docs/customer-token-authentication-token/)
        #[arg(long, allow_hyphen_values = true)]
        auth_token: String,

        #[command(flatten)]
        format: FormatFlags,
    },

    /// Delete a Loggly logging endpoint on a Fastly service version
    #[command(visible_alias = "remove")]
    Delete {
        #[command(flatten)]
        target: NamedTarget,
    },

    /// Show detailed information about a Loggly logging endpoint on a Fastly service version
    #[command(visible_alias = "get")]
    Describe {
        #[command(flatten)]
        target: NamedTarget,
    },

    /// List Loggly endpoints on a Fastly service version
    List {
        #[command(flatten)]
        service: VersionFlags,
    },

    /// Update a Loggly logging endpoint on a Fastly service version
    Update {
        #[command(flatten)]
        target: NamedTarget,

        #[command(flatten)]
        changes: LogglyChanges,
    },
}

#[derive(Args, Debug, Default)]
pub struct LogglyChanges {
    /// New name of the Loggly logging object
    #[arg(long)]
    pub new_name: Option<String>,

    /// The token to use for authentication
    #[arg(long, allow_hyphen_values = true)]
    pub auth_token: Option<String>,

    #[command(flatten)]
    pub format: FormatFlags,
}

impl Overrides for LogglyChanges {
    type Payload = UpdateLoggly;

    fn apply(self, payload: &mut UpdateLoggly) {
        overlay(&mut payload.name, self.new_name);
        overlay(&mut payload.token, self.auth_token);
        self.format.apply(&mut payload.log_format);
    }
}

pub async fn execute(ctx: &mut Context<'_>, args: LogglyArgs) -> Result<()> {
    match args.command {
        LogglyCommand::Create {
            target,
            auth_token,
            format,
        } => {
            let scope = target.scope(&ctx.manifest)?;
            let body = CreateLoggly {
                name: target.name,
                token: auth_token,
                log_format: format.into_options(),
            };
            template::create::<Loggly, _>(ctx, scope, &body).await
        }

        LogglyCommand::Delete { target } => {
            let scope = target.scope(&ctx.manifest)?;
            template::delete::<Loggly>(ctx, scope, &target.name).await
        }

        LogglyCommand::Describe { target } => {
            let scope = target.scope(&ctx.manifest)?;
            template::describe::<Loggly>(ctx, scope, &target.name).await
        }

        LogglyCommand::List { service } => {
            let scope = service.scope(&ctx.manifest)?;
            template::list::<Loggly>(ctx, scope).await
        }

        LogglyCommand::Update { target, changes } => {
            let scope = target.scope(&ctx.manifest)?;
            template::update::<Loggly, _>(ctx, scope, &target.name, changes).await
        }
    }
}
