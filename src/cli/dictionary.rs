//! Dictionary commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::models::dictionary::{CreateDictionary, Dictionary, UpdateDictionary};
use crate::cli::template::{self, NamedTarget, VersionFlags};
use crate::cli::Context;
use crate::merge::{overlay, Overrides};

#[derive(Args, Debug)]
pub struct DictionaryArgs {
    #[command(subcommand)]
    pub command: DictionaryCommand,
}

#[derive(Subcommand, Debug)]
pub enum DictionaryCommand {
    /// Create a dictionary on a Fastly service version
    #[command(visible_alias = "add")]
    Create {
        #[command(flatten)]
        target: NamedTarget,

        /// Whether items in the dictionary are hidden from reads
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        write_only: Option<bool>,
    },

    /// Delete a dictionary on a Fastly service version
    #[command(visible_alias = "remove")]
    Delete {
        #[command(flatten)]
        target: NamedTarget,
    },

    /// Show detailed information about a dictionary on a Fastly service version
    #[command(visible_alias = "get")]
    Describe {
        #[command(flatten)]
        target: NamedTarget,
    },

    /// List dictionaries on a Fastly service version
    List {
        #[command(flatten)]
        service: VersionFlags,
    },

    /// Update a dictionary on a Fastly service version
    Update {
        #[command(flatten)]
        target: NamedTarget,

        #[command(flatten)]
        changes: DictionaryChanges,
    },
}

#[derive(Args, Debug, Default)]
pub struct DictionaryChanges {
    /// New dictionary name
    #[arg(long)]
    pub new_name: Option<String>,

    /// Whether items in the dictionary are hidden from reads
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub write_only: Option<bool>,
}

impl Overrides for DictionaryChanges {
    type Payload = UpdateDictionary;

    fn apply(self, payload: &mut UpdateDictionary) {
        overlay(&mut payload.name, self.new_name);
        overlay(&mut payload.write_only, self.write_only);
    }
}

pub async fn execute(ctx: &mut Context<'_>, args: DictionaryArgs) -> Result<()> {
    match args.command {
        DictionaryCommand::Create { target, write_only } => {
            let scope = target.scope(&ctx.manifest)?;
            let body = CreateDictionary {
                name: target.name,
                write_only,
            };
            template::create::<Dictionary, _>(ctx, scope, &body).await
        }

        DictionaryCommand::Delete { target } => {
            let scope = target.scope(&ctx.manifest)?;
            template::delete::<Dictionary>(ctx, scope, &target.name).await
        }

        DictionaryCommand::Describe { target } => {
            let scope = target.scope(&ctx.manifest)?;
            template::describe::<Dictionary>(ctx, scope, &target.name).await
        }

        DictionaryCommand::List { service } => {
            let scope = service.scope(&ctx.manifest)?;
            template::list::<Dictionary>(ctx, scope).await
        }

        DictionaryCommand::Update { target, changes } => {
            let scope = target.scope(&ctx.manifest)?;
            template::update::<Dictionary, _>(ctx, scope, &target.name, changes).await
        }
    }
}
