//! Dictionary item commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::models::dictionary_item::{DictionaryItem, ItemBody};
use crate::cli::template::{self, DictionaryFlags};
use crate::cli::Context;
use crate::merge::{overlay, Overrides};

#[derive(Args, Debug)]
pub struct DictionaryItemArgs {
    #[command(subcommand)]
    pub command: DictionaryItemCommand,
}

/// Flags selecting one item of a dictionary
#[derive(Args, Debug, Clone)]
pub struct ItemTarget {
    #[command(flatten)]
    pub dictionary: DictionaryFlags,

    /// Dictionary item key
    #[arg(long)]
    pub key: String,
}

#[derive(Subcommand, Debug)]
pub enum DictionaryItemCommand {
    /// Create a new item on a Fastly edge dictionary
    #[command(visible_alias = "add")]
    Create {
        #[command(flatten)]
        target: ItemTarget,

        /// Dictionary item value
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },

    /// Delete an item from a Fastly edge dictionary
    #[command(visible_alias = "remove")]
    Delete {
        #[command(flatten)]
        target: ItemTarget,
    },

    /// Show detailed information about a Fastly edge dictionary item
    #[command(visible_alias = "get")]
    Describe {
        #[command(flatten)]
        target: ItemTarget,
    },

    /// List items in a Fastly edge dictionary
    List {
        #[command(flatten)]
        dictionary: DictionaryFlags,
    },

    /// Update an item in a Fastly edge dictionary
    Update {
        #[command(flatten)]
        target: ItemTarget,

        #[command(flatten)]
        changes: ItemChanges,
    },
}

#[derive(Args, Debug, Default)]
pub struct ItemChanges {
    /// Dictionary item value
    #[arg(long, allow_hyphen_values = true)]
    pub value: Option<String>,
}

impl Overrides for ItemChanges {
    type Payload = ItemBody;

    fn apply(self, payload: &mut ItemBody) {
        overlay(&mut payload.item_value, self.value);
    }
}

pub async fn execute(ctx: &mut Context<'_>, args: DictionaryItemArgs) -> Result<()> {
    match args.command {
        DictionaryItemCommand::Create { target, value } => {
            let scope = target.dictionary.scope(&ctx.manifest)?;
            let body = ItemBody {
                item_key: target.key,
                item_value: value,
            };
            template::create::<DictionaryItem, _>(ctx, scope, &body).await
        }

        DictionaryItemCommand::Delete { target } => {
            let scope = target.dictionary.scope(&ctx.manifest)?;
            template::delete::<DictionaryItem>(ctx, scope, &target.key).await
        }

        DictionaryItemCommand::Describe { target } => {
            let scope = target.dictionary.scope(&ctx.manifest)?;
            template::describe::<DictionaryItem>(ctx, scope, &target.key).await
        }

        DictionaryItemCommand::List { dictionary } => {
            let scope = dictionary.scope(&ctx.manifest)?;
            template::list::<DictionaryItem>(ctx, scope).await
        }

        DictionaryItemCommand::Update { target, changes } => {
            let scope = target.dictionary.scope(&ctx.manifest)?;
            template::update::<DictionaryItem, _>(ctx, scope, &target.key, changes).await
        }
    }
}
