//! BigQuery logging endpoint commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::FormatFlags;
use crate::api::models::bigquery::{BigQuery, CreateBigQuery, UpdateBigQuery};
use crate::cli::template::{self, NamedTarget, VersionFlags};
use crate::cli::Context;
use crate::merge::{overlay, Overrides};

#[derive(Args, Debug)]
pub struct BigQueryArgs {
    #[command(subcommand)]
    pub command: BigQueryCommand,
}

#[derive(Subcommand, Debug)]
pub enum BigQueryCommand {
    /// Create a BigQuery logging endpoint on a Fastly service version
    #[command(visible_alias = "add")]
    Create {
        #[command(flatten)]
        target: NamedTarget,

        #[command(flatten)]
        settings: CreateFlags,
    },

    /// Delete a BigQuery logging endpoint on a Fastly service version
    #[command(visible_alias = "remove")]
    Delete {
        #[command(flatten)]
        target: NamedTarget,
    },

    /// Show detailed information about a BigQuery logging endpoint on a Fastly service version
    #[command(visible_alias = "get")]
    Describe {
        #[command(flatten)]
        target: NamedTarget,
    },

    /// List BigQuery endpoints on a Fastly service version
    List {
        #[command(flatten)]
        service: VersionFlags,
    },

    /// Update a BigQuery logging endpoint on a Fastly service version
    Update {
        #[command(flatten)]
        target: NamedTarget,

        #[command(flatten)]
        changes: BigQueryChanges,
    },
}

#[derive(Args, Debug)]
pub struct CreateFlags {
    /// Your Google Cloud Platform project ID
    #[arg(long)]
    pub project_id: String,

    /// Your BigQuery dataset
    #[arg(long)]
    pub dataset: String,

    /// Your BigQuery table
    #[arg(long)]
    pub table: String,

    /// Your Google Cloud Platform service account email address
    #[arg(long)]
    pub user: String,

    /// Your Google Cloud Platform account secret key
    #[arg(long, allow_hyphen_values = true)]
    pub secret_key: String,

    /// BigQuery table name suffix template
    #[arg(long)]
    pub template_suffix: Option<String>,

    #[command(flatten)]
    pub format: FormatFlags,
}

#[derive(Args, Debug, Default)]
pub struct BigQueryChanges {
    /// New name of the BigQuery logging object
    #[arg(long)]
    pub new_name: Option<String>,

    /// Your Google Cloud Platform project ID
    #[arg(long)]
    pub project_id: Option<String>,

    /// Your BigQuery dataset
    #[arg(long)]
    pub dataset: Option<String>,

    /// Your BigQuery table
    #[arg(long)]
    pub table: Option<String>,

    /// BigQuery table name suffix template
    #[arg(long)]
    pub template_suffix: Option<String>,

    /// Your Google Cloud Platform service account email address
    #[arg(long)]
    pub user: Option<String>,

    /// Your Google Cloud Platform account secret key
    #[arg(long, allow_hyphen_values = true)]
    pub secret_key: Option<String>,

    #[command(flatten)]
    pub format: FormatFlags,
}

impl Overrides for BigQueryChanges {
    type Payload = UpdateBigQuery;

    fn apply(self, payload: &mut UpdateBigQuery) {
        overlay(&mut payload.name, self.new_name);
        overlay(&mut payload.project_id, self.project_id);
        overlay(&mut payload.dataset, self.dataset);
        overlay(&mut payload.table, self.table);
        overlay(
            &mut payload.template_suffix,
            self.template_suffix.map(Some),
        );
        overlay(&mut payload.user, self.user);
        overlay(&mut payload.secret_key, self.secret_key);
        self.format.apply(&mut payload.log_format);
    }
}

pub async fn execute(ctx: &mut Context<'_>, args: BigQueryArgs) -> Result<()> {
    match args.command {
        BigQueryCommand::Create { target, settings } => {
            let scope = target.scope(&ctx.manifest)?;
            let body = CreateBigQuery {
                name: target.name,
                project_id: settings.project_id,
                dataset: settings.dataset,
                table: settings.table,
                user: settings.user,
                secret_key: settings.secret_key,
                template_suffix: settings.template_suffix,
                log_format: settings.format.into_options(),
            };
            template::create::<BigQuery, _>(ctx, scope, &body).await
        }

        BigQueryCommand::Delete { target } => {
            let scope = target.scope(&ctx.manifest)?;
            template::delete::<BigQuery>(ctx, scope, &target.name).await
        }

        BigQueryCommand::Describe { target } => {
            let scope = target.scope(&ctx.manifest)?;
            template::describe::<BigQuery>(ctx, scope, &target.name).await
        }

        BigQueryCommand::List { service } => {
            let scope = service.scope(&ctx.manifest)?;
            template::list::<BigQuery>(ctx, scope).await
        }

        BigQueryCommand::Update { target, changes } => {
            let scope = target.scope(&ctx.manifest)?;
            template::update::<BigQuery, _>(ctx, scope, &target.name, changes).await
        }
    }
}
