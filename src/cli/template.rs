//! Command flows shared by every resource
//!
//! Each resource module only declares its flags and payloads; the
//! create/list/describe/update/delete behaviour lives here once.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::api::resource::{DictionaryScope, Resource, Scope, ServiceVersion};
use crate::cli::Context;
use crate::config::manifest::Manifest;
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::merge::{merge, Overrides};
use crate::output::{self, Render};

/// Flags selecting a service version
#[derive(Args, Debug, Clone)]
pub struct VersionFlags {
    /// Service ID (defaults to service_id in fastly.toml)
    #[arg(short, long)]
    pub service_id: Option<String>,

    /// Number of service version
    #[arg(long)]
    pub version: u32,
}

impl VersionFlags {
    pub fn scope(&self, manifest: &Manifest) -> Result<ServiceVersion, CliError> {
        Ok(ServiceVersion {
            service_id: manifest.require_service_id(self.service_id.as_deref())?,
            version: self.version,
        })
    }
}

/// Flags selecting a named resource on a service version
#[derive(Args, Debug, Clone)]
pub struct NamedTarget {
    #[command(flatten)]
    pub service: VersionFlags,

    /// Name of the resource
    #[arg(short, long)]
    pub name: String,
}

impl NamedTarget {
    pub fn scope(&self, manifest: &Manifest) -> Result<ServiceVersion, CliError> {
        self.service.scope(manifest)
    }
}

/// Flags selecting a dictionary
#[derive(Args, Debug, Clone)]
pub struct DictionaryFlags {
    /// Service ID (defaults to service_id in fastly.toml)
    #[arg(short, long)]
    pub service_id: Option<String>,

    /// The ID of the dictionary
    #[arg(long)]
    pub dictionary_id: String,
}

impl DictionaryFlags {
    pub fn scope(&self, manifest: &Manifest) -> Result<DictionaryScope, CliError> {
        Ok(DictionaryScope {
            service_id: manifest.require_service_id(self.service_id.as_deref())?,
            dictionary_id: self.dictionary_id.clone(),
        })
    }
}

pub async fn create<R, B>(ctx: &mut Context<'_>, scope: R::Scope, body: &B) -> Result<()>
where
    R: Resource,
    B: Serialize,
{
    let item: R = ctx.client.create_resource(&scope, body).await?;

    output::success(
        ctx.out,
        &format!("Created {} {} ({})", R::NOUN, item.name(), item.scope()),
    )
}

pub async fn list<R>(ctx: &mut Context<'_>, scope: R::Scope) -> Result<()>
where
    R: Resource + Render,
{
    let items: Vec<R> = ctx.client.list_resources(&scope).await?;

    if ctx.format == OutputFormat::Json {
        return output::print_json(ctx.out, &items);
    }

    let text = if ctx.verbose {
        output::render_listing(&scope.fields(), &items)
    } else {
        let rows: Vec<Vec<String>> = items.iter().map(Render::row).collect();
        output::render_table(R::COLUMNS, &rows)
    };

    ctx.out.write_all(text.as_bytes())?;
    Ok(())
}

pub async fn describe<R>(ctx: &mut Context<'_>, scope: R::Scope, name: &str) -> Result<()>
where
    R: Resource + Render,
{
    let item: R = ctx.client.get_resource(&scope, name).await?;

    if ctx.format == OutputFormat::Json {
        return output::print_json(ctx.out, &item);
    }

    let text = output::render_detail(&item.scope().fields(), &item);
    ctx.out.write_all(text.as_bytes())?;
    Ok(())
}

/// Fetch the resource, overlay the user's changes and resubmit the full payload.
pub async fn update<R, O>(
    ctx: &mut Context<'_>,
    scope: R::Scope,
    name: &str,
    overrides: O,
) -> Result<()>
where
    R: Resource,
    O: Overrides,
    O::Payload: Serialize,
    for<'a> O::Payload: From<&'a R>,
{
    let snapshot: R = ctx.client.get_resource(&scope, name).await?;
    let payload = merge(&snapshot, overrides);

    let item: R = ctx.client.update_resource(&scope, name, &payload).await?;

    output::success(
        ctx.out,
        &format!("Updated {} {} ({})", R::NOUN, item.name(), item.scope()),
    )
}

pub async fn delete<R>(ctx: &mut Context<'_>, scope: R::Scope, name: &str) -> Result<()>
where
    R: Resource,
{
    ctx.client.delete_resource::<R>(&scope, name).await?;

    output::success(
        ctx.out,
        &format!("Deleted {} {} ({})", R::NOUN, name, scope),
    )
}
