//! Cloudfiles logging endpoint commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::FormatFlags;
use crate::api::models::cloudfiles::{Cloudfiles, CreateCloudfiles, UpdateCloudfiles};
use crate::cli::template::{self, NamedTarget, VersionFlags};
use crate::cli::Context;
use crate::merge::{overlay, Overrides};

#[derive(Args, Debug)]
pub struct CloudfilesArgs {
    #[command(subcommand)]
    pub command: CloudfilesCommand,
}

#[derive(Subcommand, Debug)]
pub enum CloudfilesCommand {
    /// Create a Cloudfiles logging endpoint on a Fastly service version
    #[command(visible_alias = "add")]
    Create {
        #[command(flatten)]
        target: NamedTarget,

        #[command(flatten)]
        settings: CreateFlags,
    },

    /// Delete a Cloudfiles logging endpoint on a Fastly service version
    #[command(visible_alias = "remove")]
    Delete {
        #[command(flatten)]
        target: NamedTarget,
    },

    /// Show detailed information about a Cloudfiles logging endpoint on a Fastly service version
    #[command(visible_alias = "get")]
    Describe {
        #[command(flatten)]
        target: NamedTarget,
    },

    /// List Cloudfiles endpoints on a Fastly service version
    List {
        #[command(flatten)]
        service: VersionFlags,
    },

    /// Update a Cloudfiles logging endpoint on a Fastly service version
    Update {
        #[command(flatten)]
        target: NamedTarget,

        #[command(flatten)]
        changes: CloudfilesChanges,
    },
}

/// Optional Cloudfiles settings shared by create and update
#[derive(Args, Debug, Clone, Default)]
pub struct StorageFlags {
    /// The path to upload logs to
    #[arg(long)]
    pub path: Option<String>,

    /// The region to stream logs to. One of: DFW-Dallas, ORD-Chicago, IAD-Northern Virginia, LON-London, SYD-Sydney, HKG-Hong Kong
    #[arg(long)]
    pub region: Option<String>,

    /// How frequently log files are finalized so they can be available for reading (in seconds, default 3600)
    #[arg(long)]
    pub period: Option<u32>,

    /// What level of GZIP encoding to have when dumping logs (default 0, no compression)
    #[arg(long)]
    pub gzip_level: Option<u32>,

    /// How the message should be formatted. One of: classic (default), loggly, logplex or blank
    #[arg(long)]
    pub message_type: Option<String>,

    /// strftime specified timestamp formatting (default "%Y-%m-%dT%H:%M:%S.000")
    #[arg(long)]
    pub timestamp_format: Option<String>,

    /// A PGP public key that Fastly will use to encrypt your log files before writing them to disk
    #[arg(long, allow_hyphen_values = true)]
    pub public_key: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateFlags {
    /// The username for your Cloudfile account
    #[arg(long)]
    pub user: String,

    /// Your Cloudfile account access key
    #[arg(long, allow_hyphen_values = true)]
    pub access_key: String,

    /// The name of your Cloudfiles container
    #[arg(long = "bucket")]
    pub bucket_name: String,

    #[command(flatten)]
    pub storage: StorageFlags,

    #[command(flatten)]
    pub format: FormatFlags,
}

#[derive(Args, Debug, Default)]
pub struct CloudfilesChanges {
    /// New name of the Cloudfiles logging object
    #[arg(long)]
    pub new_name: Option<String>,

    /// The username for your Cloudfile account
    #[arg(long)]
    pub user: Option<String>,

    /// Your Cloudfile account access key
    #[arg(long, allow_hyphen_values = true)]
    pub access_key: Option<String>,

    /// The name of your Cloudfiles container
    #[arg(long = "bucket")]
    pub bucket_name: Option<String>,

    #[command(flatten)]
    pub storage: StorageFlags,

    #[command(flatten)]
    pub format: FormatFlags,
}

impl Overrides for CloudfilesChanges {
    type Payload = UpdateCloudfiles;

    fn apply(self, payload: &mut UpdateCloudfiles) {
        let storage = self.storage;

        overlay(&mut payload.name, self.new_name);
        overlay(&mut payload.user, self.user);
        overlay(&mut payload.access_key, self.access_key);
        overlay(&mut payload.bucket_name, self.bucket_name);
        overlay(&mut payload.path, storage.path.map(Some));
        overlay(&mut payload.region, storage.region.map(Some));
        overlay(&mut payload.period, storage.period.map(Some));
        overlay(&mut payload.gzip_level, storage.gzip_level.map(Some));
        overlay(&mut payload.message_type, storage.message_type.map(Some));
        overlay(
            &mut payload.timestamp_format,
            storage.timestamp_format.map(Some),
        );
        overlay(&mut payload.public_key, storage.public_key.map(Some));
        self.format.apply(&mut payload.log_format);
    }
}

pub async fn execute(ctx: &mut Context<'_>, args: CloudfilesArgs) -> Result<()> {
    match args.command {
        CloudfilesCommand::Create { target, settings } => {
            let scope = target.scope(&ctx.manifest)?;
            let storage = settings.storage;
            let body = CreateCloudfiles {
                name: target.name,
                user: settings.user,
                access_key: settings.access_key,
                bucket_name: settings.bucket_name,
                path: storage.path,
                region: storage.region,
                public_key: storage.public_key,
                period: storage.period,
                gzip_level: storage.gzip_level,
                message_type: storage.message_type,
                timestamp_format: storage.timestamp_format,
                log_format: settings.format.into_options(),
            };
            template::create::<Cloudfiles, _>(ctx, scope, &body).await
        }

        CloudfilesCommand::Delete { target } => {
            let scope = target.scope(&ctx.manifest)?;
            template::delete::<Cloudfiles>(ctx, scope, &target.name).await
        }

        CloudfilesCommand::Describe { target } => {
            let scope = target.scope(&ctx.manifest)?;
            template::describe::<Cloudfiles>(ctx, scope, &target.name).await
        }

        CloudfilesCommand::List { service } => {
            let scope = service.scope(&ctx.manifest)?;
            template::list::<Cloudfiles>(ctx, scope).await
        }

        CloudfilesCommand::Update { target, changes } => {
            let scope = target.scope(&ctx.manifest)?;
            template::update::<Cloudfiles, _>(ctx, scope, &target.name, changes).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::logging::{LoggingArgs, LoggingCommand};
    use crate::cli::Commands;
    use crate::merge::merge;
    use crate::test_util::{json_response, parse, parse_args, run, run_args};
    use httpmock::MockServer;
    use serde_json::{json, Value};

    const PUBLIC_KEY: &str =
        "-----BEGIN PGP PUBLIC KEY BLOCK-----\nmQENBF\n-----END PGP PUBLIC KEY BLOCK-----";

    fn snapshot_json() -> Value {
        json!({
            "service_id": "123",
            "version": 1,
            "name": "logs",
            "user": "username",
            "access_key": "1234",
            "bucket_name": "my-logs",
            "path": "logs/",
            "region": "ORD",
            "public_key": null,
            "period": "3600",
            "gzip_level": 9,
            "message_type": "classic",
            "timestamp_format": "%Y-%m-%dT%H:%M:%S.000",
            "format": "%h %l %u %t \"%r\" %>s %b",
            "format_version": 2,
            "placement": "none",
            "response_condition": "Prevent default logging",
            "created_at": null,
            "updated_at": null,
            "deleted_at": null
        })
    }

    fn snapshot() -> Cloudfiles {
        serde_json::from_value(snapshot_json()).unwrap()
    }

    fn update_changes(cli: crate::cli::Cli) -> CloudfilesChanges {
        match cli.command {
            Commands::Logging(LoggingArgs {
                command:
                    LoggingCommand::Cloudfiles(CloudfilesArgs {
                        command: CloudfilesCommand::Update { changes, .. },
                    }),
            }) => changes,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn numeric_strings_decode() {
        let cf = snapshot();
        assert_eq!(cf.period, Some(3600));
        assert_eq!(cf.gzip_level, Some(9));
        assert_eq!(cf.log_format.format_version, Some(2));
    }

    #[test]
    fn no_changes_resubmits_snapshot() {
        let payload = merge(&snapshot(), CloudfilesChanges::default());
        assert_eq!(payload, UpdateCloudfiles::from(&snapshot()));
    }

    #[test]
    fn storage_overrides_touch_only_their_fields() {
        let changes = CloudfilesChanges {
            storage: StorageFlags {
                period: Some(60),
                public_key: Some(PUBLIC_KEY.into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let mut expected = UpdateCloudfiles::from(&snapshot());
        expected.period = Some(60);
        expected.public_key = Some(PUBLIC_KEY.into());

        assert_eq!(merge(&snapshot(), changes), expected);
    }

    #[test]
    fn public_key_may_be_a_pem_block() {
        let cli = parse_args(&[
            "logging",
            "cloudfiles",
            "update",
            "-s",
            "123",
            "--version",
            "1",
            "-n",
            "logs",
            "--public-key",
            PUBLIC_KEY,
        ])
        .expect("parse");

        let changes = update_changes(cli);
        assert_eq!(changes.storage.public_key.as_deref(), Some(PUBLIC_KEY));
    }

    #[test]
    fn access_key_may_start_with_a_dash() {
        let line = "logging cloudfiles update -s 123 --version 1 -n logs --access-key -k3y";
        let changes = update_changes(parse(line).expect("parse"));
        assert_eq!(changes.access_key.as_deref(), Some("-k3y"));
    }

    #[tokio::test]
    async fn create_maps_bucket_flag() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/service/123/version/1/logging/cloudfiles")
                    .json_body(json!({
                        "name": "log",
                        "user": "username",
                        "access_key": "foo",
                        "bucket_name": "log",
                        "gzip_level": 2
                    }));
                json_response(
                    then,
                    200,
                    json!({"service_id": "123", "version": 1, "name": "log"}),
                );
            })
            .await;

        let (result, out) = run(
            &server,
            "logging cloudfiles create --service-id 123 --version 1 --name log \
             --user username --access-key foo --bucket log --gzip-level 2",
        )
        .await;

        result.unwrap();
        let created = "Created Cloudfiles logging endpoint log (service 123 version 1)";
        assert!(out.contains(created), "{out}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn update_echoes_snapshot_with_changes() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/service/123/version/1/logging/cloudfiles/logs");
                json_response(then, 200, snapshot_json());
            })
            .await;
        let put = server
            .mock_async(|when, then| {
                when.method("PUT")
                    .path("/service/123/version/1/logging/cloudfiles/logs")
                    .json_body(json!({
                        "name": "logs",
                        "user": "username",
                        "access_key": "1234",
                        "bucket_name": "archive",
                        "path": "logs/",
                        "region": "ORD",
                        "public_key": null,
                        "period": 3600,
                        "gzip_level": 9,
                        "message_type": "classic",
                        "timestamp_format": "%Y-%m-%dT%H:%M:%S.000",
                        "format": "%h %l %u %t \"%r\" %>s %b",
                        "format_version": 2,
                        "placement": "none",
                        "response_condition": "Prevent default logging"
                    }));
                json_response(then, 200, snapshot_json());
            })
            .await;

        let (result, out) = run(
            &server,
            "logging cloudfiles update --service-id 123 --version 1 --name logs --bucket archive",
        )
        .await;

        result.unwrap();
        let updated = "Updated Cloudfiles logging endpoint logs (service 123 version 1)";
        assert!(out.contains(updated), "{out}");
        put.assert_async().await;
    }

    #[tokio::test]
    async fn update_sends_pem_public_key() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/service/123/version/1/logging/cloudfiles/logs");
                json_response(then, 200, snapshot_json());
            })
            .await;
        let payload = UpdateCloudfiles::from(&snapshot());
        let mut expected = serde_json::to_value(payload).unwrap();
        expected["public_key"] = json!(PUBLIC_KEY);
        let put = server
            .mock_async(|when, then| {
                when.method("PUT")
                    .path("/service/123/version/1/logging/cloudfiles/logs")
                    .json_body(expected);
                json_response(then, 200, snapshot_json());
            })
            .await;

        let (result, _) = run_args(
            &server,
            &[
                "logging",
                "cloudfiles",
                "update",
                "-s",
                "123",
                "--version",
                "1",
                "-n",
                "logs",
                "--public-key",
                PUBLIC_KEY,
            ],
        )
        .await;

        result.unwrap();
        put.assert_async().await;
    }

    #[tokio::test]
    async fn describe_as_json() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/service/123/version/1/logging/cloudfiles/logs");
                json_response(then, 200, snapshot_json());
            })
            .await;

        let line = "logging cloudfiles describe -s 123 --version 1 -n logs -o json";
        let (result, out) = run(&server, line).await;

        result.unwrap();
        let printed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(printed["bucket_name"], "my-logs");
        assert_eq!(printed["period"], 3600);
    }

    #[tokio::test]
    async fn delete_reports_endpoint() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("DELETE")
                    .path("/service/123/version/1/logging/cloudfiles/logs");
                json_response(then, 200, json!({"status": "ok"}));
            })
            .await;

        let line = "logging cloudfiles delete -s 123 --version 1 -n logs";
        let (result, out) = run(&server, line).await;

        result.unwrap();
        let deleted = "Deleted Cloudfiles logging endpoint logs (service 123 version 1)";
        assert!(out.contains(deleted), "{out}");
        mock.assert_async().await;
    }
}
