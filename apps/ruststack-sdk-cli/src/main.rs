//! RustStack SDK CLI - a small front end over the S3 and Rekognition clients.
//!
//! Configuration starts from the standard AWS environment variables and is
//! then overridden by command-line flags.
//!
//! # Usage
//!
//! ```text
//! ruststack-sdk --endpoint-url http://localhost:4566 --path-style mb demo-bucket
//! ruststack-sdk put demo-bucket notes/a.txt ./a.txt
//! ruststack-sdk ls demo-bucket --prefix notes/
//! ruststack-sdk presign demo-bucket notes/a.txt --expires 600
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` / `AWS_DEFAULT_REGION` | `us-east-1` | Region |
//! | `AWS_ENDPOINT_URL` | *(unset)* | Custom endpoint |
//! | `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` | *(unset)* | Credentials |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::TryStreamExt;
use ruststack_sdk_core::ClientConfig;
use ruststack_sdk_rekognition::RekognitionClient;
use ruststack_sdk_rekognition::input::{DetectLabelsInput, ListCollectionsInput};
use ruststack_sdk_rekognition::types::Image;
use ruststack_sdk_s3::input::{
    CreateBucketInput, DeleteBucketInput, DeleteObjectInput, GetObjectInput, HeadBucketInput,
    ListBucketsInput, ListObjectsV2Input, PutObjectInput,
};
use ruststack_sdk_s3::{DEFAULT_WAITER_CONFIG, S3Client, StreamingBlob, WaiterConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ruststack-sdk")]
#[command(version, about = "Talk to S3 and Rekognition with the RustStack SDK", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Region (overrides `AWS_REGION`)
    #[arg(long, global = true)]
    region: Option<String>,

    /// Custom endpoint, e.g. http://localhost:4566
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Force path-style S3 addressing
    #[arg(long, global = true)]
    path_style: bool,

    /// Log level filter
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List buckets, or the objects of a bucket
    Ls {
        /// Bucket to list; lists all buckets when omitted
        bucket: Option<String>,

        /// Only keys starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Create a bucket
    Mb { bucket: String },

    /// Delete an empty bucket
    Rb { bucket: String },

    /// Upload a local file
    Put {
        bucket: String,
        key: String,
        file: PathBuf,

        /// Content-Type of the object
        #[arg(long)]
        content_type: Option<String>,
    },

    /// Download an object to a local file
    Get {
        bucket: String,
        key: String,
        file: PathBuf,
    },

    /// Delete an object
    Rm { bucket: String, key: String },

    /// Block until a bucket exists
    WaitBucket {
        bucket: String,

        /// Give up after this many seconds
        #[arg(long, default_value_t = DEFAULT_WAITER_CONFIG.timeout.as_secs())]
        timeout: u64,
    },

    /// Print a presigned URL for an object
    Presign {
        bucket: String,
        key: String,

        /// Validity in seconds (at most 7 days)
        #[arg(long, default_value_t = 900)]
        expires: u64,

        /// Presign an upload instead of a download
        #[arg(long)]
        put: bool,
    },

    /// List Rekognition face collections
    Collections,

    /// Detect labels in an image stored in S3
    DetectLabels {
        bucket: String,
        key: String,

        /// Minimum confidence, 0 to 100
        #[arg(long, default_value_t = 70.0)]
        min_confidence: f32,
    },
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `--log-level` value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    Ok(())
}

/// Environment configuration with command-line overrides applied.
fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(region) = &cli.region {
        config.region = region.as_str().into();
    }
    if let Some(url) = &cli.endpoint_url {
        config.endpoint_url = Some(url.clone());
    }
    if cli.path_style {
        config.force_path_style = true;
    }
    config
}

async fn run_s3(client: &S3Client, command: Command) -> Result<()> {
    match command {
        Command::Ls {
            bucket: None,
            prefix,
        } => {
            let mut buckets = client.list_buckets_items(ListBucketsInput {
                prefix,
                ..Default::default()
            });
            while let Some(bucket) = buckets.try_next().await? {
                let created = bucket
                    .creation_date
                    .map(|d| d.to_rfc3339())
                    .unwrap_or_default();
                println!("{created:>25}  {}", bucket.name.unwrap_or_default());
            }
        }
        Command::Ls {
            bucket: Some(bucket),
            prefix,
        } => {
            let mut objects = client.list_objects_v2_items(ListObjectsV2Input {
                bucket,
                prefix,
                ..Default::default()
            });
            while let Some(object) = objects.try_next().await? {
                println!(
                    "{:>12}  {}",
                    object.size.unwrap_or_default(),
                    object.key.unwrap_or_default()
                );
            }
        }
        Command::Mb { bucket } => {
            let output = client
                .create_bucket(CreateBucketInput {
                    bucket: bucket.clone(),
                    ..Default::default()
                })
                .await
                .with_context(|| format!("cannot create bucket {bucket}"))?;
            info!(bucket = %bucket, location = ?output.location, "bucket created");
            println!("make_bucket: {bucket}");
        }
        Command::Rb { bucket } => {
            client
                .delete_bucket(DeleteBucketInput {
                    bucket: bucket.clone(),
                    ..Default::default()
                })
                .await
                .with_context(|| format!("cannot delete bucket {bucket}"))?;
            println!("remove_bucket: {bucket}");
        }
        Command::Put {
            bucket,
            key,
            file,
            content_type,
        } => {
            let data = tokio::fs::read(&file)
                .await
                .with_context(|| format!("cannot read {}", file.display()))?;
            let size = data.len();
            let output = client
                .put_object(PutObjectInput {
                    bucket: bucket.clone(),
                    key: key.clone(),
                    body: StreamingBlob::new(data),
                    content_type,
                    compute_content_md5: true,
                    ..Default::default()
                })
                .await
                .with_context(|| format!("cannot upload s3://{bucket}/{key}"))?;
            debug!(size, e_tag = ?output.e_tag, "object uploaded");
            println!("upload: {} to s3://{bucket}/{key}", file.display());
        }
        Command::Get { bucket, key, file } => {
            let output = client
                .get_object(GetObjectInput {
                    bucket: bucket.clone(),
                    key: key.clone(),
                    ..Default::default()
                })
                .await
                .with_context(|| format!("cannot download s3://{bucket}/{key}"))?;
            let data = output.body.into_bytes();
            tokio::fs::write(&file, &data)
                .await
                .with_context(|| format!("cannot write {}", file.display()))?;
            println!("download: s3://{bucket}/{key} to {}", file.display());
        }
        Command::Rm { bucket, key } => {
            client
                .delete_object(DeleteObjectInput {
                    bucket: bucket.clone(),
                    key: key.clone(),
                    ..Default::default()
                })
                .await
                .with_context(|| format!("cannot delete s3://{bucket}/{key}"))?;
            println!("delete: s3://{bucket}/{key}");
        }
        Command::WaitBucket { bucket, timeout } => {
            let config = WaiterConfig::new(DEFAULT_WAITER_CONFIG.delay, Duration::from_secs(timeout));
            client
                .bucket_exists_waiter(HeadBucketInput {
                    bucket: bucket.clone(),
                    ..Default::default()
                })
                .with_config(config)
                .wait()
                .await
                .with_context(|| format!("bucket {bucket} did not appear"))?;
            println!("bucket_exists: {bucket}");
        }
        Command::Presign {
            bucket,
            key,
            expires,
            put,
        } => {
            let expires = Duration::from_secs(expires);
            let url = if put {
                client.presign_put_object(
                    PutObjectInput {
                        bucket,
                        key,
                        ..Default::default()
                    },
                    expires,
                )?
            } else {
                client.presign_get_object(
                    GetObjectInput {
                        bucket,
                        key,
                        ..Default::default()
                    },
                    expires,
                )?
            };
            println!("{url}");
        }
        Command::Collections | Command::DetectLabels { .. } => {
            anyhow::bail!("not an S3 command")
        }
    }
    Ok(())
}

async fn run_rekognition(client: &RekognitionClient, command: Command) -> Result<()> {
    match command {
        Command::Collections => {
            let ids: Vec<String> = client
                .list_collections_items(ListCollectionsInput::default())
                .try_collect()
                .await
                .context("cannot list collections")?;
            for id in ids {
                println!("{id}");
            }
        }
        Command::DetectLabels {
            bucket,
            key,
            min_confidence,
        } => {
            let output = client
                .detect_labels(DetectLabelsInput {
                    image: Image::from_s3(bucket, key),
                    min_confidence: Some(min_confidence),
                    ..Default::default()
                })
                .await
                .context("cannot detect labels")?;
            for label in &output.labels {
                println!(
                    "{:>6.2}  {}",
                    label.confidence.unwrap_or_default(),
                    label.name.as_deref().unwrap_or_default()
                );
            }
        }
        _ => anyhow::bail!("not a Rekognition command"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;

    let config = build_config(&cli);
    debug!(
        region = %config.region,
        endpoint_url = ?config.endpoint_url,
        force_path_style = config.force_path_style,
        signed = config.credentials.is_some(),
        "client configuration",
    );

    match cli.command {
        command @ (Command::Collections | Command::DetectLabels { .. }) => {
            let client = RekognitionClient::new(config)?;
            run_rekognition(&client, command).await
        }
        command => {
            let client = S3Client::new(config)?;
            run_s3(&client, command).await
        }
    }
}
