mod config;
mod content_type;
mod s3;
mod uploader;
mod walker;

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;
use tracing::info;

use config::{Config, DEFAULT_ENDPOINT};
use s3::S3Client;
use uploader::UploadTask;

#[derive(Parser, Debug)]
#[command(
    name = "s3publish",
    version = env!("CARGO_PKG_VERSION"),
    author = "Tyr Chen <tyr.chen@gmail.com>",
    about = "Upload a local directory tree to an S3-compatible bucket",
    long_about = "Recursively uploads every file under a directory to an object storage bucket, \
                  keying each object by its path relative to the upload root and attaching a \
                  Content-Type inferred from the file extension. Credentials come from \
                  AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY (a .env file is honored).",
    after_help = "Examples:\n  \
                  s3publish ./dist my-site-bucket                  # Publish a built site\n  \
                  s3publish ./public assets --endpoint-url https://s3.amazonaws.com\n\n\
                  Environment:\n  \
                  AWS_ACCESS_KEY_ID       access key id (required)\n  \
                  AWS_SECRET_ACCESS_KEY   secret access key (required)\n  \
                  LOG_LEVEL               log verbosity (default: info)\n\n\
                  For more information: https://github.com/tyrchen/s3publish"
)]
struct Cli {
    /// Directory whose files will be uploaded
    folder: PathBuf,

    /// Destination bucket name
    bucket: String,

    /// Object storage endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file early to get LOG_LEVEL
    dotenv::dotenv().ok();

    // Initialize tracing/logging with support for LOG_LEVEL from .env
    let log_level = std::env::var("LOG_LEVEL")
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    info!("s3publish v{}", env!("CARGO_PKG_VERSION"));
    info!("Endpoint: {}", cli.endpoint_url);

    // Credentials and the bucket are checked before any traversal starts
    let config = Config::from_env()?;
    config::validate_bucket_name(&cli.bucket)?;

    if !cli.folder.is_dir() {
        anyhow::bail!("Path is not a directory: {}", cli.folder.display());
    }

    let client = S3Client::new(&config, cli.bucket.clone(), &cli.endpoint_url).await?;

    let mut tasks = Vec::new();
    for path in walker::walk_files(&cli.folder) {
        let key = walker::storage_key(&cli.folder, &path)?;
        let content_type = content_type::resolve_content_type(&path);
        tasks.push(UploadTask {
            local_path: path,
            key,
            content_type,
        });
    }

    if tasks.is_empty() {
        println!(
            "{}",
            style(format!("No files found under {}", cli.folder.display())).yellow()
        );
        return Ok(());
    }

    println!(
        "{}",
        style(format!("📦 Target: s3://{}", cli.bucket)).cyan().bold()
    );

    uploader::run(&client, tasks).await;

    Ok(())
}
