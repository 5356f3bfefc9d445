use anyhow::{Context, Result};
use std::env;

/// Default Yandex Object Storage endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://storage.yandexcloud.net";

/// Signing region matching the default endpoint.
pub const DEFAULT_REGION: &str = "ru-central1";

/// Credentials for the object storage service, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl Config {
    /// Load credentials from environment variables and .env file
    ///
    /// # Errors
    ///
    /// Returns an error if either credential variable is missing or empty
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if it exists

        Self::from_vars(
            env::var("AWS_ACCESS_KEY_ID").ok(),
            env::var("AWS_SECRET_ACCESS_KEY").ok(),
        )
    }

    fn from_vars(
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    ) -> Result<Self> {
        let access_key_id = access_key_id
            .filter(|v| !v.is_empty())
            .context("AWS_ACCESS_KEY_ID not found in environment. Please set it in .env file")?;

        let secret_access_key = secret_access_key.filter(|v| !v.is_empty()).context(
            "AWS_SECRET_ACCESS_KEY not found in environment. Please set it in .env file",
        )?;

        Ok(Self {
            access_key_id,
            secret_access_key,
        })
    }
}

/// Validate S3 bucket name according to AWS rules
pub fn validate_bucket_name(bucket: &str) -> Result<()> {
    if bucket.is_empty() {
        anyhow::bail!("bucket name cannot be empty");
    }

    if bucket.len() < 3 || bucket.len() > 63 {
        anyhow::bail!(
            "bucket name '{}' must be between 3 and 63 characters (got {})",
            bucket,
            bucket.len()
        );
    }

    // Check first and last characters
    if !bucket.chars().next().unwrap().is_ascii_lowercase()
        && !bucket.chars().next().unwrap().is_ascii_digit()
    {
        anyhow::bail!(
            "bucket name '{}' must start with a lowercase letter or number",
            bucket
        );
    }

    if !bucket.chars().last().unwrap().is_ascii_lowercase()
        && !bucket.chars().last().unwrap().is_ascii_digit()
    {
        anyhow::bail!(
            "bucket name '{}' must end with a lowercase letter or number",
            bucket
        );
    }

    // Check for invalid characters
    for c in bucket.chars() {
        if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' && c != '.' {
            anyhow::bail!(
                "bucket name '{}' contains invalid character '{}'. Only lowercase letters, numbers, hyphens, and periods are allowed",
                bucket,
                c
            );
        }
    }

    // Check for consecutive periods
    if bucket.contains("..") {
        anyhow::bail!("bucket name '{}' cannot contain consecutive periods", bucket);
    }

    // Check for IP address format (not allowed)
    if bucket
        .split('.')
        .all(|part| part.parse::<u8>().is_ok() && !part.is_empty())
    {
        anyhow::bail!("bucket name '{}' cannot be formatted as an IP address", bucket);
    }

    Ok(())
}
