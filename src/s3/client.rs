use anyhow::Result;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use std::path::Path;

use crate::config::{Config, DEFAULT_REGION};
use crate::uploader::ObjectStore;

use super::error::UploadError;
use super::upload::upload_file;

pub struct S3Client {
    client: Client,
    bucket: String,
}

impl S3Client {
    /// Build a client for an S3-compatible endpoint with static
    /// credentials. SigV4 signing is the SDK default.
    pub async fn new(config: &Config, bucket: String, endpoint_url: &str) -> Result<Self> {
        let credentials = aws_sdk_s3::config::Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "s3publish",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(DEFAULT_REGION))
            .endpoint_url(endpoint_url)
            .credentials_provider(credentials)
            .load()
            .await;

        let client = Client::new(&sdk_config);

        Ok(Self { client, bucket })
    }
}

impl ObjectStore for S3Client {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn put_file(
        &self,
        key: &str,
        local_path: &Path,
        content_type: &str,
    ) -> Result<(), UploadError> {
        upload_file(&self.client, &self.bucket, key, local_path, content_type).await
    }
}
