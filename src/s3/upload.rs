use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::{Client, primitives::ByteStream};
use std::path::Path;
use tracing::debug;

use super::error::UploadError;

/// Upload one local file to the bucket under the given key, attaching the
/// content type. One PutObject, no retries.
pub async fn upload_file(
    client: &Client,
    bucket: &str,
    key: &str,
    local_path: &Path,
    content_type: &str,
) -> Result<(), UploadError> {
    let metadata = tokio::fs::metadata(local_path)
        .await
        .map_err(|e| UploadError::from_io_error(e, local_path))?;
    let file_size = metadata.len();

    debug!(
        "Uploading {} ({} bytes, {}) as {}",
        local_path.display(),
        file_size,
        content_type,
        key
    );

    let body = ByteStream::from_path(local_path)
        .await
        .map_err(|e| UploadError::Api {
            message: e.to_string(),
        })?;

    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .content_type(content_type)
        .content_length(file_size as i64)
        .send()
        .await
        .map_err(|e| UploadError::from_aws_error(bucket, DisplayErrorContext(e)))?;

    Ok(())
}
