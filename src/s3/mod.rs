pub mod client;
pub mod error;
pub mod upload;

pub use client::S3Client;
pub use error::UploadError;
