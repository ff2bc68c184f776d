use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::common::error::SetupResult;

pub mod s3;

/// Outcome of an ensure-bucket call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketStatus {
    Created,
    AlreadyExisted,
}

/// The object-storage operations the setup flows rely on.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Names of every bucket owned by the caller.
    async fn list_buckets(&self) -> SetupResult<Vec<String>>;

    /// Creates `bucket`. A bucket the caller already owns reports `AlreadyExisted`.
    ///
    /// In us-east-1 S3 answers 200 when the caller already owns the bucket, so
    /// a bucket created between the listing and this call reports `Created` there.
    async fn create_bucket(&self, bucket: &str) -> SetupResult<BucketStatus>;

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> SetupResult<()>;

    /// Streams the file at `path` without loading it into memory.
    async fn put_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> SetupResult<()>;
}
