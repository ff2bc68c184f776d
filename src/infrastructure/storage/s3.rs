use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::{debug, info};

use super::{BucketStatus, ObjectStore};
use crate::common::error::{SetupError, SetupResult};
use crate::config::settings::DEFAULT_REGION;

const SERVICE: &str = "Amazon S3";

#[derive(Clone)]
pub struct StorageService {
    pub client: Client,
    pub region: String,
}

impl StorageService {
    pub fn new(sdk_config: &aws_config::SdkConfig, region: &str) -> Self {
        let client = Client::new(sdk_config);

        info!("✅ S3 client ready ({})", region);

        Self {
            client,
            region: region.to_string(),
        }
    }

    /// us-east-1 rejects an explicit location constraint, every other region needs one.
    fn bucket_configuration(&self) -> Option<CreateBucketConfiguration> {
        if self.region == DEFAULT_REGION {
            return None;
        }

        Some(
            CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(self.region.as_str()))
                .build(),
        )
    }
}

fn is_already_owned(err: &SdkError<CreateBucketError, HttpResponse>) -> bool {
    err.as_service_error()
        .is_some_and(|e| e.is_bucket_already_owned_by_you())
}

#[async_trait]
impl ObjectStore for StorageService {
    async fn list_buckets(&self) -> SetupResult<Vec<String>> {
        let output = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| SetupError::from_sdk(SERVICE, e))?;

        Ok(output
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(str::to_string))
            .collect())
    }

    async fn create_bucket(&self, bucket: &str) -> SetupResult<BucketStatus> {
        let result = self
            .client
            .create_bucket()
            .bucket(bucket)
            .set_create_bucket_configuration(self.bucket_configuration())
            .send()
            .await;

        match result {
            Ok(_) => Ok(BucketStatus::Created),
            Err(err) if is_already_owned(&err) => {
                debug!("Bucket {} created concurrently, treating as existing", bucket);
                Ok(BucketStatus::AlreadyExisted)
            }
            Err(err) => Err(SetupError::from_sdk(SERVICE, err)),
        }
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> SetupResult<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| SetupError::from_sdk(SERVICE, e))?;

        Ok(())
    }

    async fn put_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> SetupResult<()> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| SetupError::Io(std::io::Error::other(e)))?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| SetupError::from_sdk(SERVICE, e))?;

        Ok(())
    }
}
