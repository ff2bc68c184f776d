//! Recording stand-ins for the AWS services.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::common::error::{ErrorKind, ServiceRejection, SetupError, SetupResult};
use crate::config::env::EnvKey;
use crate::config::settings::AppConfig;
use crate::infrastructure::storage::{BucketStatus, ObjectStore};
use crate::infrastructure::transcoder::{
    JobRequest, JobSummary, PipelineSpec, PipelineSummary, Transcoder,
};

pub const TEST_ROLE: &str = "arn:aws:iam::600384891926:role/Elastic_Transcoder_Default_Role";

/// Demo defaults with a role, rooted in `dir`.
pub fn test_config(dir: &Path) -> AppConfig {
    let work_dir = dir.to_string_lossy().into_owned();
    let state_file = dir.join("pipeline.json").to_string_lossy().into_owned();

    AppConfig::from_lookup(|key| match key {
        EnvKey::PipelineRole => Some(TEST_ROLE.to_string()),
        EnvKey::WorkDir => Some(work_dir.clone()),
        EnvKey::StateFile => Some(state_file.clone()),
        _ => None,
    })
    .expect("test config is valid")
}

pub fn rejected(service: &'static str) -> SetupError {
    SetupError::Rejected {
        service,
        rejection: ServiceRejection {
            message: "The request was rejected".into(),
            status: 400,
            code: Some("ValidationException".into()),
            kind: ErrorKind::Client,
            request_id: Some("req-1".into()),
        },
    }
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub body: Bytes,
    pub content_type: String,
}

#[derive(Default)]
pub struct StubStore {
    pub buckets: Mutex<Vec<String>>,
    pub create_calls: Mutex<Vec<String>>,
    pub objects: Mutex<Vec<StoredObject>>,
    /// Local paths handed to `put_file`, in call order.
    pub file_uploads: Mutex<Vec<PathBuf>>,
    pub fail_put: bool,
}

impl StubStore {
    pub fn with_buckets(names: &[&str]) -> Self {
        Self {
            buckets: Mutex::new(names.iter().map(|n| n.to_string()).collect()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ObjectStore for StubStore {
    async fn list_buckets(&self) -> SetupResult<Vec<String>> {
        Ok(self.buckets.lock().unwrap().clone())
    }

    async fn create_bucket(&self, bucket: &str) -> SetupResult<BucketStatus> {
        self.create_calls.lock().unwrap().push(bucket.to_string());

        let mut buckets = self.buckets.lock().unwrap();
        if buckets.iter().any(|b| b == bucket) {
            return Ok(BucketStatus::AlreadyExisted);
        }
        buckets.push(bucket.to_string());
        Ok(BucketStatus::Created)
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> SetupResult<()> {
        if self.fail_put {
            return Err(SetupError::Transport {
                service: "Amazon S3",
                message: "connection reset".into(),
            });
        }

        self.objects.lock().unwrap().push(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });
        Ok(())
    }

    async fn put_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> SetupResult<()> {
        self.file_uploads.lock().unwrap().push(path.to_path_buf());
        let body = Bytes::from(std::fs::read(path)?);
        self.put_object(bucket, key, body, content_type).await
    }
}

#[derive(Default)]
pub struct StubTranscoder {
    pub pipelines: Mutex<Vec<PipelineSpec>>,
    pub jobs: Mutex<Vec<JobRequest>>,
    pub fail_create_pipeline: bool,
    pub fail_create_job: bool,
}

#[async_trait]
impl Transcoder for StubTranscoder {
    async fn create_pipeline(&self, spec: &PipelineSpec) -> SetupResult<PipelineSummary> {
        if self.fail_create_pipeline {
            return Err(rejected("Amazon Elastic Transcoder"));
        }

        let mut pipelines = self.pipelines.lock().unwrap();
        pipelines.push(spec.clone());
        Ok(PipelineSummary {
            id: format!("1449955865518-{:06}", pipelines.len()),
            name: spec.name.clone(),
            status: Some("Active".into()),
            input_bucket: Some(spec.input_bucket.clone()),
            output_bucket: Some(spec.output_bucket.clone()),
        })
    }

    async fn list_pipelines(&self) -> SetupResult<Vec<PipelineSummary>> {
        Ok(self
            .pipelines
            .lock()
            .unwrap()
            .iter()
            .enumerate()
            .map(|(i, spec)| PipelineSummary {
                id: format!("1449955865518-{:06}", i + 1),
                name: spec.name.clone(),
                status: Some("Active".into()),
                input_bucket: Some(spec.input_bucket.clone()),
                output_bucket: Some(spec.output_bucket.clone()),
            })
            .collect())
    }

    async fn create_job(&self, request: &JobRequest) -> SetupResult<JobSummary> {
        if self.fail_create_job {
            return Err(rejected("Amazon Elastic Transcoder"));
        }

        let mut jobs = self.jobs.lock().unwrap();
        jobs.push(request.clone());
        Ok(JobSummary {
            id: format!("job-{}", jobs.len()),
            status: Some("Submitted".into()),
        })
    }

    async fn list_jobs_by_pipeline(&self, pipeline_id: &str) -> SetupResult<Vec<JobSummary>> {
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .enumerate()
            .filter(|(_, job)| job.pipeline_id == pipeline_id)
            .map(|(i, _)| JobSummary {
                id: format!("job-{}", i + 1),
                status: Some("Submitted".into()),
            })
            .collect())
    }
}
