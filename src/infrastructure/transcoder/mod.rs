use async_trait::async_trait;

use crate::common::error::SetupResult;

pub mod elastic;

/// Everything needed to create a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSpec {
    pub name: String,
    pub input_bucket: String,
    pub output_bucket: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub id: String,
    pub name: String,
    pub status: Option<String>,
    pub input_bucket: Option<String>,
    pub output_bucket: Option<String>,
}

/// One job: a single input object transcoded to a single output with one preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub pipeline_id: String,
    pub input_key: String,
    pub output_key: String,
    pub preset_id: String,
}

impl JobRequest {
    pub fn new(
        pipeline_id: impl Into<String>,
        input_key: impl Into<String>,
        output_key: impl Into<String>,
        preset_id: impl Into<String>,
    ) -> Self {
        Self {
            pipeline_id: pipeline_id.into(),
            input_key: input_key.into(),
            output_key: output_key.into(),
            preset_id: preset_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub id: String,
    pub status: Option<String>,
}

#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn create_pipeline(&self, spec: &PipelineSpec) -> SetupResult<PipelineSummary>;

    async fn list_pipelines(&self) -> SetupResult<Vec<PipelineSummary>>;

    /// Submits the job and returns as soon as the service acknowledges it.
    async fn create_job(&self, request: &JobRequest) -> SetupResult<JobSummary>;

    async fn list_jobs_by_pipeline(&self, pipeline_id: &str) -> SetupResult<Vec<JobSummary>>;
}
