use async_trait::async_trait;
use aws_sdk_elastictranscoder::types::{CreateJobOutput, Job, JobInput, Pipeline};
use aws_sdk_elastictranscoder::Client;
use tracing::{info, warn};

use super::{JobRequest, JobSummary, PipelineSpec, PipelineSummary, Transcoder};
use crate::common::error::{SetupError, SetupResult};

const SERVICE: &str = "Amazon Elastic Transcoder";

#[derive(Clone)]
pub struct TranscoderService {
    pub client: Client,
}

impl TranscoderService {
    pub fn new(sdk_config: &aws_config::SdkConfig) -> Self {
        let client = Client::new(sdk_config);

        info!("✅ Elastic Transcoder client ready");

        Self { client }
    }
}

fn pipeline_summary(pipeline: &Pipeline) -> Option<PipelineSummary> {
    Some(PipelineSummary {
        id: pipeline.id()?.to_string(),
        name: pipeline.name().unwrap_or_default().to_string(),
        status: pipeline.status().map(str::to_string),
        input_bucket: pipeline.input_bucket().map(str::to_string),
        output_bucket: pipeline.output_bucket().map(str::to_string),
    })
}

fn job_summary(job: &Job) -> Option<JobSummary> {
    Some(JobSummary {
        id: job.id()?.to_string(),
        status: job.status().map(str::to_string),
    })
}

#[async_trait]
impl Transcoder for TranscoderService {
    async fn create_pipeline(&self, spec: &PipelineSpec) -> SetupResult<PipelineSummary> {
        let output = self
            .client
            .create_pipeline()
            .name(&spec.name)
            .input_bucket(&spec.input_bucket)
            .output_bucket(&spec.output_bucket)
            .role(&spec.role)
            .send()
            .await
            .map_err(|e| SetupError::from_sdk(SERVICE, e))?;

        for warning in output.warnings() {
            warn!(
                "Pipeline warning {}: {}",
                warning.code().unwrap_or("-"),
                warning.message().unwrap_or_default()
            );
        }

        output
            .pipeline()
            .and_then(pipeline_summary)
            .ok_or_else(|| {
                SetupError::Precondition(format!(
                    "{} returned no id for pipeline {}",
                    SERVICE, spec.name
                ))
            })
    }

    async fn list_pipelines(&self) -> SetupResult<Vec<PipelineSummary>> {
        let output = self
            .client
            .list_pipelines()
            .send()
            .await
            .map_err(|e| SetupError::from_sdk(SERVICE, e))?;

        Ok(output.pipelines().iter().filter_map(pipeline_summary).collect())
    }

    async fn create_job(&self, request: &JobRequest) -> SetupResult<JobSummary> {
        let input = JobInput::builder().key(&request.input_key).build();
        let job_output = CreateJobOutput::builder()
            .key(&request.output_key)
            .preset_id(&request.preset_id)
            .build();

        let output = self
            .client
            .create_job()
            .pipeline_id(&request.pipeline_id)
            .input(input)
            .outputs(job_output)
            .send()
            .await
            .map_err(|e| SetupError::from_sdk(SERVICE, e))?;

        output.job().and_then(job_summary).ok_or_else(|| {
            SetupError::Precondition(format!(
                "{} returned no id for the job on pipeline {}",
                SERVICE, request.pipeline_id
            ))
        })
    }

    async fn list_jobs_by_pipeline(&self, pipeline_id: &str) -> SetupResult<Vec<JobSummary>> {
        let output = self
            .client
            .list_jobs_by_pipeline()
            .pipeline_id(pipeline_id)
            .send()
            .await
            .map_err(|e| SetupError::from_sdk(SERVICE, e))?;

        Ok(output.jobs().iter().filter_map(job_summary).collect())
    }
}
