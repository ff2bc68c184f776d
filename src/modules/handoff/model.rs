use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::infrastructure::transcoder::PipelineSummary;

/// What the provisioner leaves behind for the job publisher.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PipelineRecord {
    pub pipeline_id: String,
    pub pipeline_name: String,
    pub input_bucket: String,
    pub output_bucket: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl PipelineRecord {
    pub fn new(pipeline: &PipelineSummary, input_bucket: &str, output_bucket: &str) -> Self {
        Self {
            pipeline_id: pipeline.id.clone(),
            pipeline_name: pipeline.name.clone(),
            input_bucket: input_bucket.to_string(),
            output_bucket: output_bucket.to_string(),
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
