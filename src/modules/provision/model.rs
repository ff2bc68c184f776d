use crate::infrastructure::storage::BucketStatus;
use crate::infrastructure::transcoder::PipelineSummary;

#[derive(Debug, Clone)]
pub struct ProvisionReport {
    pub input_bucket: BucketStatus,
    pub output_bucket: BucketStatus,
    pub video_key: String,
    pub pipeline: PipelineSummary,
}
