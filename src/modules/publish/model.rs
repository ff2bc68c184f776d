use crate::infrastructure::transcoder::{JobRequest, JobSummary};

#[derive(Debug, Clone)]
pub struct PublishReport {
    pub request: JobRequest,
    pub job: JobSummary,
    /// Object keys uploaded to the output bucket, in upload order.
    pub pages: Vec<String>,
}
