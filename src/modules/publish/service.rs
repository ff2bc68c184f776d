use bytes::Bytes;
use tracing::{info, warn};

use super::model::PublishReport;
use super::pages::{self, StaticPage};
use crate::common::error::{SetupError, SetupResult};
use crate::config::env::EnvKey;
use crate::infrastructure::transcoder::JobRequest;
use crate::modules::handoff::repository::PipelineRecordRepository;
use crate::state::AppState;

pub struct PublishService;

impl PublishService {
    /// Picks the pipeline id from the flag, then the config, then the state file.
    pub async fn resolve_pipeline_id(
        state: &AppState,
        flag: Option<String>,
    ) -> SetupResult<String> {
        let config = &state.config;

        if let Some(id) = flag.or_else(|| config.pipeline_id.clone()) {
            return Ok(id);
        }

        let record = PipelineRecordRepository::load(&config.state_file)
            .await?
            .ok_or_else(|| {
                SetupError::Precondition(format!(
                    "no pipeline id: pass --pipeline-id, set {} or run `provision` first",
                    EnvKey::PipelineId.as_str()
                ))
            })?;

        if record.output_bucket != config.output_bucket {
            warn!(
                "Pipeline {} writes to {}, but pages go to {}",
                record.pipeline_id, record.output_bucket, config.output_bucket
            );
        }

        info!(
            "Using pipeline {} from {}",
            record.pipeline_id,
            config.state_file.display()
        );
        Ok(record.pipeline_id)
    }

    pub async fn run(state: &AppState, pipeline_id: &str) -> SetupResult<PublishReport> {
        let config = &state.config;

        info!("Creating job...");
        let request = JobRequest::new(
            pipeline_id,
            &config.input_file_name,
            &config.output_key,
            &config.preset_id,
        );
        let job = state.transcoder.create_job(&request).await?;
        info!("Creating job... DONE! (job {})", job.id);

        info!("Listing jobs...");
        for listed in state.transcoder.list_jobs_by_pipeline(pipeline_id).await? {
            info!(
                " - {} [{}]",
                listed.id,
                listed.status.as_deref().unwrap_or("unknown")
            );
        }

        let mut uploaded = Vec::new();
        for page in [
            pages::landing_page(&config.output_key),
            pages::error_page(&config.output_bucket),
        ] {
            Self::publish_page(state, &page).await?;
            uploaded.push(page.file_name.to_string());
        }

        Ok(PublishReport {
            request,
            job,
            pages: uploaded,
        })
    }

    /// Writes the page into the work dir, then uploads it to the output bucket.
    async fn publish_page(state: &AppState, page: &StaticPage) -> SetupResult<()> {
        let config = &state.config;

        info!("Creating {}...", page.file_name);
        tokio::fs::write(config.work_dir.join(page.file_name), &page.body).await?;
        info!("Creating {}... DONE!", page.file_name);

        info!("Putting {} in {}...", page.file_name, config.output_bucket);
        state
            .storage
            .put_object(
                &config.output_bucket,
                page.file_name,
                Bytes::from(page.body.clone()),
                mime::TEXT_HTML_UTF_8.as_ref(),
            )
            .await?;
        info!("Putting {} in {}... DONE!", page.file_name, config.output_bucket);

        Ok(())
    }
}
