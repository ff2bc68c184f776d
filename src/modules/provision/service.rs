use tracing::info;

use super::model::ProvisionReport;
use crate::common::error::{SetupError, SetupResult};
use crate::infrastructure::storage::{BucketStatus, ObjectStore};
use crate::infrastructure::transcoder::PipelineSpec;
use crate::modules::handoff::model::PipelineRecord;
use crate::modules::handoff::repository::PipelineRecordRepository;
use crate::state::AppState;

pub struct ProvisionService;

impl ProvisionService {
    pub async fn run(state: &AppState) -> SetupResult<ProvisionReport> {
        let config = &state.config;
        let role = config.require_role()?;

        let video_path = config.video_path();
        if !tokio::fs::try_exists(&video_path).await? {
            return Err(SetupError::Precondition(format!(
                "video file {} not found",
                video_path.display()
            )));
        }

        info!("Creating input bucket {}...", config.input_bucket);
        let input_bucket = Self::ensure_bucket(state.storage.as_ref(), &config.input_bucket).await?;
        log_bucket_status("Input", input_bucket);

        info!("Creating output bucket {}...", config.output_bucket);
        let output_bucket =
            Self::ensure_bucket(state.storage.as_ref(), &config.output_bucket).await?;
        log_bucket_status("Output", output_bucket);

        info!("Listing buckets");
        for bucket in state.storage.list_buckets().await? {
            info!(" - {}", bucket);
        }

        let video_key = config.input_file_name.clone();
        info!("Putting video \"{}\" in {}...", video_key, config.input_bucket);
        let content_type = mime_guess::from_path(&video_path).first_or_octet_stream();
        state
            .storage
            .put_file(
                &config.input_bucket,
                &video_key,
                &video_path,
                content_type.essence_str(),
            )
            .await?;
        info!("Putting video \"{}\" in {}... DONE!", video_key, config.input_bucket);

        info!("Creating pipeline {}...", config.pipeline_name);
        let spec = PipelineSpec {
            name: config.pipeline_name.clone(),
            input_bucket: config.input_bucket.clone(),
            output_bucket: config.output_bucket.clone(),
            role: role.to_string(),
        };
        let pipeline = state.transcoder.create_pipeline(&spec).await?;
        info!("Creating pipeline {}... DONE!", config.pipeline_name);

        info!("Listing pipelines");
        for listed in state.transcoder.list_pipelines().await? {
            info!(
                " - {} {} [{}] {} -> {}",
                listed.id,
                listed.name,
                listed.status.as_deref().unwrap_or("unknown"),
                listed.input_bucket.as_deref().unwrap_or("?"),
                listed.output_bucket.as_deref().unwrap_or("?")
            );
        }

        let record = PipelineRecord::new(&pipeline, &config.input_bucket, &config.output_bucket);
        PipelineRecordRepository::save(&config.state_file, &record).await?;
        info!(
            "Pipeline {} recorded in {}",
            pipeline.id,
            config.state_file.display()
        );

        Ok(ProvisionReport {
            input_bucket,
            output_bucket,
            video_key,
            pipeline,
        })
    }

    /// Creates `bucket` unless a bucket with that exact name is already listed.
    pub async fn ensure_bucket(storage: &dyn ObjectStore, bucket: &str) -> SetupResult<BucketStatus> {
        let existing = storage.list_buckets().await?;
        if existing.iter().any(|name| name == bucket) {
            return Ok(BucketStatus::AlreadyExisted);
        }

        storage.create_bucket(bucket).await
    }
}

fn log_bucket_status(label: &str, status: BucketStatus) {
    match status {
        BucketStatus::Created => info!("{} bucket... DONE!", label),
        BucketStatus::AlreadyExisted => info!("{} bucket already exists!", label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::{StubStore, StubTranscoder, TEST_ROLE, test_config};
    use std::sync::Arc;

    fn write_video(dir: &tempfile::TempDir) {
        std::fs::write(dir.path().join("congrats.webm"), b"webm-bytes").unwrap();
    }

    #[tokio::test]
    async fn ensure_bucket_is_idempotent() {
        let store = StubStore::default();

        let first = ProvisionService::ensure_bucket(&store, "etsinputbucket").await.unwrap();
        let second = ProvisionService::ensure_bucket(&store, "etsinputbucket").await.unwrap();

        assert_eq!(first, BucketStatus::Created);
        assert_eq!(second, BucketStatus::AlreadyExisted);
        assert_eq!(*store.buckets.lock().unwrap(), vec!["etsinputbucket"]);
        assert_eq!(store.create_calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn existing_bucket_is_never_created() {
        let store = StubStore::with_buckets(&["etsinputbucket"]);

        let status = ProvisionService::ensure_bucket(&store, "etsinputbucket").await.unwrap();

        assert_eq!(status, BucketStatus::AlreadyExisted);
        assert!(store.create_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn bucket_match_is_exact() {
        let store = StubStore::with_buckets(&["etsinputbucket-old"]);

        let status = ProvisionService::ensure_bucket(&store, "etsinputbucket").await.unwrap();

        assert_eq!(status, BucketStatus::Created);
        assert_eq!(*store.create_calls.lock().unwrap(), vec!["etsinputbucket"]);
    }

    #[tokio::test]
    async fn provisions_buckets_video_and_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        write_video(&dir);
        let store = Arc::new(StubStore::with_buckets(&["etsoutputbucket"]));
        let transcoder = Arc::new(StubTranscoder::default());
        let state = AppState::new(test_config(dir.path()), store.clone(), transcoder.clone());

        let report = ProvisionService::run(&state).await.unwrap();

        assert_eq!(report.input_bucket, BucketStatus::Created);
        assert_eq!(report.output_bucket, BucketStatus::AlreadyExisted);
        assert_eq!(*store.create_calls.lock().unwrap(), vec!["etsinputbucket"]);

        let objects = store.objects.lock().unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].bucket, "etsinputbucket");
        assert_eq!(objects[0].key, "congrats");
        assert_eq!(objects[0].content_type, "video/webm");
        assert_eq!(&objects[0].body[..], b"webm-bytes");
        assert_eq!(
            *store.file_uploads.lock().unwrap(),
            vec![dir.path().join("congrats.webm")]
        );

        let pipelines = transcoder.pipelines.lock().unwrap();
        assert_eq!(
            pipelines[0],
            PipelineSpec {
                name: "myPipeline".into(),
                input_bucket: "etsinputbucket".into(),
                output_bucket: "etsoutputbucket".into(),
                role: TEST_ROLE.into(),
            }
        );

        let record = PipelineRecordRepository::load(&state.config.state_file)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.pipeline_id, report.pipeline.id);
        assert_eq!(record.output_bucket, "etsoutputbucket");
    }

    #[tokio::test]
    async fn missing_video_fails_before_any_remote_call() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(StubStore::default());
        let transcoder = Arc::new(StubTranscoder::default());
        let state = AppState::new(test_config(dir.path()), store.clone(), transcoder.clone());

        let err = ProvisionService::run(&state).await.unwrap_err();

        assert!(matches!(err, SetupError::Precondition(_)));
        assert!(store.create_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_upload_prevents_pipeline_creation() {
        let dir = tempfile::tempdir().unwrap();
        write_video(&dir);
        let store = Arc::new(StubStore {
            fail_put: true,
            ..Default::default()
        });
        let transcoder = Arc::new(StubTranscoder::default());
        let state = AppState::new(test_config(dir.path()), store.clone(), transcoder.clone());

        let err = ProvisionService::run(&state).await.unwrap_err();

        assert!(matches!(err, SetupError::Transport { .. }));
        assert!(transcoder.pipelines.lock().unwrap().is_empty());
        assert!(!state.config.state_file.exists());
    }

    #[tokio::test]
    async fn rejected_pipeline_leaves_no_record() {
        let dir = tempfile::tempdir().unwrap();
        write_video(&dir);
        let store = Arc::new(StubStore::default());
        let transcoder = Arc::new(StubTranscoder {
            fail_create_pipeline: true,
            ..Default::default()
        });
        let state = AppState::new(test_config(dir.path()), store.clone(), transcoder.clone());

        let err = ProvisionService::run(&state).await.unwrap_err();

        assert!(matches!(err, SetupError::Rejected { .. }));
        assert_eq!(store.objects.lock().unwrap().len(), 1);
        assert!(!state.config.state_file.exists());
    }
}
