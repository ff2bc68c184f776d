use std::sync::Arc;

use crate::common::error::SetupResult;
use crate::config::settings::AppConfig;
use crate::infrastructure::aws::load_sdk_config;
use crate::infrastructure::storage::s3::StorageService;
use crate::infrastructure::transcoder::elastic::TranscoderService;
use crate::modules::provision::model::ProvisionReport;
use crate::modules::provision::service::ProvisionService;
use crate::modules::publish::model::PublishReport;
use crate::modules::publish::service::PublishService;
use crate::state::AppState;

/// Wires the AWS-backed services into an `AppState`.
pub async fn create_state(config: AppConfig) -> SetupResult<AppState> {
    let sdk_config = load_sdk_config(&config).await?;

    let storage = StorageService::new(&sdk_config, &config.region);
    let transcoder = TranscoderService::new(&sdk_config);

    Ok(AppState::new(config, Arc::new(storage), Arc::new(transcoder)))
}

/// Provisions, then publishes against the pipeline that was just created.
pub async fn provision_and_publish(
    state: &AppState,
) -> SetupResult<(ProvisionReport, PublishReport)> {
    let provisioned = ProvisionService::run(state).await?;
    let published = PublishService::run(state, &provisioned.pipeline.id).await?;

    Ok((provisioned, published))
}
