use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use tracing::info;

use crate::common::error::{SetupError, SetupResult};
use crate::config::settings::AppConfig;

/// Loads the shared SDK config and resolves credentials once, so a broken
/// credential setup fails before the first remote call.
pub async fn load_sdk_config(config: &AppConfig) -> SetupResult<SdkConfig> {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }

    let sdk_config = loader.load().await;

    let provider = sdk_config.credentials_provider().ok_or_else(|| {
        SetupError::Credentials("no credentials provider is configured".to_string())
    })?;

    provider.provide_credentials().await.map_err(|e| {
        SetupError::Credentials(format!(
            "{e}. Make sure the credentials file exists and is in a valid format{}",
            config
                .profile
                .as_deref()
                .map(|p| format!(" (profile \"{p}\")"))
                .unwrap_or_default()
        ))
    })?;

    info!("✅ AWS credentials loaded for region {}", config.region);

    Ok(sdk_config)
}
