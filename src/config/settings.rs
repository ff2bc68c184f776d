use std::path::PathBuf;

use validator::{Validate, ValidationError};

use crate::common::error::SetupError;
use crate::config::env::{self, EnvKey};
use crate::modules::publish::preset;

pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Clone, Debug, Validate)]
pub struct AppConfig {
    #[validate(custom(function = "validate_bucket_name"))]
    pub input_bucket: String,
    #[validate(custom(function = "validate_bucket_name"))]
    pub output_bucket: String,
    #[validate(length(min = 1, max = 40))]
    pub pipeline_name: String,
    /// Only the provisioner needs it.
    #[validate(custom(function = "validate_role_arn"))]
    pub pipeline_role: Option<String>,
    #[validate(length(min = 1))]
    pub input_file_name: String,
    pub input_file_extension: String,
    pub pipeline_id: Option<String>,
    #[validate(length(min = 1))]
    pub output_key: String,
    #[validate(length(min = 1))]
    pub preset_id: String,
    #[validate(length(min = 1))]
    pub region: String,
    pub profile: Option<String>,
    pub state_file: PathBuf,
    pub work_dir: PathBuf,
}

impl AppConfig {
    pub fn new() -> Result<Self, SetupError> {
        Self::from_lookup(env::get_opt)
    }

    /// Builds the config from any key lookup, falling back to the demo defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SetupError>
    where
        F: Fn(EnvKey) -> Option<String>,
    {
        let or = |key: EnvKey, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = Self {
            input_bucket: or(EnvKey::InputBucket, "etsinputbucket"),
            output_bucket: or(EnvKey::OutputBucket, "etsoutputbucket"),
            pipeline_name: or(EnvKey::PipelineName, "myPipeline"),
            pipeline_role: lookup(EnvKey::PipelineRole),
            input_file_name: or(EnvKey::InputFileName, "congrats"),
            input_file_extension: or(EnvKey::InputFileExtension, ".webm"),
            pipeline_id: lookup(EnvKey::PipelineId),
            output_key: or(EnvKey::OutputKey, "congratsoutput"),
            preset_id: preset::resolve_preset(&or(EnvKey::PresetId, preset::DEFAULT_PRESET_ID)),
            region: or(EnvKey::AwsRegion, DEFAULT_REGION),
            profile: lookup(EnvKey::AwsProfile),
            state_file: PathBuf::from(or(EnvKey::StateFile, ".ets-pipeline.json")),
            work_dir: PathBuf::from(or(EnvKey::WorkDir, ".")),
        };

        config
            .validate()
            .map_err(|e| SetupError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Local path of the video uploaded by the provisioner.
    pub fn video_path(&self) -> PathBuf {
        self.work_dir
            .join(format!("{}{}", self.input_file_name, self.input_file_extension))
    }

    pub fn require_role(&self) -> Result<&str, SetupError> {
        self.pipeline_role.as_deref().ok_or_else(|| {
            SetupError::Config(format!(
                "{} must be set to create a pipeline",
                EnvKey::PipelineRole.as_str()
            ))
        })
    }
}

fn validate_bucket_name(name: &str) -> Result<(), ValidationError> {
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-');
    let valid_edges = name
        .chars()
        .next()
        .zip(name.chars().last())
        .is_some_and(|(first, last)| first.is_ascii_alphanumeric() && last.is_ascii_alphanumeric());

    if (3..=63).contains(&name.len()) && valid_chars && valid_edges {
        Ok(())
    } else {
        Err(ValidationError::new("bucket_name"))
    }
}

fn validate_role_arn(arn: &str) -> Result<(), ValidationError> {
    match arn.strip_prefix("arn:aws:iam::") {
        Some(rest) if rest.contains(":role/") => Ok(()),
        _ => Err(ValidationError::new("role_arn")),
    }
}
