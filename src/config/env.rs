use std::env;

pub enum EnvKey {
    InputBucket,
    OutputBucket,
    PipelineName,
    PipelineRole,
    InputFileName,
    InputFileExtension,
    PipelineId,
    OutputKey,
    PresetId,
    AwsRegion,
    AwsProfile,
    StateFile,
    WorkDir,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::InputBucket => "ETS_INPUT_BUCKET",
            EnvKey::OutputBucket => "ETS_OUTPUT_BUCKET",
            EnvKey::PipelineName => "ETS_PIPELINE_NAME",
            EnvKey::PipelineRole => "ETS_PIPELINE_ROLE",
            EnvKey::InputFileName => "ETS_INPUT_FILE",
            EnvKey::InputFileExtension => "ETS_INPUT_EXTENSION",
            EnvKey::PipelineId => "ETS_PIPELINE_ID",
            EnvKey::OutputKey => "ETS_OUTPUT_KEY",
            EnvKey::PresetId => "ETS_PRESET_ID",
            EnvKey::AwsRegion => "AWS_REGION",
            EnvKey::AwsProfile => "AWS_PROFILE",
            EnvKey::StateFile => "ETS_STATE_FILE",
            EnvKey::WorkDir => "ETS_WORK_DIR",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

/// Returns `None` for unset or blank variables.
pub fn get_opt(key: EnvKey) -> Option<String> {
    get(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
