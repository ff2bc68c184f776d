use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::storage::ObjectStore;
use crate::infrastructure::transcoder::Transcoder;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: Arc<dyn ObjectStore>,
    pub transcoder: Arc<dyn Transcoder>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn ObjectStore>,
        transcoder: Arc<dyn Transcoder>,
    ) -> Self {
        Self {
            config,
            storage,
            transcoder,
        }
    }
}
