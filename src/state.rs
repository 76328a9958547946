use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::storage::local::PdfStorage;
use crate::modules::transcript::fetcher::TranscriptFetcher;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub fetcher: Arc<dyn TranscriptFetcher>,
    pub storage: PdfStorage,
}

impl AppState {
    pub fn new(config: AppConfig, fetcher: Arc<dyn TranscriptFetcher>, storage: PdfStorage) -> Self {
        Self {
            config,
            fetcher,
            storage,
        }
    }
}
