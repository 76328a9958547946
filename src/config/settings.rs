use crate::config::env::{self, EnvKey};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub public_base_url: String,
    pub pdf_output_dir: String,
    pub fetch_timeout_secs: u64,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 5000),
            public_base_url: env::get_or(EnvKey::PublicBaseUrl, "http://localhost:5000"),
            pdf_output_dir: env::get_or(EnvKey::PdfOutputDir, "generated_pdfs"),
            fetch_timeout_secs: env::get_parsed(EnvKey::FetchTimeoutSecs, 30),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
