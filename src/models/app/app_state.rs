use crate::config::AppConfig;
use crate::services::{Console, RelayClient};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Shared by every relayed request; holds no per-request state.
    pub http: reqwest::Client,
    /// One console for the whole process: every browser sees the same list,
    /// form, error and busy flag.
    pub console: Arc<Console>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let http = reqwest::Client::new();
        let backend = RelayClient::new(http.clone(), config.relay_url.clone());
        let console = Arc::new(Console::new(Arc::new(backend)));

        AppState {
            config,
            http,
            console,
        }
    }
}
