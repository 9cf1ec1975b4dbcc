//! Application context built once at startup and handed to the UI root

use std::sync::Arc;
use tracing::info;

use crate::api::ApiClient;
use crate::config::Config;
use crate::store::AppStore;

pub struct AppContext {
    pub config: Config,
    pub store: Arc<AppStore>,
}

impl AppContext {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api = ApiClient::new(&config.api)?;
        info!(endpoint = %api.endpoint(), "Website API configured");

        Ok(Self {
            store: AppStore::new(api),
            config,
        })
    }
}
