//! Observable application state
//!
//! `AppStore` owns the single `AppState` instance and publishes every
//! mutation on a `watch` channel. Subscribers see each assignment as soon
//! as the mutating call returns.
//!
//! Network failures are logged and otherwise ignored: the affected field
//! keeps its previous value and no error state is recorded.
//!
//! Overlapping `get_log` calls are not cancelled. Each response is applied
//! when it arrives, so a slow earlier request can overwrite the log of a
//! faster later one while the title shows the later pair.

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::api::ApiClient;

/// State rendered by the UI
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Opaque website records, empty until the first successful load
    pub websites: Vec<Value>,
    /// Log modal visibility. Only ever set to true here; closing belongs to the UI.
    pub show_modal: bool,
    /// `{namespace}/{name}` of the last requested log
    pub modal_title: String,
    /// Raw log text of the last successful log fetch
    pub log: String,
}

pub struct AppStore {
    api: ApiClient,
    state: watch::Sender<AppState>,
}

impl AppStore {
    pub fn new(api: ApiClient) -> Arc<Self> {
        let (state, _) = watch::channel(AppState::default());
        Arc::new(Self { api, state })
    }

    /// Receive a notification after every mutation
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Load the website list in the background.
    ///
    /// Replaces `websites` wholesale on success. The returned handle may be
    /// dropped; awaiting it only waits for the fetch to settle.
    pub fn init(self: &Arc<Self>) -> JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            match store.api.list_websites().await {
                Ok(websites) => {
                    info!(count = websites.len(), "Websites loaded");
                    store.state.send_modify(|state| state.websites = websites);
                }
                Err(e) => {
                    error!(url = ?e.url(), error = %e, "failed to fetch websites");
                }
            }
        })
    }

    /// Open the log modal for `namespace/name` and load its log in the
    /// background.
    ///
    /// The modal flag and title are published before this returns. `log`
    /// keeps its previous text until the fetch succeeds.
    pub fn get_log(self: &Arc<Self>, namespace: &str, name: &str) -> JoinHandle<()> {
        let title = format!("{}/{}", namespace, name);
        self.state.send_modify(|state| {
            state.show_modal = true;
            state.modal_title = title;
        });

        let store = Arc::clone(self);
        let namespace = namespace.to_string();
        let name = name.to_string();
        tokio::spawn(async move {
            match store.api.fetch_log(&namespace, &name).await {
                Ok(log) => {
                    info!(%namespace, %name, bytes = log.len(), "Log loaded");
                    store.state.send_modify(|state| state.log = log);
                }
                Err(e) => {
                    error!(%namespace, %name, error = %e, "failed to fetch logs");
                }
            }
        })
    }
}
