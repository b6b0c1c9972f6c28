//! Background catalog fetch for the terminal UI.
//!
//! The UI loop is synchronous; the fetch runs as a tokio task and hands its
//! single result back through a oneshot channel that the loop polls each frame.

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::models::DeviceConfigResponse;
use crate::provider::{Credentials, FetchError, SharedProvider};

type FetchResult = Result<DeviceConfigResponse, FetchError>;

/// Owns at most one in-flight fetch.
///
/// Dropping the loader, or starting a new fetch, aborts the previous task;
/// providers hold no resources beyond the request itself.
pub struct CatalogLoader {
    runtime: Handle,
    provider: SharedProvider,
    credentials: Result<Credentials, FetchError>,
    task: Option<JoinHandle<()>>,
    receiver: Option<oneshot::Receiver<FetchResult>>,
}

impl CatalogLoader {
    /// Creates an idle loader.
    ///
    /// Credentials that failed to resolve are kept and reported as the fetch
    /// result, so configuration errors surface like any other failure.
    pub fn new(
        runtime: Handle,
        provider: SharedProvider,
        credentials: Result<Credentials, FetchError>,
    ) -> Self {
        Self {
            runtime,
            provider,
            credentials,
            task: None,
            receiver: None,
        }
    }

    /// Device code for display, if credentials resolved.
    #[must_use]
    pub fn device_code(&self) -> Option<&str> {
        self.credentials.as_ref().ok().map(|c| c.device_code.as_str())
    }

    /// Starts a fetch, aborting any previous one.
    pub fn start(&mut self) {
        self.cancel();

        let (tx, rx) = oneshot::channel();
        let provider = SharedProvider::clone(&self.provider);
        let credentials = self.credentials.clone();

        info!(provider = provider.name(), "Starting catalog fetch");
        let task = self.runtime.spawn(async move {
            let result = match credentials {
                Ok(credentials) => provider.fetch_catalog(&credentials).await,
                Err(err) => Err(err),
            };
            // Receiver gone means the UI no longer wants the result
            let _ = tx.send(result);
        });

        self.task = Some(task);
        self.receiver = Some(rx);
    }

    /// Returns true while a fetch is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }

    /// Takes the result if the fetch has finished.
    pub fn poll(&mut self) -> Option<FetchResult> {
        let receiver = self.receiver.as_mut()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                self.task = None;
                if let Err(err) = &result {
                    warn!(kind = %err.kind(), error = %err, "Catalog fetch failed");
                }
                Some(result)
            }
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                self.receiver = None;
                self.task = None;
                Some(Err(FetchError::Transport(
                    "fetch task ended without a result".to_string(),
                )))
            }
        }
    }

    /// Abandons the in-flight fetch, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Aborting in-flight catalog fetch");
            task.abort();
        }
        self.receiver = None;
    }
}

impl Drop for CatalogLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}
