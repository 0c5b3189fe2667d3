use crate::core::{FetchRequest, SuccessCriterion, Transport};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Callback-style GET wrapper over an injected [`Transport`].
///
/// Every outcome is collapsed into `Option<String>`: `Some(body)` when the
/// completed status satisfies the success criterion, `None` otherwise.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    success: SuccessCriterion,
    runtime: Option<Handle>,
}

impl Fetcher {
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    /// Captures the current tokio runtime, if any, for later `fetch` calls.
    pub fn from_arc(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            success: SuccessCriterion::default(),
            runtime: Handle::try_current().ok(),
        }
    }

    pub fn with_success_criterion(mut self, success: SuccessCriterion) -> Self {
        self.success = success;
        self
    }

    /// Runs requests started by `fetch` on `handle`.
    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    pub fn success_criterion(&self) -> SuccessCriterion {
        self.success
    }

    /// Starts a GET for `path` and returns immediately.
    ///
    /// `callback` runs once the transport reports a terminal state. If the
    /// transport never completes, it never runs. Requests run on the runtime
    /// captured at construction, or else the caller's runtime. With neither
    /// available no request is made and `callback` receives `None` at once.
    pub fn fetch<F>(&self, path: impl Into<String>, callback: F)
    where
        F: FnOnce(Option<String>) + Send + 'static,
    {
        let request = FetchRequest::new(path);

        let handle = match self
            .runtime
            .clone()
            .or_else(|| Handle::try_current().ok())
        {
            Some(handle) => handle,
            None => {
                tracing::error!("GET {} not started: no tokio runtime available", request.path);
                callback(None);
                return;
            }
        };

        let fetcher = self.clone();
        handle.spawn(async move {
            let outcome = fetcher.fetch_text(&request.path).await;
            callback(outcome);
        });
    }

    /// Awaitable form of [`Fetcher::fetch`].
    pub async fn fetch_text(&self, path: &str) -> Option<String> {
        match self.transport.get(path).await {
            Ok(response) if self.success.accepts(response.status) => Some(response.body),
            Ok(response) => {
                tracing::warn!("GET {} failed with status {}", path, response.status);
                None
            }
            Err(e) => {
                tracing::warn!("GET {} failed: {}", path, e);
                None
            }
        }
    }
}
