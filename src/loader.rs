//! Off-thread file loading.
//!
//! The engine call blocks for as long as mediainfo takes, so [`Loader`] runs
//! it on tokio's blocking pool under a timeout and hands the outcome back as
//! a [`LoadResponse`] over a channel. Responses may arrive in any order;
//! [`Session::complete_load`] drops the ones that were superseded.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use mediascope_core::{Error, FieldRepository, LoadResponse, LoadTicket, MetadataEngine, Session};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs [`FieldRepository::load`] requests in the background.
pub struct Loader<E> {
    repository: Arc<FieldRepository<E>>,
    timeout: Duration,
    tx: mpsc::UnboundedSender<LoadResponse>,
    rx: mpsc::UnboundedReceiver<LoadResponse>,
}

impl<E: MetadataEngine + 'static> Loader<E> {
    pub fn new(engine: E, timeout: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            repository: Arc::new(FieldRepository::new(engine)),
            timeout,
            tx,
            rx,
        }
    }

    /// Start loading the file named by `ticket`.
    ///
    /// The response is delivered to [`Loader::recv`] whether the load
    /// succeeds, fails or times out.
    pub fn request(&self, ticket: LoadTicket) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        let tx = self.tx.clone();
        let timeout = self.timeout;

        tokio::spawn(async move {
            let path = ticket.path.clone();
            let task = tokio::task::spawn_blocking(move || repository.load(&path));

            let result = match tokio::time::timeout(timeout, task).await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => Err(Error::Internal(format!("load task failed: {e}"))),
                Err(_) => {
                    tracing::warn!(
                        "Loading {} timed out after {:?}",
                        ticket.path.display(),
                        timeout
                    );
                    Err(Error::Timeout {
                        path: ticket.path.clone(),
                        after: timeout,
                    })
                }
            };

            // The receiver lives as long as the loader; a send error means
            // nobody is waiting any more.
            let _ = tx.send(LoadResponse { ticket, result });
        })
    }

    /// Wait for the next finished request.
    pub async fn recv(&mut self) -> Option<LoadResponse> {
        self.rx.recv().await
    }

    /// Load `path` into `session` and wait until that load is resolved.
    ///
    /// Responses for older requests that arrive first are handed to the
    /// session too, which discards them. Returns the error of the requested
    /// load if it failed.
    pub async fn load(
        &mut self,
        session: &mut Session,
        path: impl Into<PathBuf>,
    ) -> mediascope_core::Result<()> {
        let ticket = session.begin_load(path);
        let generation = ticket.generation;
        self.request(ticket);

        while let Some(response) = self.rx.recv().await {
            let latest = response.ticket.generation == generation;
            let outcome = session.complete_load(response);
            if latest {
                return outcome.map(|_| ());
            }
        }

        Err(Error::Internal("load channel closed".into()))
    }
}
