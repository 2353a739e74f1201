use std::{
    sync::{
        mpsc::{self, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
};

use tracing::{debug, warn};

use crate::errors::Result;
use crate::store::{AppState, PartialState};

use super::StatePersistence;

/// Moves saves onto a background writer so `save` returns immediately.
///
/// Snapshots queued while the writer is busy are coalesced; only the newest one is
/// written. Dropping the adapter waits for the queue to drain.
pub struct DeferredPersistence<P> {
    inner: Arc<P>,
    sender: Option<Sender<AppState>>,
    worker: Option<JoinHandle<()>>,
}

impl<P> DeferredPersistence<P>
where
    P: StatePersistence + Send + Sync + 'static,
{
    pub fn new(inner: P) -> Result<Self> {
        let inner = Arc::new(inner);
        let (sender, receiver) = mpsc::channel::<AppState>();
        let writer = Arc::clone(&inner);
        let worker = thread::Builder::new()
            .name("expense-core-writer".into())
            .spawn(move || {
                while let Ok(mut state) = receiver.recv() {
                    let mut skipped = 0usize;
                    while let Ok(newer) = receiver.try_recv() {
                        state = newer;
                        skipped += 1;
                    }
                    if skipped > 0 {
                        debug!(skipped, "coalesced queued snapshots");
                    }
                    writer.save(&state);
                }
            })?;
        Ok(Self {
            inner,
            sender: Some(sender),
            worker: Some(worker),
        })
    }
}

impl<P: StatePersistence> StatePersistence for DeferredPersistence<P> {
    fn load(&self) -> Option<PartialState> {
        self.inner.load()
    }

    fn save(&self, state: &AppState) {
        let Some(sender) = self.sender.as_ref() else {
            return;
        };
        if sender.send(state.clone()).is_err() {
            warn!("background writer stopped; snapshot dropped");
        }
    }
}

impl<P> Drop for DeferredPersistence<P> {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("background writer panicked");
            }
        }
    }
}
