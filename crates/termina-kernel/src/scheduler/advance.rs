//! Cancellable delayed advance.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Events posted to the session from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The presentation delay for a pending advance elapsed.
    AdvanceDue { generation: u64 },
}

struct Pending {
    generation: u64,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

/// At most one pending advance at a time.
///
/// Every schedule or cancel bumps the generation, so an event that was
/// already in flight when its timer got cancelled is recognised as stale.
pub struct AdvanceScheduler {
    delay: Duration,
    generation: u64,
    pending: Option<Pending>,
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl AdvanceScheduler {
    /// Create a scheduler and the receiving end of its event channel.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            delay,
            generation: 0,
            pending: None,
            tx,
        };
        (scheduler, rx)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start the delay timer, replacing any pending one. Returns its generation.
    ///
    /// Outside a tokio runtime no timer is started; the advance stays pending
    /// until the session settles it.
    pub fn schedule(&mut self) -> u64 {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let cancel = CancellationToken::new();

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let token = cancel.clone();
                let tx = self.tx.clone();
                let delay = self.delay;
                Some(runtime.spawn(async move {
                    tokio::select! {
                        _ = token.cancelled() => {}
                        _ = tokio::time::sleep(delay) => {
                            // The receiver may be gone if the session ended
                            let _ = tx.send(SessionEvent::AdvanceDue { generation });
                        }
                    }
                }))
            }
            Err(_) => {
                warn!("no tokio runtime; advance waits for the next input");
                None
            }
        };

        debug!(generation, delay_ms = self.delay.as_millis() as u64, "advance scheduled");
        self.pending = Some(Pending {
            generation,
            cancel,
            handle,
        });
        generation
    }

    /// Cancel the pending timer, if any. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        pending.cancel.cancel();
        if let Some(handle) = pending.handle {
            handle.abort();
        }
        self.generation += 1;
        debug!(generation = pending.generation, "advance cancelled");
        true
    }

    /// Claim a delivered event. False for stale or unknown generations.
    pub fn accept(&mut self, generation: u64) -> bool {
        match &self.pending {
            Some(p) if p.generation == generation => {
                self.pending = None;
                true
            }
            _ => {
                debug!(generation, "stale advance event ignored");
                false
            }
        }
    }
}

impl Drop for AdvanceScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for AdvanceScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvanceScheduler")
            .field("delay", &self.delay)
            .field("generation", &self.generation)
            .field("pending", &self.pending.as_ref().map(|p| p.generation))
            .finish()
    }
}
