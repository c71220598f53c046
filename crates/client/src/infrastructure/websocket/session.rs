//! Session slot - holder of the single live transport session.
//!
//! At most one session is open at a time. The slot stores the write-task
//! sender tagged with the generation that opened it; superseded generations
//! can neither send nor close.

use tokio::sync::{mpsc, Mutex};

/// Outbound frame queued for the write task, already serialized.
pub(crate) type OutboundFrame = String;

struct OpenSession {
    generation: u64,
    tx: mpsc::Sender<OutboundFrame>,
}

/// Slot for the outbound sender of the single live session.
#[derive(Default)]
pub(crate) struct SessionSlot {
    inner: Mutex<Option<OpenSession>>,
}

impl SessionSlot {
    /// Install the sender for a newly opened session, replacing any prior
    /// one.
    pub async fn open(&self, generation: u64, tx: mpsc::Sender<OutboundFrame>) {
        let mut inner = self.inner.lock().await;
        *inner = Some(OpenSession { generation, tx });
    }

    /// Queue a frame on the open session. Returns false (frame dropped)
    /// when no session is open.
    pub async fn send(&self, frame: OutboundFrame) -> bool {
        // Clone the sender to avoid holding the lock across the send await.
        let tx = {
            let inner = self.inner.lock().await;
            inner.as_ref().map(|session| session.tx.clone())
        };
        match tx {
            Some(tx) => tx.send(frame).await.is_ok(),
            None => false,
        }
    }

    /// Queue a frame only if `generation` still owns the slot.
    pub async fn send_if_current(&self, generation: u64, frame: OutboundFrame) -> bool {
        let tx = {
            let inner = self.inner.lock().await;
            inner
                .as_ref()
                .filter(|session| session.generation == generation)
                .map(|session| session.tx.clone())
        };
        match tx {
            Some(tx) => tx.send(frame).await.is_ok(),
            None => false,
        }
    }

    /// Close the open session, if any. Returns true when one was open.
    pub async fn close(&self) -> bool {
        self.inner.lock().await.take().is_some()
    }

    /// Close the session only if `generation` still owns the slot.
    pub async fn close_if_current(&self, generation: u64) -> bool {
        let mut inner = self.inner.lock().await;
        match inner.as_ref() {
            Some(session) if session.generation == generation => {
                *inner = None;
                true
            }
            _ => false,
        }
    }

    pub async fn is_open(&self) -> bool {
        self.inner.lock().await.is_some()
    }
}
