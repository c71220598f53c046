//! Connection lifecycle state.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

/// Connection state for the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected to the server
    Disconnected,
    /// Attempting to establish connection
    Connecting,
    /// Successfully connected
    Connected,
    /// Connection failed
    Failed,
}

type StateCallback = Box<dyn Fn(ConnectionState) + Send + Sync>;

/// Shared state holder that notifies an optional callback on every change.
///
/// Mutated from the connect path and from the read task; both go through
/// `set` so the callback never misses a transition.
#[derive(Clone)]
pub(crate) struct StateCell {
    state: Arc<RwLock<ConnectionState>>,
    callback: Arc<Mutex<Option<StateCallback>>>,
}

impl StateCell {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ConnectionState::Disconnected)),
            callback: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn get(&self) -> ConnectionState {
        *self.state.read().await
    }

    pub async fn set(&self, new_state: ConnectionState) {
        {
            let mut state = self.state.write().await;
            *state = new_state;
        }

        let callback = self.callback.lock().await;
        if let Some(ref cb) = *callback {
            cb(new_state);
        }
    }

    pub async fn set_callback<F>(&self, callback: F)
    where
        F: Fn(ConnectionState) + Send + Sync + 'static,
    {
        let mut slot = self.callback.lock().await;
        *slot = Some(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[tokio::test]
    async fn starts_disconnected() {
        let cell = StateCell::new();
        assert_eq!(cell.get().await, ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn set_updates_state_and_fires_callback() {
        let cell = StateCell::new();
        let fired = Arc::new(AtomicU32::new(0));

        let fired_clone = Arc::clone(&fired);
        cell.set_callback(move |state| {
            if state == ConnectionState::Connected {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            }
        })
        .await;

        cell.set(ConnectionState::Connecting).await;
        cell.set(ConnectionState::Connected).await;

        assert_eq!(cell.get().await, ConnectionState::Connected);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
