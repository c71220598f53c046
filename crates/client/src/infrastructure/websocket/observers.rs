//! Inbound message observers.
//!
//! Append-only list of callbacks invoked, in registration order, for every
//! parsed server frame. There is no unregister and the list is never
//! cleared or deduplicated.

use std::sync::Arc;

use tokio::sync::Mutex;

use chainarena_protocol::ServerMessage;

type Observer = Box<dyn FnMut(ServerMessage) + Send + 'static>;

/// Ordered collection of inbound message observers.
#[derive(Clone)]
pub struct MessageObservers {
    inner: Arc<Mutex<Vec<Observer>>>,
}

impl MessageObservers {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append an observer. Observers are invoked in registration order.
    pub async fn subscribe<F>(&self, observer: F)
    where
        F: FnMut(ServerMessage) + Send + 'static,
    {
        self.inner.lock().await.push(Box::new(observer));
    }

    /// Invoke every observer with a clone of the message.
    pub async fn notify(&self, message: ServerMessage) {
        let mut observers = self.inner.lock().await;
        for observer in observers.iter_mut() {
            observer(message.clone());
        }
    }

    /// Number of registered observers.
    pub async fn count(&self) -> usize {
        self.inner.lock().await.len()
    }
}

impl Default for MessageObservers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use super::*;

    #[tokio::test]
    async fn notifies_in_registration_order() {
        let observers = MessageObservers::new();
        let seen = Arc::new(StdMutex::new(Vec::new()));

        let seen_a = Arc::clone(&seen);
        observers
            .subscribe(move |_msg| seen_a.lock().expect("seen").push("A"))
            .await;

        let seen_b = Arc::clone(&seen);
        observers
            .subscribe(move |_msg| seen_b.lock().expect("seen").push("B"))
            .await;

        assert_eq!(observers.count().await, 2);

        observers.notify(ServerMessage::MatchStarted).await;

        assert_eq!(*seen.lock().expect("seen"), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn every_observer_sees_every_message() {
        let observers = MessageObservers::new();
        let seen = Arc::new(StdMutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        observers
            .subscribe(move |msg: ServerMessage| {
                seen_clone.lock().expect("seen").push(msg);
            })
            .await;

        observers.notify(ServerMessage::MatchStarted).await;
        observers
            .notify(ServerMessage::Unknown(serde_json::json!({"type": "score_update"})))
            .await;

        let seen = seen.lock().expect("seen");
        assert_eq!(seen.len(), 2);
        assert!(matches!(seen[0], ServerMessage::MatchStarted));
        assert!(matches!(seen[1], ServerMessage::Unknown(_)));
    }
}
