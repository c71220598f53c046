//! Inbound message dispatch.
//!
//! One dispatcher per connection. Lifecycle frames drive navigation,
//! notification, and session close; every frame is then forwarded to the
//! registered observers in registration order.

use std::sync::Arc;

use chainarena_protocol::ServerMessage;

use crate::ports::{NavigationPort, NotificationPort};

use super::observers::MessageObservers;
use super::session::SessionSlot;

pub(crate) struct MessageDispatcher {
    navigation: Arc<dyn NavigationPort>,
    notifications: Arc<dyn NotificationPort>,
    observers: MessageObservers,
    session: Arc<SessionSlot>,
    generation: u64,
}

impl MessageDispatcher {
    pub fn new(
        navigation: Arc<dyn NavigationPort>,
        notifications: Arc<dyn NotificationPort>,
        observers: MessageObservers,
        session: Arc<SessionSlot>,
        generation: u64,
    ) -> Self {
        Self {
            navigation,
            notifications,
            observers,
            session,
            generation,
        }
    }

    /// Handle one parsed server frame.
    pub async fn dispatch(&self, message: ServerMessage) {
        match &message {
            ServerMessage::MatchStarted => {
                tracing::info!("Match started, switching to gameplay view");
                self.navigation.to_gameplay();
            }
            ServerMessage::MatchEnded { data } => {
                tracing::info!("Match ended, winner {}", data.winner);
                self.notifications
                    .success(&format!("Match ended, winner {}", data.winner));
                self.navigation.to_home();
                self.session.close_if_current(self.generation).await;
            }
            ServerMessage::Unknown(_) => {
                tracing::debug!(
                    "No internal handling for server frame type {:?}",
                    message.kind()
                );
            }
        }

        // Observers always see the full frame, after internal handling.
        self.observers.notify(message).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use serde_json::json;
    use tokio::sync::mpsc;

    use chainarena_protocol::MatchOutcome;

    use crate::infrastructure::testing::{Journal, RecordingNavigator, RecordingNotifier};

    use super::*;

    struct Fixture {
        dispatcher: MessageDispatcher,
        journal: Journal,
        session: Arc<SessionSlot>,
        seen: Arc<StdMutex<Vec<ServerMessage>>>,
        _rx: mpsc::Receiver<String>,
    }

    async fn fixture(generation: u64) -> Fixture {
        let journal = Journal::new();
        let observers = MessageObservers::new();
        let seen = Arc::new(StdMutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        observers
            .subscribe(move |msg| seen_clone.lock().expect("seen").push(msg))
            .await;

        let session = Arc::new(SessionSlot::default());
        let (tx, rx) = mpsc::channel(4);
        session.open(generation, tx).await;

        let dispatcher = MessageDispatcher::new(
            Arc::new(RecordingNavigator::new(journal.clone())),
            Arc::new(RecordingNotifier::new(journal.clone())),
            observers,
            Arc::clone(&session),
            generation,
        );

        Fixture {
            dispatcher,
            journal,
            session,
            seen,
            _rx: rx,
        }
    }

    #[tokio::test]
    async fn match_started_navigates_to_gameplay_and_keeps_session() {
        let fx = fixture(1).await;

        fx.dispatcher.dispatch(ServerMessage::MatchStarted).await;

        assert_eq!(fx.journal.entries(), vec!["nav:gameplay".to_string()]);
        assert!(fx.session.is_open().await);
        assert!(matches!(
            fx.seen.lock().expect("seen").as_slice(),
            [ServerMessage::MatchStarted]
        ));
    }

    #[tokio::test]
    async fn match_ended_notifies_then_navigates_home_then_closes() {
        let fx = fixture(1).await;

        fx.dispatcher
            .dispatch(ServerMessage::MatchEnded {
                data: MatchOutcome {
                    winner: "alice".to_string(),
                },
            })
            .await;

        let entries = fx.journal.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].starts_with("notify:"));
        assert!(entries[0].contains("alice"));
        assert_eq!(entries[1], "nav:home");
        assert!(!fx.session.is_open().await);
        assert_eq!(fx.seen.lock().expect("seen").len(), 1);
    }

    #[tokio::test]
    async fn unknown_frame_only_reaches_observers() {
        let fx = fixture(1).await;

        fx.dispatcher
            .dispatch(ServerMessage::Unknown(json!({"type": "score_update"})))
            .await;

        assert!(fx.journal.entries().is_empty());
        assert!(fx.session.is_open().await);
        assert_eq!(fx.seen.lock().expect("seen").len(), 1);
    }

    #[tokio::test]
    async fn superseded_dispatcher_cannot_close_current_session() {
        // Session belongs to generation 2; the dispatcher is from 1.
        let fx = fixture(2).await;
        let stale = MessageDispatcher::new(
            Arc::new(RecordingNavigator::new(fx.journal.clone())),
            Arc::new(RecordingNotifier::new(fx.journal.clone())),
            MessageObservers::new(),
            Arc::clone(&fx.session),
            1,
        );

        stale
            .dispatch(ServerMessage::MatchEnded {
                data: MatchOutcome {
                    winner: "bob".to_string(),
                },
            })
            .await;

        assert!(fx.session.is_open().await);
    }
}
