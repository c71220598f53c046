//! Game server connection manager.
//!
//! Owns the single WebSocket session to the match server: `connect`
//! performs the signed join handshake, inbound frames are dispatched to
//! lifecycle actions and observers, and send operations become silent
//! no-ops when no session is open.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::sync::{mpsc, RwLock};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use chainarena_protocol::{ClientMessage, MatchId, ServerMessage};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::ports::{NavigationPort, NotificationPort, WalletPort};

use super::dispatch::MessageDispatcher;
use super::observers::MessageObservers;
use super::session::SessionSlot;
use super::state::{ConnectionState, StateCell};

/// Capacity of the outbound frame queue feeding the write task.
const OUTBOUND_QUEUE_CAPACITY: usize = 32;

/// WebSocket connection manager for the match server.
pub struct GameConnection {
    config: ClientConfig,
    wallet: Arc<dyn WalletPort>,
    navigation: Arc<dyn NavigationPort>,
    notifications: Arc<dyn NotificationPort>,
    observers: MessageObservers,
    state: StateCell,
    session: Arc<SessionSlot>,
    match_id: Arc<RwLock<Option<MatchId>>>,
    /// Bumped on every connect and disconnect. A join handshake only lands
    /// if its generation is still current, and a superseded session's read
    /// task can neither close the new slot nor rewrite its state.
    generation: Arc<AtomicU64>,
}

impl GameConnection {
    pub fn new(
        config: ClientConfig,
        wallet: Arc<dyn WalletPort>,
        navigation: Arc<dyn NavigationPort>,
        notifications: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            config,
            wallet,
            navigation,
            notifications,
            observers: MessageObservers::new(),
            state: StateCell::new(),
            session: Arc::new(SessionSlot::default()),
            match_id: Arc::new(RwLock::new(None)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Current connection state.
    pub async fn state(&self) -> ConnectionState {
        self.state.get().await
    }

    /// Register a callback invoked on every state transition.
    pub async fn set_on_state_change<F>(&self, callback: F)
    where
        F: Fn(ConnectionState) + Send + Sync + 'static,
    {
        self.state.set_callback(callback).await;
    }

    /// Register an observer invoked for every inbound frame.
    ///
    /// Observers are append-only and run in registration order; there is
    /// no unregister.
    pub async fn on_receive_message<F>(&self, callback: F)
    where
        F: FnMut(ServerMessage) + Send + 'static,
    {
        self.observers.subscribe(callback).await;
    }

    /// Open a session to the configured endpoint and join `match_id`.
    ///
    /// Without a configured endpoint this logs and returns without creating
    /// a session. Any session already open is closed first; two sessions
    /// never coexist.
    pub async fn connect(&self, match_id: MatchId) -> Result<(), ClientError> {
        let Some(endpoint) = self.config.endpoint.clone() else {
            tracing::error!("Game server endpoint is not configured, not connecting");
            return Ok(());
        };

        // Supersede any previous attempt before anything else: in-flight
        // handshakes from older generations must not land on this session.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if self.session.close().await {
            tracing::info!("Closing existing session before reconnecting");
        }
        *self.match_id.write().await = Some(match_id);

        self.state.set(ConnectionState::Connecting).await;
        let (ws_stream, _) = match connect_async(endpoint.as_str()).await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::error!("Failed to connect to game server: {}", e);
                self.state.set(ConnectionState::Failed).await;
                return Err(e.into());
            }
        };
        tracing::info!("Connected to game server at {}", endpoint);
        self.state.set(ConnectionState::Connected).await;

        let (mut write, mut read) = ws_stream.split();
        let (tx, mut rx) = mpsc::channel::<String>(OUTBOUND_QUEUE_CAPACITY);
        self.session.open(generation, tx).await;

        // Write task: owns the sink, drains the queue, and closes the
        // socket once the slot (the only long-lived sender) is cleared.
        tokio::spawn(async move {
            while let Some(frame) = rx.recv().await {
                if let Err(e) = write.send(Message::Text(frame)).await {
                    tracing::error!("Failed to send frame: {}", e);
                    break;
                }
            }
            let _ = write.send(Message::Close(None)).await;
        });

        self.spawn_join_handshake(generation, match_id);

        // Read task: parse, dispatch, tear down when the stream ends.
        let dispatcher = MessageDispatcher::new(
            Arc::clone(&self.navigation),
            Arc::clone(&self.notifications),
            self.observers.clone(),
            Arc::clone(&self.session),
            generation,
        );
        let session = Arc::clone(&self.session);
        let state = self.state.clone();
        let generation_counter = Arc::clone(&self.generation);
        tokio::spawn(async move {
            while let Some(msg) = read.next().await {
                match msg {
                    Ok(Message::Text(text)) => {
                        match serde_json::from_str::<ServerMessage>(&text) {
                            Ok(server_msg) => dispatcher.dispatch(server_msg).await,
                            Err(e) => {
                                tracing::warn!("Discarding malformed server frame: {}", e);
                            }
                        }
                    }
                    Ok(Message::Close(_)) => {
                        tracing::info!("Server closed the connection");
                        break;
                    }
                    Ok(Message::Ping(_)) => {}
                    Err(e) => {
                        tracing::error!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }

            session.close_if_current(generation).await;
            if generation_counter.load(Ordering::SeqCst) == generation {
                state.set(ConnectionState::Disconnected).await;
            }
        });

        Ok(())
    }

    /// Sign the match id and send the join frame, unless the session has
    /// been superseded while the signature was pending.
    fn spawn_join_handshake(&self, generation: u64, match_id: MatchId) {
        let wallet = Arc::clone(&self.wallet);
        let session = Arc::clone(&self.session);
        tokio::spawn(async move {
            let signature = match wallet.sign_message(&match_id.to_string()).await {
                Ok(signature) => signature,
                Err(e) => {
                    tracing::error!("Wallet refused to sign join message: {}", e);
                    return;
                }
            };
            let frame = ClientMessage::JoinMatch {
                match_id,
                signature,
            };
            let json = match serde_json::to_string(&frame) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to encode join frame: {}", e);
                    return;
                }
            };
            if session.send_if_current(generation, json).await {
                tracing::info!("Sent join handshake for match {}", match_id);
            } else {
                tracing::warn!(
                    "Join handshake for match {} abandoned, session superseded",
                    match_id
                );
            }
        });
    }

    /// Send a pre-serialized payload verbatim. No-op without a session.
    pub async fn send(&self, raw: String) {
        if !self.session.send(raw).await {
            tracing::debug!("Dropping send, no open session");
        }
    }

    /// Wrap a payload into an input frame stamped with the current match id
    /// and the wallet's first account, and send it. No-op without a session
    /// or without a wallet account.
    pub async fn send_inputs(&self, payload: Value) {
        if !self.session.is_open().await {
            tracing::debug!("Dropping input frame, no open session");
            return;
        }
        let Some(match_id) = *self.match_id.read().await else {
            tracing::debug!("Dropping input frame, no match joined");
            return;
        };
        let Some(player_address) = self.wallet.accounts().into_iter().next() else {
            tracing::warn!("Dropping input frame, wallet has no account");
            return;
        };

        let frame = ClientMessage::Input {
            match_id,
            player_address,
            data: payload,
        };
        match serde_json::to_string(&frame) {
            Ok(json) => {
                if !self.session.send(json).await {
                    tracing::debug!("Dropping input frame, no open session");
                }
            }
            Err(e) => tracing::error!("Failed to encode input frame: {}", e),
        }
    }

    /// Close the open session. No-op when none is open.
    pub async fn disconnect(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if self.session.close().await {
            tracing::info!("Disconnected from game server");
            self.state.set(ConnectionState::Disconnected).await;
        } else {
            tracing::debug!("Disconnect requested with no open session");
        }
    }
}
