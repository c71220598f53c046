//! WebSocket message types for client-server communication
//!
//! This module contains all message types exchanged over the WebSocket
//! connection. The server dispatches on the `type` field, so every variant
//! serializes with an internal `"type"` tag in snake_case.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::MatchId;

// =============================================================================
// Client Messages (Player -> Server)
// =============================================================================

/// Messages from the client to the match server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Signed join handshake, sent once after the transport opens.
    ///
    /// `signature` is the wallet signature over the decimal text of
    /// `match_id`.
    JoinMatch {
        match_id: MatchId,
        signature: String,
    },
    /// Gameplay input frame, stamped with the current match and the
    /// sender's wallet address.
    ///
    /// `playerAddress` is the one camelCase field on the wire; the server
    /// expects it verbatim.
    Input {
        match_id: MatchId,
        #[serde(rename = "playerAddress")]
        player_address: String,
        data: Value,
    },
}

// =============================================================================
// Server Messages (Server -> Player)
// =============================================================================

/// Result data carried by a `match_ended` frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: String,
}

/// Messages from the match server to the client.
///
/// Only the lifecycle discriminants are modelled; everything else the server
/// sends lands in `Unknown` with the full payload preserved, so observers
/// still see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The match has started; the client should switch to the gameplay view.
    MatchStarted,
    /// The match has ended; carries the winner.
    MatchEnded { data: MatchOutcome },
    /// Any frame with an unrecognized `type` (or no `type` at all).
    #[serde(untagged)]
    Unknown(Value),
}

impl ServerMessage {
    /// The wire discriminant, if the frame carried one.
    pub fn kind(&self) -> Option<&str> {
        match self {
            ServerMessage::MatchStarted => Some("match_started"),
            ServerMessage::MatchEnded { .. } => Some("match_ended"),
            ServerMessage::Unknown(value) => value.get("type").and_then(Value::as_str),
        }
    }
}
