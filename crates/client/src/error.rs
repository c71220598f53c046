//! Client error taxonomy.

use thiserror::Error;

use crate::ports::WalletError;

/// Errors surfaced by the connection manager.
///
/// A missing endpoint is deliberately not a variant here: `connect` treats
/// it as a logged diagnostic and aborts without a session.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("failed to encode outbound frame: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),
}
