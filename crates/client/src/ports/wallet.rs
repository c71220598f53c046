//! Wallet Port - outbound port for the wallet provider.
//!
//! The wallet owns the account list and the signing capability used by the
//! join handshake. Implementations range from a real wallet bridge to the
//! deterministic dev signer in `infrastructure::wallet`.

use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by a wallet provider.
#[derive(Debug, Clone, Error)]
pub enum WalletError {
    /// The wallet has no connected account.
    #[error("no wallet account available")]
    NoAccount,
    /// The wallet refused or failed to sign.
    #[error("signing failed: {0}")]
    SigningFailed(String),
    /// The wallet provider itself is unreachable.
    #[error("wallet unavailable: {0}")]
    Unavailable(String),
}

/// Outbound port for wallet account access and message signing.
#[async_trait]
pub trait WalletPort: Send + Sync {
    /// Connected account addresses. The first entry is the active player
    /// address stamped into input frames.
    fn accounts(&self) -> Vec<String>;

    /// Sign an arbitrary text message, returning the signature string.
    async fn sign_message(&self, message: &str) -> Result<String, WalletError>;
}
