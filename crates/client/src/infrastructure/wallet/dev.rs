//! Deterministic dev wallet.
//!
//! Not a real signer: signatures are a salted SHA-256 digest, stable across
//! runs so local servers and tests can assert on them. Used for headless
//! runs where no wallet provider is attached.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::ports::{WalletError, WalletPort};

/// Wallet implementation producing deterministic pseudo signatures.
pub struct DevWallet {
    address: String,
}

impl DevWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[async_trait]
impl WalletPort for DevWallet {
    fn accounts(&self) -> Vec<String> {
        vec![self.address.clone()]
    }

    async fn sign_message(&self, message: &str) -> Result<String, WalletError> {
        let mut hasher = Sha256::new();
        hasher.update(self.address.as_bytes());
        hasher.update(message.as_bytes());
        Ok(format!("0x{}", hex::encode(hasher.finalize())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_account_is_the_configured_address() {
        let wallet = DevWallet::new("0xplayer");
        assert_eq!(wallet.accounts(), vec!["0xplayer".to_string()]);
    }

    #[tokio::test]
    async fn signatures_are_deterministic_per_address_and_message() {
        let wallet = DevWallet::new("0xplayer");
        let first = wallet.sign_message("42").await.expect("sign");
        let second = wallet.sign_message("42").await.expect("sign");
        assert_eq!(first, second);
        assert!(first.starts_with("0x"));

        let other_message = wallet.sign_message("43").await.expect("sign");
        assert_ne!(first, other_message);

        let other_wallet = DevWallet::new("0xrival");
        let other_signer = other_wallet.sign_message("42").await.expect("sign");
        assert_ne!(first, other_signer);
    }
}
