//! Test doubles for the outbound ports.
//!
//! Hand-rolled recording mocks: tests drive inbound frames through the real
//! connection and assert the calls the ports saw. A shared `Journal` keeps
//! cross-port ordering assertable.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::ports::{NavigationPort, NotificationPort, WalletError, WalletPort};

/// Shared, ordered record of port invocations.
#[derive(Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries
            .lock()
            .expect("journal poisoned")
            .push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().expect("journal poisoned").clone()
    }
}

/// `NavigationPort` double that records view switches.
#[derive(Clone)]
pub struct RecordingNavigator {
    journal: Journal,
}

impl RecordingNavigator {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl NavigationPort for RecordingNavigator {
    fn to_gameplay(&self) {
        self.journal.record("nav:gameplay");
    }

    fn to_home(&self) {
        self.journal.record("nav:home");
    }
}

/// `NotificationPort` double that records success messages.
#[derive(Clone)]
pub struct RecordingNotifier {
    journal: Journal,
}

impl RecordingNotifier {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl NotificationPort for RecordingNotifier {
    fn success(&self, message: &str) {
        self.journal.record(format!("notify:{}", message));
    }
}

/// `WalletPort` double with canned accounts and signature.
#[derive(Clone)]
pub struct ScriptedWallet {
    accounts: Vec<String>,
    signature: String,
}

impl ScriptedWallet {
    pub fn new(account: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            accounts: vec![account.into()],
            signature: signature.into(),
        }
    }

    /// A wallet with no connected account.
    pub fn empty() -> Self {
        Self {
            accounts: Vec::new(),
            signature: String::new(),
        }
    }
}

#[async_trait]
impl WalletPort for ScriptedWallet {
    fn accounts(&self) -> Vec<String> {
        self.accounts.clone()
    }

    async fn sign_message(&self, _message: &str) -> Result<String, WalletError> {
        if self.accounts.is_empty() {
            return Err(WalletError::NoAccount);
        }
        Ok(self.signature.clone())
    }
}

/// `WalletPort` double that blocks signing until released, for races where
/// the signature resolves after the session it was meant for is gone.
#[derive(Clone)]
pub struct GatedWallet {
    account: String,
    signature: String,
    gate: Arc<Notify>,
}

impl GatedWallet {
    pub fn new(account: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            signature: signature.into(),
            gate: Arc::new(Notify::new()),
        }
    }

    /// Let one pending `sign_message` call resolve.
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl WalletPort for GatedWallet {
    fn accounts(&self) -> Vec<String> {
        vec![self.account.clone()]
    }

    async fn sign_message(&self, _message: &str) -> Result<String, WalletError> {
        self.gate.notified().await;
        Ok(self.signature.clone())
    }
}
