//! Outbound ports for external collaborators.
//!
//! The wallet, navigation, and notification services live outside this
//! component; these traits are the seams the connection manager talks
//! through. All of them are object-safe so callers can hold `Arc<dyn ...>`.

mod navigation;
mod notification;
mod wallet;

pub use navigation::NavigationPort;
pub use notification::NotificationPort;
pub use wallet::{WalletError, WalletPort};
