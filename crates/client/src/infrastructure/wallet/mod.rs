//! Wallet adapters.

mod dev;

pub use dev::DevWallet;
