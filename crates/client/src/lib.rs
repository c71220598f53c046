//! ChainArena client - connection manager for the wallet-authenticated
//! match server.
//!
//! One live WebSocket session per match: `connect` performs the signed join
//! handshake, inbound frames are dispatched to the navigation/notification
//! ports and to registered observers, and send operations are silent no-ops
//! when no session is open.

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use config::ClientConfig;
pub use error::ClientError;
pub use infrastructure::websocket::{ConnectionState, GameConnection};
