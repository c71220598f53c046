//! WebSocket connection manager for the match server.
//!
//! - `client`: the public `GameConnection` API
//! - `dispatch`: inbound lifecycle dispatch
//! - `observers`: append-only inbound message observers
//! - `session`: generation-tagged single-session slot
//! - `state`: connection state cell

mod client;
mod dispatch;
mod observers;
mod session;
mod state;

pub use client::GameConnection;
pub use observers::MessageObservers;
pub use state::ConnectionState;
