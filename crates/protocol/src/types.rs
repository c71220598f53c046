//! Vocabulary types shared across protocol messages.

/// Identifier of a match on the game server.
///
/// Stamped into every outbound frame; the join handshake signs its decimal
/// text representation.
pub type MatchId = u64;
