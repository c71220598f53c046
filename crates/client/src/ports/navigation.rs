//! Navigation Port - outbound port for view routing.

/// Outbound port for switching the player-facing view.
///
/// The connection manager drives navigation from match lifecycle frames;
/// how a view change is rendered is up to the implementation.
pub trait NavigationPort: Send + Sync {
    /// Switch to the gameplay view.
    fn to_gameplay(&self);

    /// Switch to the home view.
    fn to_home(&self);
}
