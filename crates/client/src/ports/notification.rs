//! Notification Port - outbound port for user-facing notices.

/// Outbound port for surfacing success notices to the player.
pub trait NotificationPort: Send + Sync {
    /// Show a success message.
    fn success(&self, message: &str);
}
