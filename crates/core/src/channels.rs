//! Notification channel name constants.

pub const CHANNEL_EMAIL: &str = "email";
pub const CHANNEL_SMS: &str = "sms";

/// Whether `channel` is one of the known delivery channels.
pub fn is_valid_channel(channel: &str) -> bool {
    matches!(channel, CHANNEL_EMAIL | CHANNEL_SMS)
}
