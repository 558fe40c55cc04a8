//! Notification dispatcher: persist first, deliver second.
//!
//! A notification row is always written before any delivery attempt, so
//! the in-app feed shows the notification even when the email bounces.
//! `is_sent` flips to true only after a transport accepts the message;
//! `is_read` is owned by the recipient and never touched here.

use washline_core::activity::activity_types;
use washline_core::channels::{is_valid_channel, CHANNEL_EMAIL};
use washline_core::error::CoreError;
use washline_core::types::DbId;
use washline_db::models::batch::Batch;
use washline_db::models::notification::{CreateNotification, Notification};
use washline_db::LaundryStore;
use washline_mailer::{template, Mailer, OutgoingEmail};

use crate::activity;
use crate::error::{AppError, AppResult};

/// Persist a notification for `user_id` and attempt delivery.
///
/// For the email channel, delivery is skipped (row stays unsent) when the
/// user has disabled email notifications or has no address on file. When
/// the notification concerns a batch, the full "ready for pickup" email
/// is rendered; otherwise a generic message email is sent. The SMS
/// channel has no transport yet and is marked sent after logging. An
/// unknown channel is rejected before any row is written.
pub async fn dispatch(
    store: &dyn LaundryStore,
    mailer: &dyn Mailer,
    user_id: DbId,
    batch: Option<&Batch>,
    channel: &str,
    message: &str,
) -> AppResult<Notification> {
    if !is_valid_channel(channel) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown notification channel: {channel}"
        ))));
    }

    let user = store
        .user_by_id(user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    let notification = store
        .create_notification(&CreateNotification {
            user_id,
            batch_id: batch.map(|b| b.id),
            channel: channel.to_string(),
            message: message.to_string(),
        })
        .await?;

    let mut sent = false;
    match channel {
        CHANNEL_EMAIL => {
            if !user.email_notifications {
                tracing::info!(user_id, "Email notifications disabled; notification saved unsent");
            } else if user.email.is_empty() {
                tracing::info!(user_id, "User has no email address; notification saved unsent");
            } else {
                let email = match batch {
                    Some(batch) => template::laundry_ready(
                        &user.email,
                        &user.full_name,
                        &batch.batch_number,
                        user.block.as_deref(),
                        user.room_number.as_deref(),
                    ),
                    None => OutgoingEmail {
                        to: user.email.clone(),
                        subject: "Laundry Ready for Pickup".to_string(),
                        html: format!("<p>{message}</p>"),
                        text: message.to_string(),
                    },
                };
                match mailer.send(&email).await {
                    Ok(true) => {
                        store.mark_notification_sent(notification.id).await?;
                        sent = true;
                    }
                    Ok(false) => {
                        tracing::warn!(
                            notification_id = notification.id,
                            "Email not delivered; notification stays unsent"
                        );
                    }
                    Err(err) => {
                        tracing::warn!(
                            notification_id = notification.id,
                            error = %err,
                            "Email delivery failed; notification stays unsent"
                        );
                    }
                }
            }
        }
        // The channel was validated above, so only SMS remains.
        _ => {
            // No SMS provider yet; log and mark as handed off.
            tracing::info!(user_id, message, "SMS notification would be sent");
            store.mark_notification_sent(notification.id).await?;
            sent = true;
        }
    }

    activity::record(
        store,
        Some(user_id),
        activity_types::NOTIFICATION_SENT,
        format!("{} notification sent", channel.to_uppercase()),
        Some(serde_json::json!({
            "batch_id": batch.map(|b| b.id),
            "message": message,
            "sent": sent,
        })),
    )
    .await;

    // Return the row with its final delivery state.
    if sent {
        return Ok(Notification {
            is_sent: true,
            sent_at: Some(chrono::Utc::now()),
            ..notification
        });
    }
    Ok(notification)
}
