//! Batch lifecycle controller.
//!
//! All status changes go through [`transition_batch`]: it validates the
//! transition against the state machine, stamps the matching timestamp,
//! persists the update, records an audit entry, and fires the pickup
//! notification when a batch becomes ready. Notification failures never
//! fail the status update.

use chrono::Utc;
use washline_core::activity::activity_types;
use washline_core::batch::BatchStatus;
use washline_core::channels::CHANNEL_EMAIL;
use washline_core::error::CoreError;
use washline_core::types::DbId;
use washline_db::models::batch::{Batch, BatchUpdate};
use washline_db::LaundryStore;
use washline_mailer::Mailer;

use crate::activity;
use crate::error::{AppError, AppResult};
use crate::notifications;

/// Advance a batch to `target`, enforcing the lifecycle state machine.
///
/// `actor` is the staff user performing the change; `notes` replaces the
/// staff notes only when non-empty. Illegal transitions surface as
/// [`CoreError::InvalidTransition`] (409) without touching the row.
pub async fn transition_batch(
    store: &dyn LaundryStore,
    mailer: &dyn Mailer,
    actor: DbId,
    batch_id: DbId,
    target: BatchStatus,
    notes: Option<String>,
) -> AppResult<Batch> {
    let batch = store
        .batch_by_id(batch_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Batch",
            id: batch_id,
        }))?;

    let current = BatchStatus::parse(&batch.status).ok_or_else(|| {
        AppError::InternalError(format!(
            "Batch {batch_id} has unknown status '{}'",
            batch.status
        ))
    })?;

    if !current.can_transition(target) {
        return Err(AppError::Core(CoreError::InvalidTransition {
            from: current,
            to: target,
        }));
    }

    let now = Utc::now();
    let update = BatchUpdate {
        status: target.as_str().to_string(),
        dropped_off_at: (target == BatchStatus::DroppedOff).then_some(now),
        ready_at: (target == BatchStatus::ReadyForPickup).then_some(now),
        picked_up_at: (target == BatchStatus::PickedUp).then_some(now),
        staff_notes: notes.filter(|n| !n.trim().is_empty()),
    };

    let updated = store
        .update_batch(batch_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Batch",
            id: batch_id,
        }))?;

    activity::record(
        store,
        Some(actor),
        activity_types::STATUS_CHANGE,
        format!(
            "Batch {} status changed: {} -> {}",
            updated.batch_number, current, target
        ),
        Some(serde_json::json!({
            "batch_id": updated.id,
            "from": current.as_str(),
            "to": target.as_str(),
        })),
    )
    .await;

    // Fire the pickup notification only on the actual arrival at
    // ready_for_pickup, not on an idempotent re-apply.
    if target == BatchStatus::ReadyForPickup && current != BatchStatus::ReadyForPickup {
        let message = format!(
            "Your laundry batch {} is ready for pickup!",
            updated.batch_number
        );
        if let Err(err) = notifications::dispatch(
            store,
            mailer,
            updated.student_id,
            Some(&updated),
            CHANNEL_EMAIL,
            &message,
        )
        .await
        {
            tracing::warn!(
                batch_id = updated.id,
                error = %err,
                "Failed to send pickup notification (non-critical)"
            );
        }
    }

    Ok(updated)
}
