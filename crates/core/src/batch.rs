//! Laundry batch status state machine and batch number generation.
//!
//! A batch moves through `scheduled -> dropped_off -> washing ->
//! ready_for_pickup -> picked_up`. Transitions are validated against an
//! explicit adjacency relation: a batch may advance one step, or re-apply
//! its current status (idempotent refresh). `picked_up` is terminal; a
//! picked-up batch is immutable.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a laundry batch.
///
/// The wire and storage representation is the snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Scheduled,
    DroppedOff,
    Washing,
    ReadyForPickup,
    PickedUp,
}

impl BatchStatus {
    /// The storage/wire name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            BatchStatus::Scheduled => "scheduled",
            BatchStatus::DroppedOff => "dropped_off",
            BatchStatus::Washing => "washing",
            BatchStatus::ReadyForPickup => "ready_for_pickup",
            BatchStatus::PickedUp => "picked_up",
        }
    }

    /// Parse a storage/wire name. Returns `None` for unknown strings.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(BatchStatus::Scheduled),
            "dropped_off" => Some(BatchStatus::DroppedOff),
            "washing" => Some(BatchStatus::Washing),
            "ready_for_pickup" => Some(BatchStatus::ReadyForPickup),
            "picked_up" => Some(BatchStatus::PickedUp),
            _ => None,
        }
    }

    /// The next status in the forward lifecycle, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            BatchStatus::Scheduled => Some(BatchStatus::DroppedOff),
            BatchStatus::DroppedOff => Some(BatchStatus::Washing),
            BatchStatus::Washing => Some(BatchStatus::ReadyForPickup),
            BatchStatus::ReadyForPickup => Some(BatchStatus::PickedUp),
            BatchStatus::PickedUp => None,
        }
    }

    /// Whether a batch in this status can never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, BatchStatus::PickedUp)
    }

    /// Whether a transition from `self` to `target` is legal.
    ///
    /// Legal transitions are the single forward step and re-applying the
    /// current status. A terminal batch accepts nothing, including its
    /// own status.
    pub fn can_transition(self, target: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        target == self || Some(target) == self.next()
    }
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate a unique batch number: `LB` + unix millis + 3 random digits.
///
/// The random suffix keeps two batches created within the same
/// millisecond from colliding; the database's unique constraint is the
/// final arbiter.
pub fn generate_batch_number() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u16 = rand::rng().random_range(0..1000);
    format!("LB{millis}{suffix:03}")
}
