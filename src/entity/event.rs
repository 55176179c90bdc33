//! Order lifecycle events.

use serde::{Deserialize, Serialize};

use super::Order;

/// A labeled order lifecycle snapshot.
///
/// Events are emitted as flat snapshots; no state machine governs the
/// transitions between event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_type: EventType,
    pub order: Order,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Created,
    OnHold,
    Updated,
    Cancelled,
    PickingComplete,
    Shippable,
    Delivered,
    Failed,
    Completed,
}

impl EventType {
    pub const ALL: [EventType; 9] = [
        EventType::Created,
        EventType::OnHold,
        EventType::Updated,
        EventType::Cancelled,
        EventType::PickingComplete,
        EventType::Shippable,
        EventType::Delivered,
        EventType::Failed,
        EventType::Completed,
    ];
}
