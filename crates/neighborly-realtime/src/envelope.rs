//! Event envelope framing for WebSocket delivery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use neighborly_core::events::DomainEvent;

/// Envelope wrapping a domain event with delivery metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique delivery ID.
    pub id: Uuid,
    /// The channel name the event was published on.
    pub channel: String,
    /// The wrapped event.
    pub event: DomainEvent,
    /// When the envelope was created.
    pub timestamp: DateTime<Utc>,
}

impl EventEnvelope {
    /// Wrap an event for delivery on the given channel.
    pub fn new(channel: impl Into<String>, event: DomainEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel: channel.into(),
            event,
            timestamp: Utc::now(),
        }
    }
}
