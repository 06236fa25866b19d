use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::SequenceNumber;

/// Marker trait for every event an [`crate::Aggregate`] can emit. Events must be serializable so they can
/// be forwarded outside of the process, and displayable so they can be reported as a status line.
pub trait Event: Serialize + DeserializeOwned + Clone + Display {}

impl<T> Event for T where T: Serialize + DeserializeOwned + Clone + Display {}

/// An `EmittedEvent` contains the payload (the original event) alongside the event's metadata.
///
/// Emitted events are handed to the event handlers and returned to the caller; they are never retained
/// by the aggregate.
#[derive(Debug, Clone)]
pub struct EmittedEvent<E> {
    /// Uniquely identifies an event among all events emitted from all aggregates.
    pub id: Uuid,
    /// The aggregate instance that emitted the event.
    pub aggregate_id: Uuid,
    /// The original, emitted, event.
    pub payload: E,
    /// The timestamp of when the event has been applied.
    pub occurred_on: DateTime<Utc>,
    /// The sequence number of the event, within its specific aggregate instance.
    pub sequence_number: SequenceNumber,
}

impl<E> EmittedEvent<E> {
    pub const fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }

    pub const fn payload(&self) -> &E {
        &self.payload
    }
}
