use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Envelope for an applied event, with its position in the stream.
///
/// `sequence_number` is strictly increasing per store, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_type: String,

    /// Schema version of the payload's event type.
    event_version: u32,

    /// Position in the stream of applied events.
    sequence_number: u64,

    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    pub fn wrap(sequence_number: u64, payload: E) -> Self {
        Self {
            event_type: payload.event_type().to_string(),
            event_version: payload.version(),
            sequence_number,
            payload,
        }
    }
}

impl<E> EventEnvelope<E> {
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn event_version(&self) -> u32 {
        self.event_version
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}
