//! Domain events: what a store mutation did, as an immutable fact.

pub mod envelope;
pub mod event;

pub use envelope::EventEnvelope;
pub use event::Event;
