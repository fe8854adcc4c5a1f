//! Domain events emitted by will lifecycle commands.
//!
//! Only the event contract lives here; appending events to a stream is the
//! storage collaborator's concern.

pub mod event;

pub use event::Event;
