//! Observability boundary for store mutations.
//!
//! Sinks are optional, injected by the caller, and must not affect store
//! semantics.

use crate::record::RecordId;

///
/// EventSink
///

pub trait EventSink {
    fn on_event(&self, event: StoreEvent);
}

///
/// StoreEvent
///
/// One event per store mutation, emitted in the order the mutations were
/// applied. Silent no-ops (unknown ids) emit nothing.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoreEvent {
    Created { id: RecordId },
    Updated { id: RecordId },
    Deleted { id: RecordId },
    Replaced { len: usize },
}
