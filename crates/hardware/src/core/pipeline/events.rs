//! Hazard and Forwarding Events.
//!
//! Every stall and every forward the hazard unit decides on is recorded as a
//! [`PipelineEvent`]. Events are appended to an [`EventLog`] in cycle order and
//! never modified afterwards.

use serde::Serialize;

use crate::core::pipeline::hazards::StallReason;
use crate::core::pipeline::latches::Stage;

/// Kind of a pipeline event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    /// An ID instruction was held because an operand was not yet available.
    Stall,
    /// An operand was bypassed from a later stage instead of the register file.
    Forward,
}

/// A single stall or forward decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PipelineEvent {
    /// Stall or forward.
    pub kind: EventKind,
    /// Cycle the decision was made in.
    pub cycle: u64,
    /// Register the hazard is on.
    pub register: usize,
    /// Stage holding the producer (ID for same-group producers).
    pub source_stage: Stage,
    /// Stage of the consumer; always ID.
    pub dest_stage: Stage,
    /// Forwarded value; `None` for stalls.
    pub value: Option<u32>,
    /// Why the consumer stalled; `None` for forwards.
    pub reason: Option<StallReason>,
}

impl PipelineEvent {
    /// Creates a stall event.
    pub const fn stall(cycle: u64, register: usize, source_stage: Stage, reason: StallReason) -> Self {
        Self {
            kind: EventKind::Stall,
            cycle,
            register,
            source_stage,
            dest_stage: Stage::Id,
            value: None,
            reason: Some(reason),
        }
    }

    /// Creates a forward event.
    pub const fn forward(cycle: u64, register: usize, source_stage: Stage, value: u32) -> Self {
        Self {
            kind: EventKind::Forward,
            cycle,
            register,
            source_stage,
            dest_stage: Stage::Id,
            value: Some(value),
            reason: None,
        }
    }
}

/// Append-only, cycle-ordered log of pipeline events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EventLog {
    events: Vec<PipelineEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends events in order.
    pub fn extend<I: IntoIterator<Item = PipelineEvent>>(&mut self, events: I) {
        self.events.extend(events);
    }

    /// All events, oldest first.
    pub fn as_slice(&self) -> &[PipelineEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when nothing has been recorded.
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Stall events, oldest first.
    pub fn stalls(&self) -> impl Iterator<Item = &PipelineEvent> + '_ {
        self.events.iter().filter(|e| e.kind == EventKind::Stall)
    }

    /// Forward events, oldest first.
    pub fn forwards(&self) -> impl Iterator<Item = &PipelineEvent> + '_ {
        self.events.iter().filter(|e| e.kind == EventKind::Forward)
    }
}
