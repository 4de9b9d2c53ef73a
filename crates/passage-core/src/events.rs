//! Engine lifecycle events and the queue used to collect them.
//!
//! The animation engine reports progress by pushing events here during
//! `apply`; hosts drain the queue after each update cycle and feed the
//! events back into their bindings, which is how exit-driven unmounting is
//! sequenced.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Lifecycle event emitted by an animation engine for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// Enter animation began.
    EnterStarted { route_id: String },
    /// Enter animation completed.
    EnterFinished { route_id: String },
    /// Exit animation began.
    ExitStarted { route_id: String },
    /// Exit animation completed; the view may now be unmounted.
    ExitFinished { route_id: String },
    /// Animation interrupted before completion, for example by a rapid
    /// match toggle.
    Cancelled { route_id: String },
}

impl EngineEvent {
    /// Get the route ID this event belongs to.
    pub fn route_id(&self) -> &str {
        match self {
            Self::EnterStarted { route_id }
            | Self::EnterFinished { route_id }
            | Self::ExitStarted { route_id }
            | Self::ExitFinished { route_id }
            | Self::Cancelled { route_id } => route_id,
        }
    }

    /// Check if this is an enter-phase event.
    pub fn is_enter(&self) -> bool {
        matches!(self, Self::EnterStarted { .. } | Self::EnterFinished { .. })
    }

    /// Check if this is an exit-phase event.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::ExitStarted { .. } | Self::ExitFinished { .. })
    }

    /// Check if this is a "finished" event for either phase.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::EnterFinished { .. } | Self::ExitFinished { .. })
    }

    /// Check if this is a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Queue for collecting engine events during update cycles.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<EngineEvent>,
}

impl EventQueue {
    /// Create a new empty event queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&mut self, event: EngineEvent) {
        self.events.push_back(event);
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get the number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Pop the next event from the queue.
    pub fn pop(&mut self) -> Option<EngineEvent> {
        self.events.pop_front()
    }

    /// Drain all events from the queue, returning an iterator.
    pub fn drain(&mut self) -> impl Iterator<Item = EngineEvent> + '_ {
        self.events.drain(..)
    }

    /// Peek at the next event without removing it.
    pub fn peek(&self) -> Option<&EngineEvent> {
        self.events.front()
    }

    /// Clear all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Get events for a specific route.
    pub fn events_for_route(&self, route_id: &str) -> Vec<&EngineEvent> {
        self.events
            .iter()
            .filter(|e| e.route_id() == route_id)
            .collect()
    }
}

// Events flow back from the engine to bindings that may live on another
// thread between synchronous updates.
static_assertions::assert_impl_all!(EngineEvent: Send, Sync);
static_assertions::assert_impl_all!(EventQueue: Send);
