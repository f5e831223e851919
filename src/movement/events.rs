//! Movement notifications
//!
//! The controller accumulates typed events; the caller drains them once per
//! frame. No callback registry, no event-loop coupling.

use serde::{Deserialize, Serialize};

use crate::core::types::TurnNumber;
use crate::smoothing::curve::SmoothCurve;

/// Everything the controller reports to its collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MovementEvent {
    TurnStarted { turn: TurnNumber },
    TurnEnded { turn: TurnNumber },
    /// A path was planned and smoothed; distance is in hex-cell units
    PathCalculated {
        curve: SmoothCurve,
        total_distance: f32,
    },
    PathConfirmed,
    PathCancelled,
    /// Planning failed (invalid input or unreachable goal)
    PathFailed { reason: String },
    MovementStarted,
    /// Execution finished; distance is in hex-cell units
    MovementCompleted { distance_used: f32 },
}

/// Accumulated events since the last drain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovementEventLog {
    events: Vec<MovementEvent>,
}

impl MovementEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: MovementEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the log empty
    pub fn drain(&mut self) -> Vec<MovementEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovementEvent> {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_log() {
        let mut log = MovementEventLog::new();
        log.push(MovementEvent::TurnStarted { turn: 1 });
        log.push(MovementEvent::PathConfirmed);

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_events_keep_order() {
        let mut log = MovementEventLog::new();
        log.push(MovementEvent::MovementStarted);
        log.push(MovementEvent::MovementCompleted { distance_used: 3.0 });

        let drained = log.drain();
        assert!(matches!(drained[0], MovementEvent::MovementStarted));
        assert!(matches!(
            drained[1],
            MovementEvent::MovementCompleted { .. }
        ));
    }
}
