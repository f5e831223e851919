//! Turn state machine for one agent's move lifecycle
//!
//! Transition legality is checked centrally here; the controller never
//! mutates state directly.

use serde::{Deserialize, Serialize};

use crate::core::types::TurnNumber;

/// Lifecycle states for a single move within a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TurnState {
    #[default]
    Idle,
    Planning,
    Preview,
    AwaitingConfirmation,
    Executing,
    Completed,
}

/// State machine with a turn counter
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TurnStateMachine {
    state: TurnState,
    turn: TurnNumber,
}

impl TurnStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn turn(&self) -> TurnNumber {
        self.turn
    }

    /// Whether the transition table allows `from -> to`
    pub fn can_transition(from: TurnState, to: TurnState) -> bool {
        use TurnState::*;

        // Cancel/reset to Idle is always legal
        if to == Idle {
            return true;
        }

        matches!(
            (from, to),
            (Idle, Planning)
                | (Planning, Preview)
                | (Preview, AwaitingConfirmation)
                | (AwaitingConfirmation, Executing)
                | (Executing, Completed)
        )
    }

    /// Attempt a transition; illegal requests leave the state unchanged
    pub fn transition_to(&mut self, to: TurnState) -> bool {
        if Self::can_transition(self.state, to) {
            self.state = to;
            true
        } else {
            tracing::warn!(from = ?self.state, to = ?to, "illegal state transition rejected");
            false
        }
    }

    /// Unconditional reset for error recovery
    pub fn force_idle(&mut self) {
        self.state = TurnState::Idle;
    }

    /// Begin a new turn: reset to Idle and bump the counter
    pub fn start_turn(&mut self) -> TurnNumber {
        self.state = TurnState::Idle;
        self.turn += 1;
        self.turn
    }

    /// End the current turn
    ///
    /// A move still executing lands in Completed; otherwise the machine goes
    /// straight to Idle. Returns the turn number that ended.
    pub fn end_turn(&mut self) -> TurnNumber {
        if self.state == TurnState::Executing {
            self.state = TurnState::Completed;
        } else {
            self.state = TurnState::Idle;
        }
        self.turn
    }
}
