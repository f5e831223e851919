//! Turn-based movement orchestration
//!
//! One controller per agent. It owns the current path, curve, and turn
//! state, drives planning through execution, and enforces the per-turn
//! movement budget in hex-cell units.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::config::MovementConfig;
use crate::core::constants::END_TURN_BUDGET_FRACTION;
use crate::core::error::Result;
use crate::core::types::{AgentId, TurnNumber};
use crate::grid::layout::HexLayout;
use crate::grid::provider::CellProvider;
use crate::movement::events::{MovementEvent, MovementEventLog};
use crate::movement::executor::{AgentBody, ExecutionTick, MovementExecutor};
use crate::movement::state::{TurnState, TurnStateMachine};
use crate::pathfinding::astar::{HexPath, PathError};
use crate::pathfinding::queries::find_path_world;
use crate::smoothing::curve::SmoothCurve;
use crate::smoothing::generate_movement_curve;

/// How a movement request was resolved
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// Path planned and awaiting confirmation
    Accepted,
    /// The controller was not Idle
    NotIdle,
    /// No movement budget left this turn
    NoBudget,
    /// Planning failed; the controller returned to Idle
    Failed(PathError),
}

/// A planned move held between preview and execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedMove {
    pub path: HexPath,
    pub curve: SmoothCurve,
}

impl PlannedMove {
    /// Cost in hex-cell units (budget units)
    pub fn cost(&self) -> f32 {
        self.path.cost() as f32
    }
}

/// Orchestrates one agent's turn-based movement
#[derive(Debug, Clone)]
pub struct TurnBasedMovementController {
    agent_id: AgentId,
    config: MovementConfig,
    layout: HexLayout,
    machine: TurnStateMachine,
    used_this_turn: f32,
    pending: Option<PlannedMove>,
    active: Option<PlannedMove>,
    executor: Option<MovementExecutor>,
    events: MovementEventLog,
}

impl TurnBasedMovementController {
    pub fn new(agent_id: AgentId, layout: HexLayout, config: MovementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            agent_id,
            config,
            layout,
            machine: TurnStateMachine::new(),
            used_this_turn: 0.0,
            pending: None,
            active: None,
            executor: None,
            events: MovementEventLog::new(),
        })
    }

    pub fn agent_id(&self) -> AgentId {
        self.agent_id
    }

    pub fn state(&self) -> TurnState {
        self.machine.state()
    }

    pub fn turn(&self) -> TurnNumber {
        self.machine.turn()
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn used_this_turn(&self) -> f32 {
        self.used_this_turn
    }

    pub fn remaining_budget(&self) -> f32 {
        (self.config.max_movement_per_turn - self.used_this_turn).max(0.0)
    }

    /// The curve held for preview display, if any
    pub fn pending_curve(&self) -> Option<&SmoothCurve> {
        self.pending.as_ref().map(|p| &p.curve)
    }

    /// Take all notifications accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<MovementEvent> {
        self.events.drain()
    }

    /// Begin a new turn: budget and state reset, pending work discarded
    pub fn start_turn(&mut self) {
        let turn = self.machine.start_turn();
        self.used_this_turn = 0.0;
        self.pending = None;
        self.active = None;
        self.executor = None;
        self.events.push(MovementEvent::TurnStarted { turn });
    }

    /// End the current turn, discarding any in-flight move
    pub fn end_turn(&mut self) {
        let turn = self.machine.end_turn();
        self.pending = None;
        self.active = None;
        self.executor = None;
        self.events.push(MovementEvent::TurnEnded { turn });
    }

    /// Plan a move from the agent's position to a world-space destination
    ///
    /// Only legal from Idle with budget remaining. On success the controller
    /// holds the previewed curve and waits in AwaitingConfirmation. The path
    /// is trimmed to the remaining budget by hex-cell count and the curve
    /// regenerated from the truncated cells, so curve and enforced cells
    /// always match.
    pub fn request_movement_to<P: CellProvider>(
        &mut self,
        provider: &P,
        body: &dyn AgentBody,
        destination: Vec2,
    ) -> RequestOutcome {
        if self.machine.state() != TurnState::Idle {
            tracing::warn!(state = ?self.machine.state(), "movement request while not idle");
            return RequestOutcome::NotIdle;
        }

        let remaining = self.remaining_budget();
        let allowed_steps = remaining.floor() as u32;
        if allowed_steps == 0 {
            tracing::warn!(remaining, "movement request with no budget");
            return RequestOutcome::NoBudget;
        }

        self.machine.transition_to(TurnState::Planning);

        let path = match find_path_world(provider, body.world_position(), destination, 1.0) {
            Ok(path) => path,
            Err(err) => {
                self.machine.transition_to(TurnState::Idle);
                self.events.push(MovementEvent::PathFailed {
                    reason: err.to_string(),
                });
                return RequestOutcome::Failed(err);
            }
        };

        let path = if path.cost() > allowed_steps {
            path.truncated(allowed_steps)
        } else {
            path
        };

        let curve = generate_movement_curve(provider, &self.layout, &path, &self.config);
        let planned = PlannedMove { path, curve };

        self.machine.transition_to(TurnState::Preview);
        self.events.push(MovementEvent::PathCalculated {
            curve: planned.curve.clone(),
            total_distance: planned.cost(),
        });

        self.machine.transition_to(TurnState::AwaitingConfirmation);
        self.pending = Some(planned);
        RequestOutcome::Accepted
    }

    /// Confirm the previewed move and start executing it
    pub fn confirm_movement(&mut self) -> bool {
        if self.machine.state() != TurnState::AwaitingConfirmation {
            tracing::warn!(state = ?self.machine.state(), "confirm_movement outside confirmation");
            return false;
        }
        let Some(planned) = self.pending.take() else {
            tracing::warn!("awaiting confirmation with no pending move");
            self.machine.force_idle();
            return false;
        };

        self.machine.transition_to(TurnState::Executing);
        self.executor = Some(MovementExecutor::new(
            &planned.curve,
            self.config.movement_speed,
            self.config.arrival_distance_threshold,
            self.config.near_finish_progress_threshold,
        ));
        self.active = Some(planned);
        self.events.push(MovementEvent::PathConfirmed);
        self.events.push(MovementEvent::MovementStarted);
        true
    }

    /// Discard the previewed move
    pub fn cancel_movement(&mut self) -> bool {
        if self.machine.state() != TurnState::AwaitingConfirmation {
            tracing::warn!(state = ?self.machine.state(), "cancel_movement outside confirmation");
            return false;
        }
        self.pending = None;
        self.machine.transition_to(TurnState::Idle);
        self.events.push(MovementEvent::PathCancelled);
        true
    }

    /// Advance execution by `dt` seconds
    ///
    /// Returns the tick result while executing, None otherwise. On arrival
    /// the path's hex-cell cost is charged against the turn budget; if the
    /// budget is nearly spent the turn ends, otherwise the controller
    /// returns to Idle for another move this turn.
    pub fn tick(&mut self, dt: f32, body: &mut dyn AgentBody) -> Option<ExecutionTick> {
        if self.machine.state() != TurnState::Executing {
            return None;
        }
        let executor = self.executor.as_mut()?;

        let result = executor.tick(dt, body);
        if result.completed {
            let cost = self.active.as_ref().map(|m| m.cost()).unwrap_or(0.0);
            self.used_this_turn += cost;
            self.executor = None;
            self.active = None;
            self.events
                .push(MovementEvent::MovementCompleted { distance_used: cost });

            if self.used_this_turn >= END_TURN_BUDGET_FRACTION * self.config.max_movement_per_turn
            {
                self.end_turn();
            } else {
                self.machine.transition_to(TurnState::Idle);
            }
        }

        Some(result)
    }

    /// Unconditional reset to Idle for error recovery
    pub fn force_idle(&mut self) {
        self.machine.force_idle();
        self.pending = None;
        self.active = None;
        self.executor = None;
    }
}
