//! Turn-based movement: state machine, execution, and orchestration

pub mod controller;
pub mod events;
pub mod executor;
pub mod progress;
pub mod state;

pub use controller::{PlannedMove, RequestOutcome, TurnBasedMovementController};
pub use events::{MovementEvent, MovementEventLog};
pub use executor::{AgentBody, ExecutionTick, MovementExecutor};
pub use progress::ProgressTracker;
pub use state::{TurnState, TurnStateMachine};
