//! Movement controller: FSM {Allowed, Stopped, Destroyed}
//!
//! - contract: trait MovementControl (update, on_destroy, set_movement_allowed, set_stopped, state_string)
//! - state: MovementState / MovementCapability
//! - movement_controller: kinematic реализация контракта (ECS Component)

pub mod contract;
pub mod movement_controller;
pub mod state;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod controller_tests;

pub use contract::MovementControl;
pub use movement_controller::MovementController;
pub use state::{MovementCapability, MovementState};
