//! Movement domain: host-side интеграция MovementController
//!
//! Содержит:
//! - events: MovementCapabilityIntent, MovementTeardown, MovementStateChanged
//! - systems: routing intents, per-frame update, teardown
//! - spawn: spawn_moving_actor / spawn_player

use bevy::prelude::*;

pub mod events;
pub mod spawn;
pub mod systems;


pub use events::*;
pub use spawn::*;
pub use systems::*;

use crate::components::MovementInput;
use crate::controller::MovementController;

/// Movement Plugin
///
/// Регистрирует movement системы в FixedUpdate.
/// Порядок выполнения:
/// 1. apply_capability_intents: Allowed/Stopped от gameplay логики
/// 2. update_movement_controllers: per-frame update + Transform
/// 3. teardown_movement_controllers: on_destroy + despawn
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MovementController>()
            .register_type::<MovementInput>()
            .add_event::<MovementCapabilityIntent>()
            .add_event::<MovementTeardown>()
            .add_event::<MovementStateChanged>()
            .add_systems(
                FixedUpdate,
                (
                    systems::apply_capability_intents,
                    systems::update_movement_controllers,
                    systems::teardown_movement_controllers,
                )
                    .chain(), // Последовательное выполнение для детерминизма
            );
    }
}
