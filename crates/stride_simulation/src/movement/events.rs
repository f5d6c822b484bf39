//! Movement events

use bevy::prelude::*;

use crate::controller::{MovementCapability, MovementState};

/// Event: запрос на смену capability (разрешить движение / остановить)
///
/// Генерируется:
/// - cutscene manager, stun system, UI (пауза)
///
/// Обрабатывается:
/// - apply_capability_intents (FixedUpdate)
#[derive(Event, Debug, Clone)]
pub struct MovementCapabilityIntent {
    pub entity: Entity,
    pub capability: MovementCapability,
}

/// Event: entity удаляется из симуляции
///
/// teardown_movement_controllers вызывает on_destroy и делает despawn.
#[derive(Event, Debug, Clone)]
pub struct MovementTeardown {
    pub entity: Entity,
}

/// Event: состояние контроллера реально поменялось (для telemetry/debug)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MovementStateChanged {
    pub entity: Entity,
    pub from: MovementState,
    pub to: MovementState,
}
