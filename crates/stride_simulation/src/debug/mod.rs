//! Debug labels для movement контроллеров
//!
//! Только для отображения (overlay, telemetry). Ни одна система не ветвится по label.

use bevy::prelude::*;

use crate::controller::{MovementControl, MovementController};

/// Текстовый label состояния контроллера (state_string)
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementDebugLabel(pub String);

/// Система: обновить label при изменении контроллера
///
/// Changed<MovementController> срабатывает каждый тик (update мутирует контроллер),
/// поэтому пишем только если текст реально поменялся.
pub fn sync_movement_debug_labels(
    mut commands: Commands,
    mut query: Query<
        (Entity, &MovementController, Option<&mut MovementDebugLabel>),
        Changed<MovementController>,
    >,
) {
    for (entity, controller, label) in query.iter_mut() {
        let text = controller.state_string();
        match label {
            Some(mut label) => {
                if label.0 != text {
                    label.0.clear();
                    label.0.push_str(text);
                }
            }
            None => {
                commands.entity(entity).insert(MovementDebugLabel(text.to_string()));
            }
        }
    }
}

/// Debug Plugin: labels обновляются после FixedUpdate (в Update)
pub struct MovementDebugPlugin;

impl Plugin for MovementDebugPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MovementDebugLabel>()
            .add_systems(Update, sync_movement_debug_labels);
    }
}
