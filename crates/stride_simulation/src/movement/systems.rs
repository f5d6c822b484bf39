//! Movement systems (host loop вокруг MovementController)

use bevy::prelude::*;

use super::events::{MovementCapabilityIntent, MovementStateChanged, MovementTeardown};
use crate::components::MovementInput;
use crate::controller::{MovementControl, MovementController};

/// Система: capability intents → set_movement_allowed / set_stopped
///
/// MovementStateChanged пишем только для реальных переходов.
/// Intent для несуществующего entity (уже despawned) игнорируется.
pub fn apply_capability_intents(
    mut intents: EventReader<MovementCapabilityIntent>,
    mut controllers: Query<&mut MovementController>,
    mut changed: EventWriter<MovementStateChanged>,
) {
    for intent in intents.read() {
        let Ok(mut controller) = controllers.get_mut(intent.entity) else {
            continue;
        };

        let from = controller.state();
        if controller.apply_capability(intent.capability) {
            crate::logger::log(&format!(
                "Movement {:?}: {} → {}",
                intent.entity,
                from,
                controller.state_string()
            ));
            changed.write(MovementStateChanged {
                entity: intent.entity,
                from,
                to: controller.state(),
            });
        }
    }
}

/// Система: per-frame update всех контроллеров
///
/// Работает в FixedUpdate. Entity без MovementInput получает нулевой input.
/// Смещение от контроллера применяется к Transform.
pub fn update_movement_controllers(
    time: Res<Time<Fixed>>,
    mut query: Query<(&mut MovementController, Option<&MovementInput>, &mut Transform)>,
) {
    let delta = time.delta_secs();
    let idle = MovementInput::default();

    for (mut controller, input, mut transform) in query.iter_mut() {
        if controller.is_destroyed() {
            continue;
        }

        let displacement = controller.update(input.unwrap_or(&idle), delta);
        if displacement != Vec3::ZERO {
            transform.translation += displacement;
        }
    }
}

/// Система: teardown: on_destroy ровно один раз, потом despawn
///
/// Повторный MovementTeardown в том же тике: on_destroy вернёт false,
/// event не дублируется, despawn через try_despawn.
pub fn teardown_movement_controllers(
    mut commands: Commands,
    mut teardowns: EventReader<MovementTeardown>,
    mut controllers: Query<&mut MovementController>,
    mut changed: EventWriter<MovementStateChanged>,
) {
    for teardown in teardowns.read() {
        let Ok(mut controller) = controllers.get_mut(teardown.entity) else {
            continue;
        };

        let from = controller.state();
        if !controller.on_destroy() {
            continue;
        }

        crate::logger::log_info(&format!(
            "Movement controller {:?} destroyed (was {})",
            teardown.entity, from
        ));
        changed.write(MovementStateChanged {
            entity: teardown.entity,
            from,
            to: controller.state(),
        });

        commands.entity(teardown.entity).try_despawn();
    }
}
