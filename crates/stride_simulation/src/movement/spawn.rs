//! Spawn helpers для moving акторов

use bevy::prelude::*;

use crate::components::{MovementInput, MovementProfile, Player};
use crate::controller::MovementController;

/// Spawn entity с movement контроллером (initial state = Allowed)
pub fn spawn_moving_actor(commands: &mut Commands, position: Vec3, profile: MovementProfile) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            MovementController::new(profile),
            MovementInput::default(),
        ))
        .id()
}

/// Spawn player-controlled актора
pub fn spawn_player(commands: &mut Commands, position: Vec3, profile: MovementProfile) -> Entity {
    let entity = spawn_moving_actor(commands, position, profile);
    commands.entity(entity).insert((Player, Name::new("Player")));
    entity
}
