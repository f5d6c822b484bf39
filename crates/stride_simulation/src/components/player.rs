//! Player control marker component
//!
//! Отмечает entity которым управляет игрок через input (в отличие от AI/скриптов).

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Input systems используют `With<Player>` filter.
/// В single-player режиме обычно только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
