//! Movement FSM состояния

use bevy::prelude::*;

/// Состояние movement контроллера
///
/// Переходы:
/// - Allowed ⇄ Stopped (через set_movement_allowed / set_stopped)
/// - Allowed | Stopped → Destroyed (on_destroy, terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum MovementState {
    /// Движение разрешено: update применяет input
    Allowed,
    /// Движение принудительно остановлено (cutscene, stun): input игнорируется
    Stopped,
    /// Контроллер уничтожен, переходов больше нет
    Destroyed,
}

impl Default for MovementState {
    fn default() -> Self {
        Self::Allowed
    }
}

impl MovementState {
    /// Стабильный label для debug/UI. Не использовать как control signal.
    pub fn label(&self) -> &'static str {
        match self {
            MovementState::Allowed => "Allowed",
            MovementState::Stopped => "Stopped",
            MovementState::Destroyed => "Destroyed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MovementState::Destroyed)
    }
}

impl std::fmt::Display for MovementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Capability, которую gameplay логика может запросить
///
/// Destroyed не capability: teardown только через on_destroy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum MovementCapability {
    Allowed,
    Stopped,
}

impl From<MovementCapability> for MovementState {
    fn from(capability: MovementCapability) -> Self {
        match capability {
            MovementCapability::Allowed => MovementState::Allowed,
            MovementCapability::Stopped => MovementState::Stopped,
        }
    }
}
