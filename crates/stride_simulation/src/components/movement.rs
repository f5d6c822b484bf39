//! Movement компоненты: input intent, профиль движения

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Верхняя граница скорости (m/s)
pub const MAX_SPEED: f32 = 1_000.0;

/// Входные данные для движения
///
/// Заполняется внешней input/AI логикой каждый frame.
/// Для headless тестов: mock input через этот компонент.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementInput {
    /// Направление движения (нормализуется контроллером)
    pub direction: Vec3,
}

impl MovementInput {
    pub fn new(direction: Vec3) -> Self {
        Self { direction }
    }
}

/// Профиль движения актора
///
/// - `planar = true`: наземное движение, вертикальная составляющая input отбрасывается
/// - `planar = false`: полёт, используем все три оси
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct MovementProfile {
    /// Скорость движения (m/s)
    pub speed: f32,
    pub planar: bool,
}

impl Default for MovementProfile {
    fn default() -> Self {
        Self {
            speed: 2.0, // 2 m/s: базовая скорость ходьбы
            planar: true,
        }
    }
}

impl MovementProfile {
    pub fn ground(speed: f32) -> Self {
        Self { speed, planar: true }
    }

    pub fn flying(speed: f32) -> Self {
        Self { speed, planar: false }
    }

    /// Скорость в [0, MAX_SPEED]; NaN → 0
    pub fn clamped(self) -> Self {
        let speed = if self.speed.is_nan() { 0.0 } else { self.speed.clamp(0.0, MAX_SPEED) };
        Self { speed, ..self }
    }
}
