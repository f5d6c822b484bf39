//! Контракт player movement контроллера

use bevy::prelude::*;

use crate::components::MovementInput;

/// Контракт movement контроллера (то, что host вызывает каждый frame)
///
/// Все операции total: не паникуют, не возвращают ошибок, безопасны
/// в любом порядке и после `on_destroy`.
///
/// Transition методы возвращают `true` только если состояние реально
/// поменялось (для telemetry); игнорировать результат допустимо.
pub trait MovementControl {
    /// Per-frame update. Состояние не меняет.
    ///
    /// Возвращает смещение entity за этот frame (ноль если движение не разрешено).
    fn update(&mut self, input: &MovementInput, delta: f32) -> Vec3;

    /// Teardown. Идемпотентен.
    fn on_destroy(&mut self) -> bool;

    fn set_movement_allowed(&mut self) -> bool;

    fn set_stopped(&mut self) -> bool;

    /// Human-readable label текущего состояния
    fn state_string(&self) -> &'static str;
}
