//! Kinematic movement контроллер (реализация MovementControl)

use bevy::prelude::*;

use super::contract::MovementControl;
use super::state::{MovementCapability, MovementState};
use crate::components::{MovementInput, MovementProfile};

/// Мёртвая зона input (length²)
const INPUT_DEAD_ZONE_SQ: f32 = 0.01;

/// Player movement контроллер
///
/// Инварианты:
/// - state всегда валидный вариант, initial = Allowed
/// - после Destroyed state не меняется
/// - velocity != 0 только в Allowed
///
/// Host (MovementPlugin) владеет контроллером как компонентом entity
/// и вызывает on_destroy ровно один раз перед despawn.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementController {
    state: MovementState,
    profile: MovementProfile,
    /// Скорость за последний update (m/s)
    velocity: Vec3,
    /// Сколько секунд в текущем состоянии (тикает и в Stopped)
    state_elapsed: f32,
    /// Количество эффективных update (до Destroyed)
    ticks: u64,
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(MovementProfile::default())
    }
}

impl MovementController {
    pub fn new(profile: MovementProfile) -> Self {
        Self {
            state: MovementState::Allowed,
            profile: profile.clamped(),
            velocity: Vec3::ZERO,
            state_elapsed: 0.0,
            ticks: 0,
        }
    }

    pub fn state(&self) -> MovementState {
        self.state
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn state_elapsed(&self) -> f32 {
        self.state_elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn can_move(&self) -> bool {
        self.state == MovementState::Allowed
    }

    /// Применить capability (для event-driven вызовов из gameplay логики)
    pub fn apply_capability(&mut self, capability: MovementCapability) -> bool {
        self.transition(capability.into())
    }

    fn transition(&mut self, next: MovementState) -> bool {
        if self.state.is_terminal() || self.state == next {
            return false;
        }

        self.state = next;
        self.state_elapsed = 0.0;
        if next != MovementState::Allowed {
            self.velocity = Vec3::ZERO;
        }
        true
    }

    /// Желаемая скорость из input с учётом профиля
    fn desired_velocity(&self, input: &MovementInput) -> Vec3 {
        let mut direction = input.direction;
        if self.profile.planar {
            direction.y = 0.0;
        }

        if !direction.is_finite() || direction.length_squared() <= INPUT_DEAD_ZONE_SQ {
            return Vec3::ZERO;
        }

        // Огромный input переполняет length_squared: сначала приводим к max_element = 1
        let scaled = direction / direction.abs().max_element();
        scaled.normalize_or_zero() * self.profile.speed
    }
}

impl MovementControl for MovementController {
    fn update(&mut self, input: &MovementInput, delta: f32) -> Vec3 {
        match self.state {
            MovementState::Destroyed => return Vec3::ZERO,
            MovementState::Stopped => self.velocity = Vec3::ZERO,
            MovementState::Allowed => self.velocity = self.desired_velocity(input),
        }

        // Отрицательный/NaN delta от host трактуем как пустой frame
        let delta = if delta.is_finite() && delta > 0.0 { delta } else { 0.0 };

        self.state_elapsed += delta;
        self.ticks = self.ticks.saturating_add(1);

        let displacement = self.velocity * delta;
        if displacement.is_finite() {
            displacement
        } else {
            Vec3::ZERO
        }
    }

    fn on_destroy(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }

        self.state = MovementState::Destroyed;
        self.velocity = Vec3::ZERO;
        self.state_elapsed = 0.0;
        true
    }

    fn set_movement_allowed(&mut self) -> bool {
        self.transition(MovementState::Allowed)
    }

    fn set_stopped(&mut self) -> bool {
        self.transition(MovementState::Stopped)
    }

    fn state_string(&self) -> &'static str {
        self.state.label()
    }
}
