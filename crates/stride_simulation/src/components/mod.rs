//! ECS Components для игровых entity
//!
//! - movement: input intent и профиль движения (MovementInput, MovementProfile)
//! - player: player control marker (Player)

pub mod movement;
pub mod player;

pub use movement::*;
pub use player::*;
