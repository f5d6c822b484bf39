//! STRIDE Simulation Core
//!
//! Player movement controller поверх Bevy 0.16 ECS (headless).
//!
//! - controller: FSM {Allowed, Stopped, Destroyed} + контракт MovementControl
//! - movement: host-side системы (intents, per-frame update, teardown)
//! - debug: labels состояния для overlay/telemetry
//! - config / logger: ambient (RON конфиг, глобальный logger)

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod config;
pub mod controller;
pub mod debug;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use components::*;
pub use config::{ConfigError, MovementConfig};
pub use controller::{MovementCapability, MovementControl, MovementController, MovementState};
pub use debug::{MovementDebugLabel, MovementDebugPlugin};
pub use movement::{
    spawn_moving_actor, spawn_player, MovementCapabilityIntent, MovementPlugin,
    MovementStateChanged, MovementTeardown,
};

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Частота FixedUpdate берётся из MovementConfig (если resource уже вставлен),
/// иначе default 60Hz.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<MovementConfig>() {
            app.insert_resource(MovementConfig::default());
        }
        let step = app.world().resource::<MovementConfig>().fixed_timestep();

        app.insert_resource(Time::<Fixed>::from_duration(step))
            .add_plugins((MovementPlugin, MovementDebugPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции (default config, 60Hz)
pub fn create_headless_app(seed: u64) -> App {
    create_headless_app_with_config(seed, MovementConfig::default())
}

/// Headless App с заданным конфигом
///
/// Время шагаем вручную: каждый `app.update()` = ровно один fixed тик
/// (кроме первого, у Bevy он всегда с нулевым delta). От wall clock не зависит.
pub fn create_headless_app_with_config(seed: u64, config: MovementConfig) -> App {
    let mut app = App::new();
    logger::init_logger();
    logger::set_log_level(config.log_level);

    let step = config.fixed_timestep();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_duration(step))
        .insert_resource(TimeUpdateStrategy::ManualDuration(step))
        .insert_resource(config);

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Сортируем по Entity index, сериализуем через Debug.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
