//! Headless симуляция STRIDE
//!
//! Спавнит player актора, гоняет его scripted input'ом (seeded RNG),
//! периодически останавливает/разрешает движение и в конце делает teardown.
//!
//! Usage: `stride_simulation [config.ron]`

use bevy::prelude::*;
use rand::Rng;

use stride_simulation::logger::{init_logger, log_info, log_warning};
use stride_simulation::movement::systems::apply_capability_intents;
use stride_simulation::{
    create_headless_app_with_config, spawn_player, DeterministicRng, MovementCapability,
    MovementCapabilityIntent, MovementConfig, MovementController, MovementInput,
    MovementTeardown, Player, SimulationPlugin,
};

const SEED: u64 = 42;
const TICK_COUNT: u32 = 1000;
/// Каждые N тиков: новое направление
const DIRECTION_CHANGE_INTERVAL: u32 = 30;
/// Каждые N тиков: переключение Allowed/Stopped (имитация stun)
const STUN_INTERVAL: u32 = 240;

#[derive(Resource, Default)]
struct ScriptTick(u32);

fn main() {
    init_logger();

    let config = match std::env::args().nth(1) {
        Some(path) => MovementConfig::load(&path).unwrap_or_else(|err| {
            log_warning(&format!("{}, using default config", err));
            MovementConfig::default()
        }),
        None => MovementConfig::default(),
    };

    let mut app = create_headless_app_with_config(SEED, config.clone());
    app.add_plugins(SimulationPlugin)
        .init_resource::<ScriptTick>()
        .add_systems(FixedUpdate, scripted_player_input.before(apply_capability_intents));

    let player = spawn_player(
        &mut app.world_mut().commands(),
        Vec3::ZERO,
        config.default_profile,
    );
    app.world_mut().flush();

    log_info(&format!(
        "Starting STRIDE headless simulation (seed: {}, {} Hz)",
        SEED, config.tick_hz
    ));

    for tick in 0..TICK_COUNT {
        app.update();

        if tick % 100 == 0 {
            report(&app, player, tick);
        }
    }

    app.world_mut().send_event(MovementTeardown { entity: player });
    app.update();

    if app.world().get_entity(player).is_ok() {
        log_warning(&format!("Player {:?} survived teardown", player));
    }

    log_info("Simulation complete!");
}

/// Scripted input: случайное направление + периодический stun
fn scripted_player_input(
    mut tick: ResMut<ScriptTick>,
    mut rng: ResMut<DeterministicRng>,
    mut players: Query<(Entity, &MovementController, &mut MovementInput), With<Player>>,
    mut intents: EventWriter<MovementCapabilityIntent>,
) {
    tick.0 += 1;

    for (entity, controller, mut input) in players.iter_mut() {
        if tick.0 % DIRECTION_CHANGE_INTERVAL == 1 {
            let angle = rng.rng.gen_range(0.0..std::f32::consts::TAU);
            input.direction = Vec3::new(angle.cos(), 0.0, angle.sin());
        }

        if tick.0 % STUN_INTERVAL == 0 {
            let capability = if controller.can_move() {
                MovementCapability::Stopped
            } else {
                MovementCapability::Allowed
            };
            intents.write(MovementCapabilityIntent { entity, capability });
        }
    }
}

fn report(app: &App, player: Entity, tick: u32) {
    let world = app.world();
    let (Some(controller), Some(transform)) = (
        world.get::<MovementController>(player),
        world.get::<Transform>(player),
    ) else {
        return;
    };

    log_info(&format!(
        "Tick {}: {} at ({:.2}, {:.2}, {:.2})",
        tick,
        controller.state(),
        transform.translation.x,
        transform.translation.y,
        transform.translation.z
    ));
}
