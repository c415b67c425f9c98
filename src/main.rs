//! Dungeon game entry point.
//!
//! A top-down 2D prototype written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for entities, resources and the per-tick schedule
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (optional), open the window, insert resources
//! 2. Run the startup system: map, player frames, player entity
//! 3. Tick at the target rate until a quit is requested:
//!    - projectiles, animation, render + present, player controller, input
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use clap::Parser;
use std::path::PathBuf;

use dungeongame::game;
use dungeongame::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use dungeongame::resources::gamestate::GameState;
use dungeongame::resources::input::InputState;
use dungeongame::resources::worldtime::WorldTime;
use dungeongame::systems::animation::animation;
use dungeongame::systems::gamestate::{check_quit_request, state_is_playing};
use dungeongame::systems::input::update_input_state;
use dungeongame::systems::inputsimplecontroller::player_controller;
use dungeongame::systems::projectile::update_projectiles;
use dungeongame::systems::render::render_system;
use dungeongame::systems::time::update_world_time;

/// Dungeon game
#[derive(Parser)]
#[command(version, about = "Top-down dungeon prototype")]
struct Cli {
    /// INI file with window, asset and player settings.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.window_title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is a gameplay key, not raylib's exit key
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    match world.run_system_once(game::setup) {
        Ok(Ok(())) => log::info!("Setup done"),
        Ok(Err(e)) => {
            log::error!("Failed to load assets: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("Failed to run setup: {}", e);
            std::process::exit(1);
        }
    }

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_projectiles,
            animation,
            render_system,
            player_controller.run_if(state_is_playing),
            update_input_state,
            check_quit_request,
        )
            .chain(),
    );

    // --------------- Main loop ---------------
    while !world.resource::<GameState>().is_quitting() {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);
    }
    log::info!("Bye");
}
