//! Veilstep demo entry point.
//!
//! A third-person character controller demo written in Rust using:
//! - **raylib** for windowing, 3D drawing and input polling
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (window, clock, camera and controller tunables)
//! 2. Initialize the raylib window and the ECS world
//! 3. Spawn the level and the character, register observers
//! 4. Each frame:
//!    - poll input
//!    - run the fixed schedule once per banked step (movement, body step)
//!    - run the frame schedule (interaction, ground probe, jump, visibility)
//!    - render
//!
//! # Controls
//!
//! WASD to move, mouse to orbit, SPACE to jump, F to interact, E to toggle
//! invisibility, F11 for the debug overlay.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::events::interaction::interaction_log_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::events::visibility::visibility_log_observer;
use crate::resources::camerarig::CameraRig;
use crate::resources::controllerconfig::ControllerConfig;
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::LevelData;
use crate::resources::physicsworld::ColliderSet;
use crate::resources::worldtime::WorldTime;
use crate::systems::controller::{build_fixed_schedule, build_frame_schedule};
use crate::systems::input::update_input_state;
use crate::systems::render::render_system;
use crate::systems::time::{run_fixed_steps, update_world_time};
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Veilstep third-person controller demo
#[derive(Parser)]
#[command(version, about = "Third-person character controller demo on raylib + bevy_ecs")]
struct Cli {
    /// Configuration file to load (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// Level JSON to load instead of the configured one.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,
}

fn fail(message: String) -> ! {
    log::error!("{}", message);
    std::process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path.clone()),
        None => GameConfig::new(),
    };
    let mut controller = ControllerConfig::new();
    if config.config_path.exists() {
        if let Err(e) = config.load_from_file() {
            fail(e);
        }
        if let Err(e) = controller.load_from_file(&config.config_path) {
            fail(e);
        }
    } else {
        log::info!(
            "No config file at {:?}, using defaults",
            config.config_path
        );
    }
    if let Some(level) = cli.level {
        config.level_path = Some(level);
    }

    // Early-exit: dump the effective configuration (no window needed)
    if let Some(path) = cli.write_config {
        config.config_path = path;
        if let Err(e) = config.save_to_file(&controller) {
            fail(e);
        }
        return;
    }

    let input = controller.input_state().unwrap_or_else(|e| fail(e));
    let level = match &config.level_path {
        Some(path) => LevelData::load_from_file(path).unwrap_or_else(|e| fail(e)),
        None => LevelData::courtyard(),
    };

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Veilstep")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.disable_cursor();

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(
        WorldTime::default()
            .with_time_scale(1.0)
            .with_fixed_delta(config.fixed_timestep),
    );
    world.insert_resource(CameraRig::new(
        config.camera_distance,
        config.camera_sensitivity,
    ));
    world.insert_resource(ColliderSet::new());
    world.insert_resource(input);
    world.insert_resource(controller);
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(interaction_log_observer));
    world.spawn(Observer::new(visibility_log_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let spawn = game::spawn_level(&mut world, &level).unwrap_or_else(|e| fail(e));
    if let Err(e) = game::spawn_character(&mut world, spawn) {
        fail(e);
    }

    let mut poll = Schedule::default();
    poll.add_systems(update_input_state);
    let mut frame = build_frame_schedule();
    let mut fixed = build_fixed_schedule();
    let mut draw = Schedule::default();
    draw.add_systems(render_system);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        poll.run(&mut world);
        run_fixed_steps(&mut world, &mut fixed);
        frame.run(&mut world);
        draw.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    log::info!("Bye");
}
