//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `camerarig` – third-person orbit camera and the interaction ray
//! - `controllerconfig` – controller tunables loaded from INI
//! - `debugmode` – presence toggles optional debug overlays
//! - `gameconfig` – window, clock and camera settings loaded from INI
//! - `input` – per-frame keyboard state of keys relevant to the controller
//! - `level` – JSON level description
//! - `physicsworld` – cast queries against the static collider set
//! - `worldtime` – frame time, delta and the fixed-step accumulator
pub mod camerarig;
pub mod controllerconfig;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod level;
pub mod physicsworld;
pub mod worldtime;
