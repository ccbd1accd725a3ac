//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`bodyphysics`] – integrate kinematic bodies and settle them on the ground
//! - [`camera`] – orbit and follow for the third-person camera
//! - [`colliders`] – keep the cast set in sync with spawned colliders
//! - [`controller`] – per-frame input sampling and the two schedules
//! - [`groundprobe`] – downward probe and the airborne animator flag
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`interaction`] – sphere cast from the camera and capability dispatch
//! - [`jump`] – ground-gated, edge-triggered jump impulse
//! - [`locomotion`] – camera-relative movement on the fixed step
//! - [`render`] – draw world and debug overlays using Raylib
//! - [`time`] – update simulation time and drain fixed steps
//! - [`visibility`] – start and advance invisibility transitions

pub mod bodyphysics;
pub mod camera;
pub mod colliders;
pub mod controller;
pub mod groundprobe;
pub mod input;
pub mod interaction;
pub mod jump;
pub mod locomotion;
pub mod render;
pub mod time;
pub mod visibility;
