//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the world. Components define data such as body pose, physics requests,
//! collision boxes, render surfaces and the controller state.
//!
//! Submodules overview:
//! - [`animator`] – named float/bool/trigger parameters read by the animation layer
//! - [`character`] – marker plus movement intent of the controlled character
//! - [`collider`] – layers, masks and static axis-aligned box colliders
//! - [`interactable`] – capability invoked when the character interacts with an entity
//! - [`kinematicbody`] – velocity and queued impulse/position requests
//! - [`surfaces`] – body renderers, their materials and shadow casting
//! - [`tint`] – flat colour for level geometry
//! - [`transform3d`] – world position and facing
//! - [`visibility`] – invisibility state and the running transition task

pub mod animator;
pub mod character;
pub mod collider;
pub mod interactable;
pub mod kinematicbody;
pub mod surfaces;
pub mod tint;
pub mod transform3d;
pub mod visibility;
