//! Ground probe.
//!
//! [`is_grounded`] answers whether a solid surface lies just beneath a body.
//! It is a pure function of the body position and the probe configuration and
//! is evaluated fresh every time it is needed; nothing caches its result.
//!
//! [`ground_probe_system`] publishes the airborne flag to the animator each
//! frame.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::animator::AnimatorParams;
use crate::components::character::CharacterController;
use crate::components::collider::LayerMask;
use crate::components::transform3d::Transform3D;
use crate::resources::controllerconfig::ControllerConfig;
use crate::resources::physicsworld::{ColliderSet, PhysicsQuery};

/// How far above the body origin the probe starts, so a body resting exactly
/// on a surface does not start the ray inside it.
pub const GROUND_PROBE_MARGIN: f32 = 0.1;

/// Cast from `position + up * GROUND_PROBE_MARGIN` along `-up`.
///
/// `distance` is measured from the probe origin. A surface at exactly
/// `distance` counts as ground.
pub fn is_grounded(
    physics: &impl PhysicsQuery,
    position: Vector3,
    up: Vector3,
    distance: f32,
    mask: LayerMask,
) -> bool {
    let origin = position + up * GROUND_PROBE_MARGIN;
    physics.raycast(origin, -up, distance, mask).is_some()
}

/// Write the airborne flag of every character into its animator.
pub fn ground_probe_system(
    colliders: Res<ColliderSet>,
    config: Res<ControllerConfig>,
    mut query: Query<(&Transform3D, &mut AnimatorParams), With<CharacterController>>,
) {
    for (transform, mut animator) in query.iter_mut() {
        let grounded = is_grounded(
            &*colliders,
            transform.position,
            transform.up,
            config.ground_distance,
            config.ground_mask,
        );
        animator.set_bool(config.air_bool_name.as_str(), !grounded);
    }
}
