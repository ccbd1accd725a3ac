//! Minimal kinematic body step on the fixed clock.
//!
//! Consumes the requests queued on each [`KinematicBody`]:
//! 1. the position target from `move_to`, if any, replaces the position,
//! 2. queued impulses are divided by mass and added to velocity,
//! 3. gravity is integrated along Y,
//! 4. a falling body that would pass through a ground surface this step is
//!    settled on top of it.
//!
//! There is no lateral collision response and facing is never touched.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::kinematicbody::KinematicBody;
use crate::components::transform3d::{Transform3D, WORLD_UP};
use crate::resources::controllerconfig::ControllerConfig;
use crate::resources::physicsworld::{ColliderSet, PhysicsQuery};
use crate::resources::worldtime::WorldTime;
use crate::systems::groundprobe::GROUND_PROBE_MARGIN;

pub fn body_physics_system(
    time: Res<WorldTime>,
    colliders: Res<ColliderSet>,
    config: Res<ControllerConfig>,
    mut query: Query<(Entity, &mut Transform3D, &mut KinematicBody)>,
) {
    let dt = time.fixed_delta;
    for (entity, mut transform, mut body) in query.iter_mut() {
        let (impulse, target) = body.take_requests();
        if let Some(target) = target {
            transform.position = target;
        }
        if body.mass > 0.0 {
            body.velocity += impulse * (1.0 / body.mass);
        } else if impulse.length_sqr() > 0.0 {
            log::warn!(
                "{:?}: impulse dropped, mass {} is not positive",
                entity,
                body.mass
            );
        }
        body.velocity.y += config.gravity * body.gravity_scale * dt;

        let horizontal = Vector3::new(body.velocity.x, 0.0, body.velocity.z) * dt;
        let mut position = transform.position + horizontal;
        let fall = body.velocity.y * dt;

        body.grounded = false;
        if fall <= 0.0 {
            let origin = position + WORLD_UP * GROUND_PROBE_MARGIN;
            if let Some(hit) =
                colliders.raycast(origin, -WORLD_UP, GROUND_PROBE_MARGIN - fall, config.ground_mask)
            {
                position.y = hit.point.y;
                body.velocity.y = 0.0;
                body.grounded = true;
            } else {
                position.y += fall;
            }
        } else {
            position.y += fall;
        }
        transform.position = position;
    }
}
