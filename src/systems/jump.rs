//! Jump gating.
//!
//! A jump fires only on the frame the jump key goes down while the body is
//! grounded on that same frame. Presses while airborne are dropped.
use bevy_ecs::prelude::*;

use crate::components::animator::AnimatorParams;
use crate::components::character::CharacterController;
use crate::components::kinematicbody::KinematicBody;
use crate::components::transform3d::Transform3D;
use crate::resources::controllerconfig::ControllerConfig;
use crate::resources::input::InputState;
use crate::resources::physicsworld::ColliderSet;
use crate::systems::groundprobe::is_grounded;

/// `true` iff an impulse must be applied this tick.
pub fn try_jump(jump_requested: bool, grounded: bool) -> bool {
    jump_requested && grounded
}

pub fn jump_system(
    input: Res<InputState>,
    colliders: Res<ColliderSet>,
    config: Res<ControllerConfig>,
    mut query: Query<
        (Entity, &Transform3D, &mut KinematicBody, &mut AnimatorParams),
        With<CharacterController>,
    >,
) {
    let requested = input.frame().jump_pressed;
    if !requested {
        return;
    }
    for (entity, transform, mut body, mut animator) in query.iter_mut() {
        let grounded = is_grounded(
            &*colliders,
            transform.position,
            transform.up,
            config.ground_distance,
            config.ground_mask,
        );
        if !try_jump(requested, grounded) {
            log::debug!("{:?}: jump dropped, airborne", entity);
            continue;
        }
        animator.set_trigger(config.jump_trigger_name.as_str());
        body.add_impulse(transform.up * config.jump_force);
        log::debug!("{:?}: jump", entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::collider::{LAYER_GROUND, StaticCollider};
    use raylib::prelude::Vector3;

    #[test]
    fn test_try_jump_truth_table() {
        assert!(try_jump(true, true));
        assert!(!try_jump(true, false));
        assert!(!try_jump(false, true));
        assert!(!try_jump(false, false));
    }

    fn make_world(height: f32) -> (World, Entity) {
        let mut world = World::new();
        let floor = world.spawn_empty().id();
        let mut set = ColliderSet::new();
        set.insert(
            floor,
            StaticCollider::new(
                Vector3::new(0.0, -0.5, 0.0),
                Vector3::new(20.0, 1.0, 20.0),
                LAYER_GROUND,
            ),
        );
        world.insert_resource(set);
        world.insert_resource(ControllerConfig::default());
        world.insert_resource(InputState::default());
        let e = world
            .spawn((
                CharacterController::default(),
                Transform3D::new(Vector3::new(0.0, height, 0.0)),
                KinematicBody::new(),
                AnimatorParams::default(),
            ))
            .id();
        (world, e)
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(jump_system);
        schedule.run(world);
    }

    #[test]
    fn test_grounded_press_applies_one_impulse() {
        let (mut world, e) = make_world(0.0);
        world.resource_mut::<InputState>().jump.update(true);
        tick(&mut world);

        let body = world.get::<KinematicBody>(e).unwrap();
        assert!((body.pending_impulse().y - 7.5).abs() < 1e-6);
        assert!(world.get::<AnimatorParams>(e).unwrap().has_trigger("onJump"));
    }

    #[test]
    fn test_held_key_does_not_repeat() {
        let (mut world, e) = make_world(0.0);
        world.resource_mut::<InputState>().jump.update(true);
        tick(&mut world);
        world.resource_mut::<InputState>().jump.update(true);
        tick(&mut world);

        let body = world.get::<KinematicBody>(e).unwrap();
        assert!((body.pending_impulse().y - 7.5).abs() < 1e-6);
    }

    #[test]
    fn test_airborne_press_is_dropped() {
        let (mut world, e) = make_world(2.0);
        world.resource_mut::<InputState>().jump.update(true);
        tick(&mut world);

        let body = world.get::<KinematicBody>(e).unwrap();
        assert!(body.pending_impulse().y.abs() < 1e-6);
        assert!(!world.get::<AnimatorParams>(e).unwrap().has_trigger("onJump"));
    }
}
