//! Interaction resolution.
//!
//! On the interact key, a sphere is swept from the camera pivot along the
//! camera forward. If it strikes an entity carrying an
//! [`Interactable`](crate::components::interactable::Interactable), that
//! capability is invoked once. Hitting nothing, or hitting an entity without
//! the capability, does nothing.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::character::CharacterController;
use crate::components::collider::LayerMask;
use crate::components::interactable::Interactable;
use crate::events::interaction::InteractedEvent;
use crate::resources::camerarig::CameraRig;
use crate::resources::controllerconfig::ControllerConfig;
use crate::resources::input::InputState;
use crate::resources::physicsworld::{CastHit, ColliderSet, PhysicsQuery};

/// Sweep for a candidate interaction target.
pub fn resolve_interaction(
    physics: &impl PhysicsQuery,
    origin: Vector3,
    forward: Vector3,
    radius: f32,
    max_distance: f32,
    mask: LayerMask,
) -> Option<CastHit> {
    physics.sphere_cast(origin, forward, radius, max_distance, mask)
}

/// Invoke the capability on the struck entity, if it has one.
///
/// Returns whether a capability ran.
pub fn dispatch_interaction(
    hit: Option<CastHit>,
    interactables: &mut Query<&mut Interactable>,
) -> bool {
    let Some(hit) = hit else {
        return false;
    };
    let Ok(mut interactable) = interactables.get_mut(hit.entity) else {
        return false;
    };
    interactable.interact();
    true
}

pub fn interaction_system(
    input: Res<InputState>,
    colliders: Res<ColliderSet>,
    camera: Res<CameraRig>,
    config: Res<ControllerConfig>,
    characters: Query<Entity, With<CharacterController>>,
    mut interactables: Query<&mut Interactable>,
    mut commands: Commands,
) {
    if !input.frame().interact_pressed {
        return;
    }
    for character in characters.iter() {
        let hit = resolve_interaction(
            &*colliders,
            camera.target_position(),
            camera.target_forward(),
            config.interact_radius,
            config.interact_distance,
            config.interact_mask,
        );
        let target = hit.map(|h| h.entity);
        if dispatch_interaction(hit, &mut interactables) {
            if let Some(target) = target {
                commands.trigger(InteractedEvent { character, target });
            }
        } else {
            log::debug!("{:?}: nothing to interact with", character);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::collider::{LAYER_INTERACTABLE, StaticCollider};
    use crate::components::interactable::Counter;

    fn make_world() -> World {
        let mut world = World::new();
        world.insert_resource(ColliderSet::new());
        world.insert_resource(ControllerConfig::default());
        world.insert_resource(InputState::default());
        world.insert_resource(CameraRig {
            yaw: 0.0,
            pitch: 0.0,
            pivot: Vector3::new(0.0, 1.0, 0.0),
            ..CameraRig::default()
        });
        world.spawn(CharacterController::default());
        world
    }

    fn add_box(world: &mut World, z: f32, counter: Option<Counter>) -> Entity {
        let collider = StaticCollider::new(
            Vector3::new(0.0, 1.0, z),
            Vector3::new(0.5, 0.5, 0.5),
            LAYER_INTERACTABLE,
        );
        let e = match counter {
            Some(c) => world.spawn((collider, Interactable::new(c))).id(),
            None => world.spawn(collider).id(),
        };
        world.resource_mut::<ColliderSet>().insert(e, collider);
        e
    }

    fn press_and_tick(world: &mut World) {
        world.resource_mut::<InputState>().interact.update(true);
        let mut schedule = Schedule::default();
        schedule.add_systems(interaction_system);
        schedule.run(world);
        world.resource_mut::<InputState>().interact.update(false);
    }

    #[test]
    fn test_capability_invoked_exactly_once() {
        let mut world = make_world();
        let counter = Counter::new("bell");
        let handle = counter.clone();
        add_box(&mut world, 1.5, Some(counter));

        press_and_tick(&mut world);
        assert_eq!(handle.count(), 1);
    }

    #[test]
    fn test_hit_without_capability_is_noop() {
        let mut world = make_world();
        let counter = Counter::new("behind");
        let handle = counter.clone();
        add_box(&mut world, 1.0, None);
        // Further along the same line, shadowed by the plain box.
        add_box(&mut world, 1.8, Some(counter));

        press_and_tick(&mut world);
        assert_eq!(handle.count(), 0);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut world = make_world();
        let counter = Counter::new("far");
        let handle = counter.clone();
        add_box(&mut world, 5.0, Some(counter));

        press_and_tick(&mut world);
        assert_eq!(handle.count(), 0);
    }

    #[test]
    fn test_no_press_no_cast() {
        let mut world = make_world();
        let counter = Counter::new("bell");
        let handle = counter.clone();
        add_box(&mut world, 1.5, Some(counter));

        let mut schedule = Schedule::default();
        schedule.add_systems(interaction_system);
        schedule.run(&mut world);
        assert_eq!(handle.count(), 0);
    }
}
