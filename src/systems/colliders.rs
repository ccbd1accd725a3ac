//! Keeps the [`ColliderSet`] in step with the spawned [`StaticCollider`]s.
use bevy_ecs::prelude::*;

use crate::components::collider::StaticCollider;
use crate::resources::physicsworld::ColliderSet;

/// Rebuild the cast set when any collider was added, changed or removed.
pub fn sync_collider_set(
    mut set: ResMut<ColliderSet>,
    query: Query<(Entity, &StaticCollider)>,
    changed: Query<(), Changed<StaticCollider>>,
    mut removed: RemovedComponents<StaticCollider>,
) {
    let any_removed = removed.read().count() > 0;
    if changed.is_empty() && !any_removed && set.len() == query.iter().count() {
        return;
    }
    set.clear();
    for (entity, collider) in query.iter() {
        set.insert(entity, *collider);
    }
    log::debug!("collider set rebuilt with {} boxes", set.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::collider::LAYER_GROUND;
    use raylib::prelude::Vector3;

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(sync_collider_set);
        schedule.run(world);
        world.clear_trackers();
    }

    #[test]
    fn test_sync_tracks_spawn_and_despawn() {
        let mut world = World::new();
        world.insert_resource(ColliderSet::new());
        let a = world
            .spawn(StaticCollider::new(
                Vector3::zero(),
                Vector3::new(1.0, 1.0, 1.0),
                LAYER_GROUND,
            ))
            .id();
        world.spawn(StaticCollider::new(
            Vector3::new(3.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            LAYER_GROUND,
        ));
        run(&mut world);
        assert_eq!(world.resource::<ColliderSet>().len(), 2);

        world.despawn(a);
        run(&mut world);
        let set = world.resource::<ColliderSet>();
        assert_eq!(set.len(), 1);
        assert!(set.get(a).is_none());
    }
}
