//! Cast queries against the static world.
//!
//! [`PhysicsQuery`] is the seam between the controller and whatever answers
//! spatial queries. [`ColliderSet`] is the built-in answer: a snapshot of
//! every [`StaticCollider`] in the world, refreshed by
//! [`sync_collider_set`](crate::systems::colliders::sync_collider_set) at the
//! start of each frame.
//!
//! Both casts report the nearest hit only. A cast whose origin is already
//! inside a collider does not report that collider.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::collider::{LayerMask, StaticCollider};

/// Nearest-hit result of a cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastHit {
    pub entity: Entity,
    /// Distance travelled along the cast direction.
    pub distance: f32,
    /// Cast origin advanced by `distance`; the sphere centre for sphere casts.
    pub point: Vector3,
}

pub trait PhysicsQuery {
    /// Ray cast. `dir` need not be normalized.
    fn raycast(
        &self,
        origin: Vector3,
        dir: Vector3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<CastHit>;

    /// Sphere of `radius` swept from `origin` along `dir`.
    fn sphere_cast(
        &self,
        origin: Vector3,
        dir: Vector3,
        radius: f32,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<CastHit>;
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ColliderSet {
    colliders: Vec<(Entity, StaticCollider)>,
}

impl ColliderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    pub fn insert(&mut self, entity: Entity, collider: StaticCollider) {
        self.colliders.push((entity, collider));
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn get(&self, entity: Entity) -> Option<&StaticCollider> {
        self.colliders
            .iter()
            .find(|(e, _)| *e == entity)
            .map(|(_, c)| c)
    }

    fn nearest(
        &self,
        origin: Vector3,
        dir: Vector3,
        inflate: f32,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<CastHit> {
        let len = dir.length();
        if len <= f32::EPSILON || max_distance < 0.0 {
            return None;
        }
        let dir = dir * (1.0 / len);

        let mut best: Option<CastHit> = None;
        for (entity, collider) in &self.colliders {
            if !mask.contains(collider.layer) {
                continue;
            }
            let Some(distance) = collider.ray_entry(origin, dir, max_distance, inflate) else {
                continue;
            };
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(CastHit {
                    entity: *entity,
                    distance,
                    point: origin + dir * distance,
                });
            }
        }
        best
    }
}

impl PhysicsQuery for ColliderSet {
    fn raycast(
        &self,
        origin: Vector3,
        dir: Vector3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<CastHit> {
        self.nearest(origin, dir, 0.0, max_distance, mask)
    }

    /// Approximated as a ray against boxes inflated by `radius`; box corners
    /// are treated as square rather than rounded.
    fn sphere_cast(
        &self,
        origin: Vector3,
        dir: Vector3,
        radius: f32,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<CastHit> {
        self.nearest(origin, dir, radius.max(0.0), max_distance, mask)
    }
}
