//! Static box colliders and collision layers.
//!
//! A [`StaticCollider`] is an axis-aligned box in world space tagged with a
//! [`Layer`]. Casts in [`crate::resources::physicsworld`] filter colliders by
//! a [`LayerMask`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Layer used by floors, walls and other walkable geometry.
pub const LAYER_GROUND: Layer = Layer(0);
/// Layer used by entities the character can interact with.
pub const LAYER_INTERACTABLE: Layer = Layer(1);

/// Collision layer index in `0..=31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layer(pub u8);

impl Layer {
    /// Build a layer, rejecting indices that do not fit in a 32-bit mask.
    pub fn new(index: u8) -> Result<Self, String> {
        if index > 31 {
            return Err(format!("layer index {} out of range 0..=31", index));
        }
        Ok(Self(index))
    }

    pub fn bit(self) -> u32 {
        1u32 << self.0
    }
}

/// Bit set of layers a cast is allowed to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    pub fn from_layers(layers: &[Layer]) -> Self {
        Self(layers.iter().fold(0, |acc, l| acc | l.bit()))
    }

    pub fn contains(self, layer: Layer) -> bool {
        self.0 & layer.bit() != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Axis-aligned box collider. Never moves once spawned.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct StaticCollider {
    pub center: Vector3,
    pub half_extents: Vector3,
    pub layer: Layer,
}

impl StaticCollider {
    pub fn new(center: Vector3, size: Vector3, layer: Layer) -> Self {
        Self {
            center,
            half_extents: size * 0.5,
            layer,
        }
    }

    /// Returns (min, max) corners.
    pub fn aabb(&self) -> (Vector3, Vector3) {
        (
            self.center - self.half_extents,
            self.center + self.half_extents,
        )
    }

    /// Full box size.
    pub fn size(&self) -> Vector3 {
        self.half_extents * 2.0
    }

    /// Ray vs box (inflated by `inflate` on every axis) using the slab method.
    ///
    /// Returns the entry distance along `dir` when the ray enters the box in
    /// front of `origin` and no further than `max_distance`. A ray whose
    /// origin is already inside the box reports no hit.
    pub fn ray_entry(
        &self,
        origin: Vector3,
        dir: Vector3,
        max_distance: f32,
        inflate: f32,
    ) -> Option<f32> {
        let (min, max) = self.aabb();
        let pad = Vector3::new(inflate, inflate, inflate);
        let min = min - pad;
        let max = max + pad;

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        for (o, d, lo, hi) in [
            (origin.x, dir.x, min.x, max.x),
            (origin.y, dir.y, min.y, max.y),
            (origin.z, dir.z, min.z, max.z),
        ] {
            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let (t0, t1) = {
                let a = (lo - o) * inv;
                let b = (hi - o) * inv;
                if a <= b { (a, b) } else { (b, a) }
            };
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        if t_enter < 0.0 || t_enter > max_distance {
            return None;
        }
        Some(t_enter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn floor() -> StaticCollider {
        StaticCollider::new(
            Vector3::new(0.0, -0.5, 0.0),
            Vector3::new(10.0, 1.0, 10.0),
            LAYER_GROUND,
        )
    }

    #[test]
    fn test_layer_new_rejects_out_of_range() {
        assert!(Layer::new(31).is_ok());
        assert!(Layer::new(32).is_err());
    }

    #[test]
    fn test_layer_mask_contains() {
        let mask = LayerMask::from_layers(&[LAYER_INTERACTABLE]);
        assert!(mask.contains(LAYER_INTERACTABLE));
        assert!(!mask.contains(LAYER_GROUND));
        assert!(LayerMask::ALL.contains(Layer(31)));
        assert!(!LayerMask::NONE.contains(LAYER_GROUND));
    }

    #[test]
    fn test_aabb_and_size() {
        let c = floor();
        let (min, max) = c.aabb();
        assert!(approx_eq(min.y, -1.0));
        assert!(approx_eq(max.y, 0.0));
        assert!(approx_eq(c.size().x, 10.0));
    }

    #[test]
    fn test_ray_entry_straight_down() {
        let c = floor();
        let t = c.ray_entry(
            Vector3::new(0.0, 0.1, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            1.0,
            0.0,
        );
        assert!(approx_eq(t.unwrap(), 0.1));
    }

    #[test]
    fn test_ray_entry_beyond_max_distance() {
        let c = floor();
        let t = c.ray_entry(
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            1.0,
            0.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_entry_pointing_away() {
        let c = floor();
        let t = c.ray_entry(
            Vector3::new(0.0, 0.5, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            10.0,
            0.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_entry_origin_inside_reports_nothing() {
        let c = floor();
        let t = c.ray_entry(
            Vector3::new(0.0, -0.5, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            10.0,
            0.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_entry_inflated_catches_near_miss() {
        let crate_box = StaticCollider::new(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(1.0, 1.0, 1.0),
            LAYER_INTERACTABLE,
        );
        let origin = Vector3::new(0.8, 0.0, 0.0);
        let dir = Vector3::new(0.0, 0.0, 1.0);
        assert!(crate_box.ray_entry(origin, dir, 10.0, 0.0).is_none());
        let t = crate_box.ray_entry(origin, dir, 10.0, 0.5).unwrap();
        assert!(approx_eq(t, 4.0));
    }
}
