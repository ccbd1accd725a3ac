//! Physics proxy for a controlled body.
//!
//! The [`KinematicBody`] component is the only handle the controller has on
//! the physics side. Controller systems never write the position directly;
//! they queue requests:
//! - [`KinematicBody::add_impulse`] – instantaneous velocity change
//! - [`KinematicBody::move_to`] – kinematic position target for this step
//!
//! Requests are consumed by
//! [`body_physics_system`](crate::systems::bodyphysics::body_physics_system)
//! on the fixed step.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Velocity-carrying body with queued impulse and position requests.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `mass` - Divides impulses; must be positive
/// - `gravity_scale` - Multiplier applied to world gravity
/// - `freeze_rotation` - Physics never alters the facing of a frozen body
/// - `grounded` - Last contact state resolved by the body step (physics-side only)
#[derive(Component, Clone, Debug)]
pub struct KinematicBody {
    pub velocity: Vector3,
    pub mass: f32,
    pub gravity_scale: f32,
    pub freeze_rotation: bool,
    pub grounded: bool,
    pending_impulse: Vector3,
    pending_move: Option<Vector3>,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new()
    }
}

impl KinematicBody {
    /// Create a unit-mass body with rotation frozen.
    pub fn new() -> Self {
        Self {
            velocity: Vector3::zero(),
            mass: 1.0,
            gravity_scale: 1.0,
            freeze_rotation: true,
            grounded: false,
            pending_impulse: Vector3::zero(),
            pending_move: None,
        }
    }

    /// Queue an instantaneous impulse. Multiple impulses in one step add up.
    pub fn add_impulse(&mut self, impulse: Vector3) {
        self.pending_impulse += impulse;
    }

    /// Queue a kinematic move. The latest request in a step wins.
    pub fn move_to(&mut self, position: Vector3) {
        self.pending_move = Some(position);
    }

    pub fn pending_impulse(&self) -> Vector3 {
        self.pending_impulse
    }

    pub fn pending_move(&self) -> Option<Vector3> {
        self.pending_move
    }

    /// Drain queued requests, returning (impulse, move target).
    pub fn take_requests(&mut self) -> (Vector3, Option<Vector3>) {
        let impulse = std::mem::replace(&mut self.pending_impulse, Vector3::zero());
        (impulse, self.pending_move.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_body_is_rotation_frozen_and_still() {
        let body = KinematicBody::new();
        assert!(body.freeze_rotation);
        assert!(approx_eq(body.velocity.length(), 0.0));
        assert!(body.pending_move().is_none());
    }

    #[test]
    fn test_impulses_accumulate_until_taken() {
        let mut body = KinematicBody::new();
        body.add_impulse(Vector3::new(0.0, 2.0, 0.0));
        body.add_impulse(Vector3::new(0.0, 3.0, 0.0));
        assert!(approx_eq(body.pending_impulse().y, 5.0));

        let (impulse, target) = body.take_requests();
        assert!(approx_eq(impulse.y, 5.0));
        assert!(target.is_none());
        assert!(approx_eq(body.pending_impulse().y, 0.0));
    }

    #[test]
    fn test_latest_move_wins() {
        let mut body = KinematicBody::new();
        body.move_to(Vector3::new(1.0, 0.0, 0.0));
        body.move_to(Vector3::new(2.0, 0.0, 0.0));
        let (_, target) = body.take_requests();
        assert!(approx_eq(target.unwrap().x, 2.0));
        assert!(body.pending_move().is_none());
    }
}
