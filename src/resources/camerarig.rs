//! Third-person orbit camera resource.
//!
//! The [`CameraRig`] orbits a pivot that follows the character. It is the
//! single source of the camera basis the controller needs: the forward/right
//! vectors for camera-relative movement, and the pivot point/forward used as
//! the interaction ray.
//!
//! Axes are right-handed with +Y up. At `yaw = 0` the camera looks along +Z
//! and its right vector is -X.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

use crate::components::transform3d::WORLD_UP;

/// Pitch limit in radians, keeps the basis away from the poles.
pub const MAX_PITCH: f32 = 1.4;

#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraRig {
    /// Rotation around +Y in radians.
    pub yaw: f32,
    /// Positive values look down, in radians.
    pub pitch: f32,
    /// Distance from the pivot to the eye.
    pub distance: f32,
    /// Height of the pivot above the followed body's origin.
    pub pivot_height: f32,
    /// Radians per pixel of look input.
    pub sensitivity: f32,
    /// Current pivot in world space.
    pub pivot: Vector3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.35,
            distance: 5.0,
            pivot_height: 1.6,
            sensitivity: 0.003,
            pivot: Vector3::new(0.0, 1.6, 0.0),
        }
    }
}

impl CameraRig {
    pub fn new(distance: f32, sensitivity: f32) -> Self {
        Self {
            distance,
            sensitivity,
            ..Self::default()
        }
    }

    /// Unit view direction, pitched.
    pub fn forward(&self) -> Vector3 {
        Vector3::new(
            self.yaw.sin() * self.pitch.cos(),
            -self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// Unit right vector, always horizontal.
    pub fn right(&self) -> Vector3 {
        Vector3::new(-self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Eye position behind the pivot.
    pub fn eye(&self) -> Vector3 {
        self.pivot - self.forward() * self.distance
    }

    /// Interaction ray origin.
    pub fn target_position(&self) -> Vector3 {
        self.pivot
    }

    /// Interaction ray direction.
    pub fn target_forward(&self) -> Vector3 {
        self.forward()
    }

    /// Apply a look delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Re-center the pivot over a body origin.
    pub fn follow(&mut self, body_position: Vector3) {
        self.pivot = body_position + WORLD_UP * self.pivot_height;
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D::perspective(self.eye(), self.pivot, WORLD_UP, 60.0)
    }
}
