use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

pub const WORLD_UP: Vector3 = Vector3 {
    x: 0.0,
    y: 1.0,
    z: 0.0,
};

/// World-space placement of a body: origin at the feet, facing `forward`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    pub position: Vector3,
    /// Unit facing vector.
    pub forward: Vector3,
    /// Unit up vector.
    pub up: Vector3,
}

impl Transform3D {
    pub fn new(position: Vector3) -> Self {
        Self {
            position,
            forward: Vector3::new(0.0, 0.0, 1.0),
            up: WORLD_UP,
        }
    }

    /// Yaw angle in degrees around the up axis, for drawing.
    pub fn yaw_degrees(&self) -> f32 {
        self.forward.x.atan2(self.forward.z).to_degrees()
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::new(Vector3::zero())
    }
}
