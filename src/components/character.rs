//! Character controller component.
//!
//! Marks the controlled body and carries the movement intent sampled on the
//! frame clock so the fixed clock can apply it. See
//! [`crate::systems::controller`] for how the two clocks are wired.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct CharacterController {
    /// Horizontal input axis sampled this frame, in [-1, 1].
    pub move_x: f32,
    /// Forward input axis sampled this frame, in [-1, 1].
    pub move_z: f32,
}

impl CharacterController {
    pub fn has_move_input(&self) -> bool {
        self.move_x * self.move_x + self.move_z * self.move_z != 0.0
    }
}
