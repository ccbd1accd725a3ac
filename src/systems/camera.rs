//! Orbit camera update.
//!
//! Applies the mouse look delta to the [`CameraRig`] and re-centers its pivot
//! over the controlled character. Runs first on the frame clock so every cast
//! made later in the frame sees this frame's basis.
use bevy_ecs::prelude::*;

use crate::components::character::CharacterController;
use crate::components::transform3d::Transform3D;
use crate::resources::camerarig::CameraRig;
use crate::resources::input::InputState;

pub fn camera_follow_system(
    input: Res<InputState>,
    mut camera: ResMut<CameraRig>,
    query: Query<&Transform3D, With<CharacterController>>,
) {
    let look = input.look_delta;
    if look.x != 0.0 || look.y != 0.0 {
        camera.orbit(look.x, look.y);
    }
    // Only one character is followed.
    if let Some(transform) = query.iter().next() {
        camera.follow(transform.position);
    }
}
