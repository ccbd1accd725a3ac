//! Character controller orchestration.
//!
//! The controller runs on two clocks:
//!
//! - the **frame schedule** ([`build_frame_schedule`]) samples input, resolves
//!   interaction, publishes ground state, gates jumps and drives the
//!   invisibility transition, once per rendered frame with a variable delta;
//! - the **fixed schedule** ([`build_fixed_schedule`]) applies movement and
//!   steps the bodies with a constant delta, zero or more times per frame.
//!
//! Movement intent crosses from the first to the second through
//! [`CharacterController`]. Physics never runs on the frame clock and casts
//! never run on the fixed clock.
//!
//! Raw device polling is not part of either schedule; the host runs
//! [`update_input_state`](crate::systems::input::update_input_state) before
//! the frame schedule so both can be driven without a window in tests.
use bevy_ecs::prelude::*;

use crate::components::animator::AnimatorParams;
use crate::components::character::CharacterController;
use crate::resources::controllerconfig::ControllerConfig;
use crate::resources::input::InputState;
use crate::systems::bodyphysics::body_physics_system;
use crate::systems::camera::camera_follow_system;
use crate::systems::colliders::sync_collider_set;
use crate::systems::groundprobe::ground_probe_system;
use crate::systems::interaction::interaction_system;
use crate::systems::jump::jump_system;
use crate::systems::locomotion::locomotion_system;
use crate::systems::visibility::{visibility_transition_system, visibility_trigger_system};

/// Copy this frame's axes into every controller and mirror them to the
/// animator.
pub fn character_input_system(
    input: Res<InputState>,
    config: Res<ControllerConfig>,
    mut query: Query<(&mut CharacterController, &mut AnimatorParams)>,
) {
    let frame = input.frame();
    for (mut controller, mut animator) in query.iter_mut() {
        controller.move_x = frame.move_x;
        controller.move_z = frame.move_z;
        animator.set_float(config.x_float_name.as_str(), frame.move_x);
        animator.set_float(config.z_float_name.as_str(), frame.move_z);
    }
}

pub fn build_frame_schedule() -> Schedule {
    let mut frame = Schedule::default();
    frame.add_systems(
        (
            sync_collider_set,
            camera_follow_system,
            character_input_system,
            interaction_system,
            ground_probe_system,
            jump_system,
            visibility_trigger_system,
            visibility_transition_system,
        )
            .chain(),
    );
    frame
}

pub fn build_fixed_schedule() -> Schedule {
    let mut fixed = Schedule::default();
    fixed.add_systems((locomotion_system, body_physics_system).chain());
    fixed
}
