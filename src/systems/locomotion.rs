//! Camera-relative locomotion on the fixed step.
//!
//! [`compute_world_direction`] turns the two input axes into a horizontal
//! world direction using the camera basis. [`locomotion_system`] applies it
//! to every character as a kinematic position request and turns the body to
//! face camera-forward. Characters with no input are skipped entirely: no
//! direction is computed, the body is neither moved nor turned.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::character::CharacterController;
use crate::components::kinematicbody::KinematicBody;
use crate::components::transform3d::Transform3D;
use crate::resources::camerarig::CameraRig;
use crate::resources::controllerconfig::ControllerConfig;
use crate::resources::worldtime::WorldTime;

const DEGENERATE_SQ: f32 = 1e-8;

/// Drop the vertical component.
pub fn flatten(v: Vector3) -> Vector3 {
    Vector3::new(v.x, 0.0, v.z)
}

/// `normalize(flat(right) * x + flat(forward) * z)`.
///
/// Must not be called with zero input. Returns `None` only when the camera
/// basis flattens to nothing (e.g. looking straight down with a vertical right
/// vector).
pub fn compute_world_direction(
    input_x: f32,
    input_z: f32,
    camera_forward: Vector3,
    camera_right: Vector3,
) -> Option<Vector3> {
    let dir = flatten(camera_right) * input_x + flatten(camera_forward) * input_z;
    let len_sq = dir.length_sqr();
    if len_sq <= DEGENERATE_SQ {
        return None;
    }
    Some(dir * (1.0 / len_sq.sqrt()))
}

/// Facing for a moving body: flattened, normalized camera forward.
pub fn facing_from_camera(camera_forward: Vector3) -> Option<Vector3> {
    let flat = flatten(camera_forward);
    let len_sq = flat.length_sqr();
    if len_sq <= DEGENERATE_SQ {
        return None;
    }
    Some(flat * (1.0 / len_sq.sqrt()))
}

/// Apply movement intent once per fixed step.
pub fn locomotion_system(
    time: Res<WorldTime>,
    camera: Res<CameraRig>,
    config: Res<ControllerConfig>,
    mut query: Query<(&CharacterController, &mut Transform3D, &mut KinematicBody)>,
) {
    let camera_forward = camera.forward();
    let camera_right = camera.right();

    for (controller, mut transform, mut body) in query.iter_mut() {
        if !controller.has_move_input() {
            continue;
        }
        let Some(direction) = compute_world_direction(
            controller.move_x,
            controller.move_z,
            camera_forward,
            camera_right,
        ) else {
            continue;
        };

        if let Some(facing) = facing_from_camera(camera_forward) {
            transform.forward = facing;
        }

        let target = transform.position + direction * (config.move_speed * time.fixed_delta);
        body.move_to(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn pitched_rig(yaw: f32, pitch: f32) -> CameraRig {
        CameraRig {
            yaw,
            pitch,
            ..CameraRig::default()
        }
    }

    // ==================== DIRECTION TESTS ====================

    #[test]
    fn test_direction_is_unit_and_horizontal_under_pitch() {
        for &(yaw, pitch) in &[(0.0, 0.3), (1.2, -0.7), (-2.5, 1.3), (3.0, 0.05)] {
            let rig = pitched_rig(yaw, pitch);
            for &(x, z) in &[(1.0, 0.0), (0.0, 1.0), (-1.0, 1.0), (0.3, -0.8)] {
                let d = compute_world_direction(x, z, rig.forward(), rig.right()).unwrap();
                assert!(approx_eq(d.length(), 1.0));
                assert!(approx_eq(d.y, 0.0));
            }
        }
    }

    #[test]
    fn test_forward_input_follows_camera_heading() {
        let rig = pitched_rig(0.0, 0.5);
        let d = compute_world_direction(0.0, 1.0, rig.forward(), rig.right()).unwrap();
        assert!(approx_eq(d.z, 1.0));
        assert!(approx_eq(d.x, 0.0));
    }

    #[test]
    fn test_strafe_input_follows_camera_right() {
        let rig = pitched_rig(0.0, 0.5);
        let d = compute_world_direction(1.0, 0.0, rig.forward(), rig.right()).unwrap();
        assert!(approx_eq(d.x, -1.0));
    }

    #[test]
    fn test_degenerate_basis_is_none() {
        let down = Vector3::new(0.0, -1.0, 0.0);
        let up = Vector3::new(0.0, 1.0, 0.0);
        assert!(compute_world_direction(1.0, 1.0, down, up).is_none());
        assert!(facing_from_camera(down).is_none());
    }

    // ==================== SYSTEM TESTS ====================

    fn make_world(rig: CameraRig, controller: CharacterController) -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_fixed_delta(0.02));
        world.insert_resource(rig);
        world.insert_resource(ControllerConfig::default());
        let e = world
            .spawn((
                controller,
                Transform3D::new(Vector3::new(1.0, 0.0, 1.0)),
                KinematicBody::new(),
            ))
            .id();
        (world, e)
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(locomotion_system);
        schedule.run(world);
    }

    #[test]
    fn test_zero_input_neither_moves_nor_turns() {
        let (mut world, e) = make_world(pitched_rig(1.0, 0.4), CharacterController::default());
        let before = *world.get::<Transform3D>(e).unwrap();
        tick(&mut world);
        let after = *world.get::<Transform3D>(e).unwrap();
        assert_eq!(before, after);
        assert!(world.get::<KinematicBody>(e).unwrap().pending_move().is_none());
    }

    #[test]
    fn test_moving_requests_step_and_faces_camera_forward() {
        let controller = CharacterController {
            move_x: 1.0,
            move_z: 0.0,
        };
        let (mut world, e) = make_world(pitched_rig(0.0, 0.4), controller);
        tick(&mut world);

        let transform = world.get::<Transform3D>(e).unwrap();
        // Strafing right, yet facing camera-forward (+Z).
        assert!(approx_eq(transform.forward.z, 1.0));
        assert!(approx_eq(transform.forward.y, 0.0));

        let target = world.get::<KinematicBody>(e).unwrap().pending_move().unwrap();
        // 4.0 units/s * 0.02 s along -X from x = 1.0.
        assert!(approx_eq(target.x, 1.0 - 0.08));
        assert!(approx_eq(target.z, 1.0));
        assert!(approx_eq(target.y, 0.0));
    }
}
