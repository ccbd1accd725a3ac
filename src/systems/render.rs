use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animator::AnimatorParams;
use crate::components::character::CharacterController;
use crate::components::collider::StaticCollider;
use crate::components::interactable::Interactable;
use crate::components::kinematicbody::KinematicBody;
use crate::components::surfaces::{BodyRenderers, ShadowCasting};
use crate::components::tint::Tint;
use crate::components::transform3d::{Transform3D, WORLD_UP};
use crate::components::visibility::VisibilityState;
use crate::resources::camerarig::CameraRig;
use crate::resources::controllerconfig::ControllerConfig;
use crate::resources::debugmode::DebugMode;
use crate::resources::physicsworld::{ColliderSet, PhysicsQuery};
use crate::systems::groundprobe::GROUND_PROBE_MARGIN;

const SHADOW_REACH: f32 = 20.0;
const SHADOW_RADIUS: f32 = 0.45;

/// Exclusive system drawing one frame.
///
/// The raylib handle and thread are taken out of the world for the duration
/// of the draw so the passes can still query it.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        log::error!("render_system: no RaylibHandle in world");
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        log::error!("render_system: no RaylibThread in world");
        world.insert_non_send_resource(rl);
        return;
    };

    let camera = world.resource::<CameraRig>().to_camera3d();
    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::SKYBLUE);
        {
            let mut d3 = d.begin_mode3D(camera);
            render_pass(world, &mut d3);
        }
        render_debug_ui(world, &mut d);
    }

    // Triggers are one-shot: the frame that drew them consumes them.
    let mut animators = world.query::<&mut AnimatorParams>();
    for mut animator in animators.iter_mut(world) {
        animator.triggers.clear();
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// Draw level boxes and characters in 3D camera space.
pub fn render_pass(world: &mut World, d3: &mut RaylibMode3D<RaylibDrawHandle>) {
    let debug = world.contains_resource::<DebugMode>();

    let mut boxes = world.query::<(&StaticCollider, Option<&Tint>, Option<&Interactable>)>();
    for (collider, tint, interactable) in boxes.iter(world) {
        let size = collider.size();
        let color = tint.map(|t| t.color).unwrap_or(Color::LIGHTGRAY);
        d3.draw_cube(collider.center, size.x, size.y, size.z, color);
        d3.draw_cube_wires(collider.center, size.x, size.y, size.z, Color::DARKGRAY);
        if debug && interactable.is_some() {
            d3.draw_cube_wires(
                collider.center,
                size.x + 0.05,
                size.y + 0.05,
                size.z + 0.05,
                Color::GOLD,
            );
        }
    }

    let param = world.resource::<ControllerConfig>().invisibility_param.clone();
    let ground_mask = world.resource::<ControllerConfig>().ground_mask;
    let shadows: Vec<Vector3> = {
        let mut q =
            world.query_filtered::<(&Transform3D, &BodyRenderers), With<CharacterController>>();
        let colliders = world.resource::<ColliderSet>();
        q.iter(world)
            .filter(|(_, r)| {
                r.renderers
                    .iter()
                    .any(|b| b.shadow_casting == ShadowCasting::On)
            })
            .filter_map(|(t, _)| {
                let origin = t.position + WORLD_UP * GROUND_PROBE_MARGIN;
                colliders
                    .raycast(origin, -WORLD_UP, SHADOW_REACH, ground_mask)
                    .map(|hit| hit.point)
            })
            .collect()
    };
    for point in shadows {
        d3.draw_cylinder(
            point + WORLD_UP * 0.01,
            SHADOW_RADIUS,
            SHADOW_RADIUS,
            0.01,
            16,
            Color::new(0, 0, 0, 110),
        );
    }

    let mut bodies = world.query::<(&Transform3D, &BodyRenderers)>();
    for (transform, renderers) in bodies.iter(world) {
        for renderer in renderers.renderers.iter() {
            let amount = renderer.material.get_float(&param).unwrap_or(0.0);
            let color = Tint::faded(renderer.color, 1.0 - amount);
            let center = transform.position + renderer.offset;
            d3.draw_cube(
                center,
                renderer.size.x,
                renderer.size.y,
                renderer.size.z,
                color,
            );
        }
        // Nose marker so facing is readable.
        let head = renderers
            .renderers
            .last()
            .map(|r| r.offset)
            .unwrap_or(WORLD_UP * 1.6);
        let nose = transform.position + head + transform.forward * 0.3;
        let amount = renderers
            .renderers
            .last()
            .and_then(|r| r.material.get_float(&param))
            .unwrap_or(0.0);
        d3.draw_sphere(nose, 0.07, Tint::faded(Color::MAROON, 1.0 - amount));
    }

    if debug {
        let rig = *world.resource::<CameraRig>();
        let reach = world.resource::<ControllerConfig>().interact_distance;
        let start = rig.target_position();
        let end = start + rig.target_forward() * reach;
        d3.draw_line_3D(start, end, Color::RED);
        d3.draw_grid(40, 1.0);
    }
}

/// Text overlay with controller state, shown in debug mode only.
pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, Color::BLACK);

    let mut y = 30;
    let mut q = world.query_filtered::<(
        &Transform3D,
        &KinematicBody,
        &AnimatorParams,
        &VisibilityState,
    ), With<CharacterController>>();
    for (transform, body, animator, visibility) in q.iter(world) {
        let p = transform.position;
        let text = format!(
            "pos ({:.2}, {:.2}, {:.2}) yaw {:.0} vel.y {:.2} grounded {}",
            p.x,
            p.y,
            p.z,
            transform.yaw_degrees(),
            body.velocity.y,
            body.grounded
        );
        d.draw_text(&text, 10, y, 10, Color::BLACK);
        y += 20;

        let mut params: Vec<String> = animator
            .floats
            .iter()
            .map(|(k, v)| format!("{}={:.1}", k, v))
            .chain(animator.bools.iter().map(|(k, v)| format!("{}={}", k, v)))
            .chain(animator.triggers.iter().map(|k| format!("{}!", k)))
            .collect();
        params.sort();
        d.draw_text(&params.join(" "), 10, y, 10, Color::BLACK);
        y += 20;

        let text = format!(
            "invisible {} in_transition {}",
            visibility.is_invisible, visibility.in_transition
        );
        d.draw_text(&text, 10, y, 10, Color::BLACK);
        y += 20;
    }

    let rig = *world.resource::<CameraRig>();
    let text = format!(
        "Camera yaw {:.2} pitch {:.2} dist {:.1}",
        rig.yaw, rig.pitch, rig.distance
    );
    d.draw_text(&text, 10, y, 10, Color::BLACK);
}
