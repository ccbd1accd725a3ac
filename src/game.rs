//! Scene setup: turns a [`LevelData`] into entities and spawns the character.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::animator::AnimatorParams;
use crate::components::character::CharacterController;
use crate::components::collider::{Layer, StaticCollider};
use crate::components::interactable::{Counter, Interactable, Switch};
use crate::components::kinematicbody::KinematicBody;
use crate::components::surfaces::BodyRenderers;
use crate::components::tint::Tint;
use crate::components::transform3d::Transform3D;
use crate::components::visibility::VisibilityState;
use crate::resources::camerarig::CameraRig;
use crate::resources::controllerconfig::ControllerConfig;
use crate::resources::level::{LevelData, LevelInteraction};
use crate::resources::physicsworld::ColliderSet;

fn vec3(v: [f32; 3]) -> Vector3 {
    Vector3::new(v[0], v[1], v[2])
}

/// Spawn every box of `level` as a static collider.
///
/// Returns the level spawn point. The [`ColliderSet`] is filled right away
/// so casts work before the first frame runs.
pub fn spawn_level(world: &mut World, level: &LevelData) -> Result<Vector3, String> {
    if !world.contains_resource::<ColliderSet>() {
        world.insert_resource(ColliderSet::new());
    }
    for (index, entry) in level.boxes.iter().enumerate() {
        let layer = Layer::new(entry.layer).map_err(|e| format!("box {}: {}", index, e))?;
        if entry.size.iter().any(|s| *s <= 0.0) {
            return Err(format!("box {}: size must be positive", index));
        }
        let collider = StaticCollider::new(vec3(entry.center), vec3(entry.size), layer);
        let tint = match entry.color.as_deref() {
            Some(hex) => Tint::from_hex(hex).map_err(|e| format!("box {}: {}", index, e))?,
            None => Tint::default(),
        };

        let mut entity = world.spawn((collider, tint));
        match &entry.interaction {
            Some(LevelInteraction::Switch { name }) => {
                entity.insert(Interactable::new(Switch::new(name.clone())));
            }
            Some(LevelInteraction::Counter { name }) => {
                entity.insert(Interactable::new(Counter::new(name.clone())));
            }
            None => {}
        }
        let id = entity.id();
        world.resource_mut::<ColliderSet>().insert(id, collider);
    }
    log::info!("Level spawned with {} boxes", level.boxes.len());
    Ok(vec3(level.spawn))
}

/// Spawn the controlled character at `position`.
///
/// Fails when the camera rig or controller configuration has not been
/// inserted: the controller cannot run without either.
pub fn spawn_character(world: &mut World, position: Vector3) -> Result<Entity, String> {
    if !world.contains_resource::<CameraRig>() {
        return Err("spawn_character: CameraRig resource missing".to_string());
    }
    let Some(config) = world.get_resource::<ControllerConfig>() else {
        return Err("spawn_character: ControllerConfig resource missing".to_string());
    };
    let param = config.invisibility_param.clone();

    let entity = world
        .spawn((
            CharacterController::default(),
            Transform3D::new(position),
            KinematicBody::new(),
            AnimatorParams::default(),
            BodyRenderers::humanoid(&param),
            VisibilityState::default(),
        ))
        .id();
    world.resource_mut::<CameraRig>().follow(position);
    log::info!("Character {:?} spawned at {:?}", entity, position);
    Ok(entity)
}
