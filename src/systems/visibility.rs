//! Invisibility transition systems.
//!
//! - [`visibility_trigger_system`] starts a transition on the action key,
//!   refusing while one is already running.
//! - [`visibility_transition_system`] advances running transitions by the
//!   frame delta and drops them once their exit action has run.
//!
//! Both run on the frame clock, after the trigger so a transition takes its
//! first step on the frame it was started.
use bevy_ecs::prelude::*;

use crate::components::character::CharacterController;
use crate::components::surfaces::BodyRenderers;
use crate::components::visibility::{TransitionStep, VisibilityState, VisibilityTransition};
use crate::events::visibility::VisibilityChangedEvent;
use crate::resources::controllerconfig::ControllerConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn visibility_trigger_system(
    input: Res<InputState>,
    mut query: Query<(Entity, &mut VisibilityState), With<CharacterController>>,
    mut commands: Commands,
) {
    if !input.frame().action_pressed {
        return;
    }
    for (entity, mut state) in query.iter_mut() {
        if state.in_transition {
            log::debug!("{:?}: transition already running, action ignored", entity);
            continue;
        }
        let task = VisibilityTransition::begin(&mut state);
        log::debug!(
            "{:?}: becoming {}",
            entity,
            if state.is_invisible { "visible" } else { "invisible" }
        );
        commands.entity(entity).insert(task);
    }
}

pub fn visibility_transition_system(
    time: Res<WorldTime>,
    config: Res<ControllerConfig>,
    mut query: Query<(
        Entity,
        &mut VisibilityState,
        &mut VisibilityTransition,
        &mut BodyRenderers,
    )>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (entity, mut state, mut task, mut renderers) in query.iter_mut() {
        let step = task.step(
            dt,
            &mut state,
            &mut renderers,
            config.invisibility_param.as_str(),
        );
        if step == TransitionStep::Finished {
            commands.entity(entity).remove::<VisibilityTransition>();
            commands.trigger(VisibilityChangedEvent {
                entity,
                is_invisible: state.is_invisible,
            });
        }
    }
}
