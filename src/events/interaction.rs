//! Notification emitted after an interaction capability has run.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::interactable::Interactable;

/// A character's interaction cast struck `target` and its capability was
/// invoked.
#[derive(Event, Debug, Clone, Copy)]
pub struct InteractedEvent {
    pub character: Entity,
    pub target: Entity,
}

pub fn interaction_log_observer(trigger: On<InteractedEvent>, query: Query<&Interactable>) {
    let event = trigger.event();
    let label = query
        .get(event.target)
        .map(|i| i.describe())
        .unwrap_or_else(|_| "<despawned>".to_string());
    log::info!(
        "{:?} interacted with {:?} ({})",
        event.character,
        event.target,
        label
    );
}
