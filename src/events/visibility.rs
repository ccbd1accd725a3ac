//! Notification emitted when an invisibility transition completes.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

/// Emitted once per completed transition, after its exit action has run.
#[derive(Event, Debug, Clone, Copy)]
pub struct VisibilityChangedEvent {
    pub entity: Entity,
    pub is_invisible: bool,
}

pub fn visibility_log_observer(trigger: On<VisibilityChangedEvent>) {
    let event = trigger.event();
    log::info!(
        "{:?} is now {}",
        event.entity,
        if event.is_invisible { "invisible" } else { "visible" }
    );
}
