//! Debug overlay toggle.
//!
//! While this resource is present the renderer outlines interactables, draws
//! the interaction ray and prints the animator parameters. Toggled with
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
