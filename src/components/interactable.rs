//! Interaction capability.
//!
//! Any entity may opt into being interactable by carrying an [`Interactable`]
//! that wraps an [`InteractionCapability`] implementation. The
//! [`interaction_system`](crate::systems::interaction::interaction_system)
//! probes the entity struck by its cast for this component; entities without
//! it are ignored.

use bevy_ecs::prelude::Component;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Behaviour run when the character interacts with an entity.
pub trait InteractionCapability: Send + Sync {
    fn on_interact(&mut self);

    /// Short description for logs and the debug overlay.
    fn describe(&self) -> String {
        String::from("interactable")
    }
}

#[derive(Component)]
pub struct Interactable(pub Box<dyn InteractionCapability>);

impl Interactable {
    pub fn new(capability: impl InteractionCapability + 'static) -> Self {
        Self(Box::new(capability))
    }

    pub fn interact(&mut self) {
        self.0.on_interact();
    }

    pub fn describe(&self) -> String {
        self.0.describe()
    }
}

/// Flips a shared on/off flag, e.g. a lamp or a lever.
#[derive(Debug, Clone)]
pub struct Switch {
    pub name: String,
    pub on: Arc<AtomicBool>,
}

impl Switch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::Relaxed)
    }
}

impl InteractionCapability for Switch {
    fn on_interact(&mut self) {
        let was_on = self.on.fetch_xor(true, Ordering::Relaxed);
        log::info!("{} switched {}", self.name, if was_on { "off" } else { "on" });
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.name, if self.is_on() { "on" } else { "off" })
    }
}

/// Counts interactions, e.g. a bell or a notice board.
#[derive(Debug, Clone)]
pub struct Counter {
    pub name: String,
    pub count: Arc<AtomicU32>,
}

impl Counter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }
}

impl InteractionCapability for Counter {
    fn on_interact(&mut self) {
        let n = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        log::info!("{} used {} time(s)", self.name, n);
    }

    fn describe(&self) -> String {
        format!("{} x{}", self.name, self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_toggles_shared_flag() {
        let switch = Switch::new("lamp");
        let handle = switch.clone();
        let mut interactable = Interactable::new(switch);
        interactable.interact();
        assert!(handle.is_on());
        interactable.interact();
        assert!(!handle.is_on());
    }

    #[test]
    fn test_counter_counts_each_call() {
        let counter = Counter::new("bell");
        let handle = counter.clone();
        let mut interactable = Interactable::new(counter);
        interactable.interact();
        interactable.interact();
        assert_eq!(handle.count(), 2);
        assert_eq!(interactable.describe(), "bell x2");
    }
}
