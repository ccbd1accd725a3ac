// Animation parameters written by the controller and read by whatever plays animations

use bevy_ecs::prelude::Component;
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default, Component)]
pub struct AnimatorParams {
    pub floats: FxHashMap<String, f32>,
    pub bools: FxHashMap<String, bool>,
    /// Triggers stay set until an animation consumer takes them.
    pub triggers: FxHashSet<String>,
}

impl AnimatorParams {
    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.floats.insert(key.into(), value);
    }
    pub fn get_float(&self, key: &str) -> Option<f32> {
        self.floats.get(key).copied()
    }
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.bools.insert(key.into(), value);
    }
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.bools.get(key).copied()
    }
    pub fn set_trigger(&mut self, key: impl Into<String>) {
        self.triggers.insert(key.into());
    }
    pub fn has_trigger(&self, key: &str) -> bool {
        self.triggers.contains(key)
    }
    /// Consume a trigger, returning whether it was set.
    pub fn take_trigger(&mut self, key: &str) -> bool {
        self.triggers.remove(key)
    }
}
