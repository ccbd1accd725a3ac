//! Character controller configuration resource.
//!
//! Every tunable of the controller lives in [`ControllerConfig`]. Defaults are
//! safe to run with; any subset can be overridden from the same INI file as
//! [`GameConfig`](crate::resources::gameconfig::GameConfig).
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! jump_force = 7.5
//! move_speed = 4.0
//!
//! [physics]
//! ground_distance = 0.25
//! ground_mask = 0xFFFFFFFF
//! interact_distance = 2.0
//! interact_radius = 0.5
//! interact_mask = 0x2
//! gravity = -9.81
//!
//! [animator]
//! air_bool = isOnAir
//! jump_trigger = onJump
//! x_float = xAxis
//! z_float = zAxis
//!
//! [input]
//! action_key = E
//! interact_key = F
//! jump_key = SPACE
//!
//! [shaders]
//! invisibility_param = _InvisibilityAmount
//! ```
//!
//! Shaders authored with the misspelled `_InvisiblityAmount` property need
//! `invisibility_param` set to that name.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::Path;

use crate::components::collider::{LAYER_INTERACTABLE, LayerMask};
use crate::resources::input::{InputState, parse_key};

const DEFAULT_JUMP_FORCE: f32 = 7.5;
const DEFAULT_MOVE_SPEED: f32 = 4.0;
const DEFAULT_GROUND_DISTANCE: f32 = 0.25;
const DEFAULT_INTERACT_DISTANCE: f32 = 2.0;
const DEFAULT_INTERACT_RADIUS: f32 = 0.5;
const DEFAULT_GRAVITY: f32 = -9.81;

/// Character controller configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Impulse magnitude of a jump.
    pub jump_force: f32,
    /// Horizontal speed in world units per second.
    pub move_speed: f32,
    /// Length of the downward ground probe.
    pub ground_distance: f32,
    pub ground_mask: LayerMask,
    /// Maximum length of the interaction sweep.
    pub interact_distance: f32,
    /// Radius of the interaction sweep.
    pub interact_radius: f32,
    pub interact_mask: LayerMask,
    /// Vertical acceleration applied by the body step.
    pub gravity: f32,
    pub air_bool_name: String,
    pub jump_trigger_name: String,
    pub x_float_name: String,
    pub z_float_name: String,
    pub action_key: String,
    pub interact_key: String,
    pub jump_key: String,
    /// Material parameter driven by the invisibility transition.
    pub invisibility_param: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            jump_force: DEFAULT_JUMP_FORCE,
            move_speed: DEFAULT_MOVE_SPEED,
            ground_distance: DEFAULT_GROUND_DISTANCE,
            ground_mask: LayerMask::ALL,
            interact_distance: DEFAULT_INTERACT_DISTANCE,
            interact_radius: DEFAULT_INTERACT_RADIUS,
            interact_mask: LayerMask::from_layers(&[LAYER_INTERACTABLE]),
            gravity: DEFAULT_GRAVITY,
            air_bool_name: "isOnAir".into(),
            jump_trigger_name: "onJump".into(),
            x_float_name: "xAxis".into(),
            z_float_name: "zAxis".into(),
            action_key: "E".into(),
            interact_key: "F".into(),
            jump_key: "SPACE".into(),
            invisibility_param: "_InvisibilityAmount".into(),
        }
    }
}

/// Parse a mask written in decimal or `0x` hexadecimal.
fn parse_mask(raw: &str) -> Result<LayerMask, String> {
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse::<u32>(),
    };
    parsed
        .map(LayerMask)
        .map_err(|e| format!("invalid layer mask '{}': {}", raw, e))
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from an INI file. Missing keys keep their current values.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(path.as_ref())
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&ini)
    }

    /// Load overrides from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&ini)
    }

    fn apply_ini(&mut self, ini: &Ini) -> Result<(), String> {
        let float = |section: &str, key: &str, slot: &mut f32| match ini.getfloat(section, key) {
            Ok(Some(v)) => *slot = v as f32,
            Ok(None) => {}
            Err(e) => warn!("Ignoring [{}] {}: {}", section, key, e),
        };
        let string = |section: &str, key: &str, slot: &mut String| {
            if let Some(v) = ini.get(section, key) {
                *slot = v;
            }
        };

        // [movement] section
        float("movement", "jump_force", &mut self.jump_force);
        float("movement", "move_speed", &mut self.move_speed);

        // [physics] section
        float("physics", "ground_distance", &mut self.ground_distance);
        float("physics", "interact_distance", &mut self.interact_distance);
        float("physics", "interact_radius", &mut self.interact_radius);
        float("physics", "gravity", &mut self.gravity);
        if let Some(raw) = ini.get("physics", "ground_mask") {
            self.ground_mask = parse_mask(&raw)?;
        }
        if let Some(raw) = ini.get("physics", "interact_mask") {
            self.interact_mask = parse_mask(&raw)?;
        }

        // [animator] section
        string("animator", "air_bool", &mut self.air_bool_name);
        string("animator", "jump_trigger", &mut self.jump_trigger_name);
        string("animator", "x_float", &mut self.x_float_name);
        string("animator", "z_float", &mut self.z_float_name);

        // [input] section
        string("input", "action_key", &mut self.action_key);
        string("input", "interact_key", &mut self.interact_key);
        string("input", "jump_key", &mut self.jump_key);

        // [shaders] section
        string("shaders", "invisibility_param", &mut self.invisibility_param);

        self.validate()?;

        info!(
            "Loaded controller config: speed={}, jump={}, ground={}@{:#x}, interact={}r{}@{:#x}",
            self.move_speed,
            self.jump_force,
            self.ground_distance,
            self.ground_mask.0,
            self.interact_distance,
            self.interact_radius,
            self.interact_mask.0
        );
        Ok(())
    }

    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.ground_distance <= 0.0 {
            return Err(format!(
                "ground_distance must be positive, got {}",
                self.ground_distance
            ));
        }
        if self.interact_distance < 0.0 || self.interact_radius < 0.0 {
            return Err("interact distance and radius must not be negative".into());
        }
        for name in [&self.action_key, &self.interact_key, &self.jump_key] {
            parse_key(name)?;
        }
        Ok(())
    }

    /// Input state bound to the configured action keys.
    pub fn input_state(&self) -> Result<InputState, String> {
        Ok(InputState::with_bindings(
            parse_key(&self.action_key)?,
            parse_key(&self.interact_key)?,
            parse_key(&self.jump_key)?,
        ))
    }

    /// Write the configuration into `ini`, keeping its other sections.
    pub fn write_into(&self, ini: &mut Ini) {
        ini.set("movement", "jump_force", Some(self.jump_force.to_string()));
        ini.set("movement", "move_speed", Some(self.move_speed.to_string()));
        ini.set(
            "physics",
            "ground_distance",
            Some(self.ground_distance.to_string()),
        );
        ini.set(
            "physics",
            "ground_mask",
            Some(format!("{:#x}", self.ground_mask.0)),
        );
        ini.set(
            "physics",
            "interact_distance",
            Some(self.interact_distance.to_string()),
        );
        ini.set(
            "physics",
            "interact_radius",
            Some(self.interact_radius.to_string()),
        );
        ini.set(
            "physics",
            "interact_mask",
            Some(format!("{:#x}", self.interact_mask.0)),
        );
        ini.set("physics", "gravity", Some(self.gravity.to_string()));
        ini.set("animator", "air_bool", Some(self.air_bool_name.clone()));
        ini.set(
            "animator",
            "jump_trigger",
            Some(self.jump_trigger_name.clone()),
        );
        ini.set("animator", "x_float", Some(self.x_float_name.clone()));
        ini.set("animator", "z_float", Some(self.z_float_name.clone()));
        ini.set("input", "action_key", Some(self.action_key.clone()));
        ini.set("input", "interact_key", Some(self.interact_key.clone()));
        ini.set("input", "jump_key", Some(self.jump_key.clone()));
        ini.set(
            "shaders",
            "invisibility_param",
            Some(self.invisibility_param.clone()),
        );
    }
}
