//! Per-frame keyboard and mouse input resource.
//!
//! Captures the subset of input the character cares about and exposes it to
//! systems via the [`InputState`] resource. [`InputState::frame`] condenses it
//! into the [`InputFrame`] sample the controller consumes once per tick.
//! Defaults use WASD for movement, E for the invisibility action, F to
//! interact and Space to jump.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key went from released to pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    /// Apply a new held state, deriving the edge flags from the previous one.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// The controller's view of one tick of input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    pub move_x: f32,
    pub move_z: f32,
    pub interact_pressed: bool,
    pub jump_pressed: bool,
    pub action_pressed: bool,
}

/// Resource capturing the per-frame input state relevant to the character.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_forward: BoolState,
    pub move_back: BoolState,
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub action: BoolState,
    pub interact: BoolState,
    pub jump: BoolState,
    pub mode_debug: BoolState,
    /// Mouse movement since last frame, in pixels.
    pub look_delta: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_forward: BoolState::bound_to(KeyboardKey::KEY_W),
            move_back: BoolState::bound_to(KeyboardKey::KEY_S),
            move_left: BoolState::bound_to(KeyboardKey::KEY_A),
            move_right: BoolState::bound_to(KeyboardKey::KEY_D),
            action: BoolState::bound_to(KeyboardKey::KEY_E),
            interact: BoolState::bound_to(KeyboardKey::KEY_F),
            jump: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            look_delta: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

fn axis(positive: &BoolState, negative: &BoolState) -> f32 {
    let mut v = 0.0;
    if positive.active {
        v += 1.0;
    }
    if negative.active {
        v -= 1.0;
    }
    v
}

impl InputState {
    /// Build the input state with the action keys taken from configuration.
    pub fn with_bindings(action: KeyboardKey, interact: KeyboardKey, jump: KeyboardKey) -> Self {
        Self {
            action: BoolState::bound_to(action),
            interact: BoolState::bound_to(interact),
            jump: BoolState::bound_to(jump),
            ..Self::default()
        }
    }

    pub fn move_x(&self) -> f32 {
        axis(&self.move_right, &self.move_left)
    }

    pub fn move_z(&self) -> f32 {
        axis(&self.move_forward, &self.move_back)
    }

    pub fn frame(&self) -> InputFrame {
        InputFrame {
            move_x: self.move_x(),
            move_z: self.move_z(),
            interact_pressed: self.interact.just_pressed,
            jump_pressed: self.jump.just_pressed,
            action_pressed: self.action.just_pressed,
        }
    }
}

/// Resolve a key name from configuration (`E`, `SPACE`, `KEY_F`, `f`, ...).
pub fn parse_key(name: &str) -> Result<KeyboardKey, String> {
    let upper = name.trim().to_ascii_uppercase();
    let upper = upper.strip_prefix("KEY_").unwrap_or(&upper);
    let key = match upper {
        "A" => KeyboardKey::KEY_A,
        "B" => KeyboardKey::KEY_B,
        "C" => KeyboardKey::KEY_C,
        "D" => KeyboardKey::KEY_D,
        "E" => KeyboardKey::KEY_E,
        "F" => KeyboardKey::KEY_F,
        "G" => KeyboardKey::KEY_G,
        "H" => KeyboardKey::KEY_H,
        "I" => KeyboardKey::KEY_I,
        "J" => KeyboardKey::KEY_J,
        "K" => KeyboardKey::KEY_K,
        "L" => KeyboardKey::KEY_L,
        "M" => KeyboardKey::KEY_M,
        "N" => KeyboardKey::KEY_N,
        "O" => KeyboardKey::KEY_O,
        "P" => KeyboardKey::KEY_P,
        "Q" => KeyboardKey::KEY_Q,
        "R" => KeyboardKey::KEY_R,
        "S" => KeyboardKey::KEY_S,
        "T" => KeyboardKey::KEY_T,
        "U" => KeyboardKey::KEY_U,
        "V" => KeyboardKey::KEY_V,
        "W" => KeyboardKey::KEY_W,
        "X" => KeyboardKey::KEY_X,
        "Y" => KeyboardKey::KEY_Y,
        "Z" => KeyboardKey::KEY_Z,
        "SPACE" => KeyboardKey::KEY_SPACE,
        "ENTER" => KeyboardKey::KEY_ENTER,
        "TAB" => KeyboardKey::KEY_TAB,
        "LEFT_SHIFT" | "SHIFT" => KeyboardKey::KEY_LEFT_SHIFT,
        "LEFT_CONTROL" | "CTRL" => KeyboardKey::KEY_LEFT_CONTROL,
        _ => return Err(format!("unknown key name '{}'", name)),
    };
    Ok(key)
}
