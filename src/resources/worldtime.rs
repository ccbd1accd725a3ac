use bevy_ecs::prelude::Resource;

/// Upper bound on fixed steps drained in one frame, so a long stall is
/// dropped instead of replayed.
pub const MAX_FIXED_STEPS: u32 = 8;

pub const DEFAULT_FIXED_DELTA: f32 = 0.02;

/// The two simulation clocks.
///
/// `delta` is the scaled variable frame delta. `fixed_delta` is the constant
/// physics step; frame time is banked in `fixed_accumulator` and drained one
/// step at a time by [`WorldTime::consume_fixed_step`].
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
    pub fixed_delta: f32,
    pub fixed_accumulator: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
            fixed_delta: DEFAULT_FIXED_DELTA,
            fixed_accumulator: 0.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_fixed_delta(mut self, fixed_delta: f32) -> Self {
        self.fixed_delta = fixed_delta;
        self
    }

    /// Take one fixed step from the accumulator if enough time is banked.
    pub fn consume_fixed_step(&mut self) -> bool {
        if self.fixed_delta > 0.0 && self.fixed_accumulator >= self.fixed_delta {
            self.fixed_accumulator -= self.fixed_delta;
            true
        } else {
            false
        }
    }
}
