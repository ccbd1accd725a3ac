//! Time update helpers.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame and drains the fixed-step accumulator.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::{MAX_FIXED_STEPS, WorldTime};

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The current
/// `time_scale` is applied, the result is written to `delta`, and it is banked
/// for the fixed clock. The bank is capped just above [`MAX_FIXED_STEPS`] steps.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.max(0.0) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
    let cap = wt.fixed_delta * (MAX_FIXED_STEPS as f32 + 0.5);
    wt.fixed_accumulator = (wt.fixed_accumulator + scaled_dt).min(cap);
}

/// Run `fixed` once per whole fixed step banked in `WorldTime`.
///
/// Returns how many steps ran.
pub fn run_fixed_steps(world: &mut World, fixed: &mut Schedule) -> u32 {
    let mut steps = 0;
    while world.resource_mut::<WorldTime>().consume_fixed_step() {
        fixed.run(world);
        steps += 1;
    }
    steps
}
