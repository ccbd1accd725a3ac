//! Invisibility state and its timed transition.
//!
//! [`VisibilityState`] lives on the character for its whole life. A
//! [`VisibilityTransition`] is attached only while a transition runs and is
//! advanced once per frame by
//! [`visibility_transition_system`](crate::systems::visibility::visibility_transition_system).
//!
//! ```text
//!  Visible ──action──▶ Transitioning ──elapsed ≥ 1──▶ Invisible
//!     ▲                                                   │
//!     └──────────── Transitioning ◀──────action───────────┘
//! ```
//!
//! Each step before completion adds the frame delta to `elapsed` and writes
//! `lerp(from, to, elapsed)` into every material, then yields. The first step
//! that finds `elapsed >= TRANSITION_DURATION` runs the exit action instead:
//! flip `is_invisible`, snap materials to the terminal value, switch shadow
//! casting, clear `in_transition`.

use bevy_ecs::prelude::Component;

use crate::components::surfaces::{BodyRenderers, ShadowCasting};

/// Length of one transition in frame-clock seconds.
pub const TRANSITION_DURATION: f32 = 1.0;
/// Shader amount when fully invisible.
pub const INVISIBLE_AMOUNT: f32 = 0.9;
/// Shader amount when fully visible.
pub const VISIBLE_AMOUNT: f32 = 0.0;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub is_invisible: bool,
    /// True for the whole run of a transition. Checked before starting one.
    pub in_transition: bool,
}

/// Outcome of one scheduler tick of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// Materials updated, resume next tick.
    Running,
    /// Exit action ran; the task must be dropped.
    Finished,
}

/// In-flight transition task.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTransition {
    /// Accumulated frame time since the transition started.
    pub elapsed: f32,
    pub from: f32,
    pub to: f32,
}

impl VisibilityTransition {
    /// Entry action. Callers must check `state.in_transition` first.
    pub fn begin(state: &mut VisibilityState) -> Self {
        state.in_transition = true;
        let (from, to) = if state.is_invisible {
            (INVISIBLE_AMOUNT, VISIBLE_AMOUNT)
        } else {
            (VISIBLE_AMOUNT, INVISIBLE_AMOUNT)
        };
        Self {
            elapsed: 0.0,
            from,
            to,
        }
    }

    /// Interpolated amount for the current elapsed time.
    ///
    /// `elapsed` is not normalized or clamped while it accumulates; the factor
    /// is clamped here so a delta spike cannot push past the terminal value.
    pub fn amount(&self) -> f32 {
        let t = self.elapsed.clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    /// Advance by one frame tick.
    pub fn step(
        &mut self,
        dt: f32,
        state: &mut VisibilityState,
        renderers: &mut BodyRenderers,
        param: &str,
    ) -> TransitionStep {
        if self.elapsed < TRANSITION_DURATION {
            self.elapsed += dt.max(0.0);
            renderers.set_all_floats(param, self.amount());
            return TransitionStep::Running;
        }

        state.is_invisible = !state.is_invisible;
        if state.is_invisible {
            renderers.set_all_floats(param, INVISIBLE_AMOUNT);
            renderers.set_all_shadow_casting(ShadowCasting::Off);
        } else {
            renderers.set_all_floats(param, VISIBLE_AMOUNT);
            renderers.set_all_shadow_casting(ShadowCasting::On);
        }
        state.in_transition = false;
        TransitionStep::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAM: &str = "_InvisibilityAmount";
    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn run_to_end(
        task: &mut VisibilityTransition,
        state: &mut VisibilityState,
        renderers: &mut BodyRenderers,
        dt: f32,
    ) -> usize {
        let mut ticks = 0;
        loop {
            ticks += 1;
            if task.step(dt, state, renderers, PARAM) == TransitionStep::Finished {
                return ticks;
            }
            assert!(ticks < 1000, "transition never finished");
        }
    }

    #[test]
    fn test_begin_sets_in_transition_and_direction() {
        let mut state = VisibilityState::default();
        let task = VisibilityTransition::begin(&mut state);
        assert!(state.in_transition);
        assert!(approx_eq(task.from, VISIBLE_AMOUNT));
        assert!(approx_eq(task.to, INVISIBLE_AMOUNT));

        let mut state = VisibilityState {
            is_invisible: true,
            in_transition: false,
        };
        let task = VisibilityTransition::begin(&mut state);
        assert!(approx_eq(task.from, INVISIBLE_AMOUNT));
        assert!(approx_eq(task.to, VISIBLE_AMOUNT));
    }

    #[test]
    fn test_interpolates_every_material_each_tick() {
        let mut state = VisibilityState::default();
        let mut renderers = BodyRenderers::humanoid(PARAM);
        let mut task = VisibilityTransition::begin(&mut state);

        assert_eq!(
            task.step(0.5, &mut state, &mut renderers, PARAM),
            TransitionStep::Running
        );
        for v in renderers.floats(PARAM) {
            assert!(approx_eq(v.unwrap(), 0.45));
        }
        assert!(state.in_transition);
        assert!(!state.is_invisible);
    }

    #[test]
    fn test_exit_runs_on_tick_after_duration_reached() {
        let mut state = VisibilityState::default();
        let mut renderers = BodyRenderers::humanoid(PARAM);
        let mut task = VisibilityTransition::begin(&mut state);

        // 4 interpolating ticks reach elapsed == 1.0, the 5th exits.
        let ticks = run_to_end(&mut task, &mut state, &mut renderers, 0.25);
        assert_eq!(ticks, 5);
        assert!(state.is_invisible);
        assert!(!state.in_transition);
    }

    #[test]
    fn test_terminal_values_are_exact() {
        let mut state = VisibilityState::default();
        let mut renderers = BodyRenderers::humanoid(PARAM);

        let mut task = VisibilityTransition::begin(&mut state);
        run_to_end(&mut task, &mut state, &mut renderers, 0.016);
        assert!(renderers.floats(PARAM).iter().all(|v| *v == Some(0.9)));
        assert!(
            renderers
                .renderers
                .iter()
                .all(|r| r.shadow_casting == ShadowCasting::Off)
        );

        let mut task = VisibilityTransition::begin(&mut state);
        run_to_end(&mut task, &mut state, &mut renderers, 0.016);
        assert!(!state.is_invisible);
        assert!(renderers.floats(PARAM).iter().all(|v| *v == Some(0.0)));
        assert!(
            renderers
                .renderers
                .iter()
                .all(|r| r.shadow_casting == ShadowCasting::On)
        );
    }

    #[test]
    fn test_delta_spike_does_not_overshoot_before_snap() {
        let mut state = VisibilityState::default();
        let mut renderers = BodyRenderers::humanoid(PARAM);
        let mut task = VisibilityTransition::begin(&mut state);

        task.step(3.0, &mut state, &mut renderers, PARAM);
        assert!(task.elapsed > TRANSITION_DURATION);
        for v in renderers.floats(PARAM) {
            assert!(approx_eq(v.unwrap(), INVISIBLE_AMOUNT));
        }
        assert_eq!(
            task.step(0.016, &mut state, &mut renderers, PARAM),
            TransitionStep::Finished
        );
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut state = VisibilityState::default();
        let mut renderers = BodyRenderers::humanoid(PARAM);
        let mut task = VisibilityTransition::begin(&mut state);
        task.step(-1.0, &mut state, &mut renderers, PARAM);
        assert!(approx_eq(task.elapsed, 0.0));
    }
}
