//! Single-axis motion controller.

use crate::config::calibration::steps_for_angle;
use crate::config::units::Degrees;
use crate::config::MotionParameters;
use crate::error::PlanError;
use crate::motion::{sequencer, MotionPhase, MotionPlan, MotionState, TickOutcome};

use super::timer::StepTimer;

/// Owner of all motion state for one axis.
///
/// `plan_move` runs once per move from command context; `on_tick` runs once
/// per timing-source event. The two must not race: `plan_move` refuses to
/// start while a move is active, so the tick handler remains the sole
/// mutator of [`MotionState`] mid-move. Use [`abort_move`](Self::abort_move)
/// to preempt.
///
/// # Example
///
/// ```rust,ignore
/// use step_ramp::{MotionController, MotionParameters, TickOutcome};
///
/// let mut controller = MotionController::new(params, timer);
/// controller.plan_move_degrees(Degrees::new(18.0))?;
///
/// // From the timer interrupt:
/// if controller.on_tick() == TickOutcome::Complete {
///     // move finished
/// }
/// ```
pub struct MotionController<TIMER: StepTimer> {
    /// Kinematic parameters, read-only during a move.
    parameters: MotionParameters,

    /// Plan for the active (or last completed) move.
    plan: Option<MotionPlan>,

    /// State mutated by the tick handler.
    state: MotionState,

    /// The external timing source.
    timer: TIMER,
}

impl<TIMER: StepTimer> MotionController<TIMER> {
    /// Create an idle controller.
    pub fn new(parameters: MotionParameters, timer: TIMER) -> Self {
        Self {
            parameters,
            plan: None,
            state: MotionState::idle(),
            timer,
        }
    }

    /// Plan a move of `requested_steps` steps and arm the timing source
    /// with the first period.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Busy`] while a move is active and
    /// [`PlanError::InvalidMove`] for a non-positive step count, bad
    /// kinematic parameters, or a degenerate deceleration phase. No state
    /// is mutated on any error path.
    pub fn plan_move(&mut self, requested_steps: i32) -> Result<(), PlanError> {
        if self.state.is_active() {
            return Err(PlanError::Busy {
                phase: self.state.phase,
            });
        }

        let plan = MotionPlan::compute(&self.parameters, requested_steps)?;

        let period = plan.initial_period as u32;
        self.timer.arm(period, period / 2);

        self.state = MotionState::start_of(&plan);
        self.plan = Some(plan);
        Ok(())
    }

    /// Plan a move by angular displacement, converted through the
    /// mechanical step angle.
    pub fn plan_move_degrees(&mut self, angle: Degrees) -> Result<(), PlanError> {
        self.plan_move(steps_for_angle(angle))
    }

    /// Handle one timing-source event.
    ///
    /// Advances the sequencer, reprograms the timing source with the next
    /// period on [`TickOutcome::Continue`], and disarms it on the
    /// transition to Done. A tick with no active move returns
    /// [`TickOutcome::Complete`] without touching the timer.
    pub fn on_tick(&mut self) -> TickOutcome {
        let Some(plan) = self.plan.as_ref() else {
            return TickOutcome::Complete;
        };

        if self.state.phase == MotionPhase::Done {
            return TickOutcome::Complete;
        }

        match sequencer::advance(plan, &mut self.state) {
            TickOutcome::Continue(period) => {
                self.timer.reprogram(period, period / 2);
                TickOutcome::Continue(period)
            }
            TickOutcome::Complete => {
                self.timer.disarm();
                TickOutcome::Complete
            }
        }
    }

    /// Cancel any move in progress: disarm the timing source and force the
    /// state back to Idle. Always safe; a subsequent
    /// [`plan_move`](Self::plan_move) succeeds immediately.
    pub fn abort_move(&mut self) {
        self.timer.disarm();
        self.state = MotionState::idle();
        self.plan = None;
    }

    /// Read-only snapshot of the current motion state.
    #[inline]
    pub fn current_state(&self) -> MotionState {
        self.state
    }

    /// The plan of the active (or last completed) move.
    #[inline]
    pub fn plan(&self) -> Option<&MotionPlan> {
        self.plan.as_ref()
    }

    /// The configured kinematic parameters.
    #[inline]
    pub fn parameters(&self) -> &MotionParameters {
        &self.parameters
    }

    /// Replace the kinematic parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Busy`] while a move is active.
    pub fn set_parameters(&mut self, parameters: MotionParameters) -> Result<(), PlanError> {
        if self.state.is_active() {
            return Err(PlanError::Busy {
                phase: self.state.phase,
            });
        }
        self.parameters = parameters;
        Ok(())
    }

    /// Progress of the active move (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        match &self.plan {
            Some(plan) if plan.total_steps > 0 => {
                self.state.steps_executed as f32 / plan.total_steps as f32
            }
            _ => 1.0,
        }
    }

    /// Borrow the timing source.
    #[inline]
    pub fn timer(&self) -> &TIMER {
        &self.timer
    }

    /// Consume the controller and release the timing source.
    pub fn release(self) -> TIMER {
        self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{StepsPerSec, StepsPerSecSquared};

    /// Timer fake counting calls; scripted assertions live in the
    /// integration tests.
    #[derive(Debug, Default)]
    struct CountingTimer {
        armed: bool,
        arms: u32,
        reprograms: u32,
        disarms: u32,
    }

    impl StepTimer for CountingTimer {
        fn arm(&mut self, _period: u32, _compare: u32) {
            self.armed = true;
            self.arms += 1;
        }

        fn reprogram(&mut self, _period: u32, _compare: u32) {
            self.reprograms += 1;
        }

        fn disarm(&mut self) {
            self.armed = false;
            self.disarms += 1;
        }
    }

    fn make_controller() -> MotionController<CountingTimer> {
        let params = MotionParameters::new(
            StepsPerSecSquared::new(0.5),
            StepsPerSecSquared::new(0.5),
            StepsPerSec::new(20.0),
        );
        MotionController::new(params, CountingTimer::default())
    }

    #[test]
    fn test_plan_move_arms_timer() {
        let mut controller = make_controller();
        controller.plan_move(10).unwrap();

        assert!(controller.timer().armed);
        assert_eq!(controller.timer().arms, 1);
        assert_eq!(controller.current_state().phase, MotionPhase::Accelerating);
        assert_eq!(controller.current_state().steps_executed, 1);
    }

    #[test]
    fn test_second_plan_move_is_busy() {
        let mut controller = make_controller();
        controller.plan_move(10).unwrap();
        let before = controller.current_state();

        let result = controller.plan_move(20);
        assert_eq!(
            result,
            Err(PlanError::Busy {
                phase: MotionPhase::Accelerating
            })
        );
        // In-progress state untouched
        assert_eq!(controller.current_state(), before);
        assert_eq!(controller.plan().unwrap().total_steps, 10);
    }

    #[test]
    fn test_invalid_move_leaves_idle() {
        let mut controller = make_controller();
        assert!(controller.plan_move(0).is_err());

        assert_eq!(controller.current_state().phase, MotionPhase::Idle);
        assert!(!controller.timer().armed);
        assert!(controller.plan().is_none());
    }

    #[test]
    fn test_run_to_completion_disarms_once() {
        let mut controller = make_controller();
        controller.plan_move(10).unwrap();

        let mut completions = 0;
        for _ in 0..10 {
            if controller.on_tick() == TickOutcome::Complete {
                completions += 1;
            }
        }

        assert_eq!(completions, 1);
        assert_eq!(controller.current_state().phase, MotionPhase::Done);
        assert_eq!(controller.current_state().steps_executed, 10);
        assert_eq!(controller.timer().disarms, 1);
        // 9 Continue ticks, each reprogramming the next period
        assert_eq!(controller.timer().reprograms, 9);
    }

    #[test]
    fn test_ticks_after_done_do_not_touch_timer() {
        let mut controller = make_controller();
        controller.plan_move(3).unwrap();
        while controller.on_tick() != TickOutcome::Complete {}

        let disarms = controller.timer().disarms;
        assert_eq!(controller.on_tick(), TickOutcome::Complete);
        assert_eq!(controller.on_tick(), TickOutcome::Complete);
        assert_eq!(controller.timer().disarms, disarms);
    }

    #[test]
    fn test_plan_move_allowed_after_done() {
        let mut controller = make_controller();
        controller.plan_move(3).unwrap();
        while controller.on_tick() != TickOutcome::Complete {}

        assert!(controller.plan_move(5).is_ok());
        assert_eq!(controller.current_state().phase, MotionPhase::Accelerating);
    }

    #[test]
    fn test_abort_mid_move() {
        let mut controller = make_controller();
        controller.plan_move(10).unwrap();
        for _ in 0..3 {
            controller.on_tick();
        }

        controller.abort_move();
        assert_eq!(controller.current_state().phase, MotionPhase::Idle);
        assert!(!controller.timer().armed);
        assert!(controller.plan().is_none());

        // Not Busy after abort
        assert!(controller.plan_move(10).is_ok());
    }

    #[test]
    fn test_spurious_tick_when_idle() {
        let mut controller = make_controller();
        assert_eq!(controller.on_tick(), TickOutcome::Complete);
        assert_eq!(controller.timer().disarms, 0);
        assert_eq!(controller.timer().reprograms, 0);
    }

    #[test]
    fn test_set_parameters_rejected_mid_move() {
        let mut controller = make_controller();
        let params = *controller.parameters();
        controller.plan_move(10).unwrap();

        assert!(controller.set_parameters(params).is_err());
        controller.abort_move();
        assert!(controller.set_parameters(params).is_ok());
    }

    #[test]
    fn test_bad_calibration_never_arms_timer() {
        let mut controller = make_controller();
        let mut params = *controller.parameters();
        params.ramp_constant = -6280.0;
        controller.set_parameters(params).unwrap();

        assert_eq!(
            controller.plan_move(10),
            Err(PlanError::InvalidMove(
                crate::error::InvalidMoveReason::NonPositiveRampConstant(-6280.0)
            ))
        );
        assert_eq!(controller.current_state().phase, MotionPhase::Idle);
        assert!(!controller.timer().armed);
        assert_eq!(controller.timer().arms, 0);
        assert!(controller.plan().is_none());
    }

    #[test]
    fn test_plan_move_degrees() {
        let mut controller = make_controller();
        controller.plan_move_degrees(Degrees::new(18.0)).unwrap();

        // 18 degrees at 1.8 degrees/step
        assert_eq!(controller.plan().unwrap().total_steps, 10);
    }

    #[test]
    fn test_progress() {
        let mut controller = make_controller();
        assert!((controller.progress() - 1.0).abs() < f32::EPSILON);

        controller.plan_move(10).unwrap();
        for _ in 0..4 {
            controller.on_tick();
        }
        assert!((controller.progress() - 0.5).abs() < f32::EPSILON);
    }
}
