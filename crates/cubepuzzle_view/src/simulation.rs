use std::collections::VecDeque;
use std::fmt;

use cubeprefs::Preferences;
use cubepuzzle_core::cubemath::Axis;
use cubepuzzle_core::{CubeState, InvalidMove, Move, Piece, ScrambleParams};
use cubepuzzle_solver::{PhaseKind, SolverError, moves_for_phase, next_phase};
use web_time::Duration;

use crate::TwistAnimation;

/// Callback invoked whenever a move starts animating.
pub type MoveStartedHook = Box<dyn FnMut(Move) + Send>;

/// What the simulation is doing with its move queue.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RunMode {
    /// Only manual moves.
    #[default]
    Idle,
    /// Draining a scramble.
    Scrambling,
    /// Asking the solver for moves until the cube is solved.
    Solving,
}

/// State of the move driver.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DriverState {
    /// No move in flight and nothing to do.
    #[default]
    Idle,
    /// A move is in flight.
    AnimatingMove,
    /// Picking the next move, from the queue or the solver.
    ComputingNextPhase,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SimEvent {
    MoveCompleted,
    ModeChanged,
}

/// Cube simulation, which manages the cube state, the move queue, and the
/// animation of the move in flight.
///
/// Moves are applied to the cube state only once their animation completes.
pub struct CubeSimulation {
    /// Cube state, not including the move in flight.
    state: CubeState,
    /// Moves waiting to be animated.
    queue: VecDeque<Move>,
    mode: RunMode,
    driver: DriverState,
    twist_anim: TwistAnimation,

    /// Number of solver phases computed since the solve started.
    solver_rounds: usize,
    /// Most recent solver error.
    last_error: Option<SolverError>,

    on_move_started: Option<MoveStartedHook>,

    prefs: Preferences,
}
impl fmt::Debug for CubeSimulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CubeSimulation")
            .field("state", &self.state)
            .field("queue", &self.queue)
            .field("mode", &self.mode)
            .field("driver", &self.driver)
            .field("twist_anim", &self.twist_anim)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}
impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}
impl CubeSimulation {
    /// Constructs a simulation of a solved cube.
    pub fn new(prefs: Preferences) -> Self {
        Self {
            state: CubeState::new(),
            queue: VecDeque::new(),
            mode: RunMode::Idle,
            driver: DriverState::Idle,
            twist_anim: TwistAnimation::default(),

            solver_rounds: 0,
            last_error: None,

            on_move_started: None,

            prefs,
        }
    }

    /// Returns the preferences.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }
    /// Returns the preferences mutably.
    pub fn prefs_mut(&mut self) -> &mut Preferences {
        &mut self.prefs
    }
    /// Sets a callback to invoke whenever a move starts animating.
    pub fn set_on_move_started(&mut self, hook: impl FnMut(Move) + Send + 'static) {
        self.on_move_started = Some(Box::new(hook));
    }

    /// Returns the cube state, not including the move in flight.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns all pieces, for drawing.
    pub fn pieces(&self) -> &[Piece] {
        self.state.pieces()
    }
    /// Returns the moves waiting to be animated.
    pub fn queue(&self) -> &VecDeque<Move> {
        &self.queue
    }
    /// Returns the run mode.
    pub fn run_mode(&self) -> RunMode {
        self.mode
    }
    /// Returns the state of the move driver.
    pub fn driver_state(&self) -> DriverState {
        self.driver
    }
    /// Returns the most recent solver error, which stopped the last solve.
    pub fn last_error(&self) -> Option<&SolverError> {
        self.last_error.as_ref()
    }

    /// Returns whether a move is being animated.
    pub fn is_move_in_flight(&self) -> bool {
        self.twist_anim.is_animating()
    }
    /// Returns the move being animated and its interpolated progress from 0.0
    /// to 1.0.
    pub fn current_move(&self) -> Option<(Move, f32)> {
        let (m, t) = self.twist_anim.current()?;
        Some((m, self.prefs.animation.twist_interpolation.interpolate(t)))
    }

    /// Advances the animation by `delta`, completing the move in flight if its
    /// animation finishes. Returns whether the cube must be redrawn.
    pub fn step(&mut self, delta: Duration) -> bool {
        if !self.is_move_in_flight() {
            return false;
        }
        if self.twist_anim.proceed(delta, &self.prefs.animation) {
            self.notify_move_complete();
        }
        true
    }

    /// Applies the move in flight to the cube state and starts the next one.
    /// Does nothing if no move is in flight.
    pub fn notify_move_complete(&mut self) {
        if self.is_move_in_flight() {
            self.handle_event(SimEvent::MoveCompleted);
        }
    }

    /// Completes moves until no move is in flight or `max_moves` moves have
    /// completed. Returns the number of moves completed.
    pub fn run_until_idle(&mut self, max_moves: usize) -> usize {
        let mut count = 0;
        while count < max_moves && self.is_move_in_flight() {
            self.notify_move_complete();
            count += 1;
        }
        count
    }

    /// Starts a manual move. Does nothing if a move is already in flight.
    pub fn request_move(
        &mut self,
        axis: Axis,
        offset: i32,
        direction: i32,
    ) -> Result<(), InvalidMove> {
        let m = Move::try_new(axis, offset, direction)?;
        self.request(m);
        Ok(())
    }
    /// Starts a manual move. Does nothing if a move is already in flight.
    pub fn request(&mut self, m: Move) {
        if self.is_move_in_flight() {
            log::trace!("ignoring {m} because a move is in flight");
            return;
        }
        self.start_move(m);
    }

    /// Scrambles the cube with `length` random moves, using the seed from
    /// the preferences if there is one.
    pub fn start_scramble(&mut self, length: u32) {
        let params = match self.prefs.scramble.seed {
            Some(seed) => ScrambleParams::with_seed(length, seed),
            None => ScrambleParams::new(length),
        };
        self.start_scramble_with(params);
    }
    /// Scrambles the cube.
    pub fn start_scramble_with(&mut self, params: ScrambleParams) {
        log::info!("scrambling with {params:?}");
        self.queue.clear();
        self.queue.extend(params.generate());
        self.set_mode(RunMode::Scrambling);
    }
    /// Solves the cube.
    pub fn start_solve(&mut self) {
        log::info!("solving");
        self.queue.clear();
        self.solver_rounds = 0;
        self.last_error = None;
        self.set_mode(RunMode::Solving);
    }
    /// Clears the queue and stops scrambling or solving. The move in flight
    /// still completes.
    pub fn stop(&mut self) {
        self.queue.clear();
        self.set_mode(RunMode::Idle);
    }

    fn set_mode(&mut self, mode: RunMode) {
        if self.mode != mode {
            log::debug!("run mode {:?} -> {mode:?}", self.mode);
        }
        self.mode = mode;
        self.handle_event(SimEvent::ModeChanged);
    }

    fn handle_event(&mut self, event: SimEvent) {
        match (self.driver, event) {
            (DriverState::AnimatingMove, SimEvent::MoveCompleted) => {
                if let Some(m) = self.twist_anim.finish(self.queue.len()) {
                    self.state.apply_move(m);
                }
                self.driver = DriverState::ComputingNextPhase;
            }
            // The move in flight finishes before the new mode takes effect.
            (DriverState::AnimatingMove, SimEvent::ModeChanged) => return,
            (_, SimEvent::ModeChanged) => self.driver = DriverState::ComputingNextPhase,
            (_, SimEvent::MoveCompleted) => {
                log::warn!("move completed while driver is {:?}", self.driver);
                return;
            }
        }

        while self.driver == DriverState::ComputingNextPhase {
            self.driver = self.advance();
        }
    }

    /// Starts the next move, if there is one, and returns the new driver
    /// state.
    fn advance(&mut self) -> DriverState {
        match self.mode {
            RunMode::Idle => {
                self.queue.clear();
                DriverState::Idle
            }

            RunMode::Scrambling => match self.queue.pop_front() {
                Some(m) => self.start_move(m),
                None => {
                    log::info!("scramble finished");
                    self.mode = RunMode::Idle;
                    DriverState::Idle
                }
            },

            RunMode::Solving => {
                if let Some(m) = self.queue.pop_front() {
                    return self.start_move(m);
                }
                match self.queue_next_phase() {
                    Ok(true) => DriverState::ComputingNextPhase,
                    Ok(false) => {
                        log::info!("cube solved");
                        self.mode = RunMode::Idle;
                        DriverState::Idle
                    }
                    Err(e) => {
                        log::error!("error solving cube: {e}");
                        self.last_error = Some(e);
                        self.mode = RunMode::Idle;
                        DriverState::Idle
                    }
                }
            }
        }
    }

    /// Queues moves for the next phase. Returns `false` if the cube is solved.
    fn queue_next_phase(&mut self) -> Result<bool, SolverError> {
        let phase = next_phase(&self.state);
        if phase.kind() == PhaseKind::Complete {
            return Ok(false);
        }

        let max_rounds = self.prefs.solver.max_rounds;
        if self.solver_rounds >= max_rounds {
            return Err(SolverError::RoundLimit(max_rounds));
        }
        self.solver_rounds += 1;

        let moves = moves_for_phase(&self.state, &phase)?;
        log::debug!("phase {phase}: {} moves", moves.len());
        self.queue.extend(moves);
        Ok(true)
    }

    fn start_move(&mut self, m: Move) -> DriverState {
        log::trace!("starting {m}");
        self.twist_anim.start(m, self.queue.len());
        if let Some(hook) = &mut self.on_move_started {
            hook(m);
        }
        self.driver = DriverState::AnimatingMove;
        DriverState::AnimatingMove
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_stop_twice() {
        let mut sim = CubeSimulation::default();
        sim.start_scramble_with(ScrambleParams::with_seed(20, 3));
        assert_eq!(sim.run_mode(), RunMode::Scrambling);
        assert_eq!(sim.queue().len(), 19);

        sim.stop();
        assert!(sim.queue().is_empty());
        assert_eq!(sim.run_mode(), RunMode::Idle);
        sim.stop();
        assert!(sim.queue().is_empty());
        assert_eq!(sim.run_mode(), RunMode::Idle);

        // The move in flight still completes.
        assert!(sim.is_move_in_flight());
        assert_eq!(sim.run_until_idle(100), 1);
        assert_eq!(sim.driver_state(), DriverState::Idle);
    }

    #[test]
    fn test_request_while_in_flight_is_ignored() {
        let mut sim = CubeSimulation::default();
        sim.request_move(Axis::X, 1, 1).unwrap();
        let before = sim.current_move();
        let queue = sim.queue().clone();

        sim.request_move(Axis::Y, -1, -1).unwrap();
        assert_eq!(sim.current_move(), before);
        assert_eq!(*sim.queue(), queue);

        sim.notify_move_complete();
        assert!(!sim.is_move_in_flight());
        assert_eq!(
            *sim.state(),
            CubeState::new().with_moves([Move::new(Axis::X, 1, 1)]),
        );
    }

    #[test]
    fn test_invalid_request() {
        let mut sim = CubeSimulation::default();
        assert_eq!(
            sim.request_move(Axis::Z, 0, 1),
            Err(InvalidMove::BadOffset(0)),
        );
        assert!(!sim.is_move_in_flight());
    }

    #[test]
    fn test_notify_without_move_is_ignored() {
        let mut sim = CubeSimulation::default();
        sim.notify_move_complete();
        assert_eq!(sim.driver_state(), DriverState::Idle);
        assert!(sim.state().is_solved());
    }

    #[test]
    fn test_scramble_then_solve() {
        for seed in 0..100 {
            let mut sim = CubeSimulation::default();
            sim.start_scramble_with(ScrambleParams::with_seed(20, seed));
            assert_eq!(sim.run_until_idle(usize::MAX), 20);
            assert_eq!(sim.run_mode(), RunMode::Idle);
            assert_eq!(
                *sim.state(),
                CubeState::new().with_moves(ScrambleParams::with_seed(20, seed).generate()),
            );

            sim.start_solve();
            sim.run_until_idle(usize::MAX);
            assert!(sim.state().is_solved(), "seed {seed}");
            assert_eq!(sim.run_mode(), RunMode::Idle);
            assert_eq!(sim.driver_state(), DriverState::Idle);
            assert_eq!(sim.last_error(), None);
        }
    }

    #[test]
    fn test_start_scramble_uses_seed_from_prefs() {
        let mut sim = CubeSimulation::default();
        sim.prefs_mut().scramble.seed = Some(21);
        sim.start_scramble(15);
        assert_eq!(sim.run_mode(), RunMode::Scrambling);
        assert_eq!(sim.run_until_idle(usize::MAX), 15);
        assert_eq!(
            *sim.state(),
            CubeState::new().with_moves(ScrambleParams::with_seed(15, 21).generate()),
        );
    }

    #[test]
    fn test_solve_solved_cube() {
        let mut sim = CubeSimulation::default();
        sim.start_solve();
        assert!(!sim.is_move_in_flight());
        assert_eq!(sim.run_mode(), RunMode::Idle);
    }

    #[test]
    fn test_solver_round_limit() {
        let mut sim = CubeSimulation::default();
        sim.prefs_mut().solver.max_rounds = 1;
        sim.start_scramble_with(ScrambleParams::with_seed(20, 1));
        sim.run_until_idle(usize::MAX);

        sim.start_solve();
        sim.run_until_idle(usize::MAX);
        assert_eq!(sim.last_error(), Some(&SolverError::RoundLimit(1)));
        assert_eq!(sim.run_mode(), RunMode::Idle);
        assert_eq!(sim.driver_state(), DriverState::Idle);
    }

    #[test]
    fn test_step_animates_moves() {
        let mut sim = CubeSimulation::default();
        sim.prefs_mut().animation.twist_duration = 1.0;
        sim.start_scramble_with(ScrambleParams::with_seed(2, 5));

        assert!(sim.step(Duration::from_millis(250)));
        let (_, t) = sim.current_move().unwrap();
        assert!(0.0 < t && t < 1.0);
        assert_eq!(sim.queue().len(), 1);

        // At most one move completes per step.
        assert!(sim.step(Duration::from_secs(10)));
        assert_eq!(sim.queue().len(), 0);
        assert!(sim.is_move_in_flight());
        assert!(sim.step(Duration::from_secs(10)));
        assert!(!sim.is_move_in_flight());
        assert!(!sim.step(Duration::from_secs(10)));
    }

    #[test]
    fn test_move_started_hook() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut sim = CubeSimulation::default();
        sim.set_on_move_started({
            let count = Arc::clone(&count);
            move |_| {
                count.fetch_add(1, Ordering::Relaxed);
            }
        });
        sim.start_scramble_with(ScrambleParams::with_seed(12, 9));
        sim.run_until_idle(usize::MAX);
        assert_eq!(count.load(Ordering::Relaxed), 12);
    }

    #[test]
    fn test_mode_change_waits_for_move_in_flight() {
        let mut sim = CubeSimulation::default();
        sim.request_move(Axis::Y, 1, 1).unwrap();
        sim.start_solve();
        assert_eq!(sim.driver_state(), DriverState::AnimatingMove);
        assert_eq!(
            sim.current_move().map(|(m, _)| m),
            Some(Move::new(Axis::Y, 1, 1)),
        );

        sim.notify_move_complete();
        sim.run_until_idle(usize::MAX);
        assert!(sim.state().is_solved());
    }
}
