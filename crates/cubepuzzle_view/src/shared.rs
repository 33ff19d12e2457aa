use std::sync::Arc;

use cubeprefs::Preferences;
use parking_lot::{Mutex, MutexGuard};

use crate::CubeSimulation;

/// Handle to a [`CubeSimulation`] shared between threads.
///
/// The queue producer (solver) and consumer (animator) both run under the
/// same lock, so they never interleave within one update.
#[derive(Debug, Default, Clone)]
pub struct SharedCubeSimulation(Arc<Mutex<CubeSimulation>>);
impl From<CubeSimulation> for SharedCubeSimulation {
    fn from(sim: CubeSimulation) -> Self {
        Self(Arc::new(Mutex::new(sim)))
    }
}
impl SharedCubeSimulation {
    /// Constructs a shared simulation of a solved cube.
    pub fn new(prefs: Preferences) -> Self {
        CubeSimulation::new(prefs).into()
    }

    /// Locks the simulation.
    pub fn lock(&self) -> MutexGuard<'_, CubeSimulation> {
        self.0.lock()
    }
}

#[cfg(test)]
mod tests {
    use cubepuzzle_core::ScrambleParams;
    use web_time::Duration;

    use super::*;
    use crate::RunMode;

    #[test]
    fn test_animate_on_another_thread() {
        let sim = SharedCubeSimulation::default();
        sim.lock().prefs_mut().animation.twist_duration = 0.0;
        sim.lock().start_scramble_with(ScrambleParams::with_seed(20, 11));

        let animator = std::thread::spawn({
            let sim = sim.clone();
            move || {
                while sim.lock().step(Duration::from_millis(16)) {}
            }
        });
        animator.join().unwrap();

        let mut sim = sim.lock();
        assert_eq!(sim.run_mode(), RunMode::Idle);
        assert!(!sim.is_move_in_flight());
        sim.start_solve();
        while sim.step(Duration::from_millis(16)) {}
        assert!(sim.state().is_solved());
    }
}
