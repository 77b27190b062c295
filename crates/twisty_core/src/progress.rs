use std::sync::atomic::{AtomicU32, Ordering};

/// Progress of a solve, readable from another thread while the solve runs.
///
/// The fraction only ever increases. It carries no correctness contract.
#[derive(Debug)]
pub struct SolveProgress {
    done: AtomicU32,
    total: AtomicU32,
}

impl Default for SolveProgress {
    fn default() -> Self {
        Self {
            done: AtomicU32::new(0),
            total: AtomicU32::new(1),
        }
    }
}

impl SolveProgress {
    /// Constructs a new `SolveProgress`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the progress as a fraction: completed phases / total phases.
    pub fn fraction(&self) -> (u32, u32) {
        (
            self.done.load(Ordering::Relaxed),
            self.total.load(Ordering::Relaxed),
        )
    }

    /// Returns the progress as a number between 0 and 1.
    pub fn value(&self) -> f32 {
        let (done, total) = self.fraction();
        if total == 0 {
            1.0
        } else {
            (done as f32 / total as f32).clamp(0.0, 1.0)
        }
    }

    /// Sets the number of phases in the solve.
    pub fn set_total(&self, total: u32) {
        self.total.store(total.max(1), Ordering::Relaxed);
    }

    /// Marks phases as complete. Progress never decreases.
    pub fn set_progress(&self, done: u32) {
        self.done.fetch_max(done, Ordering::Relaxed);
    }

    /// Marks one more phase as complete.
    pub fn advance(&self) {
        self.done.fetch_add(1, Ordering::Relaxed);
    }
}
