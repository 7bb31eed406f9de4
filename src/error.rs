//! Machine error types

use thiserror::Error;

/// Errors produced by a machine run.
///
/// Reaching the iteration ceiling is the machine's only failure mode: a
/// transition that never emits a terminal outcome exhausts every rescan
/// level and the run reports how much capacity it burned through. Anything
/// else a transition can express is a well-formed outcome, so there is
/// nothing to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The escalating driver exhausted its ceiling level while the loop was
    /// still unfinished.
    #[error(
        "iteration limit reached: {iterations} transition applications exhausted at ceiling level {max_level}"
    )]
    IterationLimitReached {
        /// Total transition applications performed before giving up.
        iterations: u64,
        /// The ladder level at which the driver stopped escalating.
        max_level: u8,
    },
}

impl MachineError {
    /// Check if this is an iteration limit error.
    pub fn is_iteration_limit(&self) -> bool {
        matches!(self, MachineError::IterationLimitReached { .. })
    }

    /// The number of transition applications performed before the run failed.
    pub fn iterations(&self) -> u64 {
        match self {
            MachineError::IterationLimitReached { iterations, .. } => *iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_iteration_limit() {
        let err = MachineError::IterationLimitReached {
            iterations: 2046,
            max_level: 9,
        };
        assert!(err.is_iteration_limit());
        assert_eq!(err.iterations(), 2046);
    }

    #[test]
    fn test_display_names_the_limit() {
        let err = MachineError::IterationLimitReached {
            iterations: 30,
            max_level: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("iteration limit reached"));
        assert!(msg.contains("30"));
        assert!(msg.contains("level 3"));
    }
}
