//! The iteration engine entry point.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::driver::{drive, total_capacity};
use crate::error::MachineError;
use crate::state::State;
use crate::transition::Transition;

/// Machine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Highest rescan-ladder level the driver may escalate to.
    ///
    /// The default of 9 gives a combined budget of 2046 transition
    /// applications. Raising the ceiling doubles the budget per level.
    #[serde(default = "default_max_level")]
    pub max_level: u8,
}

fn default_max_level() -> u8 {
    9
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            max_level: default_max_level(),
        }
    }
}

impl MachineConfig {
    /// Total transition applications available before a run fails with
    /// [`MachineError::IterationLimitReached`]: `2^(max_level + 2) - 2`.
    pub fn total_capacity(&self) -> u64 {
        total_capacity(self.max_level)
    }
}

/// The iteration engine.
///
/// Wires an initial accumulator, a transition function, and the input items
/// into a machine state, hands it to the escalating driver, and unwraps the
/// terminal outcome: a silent exit becomes `None`, a value return becomes
/// `Some(accumulator)`.
///
/// # Examples
///
/// ```rust
/// use rescan::{from_fn, Machine, MachineConfig, Outcome, State};
///
/// let machine = Machine::with_config(MachineConfig { max_level: 4 });
/// assert_eq!(machine.config().total_capacity(), 62);
///
/// let drain = from_fn(|mut st: State<u32, u32>| match st.items.pop_front() {
///     Some(item) => {
///         st.acc += item;
///         Outcome::Continue(st)
///     }
///     None => Outcome::Return(st.acc),
/// });
/// assert_eq!(machine.run(drain, 0, [1, 2, 3]).unwrap(), Some(6));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Machine {
    config: MachineConfig,
}

impl Machine {
    /// Create a machine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a machine with an explicit configuration.
    pub fn with_config(config: MachineConfig) -> Self {
        Machine { config }
    }

    /// This machine's configuration.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Apply `transition` repeatedly to the evolving machine state until it
    /// emits a terminal outcome.
    ///
    /// Returns `Ok(None)` for a silent exit, `Ok(Some(acc))` for a value
    /// return, and [`MachineError::IterationLimitReached`] if the loop is
    /// still unfinished when the ceiling level runs dry.
    pub fn run<S, T>(
        &self,
        transition: impl Transition<S, T> + 'static,
        initial: S,
        items: impl IntoIterator<Item = T>,
    ) -> Result<Option<S>, MachineError>
    where
        S: 'static,
        T: 'static,
    {
        let state = State::new(transition, initial, items);
        debug!(
            items = state.remaining(),
            max_level = self.config.max_level,
            "starting machine run"
        );
        drive(state, self.config.max_level)
    }
}

/// Run a transition under the default configuration.
///
/// Shorthand for [`Machine::new().run(..)`](Machine::run), the most common
/// entry point.
///
/// ```rust
/// use rescan::{from_fn, run, Outcome, State};
///
/// let collect = from_fn(|mut st: State<Vec<u32>, u32>| match st.items.pop_front() {
///     Some(item) => {
///         st.acc.push(item);
///         Outcome::Continue(st)
///     }
///     None => Outcome::Return(st.acc),
/// });
///
/// let result = run(collect, Vec::new(), [1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(result, Some(vec![1, 2, 3, 4, 5]));
/// ```
pub fn run<S, T>(
    transition: impl Transition<S, T> + 'static,
    initial: S,
    items: impl IntoIterator<Item = T>,
) -> Result<Option<S>, MachineError>
where
    S: 'static,
    T: 'static,
{
    Machine::new().run(transition, initial, items)
}
