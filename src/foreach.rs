//! Per-item iteration built on top of the engine.

use crate::error::MachineError;
use crate::machine::run;
use crate::outcome::Outcome;
use crate::state::State;
use crate::transition::from_fn;

/// Apply `f` to every item in order, collecting the outputs.
///
/// This is the machine's convenience loop: a transition that consumes one
/// item per application and returns the accumulated outputs once the input
/// is drained. Runs under the default configuration, so the input may hold
/// at most one item fewer than the configured capacity; longer inputs fail
/// with [`MachineError::IterationLimitReached`].
///
/// # Examples
///
/// ```rust
/// use rescan::for_each;
///
/// let squares = for_each(|n: u32| n * n, [1, 2, 3, 4]).unwrap();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
///
/// let nothing = for_each(|n: u32| n, []).unwrap();
/// assert!(nothing.is_empty());
/// ```
pub fn for_each<T, O, F>(
    f: F,
    items: impl IntoIterator<Item = T>,
) -> Result<Vec<O>, MachineError>
where
    T: 'static,
    O: 'static,
    F: Fn(T) -> O + 'static,
{
    let iterate = from_fn(move |mut st: State<Vec<O>, T>| match st.items.pop_front() {
        Some(item) => {
            st.acc.push(f(item));
            Outcome::Continue(st)
        }
        None => Outcome::Return(st.acc),
    });
    run(iterate, Vec::new(), items).map(Option::unwrap_or_default)
}
