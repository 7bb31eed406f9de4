//! The machine state threaded through every iteration.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::outcome::Outcome;
use crate::transition::Transition;

/// The record a transition function receives and rebuilds, once per iteration.
///
/// A `State` carries the transition to invoke on the following iteration, the
/// opaque accumulator owned by the transition's contract, and the ordered
/// input not yet consumed. States are replaced, never mutated in place: each
/// application consumes the current state and produces a fresh outcome.
///
/// The `next` slot is how a transition names itself. When the engine applies
/// a transition, the state it hands over carries that very transition in
/// `next`, so continuing is a matter of putting the state back into
/// [`Outcome::Continue`], and handing control to a different transition is a
/// matter of swapping the slot first.
///
/// # Examples
///
/// ```rust
/// use rescan::{from_fn, Outcome, State};
///
/// let drain = from_fn(|mut st: State<u32, u32>| match st.items.pop_front() {
///     Some(item) => {
///         st.acc += item;
///         Outcome::Continue(st)
///     }
///     None => Outcome::Return(st.acc),
/// });
///
/// let state = State::new(drain, 0, [1, 2, 3]);
/// let after_one = state.advance().unwrap_continue();
/// assert_eq!(after_one.acc, 1);
/// assert_eq!(after_one.remaining(), 2);
/// ```
#[derive(Clone)]
pub struct State<S: 'static, T: 'static> {
    /// Transition to invoke on the following iteration.
    pub next: Rc<dyn Transition<S, T>>,
    /// Opaque accumulator; the engine hands it back unchanged on return.
    pub acc: S,
    /// Ordered input items not yet consumed.
    pub items: VecDeque<T>,
}

impl<S: 'static, T: 'static> State<S, T> {
    /// Create a machine state from a transition, an initial accumulator, and
    /// the input items.
    pub fn new(
        next: impl Transition<S, T> + 'static,
        acc: S,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        State {
            next: Rc::new(next),
            acc,
            items: items.into_iter().collect(),
        }
    }

    /// Apply the pending transition to this state.
    ///
    /// This is the single-application primitive everything else is built
    /// from: the transition stored in `next` is invoked on the state that
    /// carries it.
    pub fn advance(self) -> Outcome<S, T> {
        let next = Rc::clone(&self.next);
        next.apply(self)
    }

    /// Install a different transition for the following iteration.
    ///
    /// ```rust
    /// use rescan::{from_fn, run, Outcome, State};
    ///
    /// let finish = from_fn(|st: State<u32, u32>| Outcome::Return(st.acc + 100));
    /// let start = from_fn(move |st: State<u32, u32>| Outcome::Continue(st.handoff(finish.clone())));
    ///
    /// let result = run(start, 1, []).unwrap();
    /// assert_eq!(result, Some(101));
    /// ```
    pub fn handoff(mut self, next: impl Transition<S, T> + 'static) -> Self {
        self.next = Rc::new(next);
        self
    }

    /// Number of input items not yet consumed.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` once every input item has been consumed.
    pub fn is_drained(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: fmt::Debug + 'static, T: fmt::Debug + 'static> fmt::Debug for State<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("acc", &self.acc)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
