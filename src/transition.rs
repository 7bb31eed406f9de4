//! The transition function contract.
//!
//! This module defines the [`Transition`] trait, the shape every
//! user-supplied step function must satisfy, plus the [`from_fn`] closure
//! wrapper and forwarding implementations that let transitions be shared,
//! boxed, or selected conditionally.
//!
//! # The contract
//!
//! A transition receives a whole [`State`] (including itself in the `next`
//! slot) and must produce an [`Outcome`]: a new well-formed state to keep
//! iterating, or one of the two terminal forms. It must be free of
//! observable side effects and do bounded, finite work per application; the
//! engine supplies all repetition.
//!
//! ```rust
//! use rescan::{from_fn, Outcome, State};
//!
//! // Consume one item per application, return once drained.
//! let echo = from_fn(|mut st: State<Vec<u8>, u8>| match st.items.pop_front() {
//!     Some(item) => {
//!         st.acc.push(item);
//!         Outcome::Continue(st)
//!     }
//!     None => Outcome::Return(st.acc),
//! });
//! ```

use std::rc::Rc;

use either::Either;

use crate::outcome::Outcome;
use crate::state::State;

/// One pure rewrite step of the machine.
///
/// Implemented for closures via [`from_fn`], and forwarded through `Rc`,
/// `Box`, shared references, and [`either::Either`], so a transition can be
/// stored in a [`State`]'s `next` slot, cheaply cloned across iterations, or
/// chosen between two alternatives at wiring time.
pub trait Transition<S: 'static, T: 'static> {
    /// Apply this transition to a machine state, producing the next outcome.
    fn apply(&self, state: State<S, T>) -> Outcome<S, T>;
}

/// A transition built from a closure. Created by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

impl<S, T, F> Transition<S, T> for FromFn<F>
where
    S: 'static,
    T: 'static,
    F: Fn(State<S, T>) -> Outcome<S, T>,
{
    fn apply(&self, state: State<S, T>) -> Outcome<S, T> {
        (self.0)(state)
    }
}

/// Create a transition from a closure.
///
/// ```rust
/// use rescan::{from_fn, Outcome, State};
///
/// let halve = from_fn(|mut st: State<u32, u32>| {
///     if st.acc <= 1 {
///         Outcome::Return(st.acc)
///     } else {
///         st.acc /= 2;
///         Outcome::Continue(st)
///     }
/// });
///
/// let state = State::new(halve, 8, []);
/// assert_eq!(state.advance().unwrap_continue().acc, 4);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<S, T, C> Transition<S, T> for Rc<C>
where
    S: 'static,
    T: 'static,
    C: Transition<S, T> + ?Sized,
{
    fn apply(&self, state: State<S, T>) -> Outcome<S, T> {
        (**self).apply(state)
    }
}

impl<S, T, C> Transition<S, T> for Box<C>
where
    S: 'static,
    T: 'static,
    C: Transition<S, T> + ?Sized,
{
    fn apply(&self, state: State<S, T>) -> Outcome<S, T> {
        (**self).apply(state)
    }
}

impl<S, T, C> Transition<S, T> for &'_ C
where
    S: 'static,
    T: 'static,
    C: Transition<S, T> + ?Sized,
{
    fn apply(&self, state: State<S, T>) -> Outcome<S, T> {
        (**self).apply(state)
    }
}

/// Conditional selection between two transitions.
///
/// The machine has no branching of its own; picking a behavior is done by
/// wiring in one side of an `Either` before the run starts, or by a
/// transition handing off to one of two successors.
///
/// ```rust
/// use either::Either;
/// use rescan::{from_fn, run, Outcome, State};
///
/// let count = from_fn(|mut st: State<u32, u32>| match st.items.pop_front() {
///     Some(_) => {
///         st.acc += 1;
///         Outcome::Continue(st)
///     }
///     None => Outcome::Return(st.acc),
/// });
/// let discard = from_fn(|_: State<u32, u32>| Outcome::Exit);
///
/// let keep_result = true;
/// let picked = if keep_result {
///     Either::Left(count)
/// } else {
///     Either::Right(discard)
/// };
/// assert_eq!(run(picked, 0, [10, 20, 30]).unwrap(), Some(3));
/// ```
impl<S, T, L, R> Transition<S, T> for Either<L, R>
where
    S: 'static,
    T: 'static,
    L: Transition<S, T>,
    R: Transition<S, T>,
{
    fn apply(&self, state: State<S, T>) -> Outcome<S, T> {
        match self {
            Either::Left(l) => l.apply(state),
            Either::Right(r) => r.apply(state),
        }
    }
}
