//! # Rescan: Bounded Continuation-Machine Iteration
//!
//! Apply a pure transition function repeatedly to an evolving machine state
//! until it signals termination, with the repetition budget granted through
//! an escalating ladder of doubling rescan levels.
//!
//! ## Core Pieces
//!
//! - **[`State<S, T>`]**: the record threaded through every iteration: the
//!   transition to invoke next, an opaque accumulator, and the input items
//!   not yet consumed
//! - **[`Transition<S, T>`]**: one pure rewrite step, `State -> Outcome`
//! - **[`Outcome<S, T>`]**: `Continue` with a successor state, or one of two
//!   terminal forms: `Exit` (the run produces nothing) and `Return` (the
//!   run produces the final accumulator)
//!
//! ## Example
//!
//! ```rust
//! use rescan::{from_fn, run, Outcome, State};
//!
//! // Append each item to an output list; return the list once drained.
//! let collect = from_fn(|mut st: State<Vec<u32>, u32>| match st.items.pop_front() {
//!     Some(item) => {
//!         st.acc.push(item);
//!         Outcome::Continue(st)
//!     }
//!     None => Outcome::Return(st.acc),
//! });
//!
//! let result = run(collect, Vec::new(), [1, 2, 3, 4, 5]).unwrap();
//! assert_eq!(result, Some(vec![1, 2, 3, 4, 5]));
//! ```
//!
//! ## How It Works
//!
//! A ladder level `n` applies the transition once and feeds the result
//! through two nested copies of level `n - 1`, giving it a statically-built
//! budget of `2^(n+1) - 1` chained applications. The driver starts at level
//! 0 and escalates one level at a time, doubling capacity only when the
//! previous level ran dry with the loop still unfinished; a run that
//! terminates after `k` applications therefore costs `O(k)` total work and
//! `O(log k)` escalation steps, and the ladder level a result lands in is
//! invisible to the caller.
//!
//! ## Termination
//!
//! Iteration ends in one of three ways:
//!
//! - [`Outcome::Exit`]: the run expands to nothing; [`run`] yields
//!   `Ok(None)`
//! - [`Outcome::Return`]: the run yields exactly the final accumulator,
//!   `Ok(Some(acc))`
//! - The ceiling level runs dry with the loop unfinished:
//!   [`MachineError::IterationLimitReached`], carrying the consumed budget
//!   (2046 applications at the default ceiling of 9). The ceiling is
//!   configurable through [`MachineConfig`].

mod driver;
mod error;
mod foreach;
mod ladder;
mod machine;
mod outcome;
pub mod prelude;
mod state;
mod transition;

pub use error::MachineError;
pub use foreach::for_each;
pub use machine::{Machine, MachineConfig, run};
pub use outcome::Outcome;
pub use state::State;
pub use transition::{FromFn, Transition, from_fn};
