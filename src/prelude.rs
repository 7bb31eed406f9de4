//! Commonly used imports
//!
//! Use `use rescan::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::{Outcome, State, Transition};

// Building transitions
pub use crate::transition::{FromFn, from_fn};

// Execution
pub use crate::machine::{Machine, MachineConfig, run};

// Convenience iteration
pub use crate::foreach::for_each;

// Errors
pub use crate::error::MachineError;
