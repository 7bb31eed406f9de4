//! The escalating driver.
//!
//! Walks the rescan ladder one level at a time, starting small with a single
//! doubled application and growing the budget only when the previous level
//! ran dry with the loop still unfinished. Each stage contributes at most as
//! much new capacity as every stage before it combined, so a run that
//! terminates after `k` applications costs `O(k)` work and `O(log k)`
//! escalation steps.

use tracing::{debug, trace};

use crate::error::MachineError;
use crate::ladder::Level;
use crate::outcome::Outcome;
use crate::state::State;

/// Combined application budget of every stage up to and including
/// `max_level`: `2^(max_level + 2) - 2`. Saturates for ceilings too high to
/// represent.
pub(crate) fn total_capacity(max_level: u8) -> u64 {
    match 1u64.checked_shl(u32::from(max_level) + 2) {
        Some(cap) => cap - 2,
        None => u64::MAX,
    }
}

/// Run the loop, escalating one ladder level at a time.
///
/// Level `k` is followed only by level `k + 1`; escalation never skips a
/// level and never resets downward mid-run. A terminal outcome anywhere
/// stops the walk immediately. Exhausting the ceiling stage with the loop
/// still unfinished is the machine's single failure.
pub(crate) fn drive<S, T>(
    initial: State<S, T>,
    max_level: u8,
) -> Result<Option<S>, MachineError>
where
    S: 'static,
    T: 'static,
{
    let mut state = initial;
    for n in 0..=max_level {
        let level = Level(n);
        trace!(
            level = n,
            capacity = level.stage_capacity(),
            "escalating rescan budget"
        );
        match level.rescan(state.advance()) {
            Outcome::Continue(unfinished) => state = unfinished,
            Outcome::Exit => {
                debug!(level = n, "silent exit");
                return Ok(None);
            }
            Outcome::Return(acc) => {
                debug!(level = n, "value return");
                return Ok(Some(acc));
            }
        }
    }

    let iterations = total_capacity(max_level);
    debug!(max_level, iterations, "iteration ceiling exhausted");
    Err(MachineError::IterationLimitReached {
        iterations,
        max_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{FromFn, from_fn};
    use std::cell::Cell;
    use std::rc::Rc;

    fn endless() -> (Rc<Cell<u64>>, FromFn<impl Fn(State<(), ()>) -> Outcome<(), ()>>) {
        let count = Rc::new(Cell::new(0));
        let calls = Rc::clone(&count);
        let transition = from_fn(move |st: State<(), ()>| {
            calls.set(calls.get() + 1);
            Outcome::Continue(st)
        });
        (count, transition)
    }

    fn return_at(k: u64) -> (Rc<Cell<u64>>, FromFn<impl Fn(State<u64, ()>) -> Outcome<u64, ()>>) {
        let count = Rc::new(Cell::new(0));
        let calls = Rc::clone(&count);
        let transition = from_fn(move |st: State<u64, ()>| {
            calls.set(calls.get() + 1);
            if calls.get() >= k {
                Outcome::Return(calls.get())
            } else {
                Outcome::Continue(st)
            }
        });
        (count, transition)
    }

    #[test]
    fn test_total_capacity() {
        assert_eq!(total_capacity(0), 2);
        assert_eq!(total_capacity(1), 6);
        assert_eq!(total_capacity(3), 30);
        assert_eq!(total_capacity(9), 2046);
        assert_eq!(total_capacity(63), u64::MAX);
    }

    #[test]
    fn test_stages_escalate_monotonically_one_level_at_a_time() {
        // An endless transition must consume every stage in order; any
        // skipped or repeated level would change the exact count.
        for max_level in 0..=5 {
            let (count, transition) = endless();
            let result = drive(State::new(transition, (), []), max_level);
            assert!(result.is_err(), "ceiling {max_level}");
            assert_eq!(count.get(), total_capacity(max_level), "ceiling {max_level}");
        }
    }

    #[test]
    fn test_ceiling_exhaustion_reports_the_limit() {
        let (_, transition) = endless();
        let err = drive(State::new(transition, (), []), 3).unwrap_err();
        assert_eq!(
            err,
            MachineError::IterationLimitReached {
                iterations: 30,
                max_level: 3,
            }
        );
    }

    #[test]
    fn test_termination_stops_mid_stage_with_no_extra_applications() {
        for k in 1..=30 {
            let (count, transition) = return_at(k);
            let result = drive(State::new(transition, 0, []), 3);
            assert_eq!(result, Ok(Some(k)), "k = {k}");
            assert_eq!(count.get(), k, "k = {k}");
        }
    }

    #[test]
    fn test_termination_exactly_at_the_ceiling_boundary_succeeds() {
        let (count, transition) = return_at(30);
        assert_eq!(drive(State::new(transition, 0, []), 3), Ok(Some(30)));
        assert_eq!(count.get(), 30);

        let (count, transition) = return_at(31);
        assert!(drive(State::new(transition, 0, []), 3).is_err());
        assert_eq!(count.get(), 30);
    }

    #[test]
    fn test_silent_exit_yields_nothing() {
        let transition = from_fn(|_: State<u64, ()>| Outcome::Exit);
        assert_eq!(drive(State::new(transition, 99, []), 3), Ok(None));
    }
}
