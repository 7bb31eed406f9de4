//! The rescan ladder.
//!
//! A ladder level is a pure, statically-structured re-application construct.
//! Level `n` applies the transition once and then feeds the result through
//! two nested copies of level `n - 1`, so the whole budget lives in the call
//! structure rather than in any counter: `exec` at level `n` can chain
//! `2^(n+1) - 1` applications before its own expansion is exhausted and
//! control returns to the driver.

use crate::outcome::Outcome;
use crate::state::State;

/// One doubling level of the rescan ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Level(pub(crate) u8);

impl Level {
    /// Applications [`Level::exec`] can chain before this level is spent:
    /// `2^(n+1) - 1`. Saturates for levels too high to represent.
    pub(crate) fn exec_capacity(self) -> u64 {
        match 1u64.checked_shl(u32::from(self.0) + 1) {
            Some(cap) => cap - 1,
            None => u64::MAX,
        }
    }

    /// Applications one driver stage at this level performs: the stage's own
    /// application plus this level's `exec` budget, `2^(n+1)`.
    pub(crate) fn stage_capacity(self) -> u64 {
        self.exec_capacity().saturating_add(1)
    }

    /// Apply the transition once, then re-apply the level below twice to the
    /// result. Level 0 returns the raw outcome of its single application.
    pub(crate) fn exec<S, T>(self, state: State<S, T>) -> Outcome<S, T>
    where
        S: 'static,
        T: 'static,
    {
        let out = state.advance();
        match self.0 {
            0 => out,
            n => {
                let lower = Level(n - 1);
                lower.rescan(lower.rescan(out))
            }
        }
    }

    /// Feed an outcome back through this level if it is still unfinished.
    ///
    /// Terminal outcomes pass through inertly: they are not shaped like a
    /// machine state, so there is nothing left to apply the transition to.
    pub(crate) fn rescan<S, T>(self, outcome: Outcome<S, T>) -> Outcome<S, T>
    where
        S: 'static,
        T: 'static,
    {
        match outcome {
            Outcome::Continue(state) => self.exec(state),
            terminal => terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{FromFn, from_fn};
    use std::cell::Cell;
    use std::rc::Rc;

    /// A transition that never terminates, counting its applications.
    fn endless() -> (Rc<Cell<u64>>, FromFn<impl Fn(State<(), ()>) -> Outcome<(), ()>>) {
        let count = Rc::new(Cell::new(0));
        let calls = Rc::clone(&count);
        let transition = from_fn(move |st: State<(), ()>| {
            calls.set(calls.get() + 1);
            Outcome::Continue(st)
        });
        (count, transition)
    }

    /// A transition that returns after exactly `k` applications.
    fn return_at(k: u64) -> (Rc<Cell<u64>>, FromFn<impl Fn(State<(), ()>) -> Outcome<(), ()>>) {
        let count = Rc::new(Cell::new(0));
        let calls = Rc::clone(&count);
        let transition = from_fn(move |st: State<(), ()>| {
            calls.set(calls.get() + 1);
            if calls.get() >= k {
                Outcome::Return(())
            } else {
                Outcome::Continue(st)
            }
        });
        (count, transition)
    }

    #[test]
    fn test_capacity_doubles_per_level() {
        assert_eq!(Level(0).exec_capacity(), 1);
        assert_eq!(Level(1).exec_capacity(), 3);
        assert_eq!(Level(2).exec_capacity(), 7);
        assert_eq!(Level(9).exec_capacity(), 1023);

        assert_eq!(Level(0).stage_capacity(), 2);
        assert_eq!(Level(9).stage_capacity(), 1024);
    }

    #[test]
    fn test_capacity_saturates_at_unrepresentable_levels() {
        assert_eq!(Level(62).exec_capacity(), (1u64 << 63) - 1);
        assert_eq!(Level(63).exec_capacity(), u64::MAX);
        assert_eq!(Level(63).stage_capacity(), u64::MAX);
    }

    #[test]
    fn test_exec_consumes_exactly_its_capacity() {
        for n in 0..=5 {
            let (count, transition) = endless();
            let out = Level(n).exec(State::new(transition, (), []));
            assert!(out.is_continue());
            assert_eq!(count.get(), Level(n).exec_capacity(), "level {n}");
        }
    }

    #[test]
    fn test_stage_consumes_one_application_plus_exec() {
        for n in 0..=5 {
            let (count, transition) = endless();
            let state = State::new(transition, (), []);
            let out = Level(n).rescan(state.advance());
            assert!(out.is_continue());
            assert_eq!(count.get(), Level(n).stage_capacity(), "level {n}");
        }
    }

    #[test]
    fn test_terminal_outcome_stops_the_ladder_mid_expansion() {
        // Level 4 could chain 31 applications; a return at the 5th must not
        // be re-entered by the remaining nested rescans.
        let (count, transition) = return_at(5);
        let out = Level(4).exec(State::new(transition, (), []));
        assert!(out.is_return());
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn test_rescan_passes_terminal_outcomes_through_inertly() {
        let exit: Outcome<(), ()> = Outcome::Exit;
        assert!(Level(3).rescan(exit).is_exit());

        let done: Outcome<(), ()> = Outcome::Return(());
        assert!(Level(3).rescan(done).is_return());
    }
}
