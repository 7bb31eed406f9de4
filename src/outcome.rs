use crate::state::State;

/// Result of one transition application: continue iterating, or stop in one
/// of two terminal ways.
///
/// `Outcome` is the only legal return type of a transition function, which
/// makes the termination protocol structural: the driver and the rescan
/// ladder can tell a finished run from an unfinished one without ever
/// looking inside the accumulator.
///
/// # Examples
///
/// ```rust
/// use rescan::{from_fn, Outcome, State};
///
/// let done: Outcome<i32, i32> = Outcome::Return(42);
/// assert!(done.is_return());
///
/// let silent: Outcome<i32, i32> = Outcome::Exit;
/// assert!(silent.is_terminal());
///
/// let state = State::new(from_fn(|st: State<i32, i32>| Outcome::Return(st.acc)), 0, [1, 2]);
/// let ongoing = Outcome::Continue(state);
/// assert!(ongoing.is_continue());
/// ```
#[derive(Debug, Clone)]
pub enum Outcome<S: 'static, T: 'static> {
    /// Iteration continues with the successor machine state.
    Continue(State<S, T>),
    /// Iteration stops; the whole run produces nothing.
    Exit,
    /// Iteration stops; the whole run produces exactly this accumulator.
    Return(S),
}

impl<S: 'static, T: 'static> Outcome<S, T> {
    /// Returns `true` if the outcome is `Continue`.
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Outcome::Continue(_))
    }

    /// Returns `true` if the outcome is `Exit`.
    #[inline]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit)
    }

    /// Returns `true` if the outcome is `Return`.
    #[inline]
    pub const fn is_return(&self) -> bool {
        matches!(self, Outcome::Return(_))
    }

    /// Returns `true` if the outcome ends the run (`Exit` or `Return`).
    ///
    /// Terminal outcomes pass through the rescan ladder inertly; only a
    /// `Continue` is ever fed back into a transition.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        !self.is_continue()
    }

    /// Converts into the successor state, discarding terminal outcomes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rescan::Outcome;
    ///
    /// let done: Outcome<i32, i32> = Outcome::Return(5);
    /// assert!(done.continued().is_none());
    /// ```
    #[inline]
    pub fn continued(self) -> Option<State<S, T>> {
        match self {
            Outcome::Continue(state) => Some(state),
            _ => None,
        }
    }

    /// Converts into the returned accumulator, discarding everything else.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rescan::Outcome;
    ///
    /// let done: Outcome<&str, i32> = Outcome::Return("final");
    /// assert_eq!(done.returned(), Some("final"));
    ///
    /// let silent: Outcome<&str, i32> = Outcome::Exit;
    /// assert_eq!(silent.returned(), None);
    /// ```
    #[inline]
    pub fn returned(self) -> Option<S> {
        match self {
            Outcome::Return(acc) => Some(acc),
            _ => None,
        }
    }

    /// Maps the accumulator of a `Return`, leaving other outcomes untouched.
    ///
    /// The accumulator type is threaded through `Continue` as well, so the
    /// mapping cannot change it.
    #[inline]
    pub fn map_return<F>(self, f: F) -> Outcome<S, T>
    where
        F: FnOnce(S) -> S,
    {
        match self {
            Outcome::Return(acc) => Outcome::Return(f(acc)),
            other => other,
        }
    }

    /// Returns the successor state, panicking with `msg` on a terminal outcome.
    #[inline]
    pub fn expect_continue(self, msg: &str) -> State<S, T> {
        match self {
            Outcome::Continue(state) => state,
            _ => panic!("{}", msg),
        }
    }

    /// Returns the returned accumulator, panicking with `msg` otherwise.
    #[inline]
    pub fn expect_return(self, msg: &str) -> S {
        match self {
            Outcome::Return(acc) => acc,
            _ => panic!("{}", msg),
        }
    }

    /// Returns the successor state.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is terminal.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use rescan::Outcome;
    ///
    /// let done: Outcome<i32, i32> = Outcome::Exit;
    /// done.unwrap_continue(); // panics
    /// ```
    #[inline]
    pub fn unwrap_continue(self) -> State<S, T> {
        match self {
            Outcome::Continue(state) => state,
            _ => panic!("called `Outcome::unwrap_continue()` on a terminal outcome"),
        }
    }

    /// Returns the returned accumulator.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is not `Return`.
    #[inline]
    pub fn unwrap_return(self) -> S {
        match self {
            Outcome::Return(acc) => acc,
            Outcome::Exit => panic!("called `Outcome::unwrap_return()` on an `Exit` outcome"),
            Outcome::Continue(_) => {
                panic!("called `Outcome::unwrap_return()` on a `Continue` outcome")
            }
        }
    }
}
