// src/chain/state.rs

//! Chain state, bound, and the pure bound check.

use std::fmt;

/// The counter threaded through the chain. One immutable value per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ChainState(u64);

/// How a link arrived at its [`ChainState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateSource {
    /// Parsed from the first argument.
    Argument,
    /// No argument given; the chain starts at zero.
    Absent,
    /// An argument was given but is not a non-negative decimal `u64`.
    Malformed(String),
}

impl StateSource {
    pub fn is_defaulted(&self) -> bool {
        !matches!(self, StateSource::Argument)
    }
}

impl ChainState {
    pub const START: ChainState = ChainState(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Resolve the state from the first command-line argument.
    ///
    /// Surrounding whitespace is ignored. Anything that does not fit a `u64`
    /// resolves to [`ChainState::START`].
    pub fn parse_arg(arg: Option<&str>) -> (ChainState, StateSource) {
        match arg {
            None => (Self::START, StateSource::Absent),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(value) => (ChainState(value), StateSource::Argument),
                Err(_) => (Self::START, StateSource::Malformed(raw.to_string())),
            },
        }
    }

    /// Decimal form handed to the child as its only argument.
    pub fn to_arg(self) -> String {
        self.0.to_string()
    }

    /// The successor state, or `None` at `u64::MAX`.
    pub fn next(self) -> Option<ChainState> {
        self.0.checked_add(1).map(ChainState)
    }
}

impl fmt::Display for ChainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive ceiling on the state a link may be started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainBound(u64);

impl ChainBound {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn admits(self, state: ChainState) -> bool {
        state.value() <= self.0
    }
}

impl fmt::Display for ChainBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a link does after resolving its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDecision {
    /// The successor would exceed the bound; stop here.
    Terminal,
    /// Launch a child carrying this state.
    Spawn(ChainState),
}

pub fn evaluate(state: ChainState, bound: ChainBound) -> LinkDecision {
    match state.next() {
        Some(next) if bound.admits(next) => LinkDecision::Spawn(next),
        _ => LinkDecision::Terminal,
    }
}
