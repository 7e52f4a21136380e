// src/chain/mod.rs

//! The bounded self-relaunching chain.
//!
//! - [`state`] holds the counter, the bound, and the pure bound check.
//! - [`link`] runs one link: parse, decide, launch and await the next link,
//!   report lifecycle events.
//!
//! Each link is its own OS process. Launching goes through
//! [`crate::exec::ProcessLauncher`] and reporting through
//! [`crate::sink::OutputSink`], so the recursion can be exercised in tests
//! without spawning anything.

pub mod link;
pub mod state;

pub use link::{ExitOutcome, FAILURE_EXIT_CODE, LinkOutcome, exit_code_of, run_link};
pub use state::{ChainBound, ChainState, LinkDecision, StateSource, evaluate};
