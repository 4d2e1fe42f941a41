//! Distributed Calculator
//!
//! The bridge between expression evaluation and the task scheduler. Every operator the
//! evaluator reaches becomes a `Task`; the evaluation suspends on the task's result slot
//! until a worker reports, then continues with the reported value.
//!
//! ## Lifecycle of one submission
//! 1. The expression is registered as `running` and its id is returned at once.
//! 2. An evaluation task walks the expression with remote-dispatching `Operations`.
//! 3. A completion task waits for the evaluation and records `ok` or the failure message.

pub mod calculator;

pub use calculator::DistributedCalculator;
