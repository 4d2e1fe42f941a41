//! Worker Agent Module
//!
//! The remote side of the scheduler: a process that polls the orchestrator for a task,
//! performs the arithmetic, takes the task's `operation_time`, and reports the result.
//!
//! ## Responsibilities
//! - **Polling**: each loop asks for one task per `DELAY_MS` tick; a 404 means idle.
//! - **Execution**: `Operator::apply`, padded to the task's simulated duration.
//! - **Reporting**: POSTs the result back, retrying transient network failures.

pub mod agent;

pub use agent::WorkerAgent;
