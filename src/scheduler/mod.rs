//! Task Scheduler Module
//!
//! Holds the primitive binary operations waiting for a remote worker and routes each
//! reported result back to the evaluation that is suspended on it.
//!
//! ## Architecture Overview
//! The scheduler follows a **Pull-based** model with **at-most-once** claims:
//! 1. **Submission**: an evaluation submits a `Task` and receives the reading end of a
//!    one-shot result slot. Submission never blocks.
//! 2. **Claiming**: a polling worker fetches the first unclaimed task. The task is marked
//!    claimed and becomes invisible to every other fetch.
//! 3. **Reporting**: the worker reports a value; the slot is written exactly once, waking
//!    the suspended evaluation, and the task leaves the registry.
//!
//! A claimed task whose worker never reports is never released again.
//!
//! ## Submodules
//! - **`types`**: `TaskId`, `Task`, `TaskSnapshot`.
//! - **`registry`**: the lock-guarded `TaskRegistry`.
//! - **`protocol`**: worker-facing DTOs and endpoint paths.
//! - **`handlers`**: axum handlers for the worker-facing endpoints.

pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod types;
