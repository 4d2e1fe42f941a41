//! Distributed Expression Calculator Library
//!
//! Evaluates arithmetic expressions by farming every primitive binary operation out to
//! remote worker processes. The orchestrator binary (`main.rs`) serves the HTTP API; the
//! `agent` binary runs the polling workers.
//!
//! ## Architecture Modules
//! - **`calc`**: tokenizer, postfix conversion and the stack-machine evaluator over a
//!   pluggable operation table.
//! - **`scheduler`**: the task registry workers claim operations from and report into.
//! - **`expressions`**: the registry of submitted expressions and their outcome.
//! - **`calculator`**: the bridge that makes each evaluated operator a remote task.
//! - **`worker`**: the polling agent executed by worker processes.
//! - **`server`**: axum router wiring of all endpoints.
//! - **`config`**: environment configuration of both binaries.
//! - **`error`**: the shared `CalcError` kinds.

pub mod calc;
pub mod calculator;
pub mod config;
pub mod error;
pub mod expressions;
pub mod scheduler;
pub mod server;
pub mod worker;
