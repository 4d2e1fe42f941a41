//! Expression Registry Module
//!
//! Tracks every submitted expression from `running` to its single terminal state and
//! answers the client-facing status queries.
//!
//! ## Submodules
//! - **`types`**: `ExpressionId`, `ExpressionStatus`, `Expression`.
//! - **`registry`**: the `ExpressionRegistry` store.
//! - **`protocol`**: client-facing DTOs and endpoint paths.
//! - **`handlers`**: axum handlers for submission and status queries.

pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod types;

#[cfg(test)]
mod tests;
