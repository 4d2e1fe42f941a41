//! Expression Calculus Module
//!
//! Turns a raw arithmetic expression into a single `f64` without knowing where the
//! individual binary operations actually run.
//!
//! ## Pipeline
//! 1. **Tokenize**: `"2*(3+4)"` -> `["2", "*", "(", "3", "+", "4", ")"]`.
//! 2. **Postfix**: shunting-yard reduction into RPN, parentheses removed.
//! 3. **Evaluate**: a stack machine walks the RPN and calls into an `Operations` table
//!    for every operator. The table is either local arithmetic or a set of closures that
//!    dispatch each operation to a remote worker and wait for its result.
//!
//! ## Submodules
//! - **`tokenizer`**: splits the input into numeric runs, operators and parentheses.
//! - **`postfix`**: infix -> postfix conversion.
//! - **`operations`**: the pluggable four-slot operation table.
//! - **`evaluator`**: the stack machine.
//! - **`types`**: the `Operator` enum.

pub mod evaluator;
pub mod operations;
pub mod postfix;
pub mod tokenizer;
pub mod types;

pub use evaluator::{calc, evaluate};
pub use operations::Operations;
pub use postfix::to_postfix;
pub use tokenizer::tokenize;
pub use types::Operator;
