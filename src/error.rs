//! Error kinds shared by the parser, the evaluator and both registries.
//!
//! The `Display` text of a variant is what ends up as the `status` of a failed
//! expression, so keep the messages short and user-readable.

/// Errors produced while evaluating an expression or querying a registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// A postfix token is not a parseable numeric literal.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Operator without two operands, wrong number of values left over,
    /// or unbalanced parentheses.
    #[error("malformed expression")]
    MalformedExpression,

    /// Right-hand operand of `/` is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operation would produce a value outside the finite `f64` range.
    #[error("result out of range")]
    OutOfRange,

    /// Unknown expression id, unknown or already resolved task id,
    /// or no unclaimed task available.
    #[error("not found")]
    NotFound,

    /// The evaluation could not run to completion, e.g. a dispatched task's result
    /// slot was dropped before any worker reported.
    #[error("evaluation aborted: {0}")]
    Aborted(String),
}

pub type CalcResult<T> = Result<T, CalcError>;
