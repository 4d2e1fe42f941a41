//! Operation Table
//!
//! The evaluator never does arithmetic itself; it asks an `Operations` value. Swapping
//! the four slots is what turns a local evaluation into a distributed one.

use super::types::Operator;
use crate::error::{CalcError, CalcResult};

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// The future produced by one binary operation.
pub type OperationFuture = Pin<Box<dyn Future<Output = CalcResult<f64>> + Send>>;

/// Type alias for a thread-safe, asynchronous binary operation `(a, b) -> a op b`.
pub type OperationFn = Arc<dyn Fn(f64, f64) -> OperationFuture + Send + Sync>;

/// A record of four operation slots, one per operator.
#[derive(Clone)]
pub struct Operations {
    pub add: OperationFn,
    pub subtract: OperationFn,
    pub multiply: OperationFn,
    pub divide: OperationFn,
}

impl Operations {
    /// Immediate local arithmetic in every slot.
    pub fn local() -> Self {
        Self::from_fn(|op| wrap(move |a, b| async move { Ok::<_, CalcError>(op.apply(a, b)) }))
    }

    /// Builds every slot from a factory that receives the slot's operator.
    pub fn from_fn<F>(mut make: F) -> Self
    where
        F: FnMut(Operator) -> OperationFn,
    {
        Self {
            add: make(Operator::Add),
            subtract: make(Operator::Subtract),
            multiply: make(Operator::Multiply),
            divide: make(Operator::Divide),
        }
    }

    /// Returns the slot bound to `op`.
    pub fn get(&self, op: Operator) -> &OperationFn {
        match op {
            Operator::Add => &self.add,
            Operator::Subtract => &self.subtract,
            Operator::Multiply => &self.multiply,
            Operator::Divide => &self.divide,
        }
    }

    /// Invokes the slot bound to `op` with `(a, b)`.
    pub async fn apply(&self, op: Operator, a: f64, b: f64) -> CalcResult<f64> {
        self.get(op)(a, b).await
    }
}

impl Default for Operations {
    fn default() -> Self {
        Self::local()
    }
}

/// Type-erases an async closure into an `OperationFn`.
pub fn wrap<F, Fut>(f: F) -> OperationFn
where
    F: Fn(f64, f64) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = CalcResult<f64>> + Send + 'static,
{
    Arc::new(move |a, b| Box::pin(f(a, b)) as OperationFuture)
}
