use super::types::*;
use crate::error::{CalcError, CalcResult};

use dashmap::DashMap;

/// Store of every expression this process has accepted.
#[derive(Default)]
pub struct ExpressionRegistry {
    expressions: DashMap<ExpressionId, Expression>,
}

impl ExpressionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `id` as `running` with a zero result.
    pub fn create(&self, id: ExpressionId) {
        self.expressions.insert(
            id.clone(),
            Expression {
                id,
                status: ExpressionStatus::Running,
                result: 0.0,
            },
        );
    }

    /// Moves a running expression to its terminal state.
    ///
    /// Unknown ids are ignored, and so is any completion after the first one.
    pub fn complete(&self, id: &ExpressionId, outcome: CalcResult<f64>) {
        let Some(mut expression) = self.expressions.get_mut(id) else {
            tracing::debug!("Ignoring completion for unknown expression {}", id);
            return;
        };

        if expression.status.is_terminal() {
            tracing::warn!(
                "Expression {} already finished ({:?}), ignoring late completion",
                id,
                expression.status
            );
            return;
        }

        match outcome {
            Ok(value) => {
                expression.status = ExpressionStatus::Ok;
                expression.result = value;
                tracing::info!("Expression {} completed: {}", id, value);
            }
            Err(e) => {
                expression.status = ExpressionStatus::Failed(e.to_string());
                tracing::info!("Expression {} failed: {}", id, e);
            }
        }
    }

    pub fn get(&self, id: &ExpressionId) -> CalcResult<Expression> {
        self.expressions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(CalcError::NotFound)
    }

    /// Snapshot of every tracked expression, in no particular order.
    pub fn list(&self) -> Vec<Expression> {
        self.expressions
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}
