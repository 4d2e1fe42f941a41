use crate::calc::operations::wrap;
use crate::calc::{Operations, calc};
use crate::config::OperationTimings;
use crate::error::{CalcError, CalcResult};
use crate::expressions::registry::ExpressionRegistry;
use crate::expressions::types::ExpressionId;
use crate::scheduler::registry::TaskRegistry;
use crate::scheduler::types::Task;

use std::sync::Arc;

/// Accepts expressions and evaluates them through remote workers.
pub struct DistributedCalculator {
    tasks: Arc<TaskRegistry>,
    expressions: Arc<ExpressionRegistry>,
    timings: OperationTimings,
}

impl DistributedCalculator {
    pub fn new(
        tasks: Arc<TaskRegistry>,
        expressions: Arc<ExpressionRegistry>,
        timings: OperationTimings,
    ) -> Arc<Self> {
        Arc::new(Self {
            tasks,
            expressions,
            timings,
        })
    }

    pub fn tasks(&self) -> &Arc<TaskRegistry> {
        &self.tasks
    }

    pub fn expressions(&self) -> &Arc<ExpressionRegistry> {
        &self.expressions
    }

    /// Registers `expression` under a fresh id and starts evaluating it in the background.
    ///
    /// Always succeeds; parse and evaluation failures only show up in the status.
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, expression: &str) -> ExpressionId {
        let id = ExpressionId::new();
        self.expressions.create(id.clone());
        tracing::info!("Expression {} submitted: {:?}", id, expression);

        let ops = self.operations();
        let expression = expression.to_string();
        let evaluation = tokio::spawn(async move { calc(&expression, &ops).await });

        let expressions = self.expressions.clone();
        let completed_id = id.clone();
        tokio::spawn(async move {
            let outcome = match evaluation.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(
                        "Evaluation of expression {} did not finish: {}",
                        completed_id,
                        e
                    );
                    Err(CalcError::Aborted(e.to_string()))
                }
            };
            expressions.complete(&completed_id, outcome);
        });

        id
    }

    /// An operation table whose every slot turns `(a, b)` into a task and waits for it.
    fn operations(&self) -> Operations {
        let timings = self.timings;
        Operations::from_fn(|op| {
            let tasks = self.tasks.clone();
            wrap(move |a, b| {
                let task = Task::new(a, b, op, timings.for_operator(op));
                dispatch(tasks.clone(), task)
            })
        })
    }
}

/// Submits `task` and suspends until a worker reports its result.
async fn dispatch(tasks: Arc<TaskRegistry>, task: Task) -> CalcResult<f64> {
    tracing::debug!(
        "Dispatching task {}: {} {} {}",
        task.id,
        task.operand1,
        task.operator,
        task.operand2
    );

    let slot = tasks.submit(task);
    slot.await
        .map_err(|_| CalcError::Aborted("task result channel closed".to_string()))
}
