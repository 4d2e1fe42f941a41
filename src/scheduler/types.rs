use crate::calc::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task.
///
/// Wrapper around a UUID v4 string; ids are never reused within a process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    /// Generates a new random UUID v4-based TaskId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One primitive binary operation scheduled for remote execution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    #[serde(rename = "arg1")]
    pub operand1: f64,
    #[serde(rename = "arg2")]
    pub operand2: f64,
    #[serde(rename = "operation")]
    pub operator: Operator,
    /// Simulated execution time in milliseconds the worker should take.
    #[serde(rename = "operation_time")]
    pub estimated_duration: u64,
}

impl Task {
    pub fn new(operand1: f64, operand2: f64, operator: Operator, estimated_duration: u64) -> Self {
        Self {
            id: TaskId::new(),
            operand1,
            operand2,
            operator,
            estimated_duration,
        }
    }

    /// Performs the operation locally.
    pub fn compute(&self) -> f64 {
        self.operator.apply(self.operand1, self.operand2)
    }
}

/// A pending task together with its claim flag, as returned by the diagnostic listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskSnapshot {
    #[serde(flatten)]
    pub task: Task,
    #[serde(rename = "is_busy")]
    pub claimed: bool,
}
