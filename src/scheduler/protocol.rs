//! Worker-facing Protocol Definitions
//!
//! DTOs exchanged between the orchestrator and polling workers, and the endpoint paths
//! they are served on.

use super::types::*;
use serde::{Deserialize, Serialize};

/// `GET` claims a task, `POST` reports a result.
pub const ENDPOINT_TASK: &str = "/internal/task";
/// Diagnostic listing of every pending task.
pub const ENDPOINT_TASKS: &str = "/internal/tasks";

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task: Task,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResultRequest {
    pub id: TaskId,
    pub result: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TasksResponse {
    pub tasks: Vec<TaskSnapshot>,
}
