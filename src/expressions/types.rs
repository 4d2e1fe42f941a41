use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a submitted expression (UUID v4 string).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ExpressionId(pub String);

impl ExpressionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for ExpressionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpressionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of an expression.
///
/// On the wire this is a plain string: `"running"`, `"ok"`, or the failure message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(into = "String", from = "String")]
pub enum ExpressionStatus {
    Running,
    Ok,
    Failed(String),
}

impl ExpressionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ExpressionStatus::Running)
    }
}

impl From<ExpressionStatus> for String {
    fn from(status: ExpressionStatus) -> Self {
        match status {
            ExpressionStatus::Running => "running".to_string(),
            ExpressionStatus::Ok => "ok".to_string(),
            ExpressionStatus::Failed(message) => message,
        }
    }
}

impl From<String> for ExpressionStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "running" => ExpressionStatus::Running,
            "ok" => ExpressionStatus::Ok,
            _ => ExpressionStatus::Failed(status),
        }
    }
}

/// A submitted expression and its outcome. `result` is `0` until the status is `Ok`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expression {
    pub id: ExpressionId,
    pub status: ExpressionStatus,
    pub result: f64,
}
