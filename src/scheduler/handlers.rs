use super::protocol::*;
use super::registry::TaskRegistry;

use axum::{Extension, Json, http::StatusCode};
use std::sync::Arc;

pub async fn handle_fetch_task(
    Extension(registry): Extension<Arc<TaskRegistry>>,
) -> (StatusCode, Json<Option<TaskResponse>>) {
    match registry.fetch() {
        Ok(task) => (StatusCode::OK, Json(Some(TaskResponse { task }))),
        Err(_) => {
            tracing::trace!("No unclaimed task available");
            (StatusCode::NOT_FOUND, Json(None))
        }
    }
}

pub async fn handle_report_result(
    Extension(registry): Extension<Arc<TaskRegistry>>,
    Json(req): Json<TaskResultRequest>,
) -> StatusCode {
    match registry.report(&req.id, req.result) {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Rejected result for task {}: {}", req.id, e);
            StatusCode::NOT_FOUND
        }
    }
}

pub async fn handle_list_tasks(
    Extension(registry): Extension<Arc<TaskRegistry>>,
) -> (StatusCode, Json<TasksResponse>) {
    let tasks = registry.fetch_all();
    tracing::debug!("Task listing: {} pending", tasks.len());
    (StatusCode::OK, Json(TasksResponse { tasks }))
}
