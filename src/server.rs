//! HTTP wiring of the client-facing and worker-facing endpoints.

use crate::calculator::DistributedCalculator;
use crate::expressions::handlers::{
    handle_calculate, handle_get_expression, handle_list_expressions,
};
use crate::expressions::protocol::{ENDPOINT_CALCULATE, ENDPOINT_EXPRESSION, ENDPOINT_EXPRESSIONS};
use crate::scheduler::handlers::{handle_fetch_task, handle_list_tasks, handle_report_result};
use crate::scheduler::protocol::{ENDPOINT_TASK, ENDPOINT_TASKS};

use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builds the router; both registries and the calculator are shared through `Extension`.
pub fn router(calculator: Arc<DistributedCalculator>) -> Router {
    Router::new()
        .route(ENDPOINT_CALCULATE, post(handle_calculate))
        .route(ENDPOINT_EXPRESSIONS, get(handle_list_expressions))
        .route(ENDPOINT_EXPRESSION, get(handle_get_expression))
        .route(
            ENDPOINT_TASK,
            get(handle_fetch_task).post(handle_report_result),
        )
        .route(ENDPOINT_TASKS, get(handle_list_tasks))
        .layer(Extension(calculator.tasks().clone()))
        .layer(Extension(calculator.expressions().clone()))
        .layer(Extension(calculator))
}

/// Serves the router on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, calculator: Arc<DistributedCalculator>) -> anyhow::Result<()> {
    axum::serve(listener, router(calculator)).await?;
    Ok(())
}
