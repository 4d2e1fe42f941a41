use super::protocol::*;
use super::registry::ExpressionRegistry;
use super::types::ExpressionId;
use crate::calculator::DistributedCalculator;

use axum::{Extension, Json, extract::Path, http::StatusCode};
use std::sync::Arc;

pub async fn handle_calculate(
    Extension(calculator): Extension<Arc<DistributedCalculator>>,
    Json(req): Json<CalculateRequest>,
) -> (StatusCode, Json<CalculateResponse>) {
    let id = calculator.submit(&req.expression);
    (StatusCode::OK, Json(CalculateResponse { id }))
}

pub async fn handle_list_expressions(
    Extension(expressions): Extension<Arc<ExpressionRegistry>>,
) -> (StatusCode, Json<ExpressionsResponse>) {
    let expressions = expressions.list();
    tracing::debug!("Expression listing: {} tracked", expressions.len());
    (StatusCode::OK, Json(ExpressionsResponse { expressions }))
}

pub async fn handle_get_expression(
    Extension(expressions): Extension<Arc<ExpressionRegistry>>,
    Path(id_str): Path<String>,
) -> (StatusCode, Json<Option<ExpressionResponse>>) {
    let id = ExpressionId(id_str);

    match expressions.get(&id) {
        Ok(expression) => {
            tracing::debug!("Expression status query: {} -> {:?}", id, expression.status);
            (StatusCode::OK, Json(Some(ExpressionResponse { expression })))
        }
        Err(_) => {
            tracing::debug!("Expression not found: {}", id);
            (StatusCode::NOT_FOUND, Json(None))
        }
    }
}
