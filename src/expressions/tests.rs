//! Expression Module Tests
//!
//! ## Test Scopes
//! - **Registry**: create / complete / get / list and the single terminal transition.
//! - **Status encoding**: the plain-string wire form of `ExpressionStatus`.
//! - **Handlers**: submission and status queries through the axum handlers.

#[cfg(test)]
mod tests {
    use crate::calculator::DistributedCalculator;
    use crate::config::OperationTimings;
    use crate::error::CalcError;
    use crate::expressions::handlers::{
        handle_calculate, handle_get_expression, handle_list_expressions,
    };
    use crate::expressions::protocol::CalculateRequest;
    use crate::expressions::registry::ExpressionRegistry;
    use crate::expressions::types::{Expression, ExpressionId, ExpressionStatus};
    use crate::scheduler::registry::TaskRegistry;

    use axum::{Extension, Json, extract::Path, http::StatusCode};
    use std::sync::Arc;

    // ============================================================
    // TEST 1: ExpressionRegistry
    // ============================================================

    #[test]
    fn test_create_starts_running() {
        let registry = ExpressionRegistry::new();
        let id = ExpressionId::new();

        registry.create(id.clone());

        let expression = registry.get(&id).unwrap();
        assert_eq!(expression.id, id);
        assert_eq!(expression.status, ExpressionStatus::Running);
        assert_eq!(expression.result, 0.0);
    }

    #[test]
    fn test_complete_ok_and_failure() {
        // ARRANGE
        let registry = ExpressionRegistry::new();
        let ok_id = ExpressionId::new();
        let failed_id = ExpressionId::new();
        registry.create(ok_id.clone());
        registry.create(failed_id.clone());

        // ACT
        registry.complete(&ok_id, Ok(42.5));
        registry.complete(&failed_id, Err(CalcError::DivisionByZero));

        // ASSERT
        let ok = registry.get(&ok_id).unwrap();
        assert_eq!(ok.status, ExpressionStatus::Ok);
        assert_eq!(ok.result, 42.5);

        let failed = registry.get(&failed_id).unwrap();
        assert_eq!(
            failed.status,
            ExpressionStatus::Failed("division by zero".to_string())
        );
        assert_eq!(failed.result, 0.0);
    }

    #[test]
    fn test_complete_is_terminal_once() {
        let registry = ExpressionRegistry::new();
        let id = ExpressionId::new();
        registry.create(id.clone());

        registry.complete(&id, Ok(1.0));
        registry.complete(&id, Err(CalcError::MalformedExpression));
        registry.complete(&id, Ok(2.0));

        let expression = registry.get(&id).unwrap();
        assert_eq!(expression.status, ExpressionStatus::Ok);
        assert_eq!(expression.result, 1.0);
    }

    #[test]
    fn test_complete_unknown_is_silent_noop() {
        let registry = ExpressionRegistry::new();

        registry.complete(&ExpressionId::new(), Ok(1.0));

        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let registry = ExpressionRegistry::new();

        assert_eq!(
            registry.get(&ExpressionId("missing".to_string())),
            Err(CalcError::NotFound)
        );
    }

    #[test]
    fn test_list_snapshot() {
        let registry = ExpressionRegistry::new();
        for _ in 0..3 {
            registry.create(ExpressionId::new());
        }

        let listed = registry.list();

        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|e| e.status == ExpressionStatus::Running));
    }

    // ============================================================
    // TEST 2: Status encoding
    // ============================================================

    #[test]
    fn test_status_serializes_as_plain_string() {
        let expression = Expression {
            id: ExpressionId("e-1".to_string()),
            status: ExpressionStatus::Failed("division by zero".to_string()),
            result: 0.0,
        };

        let json = serde_json::to_value(&expression).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": "e-1", "status": "division by zero", "result": 0.0})
        );
        assert_eq!(
            serde_json::to_value(ExpressionStatus::Running).unwrap(),
            "running"
        );
        assert_eq!(serde_json::to_value(ExpressionStatus::Ok).unwrap(), "ok");
    }

    #[test]
    fn test_status_deserializes_from_plain_string() {
        let running: ExpressionStatus = serde_json::from_str("\"running\"").unwrap();
        let ok: ExpressionStatus = serde_json::from_str("\"ok\"").unwrap();
        let failed: ExpressionStatus = serde_json::from_str("\"malformed expression\"").unwrap();

        assert_eq!(running, ExpressionStatus::Running);
        assert_eq!(ok, ExpressionStatus::Ok);
        assert_eq!(
            failed,
            ExpressionStatus::Failed("malformed expression".to_string())
        );
        assert!(!running.is_terminal());
        assert!(failed.is_terminal());
    }

    // ============================================================
    // TEST 3: Handlers
    // ============================================================

    #[tokio::test]
    async fn test_handle_calculate_then_query() {
        // ARRANGE
        let expressions = Arc::new(ExpressionRegistry::new());
        let calculator = DistributedCalculator::new(
            Arc::new(TaskRegistry::new()),
            expressions.clone(),
            OperationTimings::default(),
        );

        // ACT: submit
        let (status, Json(created)) = handle_calculate(
            Extension(calculator.clone()),
            Json(CalculateRequest {
                expression: "3*3".to_string(),
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        // ACT: query by id
        let (status, Json(body)) =
            handle_get_expression(Extension(expressions.clone()), Path(created.id.0.clone()))
                .await;

        // ASSERT
        assert_eq!(status, StatusCode::OK);
        let expression = body.expect("expression body").expression;
        assert_eq!(expression.id, created.id);
        assert_eq!(expression.status, ExpressionStatus::Running);

        let (status, Json(listing)) = handle_list_expressions(Extension(expressions)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listing.expressions.len(), 1);
    }

    #[tokio::test]
    async fn test_handle_get_expression_not_found() {
        let expressions = Arc::new(ExpressionRegistry::new());

        let (status, Json(body)) =
            handle_get_expression(Extension(expressions), Path("nope".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_none());
    }
}
