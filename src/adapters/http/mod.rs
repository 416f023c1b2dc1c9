//! HTTP layer - axum routes, handlers, and DTOs.

pub mod cases;
pub mod error;
pub mod health;
pub mod intake;
pub mod middleware;
pub mod session;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::ports::SessionValidator;

use self::middleware::auth_middleware;

/// Assembles the full API router.
///
/// The auth middleware runs on every route; individual handlers opt into
/// enforcement via the `RequireAuth` extractor.
pub fn app_router(
    case_handlers: cases::CaseHandlers,
    intake_handlers: intake::IntakeHandlers,
    session_handlers: session::SessionHandlers,
    validator: Arc<dyn SessionValidator>,
    cors_origins: Vec<String>,
) -> Router {
    let cors = cors_layer(cors_origins);

    Router::new()
        .nest("/api/cases", cases::case_routes(case_handlers))
        .nest("/api/ai", intake::intake_routes(intake_handlers))
        .nest("/api/auth", session::session_routes(session_handlers))
        .route("/api/health", get(health::health))
        .layer(axum::middleware::from_fn_with_state(
            validator,
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(origins: Vec<String>) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiGateway;
    use crate::adapters::auth::MockSessionValidator;
    use crate::adapters::memory::{
        InMemoryCaseRepository, InMemoryMessageRepository, InMemoryUserDirectory,
    };
    use crate::application::handlers::case::{
        AppendMessageHandler, CreateCaseHandler, GetCaseHandler, ListCasesHandler,
    };
    use crate::application::handlers::intake::{RequestFollowUpHandler, RequestSolutionHandler};
    use crate::application::handlers::user::EnsureUserHandler;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    fn test_router(validator: MockSessionValidator) -> Router {
        let users = Arc::new(InMemoryUserDirectory::new());
        let cases = Arc::new(InMemoryCaseRepository::new());
        let messages = Arc::new(InMemoryMessageRepository::new());
        let gateway = Arc::new(MockAiGateway::new());

        let case_handlers = cases::CaseHandlers::new(
            Arc::new(CreateCaseHandler::new(
                users.clone(),
                cases.clone(),
                messages.clone(),
            )),
            Arc::new(ListCasesHandler::new(users.clone(), cases.clone())),
            Arc::new(GetCaseHandler::new(
                users.clone(),
                cases.clone(),
                messages.clone(),
            )),
            Arc::new(AppendMessageHandler::new(
                users.clone(),
                cases.clone(),
                messages.clone(),
            )),
        );
        let intake_handlers = intake::IntakeHandlers::new(
            Arc::new(RequestFollowUpHandler::new(
                users.clone(),
                cases.clone(),
                messages.clone(),
                gateway.clone(),
            )),
            Arc::new(RequestSolutionHandler::new(
                users.clone(),
                cases.clone(),
                messages,
                gateway,
            )),
        );
        let session_handlers =
            session::SessionHandlers::new(Arc::new(EnsureUserHandler::new(users)));

        app_router(
            case_handlers,
            intake_handlers,
            session_handlers,
            Arc::new(validator),
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn health_endpoint_needs_no_auth() {
        let router = test_router(MockSessionValidator::new());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unauthenticated_list_is_401() {
        let router = test_router(MockSessionValidator::new());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/cases/list")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn invalid_bearer_token_is_401() {
        let router = test_router(MockSessionValidator::new());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/cases/list")
                    .header("Authorization", "Bearer bogus")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn me_endpoint_creates_user_on_first_sign_in() {
        let validator =
            MockSessionValidator::new().with_test_identity("good-token", "alice@example.com");
        let router = test_router(validator);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/auth/me")
                    .header("Authorization", "Bearer good-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
