//! LawAssist backend - composition root.
//!
//! Loads configuration, applies the database schema, wires adapters into
//! the operation handlers, and serves the axum router. All dependencies are
//! constructed here and injected explicitly; there is no global state.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lawassist::adapters::ai::{GeminiConfig, GeminiGateway};
use lawassist::adapters::auth::{GoogleConfig, GoogleSessionValidator};
use lawassist::adapters::http::{
    app_router, cases::CaseHandlers, intake::IntakeHandlers, session::SessionHandlers,
};
use lawassist::adapters::postgres::{
    ensure_schema, PostgresCaseRepository, PostgresMessageRepository, PostgresUserDirectory,
};
use lawassist::application::handlers::case::{
    AppendMessageHandler, CreateCaseHandler, GetCaseHandler, ListCasesHandler,
};
use lawassist::application::handlers::intake::{RequestFollowUpHandler, RequestSolutionHandler};
use lawassist::application::handlers::user::EnsureUserHandler;
use lawassist::config::AppConfig;
use lawassist::ports::{AiGateway, CaseRepository, MessageRepository, SessionValidator, UserDirectory};

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");
    config.validate().expect("Invalid configuration");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.log_level.clone().into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to PostgreSQL");

    ensure_schema(&pool)
        .await
        .expect("Failed to apply database schema");
    tracing::info!("Database schema ready");

    // Adapters
    let users: Arc<dyn UserDirectory> = Arc::new(PostgresUserDirectory::new(pool.clone()));
    let cases: Arc<dyn CaseRepository> = Arc::new(PostgresCaseRepository::new(pool.clone()));
    let messages: Arc<dyn MessageRepository> = Arc::new(PostgresMessageRepository::new(pool));

    let gateway: Arc<dyn AiGateway> = Arc::new(GeminiGateway::new(
        GeminiConfig::new(config.ai.gemini_api_key.clone())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone()),
    ));

    let validator: Arc<dyn SessionValidator> = Arc::new(GoogleSessionValidator::new(
        GoogleConfig::new(config.auth.google_client_id.clone())
            .with_issuer_url(config.auth.issuer_url.clone())
            .with_jwks_url(config.auth.jwks_url.clone()),
    ));

    // Operation handlers
    let case_handlers = CaseHandlers::new(
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

    let intake_handlers = IntakeHandlers::new(
        Arc::new(RequestFollowUpHandler::new(
            users.clone(),
            cases.clone(),
            messages.clone(),
            gateway.clone(),
        )),
        Arc::new(RequestSolutionHandler::new(
            users.clone(),
            cases,
            messages,
            gateway,
        )),
    );

    let session_handlers = SessionHandlers::new(Arc::new(EnsureUserHandler::new(users)));

    let app = app_router(
        case_handlers,
        intake_handlers,
        session_handlers,
        validator,
        config.server.cors_origins_list(),
    );

    let addr = config.server.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
