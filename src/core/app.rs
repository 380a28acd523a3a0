//! Router assembly shared by the server binary and the HTTP tests.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, middleware::from_fn, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::error::route_not_found;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::store::{CategoryRepository, QuestionRepository};

/// Feature services, all backed by the same store
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
}

impl AppServices {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            categories: Arc::new(CategoryService::new(
                Arc::clone(&categories),
                Arc::clone(&questions),
            )),
            questions: Arc::new(QuestionService::new(
                Arc::clone(&categories),
                Arc::clone(&questions),
            )),
            quizzes: Arc::new(QuizService::new(categories, questions)),
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes and the health check
pub fn routes(services: AppServices) -> Router {
    Router::new()
        .merge(categories_routes::routes(services.categories))
        .merge(questions_routes::routes(services.questions))
        .merge(quizzes_routes::routes(services.quizzes))
        .route("/health", get(health_check))
}

/// Swagger UI at `/swagger-ui` and the OpenAPI document at `/api-docs/openapi.json`.
///
/// Both sit behind basic auth when the swagger credentials are configured.
pub fn docs(swagger: &SwaggerConfig) -> Router {
    let modifier = SwaggerInfoModifier {
        title: swagger.title.clone(),
        version: swagger.version.clone(),
        description: swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    modifier.modify(&mut openapi);

    let router =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    match swagger.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            router.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            router
        }
    }
}

/// Wrap a router with the JSON 404 fallbacks, body limit, CORS, tracing and request ids.
///
/// A path that only exists for other methods (`GET /questions/7`) is also a 404.
pub fn with_layers(router: Router, config: &AppConfig) -> Router {
    router
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(middleware::cors_layer(config.cors_allowed_origins.clone()))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
