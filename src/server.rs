//! JSON HTTP server.
//!
//! Exposes the catalog and the comparison engine to browser and API
//! clients.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/patterns` | List patterns (`?category=&complexity=&scalability=`) |
//! | `GET`  | `/patterns/{id}` | Fetch one pattern |
//! | `GET`  | `/criteria` | The eight weighted criteria |
//! | `POST` | `/compare` | Rank patterns for a project context |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "not_found", "message": "pattern not found: ghost" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404),
//! `data_integrity` (500), `internal` (500).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted to support browser-based
//! clients.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, info};

use arch_compass_core::criteria::{list_criteria, ComparisonCriterion};
use arch_compass_core::models::{
    ArchitecturePattern, ComparisonResult, PatternFilter, ProjectContext,
};
use arch_compass_core::store::PatternStore;
use arch_compass_core::CompareError;

use crate::config::Config;
use crate::db;
use crate::import::seed_builtin;
use crate::migrate;
use crate::sqlite_store::SqliteStore;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
struct AppState {
    store: Arc<dyn PatternStore>,
}

/// Build the router over any catalog backend.
pub fn router(store: Arc<dyn PatternStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/patterns", get(handle_list_patterns))
        .route("/patterns/{id}", get(handle_get_pattern))
        .route("/criteria", get(handle_criteria))
        .route("/compare", post(handle_compare))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(AppState { store })
}

/// Starts the HTTP server against the configured SQLite catalog.
///
/// Applies migrations, seeds the built-in catalog when it is empty and
/// `[catalog].seed_builtin` is set, then serves until the process exits.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let pool = db::connect(config).await?;
    migrate::apply(&pool).await?;

    let store = SqliteStore::new(pool);
    if config.catalog.seed_builtin && store.count_patterns().await? == 0 {
        seed_builtin(&store).await?;
    }

    let app = router(Arc::new(store));
    let bind_addr = config.server.bind.clone();

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "server listening");
    println!("Compass server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code.to_string(),
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request",
        message: message.into(),
    }
}

impl From<CompareError> for AppError {
    fn from(err: CompareError) -> Self {
        let message = err.to_string();
        match err {
            CompareError::Validation(_) | CompareError::InsufficientInput { .. } => {
                bad_request(message)
            }
            CompareError::NotFound { .. } => AppError {
                status: StatusCode::NOT_FOUND,
                code: "not_found",
                message,
            },
            CompareError::DataIntegrity { .. } => {
                error!(%message, "catalog data integrity failure");
                AppError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    code: "data_integrity",
                    message,
                }
            }
            CompareError::Store(_) => {
                error!(%message, "catalog store failure");
                AppError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    code: "internal",
                    message,
                }
            }
        }
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /patterns ============

/// Raw query string; values are parsed by hand so bad input gets the JSON
/// error body instead of Axum's plain-text rejection.
#[derive(Deserialize, Default)]
struct PatternQuery {
    category: Option<String>,
    complexity: Option<String>,
    scalability: Option<String>,
}

fn parse_param<T: FromStr<Err = String>>(name: &str, value: Option<&str>) -> Result<Option<T>, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.parse().map_err(|e| bad_request(format!("invalid {}: {}", name, e))))
        .transpose()
}

impl PatternQuery {
    fn to_filter(&self) -> Result<PatternFilter, AppError> {
        Ok(PatternFilter {
            category: parse_param("category", self.category.as_deref())?,
            complexity: parse_param("complexity", self.complexity.as_deref())?,
            scalability: parse_param("scalability", self.scalability.as_deref())?,
        })
    }
}

#[derive(Serialize)]
struct PatternListResponse {
    patterns: Vec<ArchitecturePattern>,
}

async fn handle_list_patterns(
    State(state): State<AppState>,
    Query(query): Query<PatternQuery>,
) -> Result<Json<PatternListResponse>, AppError> {
    let filter = query.to_filter()?;
    let patterns = arch_compass_core::list_patterns(state.store.as_ref(), &filter).await?;
    Ok(Json(PatternListResponse { patterns }))
}

// ============ GET /patterns/{id} ============

async fn handle_get_pattern(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArchitecturePattern>, AppError> {
    let pattern = arch_compass_core::get_pattern(state.store.as_ref(), &id).await?;
    Ok(Json(pattern))
}

// ============ GET /criteria ============

#[derive(Serialize)]
struct CriteriaResponse {
    criteria: &'static [ComparisonCriterion],
}

async fn handle_criteria() -> Json<CriteriaResponse> {
    Json(CriteriaResponse {
        criteria: list_criteria(),
    })
}

// ============ POST /compare ============

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompareRequest {
    pattern_ids: Vec<String>,
    #[serde(default)]
    project_context: ProjectContext,
}

async fn handle_compare(
    State(state): State<AppState>,
    body: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<ComparisonResult>, AppError> {
    let Json(req) = body.map_err(|e| bad_request(e.body_text()))?;
    debug!(ids = ?req.pattern_ids, "compare request");

    let result =
        arch_compass_core::compare(state.store.as_ref(), &req.pattern_ids, req.project_context)
            .await?;
    Ok(Json(result))
}
