// Axum API server
//
// POST /api/fortune runs the pipeline for one birth input and caches the
// finished report under its request id; the report can then be fetched as the
// detail JSON or as the paginated Markdown document. POST /api/inquiry takes
// a follow-up consultation request for an earlier report.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::chart::{BirthInput, RawChart};
use crate::config::AppConfig;
use crate::error::{FortuneError, Stage, StageFailure};
use crate::inquiry::Inquiry;
use crate::interpretation::{JsonFormatter, MarkdownFormatter};
use crate::pipeline::{ChartCalculator, FortunePipeline, FortuneReport, PrecomputedChart, RequestContext};
use crate::sync::{ConsoleSink, ReportSink};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<FortunePipeline>,
    /// Used when a request carries no precomputed chart
    pub calculator: Option<Arc<dyn ChartCalculator>>,
    pub reports: Cache<String, Arc<FortuneReport>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig, calculator: Option<Arc<dyn ChartCalculator>>) -> Self {
        let sink: Arc<dyn ReportSink> = Arc::new(ConsoleSink);
        let pipeline = FortunePipeline::new(Some(sink), config.retry_policy());
        Self::with_pipeline(config, pipeline, calculator)
    }

    pub fn with_pipeline(
        config: AppConfig,
        pipeline: FortunePipeline,
        calculator: Option<Arc<dyn ChartCalculator>>,
    ) -> Self {
        tracing::info!("Initializing Moka report cache...");
        let reports = Cache::builder()
            .max_capacity(config.report_cache_capacity)
            .time_to_live(config.report_cache_ttl)
            .build();

        Self {
            pipeline: Arc::new(pipeline),
            calculator,
            reports,
            config,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/fortune", post(analyze_fortune))
        .route("/api/reports/:id", get(get_report))
        .route("/api/reports/:id/markdown", get(get_report_markdown))
        .route("/api/inquiry", post(submit_inquiry))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub birth_input: BirthInput,
    #[serde(default)]
    pub chart: Option<RawChart>,
}

async fn analyze_fortune(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let ctx = RequestContext::new();
    let AnalyzeRequest { birth_input, chart } = payload;

    let calculator: Arc<dyn ChartCalculator> = match chart {
        Some(chart) => Arc::new(PrecomputedChart(chart)),
        None => state.calculator.clone().ok_or_else(|| {
            AppError::BadRequest("request has no chart and no calculator is configured".to_string())
        })?,
    };

    // Calculator boundary: blocking thread, bounded by the configured timeout
    let raw = {
        let pipeline = state.pipeline.clone();
        let task_ctx = ctx.clone();
        let input = birth_input.clone();
        let task = tokio::task::spawn_blocking(move || {
            pipeline.calculate(&task_ctx, calculator.as_ref(), &input)
        });

        match tokio::time::timeout(state.config.chart_timeout, task).await {
            Ok(joined) => joined.map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??,
            Err(_) => {
                let err = FortuneError::Timeout(state.config.chart_timeout.as_millis() as u64);
                tracing::error!(request_id = %ctx.request_id, stage = %Stage::Calculator, "{}", err);
                return Err(AppError::Timeout(err.to_string()));
            }
        }
    };

    let report = {
        let pipeline = state.pipeline.clone();
        let ctx = ctx.clone();
        tokio::task::spawn_blocking(move || pipeline.interpret(&ctx, &raw, &birth_input))
            .await
            .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??
    };

    let response = serde_json::json!({
        "requestId": report.request_id,
        "summary": report.interpretation.summary,
        "sync": report.sync,
    });

    state
        .reports
        .insert(report.request_id.clone(), Arc::new(report))
        .await;

    Ok(Json(response))
}

async fn submit_inquiry(
    State(state): State<AppState>,
    Json(inquiry): Json<Inquiry>,
) -> Result<Json<serde_json::Value>, AppError> {
    let ctx = RequestContext::new();
    let pipeline = state.pipeline.clone();
    let sync = tokio::task::spawn_blocking(move || pipeline.submit_inquiry(&ctx, &inquiry))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(serde_json::json!({ "accepted": true, "sync": sync })))
}

async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let report = cached_report(&state, &id).await?;
    let body = JsonFormatter::format(&report.interpretation.detail)
        .map_err(|e| AppError::Internal(format!("Export error: {}", e)))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

async fn get_report_markdown(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let report = cached_report(&state, &id).await?;
    let body = MarkdownFormatter::format(&report.interpretation.detail);
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], body))
}

async fn cached_report(state: &AppState, id: &str) -> Result<Arc<FortuneReport>, AppError> {
    match state.reports.get(id).await {
        Some(report) => {
            tracing::debug!("Cache hit for report {}", id);
            Ok(report)
        }
        None => Err(AppError::NotFound(format!("Report {} not found", id))),
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Stage(StageFailure),
    Timeout(String),
    Internal(String),
}

impl From<StageFailure> for AppError {
    fn from(failure: StageFailure) -> Self {
        AppError::Stage(failure)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg })),
            AppError::Timeout(msg) => (
                StatusCode::GATEWAY_TIMEOUT,
                serde_json::json!({ "error": msg, "source": Stage::Calculator }),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, serde_json::json!({ "error": msg })),
            AppError::Stage(failure) => {
                let status = match failure.stage {
                    Stage::Validation => StatusCode::BAD_REQUEST,
                    Stage::Calculator => StatusCode::BAD_GATEWAY,
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (
                    status,
                    serde_json::json!({ "error": failure.message, "source": failure.stage }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
