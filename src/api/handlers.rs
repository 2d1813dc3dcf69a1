//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::analytics::{summarize_feedback, FeedbackEntry, FeedbackSummary};
use crate::config::Config;
use crate::documents::{DocumentRecord, DocumentStore, LocalDocumentStore};
use crate::error::{OrchestratorError, Result};
use crate::models::requests::{
    validate_feedback, validate_lesson_plan, validate_student_profile, validate_visualizations,
};
use crate::models::{
    ClearCacheResponse, ContentAnalysis, ContentAnalysisRequest, DocumentUploadRequest,
    HealthResponse, LearningPathway, LessonPlan, LessonPlanParams, StatsResponse, StudentProfile,
    VisualizationParams, VisualizationSet,
};
use crate::orchestrator::Orchestrator;
use crate::provider::CompletionProvider;
use crate::resilience::RateLimitStatus;

/// Themes returned by the feedback summary endpoint.
const FEEDBACK_THEMES: usize = 5;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub documents: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator, documents: Arc<dyn DocumentStore>) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            documents,
        }
    }

    /// Wires an orchestrator over `provider` and a local document store.
    pub fn from_config(config: &Config, provider: Arc<dyn CompletionProvider>) -> Self {
        Self::new(
            Orchestrator::new(provider, config),
            Arc::new(LocalDocumentStore::new()),
        )
    }
}

fn reject_invalid(message: Option<String>) -> Result<()> {
    match message {
        Some(msg) => Err(OrchestratorError::InvalidRequest(msg)),
        None => Ok(()),
    }
}

/// Handler for POST /lesson-plan
pub async fn lesson_plan_handler(
    State(state): State<AppState>,
    Json(params): Json<LessonPlanParams>,
) -> Result<Json<LessonPlan>> {
    reject_invalid(validate_lesson_plan(&params))?;
    let plan = state.orchestrator.request_lesson_plan(params).await?;
    Ok(Json(plan))
}

/// Handler for POST /learning-pathway
pub async fn learning_pathway_handler(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<LearningPathway>> {
    reject_invalid(validate_student_profile(&profile))?;
    let pathway = state.orchestrator.request_learning_pathway(profile).await?;
    Ok(Json(pathway))
}

/// Handler for POST /content-analysis
pub async fn content_analysis_handler(
    State(state): State<AppState>,
    Json(req): Json<ContentAnalysisRequest>,
) -> Result<Json<ContentAnalysis>> {
    let (image, grade) = req.into_image().map_err(OrchestratorError::InvalidRequest)?;
    let analysis = state
        .orchestrator
        .request_content_analysis(image, &grade)
        .await?;
    Ok(Json(analysis))
}

/// Handler for POST /visualizations
pub async fn visualizations_handler(
    State(state): State<AppState>,
    Json(params): Json<VisualizationParams>,
) -> Result<Json<VisualizationSet>> {
    reject_invalid(validate_visualizations(&params))?;
    let set = state
        .orchestrator
        .request_visualizations(&params.content, &params.grade)
        .await?;
    Ok(Json(set))
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let cleared = state.orchestrator.clear_cache().await;
    Json(ClearCacheResponse::new(cleared))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.orchestrator.cache_stats().await;
    let rate_limit = state.orchestrator.rate_limit_status().await;
    Json(StatsResponse::new(stats, rate_limit))
}

/// Handler for GET /rate-limit
pub async fn rate_limit_handler(State(state): State<AppState>) -> Json<RateLimitStatus> {
    Json(state.orchestrator.rate_limit_status().await)
}

/// Handler for POST /feedback/summary
pub async fn feedback_summary_handler(
    Json(entries): Json<Vec<FeedbackEntry>>,
) -> Result<Json<FeedbackSummary>> {
    reject_invalid(validate_feedback(&entries))?;
    Ok(Json(summarize_feedback(&entries, FEEDBACK_THEMES)))
}

/// Handler for POST /documents/:owner_id
pub async fn upload_document_handler(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
    Json(req): Json<DocumentUploadRequest>,
) -> Result<(StatusCode, Json<DocumentRecord>)> {
    let upload = req.into_upload().map_err(OrchestratorError::InvalidRequest)?;
    let record = state.documents.put(&owner_id, upload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for GET /documents/:owner_id
pub async fn list_documents_handler(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<Json<Vec<DocumentRecord>>> {
    Ok(Json(state.documents.list(&owner_id).await?))
}

/// Handler for DELETE /documents/:owner_id/:document_id
pub async fn delete_document_handler(
    State(state): State<AppState>,
    Path((owner_id, document_id)): Path<(String, Uuid)>,
) -> Result<StatusCode> {
    let owned = state
        .documents
        .list(&owner_id)
        .await?
        .iter()
        .any(|r| r.id == document_id);
    if !owned {
        return Err(OrchestratorError::NotFound(format!(
            "document {} for owner {}",
            document_id, owner_id
        )));
    }
    state.documents.delete(document_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
