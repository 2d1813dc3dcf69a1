//! Orchestrator Module
//!
//! Request pipeline shared by every generation feature:
//!
//! ```text
//! cache lookup ─hit──────────────────────────────────────────────▶ return
//!      │miss
//! rate check ─rejected──▶ RateLimitExceeded
//!      │admitted
//! remote call (retry) ─exhausted──▶ RemoteCall error
//!      │text
//! validate ─rejected──▶ synthesize fallback ─┐
//!      │valid                                ▼
//!      └──────────────────────────────▶ cache store ─▶ return
//! ```

mod inflight;

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, CacheStats, ResponseCache};
use crate::config::Config;
use crate::error::{OrchestratorError, Result};
use crate::models::{
    ContentAnalysis, ContentAnalysisParams, DomainRequest, DomainResult, ImageInput,
    LearningPathway, LessonPlan, LessonPlanParams, RequestKind, StudentProfile,
    VisualizationParams, VisualizationSet,
};
use crate::provider::{prompts, CompletionProvider};
use crate::resilience::{RateLimitStatus, RateLimiter, RetryPolicy};
use crate::validation::{resolve_response, synthesize_fallback};

pub use inflight::InFlightRequests;

// == Orchestrator ==
/// Cached, rate-limited, retried access to the completion endpoint.
///
/// Construct one per application and share it by `Arc`; each instance owns
/// its own cache and rate window.
pub struct Orchestrator {
    provider: Arc<dyn CompletionProvider>,
    cache: Mutex<ResponseCache<DomainResult>>,
    limiter: Mutex<RateLimiter>,
    retry: RetryPolicy,
    in_flight: InFlightRequests,
}

impl Orchestrator {
    pub fn new(provider: Arc<dyn CompletionProvider>, config: &Config) -> Self {
        Self {
            provider,
            cache: Mutex::new(ResponseCache::new(config.cache_ttl())),
            limiter: Mutex::new(RateLimiter::new(
                config.rate_limit_max_requests,
                config.rate_limit_window(),
            )),
            retry: RetryPolicy::new(config.retry_max_attempts, config.retry_base_delay()),
            in_flight: InFlightRequests::new(),
        }
    }

    // == Entry Points ==
    pub async fn request_lesson_plan(&self, params: LessonPlanParams) -> Result<LessonPlan> {
        self.request(DomainRequest::LessonPlan(params))
            .await?
            .into_lesson_plan()
            .ok_or_else(|| unexpected(RequestKind::LessonPlan))
    }

    pub async fn request_learning_pathway(
        &self,
        profile: StudentProfile,
    ) -> Result<LearningPathway> {
        self.request(DomainRequest::LearningPathway(profile))
            .await?
            .into_learning_pathway()
            .ok_or_else(|| unexpected(RequestKind::LearningPathway))
    }

    pub async fn request_content_analysis(
        &self,
        image: ImageInput,
        grade: &str,
    ) -> Result<ContentAnalysis> {
        let params = ContentAnalysisParams {
            image,
            grade: grade.to_string(),
        };
        self.request(DomainRequest::ContentAnalysis(params))
            .await?
            .into_content_analysis()
            .ok_or_else(|| unexpected(RequestKind::ContentAnalysis))
    }

    pub async fn request_visualizations(
        &self,
        content: &str,
        grade: &str,
    ) -> Result<VisualizationSet> {
        let params = VisualizationParams {
            content: content.to_string(),
            grade: grade.to_string(),
        };
        self.request(DomainRequest::Visualizations(params))
            .await?
            .into_visualizations()
            .ok_or_else(|| unexpected(RequestKind::Visualizations))
    }

    /// Runs one logical request through the full pipeline.
    pub async fn request(&self, request: DomainRequest) -> Result<DomainResult> {
        let key = request.cache_key()?;

        let member = self.in_flight.enter(&key);
        let _turn = member.gate().lock().await;
        let outcome = self.resolve(&request, &key).await;
        outcome
    }

    async fn resolve(&self, request: &DomainRequest, key: &CacheKey) -> Result<DomainResult> {
        let cached = self.cache.lock().await.get(key);
        if let Some(result) = cached {
            debug!(key = %key, "Cache hit");
            return Ok(result);
        }
        debug!(key = %key, "Cache miss");

        self.admit().await?;

        let text = self.retry.execute(|| self.call_remote(request)).await?;

        let result = match resolve_response(request, &text) {
            Ok(result) => result,
            Err(rejection) => {
                warn!(
                    kind = request.kind().as_str(),
                    reason = %rejection,
                    "Model response unusable, synthesizing fallback"
                );
                synthesize_fallback(request)
            }
        };

        self.cache.lock().await.set(key.clone(), result.clone());
        Ok(result)
    }

    /// Admission check. The limiter lock is held only for the synchronous
    /// prune-check-record call.
    async fn admit(&self) -> Result<()> {
        let mut limiter = self.limiter.lock().await;
        if limiter.can_make_request() {
            return Ok(());
        }

        let wait = limiter.wait_time();
        warn!(wait_ms = wait.as_millis() as u64, "Rate limit exceeded");
        Err(OrchestratorError::RateLimitExceeded { wait })
    }

    async fn call_remote(&self, request: &DomainRequest) -> Result<String> {
        match request {
            DomainRequest::LessonPlan(params) => {
                self.provider.complete(&prompts::lesson_plan(params)).await
            }
            DomainRequest::LearningPathway(profile) => {
                self.provider
                    .complete(&prompts::learning_pathway(profile))
                    .await
            }
            DomainRequest::ContentAnalysis(params) => {
                self.provider
                    .complete_with_image(
                        &prompts::content_analysis(&params.grade),
                        &params.image.data,
                        &params.image.mime_type,
                    )
                    .await
            }
            DomainRequest::Visualizations(params) => {
                self.provider
                    .complete(&prompts::visualizations(&params.content, &params.grade))
                    .await
            }
        }
    }

    // == Diagnostics ==
    /// Drops every cached result so the next identical request goes remote.
    pub async fn clear_cache(&self) -> usize {
        let cleared = self.cache.lock().await.clear();
        info!(cleared, "Cache cleared");
        cleared
    }

    pub async fn cache_size(&self) -> usize {
        self.cache.lock().await.len()
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.lock().await.stats()
    }

    pub async fn rate_limit_status(&self) -> RateLimitStatus {
        self.limiter.lock().await.status()
    }

    /// Removes expired cache entries and stale rate-window timestamps.
    /// Returns the number of cache entries removed.
    pub async fn purge_expired(&self) -> usize {
        let removed = self.cache.lock().await.cleanup_expired();
        let pruned = self.limiter.lock().await.prune();
        debug!(removed, pruned, "Purged expired state");
        removed
    }
}

fn unexpected(kind: RequestKind) -> OrchestratorError {
    OrchestratorError::Internal(format!("pipeline returned a non-{} result", kind.as_str()))
}
