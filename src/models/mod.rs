//! Models
//!
//! Domain types for generation requests and results, plus the DTOs used
//! for serializing/deserializing HTTP request and response bodies.

pub mod domain;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use domain::{
    ContentAnalysis, ContentAnalysisParams, DomainRequest, DomainResult, ImageInput,
    LearningPathway, LessonActivity, LessonPlan, LessonPlanParams, PathwayMilestone, RequestKind,
    StudentProfile, Visualization, VisualizationParams, VisualizationSet,
};
pub use requests::{ContentAnalysisRequest, DocumentUploadRequest};
pub use responses::{ClearCacheResponse, ErrorResponse, HealthResponse, StatsResponse};
