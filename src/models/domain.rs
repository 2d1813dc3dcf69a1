//! Domain Models
//!
//! Request parameters and the four result kinds produced by the orchestrator.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::cache::CacheKey;
use crate::error::Result;

// == Request Kind ==
/// The four kinds of generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestKind {
    LessonPlan,
    LearningPathway,
    ContentAnalysis,
    Visualizations,
}

impl RequestKind {
    /// Operation name used as the cache key prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::LessonPlan => "lessonPlan",
            RequestKind::LearningPathway => "learningPathway",
            RequestKind::ContentAnalysis => "contentAnalysis",
            RequestKind::Visualizations => "visualizations",
        }
    }

    /// Fields a parsed response must carry, non-empty, to be accepted.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            RequestKind::LessonPlan => &[
                "title",
                "subject",
                "grade",
                "duration",
                "objectives",
                "activities",
            ],
            RequestKind::LearningPathway => &["student_name", "grade", "milestones"],
            RequestKind::ContentAnalysis => &["summary", "key_concepts", "suggested_activities"],
            RequestKind::Visualizations => &["visualizations"],
        }
    }
}

// == Request Parameters ==
/// Parameters for lesson plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlanParams {
    pub subject: String,
    pub grade: String,
    /// Lesson length in minutes
    pub duration: u32,
    #[serde(default)]
    pub topic: Option<String>,
    /// Language of instruction, when different from the subject
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
}

/// Student profile driving learning pathway generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub grade: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvement_areas: Vec<String>,
    #[serde(default)]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

/// Image submitted for content analysis.
#[derive(Clone, PartialEq)]
pub struct ImageInput {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImageInput {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// SHA-256 of the image bytes, hex encoded.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.data))
    }
}

impl std::fmt::Debug for ImageInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageInput")
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Parameters for image content analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentAnalysisParams {
    pub image: ImageInput,
    pub grade: String,
}

/// Parameters for visualization recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationParams {
    pub content: String,
    pub grade: String,
}

// == Domain Request ==
/// One logical generation request: its kind plus parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainRequest {
    LessonPlan(LessonPlanParams),
    LearningPathway(StudentProfile),
    ContentAnalysis(ContentAnalysisParams),
    Visualizations(VisualizationParams),
}

/// Key material for content analysis: the image is represented by its digest.
#[derive(Serialize)]
struct ImageKeyParams<'a> {
    grade: &'a str,
    mime_type: &'a str,
    digest: String,
}

impl DomainRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            DomainRequest::LessonPlan(_) => RequestKind::LessonPlan,
            DomainRequest::LearningPathway(_) => RequestKind::LearningPathway,
            DomainRequest::ContentAnalysis(_) => RequestKind::ContentAnalysis,
            DomainRequest::Visualizations(_) => RequestKind::Visualizations,
        }
    }

    /// Grade level the request targets.
    pub fn grade(&self) -> &str {
        match self {
            DomainRequest::LessonPlan(p) => &p.grade,
            DomainRequest::LearningPathway(p) => &p.grade,
            DomainRequest::ContentAnalysis(p) => &p.grade,
            DomainRequest::Visualizations(p) => &p.grade,
        }
    }

    /// Canonical cache key for this request.
    pub fn cache_key(&self) -> Result<CacheKey> {
        let operation = self.kind().as_str();
        match self {
            DomainRequest::LessonPlan(p) => CacheKey::new(operation, p),
            DomainRequest::LearningPathway(p) => CacheKey::new(operation, p),
            DomainRequest::ContentAnalysis(p) => CacheKey::new(
                operation,
                &ImageKeyParams {
                    grade: &p.grade,
                    mime_type: &p.image.mime_type,
                    digest: p.image.digest(),
                },
            ),
            DomainRequest::Visualizations(p) => CacheKey::new(operation, p),
        }
    }
}

// == Results ==
/// One timed step of a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonActivity {
    pub name: String,
    /// Minutes
    pub duration: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub title: String,
    pub subject: String,
    pub grade: String,
    pub duration: u32,
    pub objectives: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    pub activities: Vec<LessonActivity>,
    #[serde(default)]
    pub assessment: String,
    #[serde(default)]
    pub homework: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayMilestone {
    pub week: u32,
    pub title: String,
    pub focus: String,
    #[serde(default)]
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPathway {
    pub student_name: String,
    pub grade: String,
    #[serde(default)]
    pub summary: String,
    pub milestones: Vec<PathwayMilestone>,
    #[serde(default)]
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    #[serde(default)]
    pub grade: String,
    pub summary: String,
    #[serde(default)]
    pub subject: String,
    pub key_concepts: Vec<String>,
    #[serde(default)]
    pub difficulty: String,
    pub suggested_activities: Vec<String>,
    #[serde(default)]
    pub discussion_questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    /// e.g. "concept-map", "timeline", "bar-chart"
    pub chart_type: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationSet {
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub topic: String,
    pub visualizations: Vec<Visualization>,
}

// == Domain Result ==
/// Validated or synthesized payload returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DomainResult {
    LessonPlan(LessonPlan),
    LearningPathway(LearningPathway),
    ContentAnalysis(ContentAnalysis),
    Visualizations(VisualizationSet),
}

impl DomainResult {
    pub fn kind(&self) -> RequestKind {
        match self {
            DomainResult::LessonPlan(_) => RequestKind::LessonPlan,
            DomainResult::LearningPathway(_) => RequestKind::LearningPathway,
            DomainResult::ContentAnalysis(_) => RequestKind::ContentAnalysis,
            DomainResult::Visualizations(_) => RequestKind::Visualizations,
        }
    }

    pub fn into_lesson_plan(self) -> Option<LessonPlan> {
        match self {
            DomainResult::LessonPlan(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn into_learning_pathway(self) -> Option<LearningPathway> {
        match self {
            DomainResult::LearningPathway(pathway) => Some(pathway),
            _ => None,
        }
    }

    pub fn into_content_analysis(self) -> Option<ContentAnalysis> {
        match self {
            DomainResult::ContentAnalysis(analysis) => Some(analysis),
            _ => None,
        }
    }

    pub fn into_visualizations(self) -> Option<VisualizationSet> {
        match self {
            DomainResult::Visualizations(set) => Some(set),
            _ => None,
        }
    }
}
