//! Validation Module
//!
//! Turns raw model output into a domain result, or explains why it cannot.
//!
//! Pipeline: extract JSON → check required fields → content-safety heuristic
//! → typed decode. Any rejection is recovered by [`synthesize_fallback`].

mod extract;
mod fallback;
mod fields;
mod safety;


use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

use crate::models::{ContentAnalysis, DomainRequest, DomainResult, RequestKind, VisualizationSet};

pub use extract::extract_structured;
pub use fallback::synthesize_fallback;
pub use fields::{missing_fields, validate};
pub use safety::{find_blocked_term, is_content_safe, BLOCKED_TERMS};

// == Rejection ==
/// Why a model response was not used. Never surfaced to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("unparseable response: {0}")]
    Parse(String),

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("content matched denylist term '{0}'")]
    Unsafe(&'static str),

    #[error("response does not match schema: {0}")]
    Schema(String),
}

// == Resolve Response ==
/// Validates model output for `request` and decodes it into a result.
pub fn resolve_response(request: &DomainRequest, text: &str) -> Result<DomainResult, Rejection> {
    let kind = request.kind();
    let mut value = extract_structured(text)?;

    if kind == RequestKind::Visualizations && value.is_array() {
        value = json!({ "visualizations": value });
    }

    let missing = missing_fields(&value, kind.required_fields());
    if !missing.is_empty() {
        return Err(Rejection::MissingFields(
            missing.into_iter().map(String::from).collect(),
        ));
    }

    let serialized = value.to_string();
    if !is_content_safe(&serialized, request.grade()) {
        let term = find_blocked_term(&serialized).unwrap_or("unknown");
        return Err(Rejection::Unsafe(term));
    }

    let result = match request {
        DomainRequest::LessonPlan(_) => DomainResult::LessonPlan(decode(value)?),
        DomainRequest::LearningPathway(_) => DomainResult::LearningPathway(decode(value)?),
        DomainRequest::ContentAnalysis(params) => {
            let mut analysis: ContentAnalysis = decode(value)?;
            if analysis.grade.trim().is_empty() {
                analysis.grade = params.grade.clone();
            }
            DomainResult::ContentAnalysis(analysis)
        }
        DomainRequest::Visualizations(params) => {
            let mut set: VisualizationSet = decode(value)?;
            if set.grade.trim().is_empty() {
                set.grade = params.grade.clone();
            }
            if set.topic.trim().is_empty() {
                set.topic = fallback::topic_from(&params.content);
            }
            DomainResult::Visualizations(set)
        }
    };

    Ok(result)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Rejection> {
    serde_json::from_value(value).map_err(|e| Rejection::Schema(e.to_string()))
}
