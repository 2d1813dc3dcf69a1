//! Request DTOs for the HTTP API
//!
//! Bodies that need decoding or checks beyond the domain types. Each
//! `validate` returns an error message, or None if the request is valid.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::analytics::{FeedbackEntry, MAX_RATING, MIN_RATING};
use crate::documents::DocumentUpload;
use crate::models::{ImageInput, LessonPlanParams, StudentProfile, VisualizationParams};

/// Longest accepted lesson, in minutes.
pub const MAX_LESSON_MINUTES: u32 = 480;

/// Largest accepted upload after base64 decoding.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Largest accepted JSON request body: a base64-encoded upload of
/// `MAX_UPLOAD_BYTES` plus room for the surrounding fields.
pub const MAX_REQUEST_BODY_BYTES: usize = MAX_UPLOAD_BYTES.div_ceil(3) * 4 + 64 * 1024;

/// Request body for POST /content-analysis
#[derive(Debug, Clone, Deserialize)]
pub struct ContentAnalysisRequest {
    pub grade: String,
    pub mime_type: String,
    /// Standard base64 image bytes
    pub image_base64: String,
}

impl ContentAnalysisRequest {
    /// Decodes the image. Returns an error message on bad input.
    pub fn into_image(self) -> Result<(ImageInput, String), String> {
        if self.grade.trim().is_empty() {
            return Err("Grade cannot be empty".to_string());
        }
        if !self.mime_type.starts_with("image/") {
            return Err(format!("Unsupported mime type '{}'", self.mime_type));
        }
        let data = decode_payload(&self.image_base64)?;
        Ok((ImageInput::new(self.mime_type, data), self.grade))
    }
}

/// Request body for POST /documents/:owner_id
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentUploadRequest {
    pub file_name: String,
    pub mime_type: String,
    /// Standard base64 file bytes
    pub data: String,
}

impl DocumentUploadRequest {
    pub fn into_upload(self) -> Result<DocumentUpload, String> {
        if self.file_name.trim().is_empty() {
            return Err("File name cannot be empty".to_string());
        }
        let data = decode_payload(&self.data)?;
        Ok(DocumentUpload {
            file_name: self.file_name,
            mime_type: self.mime_type,
            data,
        })
    }
}

fn decode_payload(encoded: &str) -> Result<Vec<u8>, String> {
    let data = STANDARD
        .decode(encoded.trim())
        .map_err(|e| format!("Invalid base64 payload: {}", e))?;
    if data.is_empty() {
        return Err("Payload cannot be empty".to_string());
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(format!(
            "Payload exceeds maximum size of {} bytes",
            MAX_UPLOAD_BYTES
        ));
    }
    Ok(data)
}

// == Validation of domain parameters ==

pub fn validate_lesson_plan(params: &LessonPlanParams) -> Option<String> {
    if params.subject.trim().is_empty() {
        return Some("Subject cannot be empty".to_string());
    }
    if params.grade.trim().is_empty() {
        return Some("Grade cannot be empty".to_string());
    }
    if params.duration == 0 || params.duration > MAX_LESSON_MINUTES {
        return Some(format!(
            "Duration must be between 1 and {} minutes",
            MAX_LESSON_MINUTES
        ));
    }
    None
}

pub fn validate_student_profile(profile: &StudentProfile) -> Option<String> {
    if profile.name.trim().is_empty() {
        return Some("Student name cannot be empty".to_string());
    }
    if profile.grade.trim().is_empty() {
        return Some("Grade cannot be empty".to_string());
    }
    None
}

pub fn validate_visualizations(params: &VisualizationParams) -> Option<String> {
    if params.content.trim().is_empty() {
        return Some("Content cannot be empty".to_string());
    }
    if params.grade.trim().is_empty() {
        return Some("Grade cannot be empty".to_string());
    }
    None
}

pub fn validate_feedback(entries: &[FeedbackEntry]) -> Option<String> {
    entries
        .iter()
        .position(|e| !(MIN_RATING..=MAX_RATING).contains(&e.rating))
        .map(|index| {
            format!(
                "Entry {} has a rating outside {}..={}",
                index, MIN_RATING, MAX_RATING
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(duration: u32) -> LessonPlanParams {
        LessonPlanParams {
            subject: "Tamil".to_string(),
            grade: "Grade 3".to_string(),
            duration,
            topic: None,
            language: None,
            objectives: vec![],
        }
    }

    #[test]
    fn test_content_analysis_request_decodes() {
        let json = r#"{"grade": "Grade 5", "mime_type": "image/png", "image_base64": "AQID"}"#;
        let req: ContentAnalysisRequest = serde_json::from_str(json).unwrap();
        let (image, grade) = req.into_image().unwrap();

        assert_eq!(image.data, vec![1, 2, 3]);
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(grade, "Grade 5");
    }

    #[test]
    fn test_content_analysis_rejects_bad_input() {
        let bad_mime = ContentAnalysisRequest {
            grade: "Grade 5".to_string(),
            mime_type: "application/pdf".to_string(),
            image_base64: "AQID".to_string(),
        };
        assert!(bad_mime.into_image().is_err());

        let bad_base64 = ContentAnalysisRequest {
            grade: "Grade 5".to_string(),
            mime_type: "image/png".to_string(),
            image_base64: "***".to_string(),
        };
        assert!(bad_base64.into_image().unwrap_err().contains("base64"));
    }

    #[test]
    fn test_document_upload_request() {
        let req = DocumentUploadRequest {
            file_name: "notes.txt".to_string(),
            mime_type: "text/plain".to_string(),
            data: "aGVsbG8=".to_string(),
        };
        assert_eq!(req.into_upload().unwrap().data, b"hello".to_vec());

        let empty = DocumentUploadRequest {
            file_name: "notes.txt".to_string(),
            mime_type: "text/plain".to_string(),
            data: String::new(),
        };
        assert!(empty.into_upload().is_err());
    }

    #[test]
    fn test_validate_lesson_plan() {
        assert!(validate_lesson_plan(&lesson(45)).is_none());
        assert!(validate_lesson_plan(&lesson(0)).is_some());
        assert!(validate_lesson_plan(&lesson(MAX_LESSON_MINUTES + 1)).is_some());

        let mut blank = lesson(45);
        blank.subject = " ".to_string();
        assert!(validate_lesson_plan(&blank).is_some());
    }

    #[test]
    fn test_validate_feedback() {
        let ok = FeedbackEntry {
            lesson_id: None,
            rating: 5,
            comment: String::new(),
        };
        let bad = FeedbackEntry {
            rating: 6,
            ..ok.clone()
        };
        assert!(validate_feedback(&[ok.clone()]).is_none());
        assert_eq!(
            validate_feedback(&[ok, bad]),
            Some("Entry 1 has a rating outside 1..=5".to_string())
        );
    }
}
