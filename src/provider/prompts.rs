//! Prompt builders, one per request kind.
//!
//! Each prompt asks for a single JSON object in the shape the validator
//! expects; the model may still wrap it in prose.

use crate::models::{LessonPlanParams, StudentProfile};

pub fn lesson_plan(params: &LessonPlanParams) -> String {
    let mut prompt = format!(
        "Create a {duration}-minute {subject} lesson plan for {grade} students",
        duration = params.duration,
        subject = params.subject,
        grade = params.grade,
    );
    if let Some(topic) = &params.topic {
        prompt.push_str(&format!(" on the topic \"{}\"", topic));
    }
    if let Some(language) = &params.language {
        prompt.push_str(&format!(", taught in {}", language));
    }
    prompt.push('.');
    if !params.objectives.is_empty() {
        prompt.push_str(&format!(
            " Learning objectives: {}.",
            params.objectives.join("; ")
        ));
    }
    prompt.push_str(
        r#"
Respond with only a JSON object of this shape:
{"title": string, "subject": string, "grade": string, "duration": number,
 "objectives": [string], "materials": [string],
 "activities": [{"name": string, "duration": number, "description": string}],
 "assessment": string, "homework": string}
Activity durations must add up to the lesson duration. Keep all content age-appropriate."#,
    );
    prompt
}

pub fn learning_pathway(profile: &StudentProfile) -> String {
    format!(
        r#"Design a personalised learning pathway for {name}, a {grade} student.
Strengths: {strengths}
Areas for improvement: {areas}
Learning style: {style}
Goals: {goals}
Respond with only a JSON object of this shape:
{{"student_name": string, "grade": string, "summary": string,
 "milestones": [{{"week": number, "title": string, "focus": string, "activities": [string]}}],
 "resources": [string]}}"#,
        name = profile.name,
        grade = profile.grade,
        strengths = list_or_none(&profile.strengths),
        areas = list_or_none(&profile.improvement_areas),
        style = profile.learning_style.as_deref().unwrap_or("not specified"),
        goals = list_or_none(&profile.goals),
    )
}

pub fn content_analysis(grade: &str) -> String {
    format!(
        r#"Analyse the attached classroom material for {grade} students.
Respond with only a JSON object of this shape:
{{"grade": string, "summary": string, "subject": string, "key_concepts": [string],
 "difficulty": string, "suggested_activities": [string], "discussion_questions": [string]}}"#
    )
}

pub fn visualizations(content: &str, grade: &str) -> String {
    format!(
        r#"Recommend visual aids that would help {grade} students understand this content:
"""
{content}
"""
Respond with only a JSON object of this shape:
{{"grade": string, "topic": string,
 "visualizations": [{{"chart_type": string, "title": string, "description": string, "elements": [string]}}]}}"#
    )
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none listed".to_string()
    } else {
        items.join(", ")
    }
}
