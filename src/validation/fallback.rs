//! Fallback Synthesis
//!
//! Deterministic, schema-valid placeholder content built only from request
//! parameters. Used whenever a model response cannot be used as-is.

use crate::models::{
    ContentAnalysis, ContentAnalysisParams, DomainRequest, DomainResult, LearningPathway,
    LessonActivity, LessonPlan, LessonPlanParams, PathwayMilestone, StudentProfile, Visualization,
    VisualizationParams, VisualizationSet,
};

/// Words of the submitted content used to name a visualization topic.
const TOPIC_WORDS: usize = 6;

/// Builds placeholder content for `request`.
///
/// Pure: identical requests always produce equal results.
pub fn synthesize_fallback(request: &DomainRequest) -> DomainResult {
    match request {
        DomainRequest::LessonPlan(params) => DomainResult::LessonPlan(lesson_plan(params)),
        DomainRequest::LearningPathway(profile) => {
            DomainResult::LearningPathway(learning_pathway(profile))
        }
        DomainRequest::ContentAnalysis(params) => {
            DomainResult::ContentAnalysis(content_analysis(params))
        }
        DomainRequest::Visualizations(params) => {
            DomainResult::Visualizations(visualization_set(params))
        }
    }
}

// == Lesson Plan ==
fn lesson_plan(params: &LessonPlanParams) -> LessonPlan {
    let focus = params
        .topic
        .clone()
        .unwrap_or_else(|| params.subject.clone());

    // warm-up 15%, main 50%, practice 25%, wrap-up takes the remainder
    let warm_up = share(params.duration, 15);
    let main = share(params.duration, 50);
    let practice = share(params.duration, 25);
    let wrap_up = params.duration - warm_up - main - practice;

    let objectives = if params.objectives.is_empty() {
        vec![
            format!("Recall prior knowledge related to {}", focus),
            format!("Explain the key ideas of {} in their own words", focus),
            format!("Apply {} concepts in a short guided task", focus),
        ]
    } else {
        params.objectives.clone()
    };

    let mut materials = vec![
        "Whiteboard and markers".to_string(),
        format!("{} textbook or reader", params.subject),
        "Student notebooks".to_string(),
    ];
    if let Some(language) = &params.language {
        materials.push(format!("Vocabulary cards in {}", language));
    }

    LessonPlan {
        title: format!("{}: {} ({})", params.subject, focus, params.grade),
        subject: params.subject.clone(),
        grade: params.grade.clone(),
        duration: params.duration,
        objectives,
        materials,
        activities: vec![
            LessonActivity {
                name: "Warm-up".to_string(),
                duration: warm_up,
                description: format!(
                    "Quick questions to connect what students already know to {}.",
                    focus
                ),
            },
            LessonActivity {
                name: "Direct instruction".to_string(),
                duration: main,
                description: format!(
                    "Introduce {} with examples suited to {} learners.",
                    focus, params.grade
                ),
            },
            LessonActivity {
                name: "Guided practice".to_string(),
                duration: practice,
                description: format!("Pairs work through practice tasks on {}.", focus),
            },
            LessonActivity {
                name: "Wrap-up".to_string(),
                duration: wrap_up,
                description: "Students share one thing they learned and one open question."
                    .to_string(),
            },
        ],
        assessment: format!(
            "Exit ticket with three short questions on {} reviewed before the next lesson.",
            focus
        ),
        homework: Some(format!("Review today's notes on {}.", focus)),
    }
}

fn share(minutes: u32, percent: u64) -> u32 {
    (u64::from(minutes) * percent / 100) as u32
}

// == Learning Pathway ==
fn learning_pathway(profile: &StudentProfile) -> LearningPathway {
    let leverage = match profile.strengths.first() {
        Some(strength) => format!("Build on strength in {}.", strength),
        None => "Build confidence with short, achievable tasks.".to_string(),
    };

    let focus_areas: Vec<(&str, &String)> = profile
        .improvement_areas
        .iter()
        .map(|area| ("Strengthen", area))
        .chain(profile.goals.iter().map(|goal| ("Work toward", goal)))
        .collect();

    let milestones: Vec<PathwayMilestone> = if focus_areas.is_empty() {
        vec![PathwayMilestone {
            week: 1,
            title: "Establish a learning routine".to_string(),
            focus: "General study habits".to_string(),
            activities: vec![
                "Set a weekly reading goal".to_string(),
                "Keep a short learning journal".to_string(),
                leverage.clone(),
            ],
        }]
    } else {
        focus_areas
            .iter()
            .enumerate()
            .map(|(i, (verb, area))| PathwayMilestone {
                week: i as u32 + 1,
                title: format!("{} {}", verb, area),
                focus: (*area).clone(),
                activities: vec![
                    format!("Short daily practice on {}", area),
                    format!("Teacher check-in on {} progress", area),
                    leverage.clone(),
                ],
            })
            .collect()
    };

    let style = profile
        .learning_style
        .as_deref()
        .map(|s| format!(" using a {} approach", s))
        .unwrap_or_default();

    LearningPathway {
        student_name: profile.name.clone(),
        grade: profile.grade.clone(),
        summary: format!(
            "A {}-week plan for {} ({}){}.",
            milestones.len(),
            profile.name,
            profile.grade,
            style
        ),
        milestones,
        resources: vec![
            format!("{} practice workbook", profile.grade),
            "Class library reading list".to_string(),
        ],
    }
}

// == Content Analysis ==
fn content_analysis(params: &ContentAnalysisParams) -> ContentAnalysis {
    ContentAnalysis {
        grade: params.grade.clone(),
        summary: format!(
            "Classroom material submitted for {} review. Automatic analysis was unavailable, so a general review plan is provided.",
            params.grade
        ),
        subject: "General".to_string(),
        key_concepts: vec![
            "Main idea".to_string(),
            "Key vocabulary".to_string(),
            "Supporting details".to_string(),
        ],
        difficulty: format!("Appropriate for {}", params.grade),
        suggested_activities: vec![
            "Describe the material in small groups".to_string(),
            "List unfamiliar words and look them up together".to_string(),
            "Summarize the material in three sentences".to_string(),
        ],
        discussion_questions: vec![
            "What is this material mainly about?".to_string(),
            "Which part was the most surprising?".to_string(),
            "How does it connect to what we studied before?".to_string(),
        ],
    }
}

// == Visualizations ==
fn visualization_set(params: &VisualizationParams) -> VisualizationSet {
    let topic = topic_from(&params.content);

    VisualizationSet {
        grade: params.grade.clone(),
        visualizations: vec![
            Visualization {
                chart_type: "concept-map".to_string(),
                title: format!("Concept map: {}", topic),
                description: "Connect the central idea to its supporting ideas.".to_string(),
                elements: vec![topic.clone(), "Key terms".to_string(), "Examples".to_string()],
            },
            Visualization {
                chart_type: "timeline".to_string(),
                title: format!("Sequence of {}", topic),
                description: "Order the steps or events in the material.".to_string(),
                elements: vec![
                    "Beginning".to_string(),
                    "Middle".to_string(),
                    "End".to_string(),
                ],
            },
            Visualization {
                chart_type: "comparison-chart".to_string(),
                title: format!("Compare and contrast: {}", topic),
                description: format!(
                    "A two-column chart sized for {} students to compare ideas.",
                    params.grade
                ),
                elements: vec!["Similarities".to_string(), "Differences".to_string()],
            },
        ],
        topic,
    }
}

/// First few words of `content`, or a generic label when it is blank.
pub(crate) fn topic_from(content: &str) -> String {
    let words: Vec<&str> = content.split_whitespace().take(TOPIC_WORDS).collect();
    if words.is_empty() {
        "Lesson content".to_string()
    } else {
        words.join(" ")
    }
}
