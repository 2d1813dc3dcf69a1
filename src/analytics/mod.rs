//! Feedback Analytics
//!
//! Aggregates lesson feedback into averages, a rating distribution, and
//! recurring themes pulled from free-text comments.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Lowest and highest accepted ratings.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Words shorter than this never count as themes.
const MIN_THEME_LEN: usize = 4;

const STOP_WORDS: &[&str] = &[
    "about", "after", "also", "been", "before", "being", "could", "does", "each", "from", "have",
    "into", "just", "like", "made", "make", "more", "most", "much", "only", "other", "over",
    "really", "should", "some", "than", "that", "their", "them", "then", "there", "these", "they",
    "this", "very", "were", "what", "when", "which", "while", "will", "with", "would", "your",
];

/// One piece of feedback on a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(default)]
    pub lesson_id: Option<String>,
    /// 1 to 5
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

/// A recurring word across comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub term: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackSummary {
    pub total: usize,
    /// Mean of in-range ratings, 0.0 when there are none
    pub average_rating: f64,
    /// Count per rating, every rating from 1 to 5 present
    pub rating_distribution: BTreeMap<u8, usize>,
    pub themes: Vec<Theme>,
}

/// Aggregates `entries`, keeping at most `max_themes` themes.
///
/// Ratings outside 1..=5 are left out of the average and distribution but
/// still count toward `total`.
pub fn summarize_feedback(entries: &[FeedbackEntry], max_themes: usize) -> FeedbackSummary {
    let mut rating_distribution: BTreeMap<u8, usize> =
        (MIN_RATING..=MAX_RATING).map(|r| (r, 0)).collect();

    let mut sum = 0u64;
    let mut rated = 0usize;
    for entry in entries {
        if let Some(count) = rating_distribution.get_mut(&entry.rating) {
            *count += 1;
            sum += u64::from(entry.rating);
            rated += 1;
        }
    }

    let average_rating = if rated == 0 {
        0.0
    } else {
        sum as f64 / rated as f64
    };

    FeedbackSummary {
        total: entries.len(),
        average_rating,
        rating_distribution,
        themes: extract_themes(entries.iter().map(|e| e.comment.as_str()), max_themes),
    }
}

/// Naive theme extraction: word frequency over lowercase comment words,
/// ties broken alphabetically.
pub fn extract_themes<'a>(comments: impl Iterator<Item = &'a str>, max_themes: usize) -> Vec<Theme> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for comment in comments {
        for word in comment
            .split(|c: char| !c.is_alphanumeric())
            .map(str::to_lowercase)
            .filter(|w| w.chars().count() >= MIN_THEME_LEN)
            .filter(|w| !STOP_WORDS.contains(&w.as_str()))
        {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut themes: Vec<Theme> = counts
        .into_iter()
        .map(|(term, count)| Theme { term, count })
        .collect();
    themes.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    themes.truncate(max_themes);
    themes
}
