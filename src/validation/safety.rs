//! Content Safety Heuristic
//!
//! A case-insensitive keyword denylist. This is a coarse placeholder, not a
//! moderation guarantee: it misses paraphrased unsafe content and flags
//! benign uses (a history lesson mentioning violence). A real moderation
//! call should replace it.

use tracing::debug;

/// Terms whose presence anywhere in a response rejects it.
pub const BLOCKED_TERMS: &[&str] = &[
    "violence",
    "weapon",
    "drugs",
    "alcohol",
    "explicit",
    "gambling",
];

/// First blocked term found in `text`, ignoring case.
pub fn find_blocked_term(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    BLOCKED_TERMS
        .iter()
        .copied()
        .find(|term| lowered.contains(term))
}

/// False if the serialized response contains any blocked term.
///
/// The grade level does not change the denylist; it is only logged.
pub fn is_content_safe(serialized: &str, grade_level: &str) -> bool {
    match find_blocked_term(serialized) {
        Some(term) => {
            debug!(term, grade_level, "Response matched content denylist");
            false
        }
        None => true,
    }
}
