// src/explain.rs
//! One-sentence justifications for ranked courses (explainability).

/// Up to this many skills are named in the content fragment.
const HIGHLIGHTED_SKILLS: usize = 3;

/// Synthesize the explanation from which scorer(s) contributed.
///
/// `skills` must already be sorted (the payload builder hands over the
/// course's sorted skill list); `peer_count` is the collaborative-matrix
/// count of students who completed the course.
pub fn explanation(
    content_score: f64,
    collab_score: f64,
    skills: &[String],
    peer_count: usize,
) -> String {
    let mut fragments: Vec<String> = Vec::new();

    if content_score > 0.0 {
        let highlighted = if skills.is_empty() {
            "related skills".to_string()
        } else {
            skills
                .iter()
                .take(HIGHLIGHTED_SKILLS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        fragments.push(format!("matches your focus on {highlighted}"));
    }

    if collab_score > 0.0 {
        fragments.push(format!("popular with {peer_count} similar students"));
    }

    if fragments.is_empty() {
        fragments.push("broadens your MAC coursework".to_string());
    }

    fragments.join(" and ")
}
