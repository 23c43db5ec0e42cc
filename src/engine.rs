//! # Recommendation Engine
//! Pure, testable orchestration that maps `(snapshot, requester, config)` →
//! ranked recommendations. No I/O; suitable for unit tests with synthetic
//! snapshots.
//!
//! Both entry modes share the same tail: score content and collaborative
//! signals over the candidate set, normalize each to [0,1], blend with the
//! mode's weight pair, rank (combined desc, course id asc), truncate, and
//! synthesize explanations.

use std::collections::BTreeSet;

use tracing::info;

use crate::config::{BlendWeights, ScoringConfig};
use crate::explain;
use crate::profile::Profile;
use crate::recommendation::Recommendation;
use crate::scoring::{self, ScoreMap};
use crate::snapshot::Snapshot;

/// Recommend for an identified student from their completion history.
///
/// Candidates are courses the student has not completed whose prerequisite
/// set is fully contained in the completed set; a course with no declared
/// prerequisites is always eligible. An unknown student id reads as an empty
/// history and is not an error.
pub fn recommend_for_student(
    snapshot: &Snapshot,
    student_id: &str,
    top_n: usize,
    config: &ScoringConfig,
) -> Vec<Recommendation> {
    let completed = snapshot.completed_courses(student_id);

    let candidates: BTreeSet<String> = snapshot
        .courses()
        .iter()
        .filter(|(course_id, course)| {
            !completed.contains(*course_id) && course.prerequisites.is_subset(completed)
        })
        .map(|(course_id, _)| course_id.clone())
        .collect();

    if candidates.is_empty() {
        info!(
            target: "recommend",
            mode = "history",
            student = %student_id,
            "no eligible candidates"
        );
        return Vec::new();
    }

    let profile = Profile::from_completed_courses(completed.iter(), snapshot, &config.profile);
    let content = scoring::normalize(scoring::score_content(
        &candidates,
        &profile,
        snapshot,
        &config.profile,
    ));
    let collab = scoring::normalize(scoring::score_history_peers(
        student_id, &candidates, completed, snapshot,
    ));

    let results = build_payload(snapshot, &candidates, &content, &collab, &config.history, top_n);
    info!(
        target: "recommend",
        mode = "history",
        student = %student_id,
        candidates = candidates.len(),
        returned = results.len(),
        "recommendations ready"
    );
    results
}

/// Recommend for an anonymous visitor from raw interest tags.
///
/// There is no completion history, so no prerequisite gating applies; every
/// course is a candidate. Tags are trimmed and blanks dropped before use; an
/// effectively empty input is not an error and yields an all-zero ranking in
/// course-id order.
pub fn recommend_for_interests(
    snapshot: &Snapshot,
    interest_tags: &[String],
    top_n: usize,
    config: &ScoringConfig,
) -> Vec<Recommendation> {
    let candidates: BTreeSet<String> = snapshot.courses().keys().cloned().collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let cleaned: BTreeSet<String> = interest_tags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    let profile = Profile::from_interest_tags(cleaned.iter());
    let content = scoring::normalize(scoring::score_content(
        &candidates,
        &profile,
        snapshot,
        &config.profile,
    ));
    let collab = scoring::normalize(scoring::score_interest_peers(&candidates, &cleaned, snapshot));

    let results = build_payload(snapshot, &candidates, &content, &collab, &config.interest, top_n);
    info!(
        target: "recommend",
        mode = "interest",
        tags = cleaned.len(),
        candidates = candidates.len(),
        returned = results.len(),
        "recommendations ready"
    );
    results
}

/// Blend, rank, truncate and assemble payload records.
///
/// Missing entries in either normalized map count as 0. The sort is total:
/// combined score descending, ties broken by ascending course id, so the
/// same inputs always produce the same order.
fn build_payload(
    snapshot: &Snapshot,
    candidates: &BTreeSet<String>,
    content: &ScoreMap,
    collab: &ScoreMap,
    blend: &BlendWeights,
    top_n: usize,
) -> Vec<Recommendation> {
    let mut ranked: Vec<(&String, f64)> = candidates
        .iter()
        .map(|course_id| {
            let content_score = content.get(course_id).copied().unwrap_or(0.0);
            let collab_score = collab.get(course_id).copied().unwrap_or(0.0);
            (course_id, blend.combine(content_score, collab_score))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(top_n);

    ranked
        .into_iter()
        .filter_map(|(course_id, combined)| {
            let course = snapshot.course(course_id)?;
            let content_score = content.get(course_id).copied().unwrap_or(0.0);
            let collab_score = collab.get(course_id).copied().unwrap_or(0.0);
            let skills: Vec<String> = course.skills.iter().cloned().collect();
            let explanation = explain::explanation(
                content_score,
                collab_score,
                &skills,
                snapshot.completions_of(course_id).len(),
            );
            Some(Recommendation::from_scores(
                course_id.clone(),
                course,
                combined,
                content_score,
                collab_score,
                skills,
                explanation,
            ))
        })
        .collect()
}
