// src/scoring/collaborative.rs
//! Collaborative scorer: similarity contributions from other students.
//!
//! Both variants do a full scan over the snapshot's student indices,
//! O(students × avg-completions); the snapshot keeps those indices in
//! ordered maps so contribution sums are identical call after call.

use std::collections::BTreeSet;

use super::ScoreMap;
use crate::snapshot::Snapshot;

/// History variant: peers weighted by Jaccard similarity of completed sets.
///
/// For every other student sharing at least one completion with the
/// requester, each candidate course that peer completed (and the requester
/// has not) accumulates the peer's similarity. Contributions sum across
/// peers.
pub fn score_history_peers(
    requester_id: &str,
    candidates: &BTreeSet<String>,
    completed: &BTreeSet<String>,
    snapshot: &Snapshot,
) -> ScoreMap {
    let mut scores = ScoreMap::new();
    for (peer_id, peer_courses) in snapshot.completions_by_student() {
        if peer_id == requester_id {
            continue;
        }
        let shared = completed.intersection(peer_courses).count();
        if shared == 0 {
            continue;
        }
        // Union is non-empty whenever the intersection is.
        let union = completed.len() + peer_courses.len() - shared;
        let similarity = shared as f64 / union as f64;

        for course_id in peer_courses {
            if completed.contains(course_id) || !candidates.contains(course_id) {
                continue;
            }
            *scores.entry(course_id.clone()).or_insert(0.0) += similarity;
        }
    }
    scores
}

/// Interest variant: no requester identity, similarity is the share of the
/// input tags a student's interest set covers. An empty input yields an
/// empty map (and keeps the denominator non-zero below).
pub fn score_interest_peers(
    candidates: &BTreeSet<String>,
    interest_tags: &BTreeSet<String>,
    snapshot: &Snapshot,
) -> ScoreMap {
    let mut scores = ScoreMap::new();
    if interest_tags.is_empty() {
        return scores;
    }
    for (student_id, tags) in snapshot.interest_tags_by_student() {
        let overlap = tags.intersection(interest_tags).count();
        if overlap == 0 {
            continue;
        }
        let similarity = overlap as f64 / interest_tags.len() as f64;

        for course_id in snapshot.completed_courses(student_id) {
            if !candidates.contains(course_id) {
                continue;
            }
            *scores.entry(course_id.clone()).or_insert(0.0) += similarity;
        }
    }
    scores
}
