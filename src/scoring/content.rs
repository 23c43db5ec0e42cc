// src/scoring/content.rs
//! Content-based scorer: candidate attributes against the requester profile.

use std::collections::BTreeSet;

use super::ScoreMap;
use crate::config::ProfileWeights;
use crate::profile::{FeatureKey, Profile};
use crate::snapshot::Snapshot;

/// Score every candidate by summing the profile's weight for each feature
/// the course exhibits: skill tags at full weight, category and delivery
/// mode directly, term patterns dampened by `term_match_factor`.
///
/// Missing profile entries contribute 0; candidates with no matching feature
/// stay in the map with score 0. An empty profile yields an empty map rather
/// than an all-zero one, so min-max normalization cannot lift no-evidence
/// scores to 1.0.
pub fn score_content(
    candidates: &BTreeSet<String>,
    profile: &Profile,
    snapshot: &Snapshot,
    weights: &ProfileWeights,
) -> ScoreMap {
    if profile.is_empty() {
        return ScoreMap::new();
    }
    let mut scores = ScoreMap::with_capacity(candidates.len());
    for course_id in candidates {
        let Some(course) = snapshot.course(course_id) else {
            continue;
        };
        let mut score = 0.0;
        for skill in &course.skills {
            score += profile.weight(&FeatureKey::tag(skill.clone()));
        }
        score += profile.weight(&FeatureKey::category(course.category.clone()));
        score += profile.weight(&FeatureKey::delivery(course.delivery_mode.clone()));
        for term in &course.term_patterns {
            score += weights.term_match_factor * profile.weight(&FeatureKey::term(term));
        }
        scores.insert(course_id.clone(), score);
    }
    scores
}
