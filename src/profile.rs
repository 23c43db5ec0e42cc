// src/profile.rs
//! Weighted feature profiles.
//!
//! A profile is the requester's accumulated evidence: a multiset of typed
//! feature keys with non-negative weights, built fresh per request either
//! from completed courses ("history mode") or from raw interest tags
//! ("interest mode"). The typed key keeps the tag, category, delivery and
//! term namespaces from colliding.

use std::collections::HashMap;

use crate::config::ProfileWeights;
use crate::snapshot::Snapshot;

/// A namespaced profile feature.
///
/// `Tag` carries both course skill tags and raw interest tags; the two share
/// a namespace on purpose, so a declared interest in `python` matches a
/// course teaching the `python` skill.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    Tag(String),
    Category(String),
    Delivery(String),
    /// Lowercased term pattern, e.g. `term::fall`.
    Term(String),
}

impl FeatureKey {
    pub fn tag(value: impl Into<String>) -> Self {
        Self::Tag(value.into())
    }

    pub fn category(value: impl Into<String>) -> Self {
        Self::Category(value.into())
    }

    pub fn delivery(value: impl Into<String>) -> Self {
        Self::Delivery(value.into())
    }

    /// Term keys are lowercased at construction so lookups can't miss on case.
    pub fn term(value: &str) -> Self {
        Self::Term(value.to_lowercase())
    }
}

/// Weighted multiset of feature keys. Absent keys weigh 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    weights: HashMap<FeatureKey, f64>,
}

impl Profile {
    /// Build from a set of completed course ids. Weights accumulate
    /// additively across courses; ids absent from the snapshot contribute
    /// nothing.
    pub fn from_completed_courses<'a>(
        course_ids: impl IntoIterator<Item = &'a String>,
        snapshot: &Snapshot,
        weights: &ProfileWeights,
    ) -> Self {
        let mut profile = Self::default();
        for course_id in course_ids {
            let Some(course) = snapshot.course(course_id) else {
                continue;
            };
            for skill in &course.skills {
                profile.add(FeatureKey::tag(skill.clone()), weights.skill);
            }
            profile.add(FeatureKey::category(course.category.clone()), weights.category);
            profile.add(
                FeatureKey::delivery(course.delivery_mode.clone()),
                weights.delivery,
            );
            for term in &course.term_patterns {
                profile.add(FeatureKey::term(term), weights.term);
            }
        }
        profile
    }

    /// Build from raw interest tags, weight 1.0 per occurrence (duplicate
    /// tags accumulate).
    pub fn from_interest_tags<'a>(tags: impl IntoIterator<Item = &'a String>) -> Self {
        let mut profile = Self::default();
        for tag in tags {
            profile.add(FeatureKey::tag(tag.clone()), 1.0);
        }
        profile
    }

    pub fn add(&mut self, key: FeatureKey, weight: f64) {
        *self.weights.entry(key).or_insert(0.0) += weight;
    }

    /// Accumulated weight for a key; 0.0 when absent.
    pub fn weight(&self, key: &FeatureKey) -> f64 {
        self.weights.get(key).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }
}
