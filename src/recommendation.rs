// src/recommendation.rs
//! The serializable recommendation record returned to callers.
//!
//! Scores are kept at full precision throughout the pipeline and rounded to
//! 3 decimals exactly once, here, at the external-interface boundary.

use serde::Serialize;

use crate::snapshot::Course;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub course_id: String,
    pub course_code: String,
    pub title: String,
    pub category: String,
    pub delivery_mode: String,
    pub combined_score: f64,
    pub content_score: f64,
    pub collab_score: f64,
    /// Sorted skill-tag list.
    pub skills: Vec<String>,
    pub description: String,
    pub explanation: String,
}

impl Recommendation {
    /// Assemble the payload record for one ranked course, rounding the three
    /// displayed scores.
    pub fn from_scores(
        course_id: String,
        course: &Course,
        combined_score: f64,
        content_score: f64,
        collab_score: f64,
        skills: Vec<String>,
        explanation: String,
    ) -> Self {
        Self {
            course_id,
            course_code: course.course_code.clone(),
            title: course.title.clone(),
            category: course.category.clone(),
            delivery_mode: course.delivery_mode.clone(),
            combined_score: round3(combined_score),
            content_score: round3(content_score),
            collab_score: round3(collab_score),
            skills,
            description: course.description.clone(),
            explanation,
        }
    }
}

/// Round to 3 decimal places, presentation only.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
