// src/snapshot.rs
//! Immutable, indexed view of the course dataset.
//!
//! The dataset provider hands over raw rows (from whatever storage it uses);
//! this module indexes them once into the lookup structures the scoring
//! engine reads: parsed courses, the completed-course set per student, the
//! collaborative matrix (course → students who completed it), and the derived
//! interest-tag set per student. Nothing mutates after [`Snapshot::index`]
//! returns, so a snapshot is safe to share across concurrent requests.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use tracing::info;

/// Enrollment rows must carry this status to count as a completion.
pub const STATUS_COMPLETED: &str = "completed";

/// Preference types whose values contribute interest tags.
pub const TAG_BEARING_PREFERENCES: [&str; 2] = ["skills_to_build", "career_goal"];

static EMPTY_SET: BTreeSet<String> = BTreeSet::new();

/* ----------------------------
Raw rows (provider-facing)
---------------------------- */

/// One course as stored by the provider. List-valued fields are
/// pipe-delimited strings per the dataset convention.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseRow {
    pub course_id: String,
    pub course_code: String,
    pub title: String,
    pub category: String,
    pub delivery_mode: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prerequisites: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub term_patterns: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentRow {
    pub student_id: String,
    /// Declared interests, pipe-delimited.
    #[serde(default)]
    pub interests: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentRow {
    pub student_id: String,
    pub course_id: String,
    pub completion_status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreferenceRow {
    pub student_id: String,
    pub preference_type: String,
    /// Pipe-delimited tag list.
    pub preference_value: String,
}

/// Everything the provider hands over in one shot.
#[derive(Debug, Clone, Default)]
pub struct DatasetRows {
    pub courses: Vec<CourseRow>,
    pub students: Vec<StudentRow>,
    pub enrollments: Vec<EnrollmentRow>,
    pub preferences: Vec<PreferenceRow>,
}

/* ----------------------------
Indexed structures
---------------------------- */

/// A course with its list-valued fields parsed into sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub course_code: String,
    pub title: String,
    pub category: String,
    pub delivery_mode: String,
    pub description: String,
    pub prerequisites: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub term_patterns: BTreeSet<String>,
}

/// The read-only dataset view the engine scores against.
///
/// Ordered maps throughout: scoring sums floating-point contributions while
/// iterating, so iteration order must be identical call after call.
#[derive(Debug, Default)]
pub struct Snapshot {
    courses: BTreeMap<String, Course>,
    student_completed: BTreeMap<String, BTreeSet<String>>,
    collaborative_matrix: BTreeMap<String, BTreeSet<String>>,
    student_interest_tags: BTreeMap<String, BTreeSet<String>>,
    interest_catalog: Vec<String>,
}

impl Snapshot {
    /// Index raw rows into the derived lookup structures.
    ///
    /// Enrollments with any status other than [`STATUS_COMPLETED`] are
    /// ignored. Preference rows only contribute tags for the types listed in
    /// [`TAG_BEARING_PREFERENCES`], and only for students present in the
    /// student table.
    pub fn index(rows: DatasetRows) -> Self {
        let DatasetRows {
            courses,
            students,
            enrollments,
            preferences,
        } = rows;

        let courses: BTreeMap<String, Course> = courses
            .into_iter()
            .map(|row| {
                let course = Course {
                    course_code: row.course_code,
                    title: row.title,
                    category: row.category,
                    delivery_mode: row.delivery_mode,
                    description: row.description,
                    prerequisites: split_tags(&row.prerequisites),
                    skills: split_tags(&row.skills),
                    term_patterns: split_tags(&row.term_patterns),
                };
                (row.course_id, course)
            })
            .collect();

        let mut student_completed: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut collaborative_matrix: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for row in enrollments {
            if row.completion_status != STATUS_COMPLETED {
                continue;
            }
            student_completed
                .entry(row.student_id.clone())
                .or_default()
                .insert(row.course_id.clone());
            collaborative_matrix
                .entry(row.course_id)
                .or_default()
                .insert(row.student_id);
        }

        let mut preference_tags: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for row in preferences {
            if !TAG_BEARING_PREFERENCES.contains(&row.preference_type.as_str()) {
                continue;
            }
            preference_tags
                .entry(row.student_id)
                .or_default()
                .extend(split_tags(&row.preference_value));
        }

        let mut student_interest_tags: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for row in students {
            let mut tags = split_tags(&row.interests);
            if let Some(extra) = preference_tags.remove(&row.student_id) {
                tags.extend(extra);
            }
            student_interest_tags.insert(row.student_id, tags);
        }

        // Sorted and duplicate-free by construction (BTreeSet).
        let interest_catalog: Vec<String> = student_interest_tags
            .values()
            .flatten()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let snapshot = Self {
            courses,
            student_completed,
            collaborative_matrix,
            student_interest_tags,
            interest_catalog,
        };

        info!(
            target: "snapshot",
            courses = snapshot.courses.len(),
            students = snapshot.student_interest_tags.len(),
            completions = snapshot
                .student_completed
                .values()
                .map(BTreeSet::len)
                .sum::<usize>(),
            "dataset snapshot indexed"
        );

        snapshot
    }

    pub fn courses(&self) -> &BTreeMap<String, Course> {
        &self.courses
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    /// Completed courses for a student; unknown students read as having none.
    pub fn completed_courses(&self, student_id: &str) -> &BTreeSet<String> {
        self.student_completed.get(student_id).unwrap_or(&EMPTY_SET)
    }

    /// The *student → completed-course-set* index, for peer scans.
    pub fn completions_by_student(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.student_completed
    }

    /// Students who completed a course (the collaborative matrix).
    pub fn completions_of(&self, course_id: &str) -> &BTreeSet<String> {
        self.collaborative_matrix
            .get(course_id)
            .unwrap_or(&EMPTY_SET)
    }

    /// Derived interest tags (declared ∪ preference-derived) per student.
    pub fn interest_tags_by_student(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.student_interest_tags
    }

    pub fn interest_tags(&self, student_id: &str) -> &BTreeSet<String> {
        self.student_interest_tags
            .get(student_id)
            .unwrap_or(&EMPTY_SET)
    }

    /// Every interest tag seen across students, sorted. Informational only.
    pub fn interest_catalog(&self) -> &[String] {
        &self.interest_catalog
    }
}

/// Split a pipe-delimited field into trimmed, non-empty elements.
pub fn split_tags(value: &str) -> BTreeSet<String> {
    value
        .split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/* ----------------------------
Process-wide lazy cache
---------------------------- */

/// Synchronized once-cell for hosts that want a process-wide snapshot.
///
/// The engine itself takes `&Snapshot`, so tests inject synthetic snapshots
/// directly; this cell exists for hosts that load the dataset once and share
/// it for the process lifetime. Concurrent first calls build exactly once,
/// and no caller ever observes a partially built snapshot.
#[derive(Debug, Default)]
pub struct SnapshotCell {
    inner: OnceCell<Snapshot>,
}

impl SnapshotCell {
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    /// Get the cached snapshot, indexing `load()`'s rows on first use.
    pub fn get_or_index(&self, load: impl FnOnce() -> DatasetRows) -> &Snapshot {
        self.inner.get_or_init(|| Snapshot::index(load()))
    }

    /// Fallible variant: a provider error fails the startup path and leaves
    /// the cell empty, so a later call may retry.
    pub fn get_or_try_index(
        &self,
        load: impl FnOnce() -> anyhow::Result<DatasetRows>,
    ) -> anyhow::Result<&Snapshot> {
        self.inner.get_or_try_init(|| load().map(Snapshot::index))
    }

    pub fn get(&self) -> Option<&Snapshot> {
        self.inner.get()
    }
}
