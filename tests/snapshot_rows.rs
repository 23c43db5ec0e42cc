// tests/snapshot_rows.rs
//
// The provider-facing row contract: rows materialize from serialized form
// (the provider's storage format is its own business) and index into the
// documented lookup structures.

use course_recommender::snapshot::{
    CourseRow, DatasetRows, EnrollmentRow, PreferenceRow, Snapshot, StudentRow,
};

#[test]
fn rows_deserialize_and_index_end_to_end() {
    let courses: Vec<CourseRow> = serde_json::from_str(
        r#"[
            {
                "course_id": "C1",
                "course_code": "MAC-101",
                "title": "Foundations of Python",
                "category": "Data",
                "delivery_mode": "online",
                "description": "Start here.",
                "prerequisites": "",
                "skills": "python| stats ",
                "term_patterns": "Fall|Spring"
            },
            {
                "course_id": "C2",
                "course_code": "MAC-201",
                "title": "Applied Modeling",
                "category": "Data",
                "delivery_mode": "hybrid",
                "prerequisites": "C1",
                "skills": "ml"
            }
        ]"#,
    )
    .expect("course rows");

    let students: Vec<StudentRow> = serde_json::from_str(
        r#"[
            {"student_id": "S1", "interests": "python|ml"},
            {"student_id": "S2"}
        ]"#,
    )
    .expect("student rows");

    let enrollments: Vec<EnrollmentRow> = serde_json::from_str(
        r#"[
            {"student_id": "S1", "course_id": "C1", "completion_status": "completed"},
            {"student_id": "S2", "course_id": "C1", "completion_status": "enrolled"}
        ]"#,
    )
    .expect("enrollment rows");

    let preferences: Vec<PreferenceRow> = serde_json::from_str(
        r#"[
            {"student_id": "S2", "preference_type": "career_goal", "preference_value": "data_science"}
        ]"#,
    )
    .expect("preference rows");

    let snapshot = Snapshot::index(DatasetRows {
        courses,
        students,
        enrollments,
        preferences,
    });

    // Optional list fields default to empty; populated ones parse trimmed.
    let c1 = snapshot.course("C1").expect("C1 indexed");
    assert!(c1.prerequisites.is_empty());
    assert_eq!(
        c1.skills.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["python", "stats"]
    );
    let c2 = snapshot.course("C2").expect("C2 indexed");
    assert!(c2.term_patterns.is_empty());
    assert!(c2.prerequisites.contains("C1"));

    // Only the completed enrollment made it into the indices.
    assert!(snapshot.completed_courses("S1").contains("C1"));
    assert!(snapshot.completed_courses("S2").is_empty());
    assert_eq!(snapshot.completions_of("C1").len(), 1);

    // Declared interests and preference-derived tags union per student.
    assert_eq!(
        snapshot
            .interest_tags("S1")
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>(),
        vec!["ml", "python"]
    );
    assert_eq!(
        snapshot
            .interest_tags("S2")
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>(),
        vec!["data_science"]
    );
    assert_eq!(snapshot.interest_catalog(), ["data_science", "ml", "python"]);
}
