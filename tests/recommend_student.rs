// tests/recommend_student.rs
//
// History-mode recommendations over a small synthetic snapshot: candidate
// gating, blended ranking, and explanation synthesis.

use course_recommender::config::ScoringConfig;
use course_recommender::engine::recommend_for_student;
use course_recommender::snapshot::{
    CourseRow, DatasetRows, EnrollmentRow, Snapshot, StudentRow, STATUS_COMPLETED,
};

fn course(
    id: &str,
    category: &str,
    delivery: &str,
    skills: &str,
    prereqs: &str,
    terms: &str,
) -> CourseRow {
    CourseRow {
        course_id: id.to_string(),
        course_code: format!("MAC-{id}"),
        title: format!("Course {id}"),
        category: category.to_string(),
        delivery_mode: delivery.to_string(),
        description: format!("Description of {id}."),
        prerequisites: prereqs.to_string(),
        skills: skills.to_string(),
        term_patterns: terms.to_string(),
    }
}

fn student(id: &str, interests: &str) -> StudentRow {
    StudentRow {
        student_id: id.to_string(),
        interests: interests.to_string(),
    }
}

fn completion(student: &str, course: &str) -> EnrollmentRow {
    EnrollmentRow {
        student_id: student.to_string(),
        course_id: course.to_string(),
        completion_status: STATUS_COMPLETED.to_string(),
    }
}

/// S1 completed C1+C2; S2 additionally completed C3; S3 lives in another
/// corner of the catalog entirely.
fn snapshot() -> Snapshot {
    Snapshot::index(DatasetRows {
        courses: vec![
            course("C1", "Data", "online", "python|stats", "", "Fall"),
            course("C2", "Data", "online", "stats|viz", "", "Fall|Spring"),
            course("C3", "Data", "online", "python|viz", "C1", "Spring"),
            course("C4", "Arts", "campus", "pottery", "", ""),
            course("C5", "Data", "online", "sql", "C1|C2", "Fall"),
        ],
        students: vec![
            student("S1", "python|ml"),
            student("S2", "viz"),
            student("S3", "design"),
        ],
        enrollments: vec![
            completion("S1", "C1"),
            completion("S1", "C2"),
            completion("S2", "C1"),
            completion("S2", "C2"),
            completion("S2", "C3"),
            completion("S3", "C4"),
        ],
        preferences: Vec::new(),
    })
}

#[test]
fn completed_courses_never_reappear() {
    let snap = snapshot();
    let recs = recommend_for_student(&snap, "S1", 10, &ScoringConfig::default());
    assert!(recs.iter().all(|r| r.course_id != "C1" && r.course_id != "C2"));
}

#[test]
fn prerequisite_gating_excludes_unmet_courses() {
    let snap = snapshot();
    // S3 completed only C4: C3 (needs C1) and C5 (needs C1+C2) are gated out.
    let recs = recommend_for_student(&snap, "S3", 10, &ScoringConfig::default());
    let ids: Vec<&str> = recs.iter().map(|r| r.course_id.as_str()).collect();
    assert!(ids.contains(&"C1"));
    assert!(ids.contains(&"C2"));
    assert!(!ids.contains(&"C3"));
    assert!(!ids.contains(&"C5"));
    assert!(!ids.contains(&"C4")); // already completed
}

#[test]
fn blended_ranking_prefers_matching_content_and_peers() {
    let snap = snapshot();
    let recs = recommend_for_student(&snap, "S1", 10, &ScoringConfig::default());
    let ids: Vec<&str> = recs.iter().map(|r| r.course_id.as_str()).collect();

    // C3 wins on both signals (skill overlap + S2's Jaccard contribution),
    // C5 matches on category/delivery only, C4 matches nothing.
    assert_eq!(ids, ["C3", "C5", "C4"]);

    let top = &recs[0];
    assert_eq!(top.combined_score, 1.0);
    assert_eq!(top.content_score, 1.0);
    assert_eq!(top.collab_score, 1.0);
    assert_eq!(top.skills, vec!["python".to_string(), "viz".to_string()]);
    assert_eq!(
        top.explanation,
        "matches your focus on python, viz and popular with 1 similar students"
    );

    let last = &recs[2];
    assert_eq!(last.combined_score, 0.0);
    assert_eq!(last.explanation, "broadens your MAC coursework");
}

#[test]
fn content_overlap_orders_candidates_without_collaborative_signal() {
    // The only student is the requester, so the collaborative scorer has no
    // peers to draw from; ranking rests on content overlap alone.
    let snap = Snapshot::index(DatasetRows {
        courses: vec![
            course("C1", "Data", "online", "python|stats", "", ""),
            course("C2", "Data", "online", "stats|viz", "", ""),
            course("X1", "Data", "online", "python|viz", "", ""),
            course("Y1", "Data", "online", "unrelated_skill", "", ""),
        ],
        students: vec![student("S1", "")],
        enrollments: vec![completion("S1", "C1"), completion("S1", "C2")],
        preferences: Vec::new(),
    });

    let recs = recommend_for_student(&snap, "S1", 2, &ScoringConfig::default());
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].course_id, "X1");
    assert_eq!(recs[1].course_id, "Y1");
    assert!(recs[0].combined_score > recs[1].combined_score);
    assert!(recs.iter().all(|r| r.collab_score == 0.0));
}

#[test]
fn unknown_student_gets_the_least_gated_catalog() {
    let snap = snapshot();
    let recs = recommend_for_student(&snap, "nobody", 10, &ScoringConfig::default());

    // Empty history: only prerequisite-free courses qualify, all with zero
    // evidence, ordered by course id.
    let ids: Vec<&str> = recs.iter().map(|r| r.course_id.as_str()).collect();
    assert_eq!(ids, ["C1", "C2", "C4"]);
    assert!(recs
        .iter()
        .all(|r| r.combined_score == 0.0 && r.content_score == 0.0 && r.collab_score == 0.0));
    assert!(recs
        .iter()
        .all(|r| r.explanation == "broadens your MAC coursework"));
}

#[test]
fn exhausted_catalog_yields_an_empty_result() {
    let snap = Snapshot::index(DatasetRows {
        courses: vec![course("C1", "Data", "online", "python", "", "")],
        students: vec![student("S1", "")],
        enrollments: vec![completion("S1", "C1")],
        preferences: Vec::new(),
    });
    assert!(recommend_for_student(&snap, "S1", 5, &ScoringConfig::default()).is_empty());
}
