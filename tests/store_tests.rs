// tests/store_tests.rs

use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};

use questionnaire_backend::{
    error::AppError,
    models::question::Question,
    query::select_questions,
    store::{LoadError, QuestionStore},
};

const HEADER: &str = "question,subject,use,correct,responseA,responseB,responseC,responseD,remark";

fn store_from(rows: &[&str]) -> QuestionStore {
    let csv = format!("{}\n{}\n", HEADER, rows.join("\n"));
    QuestionStore::from_reader(csv.as_bytes()).expect("Failed to parse CSV fixture")
}

fn question(text: &str, subject: &str, purpose: &str) -> Question {
    Question {
        question: text.to_string(),
        subject: subject.to_string(),
        purpose: purpose.to_string(),
        correct: "A".to_string(),
        response_a: "Yes".to_string(),
        response_b: "No".to_string(),
        response_c: None,
        response_d: None,
        remark: None,
    }
}

#[test]
fn load_maps_empty_optional_cells_to_none() {
    let store = store_from(&["Q0?,math,exam1,A,a,b,,,"]);
    let rows = store.filter("exam1", &["math".to_string()]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].response_c, None);
    assert_eq!(rows[0].response_d, None);
    assert_eq!(rows[0].remark, None);
    assert_eq!(rows[0].response_a, "a");
}

#[test]
fn load_keeps_populated_optional_cells() {
    let store = store_from(&["Q0?,math,exam1,A,a,b,c,d,note"]);
    let rows = store.filter("exam1", &["math".to_string()]);

    assert_eq!(rows[0].response_c.as_deref(), Some("c"));
    assert_eq!(rows[0].response_d.as_deref(), Some("d"));
    assert_eq!(rows[0].remark.as_deref(), Some("note"));
}

#[test]
fn load_rejects_row_with_empty_required_field() {
    // Second data row has an empty subject
    let csv = format!("{}\nQ0?,math,exam1,A,a,b,,,\nQ1?,,exam1,A,a,b,,,\n", HEADER);
    let err = QuestionStore::from_reader(csv.as_bytes()).unwrap_err();

    match err {
        LoadError::InvalidRow { row, .. } => assert_eq!(row, 2),
        other => panic!("expected InvalidRow, got {:?}", other),
    }
}

#[test]
fn load_rejects_malformed_csv() {
    // Data row with too few columns
    let csv = format!("{}\nQ0?,math\n", HEADER);
    let err = QuestionStore::from_reader(csv.as_bytes()).unwrap_err();

    assert!(matches!(err, LoadError::Csv(_)));
}

#[test]
fn filter_matches_use_exactly_and_subject_membership() {
    let store = store_from(&[
        "Q0?,math,exam1,A,a,b,,,",
        "Q1?,bio,exam1,A,a,b,,,",
        "Q2?,math,exam2,A,a,b,,,",
        "Q3?,math,Exam1,A,a,b,,,",
    ]);

    let rows = store.filter("exam1", &["math".to_string(), "bio".to_string()]);
    assert_eq!(rows.len(), 2);

    // Case-sensitive on `use`, exact membership on `subject`
    assert!(store.filter("EXAM1", &["math".to_string()]).is_empty());
    assert!(store.filter("exam1", &["chemistry".to_string()]).is_empty());
}

#[test]
fn filter_preserves_insertion_order() {
    let store = store_from(&[
        "Q0?,math,exam1,A,a,b,,,",
        "Q1?,bio,exam1,A,a,b,,,",
        "Q2?,math,exam1,A,a,b,,,",
    ]);

    let rows = store.filter("exam1", &["math".to_string()]);
    assert_eq!(rows[0].question, "Q0?");
    assert_eq!(rows[1].question, "Q2?");
}

#[test]
fn select_draws_exactly_n_distinct_matching_rows() {
    let rows: Vec<String> = (0..12)
        .map(|i| format!("Q{i}?,math,exam1,A,a,b,,,"))
        .collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let store = store_from(&refs);
    let mut rng = StdRng::seed_from_u64(42);

    let selected =
        select_questions(&store, "exam1", 10, &["math".to_string()], &mut rng).unwrap();

    assert_eq!(selected.len(), 10);
    let texts: HashSet<&str> = selected.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(texts.len(), 10, "drawn rows must be pairwise distinct");
    for q in &selected {
        assert_eq!(q.purpose, "exam1");
        assert_eq!(q.subject, "math");
    }
}

#[test]
fn select_rejects_disallowed_counts_regardless_of_data() {
    let rows: Vec<String> = (0..30)
        .map(|i| format!("Q{i}?,math,exam1,A,a,b,,,"))
        .collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let store = store_from(&refs);
    let mut rng = StdRng::seed_from_u64(7);

    for bad in [0, 1, 4, 7, 15, 21] {
        let err =
            select_questions(&store, "exam1", bad, &["math".to_string()], &mut rng).unwrap_err();
        assert!(matches!(err, AppError::InvalidParameter(_)));
    }
}

#[test]
fn select_never_returns_a_partial_list() {
    // 6 rows with use=exam1, 3 of them subject=math
    let store = store_from(&[
        "Q0?,math,exam1,A,a,b,,,",
        "Q1?,math,exam1,A,a,b,,,",
        "Q2?,math,exam1,A,a,b,,,",
        "Q3?,bio,exam1,A,a,b,,,",
        "Q4?,bio,exam1,A,a,b,,,",
        "Q5?,bio,exam1,A,a,b,,,",
    ]);
    let mut rng = StdRng::seed_from_u64(1);

    // 3 math candidates cannot satisfy a draw of 5
    let err = select_questions(&store, "exam1", 5, &["math".to_string()], &mut rng).unwrap_err();
    assert!(matches!(err, AppError::InsufficientData(_)));

    // All 6 candidates can
    let selected = select_questions(
        &store,
        "exam1",
        5,
        &["math".to_string(), "bio".to_string()],
        &mut rng,
    )
    .unwrap();
    assert_eq!(selected.len(), 5);
    let texts: HashSet<&str> = selected.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(texts.len(), 5);
}

#[test]
fn select_varies_across_seeds() {
    let rows: Vec<String> = (0..40)
        .map(|i| format!("Q{i}?,math,exam1,A,a,b,,,"))
        .collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let store = store_from(&refs);

    let draws: HashSet<Vec<String>> = (0..20)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut texts: Vec<String> =
                select_questions(&store, "exam1", 5, &["math".to_string()], &mut rng)
                    .unwrap()
                    .into_iter()
                    .map(|q| q.question)
                    .collect();
            texts.sort();
            texts
        })
        .collect();

    // 20 seeds over C(40,5) subsets; identical draws every time would mean
    // the sampler ignores its RNG
    assert!(draws.len() > 1);
}

#[test]
fn append_increases_len_and_is_immediately_filterable() {
    let mut store = store_from(&["Q0?,math,exam1,A,a,b,,,"]);
    assert_eq!(store.len(), 1);

    store.append(question("Q1?", "math", "exam1")).unwrap();

    assert_eq!(store.len(), 2);
    let rows = store.filter("exam1", &["math".to_string()]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].question, "Q1?");
}

#[test]
fn append_rejects_empty_required_field_and_leaves_store_unchanged() {
    let mut store = store_from(&["Q0?,math,exam1,A,a,b,,,"]);

    let mut invalid = question("Q1?", "math", "exam1");
    invalid.correct = String::new();
    let err = store.append(invalid).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(store.len(), 1);
}

#[test]
fn append_normalizes_blank_optional_fields() {
    let mut store = store_from(&["Q0?,math,exam1,A,a,b,,,"]);

    let mut q = question("Q1?", "math", "exam1");
    q.response_c = Some("  ".to_string());
    q.remark = Some(String::new());
    store.append(q).unwrap();

    let rows = store.filter("exam1", &["math".to_string()]);
    assert_eq!(rows[1].response_c, None);
    assert_eq!(rows[1].remark, None);
}

#[test]
fn duplicate_rows_are_permitted() {
    let mut store = store_from(&["Q0?,math,exam1,A,a,b,,,"]);

    store.append(question("Q0?", "math", "exam1")).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.filter("exam1", &["math".to_string()]).len(), 2);
}
