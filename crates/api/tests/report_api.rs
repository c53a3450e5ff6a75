//! HTTP-level integration tests for the `/reports` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_id, get, put_empty};
use serde_json::json;
use sqlx::PgPool;

struct Seeded {
    faculty_id: i64,
    empty_faculty_id: i64,
    group_id: i64,
    student_id: i64,
}

/// One faculty with one group, two students, and two debts for the first
/// student (one of which gets settled). A second, empty faculty is added to
/// check zero counts.
async fn seed(pool: &PgPool) -> Seeded {
    let faculty_id = create_id(pool, "/faculties/", json!({"name": "Engineering"})).await;
    let empty_faculty_id = create_id(pool, "/faculties/", json!({"name": "Arts"})).await;
    let group_id = create_id(pool, "/groups/", json!({"name": "G1", "faculty_id": faculty_id})).await;
    let subject_id = create_id(pool, "/subjects/", json!({"name": "Calculus", "group_id": group_id})).await;
    let student_id = create_id(
        pool,
        "/students/",
        json!({"first_name": "Ivan", "last_name": "Petrov", "record_book_number": "1", "group_id": group_id}),
    )
    .await;
    create_id(
        pool,
        "/students/",
        json!({"first_name": "Olga", "last_name": "Smirnova", "record_book_number": "2", "group_id": group_id}),
    )
    .await;

    create_id(
        pool,
        "/debts/",
        json!({"student_id": student_id, "subject_id": subject_id, "date_occurred": "2024-01-10"}),
    )
    .await;
    let settled = create_id(
        pool,
        "/debts/",
        json!({"student_id": student_id, "subject_id": subject_id, "date_occurred": "2024-04-10"}),
    )
    .await;
    let response = put_empty(common::build_test_app(pool.clone()), &format!("/debts/{settled}/settle")).await;
    assert_eq!(response.status(), StatusCode::OK);

    Seeded {
        faculty_id,
        empty_faculty_id,
        group_id,
        student_id,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_debts_by_faculty(pool: PgPool) {
    let seeded = seed(&pool).await;

    let response = get(common::build_test_app(pool), "/reports/debts_by_faculty").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            {"id": seeded.faculty_id, "faculty": "Engineering", "debt_count": 1},
            {"id": seeded.empty_faculty_id, "faculty": "Arts", "debt_count": 0}
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_debts_by_group(pool: PgPool) {
    let seeded = seed(&pool).await;

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/reports/debts_by_group/{}", seeded.group_id),
        )
        .await,
    )
    .await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["student"], "Petrov Ivan");
    assert_eq!(rows[0]["debt_count"], 1);
    assert_eq!(rows[1]["student"], "Smirnova Olga");
    assert_eq!(rows[1]["debt_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_student_and_group_debts(pool: PgPool) {
    let seeded = seed(&pool).await;

    let student = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("/reports/student_debts/{}", seeded.student_id),
        )
        .await,
    )
    .await;
    let statuses: Vec<&str> = student
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, ["active", "settled"]);
    assert_eq!(student[0]["subject"], "Calculus");

    let group = body_json(
        get(
            common::build_test_app(pool),
            &format!("/reports/group_debts/{}", seeded.group_id),
        )
        .await,
    )
    .await;
    assert_eq!(group.as_array().unwrap().len(), 2);
    assert_eq!(group[0]["student"], "Petrov Ivan");
    assert_eq!(group[0]["date_occurred"], "2024-01-10");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reports_for_unknown_ids_are_empty(pool: PgPool) {
    for uri in [
        "/reports/debts_by_group/999999",
        "/reports/student_debts/999999",
        "/reports/group_debts/999999",
    ] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }
}
