//! Integration tests for the aggregate report queries.

use chrono::NaiveDate;
use sqlx::PgPool;
use edudebts_db::models::debt::CreateDebt;
use edudebts_db::models::faculty::CreateFaculty;
use edudebts_db::models::group::CreateGroup;
use edudebts_db::models::student::CreateStudent;
use edudebts_db::models::subject::CreateSubject;
use edudebts_db::repositories::{
    DebtRepo, FacultyRepo, GroupRepo, ReportRepo, StudentRepo, SubjectRepo,
};

/// Ids of the seeded fixture.
struct Fixture {
    engineering: i64,
    arts: i64,
    group: i64,
    ivanov: i64,
    petrova: i64,
}

/// Seed two faculties, one group under Engineering, two students, two
/// subjects, and four debts: two active and one settled for Ivanov, one
/// settled for Petrova. Ivanov's settled debt is the most recent one.
async fn seed(pool: &PgPool) -> Fixture {
    let engineering = FacultyRepo::create(pool, &CreateFaculty { name: "Engineering".into() })
        .await
        .unwrap();
    let arts = FacultyRepo::create(pool, &CreateFaculty { name: "Arts".into() })
        .await
        .unwrap();
    let group = GroupRepo::create(
        pool,
        &CreateGroup {
            name: "E-101".into(),
            faculty_id: Some(engineering.id),
        },
    )
    .await
    .unwrap();

    let mut subjects = Vec::new();
    for name in ["Algebra", "Geometry"] {
        let subject = SubjectRepo::create(
            pool,
            &CreateSubject {
                name: name.into(),
                group_id: Some(group.id),
            },
        )
        .await
        .unwrap();
        subjects.push(subject.id);
    }

    let mut students = Vec::new();
    for (first, last) in [("Ivan", "Ivanov"), ("Olga", "Petrova")] {
        let student = StudentRepo::create(
            pool,
            &CreateStudent {
                first_name: first.into(),
                last_name: last.into(),
                patronymic: None,
                record_book_number: format!("RB-{last}"),
                phone: None,
                email: None,
                group_id: Some(group.id),
                date_of_birth: None,
            },
        )
        .await
        .unwrap();
        students.push(student.id);
    }

    let debts = [
        (students[0], subjects[0], (2024, 1, 10), None),
        (students[0], subjects[1], (2024, 3, 5), None),
        (students[0], subjects[0], (2024, 6, 1), Some("settled")),
        (students[1], subjects[0], (2024, 2, 1), Some("settled")),
    ];
    for (student_id, subject_id, (y, m, d), status) in debts {
        DebtRepo::create(
            pool,
            &CreateDebt {
                student_id,
                subject_id,
                reason: Some("exam".into()),
                date_occurred: NaiveDate::from_ymd_opt(y, m, d),
                status: status.map(str::to_string),
            },
        )
        .await
        .unwrap();
    }

    Fixture {
        engineering: engineering.id,
        arts: arts.id,
        group: group.id,
        ivanov: students[0],
        petrova: students[1],
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_debts_by_faculty_counts_active_and_keeps_empty(pool: PgPool) {
    let fx = seed(&pool).await;

    let rows = ReportRepo::debts_by_faculty(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, fx.engineering);
    assert_eq!(rows[0].faculty, "Engineering");
    assert_eq!(rows[0].debt_count, 2);
    assert_eq!(rows[1].id, fx.arts);
    assert_eq!(rows[1].debt_count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_debts_by_group_lists_every_student(pool: PgPool) {
    let fx = seed(&pool).await;

    let rows = ReportRepo::debts_by_group(&pool, fx.group).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, fx.ivanov);
    assert_eq!(rows[0].student, "Ivanov Ivan");
    assert_eq!(rows[0].debt_count, 2);
    assert_eq!(rows[1].id, fx.petrova);
    assert_eq!(rows[1].debt_count, 0);

    assert!(ReportRepo::debts_by_group(&pool, 999_999).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_student_debts_ordered_by_status_then_date(pool: PgPool) {
    let fx = seed(&pool).await;

    let rows = ReportRepo::student_debts(&pool, fx.ivanov).await.unwrap();
    let listed: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.subject.as_str(), r.status.as_str()))
        .collect();
    // The settled debt is the newest, but status sorts first.
    assert_eq!(
        listed,
        [("Geometry", "active"), ("Algebra", "active"), ("Algebra", "settled")]
    );
    assert_eq!(rows[2].date_occurred, NaiveDate::from_ymd_opt(2024, 6, 1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_group_debts_joins_names(pool: PgPool) {
    let fx = seed(&pool).await;

    let rows = ReportRepo::group_debts(&pool, fx.group).await.unwrap();
    assert_eq!(rows.len(), 4);
    // "active" sorts before "settled", then newest first.
    assert_eq!(rows[0].student, "Ivanov Ivan");
    assert_eq!(rows[0].subject, "Geometry");
    assert_eq!(rows[1].subject, "Algebra");
    assert_eq!(rows[1].status, "active");
    assert_eq!(rows[2].student, "Ivanov Ivan");
    assert_eq!(rows[2].status, "settled");
    assert_eq!(rows[3].student, "Petrova Olga");
    assert_eq!(rows[3].status, "settled");
}
