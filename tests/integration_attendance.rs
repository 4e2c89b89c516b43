mod common;

use axum::http::StatusCode;
use common::{add_student, create_class, create_test_user, send, setup_test_app};
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::test]
async fn test_teacher_student_scenario() {
    let app = setup_test_app();
    let teacher = create_test_user(&app, "teacher").await;
    let student = create_test_user(&app, "student").await;

    let class_id = create_class(&app, &teacher, "Astronomy").await;
    let (status, _) = add_student(&app, &teacher, class_id, student.id).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        "GET",
        &format!("/class/{}", class_id),
        Some(&student.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["students"][0]["id"], student.id.to_string());

    let (status, body) = send(
        &app,
        "GET",
        &format!("/class/{}/my-attendance", class_id),
        Some(&student.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["id"].is_string());
    assert_eq!(body["data"]["status"], Value::Null);
}

#[tokio::test]
async fn test_my_attendance_without_enrollment() {
    let app = setup_test_app();
    let teacher = create_test_user(&app, "teacher").await;
    let student = create_test_user(&app, "student").await;
    let class_id = create_class(&app, &teacher, "Drama").await;

    for class in [class_id, Uuid::new_v4()] {
        let (status, body) = send(
            &app,
            "GET",
            &format!("/class/{}/my-attendance", class),
            Some(&student.token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Attendance record not found");
    }
}

#[tokio::test]
async fn test_my_attendance_is_student_only() {
    let app = setup_test_app();
    let teacher = create_test_user(&app, "teacher").await;
    let class_id = create_class(&app, &teacher, "Music").await;

    let (status, _) = send(
        &app,
        "GET",
        &format!("/class/{}/my-attendance", class_id),
        Some(&teacher.token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_teacher_records_and_corrects_attendance() {
    let app = setup_test_app();
    let teacher = create_test_user(&app, "teacher").await;
    let student = create_test_user(&app, "student").await;
    let class_id = create_class(&app, &teacher, "Economics").await;
    add_student(&app, &teacher, class_id, student.id).await;

    let record_uri = format!("/class/{}/attendance", class_id);
    let my_uri = format!("/class/{}/my-attendance", class_id);

    for status_value in ["present", "absent"] {
        let (status, body) = send(
            &app,
            "POST",
            &record_uri,
            Some(&teacher.token),
            Some(json!({ "studentId": student.id, "status": status_value })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], status_value);

        let (_, body) = send(&app, "GET", &my_uri, Some(&student.token), None).await;
        assert_eq!(body["data"]["status"], status_value);
    }
}

#[tokio::test]
async fn test_record_attendance_validation() {
    let app = setup_test_app();
    let teacher = create_test_user(&app, "teacher").await;
    let student = create_test_user(&app, "student").await;
    let class_id = create_class(&app, &teacher, "Ethics").await;
    add_student(&app, &teacher, class_id, student.id).await;
    let uri = format!("/class/{}/attendance", class_id);

    for payload in [
        json!({ "studentId": student.id }),
        json!({ "studentId": student.id, "status": null }),
        json!({ "studentId": student.id, "status": "late" }),
        json!({ "status": "present" }),
    ] {
        let (status, _) =
            send(&app, "POST", &uri, Some(&teacher.token), Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {payload}");
    }
}

#[tokio::test]
async fn test_record_attendance_in_foreign_class_is_not_found() {
    let app = setup_test_app();
    let owner = create_test_user(&app, "teacher").await;
    let other = create_test_user(&app, "teacher").await;
    let student = create_test_user(&app, "student").await;
    let class_id = create_class(&app, &owner, "Logic").await;
    add_student(&app, &owner, class_id, student.id).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/class/{}/attendance", class_id),
        Some(&other.token),
        Some(json!({ "studentId": student.id, "status": "present" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Attendance record not found");
}

#[tokio::test]
async fn test_student_cannot_record_attendance() {
    let app = setup_test_app();
    let teacher = create_test_user(&app, "teacher").await;
    let student = create_test_user(&app, "student").await;
    let class_id = create_class(&app, &teacher, "Rhetoric").await;
    add_student(&app, &teacher, class_id, student.id).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/class/{}/attendance", class_id),
        Some(&student.token),
        Some(json!({ "studentId": student.id, "status": "present" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
