use anyhow::anyhow;
use rollcall_auth::Identity;
use rollcall_core::AppError;
use rollcall_db::ClassroomStore;
use rollcall_models::AttendanceRecord;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::modules::classes::service::STUDENT_ID_REQUIRED;

use super::model::RecordAttendanceRequest;

pub const ATTENDANCE_NOT_FOUND: &str = "Attendance record not found";
pub const STATUS_REQUIRED: &str = "Status must be present or absent";

pub struct AttendanceService;

impl AttendanceService {
    /// The caller's own row for `class_id`; `status` is `None` until recorded.
    #[instrument(skip(store))]
    pub async fn get_my_attendance(
        store: &dyn ClassroomStore,
        student: &Identity,
        class_id: Uuid,
    ) -> Result<AttendanceRecord, AppError> {
        store
            .find_attendance(class_id, student.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(ATTENDANCE_NOT_FOUND)))
    }

    #[instrument(skip(store))]
    pub async fn record_attendance(
        store: &dyn ClassroomStore,
        teacher: &Identity,
        class_id: Uuid,
        dto: RecordAttendanceRequest,
    ) -> Result<AttendanceRecord, AppError> {
        let student_id = dto
            .student_id
            .ok_or_else(|| AppError::bad_request(anyhow!(STUDENT_ID_REQUIRED)))?;
        let status = dto
            .status
            .ok_or_else(|| AppError::bad_request(anyhow!(STATUS_REQUIRED)))?;

        let record = store
            .record_attendance(class_id, teacher.user_id, student_id, status)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(ATTENDANCE_NOT_FOUND)))?;

        info!(attendance_id = %record.id, ?status, "Attendance recorded");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use rollcall_db::MemoryStore;
    use rollcall_models::{AttendanceStatus, NewUser, Role, User};

    async fn user(store: &MemoryStore, name: &str, role: Role) -> User {
        store
            .create_user(NewUser {
                name: name.to_string(),
                email: format!("{}@school.test", name.to_lowercase()),
                password_hash: "hash".to_string(),
                role,
            })
            .await
            .unwrap()
    }

    fn identity(user: &User) -> Identity {
        Identity::new(user.id, user.role)
    }

    fn record(student: &User, status: Option<AttendanceStatus>) -> RecordAttendanceRequest {
        RecordAttendanceRequest {
            student_id: Some(student.id),
            status,
        }
    }

    /// A teacher's class with one enrolled student.
    async fn enrolled_class(store: &MemoryStore) -> (User, User, Uuid) {
        let teacher = user(store, "Tina", Role::Teacher).await;
        let student = user(store, "Sam", Role::Student).await;
        let class = store.create_class(teacher.id, "Math").await.unwrap();
        store
            .enroll_student(class.id, teacher.id, student.id)
            .await
            .unwrap()
            .unwrap();
        (teacher, student, class.id)
    }

    #[tokio::test]
    async fn test_enrolled_student_starts_unset() {
        let store = MemoryStore::new();
        let (_, student, class_id) = enrolled_class(&store).await;

        let record = AttendanceService::get_my_attendance(&store, &identity(&student), class_id)
            .await
            .unwrap();
        assert_eq!(record.status, None);
    }

    #[tokio::test]
    async fn test_unenrolled_student_has_no_record() {
        let store = MemoryStore::new();
        let (_, _, class_id) = enrolled_class(&store).await;
        let stranger = user(&store, "Olga", Role::Student).await;

        let err = AttendanceService::get_my_attendance(&store, &identity(&stranger), class_id)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), ATTENDANCE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_recorded_status_can_be_corrected() {
        let store = MemoryStore::new();
        let (teacher, student, class_id) = enrolled_class(&store).await;

        let present = AttendanceService::record_attendance(
            &store,
            &identity(&teacher),
            class_id,
            record(&student, Some(AttendanceStatus::Present)),
        )
        .await
        .unwrap();
        assert_eq!(present.status, Some(AttendanceStatus::Present));

        let absent = AttendanceService::record_attendance(
            &store,
            &identity(&teacher),
            class_id,
            record(&student, Some(AttendanceStatus::Absent)),
        )
        .await
        .unwrap();
        assert_eq!(absent.id, present.id);

        let seen = AttendanceService::get_my_attendance(&store, &identity(&student), class_id)
            .await
            .unwrap();
        assert_eq!(seen.status, Some(AttendanceStatus::Absent));
    }

    #[tokio::test]
    async fn test_record_requires_status() {
        let store = MemoryStore::new();
        let (teacher, student, class_id) = enrolled_class(&store).await;

        let err = AttendanceService::record_attendance(
            &store,
            &identity(&teacher),
            class_id,
            record(&student, None),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), STATUS_REQUIRED);
    }

    #[tokio::test]
    async fn test_record_in_foreign_class_is_not_found() {
        let store = MemoryStore::new();
        let (_, student, class_id) = enrolled_class(&store).await;
        let other = user(&store, "Otto", Role::Teacher).await;

        let err = AttendanceService::record_attendance(
            &store,
            &identity(&other),
            class_id,
            record(&student, Some(AttendanceStatus::Present)),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
