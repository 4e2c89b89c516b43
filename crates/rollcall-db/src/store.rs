//! The storage seam every service talks to.

use async_trait::async_trait;
use rollcall_models::{
    AttendanceRecord, AttendanceStatus, Class, ClassDetail, NewUser, StudentSummary, User,
    UserCredentials,
};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    Conflict(String),
    /// A referenced row is missing or has the wrong role.
    #[error("invalid reference: {0}")]
    InvalidReference(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence for users, classes, rosters, and attendance.
///
/// Implementations enforce the uniqueness rules themselves: email across
/// users, (class, student) across enrollments and attendance rows. Callers
/// never check-then-insert.
#[async_trait]
pub trait ClassroomStore: Send + Sync {
    /// Fails with [`StoreError::Conflict`] if the email is taken.
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Fails with [`StoreError::InvalidReference`] unless `teacher_id` is a teacher.
    async fn create_class(&self, teacher_id: Uuid, class_name: &str) -> Result<Class, StoreError>;

    /// Enrolls a student and pre-creates their unset attendance row.
    ///
    /// Returns `Ok(None)` when no class matches both `class_id` and
    /// `teacher_id`. Re-enrolling is a no-op. Fails with
    /// [`StoreError::InvalidReference`] unless `student_id` is a student.
    async fn enroll_student(
        &self,
        class_id: Uuid,
        teacher_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<Class>, StoreError>;

    async fn find_class_detail(&self, class_id: Uuid) -> Result<Option<ClassDetail>, StoreError>;

    /// Every enrollment of every class, classes in creation order and
    /// students in enrollment order. May contain the same student twice.
    async fn list_enrolled_students(&self) -> Result<Vec<StudentSummary>, StoreError>;

    async fn find_attendance(
        &self,
        class_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<AttendanceRecord>, StoreError>;

    /// Sets the status of an existing row in a class owned by `teacher_id`.
    /// Returns `Ok(None)` if no such row exists.
    async fn record_attendance(
        &self,
        class_id: Uuid,
        teacher_id: Uuid,
        student_id: Uuid,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>, StoreError>;
}
