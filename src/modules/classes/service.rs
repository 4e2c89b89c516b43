use std::collections::HashSet;

use anyhow::anyhow;
use rollcall_auth::Identity;
use rollcall_core::AppError;
use rollcall_db::{ClassroomStore, StoreError};
use rollcall_models::{Class, ClassDetail, Role, StudentSummary};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::middleware::role::FORBIDDEN;
use crate::modules::auth::service::USER_NOT_FOUND;

use super::model::{AddStudentRequest, CreateClassRequest};

pub const CLASS_NAME_REQUIRED: &str = "Class name is required";
pub const STUDENT_ID_REQUIRED: &str = "Student ID is required";
pub const CLASS_NOT_FOUND: &str = "Class not found";
pub const NOT_A_STUDENT: &str = "Student ID does not reference a student";

pub struct ClassService;

impl ClassService {
    #[instrument(skip(store))]
    pub async fn create_class(
        store: &dyn ClassroomStore,
        teacher: &Identity,
        dto: CreateClassRequest,
    ) -> Result<Class, AppError> {
        let class_name = dto.class_name.trim();
        if class_name.is_empty() {
            return Err(AppError::bad_request(anyhow!(CLASS_NAME_REQUIRED)));
        }

        let class = store
            .create_class(teacher.user_id, class_name)
            .await
            .map_err(|e| match e {
                StoreError::InvalidReference(_) => AppError::not_found(anyhow!(USER_NOT_FOUND)),
                other => AppError::internal(other),
            })?;

        info!(class_id = %class.id, "Class created");
        Ok(class)
    }

    /// Owner-only. A class the caller does not own is reported as missing.
    #[instrument(skip(store))]
    pub async fn add_student(
        store: &dyn ClassroomStore,
        teacher: &Identity,
        class_id: Uuid,
        dto: AddStudentRequest,
    ) -> Result<Class, AppError> {
        let student_id = dto
            .student_id
            .ok_or_else(|| AppError::bad_request(anyhow!(STUDENT_ID_REQUIRED)))?;

        store
            .enroll_student(class_id, teacher.user_id, student_id)
            .await
            .map_err(|e| match e {
                StoreError::InvalidReference(_) => AppError::bad_request(anyhow!(NOT_A_STUDENT)),
                other => AppError::internal(other),
            })?
            .ok_or_else(|| AppError::not_found(anyhow!(CLASS_NOT_FOUND)))
    }

    #[instrument(skip(store))]
    pub async fn get_class(
        store: &dyn ClassroomStore,
        identity: &Identity,
        class_id: Uuid,
    ) -> Result<ClassDetail, AppError> {
        let class = store
            .find_class_detail(class_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(CLASS_NOT_FOUND)))?;

        let allowed = match identity.role {
            Role::Teacher => class.is_owned_by(identity.user_id),
            Role::Student => class.has_student(identity.user_id),
        };
        if !allowed {
            return Err(AppError::forbidden(FORBIDDEN.to_string()));
        }

        Ok(class)
    }

    /// Every student enrolled in any class, each listed once.
    ///
    /// Not restricted to the caller's own classes.
    #[instrument(skip(store, teacher), fields(teacher_id = %teacher.user_id))]
    pub async fn list_my_students(
        store: &dyn ClassroomStore,
        teacher: &Identity,
    ) -> Result<Vec<StudentSummary>, AppError> {
        let enrolled = store.list_enrolled_students().await?;

        let mut seen = HashSet::with_capacity(enrolled.len());
        Ok(enrolled
            .into_iter()
            .filter(|student| seen.insert(student.id))
            .collect())
    }
}
