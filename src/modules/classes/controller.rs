use axum::{extract::State, http::StatusCode};
use rollcall_core::{AppError, ApiResponse};
use rollcall_models::{Class, ClassDetail, StudentSummary};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{RequireMember, RequireTeacher};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

use super::model::{AddStudentRequest, CreateClassRequest};
use super::service::ClassService;

/// Create a class owned by the calling teacher
#[utoipa::path(
    post,
    path = "/class",
    request_body = CreateClassRequest,
    responses(
        (status = 201, description = "Class created", body = Class),
        (status = 400, description = "Class name is required", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a teacher", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn create_class(
    State(state): State<AppState>,
    RequireTeacher(auth_user): RequireTeacher,
    ValidatedJson(dto): ValidatedJson<CreateClassRequest>,
) -> Result<(StatusCode, ApiResponse<Class>), AppError> {
    let class = ClassService::create_class(state.store(), auth_user.identity(), dto).await?;
    Ok(ApiResponse::created(class))
}

/// Enroll a student in one of the caller's classes
#[utoipa::path(
    post,
    path = "/class/{id}/add-student",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    request_body = AddStudentRequest,
    responses(
        (status = 200, description = "Student enrolled", body = Class),
        (status = 400, description = "Missing or invalid student ID", body = ErrorResponse),
        (status = 403, description = "Caller is not a teacher", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn add_student(
    State(state): State<AppState>,
    RequireTeacher(auth_user): RequireTeacher,
    ValidatedPath(class_id): ValidatedPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<AddStudentRequest>,
) -> Result<ApiResponse<Class>, AppError> {
    let class =
        ClassService::add_student(state.store(), auth_user.identity(), class_id, dto).await?;
    Ok(ApiResponse::ok(class))
}

/// Get a class with its roster
#[utoipa::path(
    get,
    path = "/class/{id}",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Class details", body = ClassDetail),
        (status = 403, description = "Not the owner or not enrolled", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_class(
    State(state): State<AppState>,
    RequireMember(auth_user): RequireMember,
    ValidatedPath(class_id): ValidatedPath<Uuid>,
) -> Result<ApiResponse<ClassDetail>, AppError> {
    let class = ClassService::get_class(state.store(), auth_user.identity(), class_id).await?;
    Ok(ApiResponse::ok(class))
}

/// List enrolled students
#[utoipa::path(
    get,
    path = "/class/students",
    responses(
        (status = 200, description = "Enrolled students, each listed once", body = Vec<StudentSummary>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not a teacher", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn list_my_students(
    State(state): State<AppState>,
    RequireTeacher(auth_user): RequireTeacher,
) -> Result<ApiResponse<Vec<StudentSummary>>, AppError> {
    let students = ClassService::list_my_students(state.store(), auth_user.identity()).await?;
    Ok(ApiResponse::ok(students))
}
