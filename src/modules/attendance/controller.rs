use axum::extract::State;
use rollcall_core::{AppError, ApiResponse};
use rollcall_models::AttendanceRecord;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{RequireStudent, RequireTeacher};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

use super::model::RecordAttendanceRequest;
use super::service::AttendanceService;

/// The calling student's attendance in a class
#[utoipa::path(
    get,
    path = "/class/{id}/my-attendance",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Attendance record, status null while unset", body = AttendanceRecord),
        (status = 403, description = "Caller is not a student", body = ErrorResponse),
        (status = 404, description = "Attendance record not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(skip(state))]
pub async fn get_my_attendance(
    State(state): State<AppState>,
    RequireStudent(auth_user): RequireStudent,
    ValidatedPath(class_id): ValidatedPath<Uuid>,
) -> Result<ApiResponse<AttendanceRecord>, AppError> {
    let record =
        AttendanceService::get_my_attendance(state.store(), auth_user.identity(), class_id).await?;
    Ok(ApiResponse::ok(record))
}

/// Mark a student present or absent in one of the caller's classes
#[utoipa::path(
    post,
    path = "/class/{id}/attendance",
    params(
        ("id" = Uuid, Path, description = "Class ID")
    ),
    request_body = RecordAttendanceRequest,
    responses(
        (status = 200, description = "Attendance recorded", body = AttendanceRecord),
        (status = 400, description = "Missing student ID or status", body = ErrorResponse),
        (status = 403, description = "Caller is not a teacher", body = ErrorResponse),
        (status = 404, description = "Attendance record not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Attendance"
)]
#[instrument(skip(state))]
pub async fn record_attendance(
    State(state): State<AppState>,
    RequireTeacher(auth_user): RequireTeacher,
    ValidatedPath(class_id): ValidatedPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<RecordAttendanceRequest>,
) -> Result<ApiResponse<AttendanceRecord>, AppError> {
    let record =
        AttendanceService::record_attendance(state.store(), auth_user.identity(), class_id, dto)
            .await?;
    Ok(ApiResponse::ok(record))
}
