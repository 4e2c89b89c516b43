use rollcall_models::AttendanceStatus;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Both fields are optional on the wire so the service can name what is missing.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    #[serde(default)]
    pub student_id: Option<Uuid>,
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}
