use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Class name is required"))]
    pub class_name: String,
}

/// `studentId` is optional on the wire so its absence gets its own message.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentRequest {
    #[serde(default)]
    pub student_id: Option<Uuid>,
}
