use rollcall_models::{
    AttendanceRecord, AttendanceStatus, Class, ClassDetail, Role, StudentSummary, User,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::attendance::model::RecordAttendanceRequest;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, SignupRequest};
use crate::modules::classes::model::{AddStudentRequest, CreateClassRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::me,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::add_student,
        crate::modules::classes::controller::get_class,
        crate::modules::classes::controller::list_my_students,
        crate::modules::attendance::controller::get_my_attendance,
        crate::modules::attendance::controller::record_attendance,
    ),
    components(
        schemas(
            User,
            Role,
            SignupRequest,
            LoginRequest,
            LoginResponse,
            Class,
            ClassDetail,
            StudentSummary,
            CreateClassRequest,
            AddStudentRequest,
            AttendanceRecord,
            AttendanceStatus,
            RecordAttendanceRequest,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup, login and the caller's profile"),
        (name = "Classes", description = "Classes and their rosters"),
        (name = "Attendance", description = "Per-class attendance records")
    ),
    info(
        title = "Rollcall API",
        version = "0.1.0",
        description = "Classroom management API: teachers run classes, students check their attendance.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
