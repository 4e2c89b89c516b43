use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_my_attendance, record_attendance};

/// Mounted under `/class` next to the classes router.
pub fn init_attendance_router() -> Router<AppState> {
    Router::new()
        .route("/{id}/my-attendance", get(get_my_attendance))
        .route("/{id}/attendance", post(record_attendance))
}
