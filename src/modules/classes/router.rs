use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{add_student, create_class, get_class, list_my_students};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_class))
        .route("/students", get(list_my_students))
        .route("/{id}", get(get_class))
        .route("/{id}/add-student", post(add_student))
}
