//! Student CRUD routes.

use crate::handlers::student::{create, delete as delete_one, delete_all, list, read, update};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/student/create", post(create))
        .route("/student/update/:id", put(update))
        .route("/student/retrieve", get(list))
        .route("/student/retrieve/:id", get(read))
        .route("/student/delete", delete(delete_all))
        .route("/student/delete/:id", delete(delete_one))
        .with_state(state)
}
