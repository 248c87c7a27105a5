//! Student CRUD handlers: create, update, retrieve (all / one), delete (all / one).

use crate::error::{AppError, ErrorBody};
use crate::extractors::{AppJson, AppPath};
use crate::model::{Student, StudentChanges, StudentList};
use crate::response::{acknowledge, acknowledge_ok, Acknowledgement};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// POST /student/create
#[utoipa::path(
    post,
    path = "/student/create",
    tag = "students",
    request_body = Student,
    responses(
        (status = 201, description = "Student created", body = Acknowledgement),
        (status = 226, description = "A student with this id already exists", body = ErrorBody),
        (status = 422, description = "Body does not match the Student shape", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(new_student): AppJson<Student>,
) -> Result<impl IntoResponse, AppError> {
    state.store.create(&new_student).await?;
    tracing::info!(student_id = new_student.student_id, "student created");
    Ok(acknowledge(StatusCode::CREATED, "New student created successfully"))
}

/// PUT /student/update/:id
#[utoipa::path(
    put,
    path = "/student/update/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    request_body = StudentChanges,
    responses(
        (status = 200, description = "Student updated", body = Acknowledgement),
        (status = 404, description = "No student with this id", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(changes): AppJson<StudentChanges>,
) -> Result<impl IntoResponse, AppError> {
    state.store.update(id, &changes).await?;
    tracing::info!(student_id = id, "student updated");
    Ok(acknowledge_ok("Student updated successfully"))
}

/// GET /student/retrieve
#[utoipa::path(
    get,
    path = "/student/retrieve",
    tag = "students",
    responses((status = 200, description = "All stored students", body = StudentList))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<StudentList>, AppError> {
    let students = state.store.list().await?;
    Ok(Json(StudentList { students }))
}

/// GET /student/retrieve/:id
#[utoipa::path(
    get,
    path = "/student/retrieve/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = Student),
        (status = 404, description = "No student with this id", body = ErrorBody),
    )
)]
pub async fn read(State(state): State<AppState>, AppPath(id): AppPath<i32>) -> Result<Json<Student>, AppError> {
    let student = state.store.get(id).await?.ok_or(AppError::NotFound(id))?;
    Ok(Json(student))
}

/// DELETE /student/delete
#[utoipa::path(
    delete,
    path = "/student/delete",
    tag = "students",
    responses(
        (status = 200, description = "Every student deleted", body = Acknowledgement),
        (status = 204, description = "Nothing to delete"),
    )
)]
pub async fn delete_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let removed = state.store.delete_all().await?;
    tracing::info!(removed, "all students deleted");
    Ok(acknowledge_ok("All students data deleted successfully"))
}

/// DELETE /student/delete/:id
#[utoipa::path(
    delete,
    path = "/student/delete/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted", body = Acknowledgement),
        (status = 404, description = "No student with this id", body = ErrorBody),
    )
)]
pub async fn delete(State(state): State<AppState>, AppPath(id): AppPath<i32>) -> Result<impl IntoResponse, AppError> {
    state.store.delete(id).await?;
    tracing::info!(student_id = id, "student deleted");
    Ok(acknowledge_ok("Student deleted successfully"))
}
