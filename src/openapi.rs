//! OpenAPI document served at `/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::student;
use crate::model::{Student, StudentChanges, StudentList};
use crate::response::{Acknowledgement, Welcome};
use crate::routes::common;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "student-registry"),
    paths(
        common::root,
        student::create,
        student::update,
        student::list,
        student::read,
        student::delete_all,
        student::delete,
    ),
    components(schemas(
        Student,
        StudentChanges,
        StudentList,
        Acknowledgement,
        Welcome,
        ErrorBody,
        ErrorDetail
    )),
    tags(
        (name = "root", description = "Service info"),
        (name = "students", description = "Student record CRUD")
    )
)]
pub struct ApiDoc;
