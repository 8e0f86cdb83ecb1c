use axum::{Json, http::StatusCode};

use crate::db::{DbStudent, DbTeacher};
use crate::error::ApiError;
use crate::middleware::{JsonFields, ReadyStore};
use crate::types::roster::{MessageResponse, NewMember, NewStudentRequest, NewTeacherRequest};

/// GET /teachers -> every teacher row, unpaginated.
pub async fn list_teachers(
    ReadyStore(store): ReadyStore,
) -> Result<Json<Vec<DbTeacher>>, ApiError> {
    let rows = store
        .list_teachers()
        .await
        .map_err(|e| e.with_message("Failed to retrieve teachers"))?;
    Ok(Json(rows))
}

/// GET /students -> every student row, unpaginated.
pub async fn list_students(
    ReadyStore(store): ReadyStore,
) -> Result<Json<Vec<DbStudent>>, ApiError> {
    let rows = store
        .list_students()
        .await
        .map_err(|e| e.with_message("Failed to retrieve students"))?;
    Ok(Json(rows))
}

/// POST /teachers -> creates the login and the teacher profile together.
pub async fn create_teacher(
    ReadyStore(store): ReadyStore,
    body: JsonFields,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    const FAILED: &str = "Failed to create teacher";

    let member =
        NewMember::try_from(NewTeacherRequest::from(body)).map_err(|e| e.with_message(FAILED))?;
    store
        .create_teacher(&member)
        .await
        .map_err(|e| e.with_message(FAILED))?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Teacher created successfully!")),
    ))
}

/// POST /students -> creates the login and the student profile together.
pub async fn create_student(
    ReadyStore(store): ReadyStore,
    body: JsonFields,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    const FAILED: &str = "Failed to create student";

    let member =
        NewMember::try_from(NewStudentRequest::from(body)).map_err(|e| e.with_message(FAILED))?;
    store
        .create_student(&member)
        .await
        .map_err(|e| e.with_message(FAILED))?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Student created successfully!")),
    ))
}
