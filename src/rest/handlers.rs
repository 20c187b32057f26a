use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::student_actor::{parse_candidate, StudentError};

use super::{
    models::{ErrorResponse, HealthResponse},
    AppState,
};

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            uptime_secs,
        }),
    )
}

pub async fn list_students(State(state): State<AppState>) -> Response {
    match state.students.list_students().await {
        Ok(students) => Json(students).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn create_student(State(state): State<AppState>, body: Bytes) -> Response {
    let value: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "Rejected malformed JSON body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("invalid JSON body")),
            )
                .into_response();
        }
    };

    let candidate = match parse_candidate(&value) {
        Ok(candidate) => candidate,
        Err(err) => return error_response(err.into()),
    };

    match state.students.create_student(candidate).await {
        Ok(student) => (StatusCode::CREATED, Json(student)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn get_student(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state.students.get_student(id).await {
        Ok(Some(student)) => Json(student).into_response(),
        Ok(None) => error_response(StudentError::NotFound(id)),
        Err(err) => error_response(err),
    }
}

pub async fn delete_student(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match state.students.delete_student(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("endpoint not found")),
    )
}

fn parse_id(raw: &str) -> Result<u64, Response> {
    raw.parse::<u64>().map_err(|err| {
        warn!("Invalid student id {}: {}", raw, err);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("invalid student id")),
        )
            .into_response()
    })
}

fn error_response(err: StudentError) -> Response {
    match err {
        StudentError::ValidationError(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: e.reason.message().to_string(),
                field: Some(e.field.to_string()),
            }),
        )
            .into_response(),
        StudentError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("student {} not found", id))),
        )
            .into_response(),
        StudentError::ActorCommunicationError(msg) => {
            error!(error = %msg, "Student store unavailable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal server error")),
            )
                .into_response()
        }
    }
}
