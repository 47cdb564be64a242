//! HTTP request handlers for the Roster Generation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{self, GenerationSnapshot};
use crate::models::{Employee, Roster, ShiftAssignment};
use crate::mutation::{CellEdit, edit_cell, set_lock};
use crate::registry::RuleSnapshot;
use crate::store::{RosterStore, RosterSummary};

use super::request::{EditCellRequest, GenerateRequest, SetLockRequest, StatusRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/rosters", get(list_rosters_handler).post(save_roster_handler))
        .route("/rosters/:id", get(get_roster_handler))
        .route("/rosters/:id/cells", post(edit_cell_handler))
        .route("/rosters/:id/locks", post(set_lock_handler))
        .route("/rosters/:id/status", post(status_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to the API error shape.
fn reject_json(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
}

/// Handler for the `POST /generate` endpoint.
///
/// Claims the (month, year) target, snapshots the request's reference
/// data, runs the assignment engine, and returns the generation result.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster generation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject_json(correlation_id, rejection).into_response(),
    };

    // Serialize runs per target; the claim is released when the guard
    // drops at the end of this request.
    let _guard = match state.begin_generation(request.config.month, request.config.year) {
        Ok(guard) => guard,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Generation target busy");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let existing_roster = match request.existing_roster_id {
        Some(id) => match state.rosters().get(id) {
            Ok(roster) => Some(roster),
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Existing roster not found");
                return ApiErrorResponse::from(err).into_response();
            }
        },
        None => None,
    };

    let snapshot = GenerationSnapshot {
        config: request.config,
        employees: request.employees.into_iter().map(Into::into).collect(),
        holidays: request.holidays.into_iter().map(Into::into).collect(),
        leaves: request.leaves.into_iter().map(Into::into).collect(),
        rules: state.config().rules().to_vec(),
        catalog: state.config().catalog().clone(),
        existing_roster,
        prior_entries: request.prior_entries.into_iter().map(Into::into).collect(),
        requested_by: request.requested_by,
    };

    let start_time = Instant::now();
    match engine::generate(&snapshot) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                roster_id = %result.roster.id,
                total_assignments = result.stats.total_assignments,
                violations = result.stats.violation_count,
                unresolved = result.stats.unresolved_count,
                duration_us = duration.as_micros(),
                "Roster generation completed successfully"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Roster generation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `GET /rosters` endpoint.
async fn list_rosters_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.rosters().list())
}

/// Handler for the `POST /rosters` endpoint.
///
/// Saves a generated roster into the store at version 1.
async fn save_roster_handler(
    State(state): State<AppState>,
    payload: Result<Json<Roster>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let roster = match payload {
        Ok(Json(roster)) => roster,
        Err(rejection) => return reject_json(correlation_id, rejection).into_response(),
    };

    match state.rosters().save(roster) {
        Ok(saved) => {
            info!(correlation_id = %correlation_id, roster_id = %saved.id, "Roster saved");
            (StatusCode::CREATED, Json(saved)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Roster save failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `GET /rosters/{id}` endpoint.
async fn get_roster_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.rosters().get(id) {
        Ok(roster) => Json(roster).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for the `POST /rosters/{id}/cells` endpoint.
///
/// Applies a single-cell edit under the store's write lock; the edit is
/// itself a saved mutation, so the roster version is bumped on success.
async fn edit_cell_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EditCellRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject_json(correlation_id, rejection).into_response(),
    };

    let employee: Employee = request.employee.into();
    let rules = RuleSnapshot::build(state.config().rules(), state.config().catalog());
    let edit = CellEdit {
        date: request.date,
        new_shift: ShiftAssignment::from_code(&request.new_shift),
        expected_revision: request.expected_revision,
        modified_by: request.modified_by,
        force_override: request.force_override,
    };

    let outcome = state.rosters().modify(id, |roster| {
        edit_cell(roster, state.config().catalog(), &rules, &employee, &edit)
    });

    match outcome {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                roster_id = %id,
                employee_id = %entry.employee_id,
                date = %entry.date,
                "Cell edit applied"
            );
            Json(entry).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, roster_id = %id, error = %err, "Cell edit rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `POST /rosters/{id}/locks` endpoint.
async fn set_lock_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<SetLockRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject_json(correlation_id, rejection).into_response(),
    };

    let outcome = state.rosters().modify(id, |roster| {
        set_lock(
            roster,
            &request.employee_id,
            request.date,
            request.locked,
            &request.modified_by,
        )
    });

    match outcome {
        Ok(entry) => Json(entry).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, roster_id = %id, error = %err, "Lock change rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `POST /rosters/{id}/status` endpoint.
async fn status_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<StatusRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject_json(correlation_id, rejection).into_response(),
    };

    let outcome = state.rosters().modify(id, |roster| {
        roster.transition_to(request.status)?;
        Ok(RosterSummary::from(&*roster))
    });

    match outcome {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                roster_id = %id,
                status = %request.status,
                "Roster status changed"
            );
            Json(summary).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, roster_id = %id, error = %err, "Status change rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
