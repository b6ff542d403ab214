//! HTTP request handlers for the Parafiscal Savings Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{SplitPercentage, calculate_commission, compare_scenarios};
use crate::error::EngineResult;
use crate::models::Employee;
use crate::roster::{ImportRow, Roster, import_rows};

use super::request::{ImportRequest, QuotationRequest};
use super::response::{ApiError, ApiErrorResponse, ImportResponse, QuotationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/roster/import", post(import_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into a structured error response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for the POST /quote endpoint.
///
/// Accepts a roster, salary split, and risk level, and returns the savings
/// comparison plus the Tikin commission.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuotationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quotation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    // Validate every salary at the entry boundary; the calculation core
    // assumes pre-validated input.
    let roster = match build_roster(&request, &state) {
        Ok(roster) => roster,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quotation roster rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Out-of-range splits are clamped, never rejected.
    let split = SplitPercentage::with_value(state.config().split(), request.salary_percentage);

    let savings = compare_scenarios(
        roster.employees(),
        split.value(),
        request.risk_level,
        state.config().rates(),
    );
    let commission = calculate_commission(
        savings.tikin.total_bonus_amount,
        state.config().commission(),
    );

    info!(
        correlation_id = %correlation_id,
        employees = roster.len(),
        risk_level = %request.risk_level,
        salary_percentage = %split.value(),
        monthly_savings = %savings.monthly_savings,
        commission_level = commission.level,
        "Quotation generated"
    );

    let response = QuotationResponse {
        quotation_id: correlation_id,
        generated_at: Utc::now(),
        salary_percentage: split.value(),
        savings,
        commission,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Builds and validates the roster for a quotation request.
fn build_roster(request: &QuotationRequest, state: &AppState) -> EngineResult<Roster> {
    let rules = state.config().validation();
    let mut roster = Roster::new();
    for entry in &request.employees {
        roster = roster.add(entry.clone().into(), rules)?;
    }
    Ok(roster)
}

/// Handler for the POST /roster/import endpoint.
///
/// Validates extracted spreadsheet rows all-or-nothing and returns the
/// imported employees or the complete row-indexed error list.
async fn import_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing roster import");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let rows: Vec<ImportRow> = request.rows.into_iter().map(Into::into).collect();

    match import_rows(&rows, state.config().validation()) {
        Ok(employees) => {
            info!(
                correlation_id = %correlation_id,
                imported = employees.len(),
                "Roster import accepted"
            );
            let response = import_response(employees);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Roster import rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

fn import_response(employees: Vec<Employee>) -> ImportResponse {
    ImportResponse {
        imported: employees.len(),
        employees,
    }
}
