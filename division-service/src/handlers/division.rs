use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use service_core::error::AppError;
use service_core::middleware::tracing::RequestId;
use validator::Validate;

use crate::dtos::{DivisionParams, DivisionResponse};
use crate::startup::AppState;

/// `GET /?first_number=..&second_number=..`
pub async fn divide(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    params: Result<Query<DivisionParams>, QueryRejection>,
) -> Result<Json<DivisionResponse>, AppError> {
    let request_id = request_id.map(|Extension(RequestId(id))| id);

    let Query(params) = params.map_err(|rejection| {
        tracing::debug!(request_id = ?request_id, error = %rejection, "Rejected division query");
        AppError::UnprocessableEntity(rejection.body_text())
    })?;
    params.validate()?;

    tracing::debug!(
        request_id = ?request_id,
        first_number = params.first_number,
        second_number = params.second_number,
        "Division requested"
    );

    let quotient = state
        .divider
        .divide(params.first_number, params.second_number)?;

    // Finite operands can still overflow, and JSON has no infinity.
    if !quotient.is_finite() {
        return Err(AppError::InternalError(anyhow::anyhow!(
            "quotient of {} / {} is not finite (request_id: {:?})",
            params.first_number,
            params.second_number,
            request_id
        )));
    }

    Ok(Json(DivisionResponse::new(params, quotient)))
}
