use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::captcha::VerifyError;
use crate::db::{delete_investment, insert_investment, list_investments};
use crate::models::{InvestmentResponse, NewInvestment};

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyCaptchaRequest {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Serialize)]
pub struct VerifyCaptchaResponse {
    pub success: bool,
    pub message: String,
}

/// GET /getInvestments - every record, store-native order.
#[tracing::instrument(skip(state))]
pub async fn get_investments_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<InvestmentResponse>>> {
    let records = list_investments(&state.investments)
        .await
        .map_err(ApiError::ListFailed)?;

    Ok(Json(
        records.into_iter().map(InvestmentResponse::from).collect(),
    ))
}

/// POST /addInvestment - insert the supplied fields, echo the record back
/// with the store-assigned identifier.
#[tracing::instrument(skip(state, payload))]
pub async fn add_investment_handler(
    State(state): State<AppState>,
    Json(payload): Json<NewInvestment>,
) -> ApiResult<Json<InvestmentResponse>> {
    let inserts = state.investments.clone_with_type::<NewInvestment>();
    let id = insert_investment(&inserts, payload.clone())
        .await
        .map_err(ApiError::Storage)?;

    info!(id = %id, "Investment created");
    Ok(Json(InvestmentResponse::created(id, payload)))
}

/// DELETE /deleteInvestment/{id} - remove by identifier. Succeeds even when
/// nothing matches; only a malformed id or a storage failure errors.
#[tracing::instrument(skip(state))]
pub async fn delete_investment_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    delete_investment(&state.investments, &id)
        .await
        .map_err(ApiError::Storage)?;

    Ok(Json(DeleteResponse {
        message: "Deleted successfully".to_string(),
    }))
}

/// POST /verify-captcha - pass the token through to the verification
/// service. A bot verdict is not an error: both outcomes are 200s carrying
/// the success flag. Only an unreachable remote surfaces as a 500.
#[tracing::instrument(skip(state, payload))]
pub async fn verify_captcha_handler(
    State(state): State<AppState>,
    Json(payload): Json<VerifyCaptchaRequest>,
) -> ApiResult<Json<VerifyCaptchaResponse>> {
    // Empty tokens count as missing.
    let token = payload
        .token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingCaptchaInput)?;

    match state.verifier.verify(token).await {
        Ok(true) => Ok(Json(VerifyCaptchaResponse {
            success: true,
            message: "Human verified!".to_string(),
        })),
        Ok(false) => Ok(Json(VerifyCaptchaResponse {
            success: false,
            message: "Bot detected!".to_string(),
        })),
        Err(VerifyError::MissingSecret) => Err(ApiError::MissingCaptchaInput),
        Err(e) => Err(ApiError::CaptchaUnreachable(e)),
    }
}
