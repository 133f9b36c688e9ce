//! Split preview API endpoints

use api_types::split::{
    ShareInput, ShareView, SplitMethod as ApiMethod, SplitPreview, SplitPreviewResponse,
};
use axum::Json;

use crate::ServerError;

fn map_method(method: ApiMethod) -> engine::SplitMethod {
    match method {
        ApiMethod::Equal => engine::SplitMethod::Equal,
        ApiMethod::Ratio => engine::SplitMethod::Ratio,
        ApiMethod::Fixed => engine::SplitMethod::Fixed,
    }
}

fn map_weight(share: &ShareInput) -> engine::ShareWeight {
    engine::ShareWeight {
        user_id: share.user_id,
        ratio: share.ratio.unwrap_or(1),
        fixed_minor: share.fixed_minor.unwrap_or(0),
    }
}

/// Handle requests for a share preview before an expense is submitted.
pub async fn preview(
    Json(payload): Json<SplitPreview>,
) -> Result<Json<SplitPreviewResponse>, ServerError> {
    let weights: Vec<engine::ShareWeight> = payload.shares.iter().map(map_weight).collect();

    if payload.method == ApiMethod::Fixed && payload.strict_fixed.unwrap_or(false) {
        engine::validate_fixed(payload.amount_minor, &weights)?;
    }

    let allocated = engine::distribute(
        payload.amount_minor,
        &weights,
        map_method(payload.method),
        payload.payer_id,
    )?;

    let shares = allocated
        .into_iter()
        .map(|share| ShareView {
            user_id: share.user_id,
            amount_owed_minor: share.amount_owed_minor,
        })
        .collect();

    Ok(Json(SplitPreviewResponse {
        shares,
        total_minor: payload.amount_minor,
    }))
}
