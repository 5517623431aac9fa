//! Donor pledge endpoints.

use axum::extract::{Path, State};
use axum::Json;

use hemolink_core::model::{DonorPledge, NewDonorPledge};

use crate::error::{Error, Result};
use crate::state::AppState;

/// `POST /api/donor_pledges` — pledge a donor profile against a request.
///
/// Returns the stored pledge re-read with full donor and request details.
pub async fn create(
    State(state): State<AppState>,
    Json(pledge): Json<NewDonorPledge>,
) -> Result<Json<DonorPledge>> {
    let (donor_ref, request_ref) = match (pledge.donor_profile, pledge.matched_request) {
        (Some(d), Some(r)) => (d, r),
        _ => {
            return Err(Error::BadRequest(
                "missing donorProfile or matchedRequest ids".to_string(),
            ));
        }
    };

    let donor_exists = state.profiles.find_by_id(donor_ref.donor_id).await?.is_some();
    let request_exists = state
        .requests
        .find_by_id(request_ref.request_id)
        .await?
        .is_some();
    if !donor_exists || !request_exists {
        return Err(Error::BadRequest(
            "invalid donorId or requestId".to_string(),
        ));
    }

    let stored = state
        .pledges
        .insert(&pledge, donor_ref.donor_id, request_ref.request_id)
        .await?;
    Ok(Json(stored))
}

/// `GET /api/donor_pledges` — all pledges with details.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DonorPledge>>> {
    Ok(Json(state.pledges.find_all().await?))
}

/// `GET /api/donor_pledges/{id}`.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DonorPledge>> {
    let pledge = state
        .pledges
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("donor pledge not found with id {id}")))?;
    Ok(Json(pledge))
}

/// `GET /api/donor_pledges/by_request/{request_id}` — pledges for one
/// blood request.
pub async fn by_request(
    State(state): State<AppState>,
    Path(request_id): Path<i64>,
) -> Result<Json<Vec<DonorPledge>>> {
    Ok(Json(state.pledges.find_by_request(request_id).await?))
}
