//! Pure API handlers
//!
//! These take the shared draw by reference and never modify it.

use crate::pairing::Pairings;

use super::error::ApiError;
use super::types::{LookupData, LookupRequest, StatusData};

/// Look up who a giver buys for.
///
/// The name is trimmed the same way roster lines are.
pub fn lookup(pairings: &Pairings, req: &LookupRequest) -> Result<LookupData, ApiError> {
    let name = req.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(ApiError::bad_request("Name parameter is required"));
    }

    pairings
        .giftee_for(name)
        .map(|giftee| LookupData {
            giver: name.to_string(),
            giftee: giftee.to_string(),
        })
        .ok_or_else(|| {
            log::debug!("lookup miss for {name:?}");
            ApiError::not_found("Name not found in Secret Santa list")
        })
}

/// Summary of the draw, without revealing any pair
#[must_use]
pub fn get_status(pairings: &Pairings) -> StatusData {
    StatusData {
        participants: pairings.len(),
    }
}
