//! Axum route handlers for ad-hoc link verification.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::curation::models::CostTier;
use crate::errors::AppError;
use crate::state::AppState;
use crate::verification::models::VerificationOutcome;
use crate::verification::platforms;

const MAX_VERIFY_URLS: usize = 50;

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub urls: Vec<String>,
}

/// Registry metadata for a URL on a known learning platform.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub display_name: &'static str,
    pub cost_tier: CostTier,
    pub base_rating: f32,
}

#[derive(Debug, Serialize)]
pub struct VerifiedLink {
    #[serde(flatten)]
    pub outcome: VerificationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformSummary>,
}

impl From<VerificationOutcome> for VerifiedLink {
    fn from(outcome: VerificationOutcome) -> Self {
        let platform = Url::parse(&outcome.url)
            .ok()
            .and_then(|url| platforms::classify(&url))
            .map(|p| PlatformSummary {
                display_name: p.display_name,
                cost_tier: p.cost_tier,
                base_rating: p.base_rating,
            });
        Self { outcome, platform }
    }
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub outcomes: Vec<VerifiedLink>,
}

#[derive(Debug, Serialize)]
pub struct CacheStatsResponse {
    pub entries: usize,
    pub max_entries: usize,
    pub ttl_secs: u64,
}

/// POST /api/v1/resources/verify
///
/// Verifies arbitrary URLs through the shared cache. One outcome per input, same order.
pub async fn handle_verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError> {
    if request.urls.is_empty() {
        return Err(AppError::Validation("urls cannot be empty".to_string()));
    }
    if request.urls.len() > MAX_VERIFY_URLS {
        return Err(AppError::Validation(format!(
            "at most {MAX_VERIFY_URLS} urls per request"
        )));
    }

    let outcomes = state.pipeline.verifier().verify_all(&request.urls).await;
    Ok(Json(VerifyResponse {
        outcomes: outcomes.into_iter().map(VerifiedLink::from).collect(),
    }))
}

/// GET /api/v1/resources/cache
pub async fn handle_cache_stats(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse {
        entries: state.pipeline.verifier().cache().len(),
        max_entries: state.config.verification.cache_max_entries,
        ttl_secs: state.config.verification.cache_ttl.as_secs(),
    })
}
