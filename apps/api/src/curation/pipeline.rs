//! Curation Pipeline: select → verify → annotate → rank.
//!
//! Never fails: unverified entries get a synthesized fallback link, and a
//! selector failure degrades to a small hardcoded list. Learning-path
//! generation must never block on this.

use std::cmp::Ordering;

use chrono::Utc;
use tracing::{info, warn};
use url::Url;

use crate::curation::models::{CandidateResource, CostTier, CuratedResource, Difficulty, ResourceType};
use crate::curation::selector::ResourceSelector;
use crate::verification::batch::BatchVerifier;
use crate::verification::fallback;
use crate::verification::models::VerificationOutcome;
use crate::verification::platforms;

pub struct CurationPipeline {
    selector: ResourceSelector,
    verifier: BatchVerifier,
}

impl CurationPipeline {
    pub fn new(selector: ResourceSelector, verifier: BatchVerifier) -> Self {
        Self { selector, verifier }
    }

    pub fn verifier(&self) -> &BatchVerifier {
        &self.verifier
    }

    pub async fn curate(
        &self,
        role_title: &str,
        description: &str,
        requirements: &[String],
    ) -> Vec<CuratedResource> {
        let candidates = match self.selector.select(role_title, description, requirements) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(role_title, error = %e, "Resource selection failed, using default resources");
                return default_resources();
            }
        };

        let urls: Vec<String> = candidates.iter().map(|c| c.url.to_string()).collect();
        let outcomes = self.verifier.verify_all(&urls).await;

        let mut curated: Vec<CuratedResource> = candidates
            .into_iter()
            .zip(&outcomes)
            .map(|(candidate, outcome)| annotate(candidate, outcome))
            .collect();

        // Verified first, then by rating; stable for ties
        curated.sort_by(|a, b| {
            b.verified.cmp(&a.verified).then_with(|| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(Ordering::Equal)
            })
        });

        let verified = curated.iter().filter(|r| r.verified).count();
        info!(
            role_title,
            total = curated.len(),
            verified,
            with_fallback = curated.iter().filter(|r| r.fallback_url.is_some()).count(),
            "Curated learning resources"
        );

        curated
    }
}

fn annotate(candidate: &CandidateResource, outcome: &VerificationOutcome) -> CuratedResource {
    let fallback_url = (!outcome.is_reachable || outcome.is_inconclusive()).then(|| {
        fallback::synthesize(
            candidate.url,
            candidate.resource_type.as_str(),
            candidate.title,
        )
    });

    CuratedResource {
        resource_type: candidate.resource_type,
        title: candidate.title.to_string(),
        description: candidate.description.to_string(),
        url: candidate.url.to_string(),
        verified: outcome.is_reachable,
        last_verified_at: outcome.checked_at,
        fallback_url,
        price: candidate.cost_tier,
        rating: Some(candidate.rating),
        provider: provider_name(candidate),
        difficulty: candidate.difficulty,
        duration: (!candidate.duration.is_empty()).then(|| candidate.duration.to_string()),
    }
}

fn provider_name(candidate: &CandidateResource) -> String {
    if !candidate.provider.is_empty() {
        return candidate.provider.to_string();
    }
    Url::parse(candidate.url)
        .ok()
        .and_then(|u| u.host_str().and_then(platforms::lookup))
        .map(|p| p.display_name.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Always-valid resources returned when selection fails outright.
pub fn default_resources() -> Vec<CuratedResource> {
    let now = Utc::now();
    let generic = |resource_type: ResourceType, title: &str, description: &str, url: &str, provider: &str| {
        CuratedResource {
            resource_type,
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            verified: false,
            last_verified_at: now,
            fallback_url: Some(fallback::synthesize(url, resource_type.as_str(), title)),
            price: CostTier::Free,
            rating: None,
            provider: provider.to_string(),
            difficulty: Difficulty::Beginner,
            duration: None,
        }
    };

    vec![
        generic(
            ResourceType::Course,
            "Career skills courses",
            "Browse free and paid courses for in-demand career skills.",
            "https://www.coursera.org/browse",
            "Coursera",
        ),
        generic(
            ResourceType::Tutorial,
            "Career skills video tutorials",
            "Free video tutorials covering practical workplace skills.",
            "https://www.youtube.com/results?search_query=career+skills+tutorial",
            "YouTube",
        ),
    ]
}
