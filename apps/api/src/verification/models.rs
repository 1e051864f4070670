use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a URL could not be confirmed reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    MalformedUrl,
    NetworkError,
    CorsBlocked,
    Timeout,
}

/// Which step of the verifier produced the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationSource {
    Registry,
    Probe,
    TrustedDomain,
    Rejected,
}

/// Result of checking one URL. Superseded by later checks, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    pub url: String,
    pub is_reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    pub checked_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<FailureReason>,
    pub source: VerificationSource,
}

impl VerificationOutcome {
    pub fn reachable(url: &str, source: VerificationSource) -> Self {
        Self {
            url: url.to_string(),
            is_reachable: true,
            http_status: None,
            checked_at: Utc::now(),
            latency_ms: None,
            failure_reason: None,
            source,
        }
    }

    pub fn unreachable(url: &str, reason: FailureReason, source: VerificationSource) -> Self {
        Self {
            url: url.to_string(),
            is_reachable: false,
            http_status: None,
            checked_at: Utc::now(),
            latency_ms: None,
            failure_reason: Some(reason),
            source,
        }
    }

    /// Reachable on paper but without positive proof (trusted-domain optimism).
    pub fn is_inconclusive(&self) -> bool {
        self.is_reachable && self.failure_reason.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_wire_format() {
        let json = serde_json::to_string(&FailureReason::MalformedUrl).unwrap();
        assert_eq!(json, "\"malformed-url\"");
        let json = serde_json::to_string(&FailureReason::CorsBlocked).unwrap();
        assert_eq!(json, "\"cors-blocked\"");
    }

    #[test]
    fn test_trusted_domain_outcome_is_inconclusive() {
        let mut outcome =
            VerificationOutcome::reachable("https://mit.edu/x", VerificationSource::TrustedDomain);
        outcome.failure_reason = Some(FailureReason::Timeout);
        assert!(outcome.is_inconclusive());

        let clean = VerificationOutcome::reachable("https://a.com", VerificationSource::Probe);
        assert!(!clean.is_inconclusive());
    }
}
