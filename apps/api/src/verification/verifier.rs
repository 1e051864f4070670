//! Link verifier: decides whether a single URL is reachable. Never fails.
//!
//! Order, first match wins:
//! 1. syntax check (http/https with a public host)
//! 2. platform registry match (no network call; skipped in strict mode)
//! 3. bounded network probe
//! 4. trusted-domain optimism when the probe errors
//! 5. unreachable with the captured reason
//!
//! Biased toward false positives for known platforms.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};
use url::{Host, Url};

use crate::verification::models::{FailureReason, VerificationOutcome, VerificationSource};
use crate::verification::platforms;
use crate::verification::probe::{LinkProbe, ProbeError};

/// Statuses that prove the resource is gone, even though the server answered.
///
/// These are reported as `NetworkError`: the outcome is unreachable and
/// `http_status` carries the actual code. `FailureReason` has no variant for
/// a server-confirmed absence; add one here if it ever does.
const GONE_STATUSES: &[u16] = &[404, 410];

#[derive(Clone)]
pub struct LinkVerifier {
    probe: Arc<dyn LinkProbe>,
    probe_timeout: Duration,
    strict: bool,
}

impl LinkVerifier {
    pub fn new(probe: Arc<dyn LinkProbe>, probe_timeout: Duration) -> Self {
        Self {
            probe,
            probe_timeout,
            strict: false,
        }
    }

    /// Strict mode always probes; the registry is only used for metadata.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub async fn verify(&self, raw_url: &str) -> VerificationOutcome {
        let url = match parse_http_url(raw_url) {
            Some(url) => url,
            None => {
                debug!(url = %raw_url, "Rejected malformed or non-public URL");
                return VerificationOutcome::unreachable(
                    raw_url,
                    FailureReason::MalformedUrl,
                    VerificationSource::Rejected,
                );
            }
        };

        if !self.strict {
            if let Some(platform) = platforms::classify(&url) {
                debug!(url = %raw_url, platform = platform.display_name, "Registry match");
                return VerificationOutcome::reachable(raw_url, VerificationSource::Registry);
            }
        }

        let started = Instant::now();
        let result = match tokio::time::timeout(self.probe_timeout, self.probe.probe(&url)).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout),
        };
        let latency_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(response) => {
                let gone = response
                    .status
                    .is_some_and(|s| GONE_STATUSES.contains(&s));
                let mut outcome = if gone {
                    VerificationOutcome::unreachable(
                        raw_url,
                        FailureReason::NetworkError,
                        VerificationSource::Probe,
                    )
                } else {
                    VerificationOutcome::reachable(raw_url, VerificationSource::Probe)
                };
                outcome.http_status = response.status;
                outcome.latency_ms = Some(latency_ms);
                outcome
            }
            Err(e) => {
                let reason = failure_reason(&e);
                let host = url.host_str().unwrap_or_default();

                let mut outcome = if platforms::is_trusted_domain(host) {
                    debug!(url = %raw_url, error = %e, "Probe failed on trusted domain, assuming reachable");
                    let mut outcome =
                        VerificationOutcome::reachable(raw_url, VerificationSource::TrustedDomain);
                    outcome.failure_reason = Some(reason);
                    outcome
                } else {
                    warn!(url = %raw_url, error = %e, "Link probe failed");
                    VerificationOutcome::unreachable(raw_url, reason, VerificationSource::Probe)
                };
                outcome.latency_ms = Some(latency_ms);
                outcome
            }
        }
    }
}

/// Accepts http/https URLs whose host is publicly routable. Loopback,
/// private, link-local and unspecified addresses (and `localhost`) are
/// never probed.
fn parse_http_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let public = match url.host()? {
        Host::Domain(domain) => !is_local_domain(domain),
        Host::Ipv4(ip) => is_public_ipv4(ip),
        Host::Ipv6(ip) => match ip.to_ipv4_mapped() {
            Some(v4) => is_public_ipv4(v4),
            None => is_public_ipv6(ip),
        },
    };
    public.then_some(url)
}

fn is_local_domain(domain: &str) -> bool {
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();
    domain.is_empty() || domain == "localhost" || domain.ends_with(".localhost")
}

fn is_public_ipv4(ip: Ipv4Addr) -> bool {
    !(ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast())
}

fn is_public_ipv6(ip: Ipv6Addr) -> bool {
    let first = ip.segments()[0];
    let unique_local = first & 0xfe00 == 0xfc00;
    let link_local = first & 0xffc0 == 0xfe80;
    !(ip.is_loopback() || ip.is_unspecified() || unique_local || link_local)
}

fn failure_reason(e: &ProbeError) -> FailureReason {
    match e {
        ProbeError::Timeout => FailureReason::Timeout,
        ProbeError::Network(_) => FailureReason::NetworkError,
        ProbeError::Blocked(_) => FailureReason::CorsBlocked,
    }
}
