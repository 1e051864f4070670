//! Platform registry: static metadata for pre-vetted educational domains.
//!
//! A URL on a registered domain whose path matches the platform's expected
//! shape is trusted without a live check. The shape test keeps a bare
//! domain root from passing as a specific course page.

use url::Url;

use crate::curation::models::CostTier;

/// Valid path shapes for a registered platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathShape {
    /// Any path, including the root.
    AnyPath,
    /// Path must start with one of the prefixes (root never matches).
    Prefixes(&'static [&'static str]),
    /// Any path other than the bare root.
    NonRoot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformInfo {
    pub domain: &'static str,
    pub display_name: &'static str,
    pub cost_tier: CostTier,
    pub base_rating: f32,
    pub path_shape: PathShape,
}

impl PlatformInfo {
    pub fn matches_path(&self, path: &str) -> bool {
        let is_root = path.is_empty() || path == "/";
        match self.path_shape {
            PathShape::AnyPath => true,
            PathShape::NonRoot => !is_root,
            PathShape::Prefixes(prefixes) => {
                !is_root && prefixes.iter().any(|p| path.starts_with(p))
            }
        }
    }
}

const PLATFORMS: &[PlatformInfo] = &[
    PlatformInfo {
        domain: "coursera.org",
        display_name: "Coursera",
        cost_tier: CostTier::Freemium,
        base_rating: 4.6,
        path_shape: PathShape::Prefixes(&["/learn/", "/specializations/", "/professional-certificates/"]),
    },
    PlatformInfo {
        domain: "udemy.com",
        display_name: "Udemy",
        cost_tier: CostTier::Paid,
        base_rating: 4.4,
        path_shape: PathShape::Prefixes(&["/course/"]),
    },
    PlatformInfo {
        domain: "edx.org",
        display_name: "edX",
        cost_tier: CostTier::Freemium,
        base_rating: 4.5,
        path_shape: PathShape::Prefixes(&["/learn/", "/course/", "/certificates/"]),
    },
    PlatformInfo {
        domain: "freecodecamp.org",
        display_name: "freeCodeCamp",
        cost_tier: CostTier::Free,
        base_rating: 4.8,
        path_shape: PathShape::Prefixes(&["/learn", "/news/"]),
    },
    PlatformInfo {
        domain: "developer.mozilla.org",
        display_name: "MDN Web Docs",
        cost_tier: CostTier::Free,
        base_rating: 4.9,
        path_shape: PathShape::Prefixes(&["/en-US/docs/"]),
    },
    PlatformInfo {
        domain: "khanacademy.org",
        display_name: "Khan Academy",
        cost_tier: CostTier::Free,
        base_rating: 4.7,
        path_shape: PathShape::NonRoot,
    },
    PlatformInfo {
        domain: "youtube.com",
        display_name: "YouTube",
        cost_tier: CostTier::Free,
        base_rating: 4.2,
        path_shape: PathShape::Prefixes(&["/watch", "/playlist", "/@", "/c/"]),
    },
    PlatformInfo {
        domain: "kaggle.com",
        display_name: "Kaggle",
        cost_tier: CostTier::Free,
        base_rating: 4.6,
        path_shape: PathShape::Prefixes(&["/learn", "/competitions"]),
    },
    PlatformInfo {
        domain: "leetcode.com",
        display_name: "LeetCode",
        cost_tier: CostTier::Freemium,
        base_rating: 4.5,
        path_shape: PathShape::NonRoot,
    },
    PlatformInfo {
        domain: "hackerrank.com",
        display_name: "HackerRank",
        cost_tier: CostTier::Free,
        base_rating: 4.3,
        path_shape: PathShape::NonRoot,
    },
    PlatformInfo {
        domain: "nodejs.org",
        display_name: "Node.js",
        cost_tier: CostTier::Free,
        base_rating: 4.7,
        path_shape: PathShape::Prefixes(&["/en/learn", "/docs/", "/api/"]),
    },
    PlatformInfo {
        domain: "docs.python.org",
        display_name: "Python Docs",
        cost_tier: CostTier::Free,
        base_rating: 4.8,
        path_shape: PathShape::NonRoot,
    },
    PlatformInfo {
        domain: "react.dev",
        display_name: "React",
        cost_tier: CostTier::Free,
        base_rating: 4.8,
        path_shape: PathShape::Prefixes(&["/learn", "/reference/"]),
    },
    PlatformInfo {
        domain: "figma.com",
        display_name: "Figma",
        cost_tier: CostTier::Freemium,
        base_rating: 4.5,
        path_shape: PathShape::Prefixes(&["/resources/", "/community/", "/best-practices/"]),
    },
    PlatformInfo {
        domain: "learndigital.withgoogle.com",
        display_name: "Google Digital Garage",
        cost_tier: CostTier::Free,
        base_rating: 4.4,
        path_shape: PathShape::NonRoot,
    },
    PlatformInfo {
        domain: "academy.hubspot.com",
        display_name: "HubSpot Academy",
        cost_tier: CostTier::Free,
        base_rating: 4.5,
        path_shape: PathShape::Prefixes(&["/courses/", "/certification"]),
    },
    PlatformInfo {
        domain: "github.com",
        display_name: "GitHub",
        cost_tier: CostTier::Free,
        base_rating: 4.5,
        path_shape: PathShape::NonRoot,
    },
];

/// Institutional domains assumed reachable when a probe is inconclusive.
const TRUSTED_DOMAINS: &[&str] = &[
    "mit.edu",
    "stanford.edu",
    "harvard.edu",
    "berkeley.edu",
    "cmu.edu",
    "ox.ac.uk",
    "cam.ac.uk",
    "microsoft.com",
    "google.com",
    "aws.amazon.com",
    "ibm.com",
    "w3.org",
    "w3schools.com",
    "python.org",
    "rust-lang.org",
    "mozilla.org",
];

/// True when `host` is `domain` or one of its subdomains.
pub(crate) fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Looks up the registry entry for a host (subdomains included).
pub fn lookup(host: &str) -> Option<&'static PlatformInfo> {
    let host = host.to_ascii_lowercase();
    PLATFORMS.iter().find(|p| host_matches(&host, p.domain))
}

/// Returns the platform entry iff the URL's host is registered AND its
/// path has the platform's expected shape.
pub fn classify(url: &Url) -> Option<&'static PlatformInfo> {
    let platform = lookup(url.host_str()?)?;
    platform.matches_path(url.path()).then_some(platform)
}

pub fn is_trusted_domain(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    TRUSTED_DOMAINS.iter().any(|d| host_matches(&host, d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_lookup_matches_subdomain() {
        let platform = lookup("www.coursera.org").unwrap();
        assert_eq!(platform.display_name, "Coursera");
        assert!(lookup("notcoursera.org").is_none());
    }

    #[test]
    fn test_classify_requires_course_shape() {
        assert!(classify(&parse("https://www.coursera.org/learn/machine-learning")).is_some());
        assert!(
            classify(&parse("https://www.coursera.org/")).is_none(),
            "bare root must not pass as a course page"
        );
        assert!(classify(&parse("https://www.coursera.org/about")).is_none());
    }

    #[test]
    fn test_non_root_shape() {
        assert!(classify(&parse("https://www.khanacademy.org/computing")).is_some());
        assert!(classify(&parse("https://www.khanacademy.org")).is_none());
    }

    #[test]
    fn test_unregistered_host_is_not_classified() {
        assert!(classify(&parse("https://expired-domain.example/course")).is_none());
    }

    #[test]
    fn test_trusted_domains() {
        assert!(is_trusted_domain("ocw.mit.edu"));
        assert!(is_trusted_domain("learn.microsoft.com"));
        assert!(!is_trusted_domain("expired-domain.example"));
        assert!(!is_trusted_domain("fakemit.edu"));
    }
}
