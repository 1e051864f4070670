use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Course,
    Tutorial,
    Documentation,
    Practice,
    Certification,
    Project,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Course => "course",
            ResourceType::Tutorial => "tutorial",
            ResourceType::Documentation => "documentation",
            ResourceType::Practice => "practice",
            ResourceType::Certification => "certification",
            ResourceType::Project => "project",
        }
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "course" => Ok(ResourceType::Course),
            "tutorial" => Ok(ResourceType::Tutorial),
            "documentation" => Ok(ResourceType::Documentation),
            "practice" => Ok(ResourceType::Practice),
            "certification" => Ok(ResourceType::Certification),
            "project" => Ok(ResourceType::Project),
            other => Err(format!("unknown resource type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostTier {
    Free,
    Freemium,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A catalog entry. Defined at build time, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateResource {
    pub resource_type: ResourceType,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub provider: &'static str,
    pub cost_tier: CostTier,
    /// 0.0 to 5.0
    pub rating: f32,
    pub difficulty: Difficulty,
    pub duration: &'static str,
}

/// A candidate annotated with its verification result.
///
/// Serialized shape is what the learning-path store persists as JSONB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedResource {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub title: String,
    pub description: String,
    pub url: String,
    pub verified: bool,
    pub last_verified_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
    pub price: CostTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub provider: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(fallback_url: Option<String>) -> CuratedResource {
        CuratedResource {
            resource_type: ResourceType::Course,
            title: "Node.js Basics".to_string(),
            description: "Server-side JavaScript".to_string(),
            url: "https://www.coursera.org/learn/nodejs".to_string(),
            verified: fallback_url.is_none(),
            last_verified_at: Utc::now(),
            fallback_url,
            price: CostTier::Freemium,
            rating: Some(4.6),
            provider: "Coursera".to_string(),
            difficulty: Difficulty::Beginner,
            duration: None,
        }
    }

    #[test]
    fn test_curated_resource_json_shape() {
        let value = serde_json::to_value(sample(None)).unwrap();
        assert_eq!(value["type"], json!("course"));
        assert_eq!(value["price"], json!("freemium"));
        assert_eq!(value["difficulty"], json!("beginner"));
        assert_eq!(value["verified"], json!(true));
        assert!(value.get("lastVerifiedAt").is_some());
        assert!(value.get("fallbackUrl").is_none(), "omitted when verified");
        assert!(value.get("duration").is_none());
    }

    #[test]
    fn test_fallback_url_serialized_when_present() {
        let value =
            serde_json::to_value(sample(Some("https://www.coursera.org/search?query=x".into())))
                .unwrap();
        assert_eq!(value["verified"], json!(false));
        assert_eq!(
            value["fallbackUrl"],
            json!("https://www.coursera.org/search?query=x")
        );
    }
}
