use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::curation::models::CuratedResource;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningPathRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role_title: String,
    pub resources: Json<Vec<CuratedResource>>,
    pub completed_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LearningPathRow {
    /// True if `url` is one of the path's resource URLs or fallback URLs.
    pub fn contains_url(&self, url: &str) -> bool {
        self.resources
            .iter()
            .any(|r| r.url == url || r.fallback_url.as_deref() == Some(url))
    }

    /// Percentage of resources completed, 0 to 100.
    pub fn progress(&self) -> u32 {
        let total = self.resources.len();
        if total == 0 {
            return 0;
        }
        let done = self
            .resources
            .iter()
            .filter(|r| {
                self.completed_urls.iter().any(|c| {
                    *c == r.url || r.fallback_url.as_deref() == Some(c.as_str())
                })
            })
            .count();
        ((done as f64 / total as f64) * 100.0).round() as u32
    }
}

/// A learning path plus its computed progress.
#[derive(Debug, Serialize)]
pub struct LearningPathView {
    #[serde(flatten)]
    pub path: LearningPathRow,
    pub progress: u32,
}

impl From<LearningPathRow> for LearningPathView {
    fn from(path: LearningPathRow) -> Self {
        let progress = path.progress();
        Self { path, progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curation::models::{CostTier, Difficulty, ResourceType};

    fn resource(url: &str, fallback_url: Option<&str>) -> CuratedResource {
        CuratedResource {
            resource_type: ResourceType::Course,
            title: url.to_string(),
            description: String::new(),
            url: url.to_string(),
            verified: fallback_url.is_none(),
            last_verified_at: Utc::now(),
            fallback_url: fallback_url.map(str::to_string),
            price: CostTier::Free,
            rating: None,
            provider: "Test".to_string(),
            difficulty: Difficulty::Beginner,
            duration: None,
        }
    }

    fn path(resources: Vec<CuratedResource>, completed: &[&str]) -> LearningPathRow {
        LearningPathRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            role_title: "Software Engineer".to_string(),
            resources: Json(resources),
            completed_urls: completed.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_progress_empty_path_is_zero() {
        assert_eq!(path(vec![], &[]).progress(), 0);
    }

    #[test]
    fn test_progress_counts_completed_resources() {
        let p = path(
            vec![
                resource("https://a.example/1", None),
                resource("https://a.example/2", None),
                resource("https://a.example/3", None),
                resource("https://a.example/4", None),
            ],
            &["https://a.example/1"],
        );
        assert_eq!(p.progress(), 25);
    }

    #[test]
    fn test_completion_via_fallback_url_counts() {
        let p = path(
            vec![resource(
                "https://gone.example/1",
                Some("https://www.coursera.org/search?query=x"),
            )],
            &["https://www.coursera.org/search?query=x"],
        );
        assert_eq!(p.progress(), 100);
        assert!(p.contains_url("https://gone.example/1"));
        assert!(!p.contains_url("https://elsewhere.example"));
    }

    #[test]
    fn test_view_flattens_row() {
        let view = LearningPathView::from(path(vec![resource("https://a.example/1", None)], &[]));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["progress"], 0);
        assert_eq!(json["role_title"], "Software Engineer");
        assert_eq!(json["resources"][0]["type"], "course");
    }
}
