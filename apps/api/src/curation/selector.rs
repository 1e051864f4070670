//! Resource Selector: picks a short-list of catalog entries for a role.
//!
//! Matching policy is an explicit ordered list of `(keywords, category)`
//! rules: the first category whose keyword set intersects the query wins.
//! Sub-topic rules within the category work the same way but are additive.
//! No LLM calls, no I/O.

use std::collections::HashSet;

use thiserror::Error;

use crate::curation::catalog::{entries_for, CatalogEntry, Category, SubTopic, CATALOG};
use crate::curation::models::CandidateResource;

/// Entries pulled per matched sub-topic.
const PER_SUBTOPIC: usize = 2;
/// Category-wide entries pulled after sub-topics.
const CORE_SLICE: usize = 3;
pub const MIN_RESOURCES: usize = 6;
pub const MAX_RESOURCES: usize = 8;

#[derive(Debug, Error)]
pub enum CurationError {
    #[error("catalog returned no resources")]
    CatalogEmpty,
}

pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

pub struct SubTopicRule {
    pub subtopic: SubTopic,
    pub keywords: &'static [&'static str],
}

/// Priority order matters: earlier rules win.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Software,
        keywords: &[
            "software", "developer", "programming", "programmer", "coding", "backend",
            "frontend", "fullstack", "full-stack", "devops", "javascript", "typescript",
            "node.js", "nodejs", "react", "java", "api", "apis", "web development",
        ],
    },
    CategoryRule {
        category: Category::Data,
        keywords: &[
            "data", "analytics", "analyst", "sql", "machine learning", "ml", "statistics",
            "scientist", "tableau", "power bi", "pandas",
        ],
    },
    CategoryRule {
        category: Category::Design,
        keywords: &[
            "design", "designer", "ux", "ui", "figma", "user experience", "prototyping",
        ],
    },
    CategoryRule {
        category: Category::Marketing,
        keywords: &[
            "marketing", "seo", "content", "social media", "brand", "advertising", "growth",
        ],
    },
];

const SOFTWARE_SUBTOPICS: &[SubTopicRule] = &[
    SubTopicRule {
        subtopic: SubTopic::JavaScript,
        keywords: &["javascript", "js", "typescript", "node.js", "nodejs", "react"],
    },
    SubTopicRule {
        subtopic: SubTopic::Python,
        keywords: &["python", "django", "flask"],
    },
    SubTopicRule {
        subtopic: SubTopic::Backend,
        keywords: &["backend", "back-end", "api", "apis", "server", "database", "node.js", "nodejs"],
    },
    SubTopicRule {
        subtopic: SubTopic::Frontend,
        keywords: &["frontend", "front-end", "react", "css", "html", "ui"],
    },
];

const DATA_SUBTOPICS: &[SubTopicRule] = &[
    SubTopicRule {
        subtopic: SubTopic::Python,
        keywords: &["python", "pandas", "numpy"],
    },
    SubTopicRule {
        subtopic: SubTopic::Sql,
        keywords: &["sql", "database", "queries", "postgres", "mysql"],
    },
    SubTopicRule {
        subtopic: SubTopic::MachineLearning,
        keywords: &["machine learning", "ml", "ai", "model", "models", "scientist"],
    },
];

const DESIGN_SUBTOPICS: &[SubTopicRule] = &[
    SubTopicRule {
        subtopic: SubTopic::UxResearch,
        keywords: &["ux", "research", "usability", "user experience", "wireframing"],
    },
    SubTopicRule {
        subtopic: SubTopic::VisualDesign,
        keywords: &["figma", "visual", "ui", "graphic", "typography"],
    },
];

const MARKETING_SUBTOPICS: &[SubTopicRule] = &[
    SubTopicRule {
        subtopic: SubTopic::Seo,
        keywords: &["seo", "search", "sem", "organic"],
    },
    SubTopicRule {
        subtopic: SubTopic::SocialMedia,
        keywords: &["social", "social media", "instagram", "community"],
    },
];

fn subtopic_rules(category: Category) -> &'static [SubTopicRule] {
    match category {
        Category::Software => SOFTWARE_SUBTOPICS,
        Category::Data => DATA_SUBTOPICS,
        Category::Design => DESIGN_SUBTOPICS,
        Category::Marketing => MARKETING_SUBTOPICS,
        Category::General => &[],
    }
}

/// Lower-cased, tokenized view over role title, description and requirements.
#[derive(Debug)]
pub struct RoleQuery {
    text: String,
    tokens: HashSet<String>,
}

impl RoleQuery {
    pub fn new(role_title: &str, description: &str, requirements: &[String]) -> Self {
        let text = std::iter::once(role_title)
            .chain(std::iter::once(description))
            .chain(requirements.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let tokens = text
            .split(|c: char| !(c.is_alphanumeric() || matches!(c, '.' | '+' | '#' | '-')))
            .map(|t| t.trim_matches(|c| c == '.' || c == '-'))
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Self { text, tokens }
    }

    /// Single words match whole tokens; phrases match as substrings.
    pub fn mentions(&self, keyword: &str) -> bool {
        if keyword.contains(' ') {
            self.text.contains(keyword)
        } else {
            self.tokens.contains(keyword)
        }
    }

    fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.mentions(k))
    }
}

pub fn match_category(query: &RoleQuery) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|rule| query.mentions_any(rule.keywords))
        .map(|rule| rule.category)
        .unwrap_or(Category::General)
}

pub struct ResourceSelector {
    catalog: &'static [CatalogEntry],
}

impl Default for ResourceSelector {
    fn default() -> Self {
        Self { catalog: CATALOG }
    }
}

impl ResourceSelector {
    pub fn with_catalog(catalog: &'static [CatalogEntry]) -> Self {
        Self { catalog }
    }

    pub fn select(
        &self,
        role_title: &str,
        description: &str,
        requirements: &[String],
    ) -> Result<Vec<&'static CandidateResource>, CurationError> {
        let query = RoleQuery::new(role_title, description, requirements);
        let category = match_category(&query);

        let mut picked = Selection::default();

        for rule in subtopic_rules(category) {
            if query.mentions_any(rule.keywords) {
                for resource in entries_for(self.catalog, category, rule.subtopic).take(PER_SUBTOPIC) {
                    picked.push(resource);
                }
            }
        }
        for resource in entries_for(self.catalog, category, SubTopic::Core).take(CORE_SLICE) {
            picked.push(resource);
        }

        if picked.len() < MIN_RESOURCES {
            for resource in entries_for(self.catalog, Category::General, SubTopic::Core) {
                if picked.len() >= MIN_RESOURCES {
                    break;
                }
                picked.push(resource);
            }
        }

        let mut selected = picked.resources;
        selected.truncate(MAX_RESOURCES);

        if selected.is_empty() {
            return Err(CurationError::CatalogEmpty);
        }
        Ok(selected)
    }
}

/// Accumulator that drops duplicates by exact URL or case-insensitive title.
#[derive(Default)]
struct Selection {
    resources: Vec<&'static CandidateResource>,
    urls: HashSet<&'static str>,
    titles: HashSet<String>,
}

impl Selection {
    fn push(&mut self, resource: &'static CandidateResource) {
        let title = resource.title.to_lowercase();
        if self.urls.contains(resource.url) || self.titles.contains(&title) {
            return;
        }
        self.urls.insert(resource.url);
        self.titles.insert(title);
        self.resources.push(resource);
    }

    fn len(&self) -> usize {
        self.resources.len()
    }
}
