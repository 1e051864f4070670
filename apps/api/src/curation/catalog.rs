//! Static curated catalog of learning resources, grouped by category and sub-topic.

use crate::curation::models::{CandidateResource, CostTier, Difficulty, ResourceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Software,
    Data,
    Design,
    Marketing,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubTopic {
    /// Category-wide entries pulled regardless of sub-topic matches.
    Core,
    JavaScript,
    Python,
    Backend,
    Frontend,
    Sql,
    MachineLearning,
    UxResearch,
    VisualDesign,
    Seo,
    SocialMedia,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub category: Category,
    pub subtopic: SubTopic,
    pub resource: CandidateResource,
}

#[allow(clippy::too_many_arguments)]
const fn entry(
    category: Category,
    subtopic: SubTopic,
    resource_type: ResourceType,
    title: &'static str,
    description: &'static str,
    url: &'static str,
    provider: &'static str,
    cost_tier: CostTier,
    rating: f32,
    difficulty: Difficulty,
    duration: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        category,
        subtopic,
        resource: CandidateResource {
            resource_type,
            title,
            description,
            url,
            provider,
            cost_tier,
            rating,
            difficulty,
            duration,
        },
    }
}

use Category::*;
use CostTier::*;
use Difficulty::*;
use ResourceType::*;

#[rustfmt::skip]
pub static CATALOG: &[CatalogEntry] = &[
    // ── Software ──────────────────────────────────────────────────────────
    entry(Software, SubTopic::JavaScript, Course,
        "JavaScript Algorithms and Data Structures",
        "Core JavaScript syntax, ES6 and problem solving through guided exercises.",
        "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures-v8/",
        "freeCodeCamp", Free, 4.8, Beginner, "300 hours"),
    entry(Software, SubTopic::JavaScript, Documentation,
        "MDN JavaScript Guide",
        "Reference guide to the JavaScript language from the MDN team.",
        "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide",
        "MDN Web Docs", Free, 4.9, Intermediate, "Self-paced"),
    entry(Software, SubTopic::JavaScript, Tutorial,
        "The Modern JavaScript Tutorial",
        "From the basics to advanced topics with simple, detailed explanations.",
        "https://javascript.info/",
        "javascript.info", Free, 4.8, Beginner, "Self-paced"),
    entry(Software, SubTopic::Python, Course,
        "Python for Everybody Specialization",
        "Programming fundamentals and data handling in Python.",
        "https://www.coursera.org/specializations/python",
        "Coursera", Freemium, 4.8, Beginner, "8 months"),
    entry(Software, SubTopic::Python, Documentation,
        "The Python Tutorial",
        "Official tutorial covering the language and standard library.",
        "https://docs.python.org/3/tutorial/",
        "Python Docs", Free, 4.8, Beginner, "Self-paced"),
    entry(Software, SubTopic::Backend, Documentation,
        "Learn Node.js",
        "Official introduction to building server-side applications with Node.js.",
        "https://nodejs.org/en/learn/getting-started/introduction-to-nodejs",
        "Node.js", Free, 4.7, Intermediate, "Self-paced"),
    entry(Software, SubTopic::Backend, Course,
        "Back End Development and APIs",
        "Build APIs and microservices with Node.js, Express and MongoDB.",
        "https://www.freecodecamp.org/learn/back-end-development-and-apis/",
        "freeCodeCamp", Free, 4.7, Intermediate, "300 hours"),
    entry(Software, SubTopic::Backend, Project,
        "Backend Developer Roadmap",
        "Step-by-step guide and project ideas for becoming a backend developer.",
        "https://roadmap.sh/backend",
        "roadmap.sh", Free, 4.6, Intermediate, "Self-paced"),
    entry(Software, SubTopic::Frontend, Documentation,
        "Learn React",
        "Official React docs: components, state and effects.",
        "https://react.dev/learn",
        "React", Free, 4.8, Intermediate, "Self-paced"),
    entry(Software, SubTopic::Frontend, Course,
        "Responsive Web Design",
        "HTML and CSS fundamentals through hands-on projects.",
        "https://www.freecodecamp.org/learn/2022/responsive-web-design/",
        "freeCodeCamp", Free, 4.7, Beginner, "300 hours"),
    entry(Software, SubTopic::Core, Course,
        "CS50: Introduction to Computer Science",
        "Harvard's introduction to computer science and the art of programming.",
        "https://www.edx.org/learn/computer-science/harvard-university-cs50-s-introduction-to-computer-science",
        "edX", Freemium, 4.9, Beginner, "12 weeks"),
    entry(Software, SubTopic::Core, Practice,
        "LeetCode Top Interview Questions",
        "Curated coding problems for technical interview preparation.",
        "https://leetcode.com/studyplan/top-interview-150/",
        "LeetCode", Freemium, 4.5, Intermediate, "Self-paced"),
    entry(Software, SubTopic::Core, Course,
        "MIT 6.0001 Introduction to Computer Science and Programming",
        "Lecture videos and problem sets from MIT OpenCourseWare.",
        "https://ocw.mit.edu/courses/6-0001-introduction-to-computer-science-and-programming-in-python-fall-2016/",
        "MIT OpenCourseWare", Free, 4.8, Beginner, "9 weeks"),
    // ── Data ─────────────────────────────────────────────────────────────
    entry(Data, SubTopic::Sql, Practice,
        "Intro to SQL",
        "Hands-on micro-course on querying data with SQL.",
        "https://www.kaggle.com/learn/intro-to-sql",
        "Kaggle", Free, 4.6, Beginner, "3 hours"),
    entry(Data, SubTopic::Sql, Tutorial,
        "SQL Tutorial",
        "Interactive SQL reference with runnable examples.",
        "https://www.w3schools.com/sql/",
        "W3Schools", Free, 4.4, Beginner, "Self-paced"),
    entry(Data, SubTopic::MachineLearning, Course,
        "Machine Learning Specialization",
        "Foundational machine learning concepts taught by Andrew Ng.",
        "https://www.coursera.org/specializations/machine-learning-introduction",
        "Coursera", Freemium, 4.9, Intermediate, "2 months"),
    entry(Data, SubTopic::MachineLearning, Practice,
        "Intro to Machine Learning",
        "Build your first models with scikit-learn on real datasets.",
        "https://www.kaggle.com/learn/intro-to-machine-learning",
        "Kaggle", Free, 4.7, Beginner, "3 hours"),
    entry(Data, SubTopic::Python, Practice,
        "Pandas",
        "Short practical course on data manipulation with pandas.",
        "https://www.kaggle.com/learn/pandas",
        "Kaggle", Free, 4.6, Beginner, "4 hours"),
    entry(Data, SubTopic::Core, Certification,
        "Google Data Analytics Professional Certificate",
        "Job-ready analytics skills: spreadsheets, SQL, Tableau and R.",
        "https://www.coursera.org/professional-certificates/google-data-analytics",
        "Coursera", Paid, 4.8, Beginner, "6 months"),
    entry(Data, SubTopic::Core, Course,
        "Statistics and Probability",
        "Free statistics course from Khan Academy.",
        "https://www.khanacademy.org/math/statistics-probability",
        "Khan Academy", Free, 4.7, Beginner, "Self-paced"),
    // ── Design ───────────────────────────────────────────────────────────
    entry(Design, SubTopic::UxResearch, Course,
        "Google UX Design Professional Certificate",
        "Design process, user research, wireframing and prototyping.",
        "https://www.coursera.org/professional-certificates/google-ux-design",
        "Coursera", Paid, 4.8, Beginner, "6 months"),
    entry(Design, SubTopic::UxResearch, Tutorial,
        "Nielsen Norman Group UX Articles",
        "Research-backed articles on usability and interaction design.",
        "https://www.nngroup.com/articles/",
        "Nielsen Norman Group", Free, 4.7, Intermediate, "Self-paced"),
    entry(Design, SubTopic::VisualDesign, Tutorial,
        "Figma Design Basics",
        "Official Figma resources for getting started with interface design.",
        "https://www.figma.com/resources/learn-design/",
        "Figma", Free, 4.6, Beginner, "Self-paced"),
    entry(Design, SubTopic::Core, Course,
        "UI / UX Design Specialization",
        "Visual design principles and user interface fundamentals.",
        "https://www.coursera.org/specializations/ui-ux-design",
        "Coursera", Freemium, 4.7, Beginner, "4 months"),
    entry(Design, SubTopic::Core, Project,
        "Daily UI Challenge",
        "100-day design challenge for building a portfolio.",
        "https://www.dailyui.co/",
        "Daily UI", Free, 4.4, Beginner, "100 days"),
    // ── Marketing ────────────────────────────────────────────────────────
    entry(Marketing, SubTopic::Seo, Course,
        "SEO Certification Course",
        "Search engine optimization fundamentals from HubSpot Academy.",
        "https://academy.hubspot.com/courses/seo-training",
        "HubSpot Academy", Free, 4.6, Beginner, "4 hours"),
    entry(Marketing, SubTopic::Seo, Documentation,
        "Google Search Central SEO Starter Guide",
        "Official guidance on how search works and how to improve visibility.",
        "https://developers.google.com/search/docs/fundamentals/seo-starter-guide",
        "Google", Free, 4.7, Beginner, "Self-paced"),
    entry(Marketing, SubTopic::SocialMedia, Course,
        "Social Media Marketing Course",
        "Strategy and content planning for social channels.",
        "https://academy.hubspot.com/courses/social-media",
        "HubSpot Academy", Free, 4.5, Beginner, "5 hours"),
    entry(Marketing, SubTopic::Core, Certification,
        "Fundamentals of Digital Marketing",
        "Free accredited course covering the basics of digital marketing.",
        "https://learndigital.withgoogle.com/digitalgarage/course/digital-marketing",
        "Google Digital Garage", Free, 4.5, Beginner, "40 hours"),
    entry(Marketing, SubTopic::Core, Course,
        "Digital Marketing Specialization",
        "Marketing analytics, SEO and social media strategy.",
        "https://www.coursera.org/specializations/digital-marketing",
        "Coursera", Freemium, 4.6, Intermediate, "6 months"),
    // ── General (padding) ────────────────────────────────────────────────
    entry(General, SubTopic::Core, Course,
        "Learning How to Learn",
        "Practical techniques for mastering tough subjects.",
        "https://www.coursera.org/learn/learning-how-to-learn",
        "Coursera", Free, 4.8, Beginner, "4 weeks"),
    entry(General, SubTopic::Core, Course,
        "Introduction to Project Management",
        "Project management principles for any role.",
        "https://www.edx.org/learn/project-management",
        "edX", Freemium, 4.5, Beginner, "6 weeks"),
    entry(General, SubTopic::Core, Course,
        "Communication Skills for Professionals",
        "Improve written and spoken communication at work.",
        "https://www.khanacademy.org/college-careers-more/career-content",
        "Khan Academy", Free, 4.4, Beginner, "Self-paced"),
    entry(General, SubTopic::Core, Tutorial,
        "Git and GitHub for Beginners",
        "Version control crash course.",
        "https://www.youtube.com/watch?v=RGOj5yH7evk",
        "freeCodeCamp", Free, 4.7, Beginner, "1 hour"),
    entry(General, SubTopic::Core, Practice,
        "Problem Solving Practice",
        "Timed challenges to sharpen analytical thinking.",
        "https://www.hackerrank.com/domains/algorithms",
        "HackerRank", Free, 4.3, Beginner, "Self-paced"),
    entry(General, SubTopic::Core, Course,
        "Excel Skills for Business",
        "Spreadsheet skills every professional needs.",
        "https://www.coursera.org/specializations/excel",
        "Coursera", Freemium, 4.7, Beginner, "6 months"),
    entry(General, SubTopic::Core, Certification,
        "Career Essentials in Generative AI",
        "Foundations of generative AI and responsible use at work.",
        "https://learn.microsoft.com/en-us/training/career-paths/",
        "Microsoft", Free, 4.5, Beginner, "4 hours"),
];

pub fn entries_for(
    catalog: &'static [CatalogEntry],
    category: Category,
    subtopic: SubTopic,
) -> impl Iterator<Item = &'static CandidateResource> {
    catalog
        .iter()
        .filter(move |e| e.category == category && e.subtopic == subtopic)
        .map(|e| &e.resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use url::Url;

    #[test]
    fn test_catalog_urls_are_valid_and_unique() {
        let mut seen = HashSet::new();
        for e in CATALOG {
            assert!(Url::parse(e.resource.url).is_ok(), "bad url {}", e.resource.url);
            assert!(seen.insert(e.resource.url), "duplicate url {}", e.resource.url);
        }
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(CATALOG
            .iter()
            .all(|e| (0.0..=5.0).contains(&e.resource.rating)));
    }

    #[test]
    fn test_general_padding_is_large_enough() {
        let general = entries_for(CATALOG, Category::General, SubTopic::Core).count();
        assert!(general >= 6, "general category must be able to pad alone");
    }
}
