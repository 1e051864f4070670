//! Fallback synthesis: builds a same-intent search link for a resource
//! whose URL could not be confirmed. Pure and total: every input, including
//! garbage, yields a valid non-empty URL.

use url::Url;

use crate::curation::models::ResourceType;
use crate::verification::platforms::host_matches;

/// A search endpoint on a known aggregator.
struct Aggregator {
    domain: &'static str,
    search_url: &'static str,
    query_param: &'static str,
    extra: &'static [(&'static str, &'static str)],
}

const COURSERA: Aggregator = Aggregator {
    domain: "coursera.org",
    search_url: "https://www.coursera.org/search",
    query_param: "query",
    extra: &[],
};
const YOUTUBE: Aggregator = Aggregator {
    domain: "youtube.com",
    search_url: "https://www.youtube.com/results",
    query_param: "search_query",
    extra: &[],
};
const MDN: Aggregator = Aggregator {
    domain: "developer.mozilla.org",
    search_url: "https://developer.mozilla.org/en-US/search",
    query_param: "q",
    extra: &[],
};
const FREECODECAMP: Aggregator = Aggregator {
    domain: "freecodecamp.org",
    search_url: "https://www.freecodecamp.org/news/search/",
    query_param: "query",
    extra: &[],
};
const GITHUB: Aggregator = Aggregator {
    domain: "github.com",
    search_url: "https://github.com/search",
    query_param: "q",
    extra: &[("type", "repositories")],
};

const AGGREGATORS: &[Aggregator] = &[
    COURSERA,
    Aggregator {
        domain: "udemy.com",
        search_url: "https://www.udemy.com/courses/search/",
        query_param: "q",
        extra: &[],
    },
    Aggregator {
        domain: "edx.org",
        search_url: "https://www.edx.org/search",
        query_param: "q",
        extra: &[],
    },
    YOUTUBE,
    Aggregator {
        domain: "youtu.be",
        search_url: "https://www.youtube.com/results",
        query_param: "search_query",
        extra: &[],
    },
    FREECODECAMP,
    Aggregator {
        domain: "khanacademy.org",
        search_url: "https://www.khanacademy.org/search",
        query_param: "page_search_query",
        extra: &[],
    },
    MDN,
    GITHUB,
    Aggregator {
        domain: "leetcode.com",
        search_url: "https://leetcode.com/problemset/",
        query_param: "search",
        extra: &[],
    },
    Aggregator {
        domain: "kaggle.com",
        search_url: "https://www.kaggle.com/search",
        query_param: "q",
        extra: &[],
    },
    Aggregator {
        domain: "pluralsight.com",
        search_url: "https://www.pluralsight.com/search",
        query_param: "q",
        extra: &[],
    },
    Aggregator {
        domain: "linkedin.com",
        search_url: "https://www.linkedin.com/learning/search",
        query_param: "keywords",
        extra: &[],
    },
];

const WEB_SEARCH: &str = "https://www.google.com/search";
const LAST_RESORT: &str = "https://www.google.com/";
const EMPTY_TITLE_QUERY: &str = "learning resources";

/// Builds a replacement URL for `original_url`.
///
/// Host match on a known aggregator → search on that aggregator; otherwise
/// the default aggregator for `resource_type`; otherwise a generic web search
/// combining title and type.
pub fn synthesize(original_url: &str, resource_type: &str, title: &str) -> String {
    let query = match title.trim() {
        "" => EMPTY_TITLE_QUERY,
        t => t,
    };

    if let Some(aggregator) = host_aggregator(original_url) {
        if let Some(url) = build_search(aggregator, query) {
            return url;
        }
    }

    if let Ok(kind) = resource_type.parse::<ResourceType>() {
        if let Some(url) = build_search(default_aggregator(kind), query) {
            return url;
        }
    }

    let combined = match resource_type.trim() {
        "" => query.to_string(),
        kind => format!("{query} {kind}"),
    };
    Url::parse_with_params(WEB_SEARCH, &[("q", combined)])
        .map(String::from)
        .unwrap_or_else(|_| LAST_RESORT.to_string())
}

fn host_aggregator(original_url: &str) -> Option<&'static Aggregator> {
    let url = Url::parse(original_url.trim()).ok()?;
    let host = url.host_str()?.to_ascii_lowercase();
    AGGREGATORS.iter().find(|a| host_matches(&host, a.domain))
}

fn default_aggregator(kind: ResourceType) -> &'static Aggregator {
    match kind {
        ResourceType::Course | ResourceType::Certification => &COURSERA,
        ResourceType::Tutorial => &YOUTUBE,
        ResourceType::Documentation => &MDN,
        ResourceType::Practice => &FREECODECAMP,
        ResourceType::Project => &GITHUB,
    }
}

fn build_search(aggregator: &Aggregator, query: &str) -> Option<String> {
    let mut url = Url::parse(aggregator.search_url).ok()?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair(aggregator.query_param, query);
        for (k, v) in aggregator.extra {
            pairs.append_pair(k, v);
        }
    }
    Some(url.into())
}
