//! Call options that map to the API's query-parameter vocabulary.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Sort order for list endpoints.
#[derive(Clone, Copy, Default)]
pub enum Direction {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            }
        )
    }
}

/// A single query parameter contributed to a request path.
///
/// Each variant serializes to exactly one key; multi-valued variants join
/// their values with commas under that key. When two options target the same
/// key the later one wins.
#[derive(Clone)]
pub enum CallOption {
    /// `page`: page number to fetch (1-indexed).
    Page(i64),
    /// `per_page`: results per page.
    PerPage(i64),
    /// `sort`: sort key understood by the endpoint (e.g. `date`, `alphabetical`).
    Sort(String),
    /// `direction`: sort direction.
    Direction(Direction),
    /// `query`: free-text search.
    Query(String),
    /// `filter`: endpoint-specific result filter (e.g. `featured`).
    Filter(String),
    /// `filter_embeddable`: restrict results to embeddable videos.
    FilterEmbeddable(bool),
    /// `filter_playable`: restrict results to playable videos.
    FilterPlayable(bool),
    /// `filter_content_rating`: one or more rating codes, comma-joined.
    FilterContentRating(Vec<String>),
    /// `fields`: response field selection, comma-joined.
    Fields(Vec<String>),
}

impl CallOption {
    fn pair(&self) -> (&'static str, String) {
        match self {
            CallOption::Page(page) => ("page", page.to_string()),
            CallOption::PerPage(per_page) => ("per_page", per_page.to_string()),
            CallOption::Sort(sort) => ("sort", sort.clone()),
            CallOption::Direction(direction) => ("direction", direction.to_string()),
            CallOption::Query(query) => ("query", query.clone()),
            CallOption::Filter(filter) => ("filter", filter.clone()),
            CallOption::FilterEmbeddable(embeddable) => {
                ("filter_embeddable", embeddable.to_string())
            }
            CallOption::FilterPlayable(playable) => ("filter_playable", playable.to_string()),
            CallOption::FilterContentRating(ratings) => {
                ("filter_content_rating", ratings.join(","))
            }
            CallOption::Fields(fields) => ("fields", fields.join(",")),
        }
    }
}

/// Merges the given options into `path`'s query string.
///
/// Keys are emitted in alphabetic order so encoding is deterministic, later
/// options win when two target the same key, and a path that already carries
/// a query string is merged rather than clobbered.
pub(crate) fn apply_options(path: &str, options: &[CallOption]) -> String {
    if options.is_empty() {
        return path.to_string();
    }
    let (path, existing) = match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    };
    let mut pairs = BTreeMap::new();
    if let Some(existing) = existing {
        for (key, value) in form_urlencoded::parse(existing.as_bytes()) {
            pairs.insert(key.into_owned(), value.into_owned());
        }
    }
    for option in options {
        let (key, value) = option.pair();
        pairs.insert(key.to_string(), value);
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    format!("{}?{}", path, serializer.finish())
}
