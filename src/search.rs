//! Query parsing and the list filter.
//!
//! A query is split on whitespace into lowercase terms. An entry matches when
//! its lowercased text contains every term as a substring.

/// Parsed search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    /// Split `raw` on whitespace into lowercase terms
    pub fn parse(raw: &str) -> Self {
        Self {
            terms: raw.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// True when the query has no terms (empty or whitespace-only input)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Check if `entry` contains every term, ignoring case.
    ///
    /// An empty query matches nothing; callers decide what "no query" means.
    pub fn matches(&self, entry: &str) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        let lower = entry.to_lowercase();
        self.terms.iter().all(|term| lower.contains(term.as_str()))
    }
}

/// Filter `entries` down to the ones matching `query`, keeping their order.
pub fn filter<'a, I>(entries: I, query: &Query) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    if query.is_empty() {
        return Vec::new();
    }
    entries
        .into_iter()
        .filter(|entry| query.matches(entry))
        .cloned()
        .collect()
}
