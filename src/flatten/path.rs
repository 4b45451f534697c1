//! Path query parsing
//!
//! A path query is a comma-separated list of slash-delimited path
//! expressions, e.g. `/results/data/date,/results/data/values`. Each
//! expression becomes one output column. Parsing is lenient: expressions
//! that yield no usable segments are dropped silently so that a partially
//! garbled query still produces the columns it can.

/// One route from the document root to a column's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    segments: Vec<String>,
}

impl PathSpec {
    /// Parse a single path expression. Empty segments (leading slash,
    /// doubled or trailing slashes) are discarded; an expression with no
    /// non-empty segments yields `None`.
    pub fn parse(expr: &str) -> Option<Self> {
        let segments: Vec<String> = expr
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            None
        } else {
            Some(PathSpec { segments })
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment, used as the default column title.
    pub fn last_segment(&self) -> &str {
        // segments is non-empty by construction
        self.segments.last().map(String::as_str).unwrap_or("")
    }
}

impl std::fmt::Display for PathSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// An ordered collection of path specifications. Insertion order is output
/// column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathQuery {
    specs: Vec<PathSpec>,
}

impl PathQuery {
    /// Parse a comma-separated query string. Whitespace around each
    /// expression is trimmed; empty or malformed expressions are dropped.
    /// The result may be empty; callers decide whether that is fatal.
    pub fn parse(input: &str) -> Self {
        let specs = input
            .split(',')
            .map(str::trim)
            .filter_map(PathSpec::parse)
            .collect();

        PathQuery { specs }
    }

    /// Parse `input`, falling back to `default` when it yields no
    /// specifications.
    pub fn parse_or_default(input: &str, default: Option<&str>) -> Self {
        let query = Self::parse(input);
        if query.is_empty() {
            if let Some(default) = default {
                return Self::parse(default);
            }
        }
        query
    }

    pub fn specs(&self) -> &[PathSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_path() {
        let spec = PathSpec::parse("/results/data/date").unwrap();
        assert_eq!(spec.segments(), ["results", "data", "date"]);
        assert_eq!(spec.last_segment(), "date");
    }

    #[test]
    fn test_parse_without_leading_slash() {
        // Still split on separators even when the expression is malformed
        let spec = PathSpec::parse("data/name").unwrap();
        assert_eq!(spec.segments(), ["data", "name"]);
    }

    #[test]
    fn test_doubled_and_trailing_slashes_collapse() {
        let spec = PathSpec::parse("//results//data/").unwrap();
        assert_eq!(spec.segments(), ["results", "data"]);
    }

    #[test]
    fn test_empty_expression_is_dropped() {
        assert!(PathSpec::parse("").is_none());
        assert!(PathSpec::parse("///").is_none());

        let query = PathQuery::parse("/data/name,,///,/data/id");
        assert_eq!(query.len(), 2);
        assert_eq!(query.specs()[0].last_segment(), "name");
        assert_eq!(query.specs()[1].last_segment(), "id");
    }

    #[test]
    fn test_query_preserves_order() {
        let query = PathQuery::parse("/b, /a ,/c");
        let names: Vec<_> = query.specs().iter().map(|s| s.last_segment()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_default_query_fallback() {
        let query = PathQuery::parse_or_default("", Some("/data/name"));
        assert_eq!(query.len(), 1);

        // A usable query wins over the default
        let query = PathQuery::parse_or_default("/data/id", Some("/data/name"));
        assert_eq!(query.specs()[0].last_segment(), "id");

        // No default: empty stays empty
        assert!(PathQuery::parse_or_default(" , ", None).is_empty());
    }

    #[test]
    fn test_display_round_trip() {
        let spec = PathSpec::parse("/results/data/date").unwrap();
        assert_eq!(spec.to_string(), "/results/data/date");
    }
}
