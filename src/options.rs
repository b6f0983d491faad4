use serde::{Deserialize, Serialize};

/// How a multi-token query is split into tokens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum TokenSplitter {
    /// Split on runs of one or more whitespace characters (the default)
    #[default]
    Whitespace,

    /// Split on a single delimiter character
    Delimiter(char),
}

impl TokenSplitter {
    /// Split a query into non-empty tokens
    pub fn split<'a>(&self, query: &'a str) -> Vec<&'a str> {
        match self {
            TokenSplitter::Whitespace => query.split_whitespace().collect(),
            TokenSplitter::Delimiter(delimiter) => query
                .split(*delimiter)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }
}

/// Fuzzy search configuration options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuzzySearchOptions {
    /// Field keys to extract matchable text from; when `None`, the candidate
    /// itself is treated as the matchable string
    pub keys: Option<Vec<String>>,

    /// Split the query into tokens that must all match (AND semantics)
    pub multi_token: bool,

    /// Match case-sensitively (default: false)
    pub case_sensitive: bool,

    /// Stable-sort results by descending score
    pub sort_by_score: bool,

    /// Delimiter used to split a multi-token query
    pub token_splitter: TokenSplitter,

    /// Record the matched character spans on each result for highlighting
    pub include_matches: bool,
}

impl FuzzySearchOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field keys to match against
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Enable or disable multi-token matching
    pub fn with_multi_token(mut self, multi_token: bool) -> Self {
        self.multi_token = multi_token;
        self
    }

    /// Enable or disable case-sensitive matching
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Enable or disable sorting results by score
    pub fn with_sort_by_score(mut self, sort_by_score: bool) -> Self {
        self.sort_by_score = sort_by_score;
        self
    }

    /// Set the token splitter
    pub fn with_token_splitter(mut self, token_splitter: TokenSplitter) -> Self {
        self.token_splitter = token_splitter;
        self
    }

    /// Enable or disable match span reporting
    pub fn with_include_matches(mut self, include_matches: bool) -> Self {
        self.include_matches = include_matches;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FuzzySearchOptions::default();
        assert!(options.keys.is_none());
        assert!(!options.multi_token);
        assert!(!options.case_sensitive);
        assert!(!options.sort_by_score);
        assert_eq!(options.token_splitter, TokenSplitter::Whitespace);
        assert!(!options.include_matches);
    }

    #[test]
    fn test_builder_chain() {
        let options = FuzzySearchOptions::new()
            .with_keys(["title", "description"])
            .with_multi_token(true)
            .with_sort_by_score(true)
            .with_include_matches(true);

        assert_eq!(
            options.keys,
            Some(vec!["title".to_string(), "description".to_string()])
        );
        assert!(options.multi_token);
        assert!(options.sort_by_score);
        assert!(options.include_matches);
    }

    #[test]
    fn test_whitespace_splitter() {
        let splitter = TokenSplitter::Whitespace;
        assert_eq!(splitter.split("  apple   pie "), vec!["apple", "pie"]);
        assert_eq!(splitter.split("   "), Vec::<&str>::new());
    }

    #[test]
    fn test_delimiter_splitter() {
        let splitter = TokenSplitter::Delimiter(',');
        assert_eq!(splitter.split("apple, pie,,grape"), vec!["apple", "pie", "grape"]);
    }
}
