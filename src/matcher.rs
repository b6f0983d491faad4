use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Score awarded for an exact token/text match; the maximum attainable
pub const EXACT_SCORE: f64 = 2.0;

/// Base score for a contiguous substring match; length and position bonuses
/// keep substring scores strictly inside (1.0, 1.75]
const SUBSTRING_BASE: f64 = 1.0;
const SUBSTRING_LENGTH_WEIGHT: f64 = 0.5;
const SUBSTRING_POSITION_WEIGHT: f64 = 0.25;

/// Weight for a non-contiguous subsequence match; density weighting keeps
/// subsequence scores strictly inside (0.0, 0.5)
const SUBSEQUENCE_WEIGHT: f64 = 0.5;

/// A half-open `[start, end)` range of character (code point) indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Matched character spans for one result; most matches fit a few runs
pub type MatchSpans = SmallVec<[Span; 4]>;

/// The outcome of matching one token against one candidate text
#[derive(Debug, Clone)]
pub(crate) struct TokenMatch {
    pub score: f64,
    pub spans: MatchSpans,
}

/// Decompose text into characters, lower-casing unless case-sensitive.
///
/// Case folding is one character to one character (the first lowercase
/// mapping), so span indices stay aligned with the original text.
pub(crate) fn fold_chars(text: &str, case_sensitive: bool) -> Vec<char> {
    if case_sensitive {
        text.chars().collect()
    } else {
        text.chars()
            .map(|c| c.to_lowercase().next().unwrap_or(c))
            .collect()
    }
}

/// Match one token against one candidate text.
///
/// Tries the strategies from strongest to weakest: exact equality, earliest
/// contiguous substring, then in-order subsequence. Returns `None` when the
/// token's characters cannot be found in order at all. Scores are banded per
/// strategy so that exact > substring > subsequence always holds regardless
/// of length or position bonuses.
pub(crate) fn match_token(token: &[char], text: &[char], with_spans: bool) -> Option<TokenMatch> {
    if token.is_empty() {
        // Empty tokens are filtered out upstream; an empty query is the
        // identity filter and never reaches per-token matching.
        return Some(TokenMatch {
            score: EXACT_SCORE,
            spans: MatchSpans::new(),
        });
    }
    if token.len() > text.len() {
        return None;
    }

    if token == text {
        let mut spans = MatchSpans::new();
        if with_spans {
            spans.push(Span::new(0, text.len()));
        }
        return Some(TokenMatch {
            score: EXACT_SCORE,
            spans,
        });
    }

    if let Some(start) = find_substring(token, text) {
        let length_ratio = token.len() as f64 / text.len() as f64;
        let position_bonus = SUBSTRING_POSITION_WEIGHT / (1.0 + start as f64);
        let mut spans = MatchSpans::new();
        if with_spans {
            spans.push(Span::new(start, start + token.len()));
        }
        return Some(TokenMatch {
            score: SUBSTRING_BASE + SUBSTRING_LENGTH_WEIGHT * length_ratio + position_bonus,
            spans,
        });
    }

    match_subsequence(token, text, with_spans)
}

/// Find the earliest occurrence of `token` as a contiguous run in `text`
fn find_substring(token: &[char], text: &[char]) -> Option<usize> {
    text.windows(token.len()).position(|window| window == token)
}

/// Greedy in-order subsequence scan.
///
/// Each token character is matched to its leftmost possible position. The
/// score is weighted by density (token length over matched span length) and
/// by token length over text length, so tighter clusters in shorter texts
/// rank higher.
fn match_subsequence(token: &[char], text: &[char], with_spans: bool) -> Option<TokenMatch> {
    let mut positions: SmallVec<[usize; 16]> = SmallVec::new();
    let mut cursor = 0;

    for &wanted in token {
        let found = text[cursor..].iter().position(|&c| c == wanted)?;
        positions.push(cursor + found);
        cursor += found + 1;
    }

    let first = positions[0];
    let last = positions[positions.len() - 1];
    let span_len = (last - first + 1) as f64;
    let density = token.len() as f64 / span_len;
    let length_ratio = token.len() as f64 / text.len() as f64;

    let mut spans = MatchSpans::new();
    if with_spans {
        spans = collapse_runs(&positions);
    }

    Some(TokenMatch {
        score: SUBSEQUENCE_WEIGHT * density * length_ratio,
        spans,
    })
}

/// Collapse sorted character positions into maximal contiguous spans
fn collapse_runs(positions: &[usize]) -> MatchSpans {
    let mut spans = MatchSpans::new();
    let mut run_start = positions[0];
    let mut run_end = positions[0] + 1;

    for &pos in &positions[1..] {
        if pos == run_end {
            run_end += 1;
        } else {
            spans.push(Span::new(run_start, run_end));
            run_start = pos;
            run_end = pos + 1;
        }
    }
    spans.push(Span::new(run_start, run_end));
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn score(token: &str, text: &str) -> Option<f64> {
        match_token(&chars(token), &chars(text), false).map(|m| m.score)
    }

    #[test]
    fn test_exact_match_scores_highest() {
        assert_eq!(score("apple", "apple"), Some(EXACT_SCORE));

        let substring = score("apple", "pineapple").unwrap();
        let subsequence = score("ape", "apple").unwrap();
        assert!(EXACT_SCORE > substring);
        assert!(substring > subsequence);
        assert!(subsequence > 0.0);
    }

    #[test]
    fn test_substring_band() {
        // Substring scores stay strictly between subsequence and exact bands
        let best = score("apple", "apples").unwrap();
        let worst = score("a", "zzzzzzzzzzzzzzzzzzza").unwrap();
        assert!(best < EXACT_SCORE);
        assert!(worst > SUBSTRING_BASE);
    }

    #[test]
    fn test_earlier_substring_scores_higher() {
        let early = score("app", "appetite").unwrap();
        let late = score("app", "pineapple").unwrap();
        assert!(early > late);
    }

    #[test]
    fn test_shorter_text_scores_higher() {
        let short = score("pp", "Apple".to_lowercase().as_str()).unwrap();
        let long = score("pp", "Pineapple".to_lowercase().as_str()).unwrap();
        assert!(short > long);
    }

    #[test]
    fn test_subsequence_density() {
        // "ace" is tightly clustered in "acxe" but spread out in "abcdefgh"
        let tight = score("ace", "acxe").unwrap();
        let spread = score("ace", "abcdefgh").unwrap();
        assert!(tight > spread);
        assert!(tight < SUBSEQUENCE_WEIGHT);
    }

    #[test]
    fn test_no_match() {
        assert!(score("pp", "grape").is_none());
        assert!(score("xyz", "apple").is_none());
        assert!(score("apples", "apple").is_none()); // token longer than text
    }

    #[test]
    fn test_exact_spans() {
        let m = match_token(&chars("apple"), &chars("apple"), true).unwrap();
        assert_eq!(m.spans.as_slice(), &[Span::new(0, 5)]);
    }

    #[test]
    fn test_substring_spans() {
        let m = match_token(&chars("app"), &chars("pineapple"), true).unwrap();
        assert_eq!(m.spans.as_slice(), &[Span::new(4, 7)]);
    }

    #[test]
    fn test_subsequence_spans_collapse_runs() {
        // "ple" inside "pale": p(0), l(2), e(3) -> spans [0,1) and [2,4)
        let m = match_token(&chars("ple"), &chars("pale"), true).unwrap();
        assert_eq!(m.spans.as_slice(), &[Span::new(0, 1), Span::new(2, 4)]);
    }

    #[test]
    fn test_fold_chars() {
        assert_eq!(fold_chars("AppLe", false), chars("apple"));
        assert_eq!(fold_chars("AppLe", true), chars("AppLe"));
        // Code point comparison, no diacritic folding
        assert_eq!(fold_chars("Café", false), chars("café"));
    }

    #[test]
    fn test_deterministic_scores() {
        let a = score("pine", "pineapple").unwrap();
        let b = score("pine", "pineapple").unwrap();
        assert_eq!(a, b);
    }
}
