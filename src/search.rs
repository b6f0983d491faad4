use crate::candidate::Candidate;
use crate::error::{QuickMatchError, Result};
use crate::matcher::{fold_chars, match_token, MatchSpans, EXACT_SCORE};
use crate::options::FuzzySearchOptions;

/// One ranked search result borrowing the matched item
#[derive(Debug, Clone)]
pub struct FuzzySearchResult<'a, T> {
    /// The matched item
    pub item: &'a T,

    /// Relevance score (higher is better)
    pub score: f64,

    /// Matched character spans, present when `include_matches` is set.
    /// With multiple keys, each token's spans refer to its best-matching
    /// field's text.
    pub matches: Option<MatchSpans>,
}

/// Filter and rank candidates against a query.
///
/// An empty or whitespace-only query is the identity filter: every item
/// passes with the maximum score and the original order is preserved. The
/// function never fails for "no matches"; an empty result is a valid outcome.
/// It fails with [`QuickMatchError::InvalidCandidate`] only when no keys are
/// configured and an item has no usable text form.
pub fn fuzzy_search<'a, T: Candidate>(
    items: &'a [T],
    query: &str,
    options: &FuzzySearchOptions,
) -> Result<Vec<FuzzySearchResult<'a, T>>> {
    let trimmed = query.trim();
    let tokens: Vec<Vec<char>> = if options.multi_token {
        options
            .token_splitter
            .split(trimmed)
            .iter()
            .map(|token| fold_chars(token, options.case_sensitive))
            .collect()
    } else if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![fold_chars(trimmed, options.case_sensitive)]
    };

    // No tokens (empty, whitespace-only or delimiter-only query) is the
    // identity filter
    if tokens.is_empty() {
        return Ok(items
            .iter()
            .map(|item| FuzzySearchResult {
                item,
                score: EXACT_SCORE,
                matches: options.include_matches.then(MatchSpans::new),
            })
            .collect());
    }

    let mut results = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let texts = extract_texts(item, index, options)?;
        let folded: Vec<Vec<char>> = texts
            .iter()
            .map(|text| fold_chars(text, options.case_sensitive))
            .collect();

        if let Some((score, matches)) = score_item(&tokens, &folded, options.include_matches) {
            results.push(FuzzySearchResult {
                item,
                score,
                matches,
            });
        }
    }

    if options.sort_by_score {
        // sort_by is stable, so equal scores keep input order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    Ok(results)
}

/// Extract the matchable texts for one item.
///
/// With keys, each named field contributes one text and missing fields
/// contribute an empty string. Without keys, the item's own text form is the
/// single text and its absence is an error.
fn extract_texts<T: Candidate>(
    item: &T,
    index: usize,
    options: &FuzzySearchOptions,
) -> Result<Vec<String>> {
    match &options.keys {
        Some(keys) => Ok(keys
            .iter()
            .map(|key| item.field_text(key).unwrap_or_default())
            .collect()),
        None => item.full_text().map(|text| vec![text]).ok_or_else(|| {
            QuickMatchError::InvalidCandidate(format!(
                "item at index {index} has no text form and no keys were given"
            ))
        }),
    }
}

/// Score one item: every token must match at least one text (AND semantics);
/// the item score is the sum of each token's best score across the texts.
fn score_item(
    tokens: &[Vec<char>],
    texts: &[Vec<char>],
    with_spans: bool,
) -> Option<(f64, Option<MatchSpans>)> {
    let mut total = 0.0;
    let mut all_spans = MatchSpans::new();

    for token in tokens {
        let best = texts
            .iter()
            .filter_map(|text| match_token(token, text, with_spans))
            .max_by(|a, b| {
                a.score
                    .partial_cmp(&b.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })?;
        total += best.score;
        if with_spans {
            all_spans.extend(best.spans);
        }
    }

    let matches = with_spans.then(|| merge_spans(all_spans));
    Some((total, matches))
}

/// Sort spans and merge overlapping or adjacent ones so the reported
/// highlight ranges are always sorted and disjoint
fn merge_spans(mut spans: MatchSpans) -> MatchSpans {
    if spans.len() <= 1 {
        return spans;
    }
    spans.sort_by_key(|span| (span.start, span.end));

    let mut merged = MatchSpans::new();
    let mut current = spans[0];
    for span in spans.iter().skip(1) {
        if span.start <= current.end {
            current.end = current.end.max(span.end);
        } else {
            merged.push(current);
            current = *span;
        }
    }
    merged.push(current);
    merged
}
