//! The two selection phases behind every `one_of_title` lookup.
//!
//! Repositories fetch candidate lists from their catalog and hand them to
//! these pure functions: first the exact phase over the provider's
//! exact-title search, then — only when that yields nothing and the caller
//! opted in — the fuzzy phase over the provider's broader title-like search.

use cinedex_model::Movie;

use crate::error::{Error, Result};
use crate::matching::similarity;

/// Fuzzy fallback configuration. Every repository instance owns its own
/// copy, so concurrent lookups against different instances never share
/// matching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Enter the fuzzy phase when the exact phase comes up empty.
    pub try_fuzzy_on_fail: bool,
    /// Maximum edit distance a fuzzy winner may have, inclusive.
    pub threshold: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            try_fuzzy_on_fail: false,
            threshold: 0,
        }
    }
}

/// Exact phase: the first candidate satisfying the year constraint wins.
/// Without a requested year the first candidate wins outright.
pub fn select_exact(candidates: Vec<Movie>, year: Option<u16>) -> Option<Movie> {
    match year {
        None => candidates.into_iter().next(),
        Some(year) => candidates.into_iter().find(|movie| movie.year() == year),
    }
}

/// Fuzzy phase: score every candidate against the query and accept the
/// closest one iff its score is within the threshold and it satisfies the
/// year constraint. Anything else is a `NotFound`, including an empty
/// candidate list — an empty fuzzy search is a failed phase, not a caller
/// error.
pub fn select_fuzzy(
    title: &str,
    mut candidates: Vec<Movie>,
    year: Option<u16>,
    threshold: usize,
) -> Result<Movie> {
    if candidates.is_empty() {
        return Err(Error::NotFound);
    }

    let closest = similarity::find_closest_match(title, &candidates)?;
    if closest.score > threshold {
        return Err(Error::NotFound);
    }

    let movie = candidates.swap_remove(closest.index);
    if let Some(year) = year {
        if movie.year() != year {
            return Err(Error::NotFound);
        }
    }

    Ok(movie)
}
