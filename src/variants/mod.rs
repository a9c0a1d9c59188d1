//! Equivalent spellings of entered meet URLs, and the diff of a federation's
//! listing against them.
//!
//! Federations are inconsistent about scheme, spaces and encoded hostnames, so
//! a URL entered years ago may be listed today in a different but equivalent
//! form. Every entered URL is expanded through [`RULES`] before comparing.

mod rules;


pub use rules::{expand_variants, VariantRule, RULES};

use log::debug;
use std::collections::HashSet;

/// Union of [`expand_variants`] over every entered URL.
pub fn expand_entered<I, S>(entered: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entered
        .into_iter()
        .flat_map(|url| expand_variants(url.as_ref()))
        .collect()
}

/// Candidates that are not entered, in listing order and without repeats.
///
/// A candidate is dropped if it mentions `canonical_site`, if any spelling of
/// an entered URL matches it exactly, or if it was already returned.
pub fn unentered_urls<I, S>(
    candidates: I,
    entered: &HashSet<String>,
    canonical_site: &str,
) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let known = expand_entered(entered);
    debug!(
        "Expanded {} entered URLs into {} variants",
        entered.len(),
        known.len()
    );

    let mut seen = HashSet::new();
    let mut unentered = Vec::new();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.contains(canonical_site) {
            continue;
        }
        if known.contains(candidate) || !seen.insert(candidate.to_string()) {
            continue;
        }
        unentered.push(candidate.to_string());
    }

    unentered
}
