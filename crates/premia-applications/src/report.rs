//! Violation report assembly.
//!
//! One ordered list is returned per rejected operation: structural entries
//! first, business-invariant entries after, each layer in the order its
//! checks ran. The merge never deduplicates: one underlying
//! cause may legitimately surface through more than one check, and callers
//! render the batch verbatim.

use crate::error::Violation;

/// Merge the two layers' outputs into a single ordered report.
pub(crate) fn merge(structural: Vec<Violation>, business: Vec<Violation>) -> Vec<Violation> {
    let mut merged = structural;
    merged.extend(business);
    merged
}
