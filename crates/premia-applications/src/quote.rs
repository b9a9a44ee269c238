//! Premium quote generation.

use rand::Rng;

use crate::config::QuoteRange;

/// Draw a quote amount uniformly from the configured inclusive range.
pub(crate) fn random_quote(range: QuoteRange) -> u32 {
    rand::thread_rng().gen_range(range.min..=range.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_stays_in_range() {
        let range = QuoteRange { min: 20, max: 100 };
        for _ in 0..200 {
            let quote = random_quote(range);
            assert!((range.min..=range.max).contains(&quote));
        }
    }

    #[test]
    fn test_degenerate_range_is_constant() {
        let range = QuoteRange { min: 42, max: 42 };
        assert_eq!(random_quote(range), 42);
    }
}
