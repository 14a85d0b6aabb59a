//! Digit-separator–aware numeric parsing (§4.4).
//!
//! Grounded on `original_source/source/lexical_analysis/lexical_analyzer.cpp`'s
//! `parse_integer`/`parse_number`: both filter `'` separators out of a copy of
//! the slice, then delegate to the language's own numeric parser
//! (`std::stoll`/`std::stod` there, `str::parse` here). Both accept a leading
//! `-` when called directly, even though the scanner's own call site never
//! hands one in (§9's open-question resolution: the scanner always splits
//! `minus` from the digits; these functions stay permissive for direct use).

use crate::error::LexError;

/// Parses a (possibly digit-separated) integer literal.
///
/// `offset` is only used to tag a `MalformedNumericLiteral` error with the
/// token's starting byte position.
pub fn parse_integer(text: &str, has_separators: bool, offset: usize) -> Result<i64, LexError> {
    let filtered;
    let stripped = if has_separators {
        filtered = strip_separators(text);
        filtered.as_str()
    } else {
        text
    };

    stripped.parse::<i64>().map_err(|_| LexError::MalformedNumericLiteral {
        offset,
        text: text.to_string(),
    })
}

/// Parses a (possibly digit-separated) floating-point literal.
pub fn parse_number(text: &str, has_separators: bool, offset: usize) -> Result<f64, LexError> {
    let filtered;
    let stripped = if has_separators {
        filtered = strip_separators(text);
        filtered.as_str()
    } else {
        text
    };

    stripped.parse::<f64>().map_err(|_| LexError::MalformedNumericLiteral {
        offset,
        text: text.to_string(),
    })
}

fn strip_separators(text: &str) -> String {
    text.chars().filter(|&c| c != '\'').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_digit_separators() {
        assert_eq!(parse_integer("100'000'000", true, 0), Ok(100_000_000));
        assert_eq!(parse_number(".123'''45''6", true, 0), Ok(0.123456));
    }

    #[test]
    fn accepts_leading_minus_when_called_directly() {
        assert_eq!(parse_integer("-3", true, 0), Ok(-3));
        assert_eq!(parse_number("-3.5", true, 0), Ok(-3.5));
    }

    #[test]
    fn separator_only_literal_is_malformed() {
        assert!(parse_integer("'", true, 0).is_err());
    }

    #[test]
    fn without_separators_parses_directly() {
        assert_eq!(parse_integer("42", false, 0), Ok(42));
        assert_eq!(parse_number("3.5", false, 0), Ok(3.5));
    }
}
