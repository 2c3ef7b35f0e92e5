//! Revenue series primitives: cell coercion and the relative re-anchoring.
//!
//! RULES:
//!   - Coercion is total. A malformed cell is revenue 0, never an error.
//!   - Relative derivation only drops a leading run of exact zeros.

use crate::types::RevenueSeries;

/// Thousands separator accepted inside revenue cells.
const GROUPING_SEPARATOR: char = ',';

/// Convert one raw revenue cell into a number.
///
/// Grouping commas and surrounding whitespace are stripped before parsing.
/// Anything that still fails to parse, or parses to a non-finite value,
/// becomes `0.0`: a malformed cell reads as "no revenue that period".
pub fn coerce_revenue(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != GROUPING_SEPARATOR).collect();
    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(_) | Err(_) => {
            log::trace!("Revenue cell {raw:?} is not a finite number; using 0");
            0.0
        }
    }
}

/// Coerce one raw cell as read from the table. Bytes that are not valid
/// UTF-8 cannot be a number, so the cell is `0.0`.
pub fn coerce_cell(raw: &[u8]) -> f64 {
    std::str::from_utf8(raw).map_or_else(
        |_| {
            log::trace!("Revenue cell {raw:?} is not valid UTF-8; using 0");
            0.0
        },
        coerce_revenue,
    )
}

/// Coerce every cell of a row, preserving order.
pub fn coerce_row<'a, I>(cells: I) -> RevenueSeries
where
    I: IntoIterator<Item = &'a [u8]>,
{
    cells.into_iter().map(coerce_cell).collect()
}

/// Re-anchor a series at the customer's first non-zero period.
///
/// An all-zero (or empty) series yields an empty series.
pub fn relative_series(absolute: &[f64]) -> RevenueSeries {
    let start = first_revenue_period(absolute).unwrap_or(absolute.len());
    absolute[start..].to_vec()
}

/// Index of the first period whose revenue is not exactly zero.
pub fn first_revenue_period(series: &[f64]) -> Option<usize> {
    series.iter().position(|revenue| *revenue != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_separators_are_stripped() {
        assert_eq!(coerce_revenue("1,234.50"), 1234.5);
        assert_eq!(coerce_revenue("12,000"), 12000.0);
        assert_eq!(coerce_revenue(" 42 "), 42.0);
    }

    #[test]
    fn malformed_cells_coerce_to_zero() {
        assert_eq!(coerce_revenue("abc"), 0.0);
        assert_eq!(coerce_revenue(""), 0.0);
        assert_eq!(coerce_revenue("$100"), 0.0);
        assert_eq!(coerce_revenue("inf"), 0.0);
        assert_eq!(coerce_revenue("NaN"), 0.0);
    }

    #[test]
    fn negative_revenue_is_kept() {
        assert_eq!(coerce_revenue("-12.5"), -12.5);
    }

    #[test]
    fn coerce_row_keeps_order() {
        let cells: [&[u8]; 3] = [b"5", b"x", b"1,000"];
        assert_eq!(coerce_row(cells), vec![5.0, 0.0, 1000.0]);
    }

    #[test]
    fn non_utf8_cell_coerces_to_zero() {
        assert_eq!(coerce_cell(b"\xA3200"), 0.0);
        assert_eq!(coerce_cell(b"200"), 200.0);
    }

    #[test]
    fn relative_series_drops_leading_zeros() {
        assert_eq!(relative_series(&[0.0, 0.0, 7.0, 0.0, 2.0]), vec![7.0, 0.0, 2.0]);
    }

    #[test]
    fn relative_series_of_all_zero_is_empty() {
        assert!(relative_series(&[0.0, 0.0, 0.0]).is_empty());
        assert!(relative_series(&[]).is_empty());
    }

    #[test]
    fn relative_series_keeps_leading_negative() {
        assert_eq!(relative_series(&[0.0, -3.0, 0.0]), vec![-3.0, 0.0]);
    }

    #[test]
    fn relative_series_is_idempotent() {
        let once = relative_series(&[0.0, 4.0, 0.0, 1.0]);
        assert_eq!(relative_series(&once), once);
    }
}
