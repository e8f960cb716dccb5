//! Field rules for movie payloads.
//!
//! The HTTP layer runs every create/update body through these functions
//! before anything reaches the repository, so a rejected payload never
//! causes a partial write.

use chrono::Datelike;
use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Release year bounds
// ---------------------------------------------------------------------------

/// Earliest accepted release year.
pub const MIN_RELEASE_YEAR: i32 = 1900;

/// How many years past the current one a release year may be announced.
pub const MAX_YEARS_AHEAD: i32 = 5;

/// Message returned when any of the mandatory fields is absent.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Fields title, genre and releaseYear are required";

/// Latest accepted release year relative to `current_year`.
pub fn max_release_year(current_year: i32) -> i32 {
    current_year + MAX_YEARS_AHEAD
}

/// The current calendar year in UTC.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Trim a mandatory text field. Absent or blank values are rejected.
pub fn required_text(value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
    }
}

/// Trim an optional text field, collapsing blank values to `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Validate a raw JSON release year against `[MIN_RELEASE_YEAR, current_year + MAX_YEARS_AHEAD]`.
///
/// Absent and `null` values count as missing. Fractional numbers are
/// truncated toward zero before the range check. Strings, booleans and any
/// other non-number JSON are rejected even if they look numeric.
pub fn release_year(value: Option<&Value>, current_year: i32) -> Result<i32, CoreError> {
    let value = match value {
        None | Some(Value::Null) => {
            return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))
        }
        Some(value) => value,
    };

    let max = max_release_year(current_year);
    let out_of_range = || {
        CoreError::Validation(format!(
            "releaseYear must be a number between {MIN_RELEASE_YEAR} and {max}"
        ))
    };

    let year = match value.as_i64() {
        Some(year) => year,
        None => value
            .as_f64()
            .filter(|year| year.is_finite())
            .map(|year| year.trunc() as i64)
            .ok_or_else(out_of_range)?,
    };
    if year < i64::from(MIN_RELEASE_YEAR) || year > i64::from(max) {
        return Err(out_of_range());
    }
    Ok(year as i32)
}

/// Validate a free-text search query. Only a missing or empty `q` is
/// rejected; any other text, whitespace included, is kept verbatim.
pub fn search_query(value: Option<&str>) -> Result<String, CoreError> {
    match value {
        Some(q) if !q.is_empty() => Ok(q.to_string()),
        _ => Err(CoreError::Validation(
            "Query parameter q is required".to_string(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    const YEAR: i32 = 2026;

    // -- required_text -------------------------------------------------------

    #[test]
    fn required_text_trims_surrounding_whitespace() {
        assert_eq!(required_text(Some("  Matrix ")).unwrap(), "Matrix");
    }

    #[test]
    fn required_text_rejects_missing_and_blank() {
        assert_matches!(required_text(None), Err(CoreError::Validation(_)));
        assert_matches!(required_text(Some("   ")), Err(CoreError::Validation(_)));
    }

    // -- optional_text -------------------------------------------------------

    #[test]
    fn optional_text_collapses_blank_to_none() {
        assert_eq!(optional_text(None), None);
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(
            optional_text(Some(" http://img/1.png ")).as_deref(),
            Some("http://img/1.png")
        );
    }

    // -- release_year --------------------------------------------------------

    #[test]
    fn release_year_accepts_bounds() {
        assert_eq!(release_year(Some(&json!(1900)), YEAR).unwrap(), 1900);
        assert_eq!(release_year(Some(&json!(YEAR + 5)), YEAR).unwrap(), YEAR + 5);
    }

    #[test]
    fn release_year_rejects_before_1900() {
        let err = release_year(Some(&json!(1899)), YEAR).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("1900"));
    }

    #[test]
    fn release_year_rejects_too_far_ahead() {
        assert_matches!(
            release_year(Some(&json!(YEAR + 6)), YEAR),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn release_year_rejects_non_numbers() {
        assert!(release_year(Some(&json!("1999")), YEAR).is_err());
        assert!(release_year(Some(&json!(true)), YEAR).is_err());
        assert!(release_year(Some(&json!([1999])), YEAR).is_err());
    }

    #[test]
    fn release_year_truncates_fractions() {
        assert_eq!(release_year(Some(&json!(1999.0)), YEAR).unwrap(), 1999);
        assert_eq!(release_year(Some(&json!(1999.5)), YEAR).unwrap(), 1999);
        assert_eq!(release_year(Some(&json!(1900.9)), YEAR).unwrap(), 1900);
        assert!(release_year(Some(&json!(1899.9)), YEAR).is_err());
        assert!(release_year(Some(&json!(f64::from(YEAR) + 6.5)), YEAR).is_err());
    }

    #[test]
    fn release_year_missing_reports_required_fields() {
        let err = release_year(Some(&Value::Null), YEAR).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == REQUIRED_FIELDS_MESSAGE);
        assert!(release_year(None, YEAR).is_err());
    }

    // -- search_query --------------------------------------------------------

    #[test]
    fn search_query_requires_text() {
        assert_eq!(search_query(Some("sci")).unwrap(), "sci");
        assert_eq!(search_query(Some("  ")).unwrap(), "  ");
        assert!(search_query(Some("")).is_err());
        assert!(search_query(None).is_err());
    }
}
