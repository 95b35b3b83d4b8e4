//! Submission validation for super meter forms
//!
//! Raised once per submission attempt, first violation wins. Two rules
//! per pump: closing must not read below opening, and a closing whose
//! digit string is shorter than its opening's looks like an incomplete
//! figure. Absent fields skip the checks - nothing entered yet is not a
//! violation.

use crate::error::{AppError, AppResult};
use crate::models::SuperMeterForm;
use crate::util::parse_decimal_opt;

/// Validate one super pump-pair form.
///
/// `labels` are the attendant-facing pump names for the group, e.g.
/// `["S1", "S2"]`. Value checks run for both pumps before the
/// incomplete-figure checks, matching the order violations were
/// historically reported in.
pub fn validate_super_form(form: &SuperMeterForm, labels: [&str; 2]) -> AppResult<()> {
    let pumps = [
        (labels[0], &form.pump1_opening, &form.pump1_closing),
        (labels[1], &form.pump2_opening, &form.pump2_closing),
    ];

    for (label, opening, closing) in pumps {
        let (Some(open), Some(close)) = (
            parse_decimal_opt(opening.as_deref()),
            parse_decimal_opt(closing.as_deref()),
        ) else {
            continue;
        };
        if close < open {
            return Err(AppError::validation(format!(
                "{label} closing must be greater than opening."
            )));
        }
    }

    for (label, opening, closing) in pumps {
        let (Some(open_raw), Some(close_raw)) = (opening.as_deref(), closing.as_deref()) else {
            continue;
        };
        if close_raw.trim().len() < open_raw.trim().len() {
            return Err(AppError::validation(format!(
                "{label} closing figure looks incomplete."
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(o1: &str, c1: &str, o2: &str, c2: &str) -> SuperMeterForm {
        SuperMeterForm {
            pump1_opening: Some(o1.into()),
            pump1_closing: Some(c1.into()),
            pump2_opening: Some(o2.into()),
            pump2_closing: Some(c2.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let f = form("100.00", "150.00", "200.00", "230.00");
        assert!(validate_super_form(&f, ["S1", "S2"]).is_ok());
    }

    #[test]
    fn test_closing_below_opening_blocks_submission() {
        let f = form("150.00", "100.00", "200.00", "230.00");
        let err = validate_super_form(&f, ["S1", "S2"]).unwrap_err();
        assert_eq!(err.message(), "S1 closing must be greater than opening.");
    }

    #[test]
    fn test_first_violation_wins() {
        // Both pumps violate; only the first is reported.
        let f = form("150.00", "100.00", "300.00", "230.00");
        let err = validate_super_form(&f, ["S3", "S4"]).unwrap_err();
        assert_eq!(err.message(), "S3 closing must be greater than opening.");
    }

    #[test]
    fn test_value_violation_reported_before_incomplete_figure() {
        // Pump 1 looks incomplete, pump 2 reads backwards; the value
        // check across both pumps runs first.
        let f = form("0100", "200", "300.00", "230.00");
        let err = validate_super_form(&f, ["S1", "S2"]).unwrap_err();
        assert_eq!(err.message(), "S2 closing must be greater than opening.");
    }

    #[test]
    fn test_short_closing_flags_incomplete_figure() {
        // 200 >= 100 passes the value check but the closing string is
        // shorter than the opening's.
        let f = form("0100", "200", "100", "200");
        let err = validate_super_form(&f, ["S1", "S2"]).unwrap_err();
        assert_eq!(err.message(), "S1 closing figure looks incomplete.");
    }

    #[test]
    fn test_absent_fields_skip_checks() {
        let f = SuperMeterForm {
            pump1_opening: Some("100.00".into()),
            ..Default::default()
        };
        assert!(validate_super_form(&f, ["S1", "S2"]).is_ok());
    }

    #[test]
    fn test_unparseable_entry_skips_value_check() {
        // Mirrors NaN comparisons being false: garbage cannot violate
        // the value rule, though the length rule still applies.
        let f = form("100", "abcd", "1", "2");
        assert!(validate_super_form(&f, ["S1", "S2"]).is_ok());
    }
}
