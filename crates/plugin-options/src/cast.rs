//! Type coercion from raw host values to declared option types
//!
//! CLI arguments always arrive as strings and INI list entries arrive as
//! multi-line strings, so most work here is string parsing. Casting is
//! advisory: [`cast`] never fails, it logs and hands the raw value back.

use crate::value::{OptionValue, TypeHint};
use std::path::PathBuf;

const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];
const FALSY: [&str; 4] = ["false", "0", "no", "off"];

/// Why a value could not be coerced to a hint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CastError {
    #[error("'{raw}' is not a recognised boolean")]
    InvalidBool { raw: String },

    #[error("'{raw}' is not a valid {hint}: {reason}")]
    InvalidNumber {
        raw: String,
        hint: TypeHint,
        reason: String,
    },

    #[error("cannot cast a {from} value to {to}")]
    Unsupported { from: TypeHint, to: TypeHint },
}

/// Strictly coerce `value` to `hint`.
///
/// Values already of the requested type are returned unchanged.
pub fn try_cast(value: &OptionValue, hint: TypeHint) -> Result<OptionValue, CastError> {
    if hint.matches(value) {
        return Ok(value.clone());
    }

    match (hint, value) {
        (TypeHint::Bool, OptionValue::Str(s)) => parse_bool(s).map(OptionValue::Bool),
        (TypeHint::Int, OptionValue::Str(s)) => s
            .trim()
            .parse::<i64>()
            .map(OptionValue::Int)
            .map_err(|e| CastError::InvalidNumber {
                raw: s.clone(),
                hint,
                reason: e.to_string(),
            }),
        (TypeHint::Float, OptionValue::Str(s)) => s
            .trim()
            .parse::<f64>()
            .map(OptionValue::Float)
            .map_err(|e| CastError::InvalidNumber {
                raw: s.clone(),
                hint,
                reason: e.to_string(),
            }),
        (TypeHint::Float, OptionValue::Int(i)) => Ok(OptionValue::Float(*i as f64)),
        (TypeHint::Path, OptionValue::Str(s)) => Ok(OptionValue::Path(PathBuf::from(s))),
        (TypeHint::StrList, OptionValue::Str(s)) => Ok(OptionValue::StrList(split_lines(s))),
        (TypeHint::StrList, OptionValue::PathList(paths)) => Ok(OptionValue::StrList(
            paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
        )),
        (TypeHint::PathList, OptionValue::Str(s)) => Ok(OptionValue::PathList(
            split_lines(s).into_iter().map(PathBuf::from).collect(),
        )),
        (TypeHint::PathList, OptionValue::StrList(items)) => Ok(OptionValue::PathList(
            items.iter().map(PathBuf::from).collect(),
        )),
        _ => Err(CastError::Unsupported {
            from: value.type_hint(),
            to: hint,
        }),
    }
}

/// Coerce `value` to `hint`, falling back to the raw value.
///
/// A failed coercion emits a warning and returns `value` untouched; a
/// mistyped cosmetic option must not abort a test run.
pub fn cast(value: OptionValue, hint: TypeHint) -> OptionValue {
    match try_cast(&value, hint) {
        Ok(cast) => cast,
        Err(e) => {
            tracing::warn!(%hint, raw = %value, error = %e, "Failed to cast option value");
            value
        }
    }
}

fn parse_bool(raw: &str) -> Result<bool, CastError> {
    let lowered = raw.trim().to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(CastError::InvalidBool {
            raw: raw.to_string(),
        })
    }
}

/// INI multi-line list syntax: one entry per line, blank lines ignored.
/// Commas are not separators.
fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", true)]
    #[case("True", true)]
    #[case("1", true)]
    #[case("YES", true)]
    #[case("on", true)]
    #[case("false", false)]
    #[case("0", false)]
    #[case("No", false)]
    #[case(" off ", false)]
    fn test_bool_from_recognised_strings(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(
            try_cast(&raw.into(), TypeHint::Bool),
            Ok(OptionValue::Bool(expected))
        );
    }

    #[test]
    fn test_bool_rejects_unknown_strings() {
        assert_eq!(
            try_cast(&"maybe".into(), TypeHint::Bool),
            Err(CastError::InvalidBool {
                raw: "maybe".to_string()
            })
        );
    }

    #[test]
    fn test_split_lines_keeps_commas() {
        assert_eq!(split_lines("a,b\n\n  c  \n"), vec!["a,b", "c"]);
    }

    #[test]
    fn test_int_widens_to_float() {
        assert_eq!(
            try_cast(&OptionValue::Int(2), TypeHint::Float),
            Ok(OptionValue::Float(2.0))
        );
    }

    #[test]
    fn test_unsupported_pair_reports_both_types() {
        let err = try_cast(&OptionValue::Bool(true), TypeHint::Path).unwrap_err();
        assert_eq!(
            err,
            CastError::Unsupported {
                from: TypeHint::Bool,
                to: TypeHint::Path
            }
        );
        assert_eq!(err.to_string(), "cannot cast a bool value to path");
    }
}
