//! Value formatter: one scalar value to its SQL literal text.

use crate::config::QuoteStyle;
use crate::error::{TemplateError, TemplateResult};
use crate::value::Value;

/// Format a scalar value as a SQL literal, with verbatim text quoting.
///
/// - integer / bool → decimal text (`true` → `1`)
/// - float → decimal text, never exponential
/// - text → `'text'`
/// - null → `NULL`
///
/// Lists, arrays and the skip marker are rejected.
///
/// ```
/// use sqltmpl::{format_value, Value};
///
/// assert_eq!(format_value(&Value::Int(5)).unwrap(), "5");
/// assert_eq!(format_value(&Value::from("a")).unwrap(), "'a'");
/// assert_eq!(format_value(&Value::Null).unwrap(), "NULL");
/// ```
pub fn format_value(value: &Value) -> TemplateResult<String> {
    let mut out = String::new();
    write_value(&mut out, value, QuoteStyle::Verbatim, "?")?;
    Ok(out)
}

/// Append the SQL literal for `value` to `out`.
///
/// `placeholder` names the token being substituted, for error messages.
pub(crate) fn write_value(
    out: &mut String,
    value: &Value,
    style: QuoteStyle,
    placeholder: &'static str,
) -> TemplateResult<()> {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
        Value::Int(n) => push_int(out, *n),
        Value::Float(f) => push_float(out, *f, placeholder)?,
        Value::Text(s) => push_text(out, s, style),
        Value::List(_) | Value::Array(_) | Value::Skip => {
            return Err(TemplateError::unsupported(placeholder, value.type_name()));
        }
    }
    Ok(())
}

pub(crate) fn push_int(out: &mut String, n: i64) {
    use std::fmt::Write;
    // Writing into a String cannot fail.
    let _ = write!(out, "{n}");
}

/// `f64`'s `Display` is plain decimal (no exponent) and round-trips.
pub(crate) fn push_float(out: &mut String, f: f64, placeholder: &'static str) -> TemplateResult<()> {
    use std::fmt::Write;
    if !f.is_finite() {
        return Err(TemplateError::unsupported(placeholder, "non-finite float"));
    }
    let _ = write!(out, "{f}");
    Ok(())
}

fn push_text(out: &mut String, s: &str, style: QuoteStyle) {
    out.reserve(s.len() + 2);
    out.push('\'');
    match style {
        QuoteStyle::Verbatim => out.push_str(s),
        QuoteStyle::DoubleQuotes => {
            for ch in s.chars() {
                if ch == '\'' {
                    out.push('\'');
                }
                out.push(ch);
            }
        }
    }
    out.push('\'');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: Value, style: QuoteStyle) -> TemplateResult<String> {
        let mut out = String::new();
        write_value(&mut out, &value, style, "?")?;
        Ok(out)
    }

    #[test]
    fn integers_and_bools() {
        assert_eq!(format_value(&Value::Int(42)).unwrap(), "42");
        assert_eq!(format_value(&Value::Int(-100)).unwrap(), "-100");
        assert_eq!(format_value(&Value::Int(i64::MIN)).unwrap(), "-9223372036854775808");
        assert_eq!(format_value(&Value::Bool(true)).unwrap(), "1");
        assert_eq!(format_value(&Value::Bool(false)).unwrap(), "0");
    }

    #[test]
    fn floats_are_plain_decimal() {
        assert_eq!(format_value(&Value::Float(2.5)).unwrap(), "2.5");
        assert_eq!(format_value(&Value::Float(3.0)).unwrap(), "3");
        assert_eq!(format_value(&Value::Float(1e21)).unwrap(), "1000000000000000000000");
        assert_eq!(format_value(&Value::Float(0.000001)).unwrap(), "0.000001");
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        let err = format_value(&Value::Float(f64::NAN)).unwrap_err();
        assert!(err.is_unsupported_value_type());
        assert!(format_value(&Value::Float(f64::INFINITY)).is_err());
    }

    #[test]
    fn text_is_single_quoted() {
        assert_eq!(format_value(&Value::from("hello")).unwrap(), "'hello'");
        assert_eq!(format_value(&Value::from("")).unwrap(), "''");
    }

    #[test]
    fn verbatim_quoting_keeps_embedded_quotes() {
        assert_eq!(
            fmt(Value::from("O'Brien"), QuoteStyle::Verbatim).unwrap(),
            "'O'Brien'"
        );
    }

    #[test]
    fn double_quotes_style_escapes_embedded_quotes() {
        assert_eq!(
            fmt(Value::from("O'Brien"), QuoteStyle::DoubleQuotes).unwrap(),
            "'O''Brien'"
        );
        assert_eq!(
            fmt(Value::from("'; DROP TABLE users; --"), QuoteStyle::DoubleQuotes).unwrap(),
            "'''; DROP TABLE users; --'"
        );
    }

    #[test]
    fn null_is_unquoted() {
        assert_eq!(format_value(&Value::Null).unwrap(), "NULL");
    }

    #[test]
    fn compound_values_are_unsupported() {
        for value in [Value::List(vec![]), Value::Array(vec![]), Value::Skip] {
            let err = format_value(&value).unwrap_err();
            assert!(err.is_unsupported_value_type(), "{value:?}");
        }
        assert_eq!(
            format_value(&Value::Skip).unwrap_err().to_string(),
            "Unsupported value type for ?: skip marker"
        );
    }
}
