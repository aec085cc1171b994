//! Type dispatcher: substitutes every placeholder token by position.

use crate::config::QuoteStyle;
use crate::error::{TemplateError, TemplateResult};
use crate::format::{push_float, push_int, write_value};
use crate::scan::{PlaceholderKind, Token, TokenKind};
use crate::value::{Entry, Value};

/// Substitute `tokens` (scanned from `query`) with `args`, one argument per token.
///
/// Text between tokens is copied as-is; substituted text is never rescanned.
pub(crate) fn substitute(
    query: &str,
    tokens: &[Token],
    args: &[Value],
    style: QuoteStyle,
) -> TemplateResult<String> {
    if tokens.len() != args.len() {
        return Err(TemplateError::malformed(format!(
            "{} placeholders but {} arguments",
            tokens.len(),
            args.len()
        )));
    }

    let mut out = String::with_capacity(query.len() + args.len() * 8);
    let mut last = 0;
    for (token, arg) in tokens.iter().zip(args) {
        let text = token.text(query);
        let kind = match token.kind {
            TokenKind::Placeholder(_) => PlaceholderKind::from_token(text),
            TokenKind::Block => None,
        }
        .ok_or_else(|| TemplateError::UnknownPlaceholderKind(text.to_string()))?;

        out.push_str(&query[last..token.start]);
        match kind {
            PlaceholderKind::Generic => write_value(&mut out, arg, style, kind.as_str())?,
            PlaceholderKind::Identifier => write_identifiers(&mut out, arg)?,
            PlaceholderKind::Integer => write_integer(&mut out, arg)?,
            PlaceholderKind::Float => write_float(&mut out, arg)?,
            PlaceholderKind::Array => write_array(&mut out, arg, style)?,
        }
        last = token.end;
    }
    out.push_str(&query[last..]);
    Ok(out)
}

/// `?#`: one back-quoted identifier, or a `, `-joined list of them.
fn write_identifiers(out: &mut String, arg: &Value) -> TemplateResult<()> {
    match arg {
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_identifier(out, item)?;
            }
            Ok(())
        }
        _ => write_identifier(out, arg),
    }
}

fn write_identifier(out: &mut String, value: &Value) -> TemplateResult<()> {
    out.push('`');
    match value {
        Value::Text(s) => out.push_str(s),
        Value::Int(n) => push_int(out, *n),
        Value::Float(f) => push_float(out, *f, "?#")?,
        Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
        _ => return Err(TemplateError::unsupported("?#", value.type_name())),
    }
    out.push('`');
    Ok(())
}

/// `?d`: integer, or `NULL`.
fn write_integer(out: &mut String, arg: &Value) -> TemplateResult<()> {
    match arg {
        Value::Null => out.push_str("NULL"),
        Value::Int(n) => push_int(out, *n),
        Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
        _ => return Err(TemplateError::unsupported("?d", arg.type_name())),
    }
    Ok(())
}

/// `?f`: float, or `NULL`. Integers are widened.
fn write_float(out: &mut String, arg: &Value) -> TemplateResult<()> {
    match arg {
        Value::Null => out.push_str("NULL"),
        Value::Float(f) => push_float(out, *f, "?f")?,
        Value::Int(n) => push_int(out, *n),
        _ => return Err(TemplateError::unsupported("?f", arg.type_name())),
    }
    Ok(())
}

/// `?a`: entries joined by `, `; keyed entries as `` `key` = value ``.
///
/// A plain [`Value::List`] is treated as an array of plain entries.
fn write_array(out: &mut String, arg: &Value, style: QuoteStyle) -> TemplateResult<()> {
    match arg {
        Value::Array(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                match entry {
                    Entry::Plain(value) => write_value(out, value, style, "?a")?,
                    Entry::Keyed(key, value) => {
                        out.push('`');
                        out.push_str(key);
                        out.push_str("` = ");
                        write_value(out, value, style, "?a")?;
                    }
                }
            }
            Ok(())
        }
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item, style, "?a")?;
            }
            Ok(())
        }
        _ => Err(TemplateError::unsupported("?a", arg.type_name())),
    }
}
