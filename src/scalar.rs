// Author: Dustin Pilgrim
// License: MIT

//! Conversions between raw value text and typed scalars, shared by the
//! parser and the serializer.

use tracing::warn;

use crate::ast::Scalar;
use crate::lexer::is_quote;

/// Turn raw value text into a typed scalar.
///
/// Precedence, first match wins:
/// 1. leading quote: strip one layer, content is a string taken verbatim
/// 2. blank text: integer zero
/// 3. `-?digits`: integer (float if it overflows `i64`)
/// 4. `-?digits.digits`: float
/// 5. `true` / `false`: boolean
/// 6. anything else: string with its first escaped quote unescaped
pub fn coerce(raw: &str) -> Scalar {
    if raw.starts_with(is_quote) {
        return Scalar::String(strip_quotes(raw).to_string());
    }

    if is_loose_numeric(raw) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Scalar::Integer(0);
        }
        if is_integer_text(trimmed) {
            return match trimmed.parse::<i64>() {
                Ok(n) => Scalar::Integer(n),
                Err(_) => Scalar::Float(trimmed.parse::<f64>().unwrap_or(0.0)),
            };
        }
        if is_float_text(trimmed) {
            if let Ok(f) = trimmed.parse::<f64>() {
                return Scalar::Float(f);
            }
        }
    }

    match raw {
        "true" => Scalar::Boolean(true),
        "false" => Scalar::Boolean(false),
        _ => Scalar::String(unescape_first_quote(raw)),
    }
}

/// Text of one `- item` line after the marker.
pub fn coerce_list_item(raw: &str) -> String {
    let quoted = raw.len() >= 2
        && raw.starts_with(is_quote)
        && raw.ends_with(is_quote)
        && raw[..1] == raw[raw.len() - 1..];
    if quoted {
        unescape_first_quote(&raw[1..raw.len() - 1])
    } else {
        raw.to_string()
    }
}

/// Generic quote-delimited encoding: numbers and booleans bare, strings in
/// double quotes with inner double quotes escaped.
pub fn encode(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(f) if f.is_finite() => {
            let text = f.to_string();
            if text.contains('.') {
                text
            } else {
                format!("{}.0", text)
            }
        }
        Scalar::Float(f) => {
            warn!(value = %f, "non-finite float encoded as string");
            quote_string(&f.to_string())
        }
        Scalar::Boolean(b) => b.to_string(),
        Scalar::String(s) => quote_string(s),
    }
}

pub fn quote_string(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\\\""))
}

/// Strip a leading quote and, when it matches, the trailing one.
pub(crate) fn strip_quotes(text: &str) -> &str {
    let Some(open) = text.chars().next().filter(|c| is_quote(*c)) else {
        return text;
    };
    let inner = &text[1..];
    inner.strip_suffix(open).unwrap_or(inner)
}

/// Replace only the first `\'` or `\"` with the bare quote.
pub(crate) fn unescape_first_quote(text: &str) -> String {
    let bytes = text.as_bytes();
    let found = bytes
        .windows(2)
        .position(|pair| pair[0] == b'\\' && (pair[1] == b'\'' || pair[1] == b'"'));
    match found {
        Some(pos) => format!("{}{}", &text[..pos], &text[pos + 1..]),
        None => text.to_string(),
    }
}

/// Empty and whitespace-only text counts as numeric zero.
fn is_loose_numeric(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed.parse::<f64>().is_ok()
}

fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float_text(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let Some((whole, frac)) = unsigned.split_once('.') else {
        return false;
    };
    [whole, frac]
        .iter()
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}
