//! Text ↔ native number conversion shared by the parser and the serializer.
//!
//! Two precision policies are available:
//!
//! - [`Precision::Fast`] converts the longest valid prefix of the text and accepts
//!   whatever the native type makes of it. Literals with more significant digits
//!   than the target holds lose precision silently.
//! - [`Precision::Strict`] converts the same way, then renders the result back to
//!   text and fails unless the rendering equals the input byte for byte.
//!
//! Rendering is deterministic: integers in plain decimal (via `itoa`), floats as
//! the shortest text that reads back to the same `f64` (via `ryu`). A rendered
//! float always contains `.` or `e`, so it re-parses as a float.

use serde::{Deserialize, Serialize};

use crate::error::{JsonError, Result};

/// Precision policy for text → number conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Greedy conversion, no round-trip check.
    #[default]
    Fast,
    /// Conversion must re-render to exactly the original text.
    Strict,
}

/// Length in bytes of the number literal at the start of `bytes`.
///
/// Grammar: optional `-`; a single `0` or a run of digits; optional `.` and
/// digits; optional `e`/`E`, sign and digits. Nothing is required to be present,
/// so a lone `-` or `1.` is matched as-is and left for conversion to judge.
pub fn scan_number(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if bytes.first() == Some(&b'-') {
        pos += 1;
    }
    if bytes.get(pos) == Some(&b'0') {
        pos += 1;
    } else {
        pos += count_digits(&bytes[pos..]);
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        pos += count_digits(&bytes[pos..]);
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        pos += count_digits(&bytes[pos..]);
    }
    pos
}

/// Convert text to `u64` under the given policy.
pub fn parse_u64(text: &str, precision: Precision) -> Result<u64> {
    let prefix = integer_prefix(text, false);
    if prefix.is_empty() {
        return Err(invalid(text, "no digits"));
    }
    // The prefix is digits only, so the sole failure mode is overflow.
    let value: u64 = prefix
        .parse()
        .map_err(|_| invalid(text, "out of range for u64"))?;
    if precision == Precision::Strict {
        check_round_trip(text, itoa::Buffer::new().format(value))?;
    }
    Ok(value)
}

/// Convert text to `i64` under the given policy.
pub fn parse_i64(text: &str, precision: Precision) -> Result<i64> {
    let prefix = integer_prefix(text, true);
    if prefix.is_empty() {
        return Err(invalid(text, "no digits"));
    }
    let value: i64 = prefix
        .parse()
        .map_err(|_| invalid(text, "out of range for i64"))?;
    if precision == Precision::Strict {
        check_round_trip(text, itoa::Buffer::new().format(value))?;
    }
    Ok(value)
}

/// Convert text to a finite `f64` under the given policy.
///
/// Overflow to infinity and underflow of non-zero digits to zero are both
/// rejected rather than rounded.
pub fn parse_f64(text: &str, precision: Precision) -> Result<f64> {
    let prefix = float_prefix(text);
    if prefix.is_empty() {
        return Err(invalid(text, "no digits"));
    }
    let value: f64 = prefix.parse().map_err(|_| invalid(text, "malformed float"))?;
    if !value.is_finite() {
        return Err(invalid(text, "out of range for f64"));
    }
    if value == 0.0 && has_nonzero_mantissa(prefix) {
        return Err(invalid(text, "underflows f64"));
    }
    if precision == Precision::Strict {
        check_round_trip(text, ryu::Buffer::new().format_finite(value))?;
    }
    Ok(value)
}

pub fn write_u64(out: &mut String, value: u64) {
    out.push_str(itoa::Buffer::new().format(value));
}

pub fn write_i64(out: &mut String, value: i64) {
    out.push_str(itoa::Buffer::new().format(value));
}

/// Append the shortest round-trip rendering of `value`.
///
/// Non-finite values render as `NaN`, `inf` and `-inf`; those are not JSON and
/// are written without complaint.
pub fn write_f64(out: &mut String, value: f64) {
    out.push_str(ryu::Buffer::new().format(value));
}

pub fn render_u64(value: u64) -> String {
    itoa::Buffer::new().format(value).to_owned()
}

pub fn render_i64(value: i64) -> String {
    itoa::Buffer::new().format(value).to_owned()
}

pub fn render_f64(value: f64) -> String {
    ryu::Buffer::new().format(value).to_owned()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Optional `-` (when `signed`) followed by the leading digit run.
/// Empty when there are no digits.
fn integer_prefix(text: &str, signed: bool) -> &str {
    let bytes = text.as_bytes();
    let sign = usize::from(signed && bytes.first() == Some(&b'-'));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        ""
    } else {
        &text[..sign + digits]
    }
}

/// Longest prefix that reads as a float. A `.` may have no fraction digits
/// (`1.e5` is `1e5`); an exponent needs at least one digit or it is left out.
fn float_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut pos = usize::from(bytes.first() == Some(&b'-'));
    let int_digits = count_digits(&bytes[pos..]);
    if int_digits == 0 {
        return "";
    }
    pos += int_digits;

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        pos += count_digits(&bytes[pos..]);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    &text[..pos]
}

fn has_nonzero_mantissa(literal: &str) -> bool {
    literal
        .bytes()
        .take_while(|b| !matches!(b, b'e' | b'E'))
        .any(|b| matches!(b, b'1'..=b'9'))
}

fn check_round_trip(text: &str, rendered: &str) -> Result<()> {
    if rendered == text {
        Ok(())
    } else {
        Err(invalid(text, "does not round-trip exactly"))
    }
}

fn invalid(text: &str, reason: &'static str) -> JsonError {
    JsonError::InvalidNumericLiteral {
        literal: text.to_owned(),
        reason,
    }
}
