//! Conversion between plain text and the escaped form held by [`Value::String`].
//!
//! Parsed strings and object keys keep their JSON escape sequences, so that
//! serialization is a plain quote-wrap. These helpers bridge that form and
//! ordinary Rust text for programmatic construction and for callers that need
//! the decoded characters.
//!
//! [`Value::String`]: crate::Value::String

use crate::error::{JsonError, Result};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Appended in place of unpaired UTF-16 surrogates when decoding.
const REPLACEMENT: char = '\u{FFFD}';

/// Escape `text` into canonical JSON string content (without quotes).
///
/// `"` and `\` are backslash-escaped, control characters use their short
/// escape when one exists and `\u00XX` otherwise. Everything else, including
/// `/` and non-ASCII characters, is copied unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

pub fn escape_into(out: &mut String, text: &str) {
    let mut run_start = 0;
    for (pos, ch) in text.char_indices() {
        let short = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\u{08}' => "\\b",
            '\u{0C}' => "\\f",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            c if c < ' ' => "",
            _ => continue,
        };
        out.push_str(&text[run_start..pos]);
        run_start = pos + 1;
        if short.is_empty() {
            let byte = ch as u8;
            out.push_str("\\u00");
            out.push(HEX[usize::from(byte >> 4)] as char);
            out.push(HEX[usize::from(byte & 0xF)] as char);
        } else {
            out.push_str(short);
        }
    }
    out.push_str(&text[run_start..]);
}

/// Decode escaped string content back into plain text.
///
/// `\uXXXX` surrogate pairs are combined; an unpaired surrogate decodes to
/// U+FFFD. A `\u` not followed by four hex digits is a `Conversion` error.
pub fn unescape(escaped: &str) -> Result<String> {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let mut chars = rest[pos + 1..].chars();
        let Some(marker) = chars.next() else {
            // Trailing lone backslash.
            out.push('\\');
            return Ok(out);
        };
        rest = chars.as_str();

        match marker {
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => {
                let unit = hex_unit(rest).ok_or_else(|| {
                    JsonError::Conversion(format!("malformed \\u escape in \"{escaped}\""))
                })?;
                rest = &rest[4..];
                if (0xD800..0xDC00).contains(&unit) {
                    let low = rest
                        .strip_prefix("\\u")
                        .and_then(hex_unit)
                        .filter(|low| (0xDC00..0xE000).contains(low));
                    match low {
                        Some(low) => {
                            rest = &rest[6..];
                            let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                            out.push(char::from_u32(code).unwrap_or(REPLACEMENT));
                        }
                        None => out.push(REPLACEMENT),
                    }
                } else {
                    out.push(char::from_u32(unit).unwrap_or(REPLACEMENT));
                }
            }
            // `"`, `\`, `/` and anything unrecognised stand for themselves.
            other => out.push(other),
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn hex_unit(text: &str) -> Option<u32> {
    let digits = text.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
