//! Starting offsets given on the command line.
//!
//! The radix is picked from the prefix of the token: `0x` is hexadecimal,
//! `0b` is binary, `0o` or a bare leading `0` is octal and anything else is
//! decimal. Digits may be grouped with `_`, and a `_` may also follow the
//! prefix directly, as in `0x_1A`.

use crate::{CmpError, Result};

pub fn parse_offset(token: &str) -> Result<u64> {
    let unsigned = token.strip_prefix('+').unwrap_or(token);
    if unsigned.starts_with('-') {
        return Err(CmpError::bad_offset(token, "offset must not be negative"));
    }

    let (radix, digits, prefixed) = split_radix(unsigned);
    let digits = match digits.strip_prefix('_') {
        Some(rest) if prefixed => rest,
        _ => digits,
    };
    if digits.is_empty() {
        return Err(CmpError::bad_offset(token, "no digits"));
    }
    if !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CmpError::bad_offset(token, "invalid digit"));
    }
    if digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return Err(CmpError::bad_offset(token, "misplaced digit separator"));
    }

    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    u64::from_str_radix(&digits, radix)
        .map_err(|e| CmpError::bad_offset(token, e))
}

/// Returns the radix, the digits and whether a prefix was stripped.
fn split_radix(token: &str) -> (u32, &str, bool) {
    let lower = token.get(..2).map(str::to_ascii_lowercase);
    match lower.as_deref() {
        Some("0x") => (16, &token[2..], true),
        Some("0b") => (2, &token[2..], true),
        Some("0o") => (8, &token[2..], true),
        _ if token.len() > 1 && token.starts_with('0') => {
            (8, &token[1..], true)
        }
        _ => (10, token, false),
    }
}
