//! Placeholder extraction and stray `%` detection

use std::collections::BTreeSet;

use super::vocabulary::{Placeholder, VOCABULARY};

/// Every vocabulary placeholder that occurs in `value`, duplicates collapsed
pub fn scan_placeholders(value: &str) -> BTreeSet<Placeholder> {
    VOCABULARY
        .matcher()
        .find_iter(value)
        .filter_map(|m| Placeholder::parse(m.as_str()))
        .collect()
}

/// Return every vocabulary token that occurs in `value`, duplicates collapsed.
pub fn scan(value: &str) -> BTreeSet<String> {
    scan_placeholders(value)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Byte offsets of every `%` that cannot start a format specifier.
///
/// A `%` is fine when it directly follows another `%` (the second half of
/// `%%`), or when it is followed by `%`, `@`, `d`, `s`, `f`, or by a digit
/// run, `$` and one of `@`, `d`, `s`, `f`.
pub fn stray_percents(value: &str) -> impl Iterator<Item = usize> + '_ {
    let bytes = value.as_bytes();
    bytes.iter().enumerate().filter_map(move |(i, &b)| {
        if b != b'%' {
            return None;
        }
        if i > 0 && bytes[i - 1] == b'%' {
            return None;
        }
        if starts_specifier(&bytes[i + 1..]) {
            return None;
        }
        Some(i)
    })
}

pub fn has_stray_percent(value: &str) -> bool {
    stray_percents(value).next().is_some()
}

fn starts_specifier(rest: &[u8]) -> bool {
    match rest.first() {
        Some(b'%' | b'@' | b'd' | b's' | b'f') => true,
        Some(b) if b.is_ascii_digit() => {
            let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
            rest.get(digits) == Some(&b'$')
                && matches!(rest.get(digits + 1), Some(b'@' | b'd' | b's' | b'f'))
        }
        _ => false,
    }
}
