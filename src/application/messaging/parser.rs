//! Property source parser - `key=value` lines into an ordered map

use std::collections::BTreeMap;
use crate::application::errors::ParseError;

/// Parse property-file text into key/template pairs
///
/// Blank lines and lines starting with `#` are skipped. A trailing backslash
/// continues the entry on the next line. Any other line must contain an
/// unescaped `=` with a non-empty key, otherwise the whole source is rejected.
pub fn parse_properties(source: &str) -> Result<BTreeMap<String, String>, ParseError> {
    let mut entries = BTreeMap::new();
    let mut lines = source.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let line_no = index + 1;
        let trimmed = raw.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Join continuation lines into one logical line
        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical)
            .ok_or_else(|| ParseError::new(line_no, "expected key=value"))?;
        let key = unescape(key.trim_end(), line_no)?;
        if key.is_empty() {
            return Err(ParseError::new(line_no, "empty key"));
        }
        let value = unescape(value.trim_start(), line_no)?;

        entries.insert(key, value);
    }

    Ok(entries)
}

/// An odd number of trailing backslashes means the line continues
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Split at the first `=` not preceded by a backslash escape
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '=' if !escaped => return Some((&line[..i], &line[i + 1..])),
            _ => escaped = false,
        }
    }
    None
}

fn unescape(text: &str, line: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let ch = u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| hex.len() == 4)
                    .and_then(char::from_u32)
                    .ok_or_else(|| ParseError::new(line, format!("invalid unicode escape \\u{}", hex)))?;
                out.push(ch);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}
