//! Template markup: `{N}` placeholders and `%&color%` markers

use once_cell::sync::Lazy;
use regex_lite::{Captures, Regex};

use crate::domain::entities::{NamedColor, Segment, StyledText};

/// Reserved delimiter around color markers
pub const DELIMITER: char = '%';

/// Prefix marking a delimited segment as a color directive
pub const COLOR_PREFIX: char = '&';

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Replace `{N}` tokens with `args[N]` in a single pass
///
/// Substituted values are inserted verbatim and never rescanned. Tokens whose
/// index is out of range are left untouched.
pub fn substitute<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            let index = caps[1].parse::<usize>().ok();
            match index.and_then(|i| args.get(i)) {
                Some(arg) => arg.as_ref().to_string(),
                None => {
                    tracing::warn!(
                        "Placeholder {} has no argument ({} given), leaving it as text",
                        &caps[0],
                        args.len()
                    );
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Scan `%`-delimited segments into styled text
///
/// A segment starting with `&` that follows a delimiter names the color of the
/// segment right after it. Everything else is literal text in the default
/// color. Unknown color names fall back to the default color.
pub fn parse_markup(text: &str) -> StyledText {
    let parts: Vec<&str> = text.split(DELIMITER).collect();
    let mut styled = StyledText::empty();

    let mut i = 0;
    while i < parts.len() {
        let part = parts[i];
        match part.strip_prefix(COLOR_PREFIX) {
            Some(name) if i > 0 => {
                if let Some(next) = parts.get(i + 1) {
                    let color = NamedColor::from_name(name);
                    if color.is_none() {
                        tracing::warn!("Unknown color '{}', using default color", name);
                    }
                    styled.push(Segment::new(color, *next));
                }
                i += 2;
            }
            _ => {
                styled.push(Segment::plain(part));
                i += 1;
            }
        }
    }

    styled
}
