use super::NamedColor;
use serde::Serialize;
use std::fmt;

/// A run of literal text in a single color
///
/// `color` is `None` for the default color of the output layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub color: Option<NamedColor>,
    pub text: String,
}

impl Segment {
    pub fn new(color: Option<NamedColor>, text: impl Into<String>) -> Self {
        Self {
            color,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(None, text)
    }

    pub fn colored(color: NamedColor, text: impl Into<String>) -> Self {
        Self::new(Some(color), text)
    }
}

/// Rendered message: ordered (color, text) segments handed to the output layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyledText {
    segments: Vec<Segment>,
}

impl StyledText {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single segment in one color
    pub fn colored(color: NamedColor, text: impl Into<String>) -> Self {
        let mut styled = Self::empty();
        styled.push(Segment::colored(color, text));
        styled
    }

    /// Append a segment; segments without text are dropped
    pub fn push(&mut self, segment: Segment) {
        if !segment.text.is_empty() {
            self.segments.push(segment);
        }
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.push(segment);
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Text without any color information
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Text with ANSI color escapes for terminals
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment.color {
                Some(color) => {
                    out.push_str(&format!("\x1b[{}m{}\x1b[0m", color.ansi_code(), segment.text));
                }
                None => out.push_str(&segment.text),
            }
        }
        out
    }
}

impl From<Vec<Segment>> for StyledText {
    fn from(segments: Vec<Segment>) -> Self {
        let mut styled = Self::empty();
        for segment in segments {
            styled.push(segment);
        }
        styled
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_segments_dropped() {
        let styled = StyledText::empty()
            .with_segment(Segment::plain(""))
            .with_segment(Segment::colored(NamedColor::Red, "x"));
        assert_eq!(styled.segments().len(), 1);
    }

    #[test]
    fn test_plain_and_ansi() {
        let styled = StyledText::from(vec![
            Segment::plain("Hello "),
            Segment::colored(NamedColor::Green, "Bob"),
        ]);
        assert_eq!(styled.plain(), "Hello Bob");
        assert_eq!(styled.to_string(), "Hello Bob");
        assert_eq!(styled.to_ansi(), "Hello \x1b[92mBob\x1b[0m");
    }

    #[test]
    fn test_serializes_as_segment_list() {
        let styled = StyledText::colored(NamedColor::DarkRed, "no");
        let json = serde_json::to_string(&styled).unwrap();
        assert_eq!(json, r#"[{"color":"dark_red","text":"no"}]"#);
    }
}
