//! Colour-tagged text lines shared by the ANSI and plain renderers

/// Role of a piece of text; mapped to a palette colour at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Text,
    Score,
    Muted,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

/// One terminal line made of consecutive segments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine(pub Vec<Segment>);

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment, builder style
    pub fn push(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.0.push(Segment {
            text: text.into(),
            tone,
        });
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// The line's text with all styling dropped, trailing spaces trimmed
    pub fn plain(&self) -> String {
        let joined: String = self.0.iter().map(|s| s.text.as_str()).collect();
        joined.trim_end().to_string()
    }
}

/// Pads or cuts `text` to exactly `width` characters
pub fn fit(text: &str, width: usize) -> String {
    let cut: String = text.chars().take(width).collect();
    format!("{cut:<width$}")
}
