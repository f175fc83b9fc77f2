//! Paragraph and text-level types.

/// A paragraph of text content.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Inline content in order
    pub content: Vec<InlineContent>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a paragraph holding a single styled run.
    pub fn with_run(run: TextRun) -> Self {
        let mut p = Self::new();
        p.add_run(run);
        p
    }

    /// Create a heading paragraph.
    ///
    /// Level 0 is the document title; levels 1-6 map to the heading styles.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.heading_level = Some(level.min(6));
        p
    }

    /// Create a bulleted list item.
    pub fn bullet() -> Self {
        let mut p = Self::new();
        p.style.list = Some(ListKind::Bullet);
        p
    }

    /// Set the alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(InlineContent::Text(TextRun::new(text)));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Text(run));
    }

    /// Add a run whose embedded newlines become line breaks.
    ///
    /// Each `\n` produces a [`InlineContent::LineBreak`]; the text segments
    /// between them keep the run's style. Empty segments are dropped, so
    /// `"\n\nx"` yields two breaks followed by `x`.
    pub fn add_lines(&mut self, run: TextRun) {
        let TextRun { text, style } = run;
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.add_line_break();
            }
            if !segment.is_empty() {
                self.add_run(TextRun {
                    text: segment.to_string(),
                    style: style.clone(),
                });
            }
        }
    }

    /// Add a line break.
    pub fn add_line_break(&mut self) {
        self.content.push(InlineContent::LineBreak);
    }

    /// Iterate over the text runs, skipping line breaks.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.content.iter().filter_map(|c| match c {
            InlineContent::Text(run) => Some(run),
            InlineContent::LineBreak => None,
        })
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.as_str(),
                InlineContent::LineBreak => "\n",
            })
            .collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this is a heading (title included).
    pub fn is_heading(&self) -> bool {
        self.style.heading_level.is_some()
    }

    /// Get the heading level (0 = title) or None.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.style.list.is_some()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineContent {
    /// A text run with styling
    Text(TextRun),

    /// A line break inside the paragraph
    LineBreak,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                italic: true,
                ..Default::default()
            },
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,
}

impl TextStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphStyle {
    /// Heading level (0 = title, 1-6) or None for a body paragraph
    pub heading_level: Option<u8>,

    /// Text alignment
    pub alignment: Alignment,

    /// List membership if this is a list item
    pub list: Option<ListKind>,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Kind of list a paragraph belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bulleted list ("List Bullet" style)
    Bullet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_run(TextRun::bold("✅ "));
        p.add_text("Backup e restore de dados");

        assert_eq!(p.plain_text(), "✅ Backup e restore de dados");
    }

    #[test]
    fn test_heading() {
        let h1 = Paragraph::heading("RESUMO EXECUTIVO", 1);
        assert!(h1.is_heading());
        assert_eq!(h1.heading_level(), Some(1));

        let title = Paragraph::heading("INFINITUS", 0);
        assert_eq!(title.heading_level(), Some(0));

        let deep = Paragraph::heading("too deep", 12);
        assert_eq!(deep.heading_level(), Some(6));
    }

    #[test]
    fn test_add_lines_splits_on_newline() {
        let mut p = Paragraph::new();
        p.add_run(TextRun::bold("Ano 1:"));
        p.add_lines(TextRun::new("\nQ1: R$ 15k/mês\nARR Final: R$ 1.02M"));

        assert_eq!(p.plain_text(), "Ano 1:\nQ1: R$ 15k/mês\nARR Final: R$ 1.02M");
        let breaks = p
            .content
            .iter()
            .filter(|c| matches!(c, InlineContent::LineBreak))
            .count();
        assert_eq!(breaks, 2);
        assert_eq!(p.runs().count(), 3);
    }

    #[test]
    fn test_add_lines_keeps_style_and_blank_lines() {
        let mut p = Paragraph::new();
        p.add_lines(TextRun::italic("a\n\nb"));

        assert_eq!(p.content.len(), 4);
        assert!(p.runs().all(|r| r.style.italic));
    }

    #[test]
    fn test_bullet_item() {
        let p = Paragraph::bullet();
        assert!(p.is_list_item());
        assert!(p.is_empty());
    }

    #[test]
    fn test_text_style() {
        let style = TextStyle::default();
        assert!(!style.has_styling());
        assert!(TextRun::italic("x").style.has_styling());
    }
}
