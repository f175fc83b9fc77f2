//! Fluent construction of a [`Document`].
//!
//! The builder offers exactly the vocabulary the report is written in:
//! titled headings, emphasised paragraphs, marker-prefixed bullet lists,
//! label/value and headed grid tables, and page breaks.
//!
//! ```
//! use infinitus_report::builder::{DocumentBuilder, Marker};
//!
//! let doc = DocumentBuilder::new()
//!     .heading("🎯 Principais Destaques:", 2)
//!     .bullets(Marker::Check, ["Tecnologia diferenciada"])
//!     .finish();
//! assert_eq!(doc.stats().list_items, 1);
//! ```

use log::debug;

use crate::model::{
    Alignment, Document, Margins, Metadata, PageSetup, Paragraph, Table, TableCell, TableRow,
    TextRun,
};

/// Prefix placed in front of each bullet item's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `✅ ` in bold
    Check,
    /// `• ` in bold
    Dot,
    /// `• ` without emphasis
    PlainDot,
    /// `🎯 ` in bold
    Target,
    /// `⚠️ ` in bold
    Warning,
}

impl Marker {
    /// The marker text, trailing space included.
    pub fn text(self) -> &'static str {
        match self {
            Marker::Check => "✅ ",
            Marker::Dot | Marker::PlainDot => "• ",
            Marker::Target => "🎯 ",
            Marker::Warning => "⚠️ ",
        }
    }

    /// Whether the marker run is set in bold.
    pub fn is_bold(self) -> bool {
        !matches!(self, Marker::PlainDot)
    }

    fn run(self) -> TextRun {
        if self.is_bold() {
            TextRun::bold(self.text())
        } else {
            TextRun::new(self.text())
        }
    }
}

/// Builder that appends blocks to a document in call order.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    /// Create a builder over an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set document metadata.
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.doc.metadata = metadata;
        self
    }

    /// Set page margins.
    pub fn margins(mut self, margins: Margins) -> Self {
        self.doc.page_setup = PageSetup::with_margins(margins);
        self
    }

    /// Append the centered document title.
    pub fn title(self, text: &str) -> Self {
        self.paragraph(Paragraph::heading(text, 0).align(Alignment::Center))
    }

    /// Append a heading at `level` (1-6).
    pub fn heading(self, text: &str, level: u8) -> Self {
        debug!("heading h{}: {}", level, text);
        self.paragraph(Paragraph::heading(text, level))
    }

    /// Append a prepared paragraph.
    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.doc.add_paragraph(paragraph);
        self
    }

    /// Append a plain paragraph.
    pub fn text(self, text: &str) -> Self {
        self.paragraph(Paragraph::with_text(text))
    }

    /// Append a centered paragraph made of a single run.
    pub fn centered(self, run: TextRun) -> Self {
        self.paragraph(Paragraph::with_run(run).align(Alignment::Center))
    }

    /// Append an italic paragraph.
    pub fn italic_paragraph(self, text: &str) -> Self {
        self.paragraph(Paragraph::with_run(TextRun::italic(text)))
    }

    /// Append a paragraph made of a bold run.
    pub fn bold_paragraph(self, text: &str) -> Self {
        self.paragraph(Paragraph::with_run(TextRun::bold(text)))
    }

    /// Append a paragraph with a bold label followed by a (possibly
    /// multi-line) value.
    pub fn labeled(self, label: &str, value: &str) -> Self {
        let mut p = Paragraph::with_run(TextRun::bold(label));
        p.add_lines(TextRun::new(value));
        self.paragraph(p)
    }

    /// Append one bullet item per entry, each prefixed with `marker`.
    pub fn bullets<'a>(mut self, marker: Marker, items: impl IntoIterator<Item = &'a str>) -> Self {
        for item in items {
            let mut p = Paragraph::bullet();
            p.add_run(marker.run());
            p.add_text(item);
            self.doc.add_paragraph(p);
        }
        self
    }

    /// Append numbered paragraphs (`1. `, `2. `, ...) with a bold number.
    ///
    /// These are ordinary paragraphs, not list items.
    pub fn numbered_items<'a>(mut self, items: impl IntoIterator<Item = &'a str>) -> Self {
        for (i, item) in items.into_iter().enumerate() {
            let mut p = Paragraph::with_run(TextRun::bold(format!("{}. ", i + 1)));
            p.add_text(item);
            self.doc.add_paragraph(p);
        }
        self
    }

    /// Append a two-column table with bold labels and no header row.
    pub fn label_value_table<'a>(
        mut self,
        rows: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut table = Table::new();
        for (label, value) in rows {
            table.add_row(TableRow::new(vec![
                TableCell::bold(label),
                TableCell::text(value),
            ]));
        }
        self.doc.add_table(table);
        self
    }

    /// Append a grid table with a bold header row.
    ///
    /// With `bold_first_column`, the first cell of every body row is bold.
    pub fn table<'a, R>(
        mut self,
        header: &[&str],
        rows: impl IntoIterator<Item = R>,
        bold_first_column: bool,
    ) -> Self
    where
        R: AsRef<[&'a str]>,
    {
        let mut table = Table::with_header(1);
        table.add_row(TableRow::header(header.iter().copied()));
        for row in rows {
            let cells = row
                .as_ref()
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    if bold_first_column && i == 0 {
                        TableCell::bold(*value)
                    } else {
                        TableCell::text(*value)
                    }
                })
                .collect();
            table.add_row(TableRow::new(cells));
        }
        self.doc.add_table(table);
        self
    }

    /// Append a page break.
    pub fn page_break(mut self) -> Self {
        self.doc.add_page_break();
        self
    }

    /// Finish and return the document.
    pub fn finish(self) -> Document {
        self.doc
    }
}
