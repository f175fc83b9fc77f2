//! Bullet numbering definitions for list paragraphs.

use docx_rs::{
    AbstractNumbering, Docx, Level, LevelJc, LevelText, NumberFormat, Numbering, SpecialIndentType,
    Start,
};

const BULLET_GLYPHS: [&str; 3] = ["•", "○", "▪"];

/// List numbering management for DOCX
#[derive(Clone, Debug)]
pub struct DocxNumbering {
    next_id: usize,
    bullet_id: Option<usize>,
}

impl Default for DocxNumbering {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxNumbering {
    /// Create a new numbering manager
    pub fn new() -> Self {
        Self {
            next_id: 1,
            bullet_id: None,
        }
    }

    fn create_list_level(id: usize, glyph: &str) -> Level {
        let indent_size = 720 * (id + 1) as i32;

        Level::new(
            id,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new(glyph),
            LevelJc::new("left"),
        )
        .indent(
            Some(indent_size),
            Some(SpecialIndentType::Hanging(360)),
            None,
            None,
        )
    }

    /// Numbering id of the shared bullet list, if one was created.
    pub fn bullet_id(&self) -> Option<usize> {
        self.bullet_id
    }

    /// Return the shared bullet numbering id, registering its definition on
    /// first use.
    ///
    /// Every bullet list in the document shares this one definition.
    pub fn ensure_bullet_numbering(&mut self, docx: Docx) -> (Docx, usize) {
        if let Some(id) = self.bullet_id {
            return (docx, id);
        }

        let id = self.next_id;
        self.next_id += 1;

        let bullet_abstract = BULLET_GLYPHS
            .iter()
            .enumerate()
            .fold(AbstractNumbering::new(id), |abs, (level, glyph)| {
                abs.add_level(Self::create_list_level(level, glyph))
            });

        let docx = docx
            .add_abstract_numbering(bullet_abstract)
            .add_numbering(Numbering::new(id, id));

        self.bullet_id = Some(id);
        (docx, id)
    }
}
