//! Style definitions written into the DOCX package.

use docx_rs::{AlignmentType, Docx, RunFonts, Style, StyleType};

use super::RenderOptions;
use crate::model::TableStyle;

/// Style id of the document title.
pub const TITLE_STYLE: &str = "Title";

/// Style id of bulleted list paragraphs.
pub const LIST_BULLET_STYLE: &str = "ListBullet";

/// Style id of bordered tables.
pub const TABLE_GRID_STYLE: &str = "TableGrid";

const HEADING_COLOR: &str = "1F3864";

/// Style id for a heading level; level 0 is the title.
pub fn heading_style_id(level: u8) -> String {
    match level {
        0 => TITLE_STYLE.to_string(),
        n => format!("Heading{}", n.min(6)),
    }
}

/// Style id for a table style.
pub fn table_style_id(style: TableStyle) -> &'static str {
    match style {
        TableStyle::Grid => TABLE_GRID_STYLE,
    }
}

/// Document style management
#[derive(Clone, Debug, Default)]
pub struct DocxStyles {
    initialized: bool,
}

impl DocxStyles {
    /// Create a new style manager
    pub fn new() -> Self {
        Self::default()
    }

    fn create_heading_style(level: u8, size: usize) -> Style {
        Style::new(heading_style_id(level), StyleType::Paragraph)
            .name(format!("Heading {}", level))
            .size(size)
            .color(HEADING_COLOR)
            .bold()
    }

    /// Register document defaults and every style the renderer references.
    pub fn initialize_styles(&mut self, docx: Docx, options: &RenderOptions) -> Docx {
        if self.initialized {
            return docx;
        }
        self.initialized = true;

        let fonts = RunFonts::new()
            .ascii(&options.font_family)
            .hi_ansi(&options.font_family)
            .east_asia(&options.font_family)
            .cs(&options.font_family);

        let title = Style::new(TITLE_STYLE, StyleType::Paragraph)
            .name("Title")
            .size(56)
            .color(HEADING_COLOR)
            .align(AlignmentType::Center);

        let list_bullet = Style::new(LIST_BULLET_STYLE, StyleType::Paragraph)
            .name("List Bullet")
            .indent(Some(360), None, None, None);

        let table_grid = Style::new(TABLE_GRID_STYLE, StyleType::Table).name("Table Grid");

        let docx = docx
            .default_fonts(fonts)
            .default_size(options.font_size)
            .add_style(title)
            .add_style(list_bullet)
            .add_style(table_grid);

        [(1, 32), (2, 26), (3, 24), (4, 22), (5, 22), (6, 22)]
            .into_iter()
            .fold(docx, |docx, (level, size)| {
                docx.add_style(Self::create_heading_style(level, size))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_ids() {
        assert_eq!(heading_style_id(0), "Title");
        assert_eq!(heading_style_id(1), "Heading1");
        assert_eq!(heading_style_id(3), "Heading3");
        assert_eq!(heading_style_id(9), "Heading6");
    }

    #[test]
    fn test_table_style_ids() {
        assert_eq!(table_style_id(TableStyle::Grid), TABLE_GRID_STYLE);
        assert_eq!(table_style_id(crate::model::Table::new().style), "TableGrid");
    }

    #[test]
    fn test_styles_initialize_once() {
        let mut styles = DocxStyles::new();
        let options = RenderOptions::default();
        let docx = styles.initialize_styles(Docx::new(), &options);
        assert!(styles.initialized);
        let _docx = styles.initialize_styles(docx, &options);
    }
}
