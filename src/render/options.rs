//! Rendering options and configuration.

/// Options for rendering a document to DOCX.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Default font family for body text
    pub font_family: String,

    /// Default font size in half-points (22 = 11pt)
    pub font_size: usize,

    /// Attach a bullet numbering definition to list items
    pub list_numbering: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the default font size in points.
    pub fn with_font_size_pt(mut self, points: usize) -> Self {
        self.font_size = points.clamp(1, 1638) * 2;
        self
    }

    /// Enable or disable bullet numbering for list items.
    ///
    /// When disabled, list items keep the "List Bullet" paragraph style
    /// but carry no numbering reference.
    pub fn with_list_numbering(mut self, enabled: bool) -> Self {
        self.list_numbering = enabled;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            font_size: 22,
            list_numbering: true,
        }
    }
}
