//! Page geometry.

/// Twips per inch (1 twip = 1/20 point).
pub const TWIPS_PER_INCH: i32 = 1440;

/// Page setup applied to the single document section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSetup {
    /// Page margins
    pub margins: Margins,
}

impl PageSetup {
    /// Create a page setup with the given margins.
    pub fn with_margins(margins: Margins) -> Self {
        Self { margins }
    }
}

/// Page margins in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    /// Top margin
    pub top: i32,
    /// Right margin
    pub right: i32,
    /// Bottom margin
    pub bottom: i32,
    /// Left margin
    pub left: i32,
}

impl Margins {
    /// Create margins from inch values.
    pub fn inches(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top: to_twips(top),
            right: to_twips(right),
            bottom: to_twips(bottom),
            left: to_twips(left),
        }
    }
}

impl Default for Margins {
    /// Word's default: one inch on every side.
    fn default() -> Self {
        Self::inches(1.0, 1.0, 1.0, 1.0)
    }
}

fn to_twips(inches: f32) -> i32 {
    (inches * TWIPS_PER_INCH as f32).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_from_inches() {
        let margins = Margins::inches(1.0, 1.25, 1.0, 1.25);
        assert_eq!(margins.top, 1440);
        assert_eq!(margins.bottom, 1440);
        assert_eq!(margins.left, 1800);
        assert_eq!(margins.right, 1800);
    }

    #[test]
    fn test_default_margins() {
        let setup = PageSetup::default();
        assert_eq!(setup.margins.left, TWIPS_PER_INCH);
    }
}
