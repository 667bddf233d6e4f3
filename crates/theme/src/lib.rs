pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::CellStyle;

use segbar_config::ThemeConfig;
use segbar_core::{SegmentClass, StyleClasses};

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub only:       Color,
    pub first:      Color,
    pub middle:     Color,
    pub last:       Color,
    pub foreground: Color,
    pub background: Color,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            only:       Color::from_hex(&cfg.only).unwrap_or(Color::MAUVE),
            first:      Color::from_hex(&cfg.first).unwrap_or(Color::BLUE),
            middle:     Color::from_hex(&cfg.middle).unwrap_or(Color::GREEN),
            last:       Color::from_hex(&cfg.last).unwrap_or(Color::RED),
            foreground: Color::from_hex(&cfg.foreground).unwrap_or(Color::CRUST),
            background: Color::from_hex(&cfg.background).unwrap_or(Color::SURFACE),
        }
    }

    pub fn fill(&self, class: SegmentClass) -> Color {
        match class {
            SegmentClass::Only   => self.only,
            SegmentClass::First  => self.first,
            SegmentClass::Middle => self.middle,
            SegmentClass::Last   => self.last,
        }
    }

    /// Cell style for a node carrying `classes`; unclassified nodes use the
    /// middle colour.
    pub fn style_for(&self, classes: &StyleClasses) -> CellStyle {
        let fill = self.fill(classes.segment_class().unwrap_or(SegmentClass::Middle));
        CellStyle::new(self.foreground, fill)
    }

    /// Style of cells no node covers.
    pub fn empty(&self) -> CellStyle {
        CellStyle::new(self.foreground, self.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
