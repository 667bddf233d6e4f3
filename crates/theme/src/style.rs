use crate::colors::Color;
use serde::Serialize;

/// Colours used to draw one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellStyle {
    pub foreground: Color,
    pub background: Color,
}

impl CellStyle {
    pub fn new(foreground: Color, background: Color) -> Self {
        Self { foreground, background }
    }

    /// ANSI escape selecting both colours.
    pub fn ansi(&self) -> String {
        format!("{}{}", self.foreground.ansi_fg(), self.background.ansi_bg())
    }
}
