use segbar_core::{Rect, SegmentClass, SegmentNode};
use segbar_skin::SegmentedBarSkin;
use segbar_theme::{CellStyle, Theme};
use std::ops::Range;
use tracing::trace;
use unicode_width::UnicodeWidthChar;

/// One character cell of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch:    char,
    /// `None` = not covered by any node.
    pub style: Option<CellStyle>,
    /// Position of the segment class that painted this cell.
    pub class: Option<SegmentClass>,
    /// Right half of a double-width glyph; produces no output of its own.
    pub wide_tail: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', style: None, class: None, wide_tail: false }
    }
}

/// Fixed-size character grid.
///
/// One unit of node geometry maps to one cell. A cell belongs to a node when
/// its centre lies inside the node's bounds, so adjacent nodes never share
/// or skip a cell.
#[derive(Debug, Clone)]
pub struct Canvas {
    width:  u16,
    height: u16,
    cells:  Vec<Cell>,
}

/// Cells whose centre lies in `[start, end)`, clipped to `0..limit`.
fn cell_span(start: f64, end: f64, limit: u16) -> Range<usize> {
    if !(start.is_finite() && end.is_finite()) {
        return 0..0;
    }
    let clip = |v: f64| (v - 0.5).ceil().clamp(0.0, f64::from(limit)) as usize;
    let (lo, hi) = (clip(start), clip(end));
    lo..hi.max(lo)
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Canvas-sized rectangle at the origin.
    pub fn area(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(self.index(usize::from(x), usize::from(y)))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * usize::from(self.width) + x
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Paint every displayed node of `skin` at its current bounds.
    pub fn paint(&mut self, skin: &SegmentedBarSkin, theme: &Theme) {
        for node in skin.registry().nodes() {
            self.paint_node(node, theme);
        }
    }

    fn paint_node(&mut self, node: &dyn SegmentNode, theme: &Theme) {
        let bounds = node.bounds();
        let cols = cell_span(bounds.x, bounds.max_x(), self.width);
        let rows = cell_span(bounds.y, bounds.max_y(), self.height);
        if cols.is_empty() || rows.is_empty() {
            trace!(?bounds, "node covers no cells");
            return;
        }

        let style = theme.style_for(node.style_classes());
        let class = node.style_classes().segment_class();
        for y in rows.clone() {
            for x in cols.clone() {
                let i = self.index(x, y);
                self.cells[i] = Cell { ch: ' ', style: Some(style), class, wide_tail: false };
            }
        }

        if let Some(label) = node.label() {
            let row = rows.start + (rows.len() - 1) / 2;
            self.write_label(label, cols, row);
        }
    }

    /// Centre `label` on `row` within `cols`; labels that do not fit are dropped.
    fn write_label(&mut self, label: &str, cols: Range<usize>, row: usize) {
        let glyphs: Vec<(char, usize)> = label
            .chars()
            .filter_map(|c| c.width().filter(|w| *w > 0).map(|w| (c, w)))
            .collect();
        let width: usize = glyphs.iter().map(|(_, w)| w).sum();
        if width == 0 || width > cols.len() {
            return;
        }

        let mut x = cols.start + (cols.len() - width) / 2;
        for (ch, w) in glyphs {
            let i = self.index(x, row);
            self.cells[i].ch = ch;
            self.cells[i].wide_tail = false;
            for tail in 1..w {
                let j = self.index(x + tail, row);
                self.cells[j].wide_tail = true;
            }
            x += w;
        }
    }

    /// Rows with ANSI colour escapes; uncovered cells use the theme background.
    pub fn to_ansi(&self, theme: &Theme) -> Vec<String> {
        let empty = theme.empty();
        self.rows()
            .map(|row| {
                let mut line = String::new();
                let mut current: Option<CellStyle> = None;
                for cell in row.iter().filter(|c| !c.wide_tail) {
                    let style = cell.style.unwrap_or(empty);
                    if current != Some(style) {
                        line.push_str(&style.ansi());
                        current = Some(style);
                    }
                    line.push(cell.ch);
                }
                if current.is_some() {
                    line.push_str("\x1b[0m");
                }
                line
            })
            .collect()
    }

    /// Rows without colour: each class fills with its own glyph, labels on top.
    pub fn to_plain(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .filter(|c| !c.wide_tail)
                    .map(|cell| match (cell.ch, cell.class, cell.style) {
                        (' ', Some(class), _) => fill_glyph(class),
                        (' ', None, Some(_))  => '+',
                        (' ', None, None)     => '.',
                        (ch, _, _)            => ch,
                    })
                    .collect()
            })
            .collect()
    }

    /// Exactly `height` rows, empty when the canvas has no columns.
    fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let width = usize::from(self.width);
        (0..usize::from(self.height)).map(move |y| &self.cells[y * width..(y + 1) * width])
    }
}

fn fill_glyph(class: SegmentClass) -> char {
    match class {
        SegmentClass::Only   => '=',
        SegmentClass::First  => '#',
        SegmentClass::Middle => '+',
        SegmentClass::Last   => '*',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segbar_core::{BasicSegment, Orientation};
    use segbar_model::{SegmentedBar, Total};
    use segbar_widgets::segment_views;

    fn render(values: &[f64], total: f64, orientation: Orientation, w: u16, h: u16) -> Vec<String> {
        let mut bar = SegmentedBar::new(segment_views::<BasicSegment>(0.0))
            .with_orientation(orientation)
            .with_total(Total::Fixed(total))
            .with_segments(values.iter().map(|&v| BasicSegment::with_text(v, "")));
        let mut skin = SegmentedBarSkin::new(&mut bar);
        let mut canvas = Canvas::new(w, h);
        skin.layout(&bar, canvas.area());
        canvas.paint(&skin, &Theme::default());
        canvas.to_plain()
    }

    #[test]
    fn horizontal_cells_tile_exactly() {
        let rows = render(&[1.0, 1.0, 2.0], 4.0, Orientation::Horizontal, 8, 1);
        assert_eq!(rows, ["##++****"]);
    }

    #[test]
    fn vertical_stacks_from_bottom() {
        let rows = render(&[1.0, 1.0, 2.0], 4.0, Orientation::Vertical, 1, 4);
        assert_eq!(rows, ["*", "*", "+", "#"]);
    }

    #[test]
    fn remainder_stays_empty() {
        let rows = render(&[1.0], 4.0, Orientation::Horizontal, 8, 1);
        assert_eq!(rows, ["==......"]);
    }

    #[test]
    fn label_is_centred() {
        let mut bar = SegmentedBar::new(segment_views::<BasicSegment>(0.0))
            .with_segments([BasicSegment::with_text(1.0, "ab")]);
        let mut skin = SegmentedBarSkin::new(&mut bar);
        let mut canvas = Canvas::new(6, 3);
        skin.layout(&bar, canvas.area());
        canvas.paint(&skin, &Theme::default());
        assert_eq!(canvas.to_plain(), ["======", "==ab==", "======"]);
    }

    #[test]
    fn out_of_bounds_nodes_are_clipped() {
        let rows = render(&[1.0, 1.0], 1.0, Orientation::Horizontal, 4, 1);
        // Second segment starts at the right edge and is clipped away.
        assert_eq!(rows, ["####"]);
        assert_eq!(cell_span(-5.0, 2.0, 4), 0..2);
        assert_eq!(cell_span(f64::NAN, 2.0, 4), 0..0);
        assert_eq!(cell_span(3.0, 1.0, 4), 3..3);
    }

    #[test]
    fn ansi_rows_reset_colour() {
        let mut canvas = Canvas::new(2, 1);
        canvas.clear();
        let rows = canvas.to_ansi(&Theme::default());
        assert!(rows[0].ends_with("\x1b[0m"));
        assert!(rows[0].contains("\x1b[48;2;"));
    }

    #[test]
    fn zero_width_keeps_row_count() {
        let canvas = Canvas::new(0, 3);
        assert_eq!(canvas.to_plain(), ["", "", ""]);
        assert_eq!(canvas.to_ansi(&Theme::default()), ["", "", ""]);
    }
}
