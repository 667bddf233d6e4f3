use segbar_core::{BasicSegment, Orientation};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `segbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Orientation, total and node settings.
    pub bar: BarSection,
    /// Segments in display order.
    pub segments: Vec<SegmentConfig>,
    /// Output surface settings.
    pub render: RenderConfig,
    /// Colours per segment position.
    pub theme: ThemeConfig,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            bar: BarSection::default(),
            segments: vec![
                SegmentConfig::new(1.0, Some("one")),
                SegmentConfig::new(1.0, Some("two")),
                SegmentConfig::new(2.0, Some("three")),
            ],
            render: RenderConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl BarConfig {
    /// The configured segments as model segments.
    pub fn basic_segments(&self) -> Vec<BasicSegment> {
        self.segments
            .iter()
            .map(|s| BasicSegment { value: s.value, text: s.text.clone() })
            .collect()
    }
}

/// Bar-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSection {
    pub orientation: Orientation,
    /// Declared denominator. Unset = sum of segment values.
    pub total: Option<f64>,
    /// Inner padding of each segment view (cells).
    pub padding: f64,
    /// Give zero-valued segments no node at all.
    pub hide_empty: bool,
}

impl Default for BarSection {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            total:       None,
            padding:     0.0,
            hide_empty:  false,
        }
    }
}

/// Config block for one segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    pub value: f64,
    /// Optional label; the value is shown when absent.
    #[serde(default)]
    pub text: Option<String>,
}

impl SegmentConfig {
    pub fn new(value: f64, text: Option<&str>) -> Self {
        Self { value, text: text.map(str::to_string) }
    }
}

/// How the demo binary prints the laid-out bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured terminal cells.
    #[default]
    Text,
    /// Uncoloured characters, one glyph per classification.
    Plain,
    /// JSON placement report.
    Json,
}

/// Output surface settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Surface width in cells.
    pub width: u16,
    /// Surface height in cells.
    pub height: u16,
    /// Border inset between the surface edge and the content rectangle.
    pub inset: u16,
    pub format: OutputFormat,
    /// Re-render whenever the config file changes.
    pub watch: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width:  60,
            height: 3,
            inset:  0,
            format: OutputFormat::Text,
            watch:  false,
        }
    }
}

/// Colour configuration (hex strings, `#RRGGBB` or `#RRGGBBAA`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub only:       String,
    pub first:      String,
    pub middle:     String,
    pub last:       String,
    /// Label colour.
    pub foreground: String,
    /// Colour of cells no segment covers.
    pub background: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            only:       "#cba6f7".to_string(), // Catppuccin Mocha — mauve
            first:      "#89b4fa".to_string(), // Catppuccin Mocha — blue
            middle:     "#a6e3a1".to_string(), // Catppuccin Mocha — green
            last:       "#f38ba8".to_string(), // Catppuccin Mocha — red
            foreground: "#11111b".to_string(), // Catppuccin Mocha — crust
            background: "#313244".to_string(), // Catppuccin Mocha — surface0
        }
    }
}
