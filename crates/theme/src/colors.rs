use serde::Serialize;

/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const CRUST:    Self = Self { r: 0.067, g: 0.067, b: 0.106, a: 1.0 }; // #11111b
    pub const SURFACE:  Self = Self { r: 0.192, g: 0.196, b: 0.267, a: 1.0 }; // #313244
    pub const MAUVE:    Self = Self { r: 0.796, g: 0.651, b: 0.969, a: 1.0 }; // #cba6f7
    pub const BLUE:     Self = Self { r: 0.537, g: 0.706, b: 0.980, a: 1.0 }; // #89b4fa
    pub const GREEN:    Self = Self { r: 0.651, g: 0.890, b: 0.631, a: 1.0 }; // #a6e3a1
    pub const RED:      Self = Self { r: 0.953, g: 0.545, b: 0.659, a: 1.0 }; // #f38ba8

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
            _ => None,
        }
    }

    /// 8-bit channels, alpha premultiplied against black.
    #[inline]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c * self.a * 255.0).round().clamp(0.0, 255.0) as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// ANSI 24-bit foreground escape.
    pub fn ansi_fg(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("\x1b[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape.
    pub fn ansi_bg(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("\x1b[48;2;{r};{g};{b}m")
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}
