use std::str::FromStr;

use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Gradient palettes for ranked bar charts
// ---------------------------------------------------------------------------

/// Sequential / diverging colour maps used by the bar charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    Viridis,
    Coolwarm,
}

impl Gradient {
    fn stops(self) -> &'static [&'static str] {
        match self {
            Gradient::Viridis => &["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"],
            Gradient::Coolwarm => &["#3b4cc0", "#dddddd", "#b40426"],
        }
    }

    /// Sample the gradient at `t` in `[0, 1]`, interpolating in linear RGB.
    pub fn sample(self, t: f32) -> Color32 {
        let stops: Vec<LinSrgb> = self
            .stops()
            .iter()
            .filter_map(|hex| Srgb::<u8>::from_str(hex).ok())
            .map(|c| c.into_format::<f32>().into_linear())
            .collect();
        if stops.is_empty() {
            return FALLBACK_COLOR;
        }

        let t = t.clamp(0.0, 1.0);
        let span = (stops.len() - 1) as f32;
        let pos = t * span;
        let lo = (pos.floor() as usize).min(stops.len() - 1);
        let hi = (lo + 1).min(stops.len() - 1);
        let mixed = stops[lo].mix(stops[hi], pos - lo as f32);

        let rgb: Srgb<u8> = Srgb::<f32>::from_linear(mixed).into_format();
        Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

/// Generates `n` colours evenly spaced along a gradient.
pub fn gradient_palette(gradient: Gradient, n: usize) -> Vec<Color32> {
    match n {
        0 => Vec::new(),
        1 => vec![gradient.sample(0.5)],
        _ => (0..n)
            .map(|i| gradient.sample(i as f32 / (n - 1) as f32))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Car colour name → swatch
// ---------------------------------------------------------------------------

/// Neutral grey for colour names the lookup does not know.
pub const FALLBACK_HEX: &str = "#95a5a6";

const FALLBACK_COLOR: Color32 = Color32::from_rgb(0x95, 0xa5, 0xa6);

/// Fixed swatches for the common listing colours. Keys are lower-case.
const COLOR_NAMES: &[(&str, &str)] = &[
    ("white", "#9b59b6"),
    ("black", "#34495e"),
    ("red", "#e74c3c"),
    ("blue", "#3498db"),
    ("grey", "#7f8c8d"),
    ("silver", "#bdc3c7"),
    ("green", "#27ae60"),
    ("yellow", "#f1c40f"),
    ("brown", "#8e44ad"),
    ("purple", "#9b59b6"),
    ("orange", "#e67e22"),
    ("gold", "#f39c12"),
];

/// Case-insensitive lookup of the swatch hex for a car colour name.
pub fn hex_for_color_name(name: &str) -> &'static str {
    let key = name.to_lowercase();
    COLOR_NAMES
        .iter()
        .find(|(n, _)| *n == key)
        .map_or(FALLBACK_HEX, |(_, hex)| hex)
}

/// Parse a `#rrggbb` string into a `Color32`.
pub fn color_from_hex(hex: &str) -> Color32 {
    Srgb::<u8>::from_str(hex)
        .map(|c| Color32::from_rgb(c.red, c.green, c.blue))
        .unwrap_or(FALLBACK_COLOR)
}
