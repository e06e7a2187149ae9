use eframe::egui::Color32;

/// One histogram bin, `[start, end)` except the last which is closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// A labelled category bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub fill: Color32,
    /// Text drawn just above the bar, if any.
    pub annotation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    /// Binned counts with a KDE curve already scaled to counts.
    Histogram {
        bins: Vec<HistogramBin>,
        density: Vec<[f64; 2]>,
        color: Color32,
    },
    /// Ranked bars, first bar on top.
    HorizontalBars { bars: Vec<Bar> },
    /// Connected points with markers, x ascending.
    Line { points: Vec<[f64; 2]>, color: Color32 },
    /// Ranked bars, first bar on the left, drawn on a tinted background.
    VerticalBars { bars: Vec<Bar>, background: Color32 },
}

/// Everything needed to draw one analysis, independent of the UI toolkit's
/// plot types.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub header: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub kind: ChartKind,
}
