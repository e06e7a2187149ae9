use std::ops::RangeInclusive;

use eframe::egui::{self, Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{
    Bar as PlotBar, BarChart, GridInput, GridMark, Line, MarkerShape, Plot, PlotPoint, PlotPoints,
    Points, Text,
};

use crate::analysis::chart::{Bar, HistogramBin};
use crate::analysis::{Analysis, Chart, ChartKind};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart column (left)
// ---------------------------------------------------------------------------

/// Render the active chart in the left column.
pub fn chart_column(ui: &mut Ui, state: &AppState) {
    let Some(display) = &state.display else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No hay ningún análisis disponible");
        });
        return;
    };

    let chart = &display.chart;
    let id = display.analysis;
    ui.heading(chart.header);
    ui.add_space(4.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(chart.title).strong());
    });

    match &chart.kind {
        ChartKind::Histogram {
            bins,
            density,
            color,
        } => histogram(ui, id, chart, bins, density, *color),
        ChartKind::HorizontalBars { bars } => horizontal_bars(ui, id, chart, bars),
        ChartKind::Line { points, color } => line(ui, id, chart, points, *color),
        ChartKind::VerticalBars { bars, background } => {
            egui::Frame::default()
                .fill(*background)
                .inner_margin(6.0)
                .show(ui, |ui: &mut Ui| vertical_bars(ui, id, chart, bars));
        }
    }
}

/// Plot memory (zoom, pan) is keyed per analysis.
fn base_plot(id: Analysis, chart: &Chart) -> Plot<'static> {
    Plot::new(("analysis_plot", id))
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label)
        .view_aspect(1.6)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
}

fn histogram(
    ui: &mut Ui,
    id: Analysis,
    chart: &Chart,
    bins: &[HistogramBin],
    density: &[[f64; 2]],
    color: Color32,
) {
    let bars: Vec<PlotBar> = bins
        .iter()
        .map(|b| {
            PlotBar::new(b.center(), b.count as f64)
                .width(b.width())
                .fill(color.gamma_multiply(0.8))
                .stroke(Stroke::new(1.0, Color32::WHITE))
                .name(format!("{:.0} – {:.0}", b.start, b.end))
        })
        .collect();

    base_plot(id, chart).include_y(0.0).show(ui, |plot_ui| {
        plot_ui.bar_chart(BarChart::new(bars).color(color));
        if !density.is_empty() {
            let curve: PlotPoints = density.iter().copied().collect();
            plot_ui.line(Line::new(curve).color(color).width(2.0));
        }
    });
}

fn horizontal_bars(ui: &mut Ui, id: Analysis, chart: &Chart, bars: &[Bar]) {
    let n = bars.len();
    // Rank 1 is drawn at the top.
    let plot_bars: Vec<PlotBar> = bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            PlotBar::new((n - 1 - i) as f64, b.value)
                .width(0.8)
                .fill(b.fill)
                .name(&b.label)
        })
        .collect();

    let labels: Vec<String> = bars.iter().rev().map(|b| b.label.clone()).collect();

    base_plot(id, chart)
        .include_x(0.0)
        .y_grid_spacer(unit_spacer)
        .y_axis_formatter(category_formatter(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(plot_bars).horizontal());
        });
}

fn line(ui: &mut Ui, id: Analysis, chart: &Chart, points: &[[f64; 2]], color: Color32) {
    base_plot(id, chart)
        .x_grid_spacer(unit_spacer)
        .show(ui, |plot_ui| {
            let series: PlotPoints = points.iter().copied().collect();
            plot_ui.line(Line::new(series).color(color).width(2.0));

            let markers: PlotPoints = points.iter().copied().collect();
            plot_ui.points(
                Points::new(markers)
                    .shape(MarkerShape::Circle)
                    .radius(4.0)
                    .filled(true)
                    .color(color),
            );
        });
}

fn vertical_bars(ui: &mut Ui, id: Analysis, chart: &Chart, bars: &[Bar]) {
    let plot_bars: Vec<PlotBar> = bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            PlotBar::new(i as f64, b.value)
                .width(0.8)
                .fill(b.fill)
                .stroke(Stroke::new(1.0, Color32::BLACK))
                .name(&b.label)
        })
        .collect();

    let max = bars.iter().map(|b| b.value).fold(0.0, f64::max);
    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();

    base_plot(id, chart)
        .include_y(0.0)
        .include_y(max * 1.1)
        .x_grid_spacer(unit_spacer)
        .x_axis_formatter(category_formatter(labels))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(plot_bars));
            for (i, b) in bars.iter().enumerate() {
                if let Some(annotation) = &b.annotation {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(i as f64, b.value),
                            RichText::new(annotation).color(Color32::BLACK),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            }
        });
}

/// Upper bound on marks produced by [`unit_spacer`] for one axis.
const MAX_GRID_MARKS: f64 = 100.0;

/// Grid marks on every integer, used for categorical axes. Once zoomed out
/// past [`MAX_GRID_MARKS`] integers the step grows by powers of ten.
fn unit_spacer(input: GridInput) -> Vec<GridMark> {
    let (lo, hi) = input.bounds;
    if !lo.is_finite() || !hi.is_finite() || hi < lo {
        return Vec::new();
    }

    let mut step = 1.0;
    while (hi - lo) / step > MAX_GRID_MARKS {
        step *= 10.0;
    }

    let start = (lo / step).ceil() as i64;
    let end = (hi / step).floor() as i64;
    (start..=end)
        .map(|k| GridMark {
            value: k as f64 * step,
            step_size: step,
        })
        .collect()
}

/// Map integer axis positions onto category labels.
fn category_formatter(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let v = mark.value;
        if v.fract() != 0.0 || v < 0.0 {
            return String::new();
        }
        labels.get(v as usize).cloned().unwrap_or_default()
    }
}
