use eframe::egui::Color32;

use crate::color::{color_from_hex, gradient_palette, hex_for_color_name, Gradient};
use crate::data::filter::rows_at_least;
use crate::data::model::ListingTable;
use crate::error::SchemaError;

use super::aggregate::{group_mean, histogram, kde_curve, sort_descending, value_counts, OrdF64};
use super::chart::{Bar, Chart, ChartKind};
use super::{Analysis, Renderer};

pub const PRICE: &str = "price";
pub const YEAR: &str = "year";
pub const STATE: &str = "state";
pub const BRAND: &str = "brand";
pub const COLOR: &str = "color";

const PRICE_BINS: usize = 20;
const KDE_POINTS: usize = 200;
const TOP_N: usize = 10;
const FIRST_YEAR: f64 = 2000.0;

const SKY_BLUE: Color32 = Color32::from_rgb(0x87, 0xce, 0xeb);
const LINE_GREEN: Color32 = Color32::from_rgb(0x00, 0x80, 0x00);
const BEIGE: Color32 = Color32::from_rgb(0xf5, 0xf5, 0xdc);

// ---------------------------------------------------------------------------
// Price distribution
// ---------------------------------------------------------------------------

pub struct PriceDistribution;

impl Renderer for PriceDistribution {
    fn analysis(&self) -> Analysis {
        Analysis::PriceDistribution
    }

    fn compute(&self, table: &ListingTable) -> Result<Chart, SchemaError> {
        let prices: Vec<f64> = table
            .numeric(PRICE)?
            .iter()
            .flatten()
            .copied()
            .filter(|p| p.is_finite())
            .collect();

        let bins = histogram(&prices, PRICE_BINS);
        let density = bins
            .first()
            .map(|b| kde_curve(&prices, KDE_POINTS, b.width()))
            .unwrap_or_default();

        Ok(Chart {
            header: "Distribución de Precios",
            title: "Distribución de Precios",
            x_label: "Precio ($)",
            y_label: "Frecuencia",
            kind: ChartKind::Histogram {
                bins,
                density,
                color: SKY_BLUE,
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Vehicles by state
// ---------------------------------------------------------------------------

pub struct VehiclesByState;

impl Renderer for VehiclesByState {
    fn analysis(&self) -> Analysis {
        Analysis::VehiclesByState
    }

    fn compute(&self, table: &ListingTable) -> Result<Chart, SchemaError> {
        let mut counts = value_counts(&table.labels(STATE)?);
        counts.truncate(TOP_N);

        Ok(Chart {
            header: "Vehículos por Estado",
            title: "Vehículos por Estado (Top 10)",
            x_label: "Cantidad",
            y_label: "Estado",
            kind: ChartKind::HorizontalBars {
                bars: ranked_bars(
                    counts.into_iter().map(|(s, n)| (s, n as f64)),
                    Gradient::Viridis,
                ),
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Average price by year
// ---------------------------------------------------------------------------

pub struct AvgPriceByYear;

impl Renderer for AvgPriceByYear {
    fn analysis(&self) -> Analysis {
        Analysis::AvgPriceByYear
    }

    fn compute(&self, table: &ListingTable) -> Result<Chart, SchemaError> {
        let years = table.numeric(YEAR)?;
        let prices = table.numeric(PRICE)?;
        let recent = rows_at_least(table, YEAR, FIRST_YEAR)?;

        let means = group_mean(
            recent
                .into_iter()
                .map(|i| (years[i].map(OrdF64), prices[i])),
        );

        Ok(Chart {
            header: "Precio Promedio por Año (Desde 2000)",
            title: "Precio Promedio por Año (Desde 2000)",
            x_label: "Año",
            y_label: "Precio Promedio ($)",
            kind: ChartKind::Line {
                points: means.into_iter().map(|(y, p)| [y.0, p]).collect(),
                color: LINE_GREEN,
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Average price by brand
// ---------------------------------------------------------------------------

pub struct AvgPriceByBrand;

impl Renderer for AvgPriceByBrand {
    fn analysis(&self) -> Analysis {
        Analysis::AvgPriceByBrand
    }

    fn compute(&self, table: &ListingTable) -> Result<Chart, SchemaError> {
        let brands = table.labels(BRAND)?;
        let prices = table.numeric(PRICE)?;

        let mut means = group_mean(brands.into_iter().zip(prices.iter().copied()));
        sort_descending(&mut means);
        means.truncate(TOP_N);

        Ok(Chart {
            header: "Precio Promedio por Marca",
            title: "Precio Promedio por Marca (Top 10)",
            x_label: "Precio Promedio ($)",
            y_label: "Marca",
            kind: ChartKind::HorizontalBars {
                bars: ranked_bars(means, Gradient::Coolwarm),
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Top colours
// ---------------------------------------------------------------------------

pub struct TopColors;

impl Renderer for TopColors {
    fn analysis(&self) -> Analysis {
        Analysis::TopColors
    }

    fn compute(&self, table: &ListingTable) -> Result<Chart, SchemaError> {
        let mut counts = value_counts(&table.labels(COLOR)?);
        counts.truncate(TOP_N);

        let bars = counts
            .into_iter()
            .map(|(name, n)| Bar {
                fill: color_from_hex(hex_for_color_name(&name)),
                annotation: Some(n.to_string()),
                value: n as f64,
                label: name,
            })
            .collect();

        Ok(Chart {
            header: "Colores de Coches Más Vendidos",
            title: "Distribución de Colores de Coches Más Vendidos (Top 10)",
            x_label: "Color",
            y_label: "Cantidad",
            kind: ChartKind::VerticalBars {
                bars,
                background: BEIGE,
            },
        })
    }
}

/// Colour ranked rows along a gradient, first row at the start.
fn ranked_bars(rows: impl IntoIterator<Item = (String, f64)>, gradient: Gradient) -> Vec<Bar> {
    let rows: Vec<(String, f64)> = rows.into_iter().collect();
    let palette = gradient_palette(gradient, rows.len());
    rows.into_iter()
        .zip(palette)
        .map(|((label, value), fill)| Bar {
            label,
            value,
            fill,
            annotation: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Column, ColumnData};

    fn text(name: &str, cells: &[&str]) -> Column {
        Column {
            name: name.into(),
            data: ColumnData::Text(cells.iter().map(|s| Some(s.to_string())).collect()),
        }
    }

    fn numbers(name: &str, cells: &[f64]) -> Column {
        Column {
            name: name.into(),
            data: ColumnData::Numeric(cells.iter().map(|&v| Some(v)).collect()),
        }
    }

    fn bars(chart: &Chart) -> &[Bar] {
        match &chart.kind {
            ChartKind::HorizontalBars { bars } | ChartKind::VerticalBars { bars, .. } => bars,
            other => panic!("expected bars, got {other:?}"),
        }
    }

    #[test]
    fn states_ranked_by_count() {
        let mut states = vec!["CA"; 5];
        states.extend(["TX"; 3]);
        states.extend(["FL"; 3]);
        states.push("NY");
        let table = ListingTable::from_columns(vec![text(STATE, &states)]);

        let chart = VehiclesByState.compute(&table).unwrap();
        let ranking: Vec<(&str, f64)> = bars(&chart)
            .iter()
            .map(|b| (b.label.as_str(), b.value))
            .collect();
        assert_eq!(
            ranking,
            vec![("CA", 5.0), ("TX", 3.0), ("FL", 3.0), ("NY", 1.0)]
        );
    }

    #[test]
    fn states_beyond_top_ten_are_dropped() {
        let names: Vec<String> = (0..15).map(|i| format!("S{i:02}")).collect();
        let cells: Vec<&str> = names.iter().map(String::as_str).collect();
        let table = ListingTable::from_columns(vec![text(STATE, &cells)]);

        let chart = VehiclesByState.compute(&table).unwrap();
        assert_eq!(bars(&chart).len(), 10);
    }

    #[test]
    fn yearly_average_starts_in_2000() {
        let table = ListingTable::from_columns(vec![
            numbers(YEAR, &[1999.0, 2000.0, 2001.0, 2001.0]),
            numbers(PRICE, &[100.0, 200.0, 300.0, 500.0]),
        ]);

        let chart = AvgPriceByYear.compute(&table).unwrap();
        match chart.kind {
            ChartKind::Line { points, .. } => {
                assert_eq!(points, vec![[2000.0, 200.0], [2001.0, 400.0]]);
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn brands_sorted_by_mean_price() {
        let table = ListingTable::from_columns(vec![
            text(BRAND, &["ford", "bmw", "ford", "kia"]),
            numbers(PRICE, &[10.0, 50.0, 20.0, 5.0]),
        ]);

        let chart = AvgPriceByBrand.compute(&table).unwrap();
        let ranking: Vec<(&str, f64)> = bars(&chart)
            .iter()
            .map(|b| (b.label.as_str(), b.value))
            .collect();
        assert_eq!(ranking, vec![("bmw", 50.0), ("ford", 15.0), ("kia", 5.0)]);
    }

    #[test]
    fn colors_use_fixed_swatches_and_count_labels() {
        let mut colors = vec!["White"; 4];
        colors.extend(["black"; 3]);
        colors.extend(["mauve"; 2]);
        let table = ListingTable::from_columns(vec![text(COLOR, &colors)]);

        let chart = TopColors.compute(&table).unwrap();
        let bars = bars(&chart);

        let fills: Vec<Color32> = bars.iter().map(|b| b.fill).collect();
        assert_eq!(
            fills,
            vec![
                color_from_hex("#9b59b6"),
                color_from_hex("#34495e"),
                color_from_hex("#95a5a6"),
            ]
        );
        let labels: Vec<Option<&str>> = bars.iter().map(|b| b.annotation.as_deref()).collect();
        assert_eq!(labels, vec![Some("4"), Some("3"), Some("2")]);
    }

    #[test]
    fn price_histogram_skips_missing() {
        let table = ListingTable::from_columns(vec![Column {
            name: PRICE.into(),
            data: ColumnData::Numeric(vec![Some(1000.0), None, Some(3000.0), Some(2000.0)]),
        }]);

        let chart = PriceDistribution.compute(&table).unwrap();
        match chart.kind {
            ChartKind::Histogram { bins, density, .. } => {
                assert_eq!(bins.len(), 20);
                assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
                assert_eq!(density.len(), 200);
            }
            other => panic!("expected a histogram, got {other:?}"),
        }
    }

    #[test]
    fn missing_brand_fails_only_brand_analysis() {
        let table = ListingTable::from_columns(vec![
            numbers(PRICE, &[100.0, 200.0]),
            numbers(YEAR, &[2005.0, 2010.0]),
            text(STATE, &["texas", "ohio"]),
            text(COLOR, &["red", "blue"]),
        ]);

        for analysis in Analysis::ALL {
            let result = analysis.renderer().compute(&table);
            if analysis == Analysis::AvgPriceByBrand {
                assert_eq!(
                    result.unwrap_err(),
                    SchemaError::MissingColumn {
                        column: BRAND.into()
                    }
                );
            } else {
                assert!(result.is_ok(), "{analysis:?} failed: {result:?}");
            }
        }
    }

    #[test]
    fn recomputing_gives_identical_chart() {
        let table = ListingTable::from_columns(vec![
            numbers(PRICE, &[100.0, 250.0, 175.0]),
            text(COLOR, &["red", "red", "silver"]),
        ]);
        for analysis in [Analysis::PriceDistribution, Analysis::TopColors] {
            let first = analysis.renderer().compute(&table).unwrap();
            let second = analysis.renderer().compute(&table).unwrap();
            assert_eq!(first, second);
        }
    }
}
