//! The five descriptive analyses offered by the dashboard.
//!
//! Each analysis is a [`Renderer`]: it aggregates the loaded
//! [`ListingTable`] into a [`Chart`] and carries a fixed narrative. The UI
//! picks one through [`Analysis::renderer`] and draws whatever comes back.

pub mod aggregate;
pub mod chart;
pub mod narrative;
pub mod renderers;

use std::fmt;

use crate::data::model::ListingTable;
use crate::error::SchemaError;

pub use chart::{Chart, ChartKind};

/// The analysis currently selected in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Analysis {
    #[default]
    PriceDistribution,
    VehiclesByState,
    AvgPriceByYear,
    AvgPriceByBrand,
    TopColors,
}

impl Analysis {
    /// Menu order.
    pub const ALL: [Analysis; 5] = [
        Analysis::PriceDistribution,
        Analysis::VehiclesByState,
        Analysis::AvgPriceByYear,
        Analysis::AvgPriceByBrand,
        Analysis::TopColors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Analysis::PriceDistribution => "Distribución de Precios",
            Analysis::VehiclesByState => "Vehículos por Estado",
            Analysis::AvgPriceByYear => "Precio Promedio por Año",
            Analysis::AvgPriceByBrand => "Precio Promedio por Marca",
            Analysis::TopColors => "Colores de Coches Más Vendidos",
        }
    }

    pub fn renderer(self) -> &'static dyn Renderer {
        match self {
            Analysis::PriceDistribution => &renderers::PriceDistribution,
            Analysis::VehiclesByState => &renderers::VehiclesByState,
            Analysis::AvgPriceByYear => &renderers::AvgPriceByYear,
            Analysis::AvgPriceByBrand => &renderers::AvgPriceByBrand,
            Analysis::TopColors => &renderers::TopColors,
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One analysis: aggregate the table, describe the chart, supply the text.
///
/// Implementations must be pure over `table` so that re-running an analysis
/// on the same table yields an equal [`Chart`].
pub trait Renderer: Sync {
    fn analysis(&self) -> Analysis;

    fn compute(&self, table: &ListingTable) -> Result<Chart, SchemaError>;

    fn narrative(&self) -> &'static str {
        narrative::for_analysis(self.analysis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_matching_renderer() {
        for analysis in Analysis::ALL {
            assert_eq!(analysis.renderer().analysis(), analysis);
        }
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<&str> = Analysis::ALL.iter().map(|a| a.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 5);
    }
}
