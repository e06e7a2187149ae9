use crate::analysis::{Analysis, Chart, ChartKind};
use crate::data::model::ListingTable;

// ---------------------------------------------------------------------------
// Display surface
// ---------------------------------------------------------------------------

/// What the two columns currently show. Replaced wholesale by each
/// successful render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySurface {
    pub analysis: Analysis,
    /// Left column.
    pub chart: Chart,
    /// Right column.
    pub narrative: &'static str,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup; never mutated afterwards.
    table: ListingTable,

    /// Active dropdown entry.
    pub selection: Analysis,

    /// Output of the last successful render pass.
    pub display: Option<DisplaySurface>,

    /// Error from the last failed render pass, shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Take ownership of the loaded table and render the default analysis.
    pub fn new(table: ListingTable) -> Self {
        let mut state = Self {
            table,
            selection: Analysis::default(),
            display: None,
            status_message: None,
        };
        state.select(Analysis::default());
        state
    }

    pub fn table(&self) -> &ListingTable {
        &self.table
    }

    /// Make `analysis` active and run one render pass.
    ///
    /// On failure the previous display is left as it was and the error is
    /// reported through `status_message`.
    pub fn select(&mut self, analysis: Analysis) {
        self.selection = analysis;
        let renderer = analysis.renderer();

        match renderer.compute(&self.table) {
            Ok(chart) => {
                log::debug!("Rendered '{analysis}' with {} elements", chart_size(&chart));
                self.display = Some(DisplaySurface {
                    analysis,
                    chart,
                    narrative: renderer.narrative(),
                });
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Render of '{analysis}' failed: {e}");
                self.status_message = Some(format!("Error en '{analysis}': {e}"));
            }
        }
    }
}

/// Number of plotted elements, for logging.
fn chart_size(chart: &Chart) -> usize {
    match &chart.kind {
        ChartKind::Histogram { bins, .. } => bins.len(),
        ChartKind::HorizontalBars { bars } | ChartKind::VerticalBars { bars, .. } => bars.len(),
        ChartKind::Line { points, .. } => points.len(),
    }
}
