use eframe::egui::{self, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CarsEdaApp {
    pub state: AppState,
}

impl CarsEdaApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CarsEdaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + selector ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: chart | narrative ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns: &mut [Ui]| {
                plot::chart_column(&mut columns[0], &self.state);
                panels::narrative_column(&mut columns[1], &self.state);
            });
        });
    }
}
