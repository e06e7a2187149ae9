use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::analysis::narrative::{self, NarrativeLine};
use crate::analysis::Analysis;
use crate::state::AppState;

pub const PAGE_TITLE: &str = "Análisis Exploratorio de Datos: Vehículos en USA";
const SELECT_PROMPT: &str = "Seleccione el análisis que desea realizar:";

// ---------------------------------------------------------------------------
// Top bar – title and analysis selector
// ---------------------------------------------------------------------------

/// Render the page title and the analysis dropdown.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(6.0);
    ui.heading(RichText::new(PAGE_TITLE).size(24.0).strong());
    ui.add_space(6.0);

    ui.label(SELECT_PROMPT);
    ui.horizontal(|ui: &mut Ui| {
        let current = state.selection;
        let mut chosen = None;
        egui::ComboBox::from_id_salt("analysis_select")
            .selected_text(current.label())
            .width(320.0)
            .show_ui(ui, |ui: &mut Ui| {
                for analysis in Analysis::ALL {
                    if ui
                        .selectable_label(current == analysis, analysis.label())
                        .clicked()
                    {
                        chosen = Some(analysis);
                    }
                }
            });
        if let Some(analysis) = chosen {
            state.select(analysis);
        }

        ui.separator();
        ui.label(format!("{} vehículos cargados", state.table().len()));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Narrative column (right)
// ---------------------------------------------------------------------------

/// Render the commentary for the displayed analysis.
pub fn narrative_column(ui: &mut Ui, state: &AppState) {
    let Some(display) = &state.display else {
        return;
    };

    ScrollArea::vertical()
        .id_salt("narrative")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for line in narrative::parse(display.narrative) {
                match line {
                    NarrativeLine::Heading(text) => {
                        ui.label(RichText::new(text).strong());
                    }
                    NarrativeLine::Bullet(text) => {
                        ui.horizontal_wrapped(|ui: &mut Ui| {
                            ui.label("•");
                            ui.label(text);
                        });
                    }
                    NarrativeLine::Paragraph(text) => {
                        ui.label(text);
                    }
                    NarrativeLine::Blank => ui.add_space(8.0),
                }
            }
        });
}
