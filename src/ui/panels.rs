use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::TARGET_COLUMN;
use crate::predict::RiverBoundary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – prediction form
// ---------------------------------------------------------------------------

/// Render the sidebar form. Widgets edit a copy of the inputs that is written
/// back once per frame.
pub fn prediction_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Defina os atributos do imóvel para predição");
    ui.separator();

    let mut inputs = state.inputs;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            number_input(ui, "Taxa de Criminalidade", &mut inputs.crim);
            number_input(ui, "Proporção de Hectares de Negócio", &mut inputs.indus);

            ui.label("Faz limite com o rio?");
            egui::ComboBox::from_id_salt("chas")
                .selected_text(inputs.chas.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for option in RiverBoundary::ALL {
                        ui.selectable_value(&mut inputs.chas, option, option.label());
                    }
                });
            ui.add_space(6.0);

            number_input(ui, "Concentração de óxido nítrico", &mut inputs.nox);
            number_input(ui, "Número de Quartos", &mut inputs.rm);
            number_input(ui, "Índice de alunos para professores", &mut inputs.ptratio);
            number_input(
                ui,
                "Proporção de pessoas com descendencia afro-americana",
                &mut inputs.b,
            );
            number_input(ui, "Porcentagem de status baixo", &mut inputs.lstat);

            ui.add_space(8.0);
            state.set_inputs(inputs);

            if ui.button("Realizar Predição").clicked() {
                state.predict();
            }
        });
}

/// Labelled numeric field; the widget only accepts numbers.
fn number_input(ui: &mut Ui, label: &str, value: &mut f64) {
    ui.label(label);
    ui.add(
        egui::DragValue::new(value)
            .speed(0.01)
            .max_decimals(6),
    );
    ui.add_space(6.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status bar above the main view.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("DataApp");
        ui.separator();
        ui.label(format!(
            "{} imóveis, {} atributos",
            state.dataset.len(),
            state.dataset.columns.len()
        ));
        if let (Ok(min), Ok(max)) = (
            state.dataset.min(TARGET_COLUMN),
            state.dataset.max(TARGET_COLUMN),
        ) {
            ui.separator();
            ui.label(format!("{TARGET_COLUMN}: {min:.1} – {max:.1}"));
        }
        ui.separator();
        ui.label(format!(
            "Random forest: {} árvores, profundidade máx. {}",
            state.model.params().n_estimators,
            state.model.params().max_depth.unwrap_or_default()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
