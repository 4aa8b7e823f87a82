use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::TARGET_COLUMN;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Column multi-select
// ---------------------------------------------------------------------------

/// Selected columns as removable chips, plus a drop-down to add the rest.
pub fn column_selector(ui: &mut Ui, state: &mut AppState) {
    ui.label("Atributos");

    let selected = state.selected_columns.clone();
    let available: Vec<String> = state
        .dataset
        .columns
        .iter()
        .filter(|c| !state.is_selected(c))
        .cloned()
        .collect();

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for col in &selected {
            if ui
                .button(format!("{col}  ✕"))
                .on_hover_text("Remover")
                .clicked()
            {
                state.toggle_column(col);
            }
        }

        egui::ComboBox::from_id_salt("add_column")
            .selected_text("Adicionar…")
            .show_ui(ui, |ui: &mut Ui| {
                for col in &available {
                    if ui.selectable_label(false, col).clicked() {
                        state.toggle_column(col);
                    }
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Preview table
// ---------------------------------------------------------------------------

/// First rows of the dataset restricted to the selected columns.
pub fn preview_table(ui: &mut Ui, state: &AppState) {
    let preview = state.preview();
    if preview.columns.is_empty() {
        ui.label("Nenhum atributo selecionado.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::right_to_left(Align::Center))
        .column(Column::auto().at_least(32.0))
        .columns(Column::auto().at_least(72.0), preview.columns.len())
        .header(20.0, |mut header| {
            header.col(|_ui| {});
            for name in &preview.columns {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, preview.rows.len(), |mut row| {
                let idx = row.index();
                row.col(|ui| {
                    ui.label(RichText::new(idx.to_string()).weak());
                });
                for value in &preview.rows[idx] {
                    row.col(|ui| {
                        ui.label(format!("{value:.4}"));
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Price range slider
// ---------------------------------------------------------------------------

/// Two handles over `[min price, upper bound]`; the low handle never passes
/// the high one.
pub fn price_range_slider(ui: &mut Ui, state: &mut AppState) {
    let (min, max) = state.price_bounds;
    let mut low = state.price_range.low;
    let mut high = state.price_range.high;

    ui.label("Faixa de preço");
    let low_changed = ui
        .add(egui::Slider::new(&mut low, min..=max).text("mínimo"))
        .changed();
    let high_changed = ui
        .add(egui::Slider::new(&mut high, min..=max).text("máximo"))
        .changed();

    if low_changed || high_changed {
        if low > high {
            if low_changed {
                high = low;
            } else {
                low = high;
            }
        }
        state.set_price_range(low, high);
    }

    ui.label(
        RichText::new(format!(
            "{TARGET_COLUMN} entre {:.2} e {:.2}",
            state.price_range.low, state.price_range.high
        ))
        .weak(),
    );
}
