use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::color::price_gradient;
use crate::config::TARGET_COLUMN;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Price histogram
// ---------------------------------------------------------------------------

/// Histogram of the target column over the rows in the selected range.
pub fn price_histogram(ui: &mut Ui, state: &AppState) {
    let hist = state.histogram();

    ui.strong("Distribuição de Preços");
    if hist.counts.is_empty() {
        ui.label("Nenhum imóvel na faixa selecionada.");
        return;
    }

    let colors = price_gradient(hist.counts.len());
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(i, (&count, color))| {
            Bar::new(hist.bin_center(i), count as f64)
                .width(hist.bin_width)
                .fill(color)
        })
        .collect();

    Plot::new("price_histogram")
        .height(320.0)
        .x_axis_label(TARGET_COLUMN)
        .y_axis_label("Total Imóveis")
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(TARGET_COLUMN));
        });

    ui.label(format!("{} imóveis na faixa", hist.total()));
}
