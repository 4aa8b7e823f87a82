use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{explore, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HousingApp {
    pub state: AppState,
}

impl HousingApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for HousingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: prediction form ----
        egui::SidePanel::left("prediction_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::prediction_panel(ui, &mut self.state);
            });

        // ---- Central panel: exploration + result ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    main_view(ui, &mut self.state);
                });
        });
    }
}

fn main_view(ui: &mut Ui, state: &mut AppState) {
    ui.heading("DataApp - Prevendo Valores de Imóveis");
    ui.label(
        "Este é um DataApp utilizado para exibir a solução de Machine Learning \
         para o problema de predição de valores de imóveis de Boston.",
    );
    ui.add_space(12.0);

    ui.heading("Selecionando apenas um pequeno conjunto de atributos");
    explore::column_selector(ui, state);
    ui.add_space(6.0);
    explore::preview_table(ui, state);
    ui.add_space(12.0);

    ui.heading("Distribuição de imóveis por preço");
    explore::price_range_slider(ui, state);
    plot::price_histogram(ui, state);

    if let Some(prediction) = &state.prediction {
        ui.add_space(12.0);
        ui.heading("O valor previsto para o imóvel é:");
        ui.label(egui::RichText::new(&prediction.formatted).size(20.0));
    }
}
