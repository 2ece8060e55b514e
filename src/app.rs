use eframe::egui;

use crate::config::Settings;
use crate::state::SessionState;
use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct OutlierLensApp {
    pub state: SessionState,
    pub settings: Settings,
}

impl OutlierLensApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: SessionState::default(),
            settings,
        }
    }
}

impl eframe::App for OutlierLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: column + thresholds ----
        egui::SidePanel::left("controls_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot and tables ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    plot::outlier_plot(ui, &self.state, &self.settings);
                    tables::summary_tables(ui, &self.state, &self.settings);
                });
        });
    }
}
