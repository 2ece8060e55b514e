use eframe::egui::{self, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::config::Settings;
use crate::data::model::Dataset;
use crate::state::SessionState;

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Tables below the plot
// ---------------------------------------------------------------------------

/// Summary statistics, detected outliers and the data preview.
pub fn summary_tables(ui: &mut Ui, state: &SessionState, settings: &Settings) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    if let Some(analysis) = state.current() {
        ui.add_space(8.0);
        ui.heading("📊 Summary Statistics");
        let stats = analysis.stats.table_rows();
        ui.push_id("stats_table", |ui: &mut Ui| {
            egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .vscroll(false)
                    .columns(TableColumn::auto().at_least(70.0), stats.len())
                    .header(HEADER_HEIGHT, |mut header| {
                        for (label, _) in &stats {
                            header.col(|ui| {
                                ui.strong(*label);
                            });
                        }
                    })
                    .body(|mut body| {
                        body.row(ROW_HEIGHT, |mut row| {
                            for (_, value) in &stats {
                                row.col(|ui| {
                                    ui.label(value);
                                });
                            }
                        });
                    });
            });
        });

        ui.add_space(8.0);
        ui.heading("🚨 Detected Outliers");
        let outliers = analysis.classification.outlier_rows();
        if outliers.is_empty() {
            ui.label("No values outside the thresholds.");
        } else {
            ui.push_id("outliers_table", |ui: &mut Ui| rows_table(ui, dataset, &outliers));
        }
    }

    ui.add_space(8.0);
    ui.heading("🔍 Data Preview");
    let preview: Vec<usize> = dataset.preview(settings.preview_rows).collect();
    ui.push_id("preview_table", |ui: &mut Ui| rows_table(ui, dataset, &preview));
}

/// Full dataset rows, indexed 0..n in display order.
fn rows_table(ui: &mut Ui, dataset: &Dataset, rows: &[usize]) {
    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(TableColumn::auto())
            .columns(TableColumn::auto().at_least(50.0), dataset.columns.len())
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|_| {});
                for name in dataset.column_names() {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let idx = row.index();
                    row.col(|ui| {
                        ui.weak(idx.to_string());
                    });
                    for cell in dataset.row(rows[idx]) {
                        row.col(|ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            });
    });
}
