use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::export::export_rows;
use crate::state::SessionState;

// ---------------------------------------------------------------------------
// Left side panel – column and threshold widgets
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut SessionState) {
    ui.heading("Outlier Detection");
    ui.separator();

    match &state.dataset {
        None => {
            ui.label("No dataset loaded.");
            return;
        }
        Some(ds) if ds.is_empty() => {
            ui.label("The file has a header but no data rows.");
        }
        Some(_) => {}
    }
    if state.numeric_columns.is_empty() {
        ui.label(RichText::new("⚠ No numeric columns found in your file.").color(Color32::YELLOW));
        return;
    }

    // ---- Column selector ----
    ui.strong("Numeric column");
    let columns = state.numeric_columns.clone();
    let current = state.column_name().unwrap_or_default().to_string();
    egui::ComboBox::from_id_salt("column_select")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui.selectable_label(current == *col, col).clicked() && current != *col {
                    if let Err(e) = state.select_column(col) {
                        log::error!("Failed to select column '{col}': {e}");
                        state.status_message = Some(e.to_string());
                    }
                }
            }
        });
    ui.separator();

    // ---- Threshold sliders ----
    let (Some((min, max)), Some(mut thresholds)) = (state.bounds, state.thresholds) else {
        ui.label("Selected column has no values.");
        return;
    };

    ui.label(format!("Range of {current}: {min:.2} to {max:.2}"));
    ui.add_space(4.0);
    ui.strong("Thresholds");

    let mut changed = false;
    changed |= ui
        .add(egui::Slider::new(&mut thresholds.lower, min..=max).text("Lower"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut thresholds.upper, min..=max).text("Upper"))
        .changed();
    if changed {
        state.set_thresholds(thresholds);
    }

    if ui.button("Reset").clicked() {
        state.reset_thresholds();
    }

    if let Some(analysis) = state.current() {
        ui.separator();
        let stats = &analysis.stats;
        ui.label(format!("{} inliers", stats.inlier_count));
        ui.label(RichText::new(format!("{} outliers", stats.outlier_count)).color(Color32::RED));
        if analysis.classification.missing > 0 {
            ui.label(format!("{} missing (not classified)", analysis.classification.missing));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut SessionState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let has_outliers = !state.outlier_rows().is_empty();
            if ui
                .add_enabled(has_outliers, egui::Button::new("Export outliers…"))
                .clicked()
            {
                export_outliers_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} columns ({} numeric)",
                ds.len(),
                ds.columns.len(),
                state.numeric_columns.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut SessionState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV file")
        .add_filter("CSV", &["csv", "txt"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows from {} with numeric columns {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.numeric_columns()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.set_load_error(e);
            }
        }
    }
}

pub fn export_outliers_dialog(state: &mut SessionState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let rows = state.outlier_rows();

    let file = rfd::FileDialog::new()
        .set_title("Export outliers")
        .set_file_name("outliers.csv")
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match export_rows(&path, dataset, &rows) {
            Ok(()) => {
                log::info!("Exported {} outlier rows to {}", rows.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export outliers: {e:#}");
                state.status_message = Some(format!("Export failed: {e:#}"));
            }
        }
    }
}
