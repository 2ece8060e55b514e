use eframe::egui::Ui;
use egui_plot::{BoxElem, BoxPlot, BoxSpread, Legend, LineStyle, Plot, PlotPoints, Points, VLine};

use crate::config::{rgb, Settings};
use crate::data::model::Observation;
use crate::state::SessionState;

/// Vertical offsets of the inlier / outlier strips around the box.
const INLIER_Y: f64 = 0.05;
const OUTLIER_Y: f64 = -0.05;

// ---------------------------------------------------------------------------
// Outlier plot (central panel)
// ---------------------------------------------------------------------------

/// Render the box plot with the inlier/outlier split, thresholds and mean.
pub fn outlier_plot(ui: &mut Ui, state: &SessionState, settings: &Settings) {
    if state.dataset.is_none() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(40.0);
            ui.heading("👆 Open a CSV file to get started  (File → Open…)");
        });
        return;
    }

    let analysis = match &state.analysis {
        Some(Ok(analysis)) => analysis,
        Some(Err(e)) => {
            ui.colored_label(rgb(settings.outlier_color), format!("⚠ {e}"));
            return;
        }
        None => return,
    };
    let column = state.column_name().unwrap_or_default();
    let stats = &analysis.stats;
    let split = &analysis.classification;
    let t = analysis.thresholds;

    ui.heading(format!("Boxplot of {column} with Inliers, Outliers, and Mean"));

    let spread = BoxSpread::new(stats.min, stats.p25, stats.p50, stats.p75, stats.max);
    let boxes = BoxPlot::new(vec![BoxElem::new(0.0, spread)
        .box_width(0.3)
        .whisker_width(0.15)
        .fill(rgb(settings.box_color).gamma_multiply(0.5))
        .stroke((1.0, rgb(settings.box_color)))
        .name(column)])
    .horizontal()
    .name(column);

    Plot::new("outlier_plot")
        .legend(Legend::default())
        .height(320.0)
        .x_axis_label(column)
        .show_y(false)
        .show_axes([true, false])
        .include_y(-0.3)
        .include_y(0.3)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(boxes);

            plot_ui.points(
                Points::new(strip(&split.inliers, INLIER_Y))
                    .name("Inliers")
                    .color(rgb(settings.inlier_color).gamma_multiply(0.6))
                    .radius(settings.marker_radius),
            );
            plot_ui.points(
                Points::new(strip(&split.outliers, OUTLIER_Y))
                    .name("Outliers")
                    .color(rgb(settings.outlier_color).gamma_multiply(0.8))
                    .radius(settings.marker_radius),
            );

            plot_ui.vline(
                VLine::new(t.lower)
                    .name("Lower Threshold")
                    .color(rgb(settings.threshold_color))
                    .style(LineStyle::dashed_loose()),
            );
            plot_ui.vline(
                VLine::new(t.upper)
                    .name("Upper Threshold")
                    .color(rgb(settings.threshold_color))
                    .style(LineStyle::dashed_loose()),
            );
            plot_ui.vline(
                VLine::new(split.mean)
                    .name(format!("Mean ({:.2})", split.mean))
                    .color(rgb(settings.mean_color))
                    .style(LineStyle::dotted_dense()),
            );
        });
}

fn strip(observations: &[Observation], y: f64) -> PlotPoints<'_> {
    observations.iter().map(|o| [o.value, y]).collect()
}
