use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Environment variable naming an optional JSON settings file.
pub const SETTINGS_ENV: &str = "OUTLIER_LENS_SETTINGS";

/// Display settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows shown in the data preview table.
    pub preview_rows: usize,
    /// Initial window size in points.
    pub window_size: [f32; 2],
    /// Scatter marker radius.
    pub marker_radius: f32,
    pub inlier_color: [u8; 3],
    pub outlier_color: [u8; 3],
    pub threshold_color: [u8; 3],
    pub mean_color: [u8; 3],
    pub box_color: [u8; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            window_size: [1100.0, 760.0],
            marker_radius: 4.0,
            inlier_color: [0, 128, 0],
            outlier_color: [220, 20, 20],
            threshold_color: [220, 20, 20],
            mean_color: [30, 60, 220],
            box_color: [173, 216, 230],
        }
    }
}

impl Settings {
    /// Read settings from the file named by [`SETTINGS_ENV`], or defaults
    /// when the variable is unset.
    pub fn load() -> Result<Self> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        serde_json::from_str(&text).context("parsing settings JSON")
    }
}

pub fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}
