use crate::data::model::{Column, Dataset};
use crate::engine::classify::ThresholdPair;
use crate::engine::{recompute, Analysis};
use crate::error::{OutlierError, Result};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// The full interactive session, independent of rendering.
///
/// Every mutation that changes the column or the thresholds re-runs the
/// engine synchronously; nothing is cached beyond the latest result.
#[derive(Default)]
pub struct SessionState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Numeric columns of the dataset, in header order.
    pub numeric_columns: Vec<String>,

    /// Column currently under analysis.
    pub column: Option<Column>,

    /// `(min, max)` of the selected column; the slider range.
    pub bounds: Option<(f64, f64)>,

    /// Current user-chosen thresholds.
    pub thresholds: Option<ThresholdPair>,

    /// Latest engine output for `column` + `thresholds`.
    pub analysis: Option<Result<Analysis>>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl SessionState {
    /// Ingest a newly loaded dataset and select its first numeric column.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.numeric_columns = dataset.numeric_columns();
        self.dataset = Some(dataset);
        self.column = None;
        self.bounds = None;
        self.thresholds = None;
        self.analysis = None;
        self.status_message = None;

        match self.numeric_columns.first().cloned() {
            Some(first) => {
                if let Err(e) = self.select_column(&first) {
                    self.status_message = Some(e.to_string());
                }
            }
            None => {
                log::warn!("Loaded dataset has no numeric columns");
                self.analysis = Some(Err(OutlierError::EmptyNumericSet));
            }
        }
    }

    /// Record a failed load; the previous dataset is dropped.
    pub fn set_load_error(&mut self, err: OutlierError) {
        *self = SessionState {
            status_message: Some(err.to_string()),
            ..SessionState::default()
        };
    }

    /// Switch analysis to another numeric column, resetting the thresholds
    /// to its full range.
    pub fn select_column(&mut self, name: &str) -> Result<()> {
        let dataset = self
            .dataset
            .as_ref()
            .ok_or_else(|| OutlierError::UnknownColumn(name.to_string()))?;
        let column = dataset.column(name)?;

        self.bounds = column.range();
        self.thresholds = ThresholdPair::spanning(&column).ok();
        log::info!(
            "Selected column '{name}' ({} rows, {} missing)",
            column.len(),
            column.missing_count()
        );

        self.column = Some(column);
        self.refresh();
        Ok(())
    }

    /// Apply new thresholds from the UI and re-run the engine.
    pub fn set_thresholds(&mut self, thresholds: ThresholdPair) {
        if thresholds.validate().is_err() {
            log::warn!(
                "Rejected thresholds: lower {} > upper {}",
                thresholds.lower,
                thresholds.upper
            );
        }
        self.thresholds = Some(thresholds);
        self.refresh();
    }

    /// Restore the thresholds spanning the whole column.
    pub fn reset_thresholds(&mut self) {
        if let Some((lower, upper)) = self.bounds {
            self.set_thresholds(ThresholdPair::new(lower, upper));
        }
    }

    /// Recompute the analysis for the current column and thresholds.
    pub fn refresh(&mut self) {
        let Some(column) = &self.column else {
            self.analysis = None;
            return;
        };
        self.analysis = Some(match self.thresholds {
            Some(t) => recompute(column, t),
            None => Err(OutlierError::EmptyColumn {
                column: column.name.clone(),
            }),
        });
    }

    /// Selected column name, if any.
    pub fn column_name(&self) -> Option<&str> {
        self.column.as_ref().map(|c| c.name.as_str())
    }

    /// The successful analysis, if the last pass succeeded.
    pub fn current(&self) -> Option<&Analysis> {
        self.analysis.as_ref().and_then(|r| r.as_ref().ok())
    }

    /// Dataset rows flagged as outliers, in original order.
    pub fn outlier_rows(&self) -> Vec<usize> {
        self.current()
            .map(|a| a.classification.outlier_rows())
            .unwrap_or_default()
    }
}
