/// Outlier engine: threshold classification and descriptive statistics.
///
/// Everything here is a pure function of `(Column, ThresholdPair)`; the
/// session calls [`recompute`] whenever the column or the thresholds change.
pub mod classify;
pub mod summary;

use crate::data::model::Column;
use crate::error::Result;

use classify::{classify, Classification, ThresholdPair};
use summary::{summarize, StatisticsRecord};

/// Everything the dashboard needs to draw one threshold selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub thresholds: ThresholdPair,
    pub classification: Classification,
    pub stats: StatisticsRecord,
}

/// Classify then summarize in one pass.
pub fn recompute(column: &Column, thresholds: ThresholdPair) -> Result<Analysis> {
    let classification = classify(column, thresholds)?;
    let stats = summarize(
        column,
        &classification.outliers,
        &classification.inliers,
        classification.mean,
    )?;

    log::debug!(
        "Recomputed '{}' with [{}, {}]: {} inliers, {} outliers, {} missing",
        column.name,
        thresholds.lower,
        thresholds.upper,
        stats.inlier_count,
        stats.outlier_count,
        classification.missing
    );

    Ok(Analysis {
        thresholds,
        classification,
        stats,
    })
}
