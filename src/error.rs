use thiserror::Error;

/// Everything that can stop a load or an analysis pass.
///
/// None of these are transient: the session records the error and the user
/// is re-prompted (pick another file, column or range).
#[derive(Debug, Error)]
pub enum OutlierError {
    #[error("could not read file: {reason}")]
    Parse { reason: String },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("no numeric columns found in the file")]
    EmptyNumericSet,

    #[error("'{0}' is not a numeric column of the dataset")]
    UnknownColumn(String),

    #[error("column '{column}' has no non-missing values")]
    EmptyColumn { column: String },

    #[error("lower threshold {lower} is greater than upper threshold {upper}")]
    InvalidThreshold { lower: f64, upper: f64 },
}

impl OutlierError {
    pub fn parse(reason: impl Into<String>) -> Self {
        OutlierError::Parse {
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for OutlierError {
    fn from(err: csv::Error) -> Self {
        OutlierError::parse(err.to_string())
    }
}

pub type Result<T, E = OutlierError> = std::result::Result<T, E>;
