use std::{error::Error, fmt, io};

use ml_core::MlError;

/// The pipeline's result type.
pub type Result<T> = std::result::Result<T, PipelineErr>;

/// Failures surfaced by one pipeline run.
#[derive(Debug)]
pub enum PipelineErr {
    /// The dataset file is missing or unreadable.
    Io(io::Error),

    /// The dataset file is not valid CSV.
    Csv(csv::Error),

    /// A CSV record could not be interpreted as a sample.
    MalformedRecord {
        /// 1-based line in the dataset file.
        line: u64,
        /// What went wrong with the record.
        cause: String,
    },

    /// A caller-supplied argument is invalid.
    InvalidArgument(String),

    /// Splitting, training, or evaluation failed.
    Ml(MlError),
}

impl fmt::Display for PipelineErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineErr::Io(e) => write!(f, "io error: {e}"),
            PipelineErr::Csv(e) => write!(f, "csv error: {e}"),
            PipelineErr::MalformedRecord { line, cause } => {
                write!(f, "malformed record at line {line}: {cause}")
            }
            PipelineErr::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            PipelineErr::Ml(e) => write!(f, "{e}"),
        }
    }
}

impl Error for PipelineErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineErr::Io(e) => Some(e),
            PipelineErr::Csv(e) => Some(e),
            PipelineErr::Ml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PipelineErr {
    fn from(e: io::Error) -> Self {
        PipelineErr::Io(e)
    }
}

impl From<csv::Error> for PipelineErr {
    fn from(e: csv::Error) -> Self {
        PipelineErr::Csv(e)
    }
}

impl From<MlError> for PipelineErr {
    fn from(e: MlError) -> Self {
        PipelineErr::Ml(e)
    }
}
