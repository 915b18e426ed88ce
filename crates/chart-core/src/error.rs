// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the loading, layout and render stages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Insets;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv parse error")]
    Csv(#[from] csv::Error),

    #[error("column '{0}' not found in csv header")]
    MissingColumn(String),

    #[error("margins {insets:?} leave no drawing area on a {width}x{height} canvas")]
    InvalidLayout { width: u32, height: u32, insets: Insets },

    #[error("no plottable records for chart '{0}'")]
    EmptyData(&'static str),
}

pub type Result<T> = std::result::Result<T, ChartError>;
