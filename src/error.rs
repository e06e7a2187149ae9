use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a [`ListingTable`](crate::data::model::ListingTable)
/// from the source file. Fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no header row", .path.display())]
    Empty { path: PathBuf },
}

/// A renderer was asked to aggregate over a table that lacks what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("column '{column}' is missing from the dataset")]
    MissingColumn { column: String },

    #[error("column '{column}' is not numeric")]
    NotNumeric { column: String },
}
