use thiserror::Error;

#[derive(Error, Debug)]
pub enum QcError {
    #[error("Can't read archive file: {0}")]
    FileReadError(String),

    #[error("Can't open output file for writing: {0}")]
    FileWriteError(String),

    #[error("Collection '{0}' not found in the archive.")]
    CollectionNotFound(String),

    #[error("Monitor object '{0}' not found in the collection.")]
    ObjectNotFound(String),

    #[error("Monitor object '{0}' has the wrong shape: expected {1}.")]
    TypeMismatch(String, &'static str),

    #[error("No distributions to serialize.")]
    EmptyCollection,

    #[error("Row {0} has {1} fields, expected {2}: can't transpose a ragged CSV.")]
    RaggedCsv(usize, usize, usize),

    #[error("Histogram '{0}' has {1} bins, expected {2}: all serialized distributions must share one binning.")]
    MixedBinning(String, usize, usize),

    #[error("Bin {bin} is out of range for histogram '{name}' ({n_bins} bins).")]
    BinOutOfRange {
        name: String,
        bin: usize,
        n_bins: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
