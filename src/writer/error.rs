/// Errors that can occur while writing to a Data Exchange file
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// Structural failure reported by the HDF5 container (wrong node kind at
    /// a path, refused creation, I/O failure); propagated unmodified
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// Record instance violated its archetype
    #[error("schema error: {0}")]
    Schema(#[from] crate::entry::SchemaError),

    /// A string payload or attribute is not storable as HDF5 variable-length
    /// unicode
    #[error("invalid string payload: {0}")]
    InvalidString(String),
}
