/// Dataset creation options for a single leaf.
///
/// These map onto the HDF5 dataset-creation property list and are consumed
/// entirely at write time; nothing here is persisted as an attribute. A
/// malformed combination (e.g. compression on a scalar dataset, which cannot
/// be chunked) surfaces as an error from the container when the leaf is
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StorageOptions {
    /// Gzip (deflate) compression level, 0-9
    pub compression: Option<u8>,
    /// Chunk shape; HDF5 requires chunked layout for compressed datasets
    pub chunk: Option<Vec<usize>>,
    /// Byte-shuffle filter, usually paired with compression
    pub shuffle: bool,
}

impl StorageOptions {
    /// Gzip compression at the given level.
    ///
    /// Level 4 matches the conventional Data Exchange writer default.
    pub fn gzip(level: u8) -> Self {
        StorageOptions {
            compression: Some(level),
            ..Default::default()
        }
    }

    /// Set an explicit chunk shape.
    pub fn with_chunk(mut self, chunk: Vec<usize>) -> Self {
        self.chunk = Some(chunk);
        self
    }

    /// Enable the byte-shuffle filter.
    pub fn with_shuffle(mut self) -> Self {
        self.shuffle = true;
        self
    }
}
