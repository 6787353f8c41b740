use crate::constants::LABEL_NO_IMAGES;
use std::path::PathBuf;

/// One selected image, filled in progressively: the selection stage sets
/// everything up to `target_name`; the compression stage fills the
/// `target_*` fields and `bytes_saved`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Extension exactly as given by the source filename (case preserved).
    pub extension: String,
    pub source_path: PathBuf,
    /// Filename stem without extension.
    pub display_name: String,
    /// On-disk size at selection time, not an estimate.
    pub source_size_bytes: u64,
    /// `display_name` plus the fixed "compressed" suffix.
    pub target_name: String,
    /// Set only during compression.
    pub target_path: Option<PathBuf>,
    /// Set only after this record was successfully compressed.
    pub target_size_bytes: Option<u64>,
    /// `source_size_bytes - target_size_bytes`; negative when re-encoding
    /// inflates the file (not prevented).
    pub bytes_saved: Option<i64>,
}

impl ImageRecord {
    /// Output filename: `<stem><suffix>.<original extension>`.
    pub fn target_file_name(&self) -> String {
        format!("{}.{}", self.target_name, self.extension)
    }
}

/// Ordered collection of records, indexed by insertion order. Created empty,
/// populated once by selection, consumed once by compression, and cleared on
/// reset or terminal failure. There is no partial-completion state across
/// stages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    records: Vec<ImageRecord>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [ImageRecord] {
        &mut self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Selection-count text for the presentation layer.
    pub fn count_label(&self) -> String {
        match self.len() {
            0 => LABEL_NO_IMAGES.to_string(),
            1 => "1 image".to_string(),
            n => format!("{} images", n),
        }
    }
}
