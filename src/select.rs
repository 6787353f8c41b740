use crate::batch::{Batch, ImageRecord};
use crate::constants::{ACCEPTED_EXTENSIONS, COMPRESSED_SUFFIX};
use crate::error::ValidationError;
use std::fs;
use std::path::Path;

/// Checks whether the path carries one of the accepted JPEG extensions,
/// case-insensitively.
pub fn is_jpeg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Builds the working batch from the user's selection.
///
/// Validation is all-or-nothing: if any entry is not a JPEG the whole
/// selection is rejected and no batch is produced. An empty selection is not
/// an error; it yields an empty batch. Source sizes are read from disk here,
/// so a file that vanished since the pick fails the entire selection
/// ([`ValidationError::SourceUnreadable`]) — there is no per-record
/// partial-success path.
pub fn select(paths: &[impl AsRef<Path>]) -> Result<Batch, ValidationError> {
    for path in paths {
        let path = path.as_ref();
        if !is_jpeg_path(path) {
            let shown = path
                .extension()
                .and_then(|s| s.to_str())
                .unwrap_or_else(|| path.to_str().unwrap_or("?"));
            return Err(ValidationError::UnsupportedFormat(shown.to_string()));
        }
    }

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        records.push(build_record(path.as_ref())?);
    }
    Ok(Batch::from_records(records))
}

fn build_record(path: &Path) -> Result<ImageRecord, ValidationError> {
    // Extension presence was established by is_jpeg_path above.
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    let display_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let source_size_bytes = fs::metadata(path)
        .map_err(|_| ValidationError::SourceUnreadable(path.to_path_buf()))?
        .len();

    Ok(ImageRecord {
        extension,
        source_path: path.to_path_buf(),
        target_name: format!("{}{}", display_name, COMPRESSED_SUFFIX),
        display_name,
        source_size_bytes,
        target_path: None,
        target_size_bytes: None,
        bytes_saved: None,
    })
}
