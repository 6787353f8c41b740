use crate::batch::Batch;
use crate::constants::{BYTES_PER_MEGABYTE, EXPORT_QUALITY};
use crate::error::CompressionError;
use crate::info;
use image::codecs::jpeg::JpegEncoder;
use image::ImageReader;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Aggregate result of one full compression pass.
///
/// Each total is converted to decimal megabytes and rounded to two decimals
/// on its own, and the difference is computed from those already-rounded
/// values. The difference can therefore disagree with `round(before - after)`
/// computed from raw bytes; callers relying on the reported figures get this
/// rounding order, not the raw one.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionSummary {
    pub total_source_bytes: u64,
    pub total_target_bytes: u64,
    pub megabytes_before: f64,
    pub megabytes_after: f64,
    pub megabytes_saved: f64,
}

impl CompressionSummary {
    pub fn new(total_source_bytes: u64, total_target_bytes: u64) -> Self {
        let megabytes_before = round_to_hundredths(total_source_bytes as f64 / BYTES_PER_MEGABYTE);
        let megabytes_after = round_to_hundredths(total_target_bytes as f64 / BYTES_PER_MEGABYTE);
        let megabytes_saved = round_to_hundredths(megabytes_before - megabytes_after);
        Self {
            total_source_bytes,
            total_target_bytes,
            megabytes_before,
            megabytes_after,
            megabytes_saved,
        }
    }

    /// Summary line for the presentation layer.
    pub fn label(&self) -> String {
        format!(
            "{} Mo -> {} Mo | Différence de {} Mo",
            self.megabytes_before, self.megabytes_after, self.megabytes_saved
        )
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Re-encodes every record of the batch at quality 50 into `export_dir`,
/// sequentially and in batch order.
///
/// An empty batch fails with [`CompressionError::EmptyBatch`] before any I/O.
/// Any per-record open, decode, or write failure is treated as a missing or
/// unwritable export directory: the pass aborts, the batch is cleared, and
/// [`CompressionError::ExportDirectoryInvalid`] is returned. Outputs already
/// written earlier in the same pass are left on disk; the batch is
/// best-effort, not transactional.
pub fn compress(
    batch: &mut Batch,
    export_dir: &Path,
) -> Result<CompressionSummary, CompressionError> {
    if batch.is_empty() {
        return Err(CompressionError::EmptyBatch);
    }

    info!("🗜️  Compressing {} to {:?}", batch.count_label(), export_dir);

    let progress = ProgressBar::new(batch.len() as u64);
    progress.set_style(ProgressStyle::default_bar());

    for record in batch.records_mut() {
        let target_path = export_dir.join(record.target_file_name());
        match compress_record(&record.source_path, &target_path) {
            Ok(target_size) => {
                record.target_path = Some(target_path);
                record.target_size_bytes = Some(target_size);
                record.bytes_saved = Some(record.source_size_bytes as i64 - target_size as i64);
                progress.inc(1);
            }
            Err(_) => {
                // Single failure path: whatever went wrong mid-pass, the
                // user is sent back to reconfigure the export directory.
                // Already-written outputs stay on disk.
                crate::warn!("Failed on {:?}, aborting batch", record.source_path);
                progress.abandon();
                batch.clear();
                return Err(CompressionError::ExportDirectoryInvalid(
                    export_dir.to_path_buf(),
                ));
            }
        }
    }
    progress.finish_with_message("✅ Compression complete");

    let total_source_bytes = batch.records().iter().map(|r| r.source_size_bytes).sum();
    let total_target_bytes = batch
        .records()
        .iter()
        .filter_map(|r| r.target_size_bytes)
        .sum();

    Ok(CompressionSummary::new(total_source_bytes, total_target_bytes))
}

/// Decodes one source image and writes it back as JPEG at the fixed quality,
/// returning the measured on-disk size of the output.
fn compress_record(source_path: &Path, target_path: &Path) -> Result<u64, image::ImageError> {
    let img = ImageReader::open(source_path)?.decode()?;

    {
        let file = File::create(target_path)?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, EXPORT_QUALITY);
        img.write_with_encoder(encoder)?;
        writer.flush()?;
    }

    Ok(fs::metadata(target_path)?.len())
}
