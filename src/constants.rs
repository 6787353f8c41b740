/// Fixed re-encode quality on the codec's 0-100 scale. Not user-tunable.
pub const EXPORT_QUALITY: u8 = 50;

/// Suffix appended to the source stem when naming the compressed copy.
/// Kept literally, non-ASCII included; the output naming contract is
/// `<stem>-compressée.<extension>`.
pub const COMPRESSED_SUFFIX: &str = "-compressée";

/// The only accepted input extensions, matched case-insensitively.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Decimal megabyte divisor used by the summary (not binary MiB).
pub const BYTES_PER_MEGABYTE: f64 = 1_000_000.0;

/// Well-known relative path of the persisted export directory value.
pub const CONFIG_FILE: &str = "export_directory.json";

// User-facing strings. French, not localizable.
pub const STATUS_READY: &str = "Prêt";
pub const STATUS_DONE: &str = "Terminé";
pub const LABEL_NO_IMAGES: &str = "Aucune image sélectionnée";
pub const WARN_UNSUPPORTED_FORMAT: &str =
    "Attention !\nSeuls les fichiers 'JPG' et 'JPEG' sont autorisés.";
pub const WARN_EMPTY_BATCH: &str =
    "Atttention !\nAucune image n'a été importée.\nVeuillez réinitialiser.";
pub const ERROR_EXPORT_DIRECTORY: &str =
    "Attention !\n\nVeuillez définir un dossier d'export existant.";
