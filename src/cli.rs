use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jpegpress",
    about = "Batch JPEG re-compression with a configurable export directory",
    long_about = "jpegpress re-encodes selected JPEG files at a fixed quality of 50 and writes \
                  the compressed copies to a configured export directory, reporting the \
                  aggregate size reduction. Only 'jpg' and 'jpeg' inputs are accepted; a single \
                  non-JPEG entry rejects the whole selection.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    jpegpress compress vacation.jpg city.jpeg\n  \
    jpegpress compress *.jpg --export-dir ./out\n  \
    jpegpress export-dir\n  \
    jpegpress export-dir --set ~/Pictures/compressed"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Compress a selection of JPEG files into the export directory",
        long_about = "Validates the selection (all files must be .jpg or .jpeg, case-insensitive), \
                      then re-encodes each file at quality 50 into the export directory as \
                      '<stem>-compressée.<extension>'. The run is sequential and all-or-nothing: \
                      a failure mid-batch aborts the rest, though outputs already written are \
                      not removed."
    )]
    Compress {
        #[arg(help = "JPEG files to compress", required = true)]
        files: Vec<PathBuf>,

        #[arg(
            short = 'd',
            long,
            help = "Export directory to use (persisted for later runs)",
            long_help = "Overrides and persists the configured export directory before \
                         compressing. Without this flag the previously configured directory \
                         is used (the home directory on first run)."
        )]
        export_dir: Option<PathBuf>,

        #[arg(short = 'q', long, help = "Suppress progress output")]
        quiet: bool,
    },

    #[command(
        about = "Show or set the configured export directory",
        long_about = "Without --set, prints the currently configured export directory. \
                      With --set, persists the given directory as the new export target."
    )]
    ExportDir {
        #[arg(short = 's', long, help = "Directory to persist as the export target")]
        set: Option<PathBuf>,
    },
}
