use anyhow::Context;
use clap::Parser;
use jpegpress::cli::{Args, Commands};
use jpegpress::constants::{
    ERROR_EXPORT_DIRECTORY, STATUS_DONE, STATUS_READY, WARN_EMPTY_BATCH, WARN_UNSUPPORTED_FORMAT,
};
use jpegpress::frontend::{Frontend, ViewContainer, ViewPane};
use jpegpress::logger::set_quiet_mode;
use jpegpress::{info, CompressionError, ConfigStore, Session, ValidationError};
use std::path::{Path, PathBuf};

/// Console stand-in for the interactive surface: CLI arguments play the role
/// of the file and directory dialogs, and labels become stdout lines.
struct ConsoleFrontend {
    queued_files: Vec<PathBuf>,
    queued_directory: Option<PathBuf>,
    view: ViewContainer,
}

impl ConsoleFrontend {
    fn new(files: Vec<PathBuf>, directory: Option<PathBuf>) -> Self {
        Self {
            queued_files: files,
            queued_directory: directory,
            view: ViewContainer::default(),
        }
    }
}

impl Frontend for ConsoleFrontend {
    fn pick_files(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.queued_files)
    }

    fn pick_directory(&mut self) -> Option<PathBuf> {
        self.queued_directory.take()
    }

    fn show_warning(&mut self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("❌ {}", message);
    }

    fn set_selection_count(&mut self, text: &str) {
        if !text.is_empty() {
            println!("{}", text);
        }
    }

    fn set_status(&mut self, text: &str) {
        if !text.is_empty() {
            println!("{}", text);
        }
    }

    fn set_summary(&mut self, text: &str) {
        println!("{}", text);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Compress {
            files,
            export_dir,
            quiet,
        } => run_compress(files, export_dir, quiet),
        Commands::ExportDir { set } => run_export_dir(set),
    }
}

fn run_compress(
    files: Vec<PathBuf>,
    export_dir: Option<PathBuf>,
    quiet: bool,
) -> anyhow::Result<()> {
    set_quiet_mode(quiet);

    let store = ConfigStore::open();
    store
        .ensure_initialized()
        .context("failed to initialize the export directory store")?;

    let mut frontend = ConsoleFrontend::new(files, export_dir);
    let mut session = Session::new();

    if let Some(dir) = frontend.pick_directory() {
        frontend.view.navigate(ViewPane::ExportDirSetup);
        session
            .configure_export_dir(&store, &dir.to_string_lossy())
            .context("failed to persist the export directory")?;
        frontend.view.navigate(ViewPane::Workbench);
    }

    let selection = frontend.pick_files();
    let (count_label, has_images) = match session.select(&selection) {
        Ok(batch) => (batch.count_label(), !batch.is_empty()),
        Err(err) => {
            match &err {
                ValidationError::UnsupportedFormat(_) => {
                    frontend.show_warning(WARN_UNSUPPORTED_FORMAT)
                }
                ValidationError::SourceUnreadable(_) => frontend.show_warning(&err.to_string()),
            }
            return Err(err.into());
        }
    };

    frontend.set_selection_count(&count_label);
    if has_images {
        frontend.set_status(STATUS_READY);
    }

    let export = store.read();
    info!("📁 Export: {}", export);

    match session.compress(Path::new(&export)) {
        Ok(summary) => {
            let line = summary.label();
            frontend.set_status(STATUS_DONE);
            frontend.set_summary(&line);
            Ok(())
        }
        Err(err @ CompressionError::EmptyBatch) => {
            frontend.show_warning(WARN_EMPTY_BATCH);
            Err(err.into())
        }
        Err(err) => {
            frontend.show_error(ERROR_EXPORT_DIRECTORY);
            Err(err.into())
        }
    }
}

fn run_export_dir(set: Option<PathBuf>) -> anyhow::Result<()> {
    let store = ConfigStore::open();
    store
        .ensure_initialized()
        .context("failed to initialize the export directory store")?;

    let mut frontend = ConsoleFrontend::new(Vec::new(), set);
    frontend.view.navigate(ViewPane::ExportDirSetup);

    if let Some(dir) = frontend.pick_directory() {
        store
            .write(&dir.to_string_lossy())
            .context("failed to persist the export directory")?;
    }
    println!("{}", store.read());

    frontend.view.navigate(ViewPane::Workbench);
    Ok(())
}
