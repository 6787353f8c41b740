pub mod batch;
pub mod cli;
pub mod compress;
pub mod config;
pub mod constants;
pub mod error;
pub mod frontend;
pub mod logger;
pub mod select;
pub mod session;

pub use batch::{Batch, ImageRecord};
pub use compress::{compress, CompressionSummary};
pub use config::ConfigStore;
pub use error::{AppError, CompressionError, ConfigError, Result, ValidationError};
pub use frontend::{Frontend, ViewContainer, ViewPane};
pub use select::{is_jpeg_path, select};
pub use session::{Session, SessionState};
