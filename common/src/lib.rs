//! Leaply Import Common Library
//!
//! CLIとWeb(WASM)で共有される型とインポートセッションの状態機械

pub mod entity;
pub mod error;
pub mod report;
pub mod session;
pub mod types;

pub use entity::EntityKind;
pub use error::{
    TransportError, ValidationError, IMPORT_FAILED_MESSAGE, INVALID_FILE_MESSAGE,
    TEMPLATE_FAILED_MESSAGE,
};
pub use session::{FileSource, ImportSession, SessionStatus};
pub use types::{ApiEnvelope, ImportResult, RowError, SelectedFile, CSV_MEDIA_TYPE};
