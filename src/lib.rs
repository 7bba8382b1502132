pub mod article;
pub mod error;
pub mod onboarding;
pub mod release_notes;
pub mod settings;
pub mod ui;
pub mod warning;

pub use error::{ReaderError, Result};
pub use release_notes::ReleaseNotesStore;
pub use settings::Settings;
