use std::fmt;

/// Warnings raised while presenting release notes and articles.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ReaderWarning {
    /// The requested version has no entry in the release notes
    VersionNotFound { version: String, available: usize },
    /// The version exists but carries no release date yet
    UnreleasedVersion { version: String },
    /// The release notes contain no releases at all
    EmptyDocument,
    /// Images are enabled but the article has no usable image
    NoImage { title: String },
}

impl fmt::Display for ReaderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderWarning::VersionNotFound { version, available } => {
                write!(
                    f,
                    "No release notes for version '{}' ({} release(s) available)",
                    version, available
                )
            }
            ReaderWarning::UnreleasedVersion { version } => {
                write!(f, "Version '{}' has not been released yet", version)
            }
            ReaderWarning::EmptyDocument => {
                write!(f, "The release notes do not list any releases")
            }
            ReaderWarning::NoImage { title } => {
                write!(f, "No image available for '{}'", title)
            }
        }
    }
}
