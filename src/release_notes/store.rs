use std::borrow::Cow;
use std::fs;
use std::path::Path;

use log::{debug, trace};

use super::document::{ReleaseInfo, ReleaseNotes, ReleaseNotesDocument};
use crate::error::Result;

/// Release notes shipped with the reader.
const BUNDLED_RELEASE_NOTES: &str = include_str!("../../assets/release-notes.json");

/// Read-only view over an injected release-notes document.
///
/// Lookups for versions that are not in the document return `None`; callers
/// should treat that as "no notes available" rather than a failure. Nothing is
/// cached, every accessor reads straight from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseNotesStore {
    document: ReleaseNotesDocument,
}

impl ReleaseNotesStore {
    /// Create a store over an already validated document
    pub fn new(document: ReleaseNotesDocument) -> Self {
        ReleaseNotesStore { document }
    }

    /// Parse a document from JSON text and wrap it in a store
    pub fn from_json(json: &str) -> Result<Self> {
        let document = ReleaseNotesDocument::from_json(json)?;
        debug!(
            "Loaded release notes with {} release(s)",
            document.releases().len()
        );
        Ok(Self::new(document))
    }

    /// Load a release-notes JSON file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading release notes from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the release notes bundled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_RELEASE_NOTES)
    }

    pub fn document(&self) -> &ReleaseNotesDocument {
        &self.document
    }

    /// All versions in the order they appear in the document.
    pub fn versions(&self) -> Vec<&str> {
        self.document
            .releases()
            .keys()
            .map(String::as_str)
            .collect()
    }

    /// The highest version by semantic-version precedence.
    pub fn latest_version(&self) -> Option<&str> {
        self.document
            .releases()
            .keys()
            .filter_map(|key| semver::Version::parse(key).ok().map(|v| (v, key)))
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, key)| key.as_str())
    }

    pub fn release_info(&self, version: &str) -> Option<&ReleaseInfo> {
        let info = self.document.releases().get(version);
        if info.is_none() {
            trace!("No release information for version {}", version);
        }
        info
    }

    pub fn release_note(&self, version: &str) -> Option<&ReleaseNotes> {
        self.release_info(version).map(|info| &info.release_notes)
    }

    /// Release notes for `version` normalized to newline-separated text.
    pub fn joined_release_note(&self, version: &str) -> Option<Cow<'_, str>> {
        self.release_note(version).map(ReleaseNotes::joined)
    }

    pub fn release_date(&self, version: &str) -> Option<&str> {
        self.release_info(version)
            .and_then(|info| info.release_date.as_deref())
    }

    pub fn release_author(&self, version: &str) -> Option<&str> {
        self.release_info(version)
            .and_then(|info| info.release_author.as_deref())
    }

    /// URL of the project's source repository.
    pub fn git_repo_url(&self) -> Cow<'_, str> {
        self.document.git_repo().url()
    }
}
