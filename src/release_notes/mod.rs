//! Release notes - document model and read-only accessors
//!
//! The release-notes JSON maps semantic versions to release metadata:
//!
//! ```json
//! {
//!   "gitRepo": { "host": "https://github.com", "username": "EdricChan03", "repo": "rss-reader" },
//!   "releases": {
//!     "0.0.0": { "releaseNotes": ["Initial release"], "releaseDate": "2018-08-05" }
//!   }
//! }
//! ```
//!
//! Polymorphic fields (`gitRepo`, `releaseNotes`) are resolved into enums when
//! the document is deserialized, so shape errors surface once at load time and
//! the [`ReleaseNotesStore`] accessors never fail.

pub mod document;
pub mod probe;
pub mod store;

pub use document::{join_release_notes, GitRepo, ReleaseInfo, ReleaseNotes, ReleaseNotesDocument};
pub use probe::{is_sequence, is_string, is_structured_object, is_url, is_valid_url};
pub use store::ReleaseNotesStore;
