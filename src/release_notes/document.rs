use std::borrow::Cow;

use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::error::Category;
use serde_json::Value;
use thiserror::Error;

use crate::error::{ReaderError, Result};

/// A value in the document does not have the shape its field requires.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ShapeError(String);

impl ShapeError {
    fn new(msg: impl Into<String>) -> Self {
        ShapeError(msg.into())
    }
}

impl From<ShapeError> for ReaderError {
    fn from(err: ShapeError) -> Self {
        ReaderError::Document(err.0)
    }
}

/// Location of the project's source repository.
///
/// The JSON document may carry either a ready-made URL or the
/// `{host, username, repo}` triple it is built from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum GitRepo {
    Url(String),
    Structured {
        host: String,
        username: String,
        repo: String,
    },
}

impl GitRepo {
    /// Build the repository URL (e.g. `https://github.com/EdricChan03/rss-reader`).
    ///
    /// Plain string references are returned unchanged. No validation of the
    /// resulting URL is performed.
    pub fn url(&self) -> Cow<'_, str> {
        match self {
            GitRepo::Url(url) => Cow::Borrowed(url),
            GitRepo::Structured {
                host,
                username,
                repo,
            } => Cow::Owned(format!("{}/{}/{}", host, username, repo)),
        }
    }
}

impl TryFrom<Value> for GitRepo {
    type Error = ShapeError;

    fn try_from(value: Value) -> std::result::Result<Self, ShapeError> {
        match value {
            Value::String(url) => Ok(GitRepo::Url(url)),
            Value::Object(mut fields) => {
                let mut take = |key: &str| match fields.remove(key) {
                    Some(Value::String(s)) => Ok(s),
                    Some(other) => Err(ShapeError::new(format!(
                        "gitRepo.{} must be a string, found {}",
                        key,
                        describe(&other)
                    ))),
                    None => Err(ShapeError::new(format!(
                        "gitRepo is missing the '{}' field",
                        key
                    ))),
                };
                Ok(GitRepo::Structured {
                    host: take("host")?,
                    username: take("username")?,
                    repo: take("repo")?,
                })
            }
            other => Err(ShapeError::new(format!(
                "gitRepo must be a URL string or a {{host, username, repo}} object, found {}",
                describe(&other)
            ))),
        }
    }
}

impl Serialize for GitRepo {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            GitRepo::Url(url) => serializer.serialize_str(url),
            GitRepo::Structured {
                host,
                username,
                repo,
            } => {
                let mut state = serializer.serialize_struct("GitRepo", 3)?;
                state.serialize_field("host", host)?;
                state.serialize_field("username", username)?;
                state.serialize_field("repo", repo)?;
                state.end()
            }
        }
    }
}

/// The notes attached to a release: one paragraph or a list of bullet lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum ReleaseNotes {
    Single(String),
    Lines(Vec<String>),
}

impl ReleaseNotes {
    /// Normalize either representation to display text.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            ReleaseNotes::Single(text) => Cow::Borrowed(text),
            ReleaseNotes::Lines(lines) => Cow::Owned(join_release_notes(lines)),
        }
    }

    /// Whether the notes carry no text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            ReleaseNotes::Single(text) => text.trim().is_empty(),
            ReleaseNotes::Lines(lines) => lines.iter().all(|line| line.trim().is_empty()),
        }
    }
}

/// Join bullet lines with newline separators, preserving order.
pub fn join_release_notes<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

impl TryFrom<Value> for ReleaseNotes {
    type Error = ShapeError;

    fn try_from(value: Value) -> std::result::Result<Self, ShapeError> {
        match value {
            Value::String(text) => Ok(ReleaseNotes::Single(text)),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(line) => Ok(line),
                    other => Err(ShapeError::new(format!(
                        "releaseNotes[{}] must be a string, found {}",
                        i,
                        describe(&other)
                    ))),
                })
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(ReleaseNotes::Lines),
            other => Err(ShapeError::new(format!(
                "releaseNotes must be a string or a list of strings, found {}",
                describe(&other)
            ))),
        }
    }
}

impl Serialize for ReleaseNotes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ReleaseNotes::Single(text) => serializer.serialize_str(text),
            ReleaseNotes::Lines(lines) => lines.serialize(serializer),
        }
    }
}

/// Metadata for a single release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
    pub release_notes: ReleaseNotes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_author: Option<String>,
}

impl ReleaseInfo {
    /// A release counts as published once it carries a date.
    pub fn is_published(&self) -> bool {
        self.release_date.is_some()
    }
}

/// Shape of the JSON file before the document invariants are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    git_repo: GitRepo,
    #[serde(default)]
    releases: IndexMap<String, ReleaseInfo>,
}

/// The release-notes document: repository reference plus the releases keyed by
/// semantic version, in the order they appear in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawDocument", rename_all = "camelCase")]
pub struct ReleaseNotesDocument {
    git_repo: GitRepo,
    releases: IndexMap<String, ReleaseInfo>,
}

impl ReleaseNotesDocument {
    /// Create a document, checking that every key is a semantic version and
    /// that no published release has empty notes.
    pub fn new(git_repo: GitRepo, releases: IndexMap<String, ReleaseInfo>) -> Result<Self> {
        Ok(Self::checked(git_repo, releases)?)
    }

    fn checked(
        git_repo: GitRepo,
        releases: IndexMap<String, ReleaseInfo>,
    ) -> std::result::Result<Self, ShapeError> {
        for (version, info) in &releases {
            semver::Version::parse(version).map_err(|e| {
                ShapeError::new(format!(
                    "release key '{}' is not a semantic version: {}",
                    version, e
                ))
            })?;

            if info.is_published() && info.release_notes.is_empty() {
                return Err(ShapeError::new(format!(
                    "release '{}' is published but has empty releaseNotes",
                    version
                )));
            }
        }

        Ok(ReleaseNotesDocument { git_repo, releases })
    }

    /// Parse and validate a document from JSON text.
    ///
    /// Syntax errors are reported as [`ReaderError::Json`]; well-formed JSON
    /// that does not fit the document shape is a [`ReaderError::Document`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| match e.classify() {
            Category::Data => ReaderError::document(e.to_string()),
            _ => ReaderError::Json(e),
        })
    }

    pub fn git_repo(&self) -> &GitRepo {
        &self.git_repo
    }

    pub fn releases(&self) -> &IndexMap<String, ReleaseInfo> {
        &self.releases
    }
}

impl TryFrom<RawDocument> for ReleaseNotesDocument {
    type Error = ShapeError;

    fn try_from(raw: RawDocument) -> std::result::Result<Self, ShapeError> {
        ReleaseNotesDocument::checked(raw.git_repo, raw.releases)
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_git_repo_structured_url() {
        let repo = GitRepo::Structured {
            host: "https://github.com".to_string(),
            username: "EdricChan03".to_string(),
            repo: "rss-reader".to_string(),
        };
        assert_eq!(repo.url(), "https://github.com/EdricChan03/rss-reader");
    }

    #[test]
    fn test_git_repo_string_unchanged() {
        let repo = GitRepo::Url("https://github.com/EdricChan03/rss-reader".to_string());
        assert_eq!(repo.url(), "https://github.com/EdricChan03/rss-reader");
    }

    #[test]
    fn test_git_repo_rejects_number() {
        let err = GitRepo::try_from(json!(42)).unwrap_err();
        assert!(err.to_string().contains("gitRepo"));
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn test_git_repo_rejects_incomplete_object() {
        let err = GitRepo::try_from(json!({"host": "https://github.com", "repo": "x"})).unwrap_err();
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn test_git_repo_rejects_non_string_field() {
        let err = GitRepo::try_from(json!({"host": "h", "username": 3, "repo": "r"})).unwrap_err();
        assert!(err.to_string().contains("gitRepo.username"));
    }

    #[test]
    fn test_release_notes_shapes() {
        assert_eq!(
            ReleaseNotes::try_from(json!("one")).unwrap(),
            ReleaseNotes::Single("one".to_string())
        );
        assert_eq!(
            ReleaseNotes::try_from(json!(["a", "b"])).unwrap(),
            ReleaseNotes::Lines(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_release_notes_rejects_mixed_list() {
        let err = ReleaseNotes::try_from(json!(["a", 2])).unwrap_err();
        assert!(err.to_string().contains("releaseNotes[1]"));
    }

    #[test]
    fn test_release_notes_rejects_object() {
        let err = ReleaseNotes::try_from(json!({"text": "a"})).unwrap_err();
        assert!(err.to_string().contains("releaseNotes"));
    }

    #[test]
    fn test_join_release_notes() {
        let lines = ["string1", "string2", "string3"];
        assert_eq!(join_release_notes(&lines), "string1\nstring2\nstring3");
    }

    #[test]
    fn test_joined_single_is_borrowed() {
        let notes = ReleaseNotes::Single("Initial release".to_string());
        assert!(matches!(notes.joined(), Cow::Borrowed("Initial release")));
    }

    #[test]
    fn test_document_rejects_non_semver_key() {
        let err = ReleaseNotesDocument::from_json(
            r#"{"gitRepo": "https://example.com", "releases": {"latest": {"releaseNotes": "x"}}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("'latest'"));
    }

    #[test]
    fn test_document_rejects_empty_published_notes() {
        let err = ReleaseNotesDocument::from_json(
            r#"{"gitRepo": "https://example.com",
                "releases": {"1.0.0": {"releaseNotes": [], "releaseDate": "2019-01-01"}}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("'1.0.0'"));
    }

    #[test]
    fn test_document_shape_errors_are_document_errors() {
        let err = ReleaseNotesDocument::from_json(r#"{"gitRepo": true}"#).unwrap_err();
        assert!(matches!(err, ReaderError::Document(_)), "got {:?}", err);
        assert!(err
            .to_string()
            .starts_with("Release notes document error: gitRepo must be"));

        let err = ReleaseNotesDocument::from_json(r#"{"releases": {}}"#).unwrap_err();
        assert!(matches!(err, ReaderError::Document(_)), "got {:?}", err);
    }

    #[test]
    fn test_invalid_syntax_is_json_error() {
        let err = ReleaseNotesDocument::from_json(r#"{"gitRepo": "#).unwrap_err();
        assert!(matches!(err, ReaderError::Json(_)), "got {:?}", err);
    }

    #[test]
    fn test_new_rejects_non_semver_key() {
        let mut releases = IndexMap::new();
        releases.insert(
            "v1".to_string(),
            ReleaseInfo {
                release_notes: ReleaseNotes::Single("x".to_string()),
                release_date: None,
                release_author: None,
            },
        );
        let err =
            ReleaseNotesDocument::new(GitRepo::Url("https://a.io".to_string()), releases).unwrap_err();
        assert!(matches!(err, ReaderError::Document(_)));
    }

    #[test]
    fn test_document_allows_empty_unreleased_notes() {
        let doc = ReleaseNotesDocument::from_json(
            r#"{"gitRepo": "https://example.com", "releases": {"1.1.0": {"releaseNotes": ""}}}"#,
        )
        .unwrap();
        assert_eq!(doc.releases().len(), 1);
    }

    #[test]
    fn test_document_without_releases_is_empty() {
        let doc = ReleaseNotesDocument::from_json(r#"{"gitRepo": "https://example.com"}"#).unwrap();
        assert!(doc.releases().is_empty());
    }
}
