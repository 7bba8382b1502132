//! Articles shown on the reader's cards
//!
//! Two sources feed the reader:
//! - `FeedEntry` - an RSS item converted to JSON (rss2json shape)
//! - `Headline` - a News API top-headlines article
//!
//! Both arrive as untyped JSON. The kind is decided once from the date field
//! each source carries (`pubDate` vs `publishedAt`).

pub mod card;

pub use card::{is_blank, ArticleCard};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ReaderError, Result};

/// Media attached to a feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Enclosure {
    #[serde(default)]
    pub link: Option<String>,

    #[serde(default, rename = "type")]
    pub media_type: Option<String>,

    #[serde(default)]
    pub length: Option<u64>,

    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// An RSS feed item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    pub title: String,
    pub pub_date: String,
    pub link: String,
    #[serde(default)]
    pub guid: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub enclosure: Option<Enclosure>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Publisher of a headline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadlineSource {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// A News API top-headlines article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    pub source: HeadlineSource,
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    pub published_at: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// An article of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Article {
    Feed(FeedEntry),
    Headline(Headline),
}

impl Article {
    /// Parse an article from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Article::try_from(value)
    }

    pub fn title(&self) -> &str {
        match self {
            Article::Feed(entry) => &entry.title,
            Article::Headline(headline) => &headline.title,
        }
    }

    pub fn link(&self) -> &str {
        match self {
            Article::Feed(entry) => &entry.link,
            Article::Headline(headline) => &headline.url,
        }
    }

    pub fn published(&self) -> &str {
        match self {
            Article::Feed(entry) => &entry.pub_date,
            Article::Headline(headline) => &headline.published_at,
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            Article::Feed(entry) => entry.author.as_deref(),
            Article::Headline(headline) => headline.author.as_deref(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Article::Feed(entry) => entry.description.as_deref(),
            Article::Headline(headline) => headline.description.as_deref(),
        }
    }
}

impl TryFrom<Value> for Article {
    type Error = ReaderError;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(fields) = &value else {
            return Err(ReaderError::article("an article must be a JSON object"));
        };

        if fields.contains_key("pubDate") {
            Ok(Article::Feed(serde_json::from_value(value)?))
        } else if fields.contains_key("publishedAt") {
            Ok(Article::Headline(serde_json::from_value(value)?))
        } else {
            Err(ReaderError::article(
                "the article is neither a feed entry (pubDate) nor a headline (publishedAt)",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_entry_detected() {
        let article = Article::from_json(
            r#"{"title": "T", "pubDate": "2019-01-01", "link": "https://a.io/1"}"#,
        )
        .unwrap();
        assert!(matches!(article, Article::Feed(_)));
        assert_eq!(article.link(), "https://a.io/1");
    }

    #[test]
    fn test_headline_detected() {
        let article = Article::from_json(
            r#"{"source": {"id": null, "name": "BBC"}, "title": "H",
                "url": "https://bbc.co.uk/h", "publishedAt": "2019-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(matches!(article, Article::Headline(_)));
        assert_eq!(article.published(), "2019-01-01T00:00:00Z");
        assert_eq!(article.author(), None);
    }

    #[test]
    fn test_unknown_article_rejected() {
        let err = Article::from_json(r#"{"title": "T", "link": "https://a.io"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Article error"));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = Article::from_json(r#"["pubDate"]"#).unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn test_feed_entry_missing_link_is_json_error() {
        let err = Article::from_json(r#"{"title": "T", "pubDate": "2019-01-01"}"#).unwrap_err();
        assert!(matches!(err, ReaderError::Json(_)));
    }
}
