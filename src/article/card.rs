use log::trace;
use url::Url;

use super::Article;
use crate::settings::{LinkTarget, Settings};

/// View data for one article card.
///
/// Derived once from the article and the injected settings; the renderer only
/// reads these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub title: String,
    pub link: String,
    pub published: String,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub target: LinkTarget,
    pub image_src: Option<String>,
    pub has_image: bool,
}

impl ArticleCard {
    pub fn new(article: &Article, settings: &Settings) -> Self {
        let image_src = image_candidate(article).and_then(normalize_image_url);
        let has_image = settings.show_images && image_src.is_some();

        ArticleCard {
            title: article.title().to_string(),
            link: article.link().to_string(),
            published: article.published().to_string(),
            author: non_blank(article.author()),
            summary: non_blank(article.description()),
            target: settings.link_target(),
            image_src,
            has_image,
        }
    }

    /// Flip image visibility, as the card's "hide image" toggle does.
    pub fn toggle_image(&mut self) {
        self.has_image = !self.has_image && self.image_src.is_some();
    }
}

/// Returns true for a missing or empty string.
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, str::is_empty)
}

fn non_blank(text: Option<&str>) -> Option<String> {
    if is_blank(text) {
        None
    } else {
        text.map(str::to_string)
    }
}

/// Pick the image to show: a feed entry prefers the enclosure thumbnail, then
/// its own thumbnail, then the enclosure itself.
fn image_candidate(article: &Article) -> Option<&str> {
    match article {
        Article::Feed(entry) => {
            let enclosure = entry.enclosure.as_ref();
            [
                enclosure.and_then(|e| e.thumbnail.as_deref()),
                entry.thumbnail.as_deref(),
                enclosure.and_then(|e| e.link.as_deref()),
            ]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.is_empty())
        }
        Article::Headline(headline) => headline
            .url_to_image
            .as_deref()
            .filter(|candidate| !candidate.is_empty()),
    }
}

fn normalize_image_url(raw: &str) -> Option<String> {
    match Url::parse(raw) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            trace!("Dropping unparsable image URL {:?}: {}", raw, e);
            None
        }
    }
}
