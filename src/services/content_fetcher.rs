use std::sync::Arc;

use once_cell::sync::Lazy;
use scraper::{Html, Node, Selector};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Category, ContentExcerpt},
    services::page_source::PageSource,
};

static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("BODY_SELECTOR is a valid selector"));

/// Elements whose text never renders.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Text of every rendered text node under `<body>`, concatenated as-is.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Some(body) = document.select(&BODY_SELECTOR).next() else {
        return String::new();
    };

    let mut text = String::new();
    for node in body.descendants() {
        let Node::Text(chunk) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(element) if HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if !hidden {
            text.push_str(chunk);
        }
    }
    text
}

/// Resolves a category to its upstream page and turns the page into a
/// [`ContentExcerpt`].
pub struct ContentFetcher {
    source: Arc<dyn PageSource>,
    base_url: String,
}

impl ContentFetcher {
    pub fn new(source: Arc<dyn PageSource>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { source, base_url }
    }

    pub fn source_url(&self, category: Category) -> String {
        format!(
            "{}/{}",
            self.base_url,
            urlencoding::encode(category.path_segment())
        )
    }

    /// `fetch_page` then `extract` in one call.
    pub async fn fetch_excerpt(&self, category: &str) -> AppResult<ContentExcerpt> {
        let category = parse_category(category)?;
        let html = self.fetch_page(category).await?;
        self.extract(category, &html)
    }

    pub async fn fetch_page(&self, category: Category) -> AppResult<String> {
        let url = self.source_url(category);
        self.source.fetch_page(&url).await
    }

    pub fn extract(&self, category: Category, html: &str) -> AppResult<ContentExcerpt> {
        ContentExcerpt::from_text(&extract_visible_text(html)).ok_or_else(|| {
            log::error!("No content found on the page for category: {}", category);
            AppError::NoContent(category.name().to_string())
        })
    }
}

pub fn parse_category(category: &str) -> AppResult<Category> {
    category.parse().map_err(|err| {
        log::error!("Invalid category: {}", category);
        err
    })
}
