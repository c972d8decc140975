//! Anime catalog client (Jikan v4 "top anime" endpoint).
//!
//! `CatalogSource` is the seam the content fetcher talks to; `JikanCatalog`
//! is the HTTP implementation. Payload records are turned into
//! [`ContentItem`]s here so nothing downstream sees the wire format.

use serde::Deserialize;
use url::Url;

use crate::config::AppConfig;
use crate::content::{Category, ContentItem};
use crate::error::FetchError;

use super::fetch::{build_client, decode_json, get_json};

/// Items requested for the featured list (one per orbit slot).
pub const FEATURED_LIMIT: u32 = 6;
/// Genres joined into a grid description.
pub const DESCRIPTION_GENRES: usize = 3;

/// Anything that can produce the content list for a category.
pub trait CatalogSource: Send + Sync {
    fn fetch_category(&self, category: Category) -> Result<Vec<ContentItem>, FetchError>;
}

// ─── Wire format ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TopAnimePage {
    data: Vec<RawAnime>,
}

#[derive(Debug, Deserialize)]
struct RawAnime {
    title: String,
    #[serde(default)]
    title_english: Option<String>,
    #[serde(default)]
    genres: Vec<RawGenre>,
    #[serde(default)]
    images: RawImages,
}

#[derive(Debug, Deserialize)]
struct RawGenre {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawImages {
    #[serde(default)]
    jpg: RawImageSet,
}

#[derive(Debug, Default, Deserialize)]
struct RawImageSet {
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    small_image_url: Option<String>,
    #[serde(default)]
    large_image_url: Option<String>,
}

impl RawAnime {
    fn into_item(self, category: Category) -> ContentItem {
        let title = match self.title_english {
            Some(english) if !english.trim().is_empty() => english,
            _ => self.title,
        };
        let description = self
            .genres
            .iter()
            .take(DESCRIPTION_GENRES)
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let genre = self.genres.into_iter().next().map(|g| g.name);
        let jpg = self.images.jpg;
        let image_medium = jpg.image_url.unwrap_or_default();
        ContentItem {
            title,
            description,
            image: jpg.large_image_url.unwrap_or_else(|| image_medium.clone()),
            image_small: jpg.small_image_url.unwrap_or_else(|| image_medium.clone()),
            image_medium,
            genre,
            category: category.key().to_string(),
        }
    }
}

/// Decode a "top anime" payload into content items for `category`.
pub fn parse_top_page(body: &str, category: Category) -> Result<Vec<ContentItem>, FetchError> {
    let page: TopAnimePage = decode_json(body)?;
    Ok(page_items(page, category))
}

fn page_items(page: TopAnimePage, category: Category) -> Vec<ContentItem> {
    page.data
        .into_iter()
        .map(|raw| raw.into_item(category))
        .collect()
}

// ─── HTTP source ─────────────────────────────────────────────────────────────

/// Catalog backed by the public Jikan API.
pub struct JikanCatalog {
    client: reqwest::blocking::Client,
    base: Url,
    limit: u32,
}

impl JikanCatalog {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(config.timeout)?,
            base: Url::parse(&config.catalog_url)?,
            limit: config.limit,
        })
    }

    /// Endpoint for a category: `{base}/top/anime?type=..&limit=..`.
    pub fn endpoint(&self, category: Category) -> Result<Url, FetchError> {
        let limit = match category {
            Category::Featured => FEATURED_LIMIT,
            _ => self.limit,
        };
        top_anime_url(&self.base, category.catalog_type(), limit)
    }
}

impl CatalogSource for JikanCatalog {
    fn fetch_category(&self, category: Category) -> Result<Vec<ContentItem>, FetchError> {
        let url = self.endpoint(category)?;
        log::info!("catalog GET {}", url);
        let page: TopAnimePage = get_json(&self.client, &url)?;
        Ok(page_items(page, category))
    }
}

fn top_anime_url(base: &Url, kind: Option<&str>, limit: u32) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::Client(format!("catalog url cannot be a base: {}", base)))?
        .pop_if_empty()
        .extend(["top", "anime"]);
    {
        let mut query = url.query_pairs_mut();
        query.clear();
        if let Some(kind) = kind {
            query.append_pair("type", kind);
        }
        query.append_pair("limit", &limit.to_string());
    }
    Ok(url)
}
