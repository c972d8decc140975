//! Catalog content: items, categories, the fetch-once cache and the fetcher.

pub mod cache;
pub mod fetcher;
pub mod featured;

use std::fmt;

pub use cache::ContentCache;
pub use fetcher::{Completion, ContentFetcher, Dispatch, Request};

/// Category key a content list is fetched and cached under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Top TV series.
    Series,
    /// Top films.
    Movies,
    /// Unfiltered top list feeding the globe cards and home widgets.
    Featured,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Series => "SERIES",
            Category::Movies => "MOVIES",
            Category::Featured => "FEATURED",
        }
    }

    /// `type` filter sent to the catalog.
    pub fn catalog_type(self) -> Option<&'static str> {
        match self {
            Category::Series => Some("tv"),
            Category::Movies => Some("movie"),
            Category::Featured => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One catalog entry shown in a grid, card or widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub title: String,
    pub description: String,
    /// Large poster.
    pub image: String,
    /// Regular-size poster.
    pub image_medium: String,
    /// Thumbnail.
    pub image_small: String,
    /// First genre, if the entry has any.
    pub genre: Option<String>,
    pub category: String,
}

impl ContentItem {
    /// Item with a single image used for every size.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let image = image.into();
        Self {
            title: title.into(),
            description: description.into(),
            image_medium: image.clone(),
            image_small: image.clone(),
            image,
            genre: None,
            category: category.into(),
        }
    }
}
