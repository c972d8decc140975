//! Page registry: the static table of navigable views.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::content::{Category, ContentItem};
use crate::error::NavError;

/// Identifier of a registered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    Home,
    Series,
    Movies,
    Mows,
    News,
    Community,
    Account,
}

impl PageId {
    pub const ALL: [PageId; 7] = [
        PageId::Home,
        PageId::Series,
        PageId::Movies,
        PageId::Mows,
        PageId::News,
        PageId::Community,
        PageId::Account,
    ];

    /// Stable key, also the text of the navigation link.
    pub fn key(self) -> &'static str {
        match self {
            PageId::Home => "HOME",
            PageId::Series => "SERIES",
            PageId::Movies => "MOVIES",
            PageId::Mows => "MOWS",
            PageId::News => "NEWS",
            PageId::Community => "COMMUNITY",
            PageId::Account => "ACCOUNT",
        }
    }

    /// Id of the view section owned by this page.
    pub fn section_id(self) -> String {
        format!("page-{}", self.key())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PageId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        PageId::ALL
            .into_iter()
            .find(|id| id.key() == key)
            .ok_or_else(|| NavError::UnknownPage(key.to_string()))
    }
}

/// Where a page's content grid gets its items.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    Catalog(Category),
    Static(Vec<ContentItem>),
}

/// Per-page toggles for chrome around the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageFlags {
    /// Trending / new-release widgets shown while this page is active.
    pub home_widgets: bool,
    /// "Return home" control shown while this page is active.
    pub exit_control: bool,
}

/// Display metadata for one navigable view. Immutable once registered.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    pub id: PageId,
    pub path: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub content: Option<ContentSource>,
    pub flags: PageFlags,
}

impl PageDescriptor {
    /// Catalog category backing this page's grid, if any.
    pub fn category(&self) -> Option<Category> {
        match self.content {
            Some(ContentSource::Catalog(category)) => Some(category),
            _ => None,
        }
    }
}

/// Lookup table from identifier and path to descriptor.
#[derive(Debug, Clone)]
pub struct PageRegistry {
    pages: Vec<PageDescriptor>,
    home: usize,
}

impl PageRegistry {
    /// Build a registry. Returns `None` if `pages` has no HOME entry or
    /// repeats an identifier or path.
    pub fn new(pages: Vec<PageDescriptor>) -> Option<Self> {
        for (i, page) in pages.iter().enumerate() {
            let dup = pages[..i]
                .iter()
                .any(|other| other.id == page.id || other.path == page.path);
            if dup {
                log::warn!("duplicate page registration: {} ({})", page.id, page.path);
                return None;
            }
        }
        let home = pages.iter().position(|p| p.id == PageId::Home)?;
        Some(Self { pages, home })
    }

    /// The Aurora Anime page table.
    pub fn aurora() -> Self {
        let pages = aurora_pages();
        Self { home: 0, pages }
    }

    /// Process-wide registry, built on first use.
    pub fn global() -> &'static PageRegistry {
        static REGISTRY: OnceLock<PageRegistry> = OnceLock::new();
        REGISTRY.get_or_init(PageRegistry::aurora)
    }

    /// Descriptor for `identifier`, `None` when unregistered.
    pub fn resolve(&self, identifier: &str) -> Option<&PageDescriptor> {
        let id = identifier.parse::<PageId>().ok()?;
        self.get(id)
    }

    pub fn get(&self, id: PageId) -> Option<&PageDescriptor> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Descriptor whose path equals `path`, HOME otherwise.
    pub fn resolve_by_path(&self, path: &str) -> &PageDescriptor {
        self.pages
            .iter()
            .find(|p| p.path == path)
            .unwrap_or(&self.pages[self.home])
    }

    pub fn home(&self) -> &PageDescriptor {
        &self.pages[self.home]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages.iter()
    }

    /// Catalog categories referenced by any page, in registration order.
    pub fn catalog_categories(&self) -> Vec<Category> {
        let mut out = Vec::new();
        for category in self.pages.iter().filter_map(PageDescriptor::category) {
            if !out.contains(&category) {
                out.push(category);
            }
        }
        out
    }
}

fn aurora_pages() -> Vec<PageDescriptor> {
    let inner = PageFlags {
        home_widgets: false,
        exit_control: true,
    };
    vec![
        PageDescriptor {
            id: PageId::Home,
            path: "/",
            title: "WHERE STORIES",
            subtitle: "COME TO LIGHT",
            description: "Dive into an immersive universe of anime. Experience your favorite \
                          series like never before with our cutting-edge holographic interface.",
            content: None,
            flags: PageFlags {
                home_widgets: true,
                exit_control: false,
            },
        },
        PageDescriptor {
            id: PageId::Series,
            path: "/series",
            title: "TRENDING",
            subtitle: "SERIES",
            description: "Discover the hottest ongoing anime series. From Shonen battles to \
                          Slice of Life heartwarming moments.",
            content: Some(ContentSource::Catalog(Category::Series)),
            flags: inner,
        },
        PageDescriptor {
            id: PageId::Movies,
            path: "/movies",
            title: "BLOCKBUSTER",
            subtitle: "MOVIES",
            description: "Cinematic masterpieces await. Experience the highest quality anime \
                          films in our immersive theater mode.",
            content: Some(ContentSource::Catalog(Category::Movies)),
            flags: inner,
        },
        PageDescriptor {
            id: PageId::Mows,
            path: "/mows",
            title: "MOWS",
            subtitle: "ORIGINALS",
            description: "Exclusive content only available on Aurora Anime. Original stories \
                          crafted by top creators.",
            content: Some(ContentSource::Static(vec![ContentItem::new(
                "Aurora Genesis",
                "Aurora Original Series",
                "/images/steins.jpg",
                "MOWS",
            )])),
            flags: inner,
        },
        PageDescriptor {
            id: PageId::News,
            path: "/news",
            title: "LATEST",
            subtitle: "NEWS",
            description: "Stay updated with the latest announcements, delays, and community events.",
            content: None,
            flags: inner,
        },
        PageDescriptor {
            id: PageId::Community,
            path: "/community",
            title: "JOIN THE",
            subtitle: "COMMUNITY",
            description: "Connect with fellow fans, discuss theories, and share your fan art in \
                          our vibrant community.",
            content: None,
            flags: inner,
        },
        PageDescriptor {
            id: PageId::Account,
            path: "/account",
            title: "YOUR",
            subtitle: "JOURNEY",
            description: "Create an account to track your progress, save your favorite series, \
                          and join the discussion.",
            content: None,
            flags: inner,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_stable() {
        let registry = PageRegistry::aurora();
        for id in PageId::ALL {
            let a = registry.resolve(id.key()).unwrap();
            let b = registry.resolve(id.key()).unwrap();
            assert_eq!(a, b);
            assert!(std::ptr::eq(a, b));
            assert_eq!(a.id, id);
        }
    }

    #[test]
    fn resolve_unknown_is_none() {
        let registry = PageRegistry::aurora();
        assert!(registry.resolve("BOGUS").is_none());
        assert!(registry.resolve("series").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn resolve_trims_label_whitespace() {
        let registry = PageRegistry::aurora();
        assert_eq!(registry.resolve("  MOVIES\n").unwrap().id, PageId::Movies);
    }

    #[test]
    fn resolve_by_path_matches_and_falls_back() {
        let registry = PageRegistry::aurora();
        assert_eq!(registry.resolve_by_path("/series").id, PageId::Series);
        assert_eq!(registry.resolve_by_path("/account").id, PageId::Account);
        assert_eq!(registry.resolve_by_path("/nowhere").id, PageId::Home);
        assert_eq!(registry.resolve_by_path("/series/").id, PageId::Home);
        assert_eq!(registry.resolve_by_path("").id, PageId::Home);
    }

    #[test]
    fn paths_are_unique() {
        let registry = PageRegistry::aurora();
        let mut paths: Vec<_> = registry.iter().map(|p| p.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), PageId::ALL.len());
    }

    #[test]
    fn new_rejects_duplicates_and_missing_home() {
        let pages = aurora_pages();
        assert!(PageRegistry::new(pages.clone()).is_some());

        let no_home: Vec<_> = pages.iter().filter(|p| p.id != PageId::Home).cloned().collect();
        assert!(PageRegistry::new(no_home).is_none());

        let mut dup = pages.clone();
        dup.push(pages[1].clone());
        assert!(PageRegistry::new(dup).is_none());
    }

    #[test]
    fn catalog_categories_in_order() {
        let registry = PageRegistry::aurora();
        assert_eq!(
            registry.catalog_categories(),
            vec![Category::Series, Category::Movies]
        );
    }

    #[test]
    fn originals_page_has_static_item() {
        let registry = PageRegistry::aurora();
        let mows = registry.get(PageId::Mows).unwrap();
        assert_eq!(mows.category(), None);
        let Some(ContentSource::Static(items)) = &mows.content else {
            panic!("MOWS should carry static content");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Aurora Genesis");
        assert_eq!(items[0].image_small, "/images/steins.jpg");
        assert_eq!(items[0].genre, None);
        assert_eq!(items[0].category, "MOWS");
    }

    #[test]
    fn global_is_shared() {
        assert!(std::ptr::eq(PageRegistry::global(), PageRegistry::global()));
        assert_eq!(PageRegistry::global().home().path, "/");
    }
}
