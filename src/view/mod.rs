//! View state: the page surface the renderer mutates and the shell draws.
//!
//! Sections are addressed by stable id (`page-SERIES`, ...). Asking for a
//! section that the layout does not have is tolerated everywhere and simply
//! does nothing.

pub mod hero;
pub mod renderer;

pub use hero::{HeroFade, HeroText};
pub use renderer::ViewRenderer;

use crate::content::ContentItem;
use crate::pages::PageId;

/// Placeholder shown in a region while its content is in flight.
pub const LOADING_TEXT: &str = "CONNECTING TO NEURAL NETWORK...";
/// Notice raised when a form is submitted.
pub const WELCOME_NOTICE: &str = "Welcome to Aurora Anime! (Demo)";

/// Contents of a section's media grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RegionState {
    #[default]
    Empty,
    Loading,
    Ready(Vec<ContentItem>),
}

impl RegionState {
    pub fn items(&self) -> &[ContentItem] {
        match self {
            RegionState::Ready(items) => items,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub active: bool,
    /// `None` when the section has no media grid.
    pub region: Option<RegionState>,
}

impl Section {
    pub fn plain(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            active: false,
            region: None,
        }
    }

    pub fn with_grid(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            active: false,
            region: Some(RegionState::Empty),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub hero: HeroFade,
    sections: Vec<Section>,
    pub home_widgets_visible: bool,
    pub exit_visible: bool,
    pub menu_open: bool,
    pub notice: Option<String>,
}

impl ViewState {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            hero: HeroFade::new(),
            sections,
            home_widgets_visible: true,
            exit_visible: false,
            menu_open: false,
            notice: None,
        }
    }

    /// The Aurora layout: grids for series and movies, plain sections for
    /// news, community and account. HOME and MOWS have no section.
    pub fn aurora() -> Self {
        Self::new(vec![
            Section::with_grid(PageId::Series.section_id()),
            Section::with_grid(PageId::Movies.section_id()),
            Section::plain(PageId::News.section_id()),
            Section::plain(PageId::Community.section_id()),
            Section::plain(PageId::Account.section_id()),
        ])
    }

    /// Deactivate every section, then activate `id` if present.
    /// Returns whether a section was activated.
    pub fn activate_only(&mut self, id: &str) -> bool {
        let mut found = false;
        for section in &mut self.sections {
            section.active = section.id == id;
            found |= section.active;
        }
        found
    }

    /// Id of the active section, if any.
    pub fn active_section(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.active)
            .map(|s| s.id.as_str())
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn has_region(&self, id: &str) -> bool {
        self.section(id).is_some_and(|s| s.region.is_some())
    }

    pub fn region(&self, id: &str) -> Option<&RegionState> {
        self.section(id).and_then(|s| s.region.as_ref())
    }

    /// Replace a region's contents. Returns false when the section or its
    /// grid does not exist.
    pub fn set_region(&mut self, id: &str, state: RegionState) -> bool {
        match self
            .sections
            .iter_mut()
            .find(|s| s.id == id)
            .and_then(|s| s.region.as_mut())
        {
            Some(region) => {
                *region = state;
                true
            }
            None => {
                log::debug!("no content region {}", id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_only_is_exclusive() {
        let mut view = ViewState::aurora();
        assert!(view.activate_only("page-SERIES"));
        assert!(view.activate_only("page-NEWS"));
        assert_eq!(view.active_section(), Some("page-NEWS"));
        assert_eq!(view.sections().iter().filter(|s| s.active).count(), 1);
    }

    #[test]
    fn activate_missing_section_clears_all() {
        let mut view = ViewState::aurora();
        view.activate_only("page-MOVIES");
        assert!(!view.activate_only("page-MOWS"));
        assert_eq!(view.active_section(), None);
    }

    #[test]
    fn set_region_tolerates_missing_targets() {
        let mut view = ViewState::aurora();
        assert!(!view.set_region("page-NEWS", RegionState::Loading));
        assert!(!view.set_region("page-NOPE", RegionState::Loading));
        assert!(view.set_region("page-SERIES", RegionState::Loading));
        assert_eq!(view.region("page-SERIES"), Some(&RegionState::Loading));
        assert!(view.region("page-NEWS").is_none());
    }

    #[test]
    fn region_items_only_when_ready() {
        let item = ContentItem::new("Akira", "Sci-Fi", "https://cdn/akira.jpg", "MOVIES");
        assert!(RegionState::Loading.items().is_empty());
        assert_eq!(RegionState::Ready(vec![item.clone()]).items(), &[item]);
    }
}
