//! View renderer: applies one page to the view state.
//!
//! Each step is idempotent, so rendering the same page twice leaves the
//! same visible state as rendering it once.

use crate::content::{Category, ContentFetcher, ContentItem, Request};
use crate::pages::{ContentSource, PageDescriptor, PageId, PageRegistry};
use crate::scene::SceneDirector;

use super::{HeroText, RegionState, ViewState};

pub struct ViewRenderer {
    registry: PageRegistry,
}

impl ViewRenderer {
    pub fn new(registry: PageRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// Render page `id` at time `t`.
    ///
    /// Returns the catalog category the page's grid is still waiting for,
    /// if its content was not cached.
    pub fn render(
        &self,
        id: PageId,
        view: &mut ViewState,
        fetcher: &mut ContentFetcher,
        scene: &mut dyn SceneDirector,
        t: f32,
    ) -> Option<Category> {
        let Some(page) = self.registry.get(id) else {
            log::warn!("render: page {} is not registered", id);
            return None;
        };

        view.hero.retarget(hero_text(page), t);

        let section = id.section_id();
        if !view.activate_only(&section) {
            log::debug!("render: {} has no section", id);
        }

        view.home_widgets_visible = page.flags.home_widgets;
        view.exit_visible = page.flags.exit_control;

        let awaiting = populate_region(page, &section, view, fetcher);

        scene.focus(page, t);
        awaiting
    }

    /// Fill `id`'s grid with late-arriving content.
    pub fn fill_region(&self, id: PageId, view: &mut ViewState, items: Vec<ContentItem>) -> bool {
        view.set_region(&id.section_id(), RegionState::Ready(items))
    }
}

fn hero_text(page: &PageDescriptor) -> HeroText {
    HeroText {
        title: page.title.to_string(),
        subtitle: page.subtitle.to_string(),
        description: page.description.to_string(),
    }
}

fn populate_region(
    page: &PageDescriptor,
    section: &str,
    view: &mut ViewState,
    fetcher: &mut ContentFetcher,
) -> Option<Category> {
    let source = page.content.as_ref()?;
    if !view.has_region(section) {
        return None;
    }
    match source {
        ContentSource::Static(items) => {
            view.set_region(section, RegionState::Ready(items.clone()));
            None
        }
        ContentSource::Catalog(category) => match fetcher.request(*category) {
            Request::Ready(items) => {
                view.set_region(section, RegionState::Ready(items));
                None
            }
            Request::Pending => {
                view.set_region(section, RegionState::Loading);
                Some(*category)
            }
        },
    }
}
