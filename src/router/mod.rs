//! Router: owns the navigation state and turns navigation events into
//! page transitions.
//!
//! Everything here runs on one logical thread. The only deferred work is
//! content fetching; its results are applied by [`Router::update`], and only
//! when they still belong to the page that asked for them.

pub mod history;

pub use history::{History, MemoryHistory};

use std::time::Duration;

use crate::content::{Category, Completion, ContentFetcher, ContentItem};
use crate::error::NavError;
use crate::pages::{PageId, PageRegistry};
use crate::scene::SceneDirector;
use crate::view::{ViewRenderer, ViewState, WELCOME_NOTICE};

/// Something the user (or the history) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// A navigation link was activated; carries the link's label.
    Link(String),
    /// Back/forward moved the history; follow its current path.
    PopState,
    /// Account button in the nav bar.
    Login,
    /// Call-to-action on the hero ("explore").
    Explore,
    /// "Return home" control on inner pages.
    ReturnHome,
    /// A form on the page was submitted.
    FormSubmitted,
    /// Mobile menu button.
    ToggleMenu,
}

/// Single source of truth for the displayed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current: PageId,
    pub path: String,
    /// Bumped on every transition; tags deferred content.
    pub generation: u64,
}

pub struct Router<H: History, D: SceneDirector> {
    renderer: ViewRenderer,
    view: ViewState,
    fetcher: ContentFetcher,
    history: H,
    scene: D,
    state: NavigationState,
    awaiting: Option<(Category, u64)>,
    clock: f32,
}

impl<H: History, D: SceneDirector> Router<H, D> {
    /// Build a router whose state follows the history's current path
    /// (HOME when unmatched). Nothing is rendered until [`start`](Self::start).
    pub fn new(
        registry: PageRegistry,
        view: ViewState,
        fetcher: ContentFetcher,
        history: H,
        scene: D,
    ) -> Self {
        let initial = registry.resolve_by_path(history.current_path());
        let state = NavigationState {
            current: initial.id,
            path: initial.path.to_string(),
            generation: 0,
        };
        Self {
            renderer: ViewRenderer::new(registry),
            view,
            fetcher,
            history,
            scene,
            state,
            awaiting: None,
            clock: 0.0,
        }
    }

    /// Render the initial page and warm the content cache.
    pub fn start(&mut self) {
        if self.history.current_path() != self.state.path {
            log::info!(
                "no page at {:?}, showing {}",
                self.history.current_path(),
                self.state.current
            );
            self.history.replace(&self.state.path);
        }
        self.transition(self.state.current);

        let mut warm = self.renderer.registry().catalog_categories();
        warm.push(Category::Featured);
        for category in warm {
            self.fetcher.request(category);
        }
    }

    /// Handle one navigation event. Invalid events are logged and ignored.
    pub fn handle(&mut self, event: NavEvent) {
        match event {
            NavEvent::Link(label) => {
                self.view.menu_open = false;
                match label.parse::<PageId>() {
                    Ok(id) => self.go(id),
                    Err(_) => {
                        let err = NavError::MalformedLinkLabel(label.trim().to_string());
                        log::debug!("ignoring link: {}", err);
                    }
                }
            }
            NavEvent::PopState => {
                let page = self
                    .renderer
                    .registry()
                    .resolve_by_path(self.history.current_path());
                let (target, path) = (page.id, page.path);
                if self.history.current_path() != path {
                    log::debug!("no page at {}, showing {}", self.history.current_path(), path);
                    self.history.replace(path);
                }
                self.transition(target);
            }
            NavEvent::Login => self.go(PageId::Account),
            NavEvent::Explore => self.go(PageId::Series),
            NavEvent::ReturnHome => self.go(PageId::Home),
            NavEvent::FormSubmitted => {
                self.view.notice = Some(WELCOME_NOTICE.to_string());
                self.go(PageId::Home);
            }
            NavEvent::ToggleMenu => self.view.menu_open = !self.view.menu_open,
        }
    }

    /// Navigate to `identifier`, pushing a history entry.
    ///
    /// An unregistered identifier is rejected and the state is left as is.
    pub fn navigate(&mut self, identifier: &str) -> Result<PageId, NavError> {
        let id = identifier.parse::<PageId>()?;
        if self.renderer.registry().get(id).is_none() {
            return Err(NavError::UnknownPage(identifier.trim().to_string()));
        }
        self.go(id);
        Ok(id)
    }

    /// Advance animations to `t` (seconds) and apply finished fetches.
    pub fn update(&mut self, t: f32) {
        self.clock = t;
        self.view.hero.tick(t);
        let completions = self.fetcher.poll();
        self.apply_completions(completions);
    }

    /// Block until in-flight content arrives (or `timeout`), then apply it.
    pub fn wait_for_content(&mut self, timeout: Duration) {
        let completions = self.fetcher.wait(timeout);
        self.apply_completions(completions);
    }

    pub fn dismiss_notice(&mut self) {
        self.view.notice = None;
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current(&self) -> PageId {
        self.state.current
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn scene(&self) -> &D {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut D {
        &mut self.scene
    }

    pub fn fetcher(&self) -> &ContentFetcher {
        &self.fetcher
    }

    pub fn registry(&self) -> &PageRegistry {
        self.renderer.registry()
    }

    /// Featured list for the globe cards and widgets, once loaded.
    pub fn featured(&self) -> Option<&[ContentItem]> {
        self.fetcher.cached(Category::Featured)
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    fn go(&mut self, id: PageId) {
        let Some(page) = self.renderer.registry().get(id) else {
            log::warn!("no page registered for {}", id);
            return;
        };
        if self.history.current_path() != page.path {
            self.history.push(page.path);
        }
        self.transition(id);
    }

    fn transition(&mut self, id: PageId) {
        let Some(page) = self.renderer.registry().get(id) else {
            log::warn!("transition to unregistered page {}", id);
            return;
        };
        log::info!("page {} -> {} ({})", self.state.current, id, page.path);
        self.state.current = id;
        self.state.path = page.path.to_string();
        self.state.generation += 1;

        let awaiting = self.renderer.render(
            id,
            &mut self.view,
            &mut self.fetcher,
            &mut self.scene,
            self.clock,
        );
        self.awaiting = awaiting.map(|category| (category, self.state.generation));
    }

    fn apply_completions(&mut self, completions: Vec<Completion>) {
        for completion in completions {
            if self.awaiting == Some((completion.category, self.state.generation)) {
                self.awaiting = None;
                self.renderer
                    .fill_region(self.state.current, &mut self.view, completion.items);
            } else {
                log::debug!(
                    "{} arrived after leaving the page that asked for it",
                    completion.category
                );
            }
        }
    }
}

impl<D: SceneDirector> Router<MemoryHistory, D> {
    /// Browser back button.
    pub fn go_back(&mut self) {
        if self.history.back() {
            self.handle(NavEvent::PopState);
        }
    }

    /// Browser forward button.
    pub fn go_forward(&mut self) {
        if self.history.forward() {
            self.handle(NavEvent::PopState);
        }
    }
}
