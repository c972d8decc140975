//! `AuroraApp`: the desktop shell around the router.
//!
//! The shell owns no navigation state of its own. It draws the router's
//! view state and feeds clicks back as [`ShellAction`]s, applied after the
//! frame is laid out.
//!
//! - `navigation` - per-frame tick, action dispatch, poster textures
//! - `toolbar`    - nav bar, back/forward, mobile menu
//! - `content`    - hero, globe, sections, widgets, notices

pub mod navigation;
pub mod toolbar;
pub mod content;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use eframe::egui;

use aurora_nav::content::ContentFetcher;
use aurora_nav::net::catalog::JikanCatalog;
use aurora_nav::net::image::PosterLoader;
use aurora_nav::router::MemoryHistory;
use aurora_nav::scene::CameraRig;
use aurora_nav::view::ViewState;
use aurora_nav::{AppConfig, FetchError, NavEvent, PageRegistry, Router};

/// What the user asked for during a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Nav(NavEvent),
    Back,
    Forward,
    DismissNotice,
}

pub struct AuroraApp {
    pub router: Router<MemoryHistory, CameraRig>,
    pub posters: PosterLoader,
    pub poster_textures: HashMap<String, egui::TextureHandle>,
    // Account form
    pub email: String,
    pub password: String,
    pub app_start: Instant,
}

impl AuroraApp {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let catalog = Arc::new(JikanCatalog::new(config)?);
        let mut router = Router::new(
            PageRegistry::global().clone(),
            ViewState::aurora(),
            ContentFetcher::background(catalog),
            MemoryHistory::new(config.start_path.clone()),
            CameraRig::new(),
        );
        router.start();

        Ok(Self {
            router,
            posters: PosterLoader::new(),
            poster_textures: HashMap::new(),
            email: String::new(),
            password: String::new(),
            app_start: Instant::now(),
        })
    }

    /// Seconds since the shell started.
    pub fn elapsed(&self) -> f32 {
        self.app_start.elapsed().as_secs_f32()
    }
}

impl eframe::App for AuroraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(ctx);

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            self.draw_nav_bar(ui, &mut actions);
        });

        if self.router.view().home_widgets_visible {
            egui::SidePanel::right("widgets")
                .default_width(240.0)
                .show(ctx, |ui| {
                    self.draw_widgets(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_main(ui, &mut actions);
        });

        self.draw_notice(ctx, &mut actions);
        self.apply(actions);
    }
}
