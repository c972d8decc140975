//! Per-frame bookkeeping and action dispatch for `AuroraApp`.

use eframe::egui;

use aurora_nav::content::featured;
use aurora_nav::net::image::Poster;

use super::{AuroraApp, ShellAction};

impl AuroraApp {
    /// Advance the router clock, follow the viewport, and upload any posters
    /// that finished downloading.
    pub fn tick(&mut self, ctx: &egui::Context) {
        let t = self.elapsed();
        self.router.update(t);
        self.router
            .scene_mut()
            .adjust_for_viewport(ctx.screen_rect().width());

        self.request_posters();
        for url in self.posters.poll() {
            if let Some(poster) = self.posters.get(&url) {
                let texture = upload(ctx, &url, poster);
                self.poster_textures.insert(url, texture);
            }
        }

        // The globe never stops spinning.
        ctx.request_repaint();
    }

    /// Apply the frame's actions in the order they were collected.
    pub fn apply(&mut self, actions: Vec<ShellAction>) {
        for action in actions {
            log::debug!("shell action: {:?}", action);
            match action {
                ShellAction::Nav(event) => self.router.handle(event),
                ShellAction::Back => self.router.go_back(),
                ShellAction::Forward => self.router.go_forward(),
                ShellAction::DismissNotice => self.router.dismiss_notice(),
            }
        }
    }

    /// Ask for every poster the current screen can show.
    fn request_posters(&mut self) {
        if let Some(section) = self.router.view().active_section() {
            if let Some(region) = self.router.view().region(section) {
                for item in region.items() {
                    self.posters.request(&item.image);
                }
            }
        }

        if self.router.view().home_widgets_visible {
            if let Some(items) = self.router.featured() {
                for entry in featured::trending(items) {
                    self.posters.request(&entry.thumbnail);
                }
                for url in featured::new_releases(items) {
                    self.posters.request(&url);
                }
            }
        }
    }
}

fn upload(ctx: &egui::Context, url: &str, poster: &Poster) -> egui::TextureHandle {
    let image = egui::ColorImage::from_rgba_unmultiplied(
        [poster.width as usize, poster.height as usize],
        &poster.rgba,
    );
    ctx.load_texture(format!("poster:{}", url), image, egui::TextureOptions::LINEAR)
}
