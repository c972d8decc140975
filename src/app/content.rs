//! Central panel, widget sidebar and notices.

use eframe::egui;

use aurora_nav::content::featured;
use aurora_nav::content::ContentItem;
use aurora_nav::view::{RegionState, LOADING_TEXT};
use aurora_nav::{NavEvent, PageId};

use super::{AuroraApp, ShellAction};
use crate::ui::{self, CYAN, PANEL, VIOLET};

const GRID_POSTER: egui::Vec2 = egui::vec2(150.0, 210.0);
const GLOBE_HEIGHT: f32 = 340.0;

impl AuroraApp {
    pub fn draw_main(&mut self, ui: &mut egui::Ui, actions: &mut Vec<ShellAction>) {
        let t = self.router.clock();
        let compact = self.router.scene().is_compact();

        egui::ScrollArea::vertical().show(ui, |ui| {
            if compact {
                self.draw_globe(ui, t);
                self.draw_hero(ui, t, actions);
            } else {
                ui.columns(2, |cols| {
                    self.draw_hero(&mut cols[0], t, actions);
                    self.draw_globe(&mut cols[1], t);
                });
            }
            ui.add_space(24.0);

            if self.router.current() == PageId::Account {
                self.draw_account_form(ui, actions);
            } else {
                self.draw_section(ui);
            }
        });
    }

    fn draw_hero(&self, ui: &mut egui::Ui, t: f32, actions: &mut Vec<ShellAction>) {
        let hero = &self.router.view().hero;
        let alpha = hero.opacity(t);
        let text = hero.shown();

        ui.add_space(40.0 + hero.offset_y(t));
        ui.label(
            egui::RichText::new(&text.title)
                .size(44.0)
                .strong()
                .color(CYAN.gamma_multiply(alpha)),
        );
        ui.label(
            egui::RichText::new(&text.subtitle)
                .size(44.0)
                .strong()
                .color(egui::Color32::WHITE.gamma_multiply(alpha)),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(&text.description)
                .size(15.0)
                .color(egui::Color32::LIGHT_GRAY.gamma_multiply(alpha)),
        );
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if self.router.current() == PageId::Home && ui.button("EXPLORE NOW").clicked() {
                actions.push(ShellAction::Nav(NavEvent::Explore));
            }
            if self.router.view().exit_visible && ui.button("← BACK TO HOME").clicked() {
                actions.push(ShellAction::Nav(NavEvent::ReturnHome));
            }
        });
    }

    fn draw_globe(&self, ui: &mut egui::Ui, t: f32) {
        let size = egui::vec2(ui.available_width(), GLOBE_HEIGHT);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        let pose = self.router.scene().pose(t);

        ui::starfield(&painter, rect, t);
        let (center, radius) = ui::globe(&painter, rect, &pose);
        if let Some(items) = self.router.featured() {
            let cards = featured::orbit_cards(items);
            ui::orbit_cards(
                &painter,
                center,
                radius,
                &cards,
                pose.globe_rotation[1],
                t,
                response.hover_pos(),
            );
        }
    }

    fn draw_section(&self, ui: &mut egui::Ui) {
        let view = self.router.view();
        let Some(section) = view.active_section() else {
            return;
        };

        ui.heading(
            egui::RichText::new(self.router.current().key())
                .color(VIOLET)
                .strong(),
        );
        ui.add_space(8.0);

        match view.region(section) {
            Some(RegionState::Loading) => {
                ui.label(egui::RichText::new(LOADING_TEXT).color(egui::Color32::WHITE));
            }
            Some(RegionState::Ready(items)) => self.draw_grid(ui, items),
            Some(RegionState::Empty) | None => {}
        }
    }

    fn draw_grid(&self, ui: &mut egui::Ui, items: &[ContentItem]) {
        ui.horizontal_wrapped(|ui| {
            for item in items {
                egui::Frame::none()
                    .fill(PANEL)
                    .rounding(6.0)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.set_width(GRID_POSTER.x);
                        ui.vertical(|ui| {
                            ui::poster(ui, &self.poster_textures, &item.image, GRID_POSTER);
                            ui.label(egui::RichText::new(&item.title).strong());
                            ui.label(
                                egui::RichText::new(&item.description)
                                    .small()
                                    .color(CYAN),
                            );
                        });
                    });
            }
        });
    }

    fn draw_account_form(&mut self, ui: &mut egui::Ui, actions: &mut Vec<ShellAction>) {
        ui.heading(egui::RichText::new("CREATE ACCOUNT").color(VIOLET).strong());
        ui.add_space(8.0);

        egui::Grid::new("account_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Email");
                ui.text_edit_singleline(&mut self.email);
                ui.end_row();
                ui.label("Password");
                ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
                ui.end_row();
            });
        ui.add_space(8.0);

        if ui.button("SIGN UP").clicked() {
            self.email.clear();
            self.password.clear();
            actions.push(ShellAction::Nav(NavEvent::FormSubmitted));
        }
    }

    pub fn draw_widgets(&self, ui: &mut egui::Ui) {
        let Some(items) = self.router.featured() else {
            ui.label(egui::RichText::new(LOADING_TEXT).small());
            return;
        };

        ui.heading(egui::RichText::new("TRENDING").color(CYAN).strong());
        for entry in featured::trending(items) {
            ui.horizontal(|ui| {
                ui::poster(ui, &self.poster_textures, &entry.thumbnail, egui::vec2(40.0, 56.0));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&entry.title).strong());
                    ui.label(egui::RichText::new(&entry.tag).small().color(VIOLET));
                });
            });
        }

        ui.add_space(16.0);
        ui.heading(egui::RichText::new("NEW RELEASES").color(CYAN).strong());
        ui.horizontal_wrapped(|ui| {
            for url in featured::new_releases(items) {
                ui::poster(ui, &self.poster_textures, &url, egui::vec2(64.0, 90.0));
            }
        });
    }

    pub fn draw_notice(&self, ctx: &egui::Context, actions: &mut Vec<ShellAction>) {
        let Some(notice) = &self.router.view().notice else {
            return;
        };
        egui::Window::new("Aurora")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 80.0))
            .show(ctx, |ui| {
                ui.label(notice);
                if ui.button("OK").clicked() {
                    actions.push(ShellAction::DismissNotice);
                }
            });
    }
}
