//! Top navigation bar.

use eframe::egui;

use aurora_nav::{NavEvent, PageId};

use super::{AuroraApp, ShellAction};
use crate::ui::{CYAN, VIOLET};

/// Pages linked from the menu, left to right.
const MENU: [PageId; 5] = [
    PageId::Series,
    PageId::Movies,
    PageId::Mows,
    PageId::News,
    PageId::Community,
];

impl AuroraApp {
    pub fn draw_nav_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<ShellAction>) {
        let compact = self.router.scene().is_compact();
        let history = self.router.history();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(history.can_go_back(), egui::Button::new("◀"))
                .on_hover_text("Back")
                .clicked()
            {
                actions.push(ShellAction::Back);
            }
            if ui
                .add_enabled(history.can_go_forward(), egui::Button::new("▶"))
                .on_hover_text("Forward")
                .clicked()
            {
                actions.push(ShellAction::Forward);
            }

            ui.add_space(8.0);
            let logo = egui::RichText::new("AURORA").size(20.0).strong().color(CYAN);
            if ui
                .add(egui::Label::new(logo).sense(egui::Sense::click()))
                .clicked()
            {
                actions.push(link(PageId::Home));
            }
            ui.add_space(16.0);

            if compact {
                if ui.button("☰").clicked() {
                    actions.push(ShellAction::Nav(NavEvent::ToggleMenu));
                }
            } else {
                self.draw_menu(ui, actions);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let account = egui::RichText::new("LOGIN").color(VIOLET).strong();
                if ui.button(account).clicked() {
                    actions.push(ShellAction::Nav(NavEvent::Login));
                }
            });
        });

        if compact && self.router.view().menu_open {
            ui.vertical(|ui| self.draw_menu(ui, actions));
        }
    }

    fn draw_menu(&self, ui: &mut egui::Ui, actions: &mut Vec<ShellAction>) {
        for id in MENU {
            let active = self.router.current() == id;
            if ui.selectable_label(active, id.key()).clicked() {
                actions.push(link(id));
            }
        }
    }
}

fn link(id: PageId) -> ShellAction {
    ShellAction::Nav(NavEvent::Link(id.key().to_string()))
}
