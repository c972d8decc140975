//! Stateless egui painting helpers for the Aurora shell.
//!
//! Nothing here touches the router; callers pass in the pose, textures and
//! items they want drawn.

use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, PI};

use eframe::egui;

use aurora_nav::content::featured::OrbitCard;
use aurora_nav::scene::ScenePose;

pub const CYAN: egui::Color32 = egui::Color32::from_rgb(0, 243, 255);
pub const VIOLET: egui::Color32 = egui::Color32::from_rgb(168, 85, 247);
pub const PANEL: egui::Color32 = egui::Color32::from_rgb(18, 14, 40);
pub const PLACEHOLDER: egui::Color32 = egui::Color32::from_rgb(32, 26, 64);

const STAR_COUNT: u32 = 140;
const MERIDIANS: usize = 8;
const PARALLELS: usize = 5;
const SEGMENTS: usize = 24;

// ─── Posters ─────────────────────────────────────────────────────────────────

/// Draw the poster for `url` at `size`, or a placeholder while it loads.
pub fn poster(
    ui: &mut egui::Ui,
    textures: &HashMap<String, egui::TextureHandle>,
    url: &str,
    size: egui::Vec2,
) {
    match textures.get(url) {
        Some(tex) => {
            ui.add(egui::Image::new((tex.id(), size)).rounding(4.0));
        }
        None => {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            ui.painter().rect_filled(rect, 4.0, PLACEHOLDER);
        }
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────────

/// Slowly drifting star field filling `rect`.
pub fn starfield(painter: &egui::Painter, rect: egui::Rect, t: f32) {
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..STAR_COUNT {
        let x = next_unit(&mut seed);
        let y = next_unit(&mut seed);
        let twinkle = next_unit(&mut seed);
        let drift = (x + t * 0.004).fract();
        let pos = egui::pos2(
            rect.left() + drift * rect.width(),
            rect.top() + y * rect.height(),
        );
        let alpha = 0.35 + 0.35 * (t * 2.0 + twinkle * 6.0).sin().abs();
        painter.circle_filled(pos, 1.0, egui::Color32::WHITE.gamma_multiply(alpha));
    }
}

/// Wireframe globe for `pose` inside `rect`. Returns its screen center and radius.
pub fn globe(painter: &egui::Painter, rect: egui::Rect, pose: &ScenePose) -> (egui::Pos2, f32) {
    let zoom = 6.0 / pose.camera[2].max(1.0);
    let radius = rect.height().min(rect.width()) * 0.32 * pose.globe_scale * zoom;
    let center = rect.center()
        + egui::vec2((pose.globe_x + pose.camera[0]) * radius * 0.3, 0.0);
    let [tilt, turn] = pose.globe_rotation;
    let stroke = egui::Stroke::new(1.0, CYAN.gamma_multiply(0.45));

    painter.circle_filled(center, radius * 1.08, VIOLET.gamma_multiply(0.08));
    painter.circle_stroke(center, radius, egui::Stroke::new(1.5, CYAN.gamma_multiply(0.8)));

    for k in 0..MERIDIANS {
        let lon = turn + k as f32 * PI / MERIDIANS as f32;
        let points = (0..=SEGMENTS)
            .map(|s| {
                let lat = -FRAC_PI_2 + PI * s as f32 / SEGMENTS as f32;
                let p = [lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos()];
                project(center, radius, tilt, p)
            })
            .collect();
        painter.add(egui::Shape::line(points, stroke));
    }

    for k in 1..PARALLELS {
        let lat = -FRAC_PI_2 + PI * k as f32 / PARALLELS as f32;
        let points = (0..=SEGMENTS * 2)
            .map(|s| {
                let lon = 2.0 * PI * s as f32 / (SEGMENTS * 2) as f32;
                let p = [lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos()];
                project(center, radius, tilt, p)
            })
            .collect();
        painter.add(egui::Shape::line(points, stroke));
    }

    (center, radius)
}

/// Cards on their orbit around the globe. Cards behind the globe are dimmed;
/// the card under `hover` is drawn larger.
pub fn orbit_cards(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    cards: &[OrbitCard],
    turn: f32,
    t: f32,
    hover: Option<egui::Pos2>,
) {
    let orbit = radius * 1.45;
    for card in cards {
        let a = card.angle + turn;
        let depth = (a.cos() + 1.0) / 2.0;
        let pos = center + egui::vec2(orbit * a.sin(), -card.float_y(t) * radius * 0.8);
        let hovered = hover.is_some_and(|h| h.distance(pos) < 40.0);
        let size = if hovered { 14.0 } else { 11.0 };
        let alpha = 0.3 + 0.7 * depth;

        let rect = egui::Rect::from_center_size(pos, egui::vec2(132.0, 34.0));
        painter.rect_filled(rect, 6.0, PANEL.gamma_multiply(alpha));
        painter.rect_stroke(rect, 6.0, egui::Stroke::new(1.0, VIOLET.gamma_multiply(alpha)));
        painter.text(
            pos - egui::vec2(0.0, 6.0),
            egui::Align2::CENTER_CENTER,
            &card.title,
            egui::FontId::proportional(size),
            egui::Color32::WHITE.gamma_multiply(alpha),
        );
        painter.text(
            pos + egui::vec2(0.0, 9.0),
            egui::Align2::CENTER_CENTER,
            &card.tag,
            egui::FontId::proportional(9.0),
            CYAN.gamma_multiply(alpha),
        );
    }
}

fn project(center: egui::Pos2, radius: f32, tilt: f32, p: [f32; 3]) -> egui::Pos2 {
    let y = p[1] * tilt.cos() - p[2] * tilt.sin();
    center + egui::vec2(p[0] * radius, -y * radius)
}

/// xorshift step mapped to [0, 1).
fn next_unit(seed: &mut u32) -> f32 {
    *seed ^= *seed << 13;
    *seed ^= *seed >> 17;
    *seed ^= *seed << 5;
    (*seed % 10_000) as f32 / 10_000.0
}
