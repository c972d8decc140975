use eframe::egui;

use aurora_nav::AppConfig;

mod app;
mod ui;

use app::AuroraApp;

/// System fonts tried, in order, for CJK titles.
const CJK_FONT_PATHS: [&str; 4] = [
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/HiraginoSans-W3.otf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
];

fn main() -> eframe::Result<()> {
    env_logger::init();
    if let Err(e) = dotenvy::dotenv() {
        log::debug!("no .env loaded: {}", e);
    }

    let config = AppConfig::from_env();
    log::info!("catalog at {}", config.catalog_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Aurora Anime",
        options,
        Box::new(move |cc| {
            install_cjk_font(&cc.egui_ctx);
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            let app = AuroraApp::new(&config)?;
            Ok(Box::new(app))
        }),
    )
}

fn install_cjk_font(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    for path in &CJK_FONT_PATHS {
        let Ok(data) = std::fs::read(path) else {
            continue;
        };
        fonts
            .font_data
            .insert("cjk".to_owned(), egui::FontData::from_owned(data));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            if let Some(list) = fonts.families.get_mut(&family) {
                list.push("cjk".to_owned());
            }
        }
        log::debug!("loaded CJK font {}", path);
        break;
    }
    ctx.set_fonts(fonts);
}
