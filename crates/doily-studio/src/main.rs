use anyhow::Context;
use doily_engine::logging::{init_logging, LoggingConfig};
use doily_ui::Application;

/// Fonts tried in order for the control labels.
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut app = Application::new().title("Digital Doily");
    match load_font() {
        Some((path, bytes)) => {
            log::info!("using UI font {path}");
            app = app.font(bytes);
        }
        None => log::warn!("no UI font found; controls will have no labels"),
    }

    app.run().context("Digital Doily stopped with an error")
}

fn load_font() -> Option<(&'static str, Vec<u8>)> {
    FONT_PATHS
        .iter()
        .find_map(|&p| std::fs::read(p).ok().map(|bytes| (p, bytes)))
}
