//! Analog Clock — 无边框圆形模拟时钟（Rust + egui）

use analog_clock::app::ClockApp;
use analog_clock::config::{self, ClockConfig};
use analog_clock::controller::ClockController;
use analog_clock::face::FaceRenderer;
use analog_clock::logging::{LoggingConfig, init_logging};

fn main() -> eframe::Result<()> {
    // 日志过滤可能来自配置，先读配置再初始化日志
    let loaded = ClockConfig::load_from(&config::config_path());
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..Default::default()
    });
    if let Err(e) = &loaded {
        log::warn!("{e}; using defaults");
    }

    let extent = config.extent();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([extent.width, extent.height])
            .with_title("Analog Clock")
            .with_decorations(false) // 加载时控制器还会再去一次窗口装饰
            .with_transparent(true)
            .with_resizable(false)
            .with_taskbar(false),
        ..Default::default()
    };
    let controller = ClockController::new(FaceRenderer::new(config.face_style()), extent);
    eframe::run_native(
        "Analog Clock",
        options,
        Box::new(move |cc| Ok(Box::new(ClockApp::new(cc, controller)))),
    )
}
