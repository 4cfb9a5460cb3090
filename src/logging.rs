//! 日志初始化（log + env_logger）

use std::sync::Once;

/// 日志配置；`env_filter` 使用 env_logger 的过滤语法，如 "info"、"analog_clock=debug"
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// 初始化全局 logger，只生效一次，后续调用忽略
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }
        builder.write_style(config.write_style);
        // 测试里可能已有 logger，忽略重复安装
        let _ = builder.try_init();
        log::debug!("logging initialized");
    });
}
