//! 只读配置：表盘尺寸、配色、日志过滤。从不写回

use std::path::{Path, PathBuf};

use eframe::egui::Color32;
use serde::Deserialize;

use crate::error::{ClockError, Result};
use crate::face::FaceStyle;
use crate::geometry::ClientExtent;
use crate::shaper::DEFAULT_DIAMETER;

/// 配置文件名（放在配置目录下）
pub const CONFIG_FILENAME: &str = "clock.json";
/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "ANALOG_CLOCK_CONFIG";

/// 应用配置目录
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("analog-clock")
}

/// 配置文件路径，环境变量优先
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| config_dir().join(CONFIG_FILENAME))
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// 窗口直径（设备无关像素）
    pub diameter: f32,
    pub background: [u8; 3],
    pub face_color: [u8; 3],
    pub face_width: f32,
    pub hands_color: [u8; 3],
    pub second_hand_color: [u8; 3],
    /// env_logger 过滤串，未设置时读 RUST_LOG
    pub log_filter: Option<String>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        let style = FaceStyle::default();
        let rgb = |c: Color32| [c.r(), c.g(), c.b()];
        Self {
            diameter: DEFAULT_DIAMETER,
            background: rgb(style.background),
            face_color: rgb(style.face_color),
            face_width: style.face_width,
            hands_color: rgb(style.hands_color),
            second_hand_color: rgb(style.second_hand_color),
            log_filter: None,
        }
    }
}

impl ClockConfig {
    /// 读取配置；文件不存在时返回默认值
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ClockError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&text).map_err(|source| ClockError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// 非正直径回退到默认值
    pub fn extent(&self) -> ClientExtent {
        let side = if self.diameter > 0.0 { self.diameter } else { DEFAULT_DIAMETER };
        ClientExtent::square(side)
    }

    pub fn face_style(&self) -> FaceStyle {
        let color = |[r, g, b]: [u8; 3]| Color32::from_rgb(r, g, b);
        FaceStyle {
            background: color(self.background),
            face_color: color(self.face_color),
            face_width: self.face_width.max(0.0),
            hands_color: color(self.hands_color),
            second_hand_color: color(self.second_hand_color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ClockConfig::parse("{}").unwrap();
        assert_eq!(config, ClockConfig::default());
        assert_eq!(config.face_style(), FaceStyle::default());
        assert_eq!(config.extent(), ClientExtent::square(300.0));
    }

    #[test]
    fn partial_override() {
        let config = ClockConfig::parse(r#"{"diameter": 200, "second_hand_color": [0, 128, 0]}"#).unwrap();
        assert_eq!(config.extent(), ClientExtent::square(200.0));
        assert_eq!(config.face_style().second_hand_color, Color32::from_rgb(0, 128, 0));
        assert_eq!(config.face_style().face_color, FaceStyle::default().face_color);
    }

    #[test]
    fn non_positive_diameter_falls_back() {
        let config = ClockConfig::parse(r#"{"diameter": 0}"#).unwrap();
        assert_eq!(config.extent(), ClientExtent::square(DEFAULT_DIAMETER));
    }

    #[test]
    fn missing_file_is_default() {
        let path = std::env::temp_dir().join("analog-clock-missing-config.json");
        let config = ClockConfig::load_from(&path).unwrap();
        assert_eq!(config, ClockConfig::default());
    }

    #[test]
    fn malformed_file_is_config_error() {
        let path = std::env::temp_dir().join(format!("analog-clock-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = ClockConfig::load_from(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, ClockError::Config { .. }));
    }
}
