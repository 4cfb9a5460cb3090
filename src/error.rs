//! 错误类型：仅包含窗口系统等环境性失败，几何与绘制本身不会出错

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// 拿不到原生窗口句柄（窗口尚未创建或平台不支持）
    #[error("native window handle unavailable")]
    WindowHandle,
    /// 创建或设置窗口区域失败
    #[error("failed to apply window region: {0}")]
    Region(String),
    /// 配置文件格式错误
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// 配置文件读取失败
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ClockError>;
