//! 无边框圆形模拟时钟：表盘几何、绘制、窗口裁剪与拖动

pub mod app;
pub mod config;
pub mod controller;
pub mod drag;
pub mod error;
pub mod face;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod menu;
pub mod shaper;
pub mod surface;
pub mod timer;

pub use error::{ClockError, Result};
