//! 测试替身：记录调用的窗口宿主与绘图表面
#![allow(dead_code)]

use analog_clock::geometry::{ClientExtent, Point};
use analog_clock::host::WindowHost;
use analog_clock::shaper::CircleRegion;
use analog_clock::surface::{Pen, Surface};
use analog_clock::{ClockError, Result};
use eframe::egui::Color32;

/// 发给宿主的指令，按调用顺序记录
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    StripChrome,
    SetClientSize(ClientExtent),
    ApplyRegion(CircleRegion),
    EnableDoubleBuffering,
    HideFromTaskbar,
    Focus,
    ReleaseCapture,
    CaptionDrag,
    Redraw,
    Close,
}

pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    /// 为 true 时 `apply_region` 返回错误
    pub fail_region: bool,
    /// 当前显示器缩放比例
    pub scale: f32,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            fail_region: false,
            scale: 1.0,
        }
    }
}

impl RecordingHost {
    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl WindowHost for RecordingHost {
    fn strip_chrome(&mut self) {
        self.calls.push(HostCall::StripChrome);
    }

    fn set_client_size(&mut self, extent: ClientExtent) {
        self.calls.push(HostCall::SetClientSize(extent));
    }

    fn scale_factor(&self) -> f32 {
        self.scale
    }

    fn apply_region(&mut self, region: &CircleRegion) -> Result<()> {
        if self.fail_region {
            return Err(ClockError::Region("test".into()));
        }
        self.calls.push(HostCall::ApplyRegion(*region));
        Ok(())
    }

    fn enable_double_buffering(&mut self) {
        self.calls.push(HostCall::EnableDoubleBuffering);
    }

    fn hide_from_taskbar(&mut self) {
        self.calls.push(HostCall::HideFromTaskbar);
    }

    fn focus(&mut self) {
        self.calls.push(HostCall::Focus);
    }

    fn release_pointer_capture(&mut self) {
        self.calls.push(HostCall::ReleaseCapture);
    }

    fn request_caption_drag(&mut self) {
        self.calls.push(HostCall::CaptionDrag);
    }

    fn request_redraw(&mut self) {
        self.calls.push(HostCall::Redraw);
    }

    fn close(&mut self) {
        self.calls.push(HostCall::Close);
    }
}

/// 绘图图元，坐标已按当前原点平移
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color32),
    AntiAlias(bool),
    Translate(Point),
    Line { from: Point, to: Point, pen: Pen },
    Ellipse { center: Point, radii: (f32, f32), pen: Pen },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    origin: Point,
}

impl RecordingSurface {
    pub fn lines(&self) -> Vec<(Point, Point, Pen)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, pen } => Some((*from, *to, *pen)),
                _ => None,
            })
            .collect()
    }

    fn shift(&self, p: Point) -> Point {
        Point::new(p.x + self.origin.x, p.y + self.origin.y)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color32) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn set_antialiasing(&mut self, enabled: bool) {
        self.ops.push(DrawOp::AntiAlias(enabled));
    }

    fn translate_origin(&mut self, offset: Point) {
        self.origin = self.shift(offset);
        self.ops.push(DrawOp::Translate(offset));
    }

    fn draw_line(&mut self, from: Point, to: Point, pen: Pen) {
        let (from, to) = (self.shift(from), self.shift(to));
        self.ops.push(DrawOp::Line { from, to, pen });
    }

    fn draw_ellipse(&mut self, center: Point, radii: (f32, f32), pen: Pen) {
        let center = self.shift(center);
        self.ops.push(DrawOp::Ellipse { center, radii, pen });
    }
}
