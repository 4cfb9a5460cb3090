//! 绘图表面：表盘绘制只依赖这几个图元，egui 的 Painter 是其中一种实现

use eframe::egui;
use egui::{Color32, Pos2, Shape, Stroke};

use crate::geometry::{self, Point};

/// 椭圆折线近似的段数
const ELLIPSE_SEGMENTS: usize = 120;

/// 线端样式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Flat,
    Round,
}

/// 画笔：颜色、线宽、线端
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: Color32,
    pub width: f32,
    pub cap: LineCap,
}

impl Pen {
    pub const fn new(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Flat,
        }
    }

    pub const fn round(mut self) -> Self {
        self.cap = LineCap::Round;
        self
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.width, self.color)
    }
}

/// 表盘绘制所需的最小图元集合
pub trait Surface {
    /// 用背景色清空可见区域
    fn clear(&mut self, color: Color32);
    /// 图形与文字抗锯齿
    fn set_antialiasing(&mut self, enabled: bool);
    /// 平移坐标原点（累加）
    fn translate_origin(&mut self, offset: Point);
    fn draw_line(&mut self, from: Point, to: Point, pen: Pen);
    fn draw_ellipse(&mut self, center: Point, radii: (f32, f32), pen: Pen);
}

/// 基于 egui::Painter 的绘图表面。`rect` 是整个客户区，可见区域是其内切椭圆。
///
/// egui 的抗锯齿（feathering）是整个 Context 的设置，由 `ClockApp::new` 开启，
/// 这里只记录绘制方的请求。
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    origin: Pos2,
    antialiasing: bool,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            rect,
            origin: rect.min,
            antialiasing: false,
        }
    }

    pub fn antialiasing(&self) -> bool {
        self.antialiasing
    }

    fn to_screen(&self, p: Point) -> Pos2 {
        Pos2::new(self.origin.x + p.x, self.origin.y + p.y)
    }

    fn outline(&self, center: Point, radii: (f32, f32)) -> Vec<Pos2> {
        geometry::ellipse_outline(center, radii, ELLIPSE_SEGMENTS)
            .into_iter()
            .map(|p| self.to_screen(p))
            .collect()
    }
}

impl Surface for EguiSurface<'_> {
    fn clear(&mut self, color: Color32) {
        // 窗口背景透明，只有内切椭圆内可见
        let size = self.rect.size();
        let center = Point::new(self.rect.min.x + size.x / 2.0, self.rect.min.y + size.y / 2.0);
        let points: Vec<Pos2> = geometry::ellipse_outline(center, (size.x / 2.0, size.y / 2.0), ELLIPSE_SEGMENTS)
            .into_iter()
            .map(|p| Pos2::new(p.x, p.y))
            .collect();
        self.painter
            .add(Shape::convex_polygon(points, color, Stroke::NONE));
    }

    fn set_antialiasing(&mut self, enabled: bool) {
        if enabled != self.antialiasing {
            log::trace!("surface antialiasing {enabled}");
        }
        self.antialiasing = enabled;
    }

    fn translate_origin(&mut self, offset: Point) {
        self.origin += egui::vec2(offset.x, offset.y);
    }

    fn draw_line(&mut self, from: Point, to: Point, pen: Pen) {
        let (a, b) = (self.to_screen(from), self.to_screen(to));
        self.painter.line_segment([a, b], pen.stroke());
        if pen.cap == LineCap::Round {
            let r = pen.width / 2.0;
            self.painter.circle_filled(a, r, pen.color);
            self.painter.circle_filled(b, r, pen.color);
        }
    }

    fn draw_ellipse(&mut self, center: Point, radii: (f32, f32), pen: Pen) {
        let points = self.outline(center, radii);
        self.painter.add(Shape::closed_line(points, pen.stroke()));
    }
}
