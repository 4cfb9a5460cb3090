//! 表盘绘制：外圈、60 个刻度、三根指针

use eframe::egui::Color32;

use crate::geometry::{self, ClientExtent, Point, TimeSample};
use crate::surface::{Pen, Surface};

/// 分钟刻度固定用细黑线
pub const MINUTE_TICK_PEN: Pen = Pen::new(Color32::BLACK, 1.0);
pub const HOUR_HAND_WIDTH: f32 = 4.0;
pub const MINUTE_HAND_WIDTH: f32 = 2.0;
pub const SECOND_HAND_WIDTH: f32 = 1.0;

/// 表盘配色与线宽
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceStyle {
    pub background: Color32,
    /// 外圈与整点刻度
    pub face_color: Color32,
    pub face_width: f32,
    /// 时针、分针
    pub hands_color: Color32,
    pub second_hand_color: Color32,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(240, 240, 240),
            face_color: Color32::from_rgb(0, 0, 255),
            face_width: 4.0,
            hands_color: Color32::from_rgb(255, 0, 0),
            second_hand_color: Color32::from_rgb(255, 69, 0),
        }
    }
}

pub struct FaceRenderer {
    style: FaceStyle,
}

impl FaceRenderer {
    pub fn new(style: FaceStyle) -> Self {
        Self { style }
    }

    /// 画一帧。除 `surface` 外不改动任何状态
    pub fn render(&self, surface: &mut dyn Surface, extent: ClientExtent, sample: &TimeSample) {
        surface.clear(self.style.background);
        surface.set_antialiasing(true);
        surface.translate_origin(extent.center());

        self.draw_face(surface, extent);
        self.draw_hands(surface, extent, sample);
    }

    fn draw_face(&self, surface: &mut dyn Surface, extent: ClientExtent) {
        let face_pen = Pen::new(self.style.face_color, self.style.face_width);
        surface.draw_ellipse(
            Point::ORIGIN,
            (extent.width / 2.0, extent.height / 2.0),
            face_pen,
        );

        let hour_pen = face_pen.round();
        for tick in geometry::tick_marks(extent) {
            let pen = if tick.is_hour_mark { hour_pen } else { MINUTE_TICK_PEN };
            surface.draw_line(tick.inner, tick.outer, pen);
        }
    }

    fn draw_hands(&self, surface: &mut dyn Surface, extent: ClientExtent, sample: &TimeSample) {
        let hands = geometry::clock_hands(sample, extent);
        let color = self.style.hands_color;

        surface.draw_line(hands.hour.endpoint, Point::ORIGIN, Pen::new(color, HOUR_HAND_WIDTH));
        surface.draw_line(hands.minute.endpoint, Point::ORIGIN, Pen::new(color, MINUTE_HAND_WIDTH));
        // 秒针最后画，始终在最上层
        surface.draw_line(
            hands.second.endpoint,
            Point::ORIGIN,
            Pen::new(self.style.second_hand_color, SECOND_HAND_WIDTH),
        );
    }
}

impl Default for FaceRenderer {
    fn default() -> Self {
        Self::new(FaceStyle::default())
    }
}
