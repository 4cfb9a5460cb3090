//! 表盘几何：指针角度、端点与刻度位置的纯函数
//!
//! 坐标系以窗口中心为原点，角度 0 指向右方；由于 y 轴向下，角度增大即顺时针。

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use chrono::Timelike;

/// 时针长度系数（相对客户区宽/高）
pub const HOUR_HAND_FACTOR: f32 = 0.2;
/// 分针长度系数
pub const MINUTE_HAND_FACTOR: f32 = 0.3;
/// 秒针长度系数
pub const SECOND_HAND_FACTOR: f32 = 0.4;

/// 刻度外端半径系数
pub const TICK_OUTER_FACTOR: f32 = 0.45;
/// 分钟刻度内端半径系数
pub const MINUTE_TICK_INNER_FACTOR: f32 = 0.425;
/// 整点刻度内端半径系数
pub const HOUR_TICK_INNER_FACTOR: f32 = 0.4;

/// 一圈的刻度数
pub const TICK_COUNT: u32 = 60;

/// 二维点（设备无关像素）
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 客户区尺寸（设备无关像素）
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientExtent {
    pub width: f32,
    pub height: f32,
}

impl ClientExtent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// 正方形尺寸
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// 客户区几何中心（未平移的表面坐标）
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// 宽、高各乘以同一系数，用于按比例缩放椭圆半径
    fn scaled(&self, factor: f32) -> (f32, f32) {
        (factor * self.width, factor * self.height)
    }
}

/// 某一时刻的时、分、秒，时与分包含不足一个单位的小数部分，使指针平滑移动
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSample {
    /// 0..24，含分、秒折算
    pub hour: f32,
    /// 0..60，含秒折算
    pub minute: f32,
    /// 0..=59
    pub second: u32,
}

impl TimeSample {
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        let (h, m, s) = (time.hour() as f32, time.minute() as f32, time.second());
        Self {
            hour: h + m / 60.0 + s as f32 / 3600.0,
            minute: m + s as f32 / 60.0,
            second: s,
        }
    }

    /// 当前本地时间
    pub fn now() -> Self {
        Self::from_time(&chrono::Local::now())
    }
}

/// 单根指针：角度与端点（起点恒为原点）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandGeometry {
    pub angle: f64,
    pub endpoint: Point,
}

/// 三根指针
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockHands {
    pub hour: HandGeometry,
    pub minute: HandGeometry,
    pub second: HandGeometry,
}

/// 单个刻度
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// 1..=60
    pub index: u32,
    pub inner: Point,
    pub outer: Point,
    pub is_hour_mark: bool,
}

pub fn hour_angle(sample: &TimeSample) -> f64 {
    -FRAC_PI_2 + TAU * (sample.hour as f64 / 12.0)
}

pub fn minute_angle(sample: &TimeSample) -> f64 {
    -FRAC_PI_2 + TAU * (sample.minute as f64 / 60.0)
}

pub fn second_angle(sample: &TimeSample) -> f64 {
    -FRAC_PI_2 + TAU * (sample.second as f64 / 60.0)
}

/// 按系数缩放后的椭圆上、角度为 `angle` 的点
fn polar(extent: ClientExtent, factor: f32, angle: f64) -> Point {
    let (rx, ry) = extent.scaled(factor);
    Point::new(rx * angle.cos() as f32, ry * angle.sin() as f32)
}

fn hand(extent: ClientExtent, factor: f32, angle: f64) -> HandGeometry {
    HandGeometry {
        angle,
        endpoint: polar(extent, factor, angle),
    }
}

/// 计算三根指针。宽高分别缩放，宽高不等时指针扫过的是椭圆
pub fn clock_hands(sample: &TimeSample, extent: ClientExtent) -> ClockHands {
    ClockHands {
        hour: hand(extent, HOUR_HAND_FACTOR, hour_angle(sample)),
        minute: hand(extent, MINUTE_HAND_FACTOR, minute_angle(sample)),
        second: hand(extent, SECOND_HAND_FACTOR, second_angle(sample)),
    }
}

/// 第 `index` 个刻度（1..=60）。刻度角度不带 -π/2 偏移，0 落在 3 点方向
pub fn tick_mark(index: u32, extent: ClientExtent) -> TickMark {
    let angle = PI * index as f64 / 30.0;
    let is_hour_mark = index % 5 == 0;
    let inner_factor = if is_hour_mark {
        HOUR_TICK_INNER_FACTOR
    } else {
        MINUTE_TICK_INNER_FACTOR
    };
    TickMark {
        index,
        inner: polar(extent, inner_factor, angle),
        outer: polar(extent, TICK_OUTER_FACTOR, angle),
        is_hour_mark,
    }
}

pub fn tick_marks(extent: ClientExtent) -> impl Iterator<Item = TickMark> {
    (1..=TICK_COUNT).map(move |index| tick_mark(index, extent))
}

/// 用折线近似椭圆轮廓，供没有原生椭圆图元的绘图表面使用
pub fn ellipse_outline(center: Point, radii: (f32, f32), segments: usize) -> Vec<Point> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let angle = TAU * i as f64 / segments as f64;
            Point::new(
                center.x + radii.0 * angle.cos() as f32,
                center.y + radii.1 * angle.sin() as f32,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32, s: u32) -> TimeSample {
        TimeSample::from_time(&NaiveTime::from_hms_opt(h, m, s).unwrap())
    }

    #[test]
    fn sample_includes_fractions() {
        let s = at(10, 30, 36);
        assert_abs_diff_eq!(s.hour, 10.51, epsilon = 1e-5);
        assert_abs_diff_eq!(s.minute, 30.6, epsilon = 1e-5);
        assert_eq!(s.second, 36);
    }

    #[test]
    fn three_oclock_hour_angle_is_zero() {
        assert_abs_diff_eq!(hour_angle(&at(3, 0, 0)), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn half_past_minute_hand_points_down() {
        let hands = clock_hands(&at(0, 30, 0), ClientExtent::square(300.0));
        assert_abs_diff_eq!(hands.minute.endpoint.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(hands.minute.endpoint.y, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn first_tick_sits_just_past_three_oclock() {
        let tick = tick_mark(1, ClientExtent::square(300.0));
        assert!(!tick.is_hour_mark);
        assert!(tick.outer.x > 0.0 && tick.outer.y > 0.0);
        // 第 15 个刻度落在 6 点方向
        let six = tick_mark(15, ClientExtent::square(300.0));
        assert_abs_diff_eq!(six.outer.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(six.outer.y, 135.0, epsilon = 1e-4);
    }

    #[test]
    fn outline_is_closed_polygon_on_ellipse() {
        let pts = ellipse_outline(Point::new(150.0, 100.0), (150.0, 100.0), 64);
        assert_eq!(pts.len(), 64);
        for p in pts {
            let nx = (p.x - 150.0) / 150.0;
            let ny = (p.y - 100.0) / 100.0;
            assert_abs_diff_eq!(nx * nx + ny * ny, 1.0, epsilon = 1e-4);
        }
    }
}
