//! 窗口裁剪：把窗口可见/可点击区域限制为客户区的内切圆

use crate::error::Result;
use crate::geometry::{ClientExtent, Point};
use crate::host::WindowHost;

/// 默认客户区边长
pub const DEFAULT_DIAMETER: f32 = 300.0;

/// 内切于客户区矩形的椭圆（正方形客户区时为圆），表面坐标（未平移）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleRegion {
    pub center: Point,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl CircleRegion {
    pub fn inscribed(extent: ClientExtent) -> Self {
        let width = extent.width.max(0.0);
        let height = extent.height.max(0.0);
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            radius_x: width / 2.0,
            radius_y: height / 2.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.radius_x <= 0.0 || self.radius_y <= 0.0
    }

    /// 外接矩形 (left, top, right, bottom)
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }

    /// 点是否落在区域内（含边界），用于没有原生窗口区域的平台上做命中测试
    pub fn contains(&self, p: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        let dx = (p.x - self.center.x) / self.radius_x;
        let dy = (p.y - self.center.y) / self.radius_y;
        dx * dx + dy * dy <= 1.0
    }
}

/// 已应用的区域及其对应的客户区尺寸与缩放比例
#[derive(Clone, Copy, Debug, PartialEq)]
struct AppliedRegion {
    extent: ClientExtent,
    /// 每点对应的物理像素数，原生区域按物理像素创建
    scale: f32,
    region: CircleRegion,
}

/// 记录当前已应用的区域，尺寸或缩放比例变化时重新计算并应用
#[derive(Debug, Default)]
pub struct WindowShaper {
    applied: Option<AppliedRegion>,
}

impl WindowShaper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Option<CircleRegion> {
        self.applied.map(|a| a.region)
    }

    pub fn extent(&self) -> Option<ClientExtent> {
        self.applied.map(|a| a.extent)
    }

    pub fn scale(&self) -> Option<f32> {
        self.applied.map(|a| a.scale)
    }

    /// 设置客户区尺寸并应用区域，随后请求重绘
    pub fn set_size(&mut self, extent: ClientExtent, host: &mut dyn WindowHost) -> Result<CircleRegion> {
        host.set_client_size(extent);
        self.apply(extent, host)
    }

    /// 客户区尺寸或缩放比例变化时重新应用；都未变返回 `Ok(false)`。
    /// 窗口移到缩放比例不同的显示器时，点尺寸不变但物理尺寸变了
    pub fn on_resized(&mut self, extent: ClientExtent, host: &mut dyn WindowHost) -> Result<bool> {
        let scale = host.scale_factor();
        if self.extent() == Some(extent) && self.scale() == Some(scale) {
            return Ok(false);
        }
        self.apply(extent, host)?;
        Ok(true)
    }

    fn apply(&mut self, extent: ClientExtent, host: &mut dyn WindowHost) -> Result<CircleRegion> {
        let region = CircleRegion::inscribed(extent);
        if region.is_empty() {
            log::debug!("degenerate client size {:?}, region is empty", extent);
        }
        let scale = host.scale_factor();
        host.apply_region(&region)?;
        log::debug!(
            "window region applied for {}x{} at scale {scale}",
            extent.width,
            extent.height
        );
        self.applied = Some(AppliedRegion {
            extent,
            scale,
            region,
        });
        host.request_redraw();
        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_is_circle_of_diameter_300() {
        let region = CircleRegion::inscribed(ClientExtent::square(DEFAULT_DIAMETER));
        assert_eq!(region.center, Point::new(150.0, 150.0));
        assert_eq!(region.bounds(), (0.0, 0.0, 300.0, 300.0));
    }

    #[test]
    fn contains_excludes_corners() {
        let region = CircleRegion::inscribed(ClientExtent::square(300.0));
        assert!(region.contains(Point::new(150.0, 150.0)));
        assert!(region.contains(Point::new(150.0, 0.0)));
        assert!(!region.contains(Point::new(5.0, 5.0)));
        assert!(!region.contains(Point::new(299.0, 299.0)));
    }

    #[test]
    fn degenerate_extent_gives_empty_region() {
        let region = CircleRegion::inscribed(ClientExtent::new(0.0, -10.0));
        assert!(region.is_empty());
        assert!(!region.contains(Point::ORIGIN));
    }
}
