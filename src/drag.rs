//! 拖动：在表盘任意位置按下左键即交给系统按“标题栏按下”处理移动

use crate::geometry::Point;
use crate::host::WindowHost;
use crate::shaper::CircleRegion;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// 一次按键按下，位置为未平移的表面坐标
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPress {
    pub button: MouseButton,
    pub pos: Point,
}

/// 按下事件的处理结果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// 已转为系统拖动
    CaptionDrag,
    /// 非左键，交给默认处理（如右键菜单）
    PassThrough,
    /// 落在圆形区域外
    Outside,
}

#[derive(Debug, Default)]
pub struct DragController {
    drags: u64,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已发起的拖动次数
    pub fn drag_count(&self) -> u64 {
        self.drags
    }

    pub fn on_press(
        &mut self,
        press: PointerPress,
        region: &CircleRegion,
        host: &mut dyn WindowHost,
    ) -> DragOutcome {
        if press.button != MouseButton::Primary {
            return DragOutcome::PassThrough;
        }
        if !region.contains(press.pos) {
            return DragOutcome::Outside;
        }
        // 先释放按下时的隐式捕获，再让系统接管移动跟踪
        host.release_pointer_capture();
        host.request_caption_drag();
        self.drags += 1;
        log::debug!("caption drag started at ({:.1}, {:.1})", press.pos.x, press.pos.y);
        DragOutcome::CaptionDrag
    }
}
