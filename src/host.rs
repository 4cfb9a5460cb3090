//! 窗口系统接口：控制器只通过 `WindowHost` 操作窗口，eframe 下由 `EguiHost` 实现

use eframe::egui;
use egui::ViewportCommand;

use crate::error::Result;
use crate::geometry::ClientExtent;
use crate::shaper::CircleRegion;

/// 控制器需要的窗口能力
pub trait WindowHost {
    /// 去掉标题栏、边框和系统菜单
    fn strip_chrome(&mut self);
    fn set_client_size(&mut self, extent: ClientExtent);
    /// 每点对应的物理像素数
    fn scale_factor(&self) -> f32;
    /// 限制窗口可见与可点击区域
    fn apply_region(&mut self, region: &CircleRegion) -> Result<()>;
    fn enable_double_buffering(&mut self);
    /// 不在任务栏和 Alt+Tab 中显示
    fn hide_from_taskbar(&mut self);
    fn focus(&mut self);
    fn release_pointer_capture(&mut self);
    /// 模拟在标题栏按下左键，交由系统跟踪窗口移动
    fn request_caption_drag(&mut self);
    fn request_redraw(&mut self);
    fn close(&mut self);
}

/// eframe 窗口
pub struct EguiHost<'a> {
    ctx: &'a egui::Context,
    #[cfg_attr(not(windows), allow(dead_code))]
    frame: &'a eframe::Frame,
}

impl<'a> EguiHost<'a> {
    pub fn new(ctx: &'a egui::Context, frame: &'a eframe::Frame) -> Self {
        Self { ctx, frame }
    }
}

impl WindowHost for EguiHost<'_> {
    fn strip_chrome(&mut self) {
        self.ctx.send_viewport_cmd(ViewportCommand::Decorations(false));
        #[cfg(windows)]
        if !win32::remove_system_menu(self.frame) {
            log::warn!("could not remove system menu");
        }
    }

    fn set_client_size(&mut self, extent: ClientExtent) {
        self.ctx.send_viewport_cmd(ViewportCommand::InnerSize(egui::vec2(
            extent.width,
            extent.height,
        )));
    }

    fn scale_factor(&self) -> f32 {
        self.ctx.pixels_per_point()
    }

    #[cfg(windows)]
    fn apply_region(&mut self, region: &CircleRegion) -> Result<()> {
        let ppp = self.scale_factor();
        let (left, top, right, bottom) = region.bounds();
        let px = |v: f32| (v * ppp).round() as i32;
        win32::set_elliptic_region(self.frame, (px(left), px(top), px(right), px(bottom)))
    }

    #[cfg(not(windows))]
    fn apply_region(&mut self, region: &CircleRegion) -> Result<()> {
        // 无原生窗口区域：透明背景只画圆内，命中测试由 CircleRegion::contains 完成
        log::trace!("using transparent viewport for region {:?}", region);
        Ok(())
    }

    fn enable_double_buffering(&mut self) {
        // glow 后端的交换链本身就是双缓冲
        log::trace!("double buffering provided by the swap chain");
    }

    fn hide_from_taskbar(&mut self) {
        #[cfg(windows)]
        if !win32::set_tool_window(self.frame) {
            log::warn!("could not hide window from taskbar");
        }
        #[cfg(not(windows))]
        log::trace!("taskbar visibility set by viewport builder");
    }

    fn focus(&mut self) {
        self.ctx.send_viewport_cmd(ViewportCommand::Focus);
    }

    fn release_pointer_capture(&mut self) {
        #[cfg(windows)]
        win32::release_capture();
    }

    fn request_caption_drag(&mut self) {
        self.ctx.send_viewport_cmd(ViewportCommand::StartDrag);
    }

    fn request_redraw(&mut self) {
        self.ctx.request_repaint();
    }

    fn close(&mut self) {
        self.ctx.send_viewport_cmd(ViewportCommand::Close);
    }
}

#[cfg(windows)]
mod win32 {
    use std::ffi::c_void;

    use raw_window_handle::{HasWindowHandle, RawWindowHandle};
    use windows_sys::Win32::Graphics::Gdi::{CreateEllipticRgn, DeleteObject, SetWindowRgn};
    use windows_sys::Win32::UI::Input::KeyboardAndMouse::ReleaseCapture;
    use windows_sys::Win32::UI::WindowsAndMessaging::{
        GWL_EXSTYLE, GWL_STYLE, GetWindowLongPtrW, SetWindowLongPtrW, WS_EX_APPWINDOW,
        WS_EX_TOOLWINDOW, WS_SYSMENU,
    };

    use crate::error::{ClockError, Result};

    fn hwnd(frame: &eframe::Frame) -> Option<*mut c_void> {
        let handle = frame.window_handle().ok()?;
        match handle.as_raw() {
            RawWindowHandle::Win32(w) => Some(w.hwnd.get() as *mut c_void),
            _ => None,
        }
    }

    /// 去掉标题栏左上角系统菜单
    pub fn remove_system_menu(frame: &eframe::Frame) -> bool {
        let Some(hwnd) = hwnd(frame) else { return false };
        let style = unsafe { GetWindowLongPtrW(hwnd, GWL_STYLE) };
        if style == 0 {
            return false;
        }
        let new_style = style & !(WS_SYSMENU as isize);
        if new_style != style {
            unsafe { SetWindowLongPtrW(hwnd, GWL_STYLE, new_style) };
        }
        true
    }

    /// 工具窗口不出现在任务栏与 Alt+Tab
    pub fn set_tool_window(frame: &eframe::Frame) -> bool {
        let Some(hwnd) = hwnd(frame) else { return false };
        let ex_style = unsafe { GetWindowLongPtrW(hwnd, GWL_EXSTYLE) };
        let new_style = (ex_style | WS_EX_TOOLWINDOW as isize) & !(WS_EX_APPWINDOW as isize);
        if new_style != ex_style {
            unsafe { SetWindowLongPtrW(hwnd, GWL_EXSTYLE, new_style) };
        }
        true
    }

    /// 以物理像素外接矩形设置椭圆窗口区域；成功后区域归系统所有
    pub fn set_elliptic_region(frame: &eframe::Frame, bounds: (i32, i32, i32, i32)) -> Result<()> {
        let hwnd = hwnd(frame).ok_or(ClockError::WindowHandle)?;
        let (left, top, right, bottom) = bounds;
        let rgn = unsafe { CreateEllipticRgn(left, top, right, bottom) };
        if rgn.is_null() {
            return Err(ClockError::Region("CreateEllipticRgn failed".into()));
        }
        if unsafe { SetWindowRgn(hwnd, rgn, 1) } == 0 {
            unsafe { DeleteObject(rgn) };
            return Err(ClockError::Region("SetWindowRgn failed".into()));
        }
        Ok(())
    }

    pub fn release_capture() {
        unsafe { ReleaseCapture() };
    }
}
