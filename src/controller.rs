//! 时钟控制器：生命周期、计时、事件分发

use std::time::{Duration, Instant};

use crate::drag::{DragController, DragOutcome, PointerPress};
use crate::error::Result;
use crate::face::FaceRenderer;
use crate::geometry::{ClientExtent, TimeSample};
use crate::host::WindowHost;
use crate::menu::{ContextMenu, MENU_ENTRIES, MenuAction};
use crate::shaper::{CircleRegion, WindowShaper};
use crate::surface::Surface;
use crate::timer::Ticker;

/// 控制器状态
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockState {
    /// 窗口加载前
    Idle,
    /// 已加载，计时器运行中
    Running,
    /// 窗口已关闭，计时器已停止
    Closed,
}

/// 控制器处理的窗口事件
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClockEvent {
    /// 窗口加载，只处理一次
    Load { now: Instant },
    /// 计时器到期
    Tick,
    /// 客户区尺寸变化
    Resized(ClientExtent),
    PointerPressed(PointerPress),
    /// 右键菜单项被点击，携带菜单项 key
    MenuActivated(&'static str),
    /// 系统关闭请求（如 Alt+F4）
    CloseRequested,
}

pub struct ClockController {
    state: ClockState,
    default_extent: ClientExtent,
    ticker: Ticker,
    menu: Option<ContextMenu>,
    shaper: WindowShaper,
    drag: DragController,
    renderer: FaceRenderer,
}

impl ClockController {
    pub fn new(renderer: FaceRenderer, default_extent: ClientExtent) -> Self {
        Self {
            state: ClockState::Idle,
            default_extent,
            ticker: Ticker::default(),
            menu: None,
            shaper: WindowShaper::new(),
            drag: DragController::new(),
            renderer,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    /// 加载后才有菜单
    pub fn menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    pub fn region(&self) -> Option<CircleRegion> {
        self.shaper.region()
    }

    pub fn is_timer_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn drag_count(&self) -> u64 {
        self.drag.drag_count()
    }

    /// 事件分发入口
    pub fn handle(&mut self, event: ClockEvent, host: &mut dyn WindowHost) -> Result<()> {
        match event {
            ClockEvent::Load { now } => self.load(now, host),
            ClockEvent::Tick => {
                self.on_tick(host);
                Ok(())
            }
            ClockEvent::Resized(extent) => self.on_resized(extent, host),
            ClockEvent::PointerPressed(press) => {
                self.on_press(press, host);
                Ok(())
            }
            ClockEvent::MenuActivated(key) => {
                self.on_menu(key, host);
                Ok(())
            }
            ClockEvent::CloseRequested => {
                self.shutdown();
                Ok(())
            }
        }
    }

    /// 轮询计时器，到期则按 Tick 处理；返回距下次触发的时间
    pub fn poll_timer(&mut self, now: Instant, host: &mut dyn WindowHost) -> Option<Duration> {
        if self.ticker.poll(now) {
            self.on_tick(host);
        }
        self.ticker.until_next(now)
    }

    /// 画一帧；时间由调用方在绘制时现取
    pub fn paint(&self, surface: &mut dyn Surface, extent: ClientExtent, sample: &TimeSample) {
        self.renderer.render(surface, extent, sample);
    }

    fn load(&mut self, now: Instant, host: &mut dyn WindowHost) -> Result<()> {
        if self.state != ClockState::Idle {
            log::warn!("load ignored in state {:?}", self.state);
            return Ok(());
        }
        host.strip_chrome();
        self.menu = Some(ContextMenu::build(MENU_ENTRIES));
        self.shaper.set_size(self.default_extent, host)?;
        host.enable_double_buffering();
        host.hide_from_taskbar();
        // 必须拿到焦点，系统关闭快捷键才会发到本窗口
        host.focus();
        self.ticker.start(now);
        self.state = ClockState::Running;
        log::info!(
            "clock running at {}x{}, tick every {:?}",
            self.default_extent.width,
            self.default_extent.height,
            self.ticker.period()
        );
        Ok(())
    }

    fn on_tick(&mut self, host: &mut dyn WindowHost) {
        if self.state == ClockState::Running {
            log::trace!("tick");
            host.request_redraw();
        }
    }

    fn on_resized(&mut self, extent: ClientExtent, host: &mut dyn WindowHost) -> Result<()> {
        if self.state != ClockState::Running {
            return Ok(());
        }
        if self.shaper.on_resized(extent, host)? {
            log::debug!("client resized to {}x{}", extent.width, extent.height);
        }
        Ok(())
    }

    fn on_press(&mut self, press: PointerPress, host: &mut dyn WindowHost) {
        if self.state != ClockState::Running {
            return;
        }
        let Some(region) = self.shaper.region() else { return };
        if self.drag.on_press(press, &region, host) == DragOutcome::Outside {
            log::trace!("press outside clock face ignored");
        }
    }

    fn on_menu(&mut self, key: &str, host: &mut dyn WindowHost) {
        let Some(entry) = self.menu.as_ref().and_then(|m| m.find(key)).copied() else {
            log::warn!("unknown menu entry {key:?}");
            return;
        };
        match entry.action {
            MenuAction::Exit => {
                self.shutdown();
                host.close();
            }
        }
    }

    /// 停止计时器并进入 Closed，重复调用无副作用
    pub fn shutdown(&mut self) {
        if self.state == ClockState::Closed {
            return;
        }
        self.ticker.stop();
        self.state = ClockState::Closed;
        log::info!("clock closed");
    }
}
