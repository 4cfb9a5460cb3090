//! egui 主界面：表盘绘制、拖动、右键菜单

use std::time::Instant;

use eframe::egui;

use crate::controller::{ClockController, ClockEvent, ClockState};
use crate::drag::{MouseButton, PointerPress};
use crate::geometry::{ClientExtent, Point, TimeSample};
use crate::host::{EguiHost, WindowHost};
use crate::surface::EguiSurface;

pub struct ClockApp {
    controller: ClockController,
}

/// 屏幕坐标转为以客户区左上角为原点的表面坐标
fn to_surface(rect: egui::Rect, pos: egui::Pos2) -> Point {
    Point::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

fn map_button(button: egui::PointerButton) -> MouseButton {
    match button {
        egui::PointerButton::Primary => MouseButton::Primary,
        egui::PointerButton::Secondary => MouseButton::Secondary,
        egui::PointerButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

/// 从本帧输入事件中取出所有按下事件，松开不算
fn pointer_presses(events: &[egui::Event], rect: egui::Rect) -> Vec<PointerPress> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed: true,
                ..
            } => Some(PointerPress {
                button: map_button(*button),
                pos: to_surface(rect, *pos),
            }),
            _ => None,
        })
        .collect()
}

impl ClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>, controller: ClockController) -> Self {
        // 抗锯齿是整个 Context 的设置，启动时开一次
        cc.egui_ctx
            .tessellation_options_mut(|opts| opts.feathering = true);
        Self { controller }
    }

    /// 分发事件；环境性错误无法恢复，记录后关闭窗口
    fn dispatch(&mut self, event: ClockEvent, host: &mut dyn WindowHost) {
        if let Err(e) = self.controller.handle(event, host) {
            log::error!("{e}");
            self.controller.shutdown();
            host.close();
        }
    }

    fn ui_face(&mut self, ui: &mut egui::Ui, host: &mut dyn WindowHost) {
        let rect = ui.max_rect();
        let extent = ClientExtent::new(rect.width(), rect.height());
        self.dispatch(ClockEvent::Resized(extent), host);

        // 只有圆内可点击，圆外既不拖动也不弹菜单
        let region = self.controller.region();
        let hover_inside = ui
            .input(|i| i.pointer.hover_pos())
            .zip(region)
            .is_some_and(|(pos, region)| region.contains(to_surface(rect, pos)));
        let sense = if hover_inside {
            egui::Sense::click()
        } else {
            egui::Sense::hover()
        };
        let response = ui.interact(rect, ui.id().with("clock_face"), sense);

        let mut surface = EguiSurface::new(ui.painter(), rect);
        self.controller.paint(&mut surface, extent, &TimeSample::now());

        // 被菜单等弹层遮住时不处理
        if response.contains_pointer() {
            let presses = ui.input(|i| pointer_presses(&i.events, rect));
            for press in presses {
                self.dispatch(ClockEvent::PointerPressed(press), host);
            }
        }

        let Some(menu) = self.controller.menu() else { return };
        let mut activated = None;
        response.context_menu(|ui| {
            for entry in menu.entries() {
                if ui.button(entry.label).clicked() {
                    activated = Some(entry.key);
                }
            }
        });
        if let Some(key) = activated {
            self.dispatch(ClockEvent::MenuActivated(key), host);
        }
    }
}

impl eframe::App for ClockApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let mut host = EguiHost::new(ctx, frame);
        let now = Instant::now();

        if self.controller.state() == ClockState::Idle {
            self.dispatch(ClockEvent::Load { now }, &mut host);
        }

        // Alt+F4 等系统关闭请求
        if ctx.input(|i| i.viewport().close_requested()) {
            self.dispatch(ClockEvent::CloseRequested, &mut host);
        }

        if let Some(wait) = self.controller.poll_timer(now, &mut host) {
            ctx.request_repaint_after(wait);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.ui_face(ui, &mut host));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(20.0, 10.0), egui::vec2(300.0, 300.0))
    }

    fn button_event(button: egui::PointerButton, x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn to_surface_subtracts_rect_origin() {
        assert_eq!(to_surface(face_rect(), egui::pos2(170.0, 160.0)), Point::new(150.0, 150.0));
        assert_eq!(to_surface(face_rect(), egui::pos2(20.0, 10.0)), Point::ORIGIN);
    }

    #[test]
    fn map_button_covers_extra_buttons() {
        assert_eq!(map_button(egui::PointerButton::Primary), MouseButton::Primary);
        assert_eq!(map_button(egui::PointerButton::Secondary), MouseButton::Secondary);
        assert_eq!(map_button(egui::PointerButton::Middle), MouseButton::Middle);
        assert_eq!(map_button(egui::PointerButton::Extra1), MouseButton::Other);
        assert_eq!(map_button(egui::PointerButton::Extra2), MouseButton::Other);
    }

    #[test]
    fn releases_and_other_events_are_skipped() {
        let events = vec![
            button_event(egui::PointerButton::Primary, 170.0, 50.0, true),
            button_event(egui::PointerButton::Primary, 170.0, 50.0, false),
            egui::Event::PointerMoved(egui::pos2(30.0, 30.0)),
            button_event(egui::PointerButton::Secondary, 40.0, 30.0, true),
        ];
        let presses = pointer_presses(&events, face_rect());
        assert_eq!(
            presses,
            vec![
                PointerPress {
                    button: MouseButton::Primary,
                    pos: Point::new(150.0, 40.0),
                },
                PointerPress {
                    button: MouseButton::Secondary,
                    pos: Point::new(20.0, 20.0),
                },
            ]
        );
    }

    #[test]
    fn presses_arrive_through_a_headless_frame() {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            events: vec![
                egui::Event::PointerMoved(egui::pos2(170.0, 160.0)),
                button_event(egui::PointerButton::Primary, 170.0, 160.0, true),
            ],
            ..Default::default()
        };
        let mut presses = Vec::new();
        let _ = ctx.run(input, |ctx| {
            presses = ctx.input(|i| pointer_presses(&i.events, face_rect()));
        });
        assert_eq!(
            presses,
            vec![PointerPress {
                button: MouseButton::Primary,
                pos: Point::new(150.0, 150.0),
            }]
        );
    }
}
