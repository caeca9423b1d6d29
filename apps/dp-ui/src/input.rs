use std::collections::VecDeque;

use dp_sim::{InputEvent, InputSource, Viewport};

/// Window events gathered between ticks, handed out one per tick.
#[derive(Default)]
pub struct EventQueue {
    pending: VecDeque<InputEvent>,
    last_viewport: Option<Viewport>,
}

impl EventQueue {
    /// Translate this frame's egui input into simulation events.
    pub fn collect(&mut self, ctx: &egui::Context) {
        let (close, reset) = ctx.input(|i| {
            (
                i.viewport().close_requested(),
                i.key_pressed(egui::Key::R),
            )
        });
        if reset {
            self.push(InputEvent::Reset);
        }
        if close {
            self.push(InputEvent::Quit);
        }
    }

    /// Queue a resize when the drawing area changed size.
    pub fn observe_canvas(&mut self, size: egui::Vec2) {
        let viewport = Viewport::new(size.x.max(1.0) as u32, size.y.max(1.0) as u32);
        if self.last_viewport != Some(viewport) {
            self.last_viewport = Some(viewport);
            self.push(InputEvent::Resize {
                width: viewport.width,
                height: viewport.height,
            });
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }
}

impl InputSource for EventQueue {
    fn poll(&mut self) -> InputEvent {
        self.pending.pop_front().unwrap_or_default()
    }
}
