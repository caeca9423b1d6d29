//! Paints pendulum frames with egui.

use std::convert::Infallible;

use dp_sim::{Frame, PendulumState, Point, RenderSink};
use egui::{Color32, Pos2, Rect, Stroke};

// Solarized palette
const BACKGROUND: Color32 = Color32::from_rgb(7, 54, 66);
const ROD: Color32 = Color32::from_rgb(253, 246, 227);
const BOB1: Color32 = Color32::from_rgb(220, 50, 47);
const BOB2: Color32 = Color32::from_rgb(38, 139, 210);

/// Keeps the most recent frame; painting happens once per egui pass.
#[derive(Default)]
pub struct Canvas {
    latest: Option<(Frame, PendulumState)>,
}

impl RenderSink for Canvas {
    type Error = Infallible;

    fn render(&mut self, frame: &Frame, state: &PendulumState) -> Result<(), Infallible> {
        self.latest = Some((*frame, *state));
        Ok(())
    }
}

impl Canvas {
    pub fn latest_state(&self) -> Option<&PendulumState> {
        self.latest.as_ref().map(|(_, state)| state)
    }

    pub fn paint(&self, painter: &egui::Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, BACKGROUND);

        let Some((frame, _)) = &self.latest else {
            return;
        };
        if !frame.is_drawable() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "state diverged - press R to reset",
                egui::FontId::proportional(16.0),
                ROD,
            );
            return;
        }

        let to_screen = |p: Point| Pos2::new(rect.min.x + p.x as f32, rect.min.y + p.y as f32);
        let pivot = to_screen(frame.pivot);
        let bob1 = to_screen(frame.bob1);
        let bob2 = to_screen(frame.bob2);

        painter.line_segment([pivot, bob1], Stroke::new(1.0, ROD));
        painter.line_segment([bob1, bob2], Stroke::new(1.0, ROD));
        painter.circle_filled(bob1, frame.radius1 as f32, BOB1);
        painter.circle_filled(bob2, frame.radius2 as f32, BOB2);
    }
}
