use std::time::Duration;

use dp_project::{ProjectResult, Scene};
use dp_sim::{InputEvent, InputSource, Simulation, TickOutcome, total_energy};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::canvas::Canvas;
use crate::energy_view::EnergyView;
use crate::input::EventQueue;
use crate::pacing::TickClock;

pub const SIDE_PANEL_WIDTH: f32 = 260.0;

pub struct PendulumApp {
    sim: Simulation<Pcg64Mcg>,
    queue: EventQueue,
    canvas: Canvas,
    energy_view: EnergyView,
    clock: TickClock,
}

impl PendulumApp {
    pub fn new(scene: &Scene) -> ProjectResult<Self> {
        let rng = match scene.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_entropy(),
        };
        let sim = Simulation::new(
            scene.initial_state()?,
            scene.viewport(),
            scene.reset_policy()?,
            rng,
        );

        Ok(Self {
            sim,
            queue: EventQueue::default(),
            canvas: Canvas::default(),
            energy_view: EnergyView::default(),
            clock: TickClock::new(1.0 / f64::from(scene.display.fps)),
        })
    }

    /// Run the ticks that are due at `now_s`, one input event each.
    fn advance(&mut self, ctx: &egui::Context, now_s: f64) {
        for _ in 0..self.clock.due(now_s) {
            let event = self.queue.poll();
            let outcome = match self.sim.tick(event, &mut self.canvas) {
                Ok(outcome) => outcome,
                Err(never) => match never {},
            };
            if outcome == TickOutcome::Quit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }
            self.energy_view.record(self.sim.time(), total_energy(self.sim.state()));
        }
    }

    fn side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Double Pendulum");
        ui.separator();

        if let Some(state) = self.canvas.latest_state() {
            let c = &state.config;
            let p = state.params();
            egui::Grid::new("state_grid").num_columns(2).show(ui, |ui| {
                ui.label("t");
                ui.label(format!("{:.2} s", self.sim.time()));
                ui.end_row();
                ui.label("θ1 / θ2");
                ui.label(format!("{:.3} / {:.3} rad", c.theta1, c.theta2));
                ui.end_row();
                ui.label("ω1 / ω2");
                ui.label(format!("{:.3} / {:.3} rad/s", c.omega1, c.omega2));
                ui.end_row();
                ui.label("m1 / m2");
                ui.label(format!("{:.3} / {:.3} kg", p.mass1, p.mass2));
                ui.end_row();
                ui.label("E");
                ui.label(format!("{:.4} J", total_energy(state)));
                ui.end_row();
            });
        }

        ui.separator();
        if ui.button("Reset (R)").clicked() {
            self.queue.push(InputEvent::Reset);
        }

        ui.separator();
        self.energy_view.show(ui);
    }
}

impl eframe::App for PendulumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.queue.collect(ctx);

        egui::SidePanel::right("state_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| self.side_panel(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                self.queue.observe_canvas(response.rect.size());

                let now_s = ctx.input(|i| i.time);
                self.advance(ctx, now_s);

                self.canvas.paint(&painter, response.rect);
            });

        ctx.request_repaint_after(Duration::from_secs_f64(self.clock.period_s()));
    }
}
