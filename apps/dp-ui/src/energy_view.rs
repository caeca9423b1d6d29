use std::collections::VecDeque;

use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Points kept in the trace; older samples are dropped.
const MAX_POINTS: usize = 2_000;

#[derive(Default)]
pub struct EnergyView {
    samples: VecDeque<[f64; 2]>,
}

impl EnergyView {
    pub fn record(&mut self, t: f64, energy: f64) {
        if !energy.is_finite() {
            return;
        }
        if self.samples.len() == MAX_POINTS {
            self.samples.pop_front();
        }
        self.samples.push_back([t, energy]);
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let points: PlotPoints = self.samples.iter().copied().collect();
        Plot::new("energy_trace")
            .height(180.0)
            .legend(Legend::default())
            .x_axis_label("t [s]")
            .y_axis_label("E [J]")
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).name("total energy"));
            });
    }
}
