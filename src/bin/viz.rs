use std::time::{Duration, Instant};

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use tracing_subscriber::EnvFilter;

use lunar_lander::io::report;
use lunar_lander::sim::state::{FULL_TANK, INITIAL_HEIGHT};
use lunar_lander::sim::{Outcome, SimulationEngine};

/// Wall-clock interval between simulation steps.
const TICK: Duration = Duration::from_millis(100);

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = LanderViz {
        engine: SimulationEngine::new(),
        last_tick: Instant::now(),
        alert: None,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native("Lunar Lander", options, Box::new(|_| Ok(Box::new(app))))
}

struct LanderViz {
    engine: SimulationEngine,
    last_tick: Instant,
    /// Touchdown message waiting to be dismissed.
    alert: Option<Outcome>,
}

impl LanderViz {
    fn on_tick(&mut self, thrust: bool) {
        if self.engine.step(thrust) {
            self.alert = self.engine.outcome();
        }
    }

    fn print_log(&self) {
        let stdout = std::io::stdout();
        if let Err(err) = report::write_motion_log(&mut stdout.lock(), self.engine.motion_log()) {
            tracing::error!(%err, "failed to print motion log");
        }
    }
}

impl eframe::App for LanderViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut thrust = ctx.input(|i| i.key_down(egui::Key::Space));

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Start").clicked() {
                    self.engine.reset();
                    self.alert = None;
                }
                let thrust_btn = ui.add_enabled(self.engine.is_running(), egui::Button::new("Thrust (hold)"));
                thrust |= thrust_btn.is_pointer_button_down_on();
                if ui.button("Print Log").clicked() {
                    self.print_log();
                }
            });

            ui.label(format!(
                "Height: {:.2} m  |  Velocity: {:.2} m/s  |  Fuel: {:.1} %  |  Time: {:.1} s",
                self.engine.height(),
                self.engine.velocity(),
                self.engine.fuel(),
                self.engine.elapsed_time(),
            ));
            ui.add(
                egui::ProgressBar::new((self.engine.fuel() / FULL_TANK) as f32)
                    .text(format!("Fuel {:.0}%", self.engine.fuel())),
            );
            ui.add(
                egui::ProgressBar::new((self.engine.height() / INITIAL_HEIGHT).min(1.0) as f32)
                    .text(format!("Height {:.0} m", self.engine.height())),
            );
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let half_h = ui.available_height() / 2.0 - 8.0;
            let log = self.engine.motion_log();

            ui.label("Height (m)");
            let points: PlotPoints = log.iter().map(|s| [s.time, s.height]).collect();
            Plot::new("height")
                .height(half_h)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Height", points));
                });

            ui.label("Velocity (m/s)");
            let points: PlotPoints = log.iter().map(|s| [s.time, s.velocity]).collect();
            Plot::new("velocity")
                .height(half_h)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Velocity", points));
                });
        });

        if let Some(outcome) = self.alert {
            let mut open = true;
            egui::Window::new(if outcome.is_safe() { "Landed" } else { "Crashed" })
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(outcome.message());
                    ui.label(format!("Touchdown velocity: {:.2} m/s", self.engine.velocity()));
                });
            if !open {
                self.alert = None;
            }
        }

        if self.last_tick.elapsed() >= TICK {
            self.last_tick = Instant::now();
            self.on_tick(thrust);
        }
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
