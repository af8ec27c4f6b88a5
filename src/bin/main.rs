use std::process::ExitCode;
use std::time::Instant;

use cgmath::Vector2;
use eframe::egui::{self, Color32};
use rand::SeedableRng;
use rand::rngs::StdRng;
use vortext::controls::{MAX_SPEED, MIN_SPEED, SPEED_STEP};
use vortext::render::{self, GlyphStyle};
use vortext::{Config, Controls, Direction, Motion, Shape, Sketch, SketchError};

const SIDEBAR_WIDTH: f32 = 250.0;
const SIDEBAR_GAP: f32 = 20.0;

struct Vortext {
    controls: Controls,
    seed: u64,
    // created on the first frame, once the canvas has a size
    sketch: Option<Sketch<StdRng>>,
    last_frame_time: Instant,
}

impl Vortext {
    fn new(config: Config) -> Self {
        Self {
            controls: config.controls,
            seed: config.seed,
            sketch: None,
            last_frame_time: Instant::now(),
        }
    }

    fn render_ui_panel(&mut self, ui: &mut egui::Ui, frame_time: f32) {
        ui.spacing_mut().item_spacing.y = SIDEBAR_GAP;

        ui.horizontal(|ui| {
            ui.label("Speed:");
            ui.add(
                egui::Slider::new(&mut self.controls.speed, MIN_SPEED..=MAX_SPEED)
                    .step_by(SPEED_STEP as f64),
            );
        });

        ui.horizontal(|ui| {
            ui.label("Direction:");
            egui::ComboBox::from_id_source("direction")
                .selected_text(self.controls.direction.label())
                .show_ui(ui, |ui| {
                    for direction in Direction::ALL {
                        ui.selectable_value(&mut self.controls.direction, direction, direction.label());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Color:");
            ui.color_edit_button_srgb(&mut self.controls.color.0);
        });

        ui.horizontal(|ui| {
            ui.label("Shape:");
            egui::ComboBox::from_id_source("shape")
                .selected_text(self.controls.shape.label())
                .show_ui(ui, |ui| {
                    for shape in Shape::ALL {
                        ui.selectable_value(&mut self.controls.shape, shape, shape.label());
                    }
                });
        });

        ui.separator();
        ui.weak(format!("FPS: {:.1}", 1.0 / frame_time.max(f32::EPSILON)));
        ui.weak(format!("Seed: {}", self.seed));
    }

    /// Builds the population on first use and rebuilds it whenever the canvas size changes.
    fn sync_canvas(&mut self, size: Vector2<f32>) -> Result<(), SketchError> {
        match self.sketch.as_mut() {
            Some(sketch) => {
                sketch.resize(size)?;
            }
            None => {
                let rng = StdRng::seed_from_u64(self.seed);
                self.sketch = Some(Sketch::new(size, rng)?);
            }
        }
        Ok(())
    }
}

impl eframe::App for Vortext {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        egui::SidePanel::right("Control Panel")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::none()
                    .fill(Color32::from_gray(0x33))
                    .inner_margin(egui::Margin::same(SIDEBAR_GAP)),
            )
            .show(ctx, |ui| {
                self.render_ui_panel(ui, frame_time);
            });

        // controls are read once, before any particle moves
        let controls = self.controls;
        let motion = Motion::from_controls(&controls);
        let style = GlyphStyle::from_controls(&controls);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                let painter = ui.painter_at(rect);
                render::clear(&painter, rect);

                if let Err(err) = self.sync_canvas(Vector2::new(rect.width(), rect.height())) {
                    log::error!("{err}");
                    return;
                }
                if let Some(sketch) = self.sketch.as_mut() {
                    sketch.frame(motion, |particle| {
                        render::draw_particle(&painter, rect.min, particle, style);
                    });
                }
                render::draw_title(&painter, rect);
            });

        ctx.request_repaint();
    }
}

fn run() -> Result<(), SketchError> {
    let config = Config::from_env()?;
    log::info!(
        "starting with seed {} (speed {}, {}, {}, {})",
        config.seed,
        config.controls.speed,
        config.controls.direction.label(),
        config.controls.color,
        config.controls.shape.label()
    );

    eframe::run_native(
        "Vortext",
        eframe::NativeOptions {
            renderer: eframe::Renderer::Wgpu,
            initial_window_size: Some(egui::vec2(1280.0, 800.0)),
            vsync: true,
            ..Default::default()
        },
        Box::new(move |_cc| Box::new(Vortext::new(config))),
    )
    .map_err(|err| SketchError::Surface(err.to_string()))
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
