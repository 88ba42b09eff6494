mod config;
mod graphics;
mod grid;
mod input;
mod placement;
mod simulation;
mod view;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    dpi::PhysicalSize,
    event::Event,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use std::time::{Duration, Instant};

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::graphics::GraphicsRenderer;
use crate::input::{InputAction, InputHandler};
use crate::simulation::Simulation;
use crate::view::ViewState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut simulation = Simulation::from_config(&config, &mut rng)?;
    let mut view = ViewState::new(config.initial_cell_size);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Game of Life")
        .with_inner_size(PhysicalSize::new(config.window_width, config.window_height))
        .with_resizable(true)
        .build(&event_loop)?;

    let mut graphics = GraphicsRenderer::new(&window, config.window_width, config.window_height)?;
    let mut input_handler = InputHandler::new();

    let step_interval = Duration::from_millis(config.step_interval_ms);
    let mut last_step = Instant::now();
    let mut running = true;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => {
                match input_handler.handle_window_event(&event) {
                    InputAction::Quit => {
                        log::info!("Quit after {} generations", simulation.generation());
                        running = false;
                        *control_flow = ControlFlow::Exit;
                    }
                    InputAction::Resize(width, height) => graphics.resize(width, height),
                    InputAction::DragStart(x, y) => view.drag_start(x, y),
                    InputAction::DragMove(x, y) => view.drag_move(x, y),
                    InputAction::DragEnd => view.drag_end(),
                    InputAction::Zoom(direction, x, y) => view.zoom(direction, x, y),
                    InputAction::None => {}
                }
            }
            Event::MainEventsCleared => {
                if !running {
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                let now = Instant::now();
                if now.duration_since(last_step) >= step_interval {
                    simulation.tick();
                    last_step = now;
                }

                graphics.render(simulation.grid(), &view);
                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
