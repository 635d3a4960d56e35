use anyhow::Result;
use clap::Parser;
use log::{debug, info, LevelFilter};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;
mod settings;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputConfig, InputManager};
use engine::renderer::RecordingCanvas;
use game::characters::GiraffeCat;
use settings::{Args, Settings};

/// Log the frame rate every this many frames
const FPS_LOG_INTERVAL: u64 = 600;

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.to_string()))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    info!("Starting Giraffe Cat...");

    let settings = Settings::resolve(&args);
    let mut cat = GiraffeCat::new(settings.tuning.clone())?;
    let mut bindings = InputConfig::with_defaults();
    bindings.apply_overrides(&settings.bindings);
    let mut input = InputManager::new(bindings);
    let mut game_loop = GameLoop::new(settings.tick_rate);
    let mut canvas = RecordingCanvas::new();
    let mut debug_overlay = args.debug_overlay;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let window = WindowBuilder::new()
        .with_title(settings.window.title.as_str())
        .with_inner_size(winit::dpi::LogicalSize::new(
            settings.window.width,
            settings.window.height,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Keys released while unfocused never reach us
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                cat.render(&mut canvas, game_loop.alpha());
                if debug_overlay {
                    cat.render_debug(&mut canvas, input.controls());
                }
                canvas.flush();
            }
            Event::AboutToWait => {
                if input.just_pressed(Action::Quit) {
                    info!("Quit requested, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }
                if input.just_pressed(Action::ToggleOverlay) {
                    debug_overlay = !debug_overlay;
                    debug!("Debug overlay {}", if debug_overlay { "on" } else { "off" });
                }

                let controls = input.controls();
                let step = game_loop.timestep();
                for _ in 0..game_loop.begin_frame() {
                    cat.update(step, controls);
                }
                input.update();

                if game_loop.frame_count() % FPS_LOG_INTERVAL == 0 {
                    debug!("{:.1} FPS", game_loop.fps());
                }

                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
