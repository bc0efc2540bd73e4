use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use path_camera::cli::Cli;
use path_camera::core::{Clock, NavigationSession, WinitScrollAdapter};
use path_camera::traits::WheelDelta;
use path_camera::{load_curve_path, Camera, Settings};

// === Constants ===

const TITLE_UPDATE_INTERVAL: f32 = 0.25;
const HEADLESS_FRAME_TIME: f32 = 1.0 / 60.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const HEADLESS_ASPECT: f32 = INITIAL_WINDOW_WIDTH as f32 / INITIAL_WINDOW_HEIGHT as f32;

/// Packs the camera for a renderer's uniform buffer; this host only traces it
fn publish_uniform(camera: &Camera, aspect: f32, progress: f32) {
    let uniform = camera.to_uniform(aspect, progress);
    log::trace!(
        "Camera uniform ({} bytes): position {:?}, forward {:?}, progress {:.4}",
        bytemuck::bytes_of(&uniform).len(),
        uniform.position,
        uniform.forward,
        uniform.progress
    );
}

struct App {
    window: Option<Arc<Window>>,
    session: NavigationSession,
    camera: Camera,
    input: WinitScrollAdapter,
    clock: Clock,
    title_timer: f32,
}

impl App {
    fn new(session: NavigationSession, camera: Camera) -> Self {
        Self {
            window: None,
            session,
            camera,
            input: WinitScrollAdapter::new(),
            clock: Clock::new(),
            title_timer: 0.0,
        }
    }

    fn update_title(&mut self, delta: f32) {
        self.title_timer += delta;
        if self.title_timer < TITLE_UPDATE_INTERVAL {
            return;
        }
        self.title_timer = 0.0;

        if let Some(window) = &self.window {
            window.set_title(&format!(
                "Path Camera - {:.0}% ({:?})",
                self.session.progress() * 100.0,
                self.session.phase()
            ));
        }
    }

    fn aspect(&self) -> f32 {
        match &self.window {
            Some(window) => {
                let size = window.inner_size();
                size.width.max(1) as f32 / size.height.max(1) as f32
            }
            None => HEADLESS_ASPECT,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Path Camera")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                self.session.advance_frame(delta, &mut self.camera);
                publish_uniform(&self.camera, self.aspect(), self.session.progress());
                self.update_title(delta);
            }
            other => {
                if let Some(input) = self.input.process_event(&other) {
                    self.session.handle_input(&input);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Replays scripted scroll deltas at a fixed frame rate and prints each pose
fn run_headless(session: &mut NavigationSession, camera: &mut Camera, cli: &Cli) {
    for frame in 0..cli.frames {
        if let Some(&delta) = cli.scroll.get(frame as usize) {
            // Pixel wheel deltas are negated on input, so negate here to keep positive = forward
            session.handle_input(&WheelDelta::Pixels(-delta));
        }

        let pose = session.advance_frame(HEADLESS_FRAME_TIME, camera);
        publish_uniform(camera, HEADLESS_ASPECT, session.progress());
        println!(
            "{:>5}  progress {:.4}  {:<9}  position ({:.3}, {:.3}, {:.3})  forward ({:.3}, {:.3}, {:.3})",
            frame,
            session.progress(),
            format!("{:?}", session.phase()),
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.forward.x,
            pose.forward.y,
            pose.forward.z,
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;

    let curve = pollster::block_on(load_curve_path(&cli.curve, &settings.curve))
        .context(format!("Failed to load curve: {:?}", cli.curve))?;

    let mut session = NavigationSession::new(curve, &settings);
    let mut camera = Camera::new(&settings.view);
    session.advance_frame(0.0, &mut camera);

    if cli.headless {
        run_headless(&mut session, &mut camera, &cli);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(session, camera);

    log::info!("Path Camera - scroll or drag to travel the path, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
