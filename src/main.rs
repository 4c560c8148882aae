use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use polyhedra::cli::Cli;
use polyhedra::core::{SurfaceRenderer, WindowProvider};
use polyhedra::frame::FpsCounter;
use polyhedra::{launch, RenderError, Viewer, ViewerConfig};

const FPS_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// Frames skipped on surface errors do not count toward the limit
fn frame_limit_reached(max_frames: Option<u64>, rendered: u64) -> bool {
    max_frames.is_some_and(|max| rendered >= max)
}

// === Application ===

struct App {
    config: ViewerConfig,
    max_frames: Option<u64>,
    window: Option<Arc<Window>>,
    viewer: Option<Viewer<SurfaceRenderer>>,
    fps: FpsCounter,
    startup_failed: bool,
}

impl App {
    fn new(config: ViewerConfig, max_frames: Option<u64>) -> Self {
        Self {
            config,
            max_frames,
            window: None,
            viewer: None,
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            startup_failed: false,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };

        if frame_limit_reached(self.max_frames, viewer.driver().frames_rendered()) {
            event_loop.exit();
            return;
        }

        match viewer.frame() {
            Ok(info) => {
                if let Some(fps) = self.fps.record(info.delta) {
                    log::info!("FPS: {:.1}", fps);
                }
            }
            Err(RenderError::Surface(e @ wgpu::SurfaceError::OutOfMemory)) => {
                log::error!("render error: {}", e);
                event_loop.exit();
            }
            Err(e) => log::warn!("skipped frame: {}", e),
        }

        if frame_limit_reached(self.max_frames, viewer.driver().frames_rendered()) {
            log::info!("rendered {} frames, exiting", viewer.driver().frames_rendered());
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.startup_failed {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.title.clone())
                .with_resizable(false)
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    self.config.width,
                    self.config.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {}", e);
                self.startup_failed = true;
                event_loop.exit();
                return;
            }
        };

        let provider = WindowProvider::new(Arc::clone(&window));
        match launch(&provider, &self.config, |e| log::error!("startup failed: {}", e)) {
            Ok(viewer) => {
                self.window = Some(window);
                self.viewer = Some(viewer);
            }
            Err(_) => {
                self.startup_failed = true;
                event_loop.exit();
            }
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
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    polyhedra::logging::init(cli.log_level.as_deref());

    let config = cli.viewer_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, cli.frames);

    log::info!("Polyhedra - Escape to quit");
    event_loop.run_app(&mut app)?;

    // Startup errors were already logged where they happened
    if app.startup_failed {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
