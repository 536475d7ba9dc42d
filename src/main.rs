use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wirescape::cli::Cli;
use wirescape::render::draw_world;
use wirescape::renderer::WireRenderer;
use wirescape::scene::create_default_scene;
use wirescape::timer::Accumulator;
use wirescape::world::World;
use wirescape::VIEW_SIZE;

// === Constants ===

const TICK_RATE: f32 = 60.0;
const MAX_CATCHUP_TICKS: u8 = 4;

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<WireRenderer>,
    world: World,
    ticker: Accumulator,
    last_frame_time: Instant,
}

impl App {
    fn new(cli: &Cli) -> Self {
        Self {
            window: None,
            renderer: None,
            world: World::new(create_default_scene(cli.grid_size)),
            ticker: Accumulator::new(TICK_RATE, MAX_CATCHUP_TICKS),
            last_frame_time: Instant::now(),
        }
    }

    fn handle_keyboard(&mut self, event: KeyEvent) {
        let fire_pressed = event.state.is_pressed()
            && !event.repeat
            && event.physical_key == PhysicalKey::Code(KeyCode::Space);
        if fire_pressed {
            self.world.fire();
            return;
        }
        self.world.camera.process_keyboard(&event);
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        for _step in self.ticker.tick(delta) {
            self.world.advance();
        }

        if let Some(renderer) = &mut self.renderer {
            draw_world(&self.world, renderer);
            match renderer.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure()
                }
                Err(e) => eprintln!("Render error: {}", e),
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Wirescape")
                    .with_inner_size(winit::dpi::LogicalSize::new(VIEW_SIZE, VIEW_SIZE)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(WireRenderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {:#}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.last_frame_time = Instant::now();
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
            WindowEvent::KeyboardInput { event, .. } => self.handle_keyboard(event),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&cli);

    println!("Wirescape - Controls: arrow keys to move, Space to fire, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
