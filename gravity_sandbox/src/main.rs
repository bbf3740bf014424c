//! 2D gravity sandbox
//!
//! Controls:
//! - Right click: Place a sun
//! - Left drag: Pull back and release to launch a projectile
//! - Close window: Quit

use common::{Camera2D, GraphicsContext};
use glam::Vec2;
use gravity_sandbox::{
    pacing::FramePacer, renderer::Renderer, DragController, PhysicsError, SandboxConfig, World,
};
use std::time::Instant;
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::ControlFlow,
};

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    camera: Camera2D,
    world: World,
    input: DragController,
}

impl App {
    fn new(ctx: GraphicsContext, config: &SandboxConfig) -> Self {
        let renderer = Renderer::new(&ctx, config);
        let camera = Camera2D::new(ctx.size.width as f32, ctx.size.height as f32);

        Self {
            ctx,
            renderer,
            camera,
            world: World::from_config(config),
            input: DragController::new(config.velocity_reduction),
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera
            .resize(self.ctx.size.width as f32, self.ctx.size.height as f32);
        self.renderer.update_camera(&self.ctx.queue, &self.camera);
    }

    fn handle_mouse(&mut self, button: MouseButton, state: ElementState) {
        match self.input.mouse_input(button, state) {
            Ok(Some(command)) => {
                log::info!("{command:?}");
                self.world.apply(command);
            }
            Ok(None) => {}
            Err(e) => log::warn!("ignoring mouse release: {e}"),
        }
    }

    fn update(&mut self) -> Result<(), PhysicsError> {
        self.world.step()
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer
            .draw(&self.ctx, &mut encoder, &view, &self.world);

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SandboxConfig::default();
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        config.title,
        config.width,
        config.height,
    ))?;

    let mut app = App::new(ctx, &config);
    let mut pacer = FramePacer::new(config.fps, Instant::now());
    let mut fault: Option<PhysicsError> = None;

    log::info!("session started at {} fps", config.fps);

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app.resize(size),
            WindowEvent::CursorMoved { position, .. } => app
                .input
                .cursor_moved(Vec2::new(position.x as f32, position.y as f32)),
            WindowEvent::MouseInput { state, button, .. } => app.handle_mouse(button, state),
            WindowEvent::RedrawRequested => {
                if let Err(e) = app.update() {
                    log::error!("physics step failed: {e}");
                    fault = Some(e);
                    elwt.exit();
                    return;
                }
                match app.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => app.ctx.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(e) => log::warn!("render error: {e:?}"),
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if pacer.poll(Instant::now()) {
                app.ctx.window.request_redraw();
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
        }
        _ => {}
    })?;

    log::info!("session ended");

    match fault {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
