//! Application shell: winit event loop, window lifecycle, and the
//! per-frame tick → upload → draw sequence.

use cgmath::Vector3;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::gfx::{
    camera::Camera,
    rendering::{FireballUniform, RenderEngine},
    scene::SceneDriver,
};
use crate::performance::FrameStats;
use crate::ui::{ControlPanel, UiManager};

pub struct FireballApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    panel: ControlPanel,
    stats: FrameStats,
    scene: SceneDriver,
}

impl FireballApp {
    /// Create a new fireball application with default settings
    pub async fn new() -> Self {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let camera = Camera::new(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.0,
        );
        let scene = SceneDriver::new(camera, Vector3::new(0.0, 0.0, 0.0), 1.0);

        Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                panel: ControlPanel::new(),
                stats: FrameStats::new(),
                scene,
            },
        }
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) {
        let event_loop = self.event_loop.take().expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .expect("Failed to run event loop");
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Ok(window) = event_loop.create_window(
            WindowAttributes::default()
                .with_title("fireball")
                .with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            let window_handle = Arc::new(window);
            self.window = Some(window_handle.clone());

            let (width, height) = window_handle.inner_size().into();
            self.scene.on_resize(width, height);

            let window_clone = window_handle.clone();
            let mut renderer = pollster::block_on(async move {
                RenderEngine::new(window_clone, width, height).await
            });

            renderer.upload_background(self.scene.background());

            let ui_manager = UiManager::new(
                renderer.device(),
                renderer.queue(),
                renderer.surface_format(),
                &window_handle,
            );

            self.ui_manager = Some(ui_manager);
            self.render_engine = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };
        let Some(window) = self.window.as_ref() else {
            return;
        };

        // UI gets first look at input events.
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            if ui_manager.handle_window_event(window, window_id, &event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.scene.on_resize(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.stats.begin_frame();

                let controls = self.panel.snapshot();
                let report = match self.scene.tick(&controls) {
                    Ok(report) => report,
                    Err(err) => {
                        log::error!("geometry regeneration failed: {err}");
                        event_loop.exit();
                        return;
                    }
                };

                if report.rebuilt {
                    render_engine.upload_fireball(self.scene.icosphere());
                }

                render_engine.update_uniforms(
                    self.scene.camera().uniform(),
                    FireballUniform::new(&controls, report.phase),
                );

                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    let panel = &mut self.panel;
                    let stats = &self.stats;
                    let window_clone = window.clone();
                    render_engine.render_frame(|device, queue, encoder, color_attachment| {
                        ui_manager.draw(
                            device,
                            queue,
                            encoder,
                            &window_clone,
                            color_attachment,
                            |ui| {
                                panel.draw(ui);
                                stats.render_overlay(ui);
                            },
                        );
                    });
                } else {
                    render_engine.render_frame(|_, _, _, _| {});
                }

                self.stats.end_frame();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
