use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use nalgebra_glm as glm;
use winit::window::Window;

use crate::camera::{Camera, CameraController, DEFAULT_PITCH, DEFAULT_YAW};
use crate::error::ViewError;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::texture;
use crate::ui::Ui;

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

pub struct App {
    pub window: Arc<Window>,
    renderer: Renderer,
    controller: CameraController,
    ui: Ui,
    settings: Settings,
    egui_state: egui_winit::State,
    last_frame: Option<Instant>,
    // accumulated spin time; freezes while spinning is off
    spin: f32,
}

impl App {
    pub async fn new(window: Arc<Window>, texture_path: Option<String>) -> Result<Self, ViewError> {
        let mut renderer = Renderer::new(window.clone()).await?;

        let egui_ctx = renderer.egui_context();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::viewport::ViewportId::ROOT,
            &*window,
            None,
            None,
            None,
        );

        let settings = Settings::load();

        let mut camera = Camera::new(
            glm::vec3(0.0, 0.0, 3.0),
            glm::vec3(0.0, 1.0, 0.0),
            DEFAULT_YAW,
            DEFAULT_PITCH,
        );
        camera.movement_speed = settings.camera.movement_speed;
        camera.mouse_sensitivity = settings.camera.mouse_sensitivity;
        let controller = CameraController::new(camera);

        // Diffuse map: CLI-provided image, or the built-in checkerboard
        let (rgba, width, height) = match texture_path.as_deref() {
            Some(path) => match texture::load_rgba_from_file(Path::new(path)) {
                Ok(loaded) => {
                    log::info!("loaded diffuse texture {path} ({}x{})", loaded.1, loaded.2);
                    loaded
                }
                Err(e) => {
                    log::warn!("failed to load texture {path}: {e}, using checkerboard");
                    texture::checkerboard_rgba(256, 8)
                }
            },
            None => texture::checkerboard_rgba(256, 8),
        };
        renderer.load_texture_from_rgba(&rgba, width, height);

        Ok(Self {
            window,
            renderer,
            controller,
            ui: Ui::new(),
            settings,
            egui_state,
            last_frame: None,
            spin: 0.0,
        })
    }

    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> EventResponse {
        // Let egui handle the event first
        let egui_response = self.egui_state.on_window_event(&self.window, event);

        // If egui consumed the event, don't process it further
        if egui_response.consumed {
            return EventResponse {
                repaint: egui_response.repaint,
                exit: false,
            };
        }

        match event {
            winit::event::WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            winit::event::WindowEvent::KeyboardInput { event, .. } => {
                if event.logical_key
                    == winit::keyboard::Key::Named(winit::keyboard::NamedKey::Escape)
                {
                    return EventResponse {
                        repaint: false,
                        exit: true,
                    };
                }
                if let winit::keyboard::PhysicalKey::Code(code) = event.physical_key {
                    self.controller
                        .on_key(code, event.state == winit::event::ElementState::Pressed);
                }
            }
            winit::event::WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
            }
            winit::event::WindowEvent::Focused(false) => {
                self.controller.release_all();
            }
            winit::event::WindowEvent::MouseInput { state, button, .. } => {
                self.controller
                    .on_mouse_button(*button, *state == winit::event::ElementState::Pressed);
            }
            winit::event::WindowEvent::CursorMoved { position, .. } => {
                self.controller.on_cursor_moved((position.x, position.y));
            }
            winit::event::WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => *y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                self.controller.on_scroll(scroll_delta);
            }
            _ => {}
        }

        EventResponse {
            repaint: false,
            exit: false,
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let frame_time = self
            .last_frame
            .map(|last| (now - last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        // The tuning sliders drive the camera directly
        {
            let camera = self.controller.camera_mut();
            camera.movement_speed = self.settings.camera.movement_speed;
            camera.mouse_sensitivity = self.settings.camera.mouse_sensitivity;
        }
        self.controller.update(frame_time);
        if self.settings.display.spin_cubes {
            self.spin += frame_time;
        }

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();

        let mut ui_response = None;
        let full_output = egui_ctx.run(raw_input, |ctx| {
            ui_response = Some(self.ui.show(
                ctx,
                self.controller.camera(),
                &mut self.settings,
                frame_time,
            ));
        });

        if ui_response.is_some_and(|r| r.reset_camera) {
            self.controller.reset();
        }

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [
                self.window.inner_size().width,
                self.window.inner_size().height,
            ],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        self.renderer.render(
            self.controller.camera(),
            &self.settings,
            self.spin,
            paint_jobs,
            full_output.textures_delta,
            screen_descriptor,
        )
    }
}
