use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

mod app;
mod camera;
mod error;
mod renderer;
mod scene;
mod settings;
mod texture;
mod ui;

use crate::error::ViewError;

pub const CONFY_APP_NAME: &str = "flycam-rs";

const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;

struct AppHandler {
    app: Option<app::App>,
    texture_path: Option<String>,
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("FlyCam-RS")
                .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

            let window = event_loop.create_window(window_attrs).unwrap();
            let app =
                pollster::block_on(app::App::new(Arc::new(window), self.texture_path.take()))
                    .unwrap();

            self.app = Some(app);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            if let Err(e) = app.render() {
                log::error!("render error: {e:?}");
            }
            app.window.request_redraw();
        }
    }
}

fn main() -> Result<(), ViewError> {
    env_logger::init();

    // Optional diffuse texture path as the only command line argument
    let texture_path = std::env::args().nth(1);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = AppHandler {
        app: None,
        texture_path,
    };

    event_loop.run_app(&mut handler)?;

    Ok(())
}
