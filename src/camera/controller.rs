use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use super::{Camera, CameraMovement};

/// Translates window input into camera motion.
///
/// Owns the camera plus the transient input state (held movement keys,
/// mouse-look anchor), so the camera itself never sees a windowing type.
/// Mouse-look is active while the right button is held; the cursor anchor
/// is an `Option` that stays unset until the first sample, so starting a
/// drag never produces a jump.
pub struct CameraController {
    camera: Camera,
    forward_pressed: bool,
    backward_pressed: bool,
    left_pressed: bool,
    right_pressed: bool,
    look_pressed: bool,
    last_cursor_pos: Option<(f64, f64)>,
}

impl CameraController {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            forward_pressed: false,
            backward_pressed: false,
            left_pressed: false,
            right_pressed: false,
            look_pressed: false,
            last_cursor_pos: None,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Track a movement key. Returns true if the key is one we handle.
    pub fn on_key(&mut self, code: KeyCode, pressed: bool) -> bool {
        match code {
            KeyCode::KeyW => self.forward_pressed = pressed,
            KeyCode::KeyS => self.backward_pressed = pressed,
            KeyCode::KeyA => self.left_pressed = pressed,
            KeyCode::KeyD => self.right_pressed = pressed,
            _ => return false,
        }
        true
    }

    /// Handle mouse button press/release.
    pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Right {
            self.look_pressed = pressed;
            if !pressed {
                self.last_cursor_pos = None;
            }
        }
    }

    /// Handle cursor movement; rotates the camera while the look button is
    /// held. Returns true when the event changed the camera.
    pub fn on_cursor_moved(&mut self, position: (f64, f64)) -> bool {
        if !self.look_pressed {
            self.last_cursor_pos = None;
            return false;
        }

        let mut handled = false;
        if let Some(last_pos) = self.last_cursor_pos {
            let delta_x = (position.0 - last_pos.0) as f32;
            let delta_y = (position.1 - last_pos.1) as f32;
            // Screen-space Y grows downward; the camera wants "up" positive.
            self.camera.rotate(delta_x, -delta_y, true);
            handled = true;
        }
        self.last_cursor_pos = Some(position);

        handled
    }

    /// Handle a scroll-wheel delta in lines.
    pub fn on_scroll(&mut self, delta_y: f32) {
        self.camera.zoom_by(delta_y);
    }

    /// Apply held movement keys for one frame of `elapsed` seconds.
    pub fn update(&mut self, elapsed: f32) {
        if self.forward_pressed {
            self.camera.advance(CameraMovement::Forward, elapsed);
        }
        if self.backward_pressed {
            self.camera.advance(CameraMovement::Backward, elapsed);
        }
        if self.left_pressed {
            self.camera.advance(CameraMovement::Left, elapsed);
        }
        if self.right_pressed {
            self.camera.advance(CameraMovement::Right, elapsed);
        }
    }

    /// Drop all held input, e.g. when the window loses focus mid-drag.
    pub fn release_all(&mut self) {
        self.forward_pressed = false;
        self.backward_pressed = false;
        self.left_pressed = false;
        self.right_pressed = false;
        self.look_pressed = false;
        self.last_cursor_pos = None;
    }

    /// Reset the camera to its home state.
    pub fn reset(&mut self) {
        self.camera.reset();
        self.last_cursor_pos = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{DEFAULT_PITCH, DEFAULT_YAW};
    use nalgebra_glm as glm;

    fn test_controller() -> CameraController {
        CameraController::new(Camera::new(
            glm::vec3(0.0, 0.0, 3.0),
            glm::vec3(0.0, 1.0, 0.0),
            DEFAULT_YAW,
            DEFAULT_PITCH,
        ))
    }

    #[test]
    fn first_cursor_sample_does_not_rotate() {
        let mut controller = test_controller();
        controller.on_mouse_button(MouseButton::Right, true);

        assert!(!controller.on_cursor_moved((400.0, 300.0)));
        assert!((controller.camera().yaw() - DEFAULT_YAW).abs() < 1e-5);

        // Second sample rotates by the delta: +100 px right at 0.1
        // sensitivity is +10 degrees of yaw.
        assert!(controller.on_cursor_moved((500.0, 300.0)));
        assert!((controller.camera().yaw() - -80.0).abs() < 1e-5);
    }

    #[test]
    fn cursor_moves_ignored_without_look_button() {
        let mut controller = test_controller();
        assert!(!controller.on_cursor_moved((100.0, 100.0)));
        assert!(!controller.on_cursor_moved((500.0, 500.0)));
        assert!((controller.camera().yaw() - DEFAULT_YAW).abs() < 1e-5);
        assert!((controller.camera().pitch() - 0.0).abs() < 1e-5);
    }

    #[test]
    fn button_release_rearms_the_anchor() {
        let mut controller = test_controller();
        controller.on_mouse_button(MouseButton::Right, true);
        controller.on_cursor_moved((400.0, 300.0));
        controller.on_cursor_moved((410.0, 300.0));
        let yaw = controller.camera().yaw();

        // Release, move far away, press again: the next sample must not
        // apply the gap as a delta.
        controller.on_mouse_button(MouseButton::Right, false);
        controller.on_mouse_button(MouseButton::Right, true);
        assert!(!controller.on_cursor_moved((900.0, 700.0)));
        assert!((controller.camera().yaw() - yaw).abs() < 1e-5);
    }

    #[test]
    fn screen_y_is_inverted_before_the_camera() {
        let mut controller = test_controller();
        controller.on_mouse_button(MouseButton::Right, true);
        controller.on_cursor_moved((400.0, 300.0));
        // Pointer down the screen pitches the view down.
        controller.on_cursor_moved((400.0, 400.0));
        assert!((controller.camera().pitch() - -10.0).abs() < 1e-5);
    }

    #[test]
    fn held_keys_move_every_update() {
        let mut controller = test_controller();
        assert!(controller.on_key(KeyCode::KeyW, true));
        controller.update(1.0);
        controller.update(1.0);
        // Two seconds at 2.5 units/s along (0, 0, -1) from z = 3.
        assert!((controller.camera().position.z - -2.0).abs() < 1e-5);

        controller.on_key(KeyCode::KeyW, false);
        controller.update(1.0);
        assert!((controller.camera().position.z - -2.0).abs() < 1e-5);
    }

    #[test]
    fn unhandled_keys_are_reported() {
        let mut controller = test_controller();
        assert!(!controller.on_key(KeyCode::KeyQ, true));
        controller.update(1.0);
        assert!((controller.camera().position.z - 3.0).abs() < 1e-5);
    }

    #[test]
    fn release_all_stops_motion() {
        let mut controller = test_controller();
        controller.on_key(KeyCode::KeyD, true);
        controller.on_mouse_button(MouseButton::Right, true);
        controller.on_cursor_moved((10.0, 10.0));

        controller.release_all();
        let position = controller.camera().position;
        controller.update(1.0);
        assert!((controller.camera().position - position).norm() < 1e-6);
        assert!(!controller.on_cursor_moved((600.0, 600.0)));
    }

    #[test]
    fn scroll_zooms_in() {
        let mut controller = test_controller();
        controller.on_scroll(5.0);
        assert!((controller.camera().zoom() - 40.0).abs() < 1e-5);
    }
}
