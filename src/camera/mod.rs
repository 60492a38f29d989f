mod controller;

pub use controller::CameraController;

use nalgebra_glm as glm;

/// Movement direction tag, used to abstract directions from windowing
/// libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

// Default values. Yaw -90 with pitch 0 looks down negative Z.
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// First-person fly camera: an eye position plus an orthonormal basis
/// derived from yaw/pitch Euler angles (degrees).
///
/// `front`/`right`/`up` are never assigned directly; they are recomputed
/// from the angles and the fixed world-up axis after every rotation, so
/// they stay unit length and mutually orthogonal.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: glm::Vec3,
    front: glm::Vec3,
    up: glm::Vec3,
    right: glm::Vec3,
    world_up: glm::Vec3,
    yaw: f32,
    pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    zoom: f32,
    default_position: glm::Vec3,
    default_yaw: f32,
    default_pitch: f32,
}

impl Camera {
    pub fn new(position: glm::Vec3, world_up: glm::Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: glm::vec3(0.0, 0.0, -1.0),
            up: glm::vec3(0.0, 1.0, 0.0),
            right: glm::vec3(1.0, 0.0, 0.0),
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            default_position: position,
            default_yaw: yaw,
            default_pitch: pitch,
        };
        camera.update_vectors();
        camera
    }

    pub fn front(&self) -> glm::Vec3 {
        self.front
    }

    pub fn up(&self) -> glm::Vec3 {
        self.up
    }

    pub fn right(&self) -> glm::Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees; doubles as the zoom level.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Move the eye along the camera basis. `elapsed` is the frame delta
    /// in seconds; forward/backward follow the full 3-D front vector,
    /// including its vertical component when pitched.
    pub fn advance(&mut self, direction: CameraMovement, elapsed: f32) {
        let velocity = self.movement_speed * elapsed;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a raw cursor delta. Positive `delta_x` means the pointer
    /// moved right, positive `delta_y` means it moved up; callers translate
    /// from screen coordinates, which grow downward.
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32, constrain_pitch: bool) {
        self.yaw += delta_x * self.mouse_sensitivity;
        self.pitch += delta_y * self.mouse_sensitivity;

        // Keep the view from flipping past vertical.
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Apply a scroll-wheel delta: scrolling up narrows the field of view
    /// (zooms in). Always subtract, then clamp.
    pub fn zoom_by(&mut self, delta_y: f32) {
        self.zoom = (self.zoom - delta_y).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Right-handed look-at transform from the current eye state.
    pub fn view_matrix(&self) -> glm::Mat4 {
        glm::look_at(&self.position, &(self.position + self.front), &self.up)
    }

    /// Restore the construction-time position and orientation and the
    /// default zoom. Speed and sensitivity are left alone.
    pub fn reset(&mut self) {
        self.position = self.default_position;
        self.yaw = self.default_yaw;
        self.pitch = self.default_pitch;
        self.zoom = DEFAULT_ZOOM;
        self.update_vectors();
    }

    /// Recompute `front`/`right`/`up` from the current Euler angles.
    /// `right` would degenerate with `front` parallel to `world_up`, which
    /// the pitch clamp keeps unreachable.
    fn update_vectors(&mut self) {
        let front = glm::vec3(
            self.yaw.to_radians().cos() * self.pitch.to_radians().cos(),
            self.pitch.to_radians().sin(),
            self.yaw.to_radians().sin() * self.pitch.to_radians().cos(),
        );
        self.front = glm::normalize(&front);
        self.right = glm::normalize(&glm::cross(&self.front, &self.world_up));
        self.up = glm::normalize(&glm::cross(&self.right, &self.front));
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            glm::vec3(0.0, 0.0, 0.0),
            glm::vec3(0.0, 1.0, 0.0),
            DEFAULT_YAW,
            DEFAULT_PITCH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn test_camera() -> Camera {
        Camera::new(
            glm::vec3(0.0, 0.0, 3.0),
            glm::vec3(0.0, 1.0, 0.0),
            DEFAULT_YAW,
            DEFAULT_PITCH,
        )
    }

    fn assert_vec3_near(actual: glm::Vec3, expected: glm::Vec3) {
        assert!(
            glm::length(&(actual - expected)) < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn initial_basis_looks_down_negative_z() {
        let camera = test_camera();
        assert_vec3_near(camera.front(), glm::vec3(0.0, 0.0, -1.0));
        assert_vec3_near(camera.right(), glm::vec3(1.0, 0.0, 0.0));
        assert_vec3_near(camera.up(), glm::vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn advance_forward_moves_along_front() {
        let mut camera = test_camera();
        camera.advance(CameraMovement::Forward, 1.0);
        // 2.5 units along (0, 0, -1) from (0, 0, 3)
        assert_vec3_near(camera.position, glm::vec3(0.0, 0.0, 0.5));
    }

    #[test]
    fn advance_round_trip_restores_position() {
        let mut camera = test_camera();
        camera.rotate(137.0, -42.0, true);
        let start = camera.position;
        camera.advance(CameraMovement::Forward, 0.73);
        camera.advance(CameraMovement::Backward, 0.73);
        assert_vec3_near(camera.position, start);

        camera.advance(CameraMovement::Left, 1.9);
        camera.advance(CameraMovement::Right, 1.9);
        assert_vec3_near(camera.position, start);
    }

    #[test]
    fn rotate_scales_deltas_by_sensitivity() {
        let mut camera = test_camera();
        camera.rotate(100.0, 0.0, true);
        assert!((camera.yaw() - -80.0).abs() < EPSILON);
        assert!((camera.pitch() - 0.0).abs() < EPSILON);
    }

    #[test]
    fn pitch_saturates_at_limit() {
        let mut camera = test_camera();
        for _ in 0..5 {
            camera.rotate(0.0, 900.0, true);
            assert!(camera.pitch() <= 89.0);
        }
        assert!((camera.pitch() - 89.0).abs() < EPSILON);

        for _ in 0..10 {
            camera.rotate(0.0, -900.0, true);
        }
        assert!((camera.pitch() - -89.0).abs() < EPSILON);
    }

    #[test]
    fn unconstrained_pitch_is_unbounded() {
        let mut camera = test_camera();
        camera.rotate(0.0, 1000.0, false);
        assert!((camera.pitch() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn basis_stays_orthonormal_under_rotation() {
        let mut camera = test_camera();
        let deltas = [
            (250.0, 130.0),
            (-613.0, -999.0),
            (42.0, 900.0),
            (-1500.0, 333.0),
            (7.5, -0.25),
        ];
        for (dx, dy) in deltas {
            camera.rotate(dx, dy, true);
            assert!((glm::length(&camera.front()) - 1.0).abs() < EPSILON);
            assert!((glm::length(&camera.right()) - 1.0).abs() < EPSILON);
            assert!((glm::length(&camera.up()) - 1.0).abs() < EPSILON);
            assert!(glm::dot(&camera.front(), &camera.right()).abs() < EPSILON);
            assert!(glm::dot(&camera.front(), &camera.up()).abs() < EPSILON);
            assert!(glm::dot(&camera.right(), &camera.up()).abs() < EPSILON);
        }
    }

    #[test]
    fn zoom_clamps_to_valid_range() {
        let mut camera = test_camera();
        camera.zoom_by(50.0);
        assert!((camera.zoom() - 1.0).abs() < EPSILON);

        camera.zoom_by(-100.0);
        assert!((camera.zoom() - 45.0).abs() < EPSILON);

        camera.zoom_by(10.0);
        assert!((camera.zoom() - 35.0).abs() < EPSILON);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let mut camera = test_camera();
        camera.rotate(320.0, -75.0, true);
        let view = camera.view_matrix();

        let eye = view * glm::vec4(camera.position.x, camera.position.y, camera.position.z, 1.0);
        assert!(glm::length(&glm::vec4_to_vec3(&eye)) < EPSILON);

        // One unit in front of the eye lands one unit down -Z in view space.
        let ahead = camera.position + camera.front();
        let ahead = view * glm::vec4(ahead.x, ahead.y, ahead.z, 1.0);
        assert_vec3_near(glm::vec4_to_vec3(&ahead), glm::vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn reset_restores_construction_state() {
        let mut camera = test_camera();
        camera.advance(CameraMovement::Right, 4.0);
        camera.rotate(500.0, 250.0, true);
        camera.zoom_by(30.0);

        camera.reset();
        assert_vec3_near(camera.position, glm::vec3(0.0, 0.0, 3.0));
        assert!((camera.yaw() - DEFAULT_YAW).abs() < EPSILON);
        assert!((camera.pitch() - DEFAULT_PITCH).abs() < EPSILON);
        assert!((camera.zoom() - DEFAULT_ZOOM).abs() < EPSILON);
        assert_vec3_near(camera.front(), glm::vec3(0.0, 0.0, -1.0));
    }
}
