use nalgebra_glm as glm;

use crate::renderer::Vertex;

/// Number of cubes in the field.
pub const CUBE_COUNT: usize = 10;

/// World positions for the cube field.
const CUBE_POSITIONS: [[f32; 3]; CUBE_COUNT] = [
    [0.0, 0.0, 0.0],
    [2.0, 5.0, -15.0],
    [-1.5, -2.2, -2.5],
    [-3.8, -2.0, -12.3],
    [2.4, -0.4, -3.5],
    [-1.7, 3.0, -7.5],
    [1.3, -2.0, -2.5],
    [1.5, 2.0, -2.5],
    [1.5, 0.2, -1.5],
    [-1.3, 1.0, -1.5],
];

/// Point light world position; the lamp cube is drawn here.
const LIGHT_POSITION: [f32; 3] = [1.2, 1.0, 2.0];

const SPIN_AXIS: [f32; 3] = [1.0, 0.3, 0.5];
const LAMP_SCALE: f32 = 0.2;

const fn v(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Vertex {
    Vertex {
        position,
        normal,
        uv,
    }
}

/// Unit cube as 36 unindexed vertices, one face normal per side.
pub const CUBE_VERTICES: [Vertex; 36] = [
    // back face (-Z)
    v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    v([0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
    v([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
    v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
    // front face (+Z)
    v([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    v([0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
    v([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
    v([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    // left face (-X)
    v([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    v([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
    v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
    v([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
    v([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
    // right face (+X)
    v([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
    v([0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
    v([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    v([0.5, -0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
    v([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
    // bottom face (-Y)
    v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
    v([0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
    v([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
    v([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
    v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
    // top face (+Y)
    v([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
    v([0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    v([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    v([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    v([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
];

pub fn light_position() -> glm::Vec3 {
    glm::make_vec3(&LIGHT_POSITION)
}

/// Model matrix for cube `index` after `spin` seconds of accumulated spin.
/// Each cube turns at its own rate, 20 degrees per second per index step.
pub fn cube_model(index: usize, spin: f32) -> glm::Mat4 {
    let angle = (20.0 * (index as f32 + 1.0)).to_radians() * spin;
    let translation = glm::translation(&glm::make_vec3(&CUBE_POSITIONS[index]));
    glm::rotate(&translation, angle, &glm::make_vec3(&SPIN_AXIS))
}

/// Model matrix for the lamp cube: a small marker at the light position.
pub fn lamp_model() -> glm::Mat4 {
    glm::scale(
        &glm::translation(&light_position()),
        &glm::vec3(LAMP_SCALE, LAMP_SCALE, LAMP_SCALE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_unit_normals() {
        for vertex in &CUBE_VERTICES {
            let n = glm::make_vec3(&vertex.normal);
            assert!((glm::length(&n) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn cube_faces_cover_all_axes() {
        // 36 vertices, six per face, each face normal along one axis.
        assert_eq!(CUBE_VERTICES.len(), 36);
        for axis in 0..3 {
            for sign in [-1.0, 1.0] {
                let count = CUBE_VERTICES
                    .iter()
                    .filter(|vertex| vertex.normal[axis] == sign)
                    .count();
                assert_eq!(count, 6);
            }
        }
    }

    #[test]
    fn unspun_cube_model_is_pure_translation() {
        for index in 0..CUBE_COUNT {
            let model = cube_model(index, 0.0);
            let origin = model * glm::vec4(0.0, 0.0, 0.0, 1.0);
            let expected = CUBE_POSITIONS[index];
            assert!((origin.x - expected[0]).abs() < 1e-6);
            assert!((origin.y - expected[1]).abs() < 1e-6);
            assert!((origin.z - expected[2]).abs() < 1e-6);
        }
    }

    #[test]
    fn spin_preserves_the_cube_center() {
        let model = cube_model(3, 17.5);
        let origin = model * glm::vec4(0.0, 0.0, 0.0, 1.0);
        let expected = CUBE_POSITIONS[3];
        assert!((origin.x - expected[0]).abs() < 1e-4);
        assert!((origin.y - expected[1]).abs() < 1e-4);
        assert!((origin.z - expected[2]).abs() < 1e-4);
    }

    #[test]
    fn lamp_sits_at_the_light_scaled_down() {
        let model = lamp_model();
        let origin = model * glm::vec4(0.0, 0.0, 0.0, 1.0);
        assert!((origin.x - 1.2).abs() < 1e-6);
        assert!((origin.y - 1.0).abs() < 1e-6);
        assert!((origin.z - 2.0).abs() < 1e-6);

        let corner = model * glm::vec4(0.5, 0.0, 0.0, 1.0);
        assert!((corner.x - (1.2 + 0.1)).abs() < 1e-6);
    }
}
