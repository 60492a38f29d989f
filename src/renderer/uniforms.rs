use nalgebra_glm as glm;

use crate::scene;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view_pos: [f32; 4],
}

impl CameraUniform {
    pub fn new(view_proj: &glm::Mat4, eye: &glm::Vec3) -> Self {
        let s = view_proj.as_slice();
        let column = |i: usize| [s[i * 4], s[i * 4 + 1], s[i * 4 + 2], s[i * 4 + 3]];
        Self {
            view_proj: [column(0), column(1), column(2), column(3)],
            view_pos: [eye.x, eye.y, eye.z, 1.0],
        }
    }
}

/// One directional light, one attenuated point light, and a
/// camera-attached spotlight, packed into 16-byte slots.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub dir_direction: [f32; 4],
    pub dir_color: [f32; 4],
    pub point_position: [f32; 4],
    pub point_color: [f32; 4],
    // constant, linear, quadratic attenuation terms
    pub point_attenuation: [f32; 4],
    pub spot_position: [f32; 4],
    pub spot_direction: [f32; 4],
    pub spot_color: [f32; 4],
    // cos(inner cutoff), cos(outer cutoff), enabled
    pub spot_cutoff: [f32; 4],
    pub ambient: [f32; 4],
}

impl LightUniform {
    pub fn new(
        light_color: [f32; 3],
        eye: &glm::Vec3,
        front: &glm::Vec3,
        flashlight: bool,
    ) -> Self {
        let scaled = |factor: f32| {
            [
                light_color[0] * factor,
                light_color[1] * factor,
                light_color[2] * factor,
                1.0,
            ]
        };
        let light_pos = scene::light_position();
        Self {
            dir_direction: [-0.2, -1.0, -0.3, 0.0],
            dir_color: scaled(0.4),
            point_position: [light_pos.x, light_pos.y, light_pos.z, 1.0],
            point_color: scaled(0.8),
            point_attenuation: [1.0, 0.09, 0.032, 0.0],
            spot_position: [eye.x, eye.y, eye.z, 1.0],
            spot_direction: [front.x, front.y, front.z, 0.0],
            spot_color: scaled(1.0),
            spot_cutoff: [
                12.5_f32.to_radians().cos(),
                15.0_f32.to_radians().cos(),
                if flashlight { 1.0 } else { 0.0 },
                0.0,
            ],
            ambient: scaled(0.1),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub tint: [f32; 4],
    // shininess, specular strength
    pub params: [f32; 4],
}

impl MaterialUniform {
    pub fn new(tint: [f32; 3]) -> Self {
        Self {
            tint: [tint[0], tint[1], tint[2], 1.0],
            params: [32.0, 0.5, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // WGSL-side struct layouts depend on these exact sizes.
    #[test]
    fn uniform_sizes_match_wgsl_layout() {
        assert_eq!(size_of::<CameraUniform>(), 80);
        assert_eq!(size_of::<LightUniform>(), 160);
        assert_eq!(size_of::<MaterialUniform>(), 32);
    }

    #[test]
    fn camera_uniform_carries_the_eye() {
        let view_proj = glm::Mat4::identity();
        let uniform = CameraUniform::new(&view_proj, &glm::vec3(1.0, 2.0, 3.0));
        assert_eq!(uniform.view_pos, [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniform.view_proj[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(uniform.view_proj[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn spotlight_follows_the_eye() {
        let eye = glm::vec3(4.0, 5.0, 6.0);
        let front = glm::vec3(0.0, 0.0, -1.0);
        let lights = LightUniform::new([1.0, 1.0, 1.0], &eye, &front, true);
        assert_eq!(lights.spot_position, [4.0, 5.0, 6.0, 1.0]);
        assert_eq!(lights.spot_direction, [0.0, 0.0, -1.0, 0.0]);
        assert_eq!(lights.spot_cutoff[2], 1.0);

        let off = LightUniform::new([1.0, 1.0, 1.0], &eye, &front, false);
        assert_eq!(off.spot_cutoff[2], 0.0);
    }
}
