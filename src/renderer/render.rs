use egui_wgpu::ScreenDescriptor;
use nalgebra_glm as glm;

use crate::camera::Camera;
use crate::renderer::renderer::Renderer;
use crate::renderer::uniforms::{CameraUniform, LightUniform, MaterialUniform};
use crate::renderer::vertex::InstanceRaw;
use crate::scene;
use crate::settings::Settings;

const NEAR_PLANE: f32 = 0.1;

impl Renderer {
    pub fn render(
        &mut self,
        camera: &Camera,
        settings: &Settings,
        spin: f32,
        paint_jobs: Vec<egui::ClippedPrimitive>,
        textures_delta: egui::TexturesDelta,
        screen_descriptor: ScreenDescriptor,
    ) -> Result<(), wgpu::SurfaceError> {
        // Skip rendering while the window has no area (minimized, not ready)
        if self.config.width == 0 || self.config.height == 0 {
            return Ok(());
        }

        // The camera's zoom value is the vertical field of view
        let aspect = self.config.width as f32 / self.config.height as f32;
        let proj = glm::perspective(
            aspect,
            camera.zoom().to_radians(),
            NEAR_PLANE,
            settings.display.far_plane,
        );
        let view_proj = proj * camera.view_matrix();

        let camera_uniform = CameraUniform::new(&view_proj, &camera.position);
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[camera_uniform]),
        );

        let lights = LightUniform::new(
            settings.colors.light_color,
            &camera.position,
            &camera.front(),
            settings.display.flashlight,
        );
        self.queue
            .write_buffer(&self.light_buffer, 0, bytemuck::cast_slice(&[lights]));

        let material = MaterialUniform::new(settings.colors.object_tint);
        self.queue
            .write_buffer(&self.material_buffer, 0, bytemuck::cast_slice(&[material]));

        let lamp_color = [
            settings.colors.light_color[0],
            settings.colors.light_color[1],
            settings.colors.light_color[2],
            1.0_f32,
        ];
        self.queue
            .write_buffer(&self.lamp_color_buffer, 0, bytemuck::cast_slice(&[lamp_color]));

        let instances: Vec<InstanceRaw> = (0..scene::CUBE_COUNT)
            .map(|index| InstanceRaw::from_matrix(&scene::cube_model(index, spin)))
            .collect();
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let depth_texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: self.config.width,
                height: self.config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let depth_view = depth_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: settings.colors.clear_color[0] as f64,
                            g: settings.colors.clear_color[1] as f64,
                            b: settings.colors.clear_color[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.scene_pipeline);
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
            render_pass.set_bind_group(1, &self.texture_bind_group, &[]);
            render_pass.set_bind_group(2, &self.shading_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass.draw(
                0..scene::CUBE_VERTICES.len() as u32,
                0..scene::CUBE_COUNT as u32,
            );

            if settings.display.show_lamp {
                render_pass.set_pipeline(&self.lamp_pipeline);
                render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
                render_pass.set_bind_group(1, &self.lamp_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.set_vertex_buffer(1, self.lamp_instance_buffer.slice(..));
                render_pass.draw(0..scene::CUBE_VERTICES.len() as u32, 0..1);
            }
        }

        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut egui_rpass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui render pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut egui_rpass, &paint_jobs, &screen_descriptor);
        }

        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
