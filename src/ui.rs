use crate::camera::Camera;
use crate::settings::Settings;

pub struct UiResponse {
    pub reset_camera: bool,
}

pub struct Ui {
    // exponential moving average of the frame time, for the fps readout
    smoothed_frame: f32,
}

impl Ui {
    pub fn new() -> Self {
        Self {
            smoothed_frame: 0.0,
        }
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        camera: &Camera,
        settings: &mut Settings,
        frame_time: f32,
    ) -> UiResponse {
        if frame_time > 0.0 {
            if self.smoothed_frame > 0.0 {
                self.smoothed_frame = self.smoothed_frame * 0.95 + frame_time * 0.05;
            } else {
                self.smoothed_frame = frame_time;
            }
        }

        let mut response = UiResponse {
            reset_camera: false,
        };

        egui::Window::new("Scene")
            .default_width(280.0)
            .show(ctx, |ui| {
                if self.smoothed_frame > 0.0 {
                    ui.label(format!("{:.0} fps", 1.0 / self.smoothed_frame));
                }
                ui.label("WASD to move, right-drag to look, scroll to zoom");
                ui.separator();

                let mut camera_changed = false;
                ui.collapsing("Camera", |ui| {
                    ui.monospace(format!(
                        "pos   {:+.2} {:+.2} {:+.2}",
                        camera.position.x, camera.position.y, camera.position.z
                    ));
                    ui.monospace(format!(
                        "yaw   {:+.1}  pitch {:+.1}",
                        camera.yaw(),
                        camera.pitch()
                    ));
                    ui.monospace(format!("fov   {:.1}", camera.zoom()));

                    camera_changed |= ui
                        .add(
                            egui::Slider::new(&mut settings.camera.movement_speed, 0.5..=10.0)
                                .text("Speed"),
                        )
                        .changed();
                    camera_changed |= ui
                        .add(
                            egui::Slider::new(&mut settings.camera.mouse_sensitivity, 0.01..=0.5)
                                .text("Sensitivity"),
                        )
                        .changed();

                    if ui.button("Reset camera").clicked() {
                        response.reset_camera = true;
                    }
                });
                if camera_changed {
                    settings.camera.save();
                }

                let mut display_changed = false;
                ui.collapsing("Display", |ui| {
                    display_changed |= ui
                        .checkbox(&mut settings.display.spin_cubes, "Spin cubes")
                        .changed();
                    display_changed |= ui
                        .checkbox(&mut settings.display.flashlight, "Flashlight")
                        .changed();
                    display_changed |= ui
                        .checkbox(&mut settings.display.show_lamp, "Show lamp")
                        .changed();
                    display_changed |= ui
                        .add(
                            egui::Slider::new(&mut settings.display.far_plane, 10.0..=500.0)
                                .text("Far plane"),
                        )
                        .changed();
                });
                if display_changed {
                    settings.display.save();
                }

                let mut colors_changed = false;
                ui.collapsing("Colors", |ui| {
                    ui.horizontal(|ui| {
                        colors_changed |= ui
                            .color_edit_button_rgb(&mut settings.colors.object_tint)
                            .changed();
                        ui.label("Object tint");
                    });
                    ui.horizontal(|ui| {
                        colors_changed |= ui
                            .color_edit_button_rgb(&mut settings.colors.clear_color)
                            .changed();
                        ui.label("Background");
                    });
                    ui.horizontal(|ui| {
                        colors_changed |= ui
                            .color_edit_button_rgb(&mut settings.colors.light_color)
                            .changed();
                        ui.label("Light color");
                    });
                });
                if colors_changed {
                    settings.colors.save();
                }
            });

        response
    }
}
