mod render;
mod renderer;
mod uniforms;
mod vertex;

pub use renderer::Renderer;
pub use uniforms::{CameraUniform, LightUniform, MaterialUniform};
pub use vertex::{InstanceRaw, Vertex};
