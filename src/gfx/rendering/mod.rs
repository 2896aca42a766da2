//! Rendering collaborator: wgpu surface, pipelines, and GPU buffers.

pub mod render_engine;
pub mod uniforms;
pub mod vertex;

pub use render_engine::RenderEngine;
pub use uniforms::FireballUniform;
pub use vertex::Vertex3D;
