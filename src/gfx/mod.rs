//! # Graphics Module
//!
//! Everything between the controls snapshot and the presented frame:
//!
//! - **Camera** ([`camera`]) - look-at camera with perspective projection
//! - **Geometry** ([`geometry`]) - icosphere and background quad generators
//! - **Scene** ([`scene`]) - per-tick update and rebuild policy
//! - **Rendering** ([`rendering`]) - wgpu pipelines and GPU buffers

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod scene;

pub use camera::Camera;
pub use rendering::RenderEngine;
pub use scene::SceneDriver;
