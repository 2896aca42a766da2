//! Scene driver: owns the drawable geometry and the per-frame update
//! policy.

pub mod scene;

pub use scene::{SceneDriver, TickReport};
