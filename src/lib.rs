// src/lib.rs
//! Fireball
//!
//! A procedural fireball demo built on wgpu and winit: an fBm-displaced
//! icosphere over a shaded background quad, with imgui controls and an
//! FPS overlay.

pub mod app;
pub mod config;
pub mod gfx;
pub mod performance;
pub mod prelude;
pub mod ui;

// Re-export main types for convenience
pub use app::FireballApp;

/// Creates a default fireball application instance
pub fn default() -> FireballApp {
    pollster::block_on(FireballApp::new())
}
