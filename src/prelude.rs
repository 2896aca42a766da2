//! # Fireball Prelude
//!
//! Convenience imports for typical use:
//!
//! ```rust
//! use fireball::prelude::*;
//! ```

// Re-export core application types
pub use crate::app::FireballApp;
pub use crate::default;

// Re-export the geometry core
pub use crate::gfx::geometry::{
    generate_icosphere, generate_quad, GeometryData, GeometryError, MAX_SUBDIVISION_LEVEL,
};

// Re-export scene and camera types
pub use crate::gfx::camera::{Camera, CameraUniform};
pub use crate::gfx::scene::{SceneDriver, TickReport};

// Re-export controls and UI types
pub use crate::config::FireballControls;
pub use crate::performance::FrameStats;
pub use crate::ui::{ControlPanel, UiManager};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3, Zero};
pub use imgui::Ui;
