//! imgui integration: context management and the fireball control panel.

pub mod manager;
pub mod panel;

pub use manager::UiManager;
pub use panel::ControlPanel;
