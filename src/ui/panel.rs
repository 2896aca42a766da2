//! Fireball control panel.
//!
//! Owns the mutable working copy of the controls; the rest of the
//! application only ever sees immutable clamped snapshots.

use crate::config::{
    FireballControls, MAX_NOISE_OCTAVES, MAX_NOISE_STRENGTH, MAX_TESSELLATION_LEVEL,
    MIN_NOISE_OCTAVES, MIN_NOISE_STRENGTH, MIN_TESSELLATION_LEVEL,
};

pub struct ControlPanel {
    controls: FireballControls,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            controls: FireballControls::default(),
        }
    }

    /// Clamped snapshot of the current settings, taken once per tick.
    pub fn snapshot(&self) -> FireballControls {
        self.controls.clamped()
    }

    /// Builds the imgui window with all fireball widgets.
    pub fn draw(&mut self, ui: &imgui::Ui) {
        ui.window("Fireball")
            .size([300.0, 230.0], imgui::Condition::FirstUseEver)
            .position([10.0, 10.0], imgui::Condition::FirstUseEver)
            .build(|| {
                ui.slider(
                    "tessellations",
                    MIN_TESSELLATION_LEVEL,
                    MAX_TESSELLATION_LEVEL,
                    &mut self.controls.tessellation_level,
                );

                ui.color_edit3("color 1", &mut self.controls.color1);
                ui.color_edit3("color 2", &mut self.controls.color2);

                ui.slider(
                    "fbm octaves",
                    MIN_NOISE_OCTAVES,
                    MAX_NOISE_OCTAVES,
                    &mut self.controls.noise_octaves,
                );
                ui.slider(
                    "fbm strength",
                    MIN_NOISE_STRENGTH,
                    MAX_NOISE_STRENGTH,
                    &mut self.controls.noise_strength,
                );

                ui.separator();
                if ui.button("restore defaults") {
                    self.controls = FireballControls::default();
                }
            });
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
