//! # Fireball Controls
//!
//! Immutable snapshot of the GUI-adjustable parameters. The control panel
//! owns a mutable working copy and hands a fresh snapshot to the scene
//! driver every tick; the core never holds a reference into GUI state.

use crate::gfx::geometry::MAX_SUBDIVISION_LEVEL;

pub const MIN_TESSELLATION_LEVEL: i32 = 0;
pub const MAX_TESSELLATION_LEVEL: i32 = MAX_SUBDIVISION_LEVEL;
pub const MIN_NOISE_OCTAVES: i32 = 1;
pub const MAX_NOISE_OCTAVES: i32 = 14;
pub const MIN_NOISE_STRENGTH: f32 = 0.1;
pub const MAX_NOISE_STRENGTH: f32 = 1.2;

/// One frame's worth of user-facing parameters.
///
/// Only `tessellation_level` affects geometry; the colors and noise
/// settings are forwarded to the shaders untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireballControls {
    /// Icosphere subdivision level, clamped to [0, 8] by the scene driver.
    pub tessellation_level: i32,
    /// Primary flame color, linear RGB in [0, 1].
    pub color1: [f32; 3],
    /// Secondary flame color, linear RGB in [0, 1].
    pub color2: [f32; 3],
    /// Number of fBm octaves in the displacement noise.
    pub noise_octaves: i32,
    /// Displacement amplitude scale.
    pub noise_strength: f32,
}

impl Default for FireballControls {
    fn default() -> Self {
        Self {
            tessellation_level: 5,
            color1: [90.0 / 255.0, 15.0 / 255.0, 15.0 / 255.0],
            color2: [255.0 / 255.0, 230.0 / 255.0, 135.0 / 255.0],
            noise_octaves: 8,
            noise_strength: 0.6,
        }
    }
}

impl FireballControls {
    /// Returns a copy with every field forced into its supported range.
    pub fn clamped(mut self) -> Self {
        self.tessellation_level = self
            .tessellation_level
            .clamp(MIN_TESSELLATION_LEVEL, MAX_TESSELLATION_LEVEL);
        self.noise_octaves = self.noise_octaves.clamp(MIN_NOISE_OCTAVES, MAX_NOISE_OCTAVES);
        self.noise_strength = self
            .noise_strength
            .clamp(MIN_NOISE_STRENGTH, MAX_NOISE_STRENGTH);
        for channel in self.color1.iter_mut().chain(self.color2.iter_mut()) {
            *channel = channel.clamp(0.0, 1.0);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_range() {
        let controls = FireballControls::default();
        assert_eq!(controls, controls.clamped());
    }

    #[test]
    fn out_of_range_fields_are_clamped() {
        let controls = FireballControls {
            tessellation_level: 42,
            color1: [-0.5, 2.0, 0.5],
            color2: [0.0, 0.0, 0.0],
            noise_octaves: 0,
            noise_strength: 9.0,
        }
        .clamped();

        assert_eq!(controls.tessellation_level, MAX_TESSELLATION_LEVEL);
        assert_eq!(controls.color1, [0.0, 1.0, 0.5]);
        assert_eq!(controls.noise_octaves, MIN_NOISE_OCTAVES);
        assert_eq!(controls.noise_strength, MAX_NOISE_STRENGTH);
    }
}
