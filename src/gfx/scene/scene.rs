//! # Scene Driver
//!
//! Runs once per animation tick: update the camera, rebuild the icosphere
//! if the requested tessellation level changed, advance the frame counter
//! and the time-derived phase. Regeneration is synchronous on the render
//! thread; a high subdivision level stalls one presented frame, which is
//! accepted given the bounded level range.

use cgmath::Vector3;

use crate::config::{FireballControls, MAX_TESSELLATION_LEVEL, MIN_TESSELLATION_LEVEL};
use crate::gfx::camera::Camera;
use crate::gfx::geometry::{generate_icosphere, generate_quad, GeometryData, GeometryError};

/// What a single tick did, for the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// True when the icosphere was regenerated this tick and its GPU
    /// buffers must be re-uploaded.
    pub rebuilt: bool,
    /// Monotonic frame counter after this tick.
    pub frame: u64,
    /// Time-derived animation phase for this frame.
    pub phase: f32,
}

/// Owns the drawable geometry, the camera, and the rebuild policy.
pub struct SceneDriver {
    camera: Camera,
    icosphere: GeometryData,
    background: GeometryData,
    center: Vector3<f32>,
    radius: f32,
    built_level: Option<i32>,
    frame: u64,
    phase: f32,
}

impl SceneDriver {
    /// Creates a driver with an empty icosphere buffer.
    ///
    /// The first `tick()` always counts as a rebuild, so the geometry is
    /// generated before anything is drawn.
    pub fn new(camera: Camera, center: Vector3<f32>, radius: f32) -> Self {
        Self {
            camera,
            icosphere: GeometryData::new(),
            background: generate_quad(Vector3::new(0.0, 0.0, 0.0)),
            center,
            radius,
            built_level: None,
            frame: 0,
            phase: 0.0,
        }
    }

    /// Advances the scene by one frame.
    ///
    /// Clamps the requested tessellation level to its supported range,
    /// regenerates the icosphere when it differs from the built level,
    /// and always increments the frame counter and recomputes the phase.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`] from the generator. The stale buffer
    /// is never kept alongside a newly requested level: on failure the
    /// built level is unchanged and the caller should stop ticking.
    pub fn tick(&mut self, controls: &FireballControls) -> Result<TickReport, GeometryError> {
        self.camera.update();

        let level = controls
            .tessellation_level
            .clamp(MIN_TESSELLATION_LEVEL, MAX_TESSELLATION_LEVEL);

        let mut rebuilt = false;
        if self.built_level != Some(level) {
            self.icosphere = generate_icosphere(self.center, self.radius, level)?;
            self.built_level = Some(level);
            rebuilt = true;
            log::info!(
                "rebuilt icosphere at level {}: {} vertices, {} triangles",
                level,
                self.icosphere.vertex_count(),
                self.icosphere.triangle_count()
            );
        }

        self.frame += 1;
        // The original demo drives its shaders with a per-frame integer
        // counter; keep that unit so the noise animates at the same rate.
        self.phase = self.frame as f32;

        Ok(TickReport {
            rebuilt,
            frame: self.frame,
            phase: self.phase,
        })
    }

    /// Updates the camera projection for a new window size.
    ///
    /// Geometry is untouched; only the aspect ratio and projection matrix
    /// change.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.set_aspect_ratio(width as f32 / height as f32);
        self.camera.update_projection_matrix();
    }

    pub fn icosphere(&self) -> &GeometryData {
        &self.icosphere
    }

    pub fn background(&self) -> &GeometryData {
        &self.background
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_driver() -> SceneDriver {
        let camera = Camera::new(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.5,
        );
        SceneDriver::new(camera, Vector3::new(0.0, 0.0, 0.0), 1.0)
    }

    #[test]
    fn first_tick_builds_the_requested_level() {
        let mut driver = test_driver();
        let controls = FireballControls::default();

        let report = driver.tick(&controls).unwrap();
        assert!(report.rebuilt);
        assert_eq!(report.frame, 1);
        assert_eq!(driver.icosphere().triangle_count(), 20 * 4usize.pow(5));
    }

    #[test]
    fn rebuilds_happen_exactly_when_the_level_changes() {
        let mut driver = test_driver();
        let mut controls = FireballControls {
            tessellation_level: 2,
            ..FireballControls::default()
        };

        let mut rebuild_ticks = Vec::new();
        for tick in 1..=10u64 {
            if tick == 3 {
                controls.tessellation_level = 4;
            }
            if tick == 7 {
                controls.tessellation_level = 1;
            }
            let report = driver.tick(&controls).unwrap();
            assert_eq!(report.frame, tick);
            if report.rebuilt {
                rebuild_ticks.push(tick);
            }
        }

        assert_eq!(rebuild_ticks, vec![1, 3, 7]);
    }

    #[test]
    fn geometry_is_identical_between_unchanged_ticks() {
        let mut driver = test_driver();
        let controls = FireballControls::default();

        driver.tick(&controls).unwrap();
        let snapshot = driver.icosphere().clone();

        for _ in 0..3 {
            let report = driver.tick(&controls).unwrap();
            assert!(!report.rebuilt);
            assert_eq!(driver.icosphere(), &snapshot);
        }
    }

    #[test]
    fn out_of_range_levels_are_clamped_before_generation() {
        let mut driver = test_driver();
        let controls = FireballControls {
            tessellation_level: 99,
            ..FireballControls::default()
        };

        driver.tick(&controls).unwrap();
        assert_eq!(
            driver.icosphere().triangle_count(),
            20 * 4usize.pow(MAX_TESSELLATION_LEVEL as u32)
        );

        // A second tick at the same clamped level must not rebuild.
        let report = driver.tick(&controls).unwrap();
        assert!(!report.rebuilt);
    }

    #[test]
    fn generator_failure_propagates_out_of_tick() {
        let camera = Camera::new(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, 0.0),
            1.0,
        );
        let mut driver = SceneDriver::new(camera, Vector3::new(0.0, 0.0, 0.0), -1.0);

        let err = driver.tick(&FireballControls::default()).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn resize_changes_projection_but_not_geometry() {
        let mut driver = test_driver();
        driver.tick(&FireballControls::default()).unwrap();

        let geometry = driver.icosphere().clone();
        let projection = driver.camera().projection_matrix();

        driver.on_resize(800, 600);

        assert_eq!(driver.icosphere(), &geometry);
        assert_ne!(driver.camera().projection_matrix(), projection);
    }

    #[test]
    fn phase_advances_with_the_frame_counter() {
        let mut driver = test_driver();
        let controls = FireballControls::default();

        for expected in 1..=5u64 {
            let report = driver.tick(&controls).unwrap();
            assert_eq!(report.phase, expected as f32);
        }
    }
}
