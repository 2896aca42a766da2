//! # Camera
//!
//! A fixed look-at camera with a perspective projection. View and
//! projection matrices are derived from the stored fields and recomputed
//! on demand; nothing else is cached.

use cgmath::{perspective, EuclideanSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3};

/// Maps OpenGL clip-space depth [-1, 1] to wgpu's [0, 1].
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Look-at camera with perspective projection.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub fovy: Rad<f32>,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
    view: Matrix4<f32>,
    projection: Matrix4<f32>,
}

impl Camera {
    /// Creates a camera looking from `eye` toward `target` with Y up.
    pub fn new(eye: Vector3<f32>, target: Vector3<f32>, aspect: f32) -> Self {
        let mut camera = Self {
            eye,
            target,
            up: Vector3::unit_y(),
            fovy: Rad(std::f32::consts::PI / 4.0),
            aspect,
            znear: 0.1,
            zfar: 1000.0,
            view: Matrix4::identity(),
            projection: Matrix4::identity(),
        };
        camera.update();
        camera.update_projection_matrix();
        camera
    }

    /// Recomputes the view matrix from eye/target/up.
    ///
    /// Called once per tick whether or not anything changed; idempotent
    /// when the inputs are unchanged.
    pub fn update(&mut self) {
        self.view = Matrix4::look_at_rh(
            Point3::from_vec(self.eye),
            Point3::from_vec(self.target),
            self.up,
        );
    }

    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Recomputes the projection matrix from the stored scalar fields.
    pub fn update_projection_matrix(&mut self) {
        self.projection =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        self.view
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection
    }

    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection * self.view
    }

    /// Packs the camera state for GPU upload.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_position: [self.eye.x, self.eye.y, self.eye.z, 1.0],
            view_proj: self.view_projection_matrix().into(),
        }
    }
}

/// GPU-side camera data. Must match the `CameraUniform` struct in the
/// shaders exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Eye position in homogeneous coordinates, padded to 16 bytes.
    pub view_position: [f32; 4],
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::new(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, 0.0),
            16.0 / 9.0,
        )
    }

    #[test]
    fn update_is_idempotent() {
        let mut camera = test_camera();
        let first = camera.view_matrix();
        camera.update();
        camera.update();
        assert_eq!(camera.view_matrix(), first);
    }

    #[test]
    fn aspect_change_only_affects_projection() {
        let mut camera = test_camera();
        let view = camera.view_matrix();
        let projection = camera.projection_matrix();

        camera.set_aspect_ratio(1.0);
        camera.update_projection_matrix();

        assert_eq!(camera.view_matrix(), view);
        assert_ne!(camera.projection_matrix(), projection);
    }

    #[test]
    fn uniform_carries_eye_position() {
        let camera = test_camera();
        let uniform = camera.uniform();
        assert_eq!(uniform.view_position, [0.0, 0.0, 5.0, 1.0]);
        assert_eq!(
            uniform.view_proj,
            Into::<[[f32; 4]; 4]>::into(camera.view_projection_matrix())
        );
    }
}
