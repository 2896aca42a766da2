//! Background quad generation.

use cgmath::Vector3;

use super::GeometryData;

/// Generates a unit quad in the XY plane centered at `center`.
///
/// Two counter-clockwise triangles spanning [-1, 1] on both axes with
/// normals along +Z. The background shader passes the XY coordinates
/// straight through as clip space, so this quad covers the full screen.
pub fn generate_quad(center: Vector3<f32>) -> GeometryData {
    let corners = [
        [-1.0, -1.0, 0.0],
        [1.0, -1.0, 0.0],
        [1.0, 1.0, 0.0],
        [-1.0, 1.0, 0.0],
    ];

    GeometryData {
        positions: corners
            .iter()
            .map(|&[x, y, z]| [x + center.x, y + center.y, z + center.z])
            .collect(),
        normals: vec![[0.0, 0.0, 1.0]; 4],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_has_two_triangles() {
        let quad = generate_quad(Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(quad.vertex_count(), 4);
        assert_eq!(quad.triangle_count(), 2);
        assert!(quad.normals.iter().all(|&n| n == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn quad_is_offset_by_center() {
        let quad = generate_quad(Vector3::new(2.0, 0.0, -1.0));
        assert_eq!(quad.positions[0], [1.0, -1.0, -1.0]);
        assert_eq!(quad.positions[2], [3.0, 1.0, -1.0]);
    }
}
