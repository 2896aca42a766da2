//! # Icosphere Generation
//!
//! Builds a sphere approximation by recursively subdividing the faces of a
//! regular icosahedron and re-projecting new vertices onto the sphere
//! surface. Compared to a UV sphere the triangles are near-uniform in
//! area, which keeps procedural vertex displacement looking even across
//! the whole surface.

use cgmath::{InnerSpace, Vector3};
use std::collections::HashMap;
use thiserror::Error;

use super::GeometryData;

/// Highest subdivision level the scene driver will request.
///
/// Level 8 is ~1.3M triangles; the generator itself accepts any
/// non-negative level and leaves range clamping to the caller.
pub const MAX_SUBDIVISION_LEVEL: i32 = 8;

/// Errors produced by geometry generators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// A generator argument was out of its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

// Golden-ratio construction: the 12 icosahedron vertices are the cyclic
// permutations of (0, ±1, ±phi), normalized to the target radius later.
const PHI: f32 = 1.618_034;

#[rustfmt::skip]
const BASE_VERTICES: [[f32; 3]; 12] = [
    [-1.0,  PHI,  0.0],
    [ 1.0,  PHI,  0.0],
    [-1.0, -PHI,  0.0],
    [ 1.0, -PHI,  0.0],
    [ 0.0, -1.0,  PHI],
    [ 0.0,  1.0,  PHI],
    [ 0.0, -1.0, -PHI],
    [ 0.0,  1.0, -PHI],
    [ PHI,  0.0, -1.0],
    [ PHI,  0.0,  1.0],
    [-PHI,  0.0, -1.0],
    [-PHI,  0.0,  1.0],
];

// Counter-clockwise when viewed from outside the sphere.
#[rustfmt::skip]
const BASE_FACES: [[u32; 3]; 20] = [
    [0, 11,  5], [0,  5,  1], [0,  1,  7], [0,  7, 10], [0, 10, 11],
    [1,  5,  9], [5, 11,  4], [11, 10, 2], [10, 7,  6], [7,  1,  8],
    [3,  9,  4], [3,  4,  2], [3,  2,  6], [3,  6,  8], [3,  8,  9],
    [4,  9,  5], [2,  4, 11], [6,  2, 10], [8,  6,  7], [9,  8,  1],
];

/// Generates an icosphere of the given `radius` about `center`.
///
/// Level 0 is the base icosahedron (12 vertices, 20 faces). Each further
/// level splits every face into four, re-projecting edge midpoints onto
/// the sphere, so the output has `20 * 4^level` faces and
/// `12 + 10 * (4^level - 1)` vertices. Every vertex normal is the
/// normalized direction from `center` to the vertex.
///
/// The generator is stateless and deterministic: identical inputs yield
/// identical buffers, independent of call order.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidArgument`] when `radius` is not a
/// positive finite number, `center` is not finite, or `level` is
/// negative. Out-of-range positive levels are accepted; clamping to
/// [`MAX_SUBDIVISION_LEVEL`] is the caller's job.
pub fn generate_icosphere(
    center: Vector3<f32>,
    radius: f32,
    level: i32,
) -> Result<GeometryData, GeometryError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::InvalidArgument(format!(
            "radius must be positive and finite, got {radius}"
        )));
    }
    if !(center.x.is_finite() && center.y.is_finite() && center.z.is_finite()) {
        return Err(GeometryError::InvalidArgument(
            "center must be finite".into(),
        ));
    }
    if level < 0 {
        return Err(GeometryError::InvalidArgument(format!(
            "subdivision level must be non-negative, got {level}"
        )));
    }

    let mut positions: Vec<Vector3<f32>> = BASE_VERTICES
        .iter()
        .map(|&[x, y, z]| center + Vector3::new(x, y, z).normalize() * radius)
        .collect();
    let mut faces: Vec<[u32; 3]> = BASE_FACES.to_vec();

    for _ in 0..level {
        // One cache per pass: adjacent faces share edges, and each shared
        // edge must produce exactly one midpoint vertex or the mesh grows
        // duplicate seams and stops being manifold.
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut subdivided = Vec::with_capacity(faces.len() * 4);

        for &[a, b, c] in &faces {
            let ab = midpoint_index(&mut positions, &mut midpoints, center, radius, a, b);
            let bc = midpoint_index(&mut positions, &mut midpoints, center, radius, b, c);
            let ca = midpoint_index(&mut positions, &mut midpoints, center, radius, c, a);

            // Three corner triangles plus the center one, all keeping the
            // parent's winding.
            subdivided.push([a, ab, ca]);
            subdivided.push([b, bc, ab]);
            subdivided.push([c, ca, bc]);
            subdivided.push([ab, bc, ca]);
        }

        faces = subdivided;
    }

    let normals = positions
        .iter()
        .map(|&p| {
            let n = (p - center).normalize();
            [n.x, n.y, n.z]
        })
        .collect();

    Ok(GeometryData {
        positions: positions.iter().map(|&p| [p.x, p.y, p.z]).collect(),
        normals,
        indices: faces.iter().flatten().copied().collect(),
    })
}

/// Returns the index of the midpoint vertex of edge (a, b), creating and
/// re-projecting it onto the sphere on first use.
fn midpoint_index(
    positions: &mut Vec<Vector3<f32>>,
    cache: &mut HashMap<(u32, u32), u32>,
    center: Vector3<f32>,
    radius: f32,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&index) = cache.get(&key) {
        return index;
    }

    let mid = (positions[a as usize] + positions[b as usize]) * 0.5;
    let projected = center + (mid - center).normalize() * radius;

    let index = positions.len() as u32;
    positions.push(projected);
    cache.insert(key, index);
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;
    use std::collections::HashMap;

    fn origin() -> Vector3<f32> {
        Vector3::new(0.0, 0.0, 0.0)
    }

    fn expected_vertex_count(level: i32) -> usize {
        12 + 10 * (4usize.pow(level as u32) - 1)
    }

    fn expected_face_count(level: i32) -> usize {
        20 * 4usize.pow(level as u32)
    }

    #[test]
    fn level_zero_is_the_base_icosahedron() {
        let sphere = generate_icosphere(origin(), 1.0, 0).unwrap();
        assert_eq!(sphere.vertex_count(), 12);
        assert_eq!(sphere.triangle_count(), 20);

        // All base vertices sit on the unit sphere after normalization.
        for p in &sphere.positions {
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn vertex_and_face_counts_match_closed_form() {
        for level in 0..=6 {
            let sphere = generate_icosphere(origin(), 1.0, level).unwrap();
            assert_eq!(
                sphere.vertex_count(),
                expected_vertex_count(level),
                "vertex count at level {level}"
            );
            assert_eq!(
                sphere.triangle_count(),
                expected_face_count(level),
                "face count at level {level}"
            );
        }
    }

    #[test]
    fn vertices_lie_on_the_sphere() {
        let center = Vector3::new(1.5, -2.0, 0.25);
        let radius = 3.0;
        let sphere = generate_icosphere(center, radius, 4).unwrap();

        for p in &sphere.positions {
            let d = Vector3::new(p[0], p[1], p[2]) - center;
            let distance = (d.x * d.x + d.y * d.y + d.z * d.z).sqrt();
            assert!(
                (distance - radius).abs() / radius < 1e-5,
                "vertex at distance {distance}, expected {radius}"
            );
        }
    }

    #[test]
    fn normals_point_radially_outward() {
        let center = Vector3::new(0.5, 0.5, 0.5);
        let sphere = generate_icosphere(center, 2.0, 3).unwrap();

        for (p, n) in sphere.positions.iter().zip(sphere.normals.iter()) {
            let dir = (Vector3::new(p[0], p[1], p[2]) - center).normalize();
            let normal = Vector3::new(n[0], n[1], n[2]);
            assert!((normal.magnitude() - 1.0).abs() < 1e-5);
            assert!((dir - normal).magnitude() < 1e-5);
        }
    }

    #[test]
    fn face_indices_are_distinct_and_in_bounds() {
        for level in 0..=4 {
            let sphere = generate_icosphere(origin(), 1.0, level).unwrap();
            let n = sphere.vertex_count() as u32;
            for tri in sphere.indices.chunks_exact(3) {
                assert!(tri[0] < n && tri[1] < n && tri[2] < n);
                assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
            }
        }
    }

    #[test]
    fn every_edge_is_shared_by_exactly_two_faces() {
        for level in 1..=3 {
            let sphere = generate_icosphere(origin(), 1.0, level).unwrap();
            let mut edge_uses: HashMap<(u32, u32), u32> = HashMap::new();

            for tri in sphere.indices.chunks_exact(3) {
                for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                    let key = if a < b { (a, b) } else { (b, a) };
                    *edge_uses.entry(key).or_default() += 1;
                }
            }

            assert!(
                edge_uses.values().all(|&count| count == 2),
                "open or over-shared edge at level {level}"
            );
        }
    }

    #[test]
    fn no_duplicate_vertices_at_shared_midpoints() {
        let sphere = generate_icosphere(origin(), 1.0, 3).unwrap();
        let mut seen: HashMap<(i64, i64, i64), u32> = HashMap::new();

        for (i, p) in sphere.positions.iter().enumerate() {
            // Quantize well below the subdivision edge length so distinct
            // vertices never collide.
            let key = (
                (p[0] as f64 * 1e6).round() as i64,
                (p[1] as f64 * 1e6).round() as i64,
                (p[2] as f64 * 1e6).round() as i64,
            );
            if let Some(&other) = seen.get(&key) {
                panic!("vertices {other} and {i} coincide at {p:?}");
            }
            seen.insert(key, i as u32);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let center = Vector3::new(0.0, 1.0, 0.0);
        let first = generate_icosphere(center, 1.5, 4).unwrap();
        let second = generate_icosphere(center, 1.5, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_radius_is_rejected() {
        let err = generate_icosphere(origin(), 0.0, 0).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn negative_radius_and_nan_are_rejected() {
        assert!(generate_icosphere(origin(), -1.0, 2).is_err());
        assert!(generate_icosphere(origin(), f32::NAN, 2).is_err());
        assert!(generate_icosphere(Vector3::new(f32::INFINITY, 0.0, 0.0), 1.0, 2).is_err());
    }

    #[test]
    fn negative_level_is_rejected() {
        let err = generate_icosphere(origin(), 1.0, -1).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }
}
