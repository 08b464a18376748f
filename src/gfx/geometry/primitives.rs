//! # Primitive Shape Generation
//!
//! Functions to generate the primitive shapes the stage falls back to.
//! All shapes are centered on the origin, Y-up, with outward normals.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate an axis-aligned box with the given half extents
///
/// Each face gets its own four vertices so normals stay flat.
pub fn generate_box(half_extents: [f32; 3]) -> GeometryData {
    let [hx, hy, hz] = half_extents;
    let mut data = GeometryData::new();

    // (normal, four corners counter-clockwise seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        ([0.0, 0.0, 1.0], [[-hx, -hy, hz], [hx, -hy, hz], [hx, hy, hz], [-hx, hy, hz]]),
        ([0.0, 0.0, -1.0], [[hx, -hy, -hz], [-hx, -hy, -hz], [-hx, hy, -hz], [hx, hy, -hz]]),
        ([-1.0, 0.0, 0.0], [[-hx, -hy, -hz], [-hx, -hy, hz], [-hx, hy, hz], [-hx, hy, -hz]]),
        ([1.0, 0.0, 0.0], [[hx, -hy, hz], [hx, -hy, -hz], [hx, hy, -hz], [hx, hy, hz]]),
        ([0.0, 1.0, 0.0], [[-hx, hy, hz], [hx, hy, hz], [hx, hy, -hz], [-hx, hy, -hz]]),
        ([0.0, -1.0, 0.0], [[-hx, -hy, -hz], [hx, -hy, -hz], [hx, -hy, hz], [-hx, -hy, hz]]),
    ];

    for (normal, corners) in faces {
        let base = data.vertices.len() as u32;
        for corner in corners {
            data.vertices.push(corner);
            data.normals.push(normal);
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a unit cube centered at the origin
pub fn generate_cube() -> GeometryData {
    generate_box([0.5, 0.5, 0.5])
}

/// Generate a flat plane in the XZ plane facing +Y
pub fn generate_plane(width: f32, depth: f32, width_segments: u32, depth_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let d_segs = depth_segments.max(1);

    for z in 0..=d_segs {
        let v = z as f32 / d_segs as f32;
        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;
            data.vertices.push([(u - 0.5) * width, 0.0, (v - 0.5) * depth]);
            data.normals.push([0.0, 1.0, 0.0]);
        }
    }

    for z in 0..d_segs {
        for x in 0..w_segs {
            let i = z * (w_segs + 1) + x;
            let next_row = i + w_segs + 1;

            // Counter-clockwise seen from +Y
            data.indices.extend_from_slice(&[i, next_row, i + 1]);
            data.indices.extend_from_slice(&[next_row, next_row + 1, i + 1]);
        }
    }

    data
}

/// Generate a capped cylinder along the Y axis
///
/// Extends from `-height / 2` to `height / 2`.
pub fn generate_cylinder(radius: f32, height: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = segments.max(3);
    let half_height = height * 0.5;

    // Side vertices, bottom/top pairs
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let (sin_a, cos_a) = angle.sin_cos();
        let x = radius * cos_a;
        let z = radius * sin_a;

        data.vertices.push([x, -half_height, z]);
        data.normals.push([cos_a, 0.0, sin_a]);
        data.vertices.push([x, half_height, z]);
        data.normals.push([cos_a, 0.0, sin_a]);
    }

    for i in 0..segs {
        let bottom = i * 2;
        let top = bottom + 1;
        let bottom_next = bottom + 2;
        let top_next = bottom + 3;

        data.indices.extend_from_slice(&[bottom, top, bottom_next]);
        data.indices.extend_from_slice(&[top, top_next, bottom_next]);
    }

    // Caps get their own rim vertices so their normals are flat
    for (y, normal_y) in [(-half_height, -1.0_f32), (half_height, 1.0)] {
        let center = data.vertices.len() as u32;
        data.vertices.push([0.0, y, 0.0]);
        data.normals.push([0.0, normal_y, 0.0]);

        for i in 0..=segs {
            let angle = i as f32 * 2.0 * PI / segs as f32;
            data.vertices.push([radius * angle.cos(), y, radius * angle.sin()]);
            data.normals.push([0.0, normal_y, 0.0]);
        }

        for i in 0..segs {
            let current = center + 1 + i;
            let next = current + 1;
            if normal_y > 0.0 {
                data.indices.extend_from_slice(&[center, next, current]);
            } else {
                data.indices.extend_from_slice(&[center, current, next]);
            }
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_normal(data: &GeometryData, triangle: &[u32]) -> [f32; 3] {
        let a = data.vertices[triangle[0] as usize];
        let b = data.vertices[triangle[1] as usize];
        let c = data.vertices[triangle[2] as usize];
        let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        [
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ]
    }

    fn assert_winding_matches_normals(data: &GeometryData) {
        for triangle in data.indices.chunks(3) {
            let geometric = face_normal(data, triangle);
            let stored = data.normals[triangle[0] as usize];
            let dot = geometric[0] * stored[0] + geometric[1] * stored[1] + geometric[2] * stored[2];
            assert!(dot > 0.0, "triangle {triangle:?} faces inward");
        }
    }

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.triangle_count(), 12);
        assert_winding_matches_normals(&cube);
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0, 2, 2);
        assert_eq!(plane.vertex_count(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
        assert_winding_matches_normals(&plane);
    }

    #[test]
    fn test_cylinder_caps_face_outward() {
        let cylinder = generate_cylinder(1.0, 2.0, 12);
        assert_eq!(cylinder.vertices.len(), cylinder.normals.len());
        assert!(cylinder.indices.iter().all(|&i| (i as usize) < cylinder.vertex_count()));
        assert_winding_matches_normals(&cylinder);
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut merged = generate_cube();
        merged.append(&generate_cube().translated([2.0, 0.0, 0.0]));
        assert_eq!(merged.vertex_count(), 48);
        assert_eq!(*merged.indices.iter().max().unwrap(), 47);
        let appended_x = merged.vertices[24..].iter().map(|v| v[0]);
        assert_eq!(appended_x.clone().fold(f32::MIN, f32::max), 2.5);
        assert_eq!(appended_x.fold(f32::MAX, f32::min), 1.5);
    }
}
