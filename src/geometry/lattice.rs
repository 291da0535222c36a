use glam::Vec3;

/// Edge length of every lattice cube.
const CUBE_SIZE: f32 = 1.0;

/// Vertices emitted per cube: 6 faces x 2 triangles x 3 vertices.
pub const VERTICES_PER_CUBE: usize = 36;

/// Corner signs of the 36 unrolled cube vertices, grouped by face
/// (top, bottom, front, back, left, right), two triangles per face.
const CUBE_CORNERS: [[f32; 3]; VERTICES_PER_CUBE] = [
    // Top
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    // Bottom
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    // Front
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    // Back
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    // Left
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    // Right
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
];

/// 36-byte lattice vertex: position, cube color, and shift direction.
///
/// The shift direction points from the corner through the cube center. The
/// vertex shader renders `position + shift_dir * shift`, so a positive shift
/// pulls every cube's corners inward and the whole lattice appears to
/// breathe.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LatticeVertex {
    /// World-space corner position.
    pub position: [f32; 3],
    /// Solid cube color, shared by all 36 vertices of a cube.
    pub color: [f32; 3],
    /// Per-vertex displacement direction scaled by the shift uniform.
    pub shift_dir: [f32; 3],
}

impl LatticeVertex {
    /// Vertex buffer layout matching `@location(0..=2)` in the lattice
    /// shader.
    #[must_use]
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        }
    }
}

/// Number of vertices [`generate_lattice`] emits for `half_extent`:
/// `(2N + 1)^3 * 36`, or `None` if that overflows `usize`.
#[must_use]
pub fn lattice_vertex_count(half_extent: u32) -> Option<usize> {
    let side = usize::try_from(half_extent)
        .ok()?
        .checked_mul(2)?
        .checked_add(1)?;
    side.checked_mul(side)?
        .checked_mul(side)?
        .checked_mul(VERTICES_PER_CUBE)
}

/// Map a grid coordinate in `[-n, n]` linearly onto `[0, 1]`.
fn axis_color(coord: i32, half_extent: i32) -> f32 {
    if half_extent == 0 {
        return 0.0;
    }
    let n = f64::from(half_extent);
    ((f64::from(coord) + n) / (2.0 * n)) as f32
}

/// Build the unindexed triangle list for every cube in `[-N, N]^3`.
///
/// Pure and deterministic: the same `half_extent` always yields a
/// bit-identical vertex list. Returns `None` when the vertex count is not
/// addressable. Callers bound the size first with
/// [`lattice_vertex_count`]; this allocates the whole list up front.
#[must_use]
pub fn generate_lattice(half_extent: u32) -> Option<Vec<LatticeVertex>> {
    let n = i32::try_from(half_extent).ok()?;
    let mut vertices = Vec::with_capacity(lattice_vertex_count(half_extent)?);

    for x in -n..=n {
        for y in -n..=n {
            for z in -n..=n {
                let center = Vec3::new(x as f32, y as f32, z as f32);
                let color = [
                    axis_color(x, n),
                    axis_color(y, n),
                    axis_color(z, n),
                ];
                vertices.extend(CUBE_CORNERS.iter().map(|&corner| {
                    let corner = Vec3::from_array(corner);
                    LatticeVertex {
                        position: (center + corner * (CUBE_SIZE / 2.0))
                            .to_array(),
                        color,
                        shift_dir: (-corner).to_array(),
                    }
                }));
            }
        }
    }

    Some(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_matches_formula() {
        assert_eq!(generate_lattice(1).unwrap().len(), 972);
        assert_eq!(lattice_vertex_count(1), Some(27 * 36));
        assert_eq!(generate_lattice(0).unwrap().len(), 36);
        assert_eq!(
            Some(generate_lattice(2).unwrap().len()),
            lattice_vertex_count(2)
        );
        assert_eq!(lattice_vertex_count(30), Some(226_981 * 36));
    }

    #[test]
    fn huge_extents_do_not_overflow() {
        assert_eq!(lattice_vertex_count(u32::MAX), None);
        assert!(generate_lattice(u32::MAX).is_none());
        assert!(generate_lattice(1 << 31).is_none());
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_lattice(2).unwrap();
        let b = generate_lattice(2).unwrap();
        let a_bytes: &[u8] = bytemuck::cast_slice(&a);
        let b_bytes: &[u8] = bytemuck::cast_slice(&b);
        assert_eq!(a_bytes, b_bytes);
    }

    #[test]
    fn vertex_is_36_bytes() {
        assert_eq!(size_of::<LatticeVertex>(), 36);
        assert_eq!(LatticeVertex::buffer_layout().array_stride, 36);
    }

    #[test]
    fn each_cube_has_one_color() {
        let verts = generate_lattice(1).unwrap();
        for cube in verts.chunks(VERTICES_PER_CUBE) {
            assert!(cube.iter().all(|v| v.color == cube[0].color));
        }
    }

    #[test]
    fn colors_span_unit_range() {
        let verts = generate_lattice(2).unwrap();
        let first = verts.first().unwrap();
        let last = verts.last().unwrap();
        assert_eq!(first.color, [0.0, 0.0, 0.0]);
        assert_eq!(last.color, [1.0, 1.0, 1.0]);
        assert!(verts
            .iter()
            .flat_map(|v| v.color)
            .all(|c| (0.0..=1.0).contains(&c)));
    }

    #[test]
    fn single_cube_is_black() {
        let verts = generate_lattice(0).unwrap();
        assert!(verts.iter().all(|v| v.color == [0.0; 3]));
    }

    #[test]
    fn shift_direction_points_at_cube_center() {
        let verts = generate_lattice(1).unwrap();
        for (i, cube) in verts.chunks(VERTICES_PER_CUBE).enumerate() {
            // Cubes are emitted in x-major, then y, then z order.
            let x = (i / 9) as f32 - 1.0;
            let y = ((i / 3) % 3) as f32 - 1.0;
            let z = (i % 3) as f32 - 1.0;
            let center = Vec3::new(x, y, z);
            for v in cube {
                let toward = Vec3::from_array(v.position)
                    + Vec3::from_array(v.shift_dir) * (CUBE_SIZE / 2.0);
                assert!(toward.abs_diff_eq(center, 1e-6));
            }
        }
    }

    #[test]
    fn each_face_is_planar() {
        let verts = generate_lattice(0).unwrap();
        for face in verts.chunks(6) {
            let p: Vec<Vec3> =
                face.iter().map(|v| Vec3::from_array(v.position)).collect();
            let normal = (p[1] - p[0]).cross(p[2] - p[0]);
            assert!(normal.length() > 0.0);
            for q in &p[3..] {
                assert!((*q - p[0]).dot(normal).abs() < 1e-6);
            }
        }
    }
}
