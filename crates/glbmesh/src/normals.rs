/// Smooth per-vertex normals from triangle geometry, for primitives that
/// ship none. Each triangle's raw (non-unit) cross product is accumulated
/// into its three vertices, so large triangles weigh more, then every
/// accumulator is normalized. Triangles referencing out-of-range indices
/// are skipped rather than treated as fatal.
///
/// Runs on final (already transformed and winding-corrected) geometry, so
/// the result needs no further handedness fix.
pub(crate) fn compute_vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let vertex_count = positions.len();
    let mut normals = vec![[0.0f32; 3]; vertex_count];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if i0 >= vertex_count || i1 >= vertex_count || i2 >= vertex_count {
            continue;
        }

        let v0 = positions[i0];
        let v1 = positions[i1];
        let v2 = positions[i2];

        let u = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let v = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

        let face = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];

        for &i in &[i0, i1, i2] {
            normals[i][0] += face[0];
            normals[i][1] += face[1];
            normals[i][2] += face[2];
        }
    }

    for n in &mut normals {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        if len > 1e-8 {
            n[0] /= len;
            n[1] /= len;
            n[2] /= len;
        }
    }

    normals
}
