use std::path::Path;

use glam::{Mat3, Mat4, Vec3};
use tracing::debug;

use crate::error::ImportError;
use crate::material;
use crate::mesh::{FlatPrimitive, FlatScene};
use crate::normals;
use crate::settings::ImportSettings;
use crate::transform;

/// Import a .gltf/.glb file and flatten it into world-space primitives.
/// External buffers are resolved relative to the file's directory.
pub fn import(path: &Path, settings: &ImportSettings) -> Result<FlatScene, ImportError> {
    let gltf::Gltf { document, blob } =
        gltf::Gltf::open(path).map_err(|e| ImportError::Parse(e.to_string()))?;
    let buffers = gltf::import_buffers(&document, path.parent(), blob)
        .map_err(|e| ImportError::Buffer(e.to_string()))?;

    debug!("parsed glTF asset '{}'", path.display());
    flatten(&document, &buffers, settings)
}

/// Import from in-memory GLB or glTF JSON bytes. Buffers must be embedded
/// (GLB blob or data URIs); there is no base path to resolve against.
pub fn import_slice(bytes: &[u8], settings: &ImportSettings) -> Result<FlatScene, ImportError> {
    let gltf::Gltf { document, blob } =
        gltf::Gltf::from_slice(bytes).map_err(|e| ImportError::Parse(e.to_string()))?;
    let buffers = gltf::import_buffers(&document, None, blob)
        .map_err(|e| ImportError::Buffer(e.to_string()))?;

    flatten(&document, &buffers, settings)
}

/// Walk every document node in order and flatten mesh-bearing nodes into
/// one primitive record per valid triangle-list primitive.
fn flatten(
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
    settings: &ImportSettings,
) -> Result<FlatScene, ImportError> {
    let nodes: Vec<gltf::Node<'_>> = document.nodes().collect();
    let parents = transform::node_parents(document);

    let capacity: usize = nodes
        .iter()
        .filter_map(|n| n.mesh())
        .map(|m| m.primitives().count())
        .sum();
    let mut primitives = Vec::with_capacity(capacity);
    let mut skipped = 0usize;

    for node in &nodes {
        let Some(mesh) = node.mesh() else { continue };
        let world = transform::world_matrix(&nodes, &parents, node.index(), settings.mirror_x);

        for primitive in mesh.primitives() {
            match load_primitive(&primitive, mesh.name(), world, buffers, settings) {
                Some(prim) => primitives.push(prim),
                None => skipped += 1,
            }
        }
    }

    debug!(
        "flattened {} primitives ({} skipped)",
        primitives.len(),
        skipped
    );

    if primitives.is_empty() {
        return Err(ImportError::EmptyScene);
    }
    Ok(FlatScene { primitives })
}

/// Extract one primitive into a world-space record. Returns `None` for
/// primitives this importer does not handle (non-triangle-list topology,
/// no POSITION attribute); those contribute no output slot.
fn load_primitive(
    primitive: &gltf::Primitive<'_>,
    mesh_name: Option<&str>,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
    settings: &ImportSettings,
) -> Option<FlatPrimitive> {
    if primitive.mode() != gltf::mesh::Mode::Triangles {
        return None;
    }

    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
    let positions = reader.read_positions()?;

    let mut prim = FlatPrimitive::new(mesh_name.map(String::from));

    prim.positions = positions
        .map(|p| world.transform_point3(Vec3::from(p)).to_array())
        .collect();

    // Normals take the rotation/scale block only, renormalized. The extra X
    // flip under mirroring is a separate step from the position mirror (the
    // winding correction below covers chirality for faces, not normals).
    let normal_matrix = Mat3::from_mat4(world);
    prim.normals = reader.read_normals().map(|iter| {
        iter.map(|n| {
            let mut n = normal_matrix * Vec3::from(n);
            let len = n.length();
            if len > 1e-8 {
                n /= len;
            }
            if settings.mirror_x {
                n.x = -n.x;
            }
            n.to_array()
        })
        .collect()
    });

    prim.tex_coords = reader
        .read_tex_coords(0)
        .map(|tc| tc.into_f32().collect());

    // COLOR_0 is decoded but not yet carried into the record; its absence
    // can pull in the configured default base color instead.
    let colors: Option<Vec<[f32; 4]>> = reader.read_colors(0).map(|c| c.into_rgba_f32().collect());
    if colors.is_none() && settings.force_default_color {
        prim.base_color_factor = settings.default_color;
    }

    prim.indices = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..prim.positions.len() as u32).collect(),
    };

    // Negating one axis inverts every triangle's signed area; swapping two
    // indices per triangle restores the front-face orientation.
    if settings.mirror_x {
        for tri in prim.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
    }

    let material = primitive.material();
    if material.index().is_some() {
        material::apply_material(&mut prim, &material, buffers);
    }

    // Synthesized normals come from already mirrored, winding-corrected
    // geometry, so they need no further handedness fix.
    if prim.normals.is_none()
        && settings.generate_normals
        && !prim.positions.is_empty()
        && !prim.indices.is_empty()
    {
        prim.normals = Some(normals::compute_vertex_normals(
            &prim.positions,
            &prim.indices,
        ));
    }

    Some(prim)
}
