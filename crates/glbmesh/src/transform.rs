use glam::{Mat4, Vec3};

/// Build a parent-index map over every node in the document. glTF only
/// stores child links, so the map comes from one scan over all nodes.
pub(crate) fn node_parents(document: &gltf::Document) -> Vec<Option<usize>> {
    let mut parents = vec![None; document.nodes().count()];
    for node in document.nodes() {
        for child in node.children() {
            parents[child.index()] = Some(node.index());
        }
    }
    parents
}

/// World matrix for the node at `index`: local transforms composed
/// root-to-leaf, then optionally left-multiplied by the X mirror.
pub(crate) fn world_matrix(
    nodes: &[gltf::Node<'_>],
    parents: &[Option<usize>],
    index: usize,
    mirror_x: bool,
) -> Mat4 {
    let mut chain = Vec::new();
    let mut current = Some(index);
    while let Some(i) = current {
        chain.push(Mat4::from_cols_array_2d(&nodes[i].transform().matrix()));
        current = parents[i];
    }
    compose_world(&chain, mirror_x)
}

/// Compose a leaf-to-root chain of local transforms into a world matrix.
/// Ancestors apply before descendants: `world = root * … * node`.
pub(crate) fn compose_world(chain_leaf_to_root: &[Mat4], mirror_x: bool) -> Mat4 {
    let mut world = Mat4::IDENTITY;
    for local in chain_leaf_to_root.iter().rev() {
        world *= *local;
    }
    if mirror_x {
        world = mirror_x_matrix() * world;
    }
    world
}

/// Diagonal matrix negating the X axis (handedness conversion).
pub(crate) fn mirror_x_matrix() -> Mat4 {
    Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0))
}
