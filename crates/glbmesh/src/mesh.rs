/// Base-color image reference extracted from a material. A primitive carries
/// at most one of these, so path and byte variants cannot coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum BaseColorImage {
    /// External image, path as written in the asset (relative to it).
    Path(String),
    /// Image bytes owned by the primitive (data URI or embedded buffer view).
    Embedded(Vec<u8>),
}

/// A single world-space triangle-list primitive, flattened out of the scene
/// graph. All buffers are owned; nothing references the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPrimitive {
    /// Source mesh name, if the asset provides one.
    pub name: Option<String>,
    /// World-space positions, one per vertex.
    pub positions: Vec<[f32; 3]>,
    /// Unit-length world-space normals, one per vertex. `None` when the
    /// source had none and normal generation was disabled.
    pub normals: Option<Vec<[f32; 3]>>,
    /// First UV set, one per vertex.
    pub tex_coords: Option<Vec<[f32; 2]>>,
    /// Triangle-list indices, always populated (synthesized when the source
    /// primitive was unindexed).
    pub indices: Vec<u32>,
    pub base_color_factor: [f32; 4],
    pub metallic_factor: f32,
    pub roughness_factor: f32,
    /// Material or base-color texture carries transparency.
    pub has_alpha: bool,
    pub base_color_image: Option<BaseColorImage>,
    /// Declared MIME type of the base-color image, when the asset states one.
    pub mime_type: Option<String>,
}

impl FlatPrimitive {
    pub(crate) fn new(name: Option<String>) -> Self {
        Self {
            name,
            positions: Vec::new(),
            normals: None,
            tex_coords: None,
            indices: Vec::new(),
            base_color_factor: [0.0; 4],
            metallic_factor: 0.0,
            roughness_factor: 0.0,
            has_alpha: false,
            base_color_image: None,
            mime_type: None,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// The flattened result of an import: an ordered sequence of world-space
/// primitives (node order, then primitive order within each mesh).
#[derive(Debug, Clone)]
pub struct FlatScene {
    pub primitives: Vec<FlatPrimitive>,
}

impl FlatScene {
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlatPrimitive> {
        self.primitives.iter()
    }

    /// Center the scene on the origin and scale it uniformly so its largest
    /// bounding-box extent becomes 1.0. Positions are rewritten in place;
    /// normals, UVs, and indices are untouched (the scale is uniform, so
    /// normal directions stay valid). Running it twice is a no-op within
    /// floating tolerance.
    pub fn normalize_to_unit_cube(&mut self) {
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        let mut any = false;

        for prim in &self.primitives {
            for p in &prim.positions {
                any = true;
                for axis in 0..3 {
                    min[axis] = min[axis].min(p[axis]);
                    max[axis] = max[axis].max(p[axis]);
                }
            }
        }
        if !any {
            return;
        }

        let center = [
            (min[0] + max[0]) * 0.5,
            (min[1] + max[1]) * 0.5,
            (min[2] + max[2]) * 0.5,
        ];
        let mut extent = (max[0] - min[0])
            .max(max[1] - min[1])
            .max(max[2] - min[2]);
        if extent < 1e-6 {
            // Degenerate box: recenter only.
            extent = 1.0;
        }
        let scale = 1.0 / extent;

        for prim in &mut self.primitives {
            for p in &mut prim.positions {
                p[0] = (p[0] - center[0]) * scale;
                p[1] = (p[1] - center[1]) * scale;
                p[2] = (p[2] - center[2]) * scale;
            }
        }
    }
}
