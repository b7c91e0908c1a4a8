/// Import-time configuration. Passed by reference into the import entry
/// points, so a given (asset, settings) pair always produces the same scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSettings {
    /// Mirror the scene along X on load (right-handed source to an
    /// X-flipped target convention). Also swaps triangle winding and flips
    /// normal X so front faces stay consistent.
    pub mirror_x: bool,
    /// Synthesize smooth vertex normals for primitives that ship none.
    pub generate_normals: bool,
    /// Base color applied by `force_default_color`. RGBA, not clamped.
    pub default_color: [f32; 4],
    /// Overwrite the base-color factor with `default_color` whenever a
    /// primitive carries no COLOR_0 attribute.
    pub force_default_color: bool,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            mirror_x: true,
            generate_normals: true,
            default_color: [1.0, 1.0, 1.0, 1.0],
            force_default_color: false,
        }
    }
}
