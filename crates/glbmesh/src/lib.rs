//! glbmesh - Flattened glTF/GLB scene import
//!
//! Loads a glTF 2.0 asset and collapses its node hierarchy into a flat list
//! of world-space triangle primitives ready for engine consumption:
//! - hierarchical transforms baked into vertex positions,
//! - optional X-mirror handedness conversion with consistent winding and
//!   normal correction,
//! - smooth normal synthesis for primitives that ship none,
//! - PBR material extraction with base-color image capture and
//!   header-based alpha detection.

mod error;
mod loader;
mod material;
mod mesh;
mod normals;
mod settings;
mod transform;

pub use error::ImportError;
pub use loader::{import, import_slice};
pub use mesh::{BaseColorImage, FlatPrimitive, FlatScene};
pub use settings::ImportSettings;
