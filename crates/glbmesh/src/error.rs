/// Errors that can occur during scene import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to parse glTF data: {0}")]
    Parse(String),

    #[error("failed to resolve glTF buffers: {0}")]
    Buffer(String),

    #[error("scene contains no triangle-list primitives with positions")]
    EmptyScene,
}
