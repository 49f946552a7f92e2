//! Errors raised at the boundary of the frame computation

/// Everything past input validation is total, so this is the only failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CubeError {
    /// The angle was absent or not an integer
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CubeError {
    pub fn missing_angle() -> Self {
        CubeError::InvalidInput("missing required parameter `angle`".to_string())
    }
}

pub type Result<T> = std::result::Result<T, CubeError>;
