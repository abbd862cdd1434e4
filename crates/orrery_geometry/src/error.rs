use orrery_math::error::MathError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("corner index {index} is out of range")]
    CornerIndexOutOfRange { index: usize },
    #[error("a best-fit plane needs at least three points")]
    DegeneratePolygon,
    #[error(transparent)]
    Math(#[from] MathError),
}
