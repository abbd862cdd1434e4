use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// The determinant is too close to zero for the inverse to be defined.
    #[error("matrix is singular, inverse is undefined")]
    SingularMatrix,
    /// Normalization of a vector or quaternion whose length is too close to
    /// zero for the direction to be meaningful.
    #[error("length is too close to zero to normalize")]
    DegenerateLength,
}
