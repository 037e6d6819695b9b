use crate::utils::error::Result;

/// Construction-time validation. Shapes that carry caller-supplied input
/// implement this and are checked before a request wrapper will hold them.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
