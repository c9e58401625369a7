use thiserror::Error;

#[derive(Error, Debug)]
pub enum UmbraError {
    #[error("Degenerate geometry: {0}")]
    GeometryDegenerate(String),

    #[error("Invalid body: {0}")]
    InvalidBody(String),

    #[error("Invalid shadow parameter: {0}")]
    InvalidShadowParameter(String),
}

impl PartialEq for UmbraError {
    fn eq(&self, other: &Self) -> bool {
        use UmbraError::*;
        match (self, other) {
            (GeometryDegenerate(a), GeometryDegenerate(b)) => a == b,
            (InvalidBody(a), InvalidBody(b)) => a == b,
            (InvalidShadowParameter(a), InvalidShadowParameter(b)) => a == b,
            _ => false,
        }
    }
}

impl UmbraError {
    /// Compare only the variant and ignore the diagnostic message.
    pub fn variant_eq(&self, other: &UmbraError) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
