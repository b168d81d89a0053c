use crate::types::DbId;

/// Domain-level failures raised by the service layer.
///
/// The repository never produces these; it signals absence with `Option`
/// or `bool` and the service turns that into a `CoreError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },
}
